//! Channel value type

use serde::{Deserialize, Serialize};

use super::risk::Risk;

/// A release channel: track/risk/branch plus the derived display name.
///
/// A *normalized* channel (the output of [`Channel::parse`] or
/// [`Channel::clean`]) always has a concrete risk and
/// `name == [track/]risk[/branch]` with the track omitted when empty. A
/// *verbatim* channel (the output of [`Channel::parse_verbatim`]) may have
/// any subset of its fields empty and its name unset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub track: String,
    #[serde(default)]
    pub risk: Risk,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub branch: String,
}

impl Channel {
    /// Whether every field is empty (the `Default` value).
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.track.is_empty()
            && self.risk.is_unknown()
            && self.branch.is_empty()
    }

    /// Normalize track, risk and name.
    ///
    /// The "latest" track collapses to the empty default and a missing risk
    /// becomes stable. Idempotent.
    pub fn clean(&self) -> Channel {
        let track = if self.track == "latest" {
            ""
        } else {
            self.track.as_str()
        };
        let risk = if self.risk.is_unknown() {
            Risk::Stable
        } else {
            self.risk
        };

        let mut name = risk.to_string();
        if !track.is_empty() {
            name = format!("{track}/{name}");
        }
        if !self.branch.is_empty() {
            name = format!("{name}/{}", self.branch);
        }

        Channel {
            name,
            track: track.to_string(),
            risk,
            branch: self.branch.clone(),
        }
    }

    /// Full name of the channel, inclusive of the default track "latest".
    ///
    /// Only meaningful on a normalized channel, whose name always carries a
    /// risk segment.
    pub fn full(&self) -> String {
        if self.track.is_empty() {
            format!("latest/{}", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Whether this verbatim channel is a track and nothing else.
    pub fn verbatim_track_only(&self) -> bool {
        !self.track.is_empty() && self.risk.is_unknown() && self.branch.is_empty()
    }

    /// Whether this verbatim channel is a risk and nothing else.
    pub fn verbatim_risk_only(&self) -> bool {
        self.track.is_empty() && !self.risk.is_unknown() && self.branch.is_empty()
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_collapses_latest_track() {
        let ch = Channel {
            name: "latest/stable".to_string(),
            track: "latest".to_string(),
            risk: Risk::Stable,
            branch: String::new(),
        };
        assert_eq!(
            ch.clean(),
            Channel {
                name: "stable".to_string(),
                track: String::new(),
                risk: Risk::Stable,
                branch: String::new(),
            }
        );
    }

    #[test]
    fn clean_defaults_missing_risk_to_stable() {
        let ch = Channel {
            track: "1.0".to_string(),
            ..Default::default()
        };
        let cleaned = ch.clean();
        assert_eq!(cleaned.risk, Risk::Stable);
        assert_eq!(cleaned.name, "1.0/stable");
    }

    #[test]
    fn clean_is_idempotent() {
        for raw in ["latest", "stable", "1.0/beta/foo", "candidate/bar"] {
            let once = Channel::parse_verbatim(raw).unwrap().clean();
            assert_eq!(once.clean(), once, "clean not idempotent for {raw}");
        }
    }

    #[test]
    fn full_includes_default_track() {
        let tests = [
            ("stable", "latest/stable"),
            ("latest/stable", "latest/stable"),
            ("1.0/edge", "1.0/edge"),
            ("1.0/beta/foo", "1.0/beta/foo"),
            ("1.0", "1.0/stable"),
            ("candidate/foo", "latest/candidate/foo"),
        ];
        for (raw, want) in tests {
            assert_eq!(Channel::parse(raw).unwrap().full(), want);
        }
    }

    #[test]
    fn serde_shape_and_round_trip() {
        let ch = Channel::parse("20.04/stable").unwrap();
        let json = serde_json::to_string(&ch).unwrap();
        assert_eq!(
            json,
            r#"{"name":"20.04/stable","track":"20.04","risk":"stable"}"#
        );
        let back: Channel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ch);

        let with_branch = Channel::parse("1.0/beta/foo").unwrap();
        let json = serde_json::to_string(&with_branch).unwrap();
        assert_eq!(
            json,
            r#"{"name":"1.0/beta/foo","track":"1.0","risk":"beta","branch":"foo"}"#
        );
        let back: Channel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, with_branch);
    }
}

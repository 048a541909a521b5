//! System descriptors
//!
//! A [`System`] is either an OS pinned to a channel, like a [`Base`], or a
//! resource-identified image, never both. Systems render to and parse from
//! a series string for backwards compatibility: either a legacy short name
//! like `focal` or the tagged form
//! `system#os=ubuntu#channel=20.04/stable#resource=imagename`.
//!
//! [`Base`]: crate::base::Base

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::error::{OsBaseError, Result};
use crate::os::Os;
use crate::series;

const SERIES_PREFIX: &str = "system";

/// An OS/channel pair or a resource identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct System {
    /// OS name; mutually exclusive with `resource`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub os: String,
    /// Normalized channel; only valid together with `os`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
    /// Resource name identifying an artifact directly.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub resource: String,
}

impl System {
    /// Check structural validity: exactly one of os+channel or resource.
    pub fn validate(&self) -> Result<()> {
        if self.os.is_empty() && self.resource.is_empty() {
            return Err(OsBaseError::not_valid(
                "one of os or resource must be specified",
            ));
        }
        if !self.os.is_empty() {
            if !self.resource.is_empty() {
                return Err(OsBaseError::not_valid("resource cannot be specified with os"));
            }
            if !Os::is_valid_name(&self.os) {
                return Err(OsBaseError::not_valid(format!("os {:?}", self.os)));
            }
            if self.channel.is_none() {
                return Err(OsBaseError::not_valid("missing channel"));
            }
        }
        if !self.resource.is_empty() && self.channel.is_some() {
            return Err(OsBaseError::not_valid(
                "channel cannot be specified with resource",
            ));
        }
        Ok(())
    }

    /// Parse a system from its series form.
    ///
    /// Strings without the `system` prefix are legacy series lookups. The
    /// tagged form accepts `#os=`, `#channel=` and `#resource=` properties,
    /// normalizes the channel, and validates the result.
    pub fn parse_from_series(s: &str) -> Result<System> {
        let Some(props) = s.strip_prefix(SERIES_PREFIX) else {
            return series::system_for_series(s)
                .cloned()
                .ok_or_else(|| OsBaseError::not_valid(format!("series {s:?}")));
        };

        let mut segments = props.split('#');
        // the property string must itself start with '#'
        if segments.next() != Some("") || props.is_empty() {
            return Err(OsBaseError::invalid_system(
                s,
                OsBaseError::not_valid("missing properties"),
            ));
        }

        let mut system = System::default();
        for segment in segments {
            let (key, value) = match segment.split_once('=') {
                Some((key, value)) if !value.is_empty() => (key, value),
                _ => {
                    return Err(OsBaseError::invalid_system(
                        s,
                        OsBaseError::not_valid(format!("property {segment:?}")),
                    ))
                }
            };
            match key {
                "os" => system.os = value.to_string(),
                "channel" => {
                    let channel = Channel::parse(value)
                        .map_err(|err| OsBaseError::invalid_system(s, err))?;
                    system.channel = Some(channel);
                }
                "resource" => system.resource = value.to_string(),
                _ => {
                    return Err(OsBaseError::invalid_system(
                        s,
                        OsBaseError::not_valid(format!("key {key:?}")),
                    ))
                }
            }
        }

        system
            .validate()
            .map_err(|err| OsBaseError::invalid_system(s, err))?;
        Ok(system)
    }
}

impl std::fmt::Display for System {
    /// Falls back to the registered legacy series short name when one
    /// exists, else renders the tagged `system#key=value` form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(series) = series::series_for_system(self) {
            return write!(f, "{series}");
        }
        write!(f, "{SERIES_PREFIX}")?;
        if !self.os.is_empty() {
            write!(f, "#os={}", self.os)?;
        }
        if let Some(channel) = &self.channel {
            write!(f, "#channel={channel}")?;
        }
        if !self.resource.is_empty() {
            write!(f, "#resource={}", self.resource)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os_system(os: &str, channel: &str) -> System {
        System {
            os: os.to_string(),
            channel: Some(Channel::must_parse(channel)),
            resource: String::new(),
        }
    }

    fn resource_system(resource: &str) -> System {
        System {
            resource: resource.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn validate_requires_exactly_one_identity() {
        let err = System::default().validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "one of os or resource must be specified not valid"
        );

        let mut both = os_system("ubuntu", "20.04/stable");
        both.resource = "image".to_string();
        let err = both.validate().unwrap_err();
        assert_eq!(err.to_string(), "resource cannot be specified with os not valid");

        let err = os_system("mythicalos", "20.04/stable").validate().unwrap_err();
        assert_eq!(err.to_string(), "os \"mythicalos\" not valid");

        let err = System {
            os: "ubuntu".to_string(),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.to_string(), "missing channel not valid");

        let mut resource_with_channel = resource_system("image");
        resource_with_channel.channel = Some(Channel::must_parse("stable"));
        let err = resource_with_channel.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "channel cannot be specified with resource not valid"
        );

        os_system("ubuntu", "20.04/stable").validate().unwrap();
        resource_system("image").validate().unwrap();
    }

    #[test]
    fn display_prefers_legacy_series() {
        assert_eq!(os_system("ubuntu", "20.04/stable").to_string(), "focal");
        assert_eq!(os_system("windows", "win10/stable").to_string(), "win10");
        assert_eq!(
            os_system("ubuntu", "20.04/edge").to_string(),
            "system#os=ubuntu#channel=20.04/edge"
        );
        assert_eq!(
            resource_system("imagename").to_string(),
            "system#resource=imagename"
        );
    }

    #[test]
    fn parse_legacy_series() {
        let system = System::parse_from_series("focal").unwrap();
        assert_eq!(system, os_system("ubuntu", "20.04/stable"));

        let err = System::parse_from_series("mythicalos").unwrap_err();
        assert_eq!(err.to_string(), "series \"mythicalos\" not valid");
    }

    #[test]
    fn parse_tagged_form() {
        let system =
            System::parse_from_series("system#os=ubuntu#channel=20.04/edge").unwrap();
        assert_eq!(system, os_system("ubuntu", "20.04/edge"));

        let system = System::parse_from_series("system#resource=imagename").unwrap();
        assert_eq!(system, resource_system("imagename"));

        // channel gets normalized on the way in
        let system = System::parse_from_series("system#os=ubuntu#channel=20.04").unwrap();
        assert_eq!(system.channel, Some(Channel::must_parse("20.04/stable")));
    }

    #[test]
    fn parse_tagged_form_errors() {
        for raw in [
            "system",
            "system#",
            "system#os=",
            "system#junk",
            "system#os=ubuntu#channel=20.04/stable#resource=image",
            "system#version=18.04",
        ] {
            assert!(
                System::parse_from_series(raw).is_err(),
                "expected error for {raw:?}"
            );
        }

        let err = System::parse_from_series("system#version=18.04").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid system string \"system#version=18.04\": key \"version\" not valid"
        );
    }

    #[test]
    fn string_parse_round_trip() {
        for system in [
            os_system("ubuntu", "20.04/stable"),
            os_system("ubuntu", "20.04/edge"),
            os_system("centos", "centos8/stable"),
            resource_system("imagename"),
        ] {
            let parsed = System::parse_from_series(&system.to_string()).unwrap();
            assert_eq!(parsed, system);
        }
    }

    #[test]
    fn json_shape_and_round_trip() {
        let system = os_system("ubuntu", "20.04/stable");
        let json = serde_json::to_string(&system).unwrap();
        assert_eq!(
            json,
            r#"{"os":"ubuntu","channel":{"name":"20.04/stable","track":"20.04","risk":"stable"}}"#
        );
        let back: System = serde_json::from_str(&json).unwrap();
        assert_eq!(back, system);

        let resource = resource_system("imagename");
        let json = serde_json::to_string(&resource).unwrap();
        assert_eq!(json, r#"{"resource":"imagename"}"#);
        let back: System = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resource);
    }
}

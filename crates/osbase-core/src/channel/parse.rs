//! Channel string parsing
//!
//! Two deliberately different code paths:
//!
//! - [`Channel::parse_verbatim`] / [`Channel::parse`] implement the strict
//!   grammar: 1-3 `/`-separated segments, every assigned segment validated.
//! - [`full`] is the permissive expansion kept for store compatibility. It
//!   drops empty segments, so historically malformed input like
//!   `"//stable//"` still expands. Do not unify the two; callers depend on
//!   the difference.

use super::risk::Risk;
use super::types::Channel;
use crate::error::{OsBaseError, Result};

impl Channel {
    /// Parse a channel string without normalizing.
    ///
    /// The returned channel keeps exactly the segments that were present;
    /// its name is left unset. [`Channel::parse`] should be used in most
    /// cases.
    pub fn parse_verbatim(s: &str) -> Result<Channel> {
        if s.is_empty() {
            return Err(OsBaseError::EmptyChannel);
        }
        let parts: Vec<&str> = s.split('/').collect();
        let (track, risk, branch) = match parts.as_slice() {
            [track, risk, branch] => (Some(*track), Some(*risk), Some(*branch)),
            [first, second] if Risk::is_risk_name(first) => (None, Some(*first), Some(*second)),
            [track, risk] => (Some(*track), Some(*risk), None),
            [risk] if Risk::is_risk_name(risk) => (None, Some(*risk), None),
            [track] => (Some(*track), None, None),
            _ => {
                return Err(OsBaseError::TooManyComponents {
                    channel: s.to_string(),
                })
            }
        };

        let mut channel = Channel::default();
        if let Some(risk) = risk {
            channel.risk = Risk::from_name(risk).ok_or_else(|| OsBaseError::InvalidRisk {
                channel: s.to_string(),
            })?;
        }
        if let Some(track) = track {
            if track.is_empty() {
                return Err(OsBaseError::InvalidTrack {
                    channel: s.to_string(),
                });
            }
            channel.track = track.to_string();
        }
        if let Some(branch) = branch {
            if branch.is_empty() {
                return Err(OsBaseError::InvalidBranch {
                    channel: s.to_string(),
                });
            }
            channel.branch = branch.to_string();
        }
        Ok(channel)
    }

    /// Parse a channel string into its normalized form.
    pub fn parse(s: &str) -> Result<Channel> {
        Ok(Self::parse_verbatim(s)?.clean())
    }

    /// Parse a channel string or panic.
    ///
    /// Intended for static registry tables and test constants only; use
    /// [`Channel::parse`] everywhere else.
    pub fn must_parse(s: &str) -> Channel {
        match Self::parse(s) {
            Ok(channel) => channel,
            Err(err) => panic!("must_parse {s:?}: {err}"),
        }
    }
}

impl std::str::FromStr for Channel {
    type Err = OsBaseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Permissively expand a channel string to always carry a track and a risk.
///
/// Empty segments are discarded before counting, so doubled or trailing
/// slashes are tolerated. Risk names are only recognized for defaulting; a
/// 2-3 component string is joined back verbatim without validation. Fails
/// only on more than three non-empty components.
pub fn full(s: &str) -> Result<String> {
    if s.is_empty() {
        return Ok(String::new());
    }
    let components: Vec<&str> = s.split('/').filter(|c| !c.is_empty()).collect();
    match components.as_slice() {
        [] => Ok(String::new()),
        [only] => {
            if Risk::is_risk_name(only) {
                Ok(format!("latest/{only}"))
            } else {
                Ok(format!("{only}/stable"))
            }
        }
        [first, _] if Risk::is_risk_name(first) => Ok(format!("latest/{}", components.join("/"))),
        [_, _] | [_, _, _] => Ok(components.join("/")),
        _ => Err(OsBaseError::InvalidChannel {
            channel: s.to_string(),
        }),
    }
}

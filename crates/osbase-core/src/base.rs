//! OS base descriptors

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::error::{OsBaseError, Result};
use crate::os::Os;
use crate::series;

/// An operating system pinned to a release channel, e.g. ubuntu 20.04/stable.
///
/// Construction never validates; call [`Base::validate`] before trusting a
/// value built from external input. Bases are immutable values and compare
/// by their full field set, which is what the legacy series reverse map keys
/// off.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Base {
    /// OS name, e.g. "ubuntu".
    #[serde(default)]
    pub name: String,
    /// Normalized channel the OS is pinned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<Channel>,
}

impl Base {
    pub fn new(os: Os, channel: Channel) -> Self {
        Self {
            name: os.as_str().to_string(),
            channel: Some(channel),
        }
    }

    /// Check structural validity: a recognized OS name together with a
    /// channel. Neither half can stand alone.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(OsBaseError::not_valid("missing os name"));
        }
        if !Os::is_valid_name(&self.name) {
            return Err(OsBaseError::not_valid(format!("os {:?}", self.name)));
        }
        if self.channel.is_none() {
            return Err(OsBaseError::not_valid("channel"));
        }
        Ok(())
    }

    /// Parse a base from its series form.
    ///
    /// Accepts a registered legacy series name like `focal`, or the explicit
    /// `os[/channel]` form like `ubuntu/20.04/edge`. The result is always
    /// validated.
    pub fn parse_from_series(s: &str) -> Result<Base> {
        if let Some(base) = series::base_for_series(s) {
            return Ok(base.clone());
        }
        let (os, channel) = match s.split_once('/') {
            Some((os, channel)) => (os, Some(channel)),
            None => (s, None),
        };
        if !Os::is_valid_name(os) {
            return Err(OsBaseError::not_valid(format!("series {s:?}")));
        }
        let channel = match channel {
            Some(raw) => {
                Some(Channel::parse(raw).map_err(|err| OsBaseError::invalid_base(s, err))?)
            }
            None => None,
        };
        let base = Base {
            name: os.to_string(),
            channel,
        };
        base.validate()
            .map_err(|err| OsBaseError::invalid_base(s, err))?;
        Ok(base)
    }
}

impl std::fmt::Display for Base {
    /// Falls back to the registered legacy series short name when one
    /// exists, else renders the explicit `os[/channel]` form.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(series) = series::series_for_base(self) {
            return write!(f, "{series}");
        }
        match &self.channel {
            Some(channel) => write!(f, "{}/{channel}", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

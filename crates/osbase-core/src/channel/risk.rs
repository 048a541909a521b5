//! Risk tiers within a release track

use serde::{Deserialize, Serialize};

use crate::error::OsBaseError;

/// Stability tier of a release within a track.
///
/// `Unknown` is the sentinel for a verbatim channel whose risk segment was
/// never given; normalized channels always carry one of the four concrete
/// tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    #[default]
    #[serde(rename = "")]
    Unknown,
    Stable,
    Candidate,
    Beta,
    Edge,
}

/// The four concrete risks, in order of increasing permissiveness.
pub const RISKS: &[Risk] = &[Risk::Stable, Risk::Candidate, Risk::Beta, Risk::Edge];

impl Risk {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Stable => "stable",
            Self::Candidate => "candidate",
            Self::Beta => "beta",
            Self::Edge => "edge",
        }
    }

    /// Look up a concrete risk by its channel-segment name.
    ///
    /// Matching is exact and case-sensitive; the empty string is not a
    /// recognized name.
    pub fn from_name(name: &str) -> Option<Risk> {
        match name {
            "stable" => Some(Self::Stable),
            "candidate" => Some(Self::Candidate),
            "beta" => Some(Self::Beta),
            "edge" => Some(Self::Edge),
            _ => None,
        }
    }

    /// Whether a channel segment names a concrete risk.
    pub fn is_risk_name(name: &str) -> bool {
        Self::from_name(name).is_some()
    }

    /// Permissiveness rank: stable=0, candidate=1, beta=2, edge=3.
    ///
    /// `Unknown` has no rank and yields the not-comparable sentinel -1.
    pub fn level(&self) -> i8 {
        match self {
            Self::Unknown => -1,
            Self::Stable => 0,
            Self::Candidate => 1,
            Self::Beta => 2,
            Self::Edge => 3,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl std::fmt::Display for Risk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Risk {
    type Err = OsBaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| OsBaseError::InvalidRisk {
            channel: s.to_string(),
        })
    }
}

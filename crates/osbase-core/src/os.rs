//! Operating system names recognized by Base and System validation

use serde::{Deserialize, Serialize};

/// A recognized operating system name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Ubuntu,
    Centos,
    Windows,
    Osx,
    Opensuse,
    GenericLinux,
}

impl Os {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ubuntu => "ubuntu",
            Self::Centos => "centos",
            Self::Windows => "windows",
            Self::Osx => "osx",
            Self::Opensuse => "opensuse",
            Self::GenericLinux => "genericlinux",
        }
    }

    /// Look up an OS by its lowercase name.
    pub fn from_name(name: &str) -> Option<Os> {
        match name {
            "ubuntu" => Some(Self::Ubuntu),
            "centos" => Some(Self::Centos),
            "windows" => Some(Self::Windows),
            "osx" => Some(Self::Osx),
            "opensuse" => Some(Self::Opensuse),
            "genericlinux" => Some(Self::GenericLinux),
            _ => None,
        }
    }

    /// Whether a name belongs to the recognized OS set.
    pub fn is_valid_name(name: &str) -> bool {
        Self::from_name(name).is_some()
    }

    /// All recognized operating systems.
    pub fn all() -> &'static [Os] {
        &[
            Os::Ubuntu,
            Os::Centos,
            Os::Windows,
            Os::Osx,
            Os::Opensuse,
            Os::GenericLinux,
        ]
    }
}

impl std::fmt::Display for Os {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

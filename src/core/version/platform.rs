use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::LoomError;

/// Operating system names as they appear in manifest rules.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OsName {
    Windows,
    Osx,
    Linux,
}

impl OsName {
    pub fn as_str(&self) -> &'static str {
        match self {
            OsName::Windows => "windows",
            OsName::Osx => "osx",
            OsName::Linux => "linux",
        }
    }
}

impl fmt::Display for OsName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsName {
    type Err = LoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "windows" => Ok(OsName::Windows),
            "osx" | "macos" => Ok(OsName::Osx),
            "linux" => Ok(OsName::Linux),
            other => Err(LoomError::Config(format!("unknown OS name: {other}"))),
        }
    }
}

/// The platform rules and native classifiers are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub os: OsName,
    /// Pointer width substituted for `${arch}` in native classifiers.
    pub arch_bits: u8,
}

impl Platform {
    pub fn new(os: OsName) -> Self {
        Self { os, arch_bits: 64 }
    }

    /// The platform this process runs on.
    pub fn current() -> Self {
        let os = if cfg!(target_os = "windows") {
            OsName::Windows
        } else if cfg!(target_os = "macos") {
            OsName::Osx
        } else {
            OsName::Linux
        };
        let arch_bits = if cfg!(target_pointer_width = "64") { 64 } else { 32 };
        Self { os, arch_bits }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch_bits)
    }
}

use crate::error::ParseEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What `POST /sync` should pull from the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// Only atoms not yet known to the backend
    #[default]
    New,
    /// Refresh market data of known atoms
    Update,
    Full,
}

impl SyncMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncMode::New => "new",
            SyncMode::Update => "update",
            SyncMode::Full => "full",
        }
    }
}

impl fmt::Display for SyncMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyncMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(SyncMode::New),
            "update" => Ok(SyncMode::Update),
            "full" => Ok(SyncMode::Full),
            _ => Err(ParseEnumError::new("sync mode", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SyncReport {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub stats: SyncStats,
    #[serde(default)]
    pub atoms: SyncCoverage,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SyncStats {
    #[serde(default)]
    pub added: Option<u64>,
    #[serde(default)]
    pub updated: Option<u64>,
    #[serde(default)]
    pub created: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SyncCoverage {
    #[serde(default)]
    pub after: Option<u64>,
    #[serde(default)]
    pub total_on_network: Option<u64>,
    #[serde(default)]
    pub coverage_percent: Option<f64>,
}

impl SyncReport {
    /// Number of atoms touched by the run, whichever counter the mode reports
    pub fn touched(&self) -> u64 {
        self.stats
            .added
            .or(self.stats.created)
            .or(self.stats.updated)
            .unwrap_or(0)
    }

    /// Server-reported failure text, if the run did not succeed
    pub fn failure(&self) -> Option<&str> {
        if self.success {
            None
        } else {
            Some(self.error.as_deref().unwrap_or("synchronization failed"))
        }
    }
}

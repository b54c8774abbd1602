//! What happens to a manager's plants when the manager is deleted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Policy applied by [`super::HierarchyService::delete_energy_manager`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagerDeletePolicy {
    /// Delete the manager only; plants keep a dangling reference.
    #[default]
    LeaveDangling,
    /// Delete the manager and clear the reference on its plants.
    Detach,
    /// Refuse while the manager still owns plants.
    Restrict,
}

impl ManagerDeletePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LeaveDangling => "leave_dangling",
            Self::Detach => "detach",
            Self::Restrict => "restrict",
        }
    }
}

impl fmt::Display for ManagerDeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown manager delete policy '{0}', expected leave_dangling, detach or restrict")]
pub struct UnknownPolicy(String);

impl FromStr for ManagerDeletePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leave_dangling" => Ok(Self::LeaveDangling),
            "detach" => Ok(Self::Detach),
            "restrict" => Ok(Self::Restrict),
            _ => Err(UnknownPolicy(s.to_string())),
        }
    }
}

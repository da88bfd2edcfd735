//! Domain value objects: Starter.
//!
//! Plain `Copy` types with a string form and a `FromStr` parser. They carry
//! no I/O and no orchestration.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Starter ──────────────────────────────────────────────────────────────────

/// Which content a freshly created project starts with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Starter {
    /// Only the base website skeleton.
    #[default]
    Blank,
    /// The skeleton plus the example feature pages and core modules, copied
    /// verbatim (placeholder left in place).
    Example,
}

impl Starter {
    pub const ALL: [Starter; 2] = [Self::Blank, Self::Example];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Example => "example",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Blank => "Empty website skeleton",
            Self::Example => "Skeleton with an example CRUD feature",
        }
    }

    pub const fn includes_example(self) -> bool {
        matches!(self, Self::Example)
    }
}

impl fmt::Display for Starter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Starter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blank" | "empty" => Ok(Self::Blank),
            "example" => Ok(Self::Example),
            other => Err(DomainError::InvalidStarter {
                starter: other.to_string(),
            }),
        }
    }
}

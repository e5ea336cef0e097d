//! Contacts shown in the buddy list.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique contact identifier.
pub type ContactId = i64;

/// Presence status of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    /// Signed on and available.
    Online,
    /// Signed on but idle.
    Away,
    /// Signed off.
    #[default]
    Offline,
}

impl Presence {
    /// Returns the lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Away => "away",
            Self::Offline => "offline",
        }
    }

    /// Whether the contact is signed on (online or away).
    pub fn is_signed_on(self) -> bool {
        !matches!(self, Self::Offline)
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Presence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "online" => Ok(Self::Online),
            "away" => Ok(Self::Away),
            "offline" => Ok(Self::Offline),
            other => Err(format!("unknown presence: {other}")),
        }
    }
}

/// A buddy list entry.
///
/// Contacts are created when the directory loads and never mutated
/// by the UI afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier.
    pub id: ContactId,
    /// Display name.
    pub name: String,
    /// Presence status.
    pub status: Presence,
    /// Free-form grouping key, e.g. "Buddies" or "Family".
    pub category: String,
}

impl Contact {
    /// Creates a new contact.
    pub fn new(
        id: ContactId,
        name: impl Into<String>,
        status: Presence,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            category: category.into(),
        }
    }
}

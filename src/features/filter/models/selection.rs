use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{DISTRICT_KEY, PROVINCE_KEY, REGENCY_KEY};

/// One level of the administrative hierarchy, parent first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Province,
    Regency,
    District,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Province, Level::Regency, Level::District];

    /// Query-string key of this level
    pub fn key(self) -> &'static str {
        match self {
            Level::Province => PROVINCE_KEY,
            Level::Regency => REGENCY_KEY,
            Level::District => DISTRICT_KEY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Province => "Provinsi",
            Level::Regency => "Kota/Kabupaten",
            Level::District => "Kecamatan",
        }
    }

    /// Text of the "none selected" option
    pub fn placeholder(self) -> &'static str {
        match self {
            Level::Province => "Pilih Provinsi",
            Level::Regency => "Pilih Kota/Kabupaten",
            Level::District => "Pilih Kecamatan",
        }
    }

    pub fn parent(self) -> Option<Level> {
        match self {
            Level::Province => None,
            Level::Regency => Some(Level::Province),
            Level::District => Some(Level::Regency),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown level '{0}', expected one of: province, regency, district")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.key() == s)
            .ok_or_else(|| UnknownLevel(s.to_string()))
    }
}

/// The three optional selected ids.
///
/// Only [`SelectionState::set_level`] and [`SelectionState::reset`] produce new
/// states from user input, which keeps a child level from outliving a change
/// to its parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub province_id: Option<i64>,
    pub regency_id: Option<i64>,
    pub district_id: Option<i64>,
}

impl SelectionState {
    pub fn get(&self, level: Level) -> Option<i64> {
        match level {
            Level::Province => self.province_id,
            Level::Regency => self.regency_id,
            Level::District => self.district_id,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Set one level and clear every level below it.
    ///
    /// The cascade happens even when the new value equals the old one.
    pub fn set_level(&self, level: Level, value: Option<i64>) -> SelectionState {
        match level {
            Level::Province => SelectionState {
                province_id: value,
                regency_id: None,
                district_id: None,
            },
            Level::Regency => SelectionState {
                regency_id: value,
                district_id: None,
                ..*self
            },
            Level::District => SelectionState {
                district_id: value,
                ..*self
            },
        }
    }

    pub fn reset(&self) -> SelectionState {
        SelectionState::default()
    }
}

//! Facility profile model matching the upstream facility payload.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::RecordId;
use crate::errors::AppError;

/// Identifier of the facility a dashboard describes. Never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FacilityId(String);

impl FacilityId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("Facility id is required".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// District the facility belongs to, embedded in the facility payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A healthcare facility as served by the facility API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilityProfile {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default, rename = "district_object")]
    pub district: Option<District>,
    /// Oxygen capacity in litres, passed through as served
    #[serde(default)]
    pub oxygen_capacity: Option<Number>,
}

impl FacilityProfile {
    pub fn district_name(&self) -> Option<&str> {
        self.district.as_ref().and_then(|d| d.name.as_deref())
    }
}

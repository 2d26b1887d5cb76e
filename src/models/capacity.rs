//! Bed capacity model matching the upstream capacity payload.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::RecordId;

/// Tag of a bed-type category, drawn from the bed-type catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BedType(pub u16);

/// Available and total beds for one bed type at a facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(rename = "room_type")]
    pub bed_type: BedType,
    #[serde(default)]
    pub current_capacity: Option<Number>,
    #[serde(default)]
    pub total_capacity: Option<Number>,
}

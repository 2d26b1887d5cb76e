//! Doctor count model matching the upstream hospital doctor payload.

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::RecordId;

/// Tag of a doctor specialization, drawn from the specialization catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Specialization(pub u16);

/// Number of doctors of one specialization at a facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(rename = "area")]
    pub specialization: Specialization,
    #[serde(default)]
    pub count: Option<Number>,
}

//! Triage statistics model matching the upstream patient stats payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::RecordId;

/// Daily snapshot of patient flow at the facility's triage point.
///
/// Every field is optional; the default value is the blank summary shown when no
/// triage entry exists yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriageSummary {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub entry_date: Option<NaiveDate>,
    #[serde(default)]
    pub num_patients_visited: Option<Number>,
    #[serde(default)]
    pub num_patients_home_quarantine: Option<Number>,
    #[serde(default)]
    pub num_patients_isolation: Option<Number>,
    #[serde(default)]
    pub num_patient_referred: Option<Number>,
}

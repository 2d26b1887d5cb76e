//! Merges the four raw payloads of a batch into one view state.

use super::state::{Phase, ViewState};
use crate::models::{CapacityRecord, DoctorRecord, FacilityProfile, TriageSummary};

/// Builds a ready view state from one batch's payloads.
///
/// Absent lists become empty lists and only the first (latest) triage summary is
/// kept. The result depends on the input values alone; the caller stamps the
/// generation.
pub fn merge(
    facility: FacilityProfile,
    capacity: Option<Vec<CapacityRecord>>,
    doctors: Option<Vec<DoctorRecord>>,
    triage: Option<Vec<TriageSummary>>,
) -> ViewState {
    ViewState {
        phase: Phase::Ready,
        generation: 0,
        facility,
        capacity: capacity.unwrap_or_default(),
        doctors: doctors.unwrap_or_default(),
        triage: triage
            .and_then(|summaries| summaries.into_iter().next())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Number;

    use crate::models::{BedType, RecordId, Specialization};

    fn triage(visited: u32) -> TriageSummary {
        TriageSummary {
            num_patients_visited: Some(Number::from(visited)),
            ..TriageSummary::default()
        }
    }

    #[test]
    fn test_merge_keeps_lists_in_order() {
        let capacity = vec![
            CapacityRecord {
                id: Some(RecordId::Int(2)),
                bed_type: BedType(10),
                current_capacity: Some(Number::from(1)),
                total_capacity: Some(Number::from(4)),
            },
            CapacityRecord {
                id: Some(RecordId::Text("b-1".to_string())),
                bed_type: BedType(1),
                current_capacity: None,
                total_capacity: Some(Number::from(20)),
            },
        ];
        let doctors = vec![DoctorRecord {
            id: Some(RecordId::Int(9)),
            specialization: Specialization(3),
            count: Some(Number::from(2)),
        }];

        let state = merge(
            FacilityProfile::default(),
            Some(capacity.clone()),
            Some(doctors.clone()),
            None,
        );

        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.capacity, capacity);
        assert_eq!(state.doctors, doctors);
    }

    #[test]
    fn test_merge_defaults_absent_inputs() {
        let state = merge(FacilityProfile::default(), None, None, None);

        assert!(state.capacity.is_empty());
        assert!(state.doctors.is_empty());
        assert_eq!(state.triage, TriageSummary::default());
    }

    #[test]
    fn test_merge_keeps_only_latest_triage() {
        let state = merge(
            FacilityProfile::default(),
            None,
            None,
            Some(vec![triage(10), triage(7)]),
        );
        assert_eq!(state.triage.num_patients_visited, Some(Number::from(10)));

        let empty = merge(FacilityProfile::default(), None, None, Some(Vec::new()));
        assert_eq!(empty.triage, TriageSummary::default());
    }

    #[test]
    fn test_merge_is_deterministic() {
        let build = || {
            merge(
                FacilityProfile {
                    name: Some("General Hospital".to_string()),
                    ..FacilityProfile::default()
                },
                Some(Vec::new()),
                None,
                Some(vec![triage(3)]),
            )
        };
        assert_eq!(build(), build());
    }
}

//! Maps a view state onto the render-ready dashboard model.

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use serde::Serialize;

use super::state::ViewState;
use crate::models::{
    label_of, BedType, Catalog, CapacityRecord, CatalogEntry, DoctorRecord, FacilityProfile,
    RecordId, Specialization, TriageSummary,
};

pub const NO_BED_TYPES_PLACEHOLDER: &str = "No Bed Types Found";
pub const NO_DOCTORS_PLACEHOLDER: &str = "No Doctors Found";

/// Render-ready dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderModel {
    pub is_loading: bool,
    pub facility: FacilitySummary,
    pub capacity: Section<CapacityRow>,
    pub doctors: Section<DoctorRow>,
    pub triage: TriageRow,
    /// Every catalog bed type is configured, so "add more bed types" is not offered.
    pub all_bed_types_configured: bool,
    /// Every catalog specialization is configured, so "add more doctor types" is not offered.
    pub all_specializations_configured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitySummary {
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub district: String,
    pub oxygen_capacity: String,
}

/// An ordered list of rows, or the placeholder shown in its place when empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section<T> {
    pub rows: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

impl<T> Section<T> {
    fn new(rows: Vec<T>, placeholder: &'static str) -> Self {
        let placeholder = rows.is_empty().then_some(placeholder);
        Self { rows, placeholder }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityRow {
    pub id: Option<RecordId>,
    pub bed_type: BedType,
    pub label: String,
    pub current_capacity: String,
    pub total_capacity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRow {
    pub id: Option<RecordId>,
    pub specialization: Specialization,
    pub label: String,
    pub count: String,
}

/// The latest triage entry, one display cell per column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriageRow {
    pub entry_date: String,
    pub patients_visited: String,
    pub patients_home_quarantine: String,
    pub patients_isolation: String,
    pub patients_referred: String,
}

/// Composes the render model for `state` against the given catalogs.
pub fn compose(
    state: &ViewState,
    bed_types: &[CatalogEntry<BedType>],
    specializations: &[CatalogEntry<Specialization>],
) -> RenderModel {
    RenderModel {
        is_loading: state.is_loading(),
        facility: facility_summary(&state.facility),
        capacity: Section::new(
            state
                .capacity
                .iter()
                .map(|record| capacity_row(record, bed_types))
                .collect(),
            NO_BED_TYPES_PLACEHOLDER,
        ),
        doctors: Section::new(
            state
                .doctors
                .iter()
                .map(|record| doctor_row(record, specializations))
                .collect(),
            NO_DOCTORS_PLACEHOLDER,
        ),
        triage: triage_row(&state.triage),
        all_bed_types_configured: covers_catalog(
            state.capacity.iter().map(|record| record.bed_type),
            bed_types,
        ),
        all_specializations_configured: covers_catalog(
            state.doctors.iter().map(|record| record.specialization),
            specializations,
        ),
    }
}

/// [`compose`] against both catalogs of `catalog`.
pub fn compose_with(state: &ViewState, catalog: &Catalog) -> RenderModel {
    compose(state, &catalog.bed_types, &catalog.specializations)
}

/// Absent values render blank.
fn display<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn facility_summary(facility: &FacilityProfile) -> FacilitySummary {
    FacilitySummary {
        name: display(facility.name.as_deref()),
        address: display(facility.address.as_deref()),
        phone_number: display(facility.phone_number.as_deref()),
        district: display(facility.district_name()),
        oxygen_capacity: display(facility.oxygen_capacity.as_ref()),
    }
}

fn capacity_row(record: &CapacityRecord, catalog: &[CatalogEntry<BedType>]) -> CapacityRow {
    CapacityRow {
        id: record.id.clone(),
        bed_type: record.bed_type,
        label: display(label_of(catalog, record.bed_type)),
        current_capacity: display(record.current_capacity.as_ref()),
        total_capacity: display(record.total_capacity.as_ref()),
    }
}

fn doctor_row(record: &DoctorRecord, catalog: &[CatalogEntry<Specialization>]) -> DoctorRow {
    DoctorRow {
        id: record.id.clone(),
        specialization: record.specialization,
        label: display(label_of(catalog, record.specialization)),
        count: display(record.count.as_ref()),
    }
}

fn triage_row(triage: &TriageSummary) -> TriageRow {
    TriageRow {
        entry_date: display(triage.entry_date),
        patients_visited: display(triage.num_patients_visited.as_ref()),
        patients_home_quarantine: display(triage.num_patients_home_quarantine.as_ref()),
        patients_isolation: display(triage.num_patients_isolation.as_ref()),
        patients_referred: display(triage.num_patient_referred.as_ref()),
    }
}

/// True when every catalog id appears among `present`.
///
/// Only tags that are catalog members are counted, each once. A tag outside the
/// catalog or a repeated tag never makes up for a missing catalog id, so the flag
/// can be false even when the number of distinct tags present equals the catalog
/// size.
fn covers_catalog<T>(present: impl Iterator<Item = T>, catalog: &[CatalogEntry<T>]) -> bool
where
    T: Copy + Eq + Hash,
{
    let known: HashSet<T> = catalog.iter().map(|entry| entry.id).collect();
    let configured: HashSet<T> = present.filter(|tag| known.contains(tag)).collect();
    configured.len() == known.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{merge, Phase};
    use serde_json::Number;

    use crate::models::{District, BED_TYPES, DOCTOR_SPECIALIZATIONS};

    fn capacity(bed_type: u16) -> CapacityRecord {
        CapacityRecord {
            id: Some(RecordId::Int(i64::from(bed_type))),
            bed_type: BedType(bed_type),
            current_capacity: Some(Number::from(3)),
            total_capacity: Some(Number::from(10)),
        }
    }

    fn doctor(specialization: u16) -> DoctorRecord {
        DoctorRecord {
            id: Some(RecordId::Int(i64::from(specialization))),
            specialization: Specialization(specialization),
            count: Some(Number::from(4)),
        }
    }

    fn all_bed_types() -> Vec<CapacityRecord> {
        BED_TYPES.iter().map(|entry| capacity(entry.id.0)).collect()
    }

    #[test]
    fn test_compose_facility_summary() {
        let facility = FacilityProfile {
            id: Some(RecordId::Int(1)),
            name: Some("General Hospital".to_string()),
            address: Some("1 Main Road".to_string()),
            phone_number: None,
            district: Some(District {
                id: Some(RecordId::Int(4)),
                name: Some("Ernakulam".to_string()),
            }),
            oxygen_capacity: Some(Number::from(250)),
        };
        let state = merge(facility, None, None, None);

        let model = compose(&state, BED_TYPES, DOCTOR_SPECIALIZATIONS);

        assert!(!model.is_loading);
        assert_eq!(model.facility.name, "General Hospital");
        assert_eq!(model.facility.address, "1 Main Road");
        assert_eq!(model.facility.phone_number, "");
        assert_eq!(model.facility.district, "Ernakulam");
        assert_eq!(model.facility.oxygen_capacity, "250");
    }

    #[test]
    fn test_compose_empty_sections_show_placeholders() {
        let state = ViewState::default();

        let model = compose(&state, BED_TYPES, DOCTOR_SPECIALIZATIONS);

        assert!(model.capacity.is_empty());
        assert_eq!(model.capacity.placeholder, Some(NO_BED_TYPES_PLACEHOLDER));
        assert_eq!(model.doctors.placeholder, Some(NO_DOCTORS_PLACEHOLDER));
        assert!(!model.all_bed_types_configured);
        assert!(!model.all_specializations_configured);
    }

    #[test]
    fn test_compose_empty_catalog_is_trivially_covered() {
        let model = compose(&ViewState::default(), &[], &[]);
        assert!(model.all_bed_types_configured);
        assert!(model.all_specializations_configured);
    }

    #[test]
    fn test_all_bed_types_configured() {
        let state = merge(FacilityProfile::default(), Some(all_bed_types()), None, None);
        let model = compose(&state, BED_TYPES, DOCTOR_SPECIALIZATIONS);

        assert!(model.all_bed_types_configured);
        assert_eq!(model.capacity.placeholder, None);
        assert_eq!(model.capacity.rows.len(), BED_TYPES.len());
    }

    #[test]
    fn test_removing_any_bed_type_clears_flag() {
        for skipped in 0..BED_TYPES.len() {
            let mut records = all_bed_types();
            records.remove(skipped);
            let state = merge(FacilityProfile::default(), Some(records), None, None);

            let model = compose(&state, BED_TYPES, DOCTOR_SPECIALIZATIONS);
            assert!(!model.all_bed_types_configured, "skipped index {}", skipped);
        }
    }

    #[test]
    fn test_duplicates_and_unknown_tags_do_not_complete_catalog() {
        let mut records = all_bed_types();
        records.pop();
        records.push(capacity(1));
        records.push(capacity(999));
        let state = merge(FacilityProfile::default(), Some(records), None, None);

        let model = compose(&state, BED_TYPES, DOCTOR_SPECIALIZATIONS);
        assert_eq!(model.capacity.rows.len(), BED_TYPES.len() + 1);
        assert!(!model.all_bed_types_configured);
    }

    #[test]
    fn test_all_specializations_configured() {
        let doctors = DOCTOR_SPECIALIZATIONS
            .iter()
            .map(|entry| doctor(entry.id.0))
            .collect();
        let state = merge(FacilityProfile::default(), None, Some(doctors), None);

        let model = compose(&state, BED_TYPES, DOCTOR_SPECIALIZATIONS);
        assert!(model.all_specializations_configured);
        assert!(!model.all_bed_types_configured);
    }

    #[test]
    fn test_rows_carry_catalog_labels() {
        let state = merge(
            FacilityProfile::default(),
            Some(vec![capacity(10), capacity(42)]),
            Some(vec![doctor(2)]),
            None,
        );

        let model = compose(&state, BED_TYPES, DOCTOR_SPECIALIZATIONS);

        assert_eq!(model.capacity.rows[0].label, "ICU");
        assert_eq!(model.capacity.rows[0].current_capacity, "3");
        assert_eq!(model.capacity.rows[1].label, "");
        assert_eq!(model.doctors.rows[0].label, "Pulmonology");
        assert_eq!(model.doctors.rows[0].count, "4");
    }

    #[test]
    fn test_triage_row_blanks_absent_counts() {
        let triage = TriageSummary {
            num_patients_visited: Some(Number::from(10)),
            num_patient_referred: Some(Number::from(0)),
            ..TriageSummary::default()
        };
        let state = merge(FacilityProfile::default(), None, None, Some(vec![triage]));

        let row = compose(&state, BED_TYPES, DOCTOR_SPECIALIZATIONS).triage;

        assert_eq!(row.entry_date, "");
        assert_eq!(row.patients_visited, "10");
        assert_eq!(row.patients_home_quarantine, "");
        assert_eq!(row.patients_isolation, "");
        assert_eq!(row.patients_referred, "0");
    }

    #[test]
    fn test_compose_reports_loading() {
        let state = ViewState {
            phase: Phase::Loading,
            ..ViewState::default()
        };
        assert!(compose_with(&state, &Catalog::default()).is_loading);
    }

    #[test]
    fn test_compose_is_idempotent() {
        let state = merge(
            FacilityProfile::default(),
            Some(vec![capacity(1), capacity(20)]),
            Some(vec![doctor(5)]),
            None,
        );
        let catalog = Catalog::default();

        assert_eq!(compose_with(&state, &catalog), compose_with(&state, &catalog));
    }
}

//! Fixed bed-type and doctor specialization catalogs.
//!
//! These are static configuration, not fetched: the dashboard compares what a facility
//! has configured against them to decide whether more types can still be added.

use serde::Serialize;

use super::{BedType, Specialization};

/// One selectable option of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry<T> {
    pub id: T,
    pub text: &'static str,
}

pub const BED_TYPES: &[CatalogEntry<BedType>] = &[
    CatalogEntry { id: BedType(1), text: "General Bed" },
    CatalogEntry { id: BedType(10), text: "ICU" },
    CatalogEntry { id: BedType(20), text: "Ventilator" },
    CatalogEntry { id: BedType(30), text: "Covid Beds" },
    CatalogEntry { id: BedType(100), text: "Covid Priority Beds" },
];

pub const DOCTOR_SPECIALIZATIONS: &[CatalogEntry<Specialization>] = &[
    CatalogEntry { id: Specialization(1), text: "General Medicine" },
    CatalogEntry { id: Specialization(2), text: "Pulmonology" },
    CatalogEntry { id: Specialization(3), text: "Critical Care" },
    CatalogEntry { id: Specialization(4), text: "Paediatrics" },
    CatalogEntry { id: Specialization(5), text: "Other Speciality" },
];

/// Both catalogs the dashboard composer needs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub bed_types: Vec<CatalogEntry<BedType>>,
    pub specializations: Vec<CatalogEntry<Specialization>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            bed_types: BED_TYPES.to_vec(),
            specializations: DOCTOR_SPECIALIZATIONS.to_vec(),
        }
    }
}

/// Look up the display text for a tag, if the catalog knows it.
pub fn label_of<T: PartialEq + Copy>(catalog: &[CatalogEntry<T>], id: T) -> Option<&'static str> {
    catalog.iter().find(|entry| entry.id == id).map(|entry| entry.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_sizes() {
        let catalog = Catalog::default();
        assert_eq!(catalog.bed_types.len(), 5);
        assert_eq!(catalog.specializations.len(), 5);
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(label_of(BED_TYPES, BedType(10)), Some("ICU"));
        assert_eq!(label_of(BED_TYPES, BedType(11)), None);
        assert_eq!(
            label_of(DOCTOR_SPECIALIZATIONS, Specialization(2)),
            Some("Pulmonology")
        );
    }
}

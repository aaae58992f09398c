use super::*;

fn sample_catalog() -> Catalog {
    let material = Material {
        id: 7,
        name: "Sand".to_owned(),
    };
    let supplier = Company {
        id: 3,
        name: "Acme".to_owned(),
    };
    Catalog {
        materials: vec![material.clone()],
        companies: vec![supplier.clone()],
        names: vec![SupplierMaterialName {
            id: 1,
            name: "Grade-A sand".to_owned(),
            material,
            supplier,
            created_at: None,
        }],
    }
}

fn complete_draft() -> NameDraft {
    NameDraft {
        supplier_id: Some(3),
        material_id: Some(7),
        name: "Grade-A sand".to_owned(),
    }
}

// =============================================================
// CatalogState
// =============================================================

#[test]
fn catalog_state_starts_loading_and_empty() {
    let s = CatalogState::loading();
    assert!(s.loading);
    assert!(s.materials.is_empty());
    assert!(s.companies.is_empty());
    assert!(s.names.is_empty());
}

#[test]
fn apply_success_replaces_all_three_collections() {
    let mut s = CatalogState::loading();
    assert!(s.apply(Ok(sample_catalog())).is_ok());
    assert!(!s.loading);
    assert_eq!(s.materials.len(), 1);
    assert_eq!(s.companies.len(), 1);
    assert_eq!(s.names.len(), 1);
}

#[test]
fn apply_failure_on_fresh_state_stays_empty() {
    let mut s = CatalogState::loading();
    let result = s.apply(Err("boom".to_owned()));
    assert_eq!(result, Err("boom".to_owned()));
    assert!(!s.loading);
    assert!(s.names.is_empty());
}

#[test]
fn failed_refresh_keeps_previously_applied_rows() {
    let mut s = CatalogState::loading();
    s.apply(Ok(sample_catalog())).unwrap();

    let result = s.apply(Err("network down".to_owned()));

    assert!(result.is_err());
    assert_eq!(s.names.len(), 1);
    assert_eq!(s.names[0].name, "Grade-A sand");
    assert_eq!(s.materials.len(), 1);
    assert_eq!(s.companies.len(), 1);
}

// =============================================================
// NameDraft::validate
// =============================================================

#[test]
fn validate_complete_draft_passes() {
    assert_eq!(complete_draft().validate(), None);
}

#[test]
fn validate_missing_supplier_reported_first() {
    let draft = NameDraft {
        supplier_id: None,
        ..complete_draft()
    };
    assert_eq!(draft.validate(), Some("Select a supplier"));
}

#[test]
fn validate_missing_material() {
    let draft = NameDraft {
        material_id: None,
        ..complete_draft()
    };
    assert_eq!(draft.validate(), Some("Select a material"));
}

#[test]
fn validate_blank_name() {
    let draft = NameDraft {
        name: "   ".to_owned(),
        ..complete_draft()
    };
    assert_eq!(draft.validate(), Some("Enter a name"));
}

#[test]
fn validate_fresh_draft_fails() {
    assert!(NameDraft::default().validate().is_some());
}

use super::*;

// =============================================================
// Default templates
// =============================================================

#[test]
fn fresh_draft_has_one_person_with_one_contact() {
    let draft = CompanyDraft::default();
    assert_eq!(draft.contact_persons.len(), 1);
    assert_eq!(draft.contact_persons[0].contacts.len(), 1);
}

#[test]
fn fresh_contact_defaults_to_phone() {
    let contact = Contact::default();
    assert_eq!(contact.kind, ContactKind::Phone);
    assert!(contact.value.is_empty());
}

#[test]
fn fresh_draft_defaults_to_llc() {
    assert_eq!(CompanyDraft::default().kind, CompanyKind::Llc);
}

// =============================================================
// Person list operations
// =============================================================

#[test]
fn add_person_grows_by_one_and_seeds_contact() {
    let mut draft = CompanyDraft::default();
    draft.add_person();
    assert_eq!(draft.contact_persons.len(), 2);
    assert_eq!(draft.contact_persons[1].contacts.len(), 1);
}

#[test]
fn remove_person_shrinks_by_one_preserving_order() {
    let mut draft = CompanyDraft::default();
    draft.add_person();
    draft.add_person();
    draft.contact_persons[0].first_name = "a".to_owned();
    draft.contact_persons[1].first_name = "b".to_owned();
    draft.contact_persons[2].first_name = "c".to_owned();

    draft.remove_person(1);

    assert_eq!(draft.contact_persons.len(), 2);
    assert_eq!(draft.contact_persons[0].first_name, "a");
    assert_eq!(draft.contact_persons[1].first_name, "c");
}

#[test]
fn remove_person_out_of_range_is_ignored() {
    let mut draft = CompanyDraft::default();
    draft.remove_person(5);
    assert_eq!(draft.contact_persons.len(), 1);
}

// =============================================================
// Contact list operations
// =============================================================

#[test]
fn add_contact_targets_only_that_person() {
    let mut draft = CompanyDraft::default();
    draft.add_person();

    draft.add_contact(1);

    assert_eq!(draft.contact_persons[0].contacts.len(), 1);
    assert_eq!(draft.contact_persons[1].contacts.len(), 2);
}

#[test]
fn remove_contact_targets_only_that_person() {
    let mut draft = CompanyDraft::default();
    draft.add_person();
    draft.add_contact(0);
    draft.add_contact(1);
    draft.contact_persons[0].contacts[0].value = "111".to_owned();
    draft.contact_persons[0].contacts[1].value = "222".to_owned();

    draft.remove_contact(0, 0);

    assert_eq!(draft.contact_persons[0].contacts.len(), 1);
    assert_eq!(draft.contact_persons[0].contacts[0].value, "222");
    assert_eq!(draft.contact_persons[1].contacts.len(), 2);
}

#[test]
fn remove_contact_out_of_range_is_ignored() {
    let mut draft = CompanyDraft::default();
    draft.remove_contact(0, 9);
    draft.remove_contact(9, 0);
    assert_eq!(draft.contact_persons[0].contacts.len(), 1);
}

// =============================================================
// Enum values
// =============================================================

#[test]
fn contact_kind_round_trips_through_value() {
    for kind in ContactKind::ALL {
        assert_eq!(ContactKind::from_value(kind.as_str()), kind);
    }
}

#[test]
fn contact_kind_unknown_value_falls_back_to_phone() {
    assert_eq!(ContactKind::from_value("pager"), ContactKind::Phone);
}

#[test]
fn company_kind_round_trips_through_value() {
    for kind in CompanyKind::ALL {
        assert_eq!(CompanyKind::from_value(kind.as_str()), kind);
    }
}

// =============================================================
// Draft serialization
// =============================================================

#[test]
fn draft_serializes_nested_lists() {
    let mut draft = CompanyDraft::default();
    draft.name = "Acme".to_owned();
    draft.contact_persons[0].first_name = "Jo".to_owned();
    draft.contact_persons[0].contacts[0].value = "jo@acme.test".to_owned();
    draft.contact_persons[0].contacts[0].kind = ContactKind::Email;

    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(json["name"], "Acme");
    assert_eq!(json["kind"], "llc");
    assert_eq!(json["contact_persons"][0]["contacts"][0]["kind"], "email");
    assert_eq!(
        json["contact_persons"][0]["contacts"][0]["value"],
        "jo@acme.test"
    );
}

use super::*;

fn contact(id: i64, nombre: &str) -> Contact {
    Contact {
        id,
        nombre: nombre.to_owned(),
        telefono: "555-0100".to_owned(),
        email: None,
    }
}

#[test]
fn contacts_state_defaults() {
    let s = ContactsState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn set_loaded_replaces_items_and_clears_error() {
    let mut s = ContactsState {
        loading: true,
        error: Some("old".to_owned()),
        ..ContactsState::default()
    };
    s.set_loaded(vec![contact(1, "Ana")]);
    assert_eq!(s.items.len(), 1);
    assert!(!s.loading);
    assert!(s.error.is_none());
}

#[test]
fn set_failed_keeps_existing_items() {
    let mut s = ContactsState::default();
    s.set_loaded(vec![contact(1, "Ana")]);
    s.set_failed("sin conexión".to_owned());
    assert_eq!(s.items.len(), 1);
    assert_eq!(s.error.as_deref(), Some("sin conexión"));
}

#[test]
fn upsert_replaces_by_id() {
    let mut s = ContactsState::default();
    s.upsert(contact(1, "Ana"));
    s.upsert(contact(2, "Berta"));
    s.upsert(contact(1, "Ana María"));
    assert_eq!(s.items.len(), 2);
    assert_eq!(s.items[0].nombre, "Ana María");
}

#[test]
fn remove_is_a_noop_for_unknown_ids() {
    let mut s = ContactsState::default();
    s.upsert(contact(1, "Ana"));
    s.remove(99);
    assert_eq!(s.items.len(), 1);
    s.remove(1);
    assert!(s.items.is_empty());
}

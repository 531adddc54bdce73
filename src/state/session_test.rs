use super::*;

fn user() -> User {
    User {
        id: 1,
        nombre_de_usuario: "ana".to_owned(),
    }
}

fn success_response() -> LoginResponse {
    LoginResponse {
        success: true,
        token: Some("T".to_owned()),
        user: Some(user()),
        message: None,
    }
}

// =============================================================
// Defaults and the token/user invariant
// =============================================================

#[test]
fn default_session_is_unauthenticated() {
    let s = Session::default();
    assert!(!s.is_authenticated());
    assert!(s.token().is_none());
    assert!(s.user().is_none());
}

#[test]
fn user_requires_token_after_every_mutation() {
    let mut s = Session::default();
    assert!(s.user().is_none() || s.token().is_some());

    s.apply_login("T".to_owned(), user());
    assert!(s.user().is_none() || s.token().is_some());

    s.clear();
    assert!(s.user().is_none() || s.token().is_some());
}

#[test]
fn restore_discards_orphaned_user() {
    let raw = serde_json::to_string(&user()).unwrap();
    let s = Session::from_persisted(None, Some(raw));
    assert!(!s.is_authenticated());
    assert!(s.user().is_none());
}

#[test]
fn restore_discards_empty_token() {
    let s = Session::from_persisted(Some(String::new()), None);
    assert!(!s.is_authenticated());
}

#[test]
fn restore_tolerates_malformed_user_json() {
    let s = Session::from_persisted(Some("T".to_owned()), Some("{not json".to_owned()));
    assert!(s.is_authenticated());
    assert_eq!(s.token(), Some("T"));
    assert!(s.user().is_none());
}

#[test]
fn restore_with_missing_keys_is_default() {
    assert_eq!(Session::from_persisted(None, None), Session::default());
}

// =============================================================
// Login / logout state transitions
// =============================================================

#[test]
fn apply_login_sets_token_and_user() {
    let mut s = Session::default();
    s.apply_login("T".to_owned(), user());
    assert!(s.is_authenticated());
    assert_eq!(s.token(), Some("T"));
    assert_eq!(s.user(), Some(&user()));
}

#[test]
fn clear_is_idempotent() {
    let mut s = Session::default();
    s.apply_login("T".to_owned(), user());

    s.clear();
    let once = s.clone();
    s.clear();
    assert_eq!(s, once);
    assert_eq!(s, Session::default());
}

// =============================================================
// Login payload reduction
// =============================================================

#[test]
fn login_result_accepts_complete_success() {
    let (token, u) = login_result(success_response()).unwrap();
    assert_eq!(token, "T");
    assert_eq!(u, user());
}

#[test]
fn login_result_rejects_success_false_with_backend_message() {
    let resp = LoginResponse {
        success: false,
        message: Some("Credenciales incorrectas".to_owned()),
        ..LoginResponse::default()
    };
    assert_eq!(login_result(resp).unwrap_err(), "Credenciales incorrectas");
}

#[test]
fn login_result_rejects_success_false_with_generic_message() {
    let err = login_result(LoginResponse::default()).unwrap_err();
    assert!(!err.is_empty());
}

#[test]
fn login_result_rejects_success_without_token_or_user() {
    let resp = LoginResponse {
        token: None,
        ..success_response()
    };
    assert!(login_result(resp).is_err());

    let resp = LoginResponse {
        user: None,
        ..success_response()
    };
    assert!(login_result(resp).is_err());

    let resp = LoginResponse {
        token: Some(String::new()),
        ..success_response()
    };
    assert!(login_result(resp).is_err());
}

#[test]
fn login_result_parses_wire_payload() {
    let resp: LoginResponse = serde_json::from_str(
        r#"{"success":true,"token":"T","user":{"id":1,"nombre_de_usuario":"ana"}}"#,
    )
    .unwrap();
    let (token, u) = login_result(resp).unwrap();
    assert_eq!(token, "T");
    assert_eq!(u.id, 1);
}

// =============================================================
// Persistence round-trip
// =============================================================

#[test]
fn persisted_user_round_trips_through_json() {
    let raw = serde_json::to_string(&user()).unwrap();
    let s = Session::from_persisted(Some("T".to_owned()), Some(raw));
    assert_eq!(s.token(), Some("T"));
    assert_eq!(s.user(), Some(&user()));
}

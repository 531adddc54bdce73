use super::*;

// =============================================================
// Bearer header formatting
// =============================================================

#[test]
fn bearer_formats_token() {
    assert_eq!(bearer(Some("abc123")), Some("Bearer abc123".to_owned()));
}

#[test]
fn bearer_absent_without_token() {
    assert_eq!(bearer(None), None);
}

// =============================================================
// Session expiry classification
// =============================================================

#[test]
fn only_401_expires_the_session() {
    assert!(session_expired(401));
    for status in [200, 201, 204, 400, 403, 404, 500, 502] {
        assert!(!session_expired(status), "status {status}");
    }
}

// =============================================================
// Error message normalization
// =============================================================

#[test]
fn error_message_prefers_body_message_field() {
    let body = r#"{"success":false,"message":"Credenciales incorrectas"}"#;
    assert_eq!(error_message(Some(body)), "Credenciales incorrectas");
}

#[test]
fn error_message_falls_back_without_body() {
    assert_eq!(error_message(None), CONNECTION_ERROR);
}

#[test]
fn error_message_falls_back_on_non_json_body() {
    assert_eq!(error_message(Some("<html>502</html>")), CONNECTION_ERROR);
}

#[test]
fn error_message_falls_back_on_missing_or_empty_message() {
    assert_eq!(error_message(Some(r#"{"success":false}"#)), CONNECTION_ERROR);
    assert_eq!(error_message(Some(r#"{"message":""}"#)), CONNECTION_ERROR);
    assert_eq!(error_message(Some(r#"{"message":42}"#)), CONNECTION_ERROR);
}

// =============================================================
// Endpoint URLs
// =============================================================

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("/auth/login.php"), format!("{}/auth/login.php", base_url()));
}

use super::*;

// =============================================================
// Identity serde
// =============================================================

#[test]
fn identity_deserializes_from_me_payload() {
    let identity: Identity =
        serde_json::from_str(r#"{"id":"u-1","email":"alice@example.com"}"#).unwrap();
    assert_eq!(identity.id, "u-1");
    assert_eq!(identity.email, "alice@example.com");
}

#[test]
fn identity_rejects_missing_email() {
    let result = serde_json::from_str::<Identity>(r#"{"id":"u-1"}"#);
    assert!(result.is_err());
}

// =============================================================
// LoginRequest serde
// =============================================================

#[test]
fn login_request_serializes_identifier_and_secret() {
    let body = LoginRequest {
        identifier: "admin".to_owned(),
        secret: "admin".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({"identifier": "admin", "secret": "admin"})
    );
}

// =============================================================
// LoginResponse serde
// =============================================================

#[test]
fn login_response_accepted_carries_token() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"success":true,"token":"tok-123"}"#).unwrap();
    assert!(resp.success);
    assert_eq!(resp.token.as_deref(), Some("tok-123"));
}

#[test]
fn login_response_rejected_token_defaults_to_none() {
    let resp: LoginResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
    assert!(!resp.success);
    assert!(resp.token.is_none());
}

use super::*;

// =============================================================
// Endpoint joining
// =============================================================

#[test]
fn endpoint_joins_path_onto_base() {
    assert_eq!(endpoint("/login"), format!("{}/login", auth_base()));
}

#[test]
fn auth_base_defaults_to_relative_prefix() {
    // Without a build-time override the base stays same-origin relative.
    if option_env!("STAFFBOARD_AUTH_BASE").is_none() {
        assert_eq!(auth_base(), "/api/auth");
    }
}

// =============================================================
// Bearer header
// =============================================================

#[test]
fn bearer_value_formats_scheme_and_token() {
    assert_eq!(bearer_value("tok-123"), "Bearer tok-123");
}

// =============================================================
// TransportError
// =============================================================

#[test]
fn network_error_has_no_status() {
    let err = TransportError::network("connection refused");
    assert_eq!(err.status, None);
    assert_eq!(err.to_string(), "connection refused");
}

#[test]
fn status_error_carries_code_and_message() {
    let err = TransportError::status(503);
    assert_eq!(err.status, Some(503));
    assert_eq!(err.to_string(), "request failed: 503");
}

use super::*;

// =============================================================
// Guard decision
// =============================================================

#[test]
fn idle_and_loading_suspend() {
    assert_eq!(evaluate(SessionStatus::Idle, "/payroll"), GuardDecision::Wait);
    assert_eq!(evaluate(SessionStatus::Loading, "/payroll"), GuardDecision::Wait);
}

#[test]
fn unauthenticated_redirects_with_original_target() {
    assert_eq!(
        evaluate(SessionStatus::Unauthenticated, "/payroll"),
        GuardDecision::RedirectToLogin {
            from: "/payroll".to_owned()
        }
    );
}

#[test]
fn authenticated_renders() {
    assert_eq!(evaluate(SessionStatus::Authenticated, "/payroll"), GuardDecision::Render);
}

#[test]
fn guard_only_renders_when_authenticated() {
    for status in [
        SessionStatus::Idle,
        SessionStatus::Loading,
        SessionStatus::Unauthenticated,
    ] {
        assert_ne!(evaluate(status, "/attendance"), GuardDecision::Render);
    }
}

// =============================================================
// Requested target assembly
// =============================================================

#[test]
fn requested_target_is_bare_path_without_query() {
    assert_eq!(requested_target("/payroll", ""), "/payroll");
}

#[test]
fn requested_target_keeps_the_query_string() {
    assert_eq!(requested_target("/payroll", "tab=2"), "/payroll?tab=2");
}

// =============================================================
// Redirect round trip
// =============================================================

#[test]
fn login_route_encodes_from_value() {
    assert_eq!(login_route("/schedules"), "/login?from=%2Fschedules");
}

#[test]
fn login_route_encodes_reserved_query_characters() {
    // A target with its own query must not corrupt the `from` parameter.
    assert_eq!(
        login_route("/payroll?tab=2&period=q3"),
        "/login?from=%2Fpayroll%3Ftab%3D2%26period%3Dq3"
    );
}

#[test]
fn redirect_target_is_resumable_after_login() {
    let GuardDecision::RedirectToLogin { from } =
        evaluate(SessionStatus::Unauthenticated, "/evaluations")
    else {
        panic!("expected redirect");
    };
    let route = login_route(&from);
    let stashed = route.strip_prefix("/login?from=").unwrap();
    assert_eq!(resume_target(Some(stashed)), "/evaluations");
}

#[test]
fn redirect_round_trip_preserves_query_string() {
    let requested = requested_target("/evaluations", "cycle=q3");
    let GuardDecision::RedirectToLogin { from } =
        evaluate(SessionStatus::Unauthenticated, &requested)
    else {
        panic!("expected redirect");
    };
    let route = login_route(&from);
    let stashed = route.strip_prefix("/login?from=").unwrap();
    assert_eq!(resume_target(Some(stashed)), "/evaluations?cycle=q3");
}

// =============================================================
// Resume target validation
// =============================================================

#[test]
fn resume_target_defaults_to_dashboard() {
    assert_eq!(resume_target(None), "/");
    assert_eq!(resume_target(Some("")), "/");
}

#[test]
fn resume_target_rejects_external_destinations() {
    assert_eq!(resume_target(Some("https://evil.example")), "/");
    assert_eq!(resume_target(Some("//evil.example")), "/");
    // Encoded forms must not slip through either.
    assert_eq!(resume_target(Some("%2F%2Fevil.example")), "/");
}

#[test]
fn resume_target_accepts_already_decoded_paths() {
    // Router layers that pre-decode query parameters hand us a plain path.
    assert_eq!(resume_target(Some("/payroll")), "/payroll");
}

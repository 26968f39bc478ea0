//! Access-gate decision tests: the full state machine, one scenario per path.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use fleetgate_core::error::ClientCode;
use fleetgate_gateway::config;
use fleetgate_gateway::http::deny_response;
use fleetgate_gateway::policy::{AccessGate, Decision};

fn gate() -> AccessGate {
    let cfg = config::load_from_str("version: 1\n").unwrap();
    AccessGate::new(&cfg.routes).unwrap()
}

fn bearer_with_payload(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload);
    format!("Bearer {header}.{body}.sig")
}

fn assert_deny(d: Decision, want_code: ClientCode, want_msg: &str) {
    match d {
        Decision::Deny { code, msg } => {
            assert_eq!(code, want_code);
            assert_eq!(msg, want_msg);
        }
        Decision::Allow => panic!("expected deny, got allow"),
    }
}

#[test]
fn unprotected_path_allows_without_headers() {
    assert_eq!(gate().evaluate("/vehicles/42", None), Decision::Allow);
}

#[test]
fn unprotected_path_allows_with_garbage_header() {
    // Headers are never inspected on the fast path.
    assert_eq!(
        gate().evaluate("/vehicles", Some("Bearer %%%not-a-token%%%")),
        Decision::Allow
    );
}

#[test]
fn protected_path_without_header_is_unauthorized() {
    let d = gate().evaluate("/api/booking/123", None);
    assert_deny(d, ClientCode::Unauthorized, "Unauthorized");
}

#[test]
fn single_segment_token_is_invalid() {
    let d = gate().evaluate("/api/admin/users", Some("Bearer abc"));
    assert_deny(d, ClientCode::InvalidToken, "Invalid token");
}

#[test]
fn bad_base64_payload_is_invalid() {
    let d = gate().evaluate("/api/booking", Some("Bearer aaa.!!!.ccc"));
    assert_deny(d, ClientCode::InvalidToken, "Invalid token");
}

#[test]
fn user_role_on_admin_path_is_forbidden() {
    let tok = bearer_with_payload(r#"{"role":"user"}"#);
    let d = gate().evaluate("/api/admin/users", Some(&tok));
    assert_deny(d, ClientCode::Forbidden, "Forbidden");
}

#[test]
fn missing_role_claim_on_admin_path_is_forbidden() {
    let tok = bearer_with_payload(r#"{"sub":"u-9"}"#);
    let d = gate().evaluate("/api/admin/users", Some(&tok));
    assert_deny(d, ClientCode::Forbidden, "Forbidden");
}

#[test]
fn admin_role_on_admin_path_is_allowed() {
    let tok = bearer_with_payload(r#"{"role":"admin"}"#);
    assert_eq!(gate().evaluate("/api/admin/users", Some(&tok)), Decision::Allow);
}

#[test]
fn any_role_on_booking_path_is_allowed() {
    let tok = bearer_with_payload(r#"{"role":"user"}"#);
    assert_eq!(gate().evaluate("/api/booking/7", Some(&tok)), Decision::Allow);
}

#[test]
fn evaluation_is_idempotent() {
    let g = gate();
    let tok = bearer_with_payload(r#"{"role":"user"}"#);
    let first = g.evaluate("/api/admin/users", Some(&tok));
    let second = g.evaluate("/api/admin/users", Some(&tok));
    assert_eq!(first, second);
}

#[test]
fn first_matching_rule_wins() {
    // /api/admin matches before /api/booking even though both are configured;
    // a plain token must not slip through on the admin prefix.
    let tok = bearer_with_payload(r#"{"role":"user"}"#);
    let d = gate().evaluate("/api/admin", Some(&tok));
    assert_deny(d, ClientCode::Forbidden, "Forbidden");
}

#[test]
fn compiled_route_table_preserves_config_order() {
    let g = gate();
    let routes = g.routes();
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].prefix, "/api/admin");
    assert_eq!(routes[0].require_role.as_deref(), Some("admin"));
    assert_eq!(routes[1].prefix, "/api/booking");
    assert!(routes[1].require_role.is_none());
}

#[test]
fn gate_rejects_empty_require_role() {
    let rules = [fleetgate_gateway::config::RouteRule {
        prefix: "/api/admin".into(),
        require_role: Some(String::new()),
    }];
    let err = AccessGate::new(&rules).expect_err("must fail");
    assert_eq!(err.client_code(), ClientCode::BadRequest);
}

#[test]
fn deny_response_status_codes() {
    let unauthorized = deny_response(ClientCode::Unauthorized, "Unauthorized");
    assert_eq!(unauthorized.status().as_u16(), 401);

    let forbidden = deny_response(ClientCode::Forbidden, "Forbidden");
    assert_eq!(forbidden.status().as_u16(), 403);
}

use super::*;

// =============================================================
// ApiClient construction
// =============================================================

#[test]
fn client_with_token_sends_bearer_header() {
    let client = ApiClient::for_token("http://localhost:8000", Some("abc123"));
    assert_eq!(client.authorization().as_deref(), Some("Bearer abc123"));
}

#[test]
fn client_without_token_sends_no_auth_header() {
    let client = ApiClient::for_token("http://localhost:8000", None);
    assert_eq!(client.authorization(), None);
}

#[test]
fn empty_token_is_treated_as_absent() {
    let client = ApiClient::for_token("http://localhost:8000", Some(""));
    assert_eq!(client.authorization(), None);
}

#[test]
fn clients_for_different_tokens_are_distinct_values() {
    let before = ApiClient::for_token("http://localhost:8000", Some("old"));
    let after = ApiClient::for_token("http://localhost:8000", Some("new"));
    assert_ne!(before, after);
    assert_eq!(before.authorization().as_deref(), Some("Bearer old"));
}

#[test]
fn url_joins_base_and_path_with_one_slash() {
    let client = ApiClient::for_token("http://localhost:8000/", None);
    assert_eq!(client.base_url(), "http://localhost:8000");
    assert_eq!(client.url("/sessions"), "http://localhost:8000/sessions");
    assert_eq!(client.url("auth/user"), "http://localhost:8000/auth/user");
}

#[test]
fn session_paths_embed_id() {
    assert_eq!(session_path("s-1"), "/sessions/s-1");
    assert_eq!(session_messages_path("s-1"), "/sessions/s-1/messages");
}

// =============================================================
// ApiEndpoint
// =============================================================

#[test]
fn endpoint_parse_defaults_to_generate() {
    assert_eq!(ApiEndpoint::parse(None), ApiEndpoint::Generate);
    assert_eq!(ApiEndpoint::parse(Some("bogus")), ApiEndpoint::Generate);
    assert_eq!(ApiEndpoint::parse(Some("generate")), ApiEndpoint::Generate);
    assert_eq!(ApiEndpoint::parse(Some("demo")), ApiEndpoint::Demo);
}

#[test]
fn endpoint_toggle_flips_between_demo_and_generate() {
    assert_eq!(ApiEndpoint::Demo.toggled(), ApiEndpoint::Generate);
    assert_eq!(ApiEndpoint::Generate.toggled(), ApiEndpoint::Demo);
}

#[test]
fn endpoint_paths_match_backend_routes() {
    assert_eq!(ApiEndpoint::Demo.path(), "/demo");
    assert_eq!(ApiEndpoint::Generate.path(), "/generate");
    assert_eq!(ApiEndpoint::Demo.as_str(), "demo");
}

// =============================================================
// SSR stubs
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn requests_are_unavailable_off_browser() {
    let client = ApiClient::for_token("http://localhost:8000", Some("abc"));
    let waker = std::task::Waker::noop();
    let mut cx = std::task::Context::from_waker(waker);
    let mut fut = std::pin::pin!(client.current_user());
    match fut.as_mut().poll(&mut cx) {
        std::task::Poll::Ready(result) => assert_eq!(result, Err(ApiError::Unavailable)),
        std::task::Poll::Pending => panic!("stub future should resolve immediately"),
    }
}

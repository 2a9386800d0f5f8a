use super::*;
use crate::util::token_store::{MemoryTokenStore, TokenStore};

#[test]
fn token_present_logs_in_and_goes_home() {
    let action = CallbackAction::from_query(Some("abc123"), None);
    assert_eq!(action, CallbackAction::Login { token: "abc123".to_owned() });
    assert_eq!(action.target(), "/");
}

#[test]
fn token_wins_over_error() {
    let action = CallbackAction::from_query(Some("abc123"), Some("access_denied"));
    assert!(matches!(action, CallbackAction::Login { .. }));
}

#[test]
fn error_goes_home_with_error_param() {
    let action = CallbackAction::from_query(None, Some("access_denied"));
    assert_eq!(action, CallbackAction::Failed { error: "access_denied".to_owned() });
    assert_eq!(action.target(), "/?error=access_denied");
}

#[test]
fn error_param_is_encoded() {
    let action = CallbackAction::from_query(None, Some("bad state&x=1"));
    assert_eq!(action.target(), "/?error=bad+state%26x%3D1");
}

#[test]
fn neither_param_goes_home() {
    assert_eq!(CallbackAction::from_query(None, None), CallbackAction::Home);
    assert_eq!(CallbackAction::from_query(Some(""), Some(" ")), CallbackAction::Home);
    assert_eq!(CallbackAction::Home.target(), "/");
}

#[test]
fn login_action_stores_token_and_starts_fetch() {
    let store = MemoryTokenStore::with_token("old");
    let mut state = AuthState::default();
    let action = CallbackAction::from_query(Some("abc123"), None);

    let ticket = action.apply(&mut state, &store).unwrap();

    assert_eq!(store.get().as_deref(), Some("abc123"));
    assert_eq!(ticket.token, "abc123");
    assert_eq!(state.token.as_deref(), Some("abc123"));
    assert!(state.loading);
}

#[test]
fn failed_action_leaves_auth_untouched() {
    let store = MemoryTokenStore::with_token("existing");
    let mut state = AuthState { loading: false, ..AuthState::default() };
    let before = state.clone();
    let action = CallbackAction::from_query(None, Some("access_denied"));

    assert_eq!(action.apply(&mut state, &store), None);

    assert_eq!(store.get().as_deref(), Some("existing"));
    assert_eq!(state, before);
    assert_eq!(action.target(), "/?error=access_denied");
}

#[test]
fn home_action_leaves_auth_untouched() {
    let store = MemoryTokenStore::default();
    let mut state = AuthState::default();
    let before = state.clone();

    assert_eq!(CallbackAction::Home.apply(&mut state, &store), None);

    assert_eq!(store.get(), None);
    assert_eq!(state, before);
}

use super::*;

fn make_session(id: &str) -> SessionSummary {
    SessionSummary {
        id: id.to_owned(),
        title: format!("title {id}"),
        created_at: None,
        updated_at: "2025-01-01T00:00:00".to_owned(),
        message_count: Some(0),
    }
}

#[test]
fn history_state_default_is_loading() {
    let state = HistoryState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
}

#[test]
fn loaded_keeps_backend_order() {
    let state = HistoryState::loaded(vec![make_session("b"), make_session("a")]);
    assert!(!state.loading);
    assert_eq!(state.items[0].id, "b");
}

#[test]
fn remove_drops_only_matching_row() {
    let mut state = HistoryState::loaded(vec![make_session("a"), make_session("b")]);
    assert!(state.remove("a"));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "b");
    assert!(!state.remove("missing"));
}

#[test]
fn history_href_requests_explicit_load() {
    assert_eq!(history_href("s-1"), "/session/s-1?q=&api=generate&load=true");
}

use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_accepts_numeric_id() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 42,
        "google_id": "g-1",
        "email": "ada@example.com",
        "name": "Ada",
        "picture": "https://img.example.com/ada.png",
        "created_at": "2025-01-01T00:00:00"
    }))
    .unwrap();
    assert_eq!(user.id, "42");
    assert_eq!(user.name.as_deref(), Some("Ada"));
    assert_eq!(user.picture.as_deref(), Some("https://img.example.com/ada.png"));
}

#[test]
fn user_missing_optional_fields_default_to_none() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "email": "ada@example.com"
    }))
    .unwrap();
    assert!(user.name.is_none());
    assert!(user.picture.is_none());
}

#[test]
fn user_rejects_boolean_id() {
    let result: Result<User, _> = serde_json::from_value(serde_json::json!({
        "id": true,
        "email": "ada@example.com"
    }));
    assert!(result.is_err());
}

#[test]
fn display_name_falls_back_to_email() {
    let mut user = User {
        id: "1".to_owned(),
        name: Some("  ".to_owned()),
        email: "ada@example.com".to_owned(),
        picture: None,
    };
    assert_eq!(user.display_name(), "ada@example.com");
    user.name = Some("Ada".to_owned());
    assert_eq!(user.display_name(), "Ada");
}

// =============================================================
// Sessions and messages
// =============================================================

#[test]
fn session_detail_flattens_summary_fields() {
    let detail: SessionDetail = serde_json::from_value(serde_json::json!({
        "id": "s-1",
        "user_id": 7,
        "title": "What is a monad?",
        "created_at": "2025-01-01T00:00:00",
        "updated_at": "2025-01-02T00:00:00",
        "message_count": 2,
        "messages": [
            {
                "id": 1,
                "session_id": "s-1",
                "role": "user",
                "content": "What is a monad?",
                "data": null,
                "created_at": "2025-01-01T00:00:00"
            },
            {
                "id": 2,
                "session_id": "s-1",
                "role": "assistant",
                "content": null,
                "data": {"explanation": "A monoid in the category of endofunctors."},
                "created_at": "2025-01-01T00:00:05"
            }
        ]
    }))
    .unwrap();
    assert_eq!(detail.summary.title, "What is a monad?");
    assert_eq!(detail.summary.message_count, Some(2));
    assert_eq!(detail.messages.len(), 2);
    assert_eq!(detail.messages[1].role, MessageRole::Assistant);
    assert!(detail.messages[1].data.is_some());
}

#[test]
fn unknown_role_maps_to_unknown() {
    let role: MessageRole = serde_json::from_value(serde_json::json!("system")).unwrap();
    assert_eq!(role, MessageRole::Unknown);
}

#[test]
fn new_message_user_omits_data() {
    let body = serde_json::to_value(NewMessage::user("hi")).unwrap();
    assert_eq!(body, serde_json::json!({ "role": "user", "content": "hi" }));
}

#[test]
fn new_message_assistant_carries_payload() {
    let payload = serde_json::json!({ "answer": "42" });
    let body = serde_json::to_value(NewMessage::assistant(payload.clone())).unwrap();
    assert_eq!(body, serde_json::json!({ "role": "assistant", "data": payload }));
}

use super::*;

#[test]
fn conflict_is_detected_from_status() {
    let err = ApiError::Status { status: 409, body: "exists".to_owned() };
    assert!(err.is_conflict());
    assert!(!err.is_unauthorized());
    assert_eq!(err.status(), Some(409));
}

#[test]
fn network_errors_have_no_status() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(err.status(), None);
    assert!(!err.is_conflict());
}

#[test]
fn unauthorized_is_detected_from_status() {
    assert!(ApiError::Status { status: 401, body: String::new() }.is_unauthorized());
}

#[test]
fn display_messages_are_stable() {
    assert_eq!(ApiError::Status { status: 500, body: String::new() }.to_string(), "request failed: 500");
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
    assert_eq!(ApiError::Decode("bad".to_owned()).to_string(), "invalid response: bad");
}

use pretty_assertions::assert_eq;
use shared_types::{ApiError, ApiErrorKind, GENERIC_ERROR_MESSAGE};

// Message priority: server `message`, then server `error`, then the
// transport error's own text, then the generic fallback.

#[test]
fn server_message_field_takes_priority() {
    let err = ApiError::from_response(400, r#"{"message":"Invalid PDF","error":"BAD_UPLOAD"}"#);
    assert_eq!(err.friendly_message(), "Invalid PDF");
}

#[test]
fn server_error_field_is_second_choice() {
    let err = ApiError::from_response(400, r#"{"error":"BAD_UPLOAD"}"#);
    assert_eq!(err.friendly_message(), "BAD_UPLOAD");
}

#[test]
fn transport_detail_is_third_choice() {
    let err = ApiError::network("NetworkError when attempting to fetch resource");
    assert_eq!(
        err.friendly_message(),
        "NetworkError when attempting to fetch resource"
    );
    assert_eq!(err.kind, ApiErrorKind::Network);
}

#[test]
fn generic_fallback_is_last_resort() {
    let err = ApiError::from_response(502, "bad gateway page");
    assert_eq!(err.friendly_message(), GENERIC_ERROR_MESSAGE);

    let err = ApiError::network("");
    assert_eq!(err.friendly_message(), GENERIC_ERROR_MESSAGE);
}

#[test]
fn unauthorized_kind_is_preserved_for_the_auth_guard() {
    let err = ApiError::from_response(401, r#"{"message":"Token expired"}"#);
    assert!(err.is_unauthorized());
    assert_eq!(err.status, Some(401));
}

#[test]
fn four_oh_four_and_server_errors_keep_their_kinds() {
    assert_eq!(
        ApiError::from_response(404, "{}").kind,
        ApiErrorKind::NotFound
    );
    assert_eq!(
        ApiError::from_response(422, "{}").kind,
        ApiErrorKind::BadRequest
    );
    assert_eq!(
        ApiError::from_response(500, "{}").kind,
        ApiErrorKind::Server
    );
}

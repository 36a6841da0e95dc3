use super::*;

#[test]
fn status_error_includes_code_and_body() {
    let err = ApiError::status(500, "Internal Server Error", r#"{"detail":"Failed to retrieve prompts"}"#);
    assert_eq!(
        err.to_string(),
        r#"API returned 500: {"detail":"Failed to retrieve prompts"}"#
    );
}

#[test]
fn status_error_falls_back_to_status_text_for_empty_body() {
    let err = ApiError::status(404, "Not Found", "  ");
    assert_eq!(err.to_string(), "API returned 404: Not Found");
}

#[test]
fn transport_error_formats_cause() {
    let err = ApiError::Transport("NetworkError when attempting to fetch resource.".to_owned());
    assert_eq!(err.to_string(), "request failed: NetworkError when attempting to fetch resource.");
}

#[test]
fn unavailable_error_has_fixed_message() {
    assert_eq!(ApiError::Unavailable.to_string(), "not available on server");
}

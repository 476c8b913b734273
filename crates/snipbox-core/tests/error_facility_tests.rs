use snipbox_core::errors::{FieldErrors, SnipError, SnipErrorKind, SnipboxError};
use snipbox_core_types::RequestId;

#[test]
fn test_not_found_verifiable_by_kind() {
    let err: SnipError = SnipboxError::SnippetNotFound { id: 99 }.into();

    assert_eq!(err.kind(), SnipErrorKind::NotFound);
    assert_eq!(err.code(), "ERR_NOT_FOUND");
    assert_eq!(err.entity_id(), Some("99"));
}

#[test]
fn test_malformed_input_names_field() {
    let err: SnipError = SnipboxError::MalformedInput {
        field: "expires".to_string(),
        reason: "invalid digit found in string".to_string(),
    }
    .into();

    assert_eq!(err.kind(), SnipErrorKind::MalformedInput);
    assert_eq!(err.entity_id(), Some("expires"));
    assert!(err.message().contains("invalid digit"));
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = [
        (SnipErrorKind::MalformedInput, "ERR_MALFORMED_INPUT"),
        (SnipErrorKind::ValidationFailed, "ERR_VALIDATION_FAILED"),
        (SnipErrorKind::NotFound, "ERR_NOT_FOUND"),
        (SnipErrorKind::Configuration, "ERR_CONFIGURATION"),
        (SnipErrorKind::Persistence, "ERR_PERSISTENCE"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_request_id_is_carried_and_displayed() {
    let request_id = RequestId::from_string("req-1".to_string());
    let err = SnipError::new(SnipErrorKind::Configuration)
        .with_op("snippet_search")
        .with_request_id(request_id.clone());

    assert_eq!(err.request_id(), Some(&request_id));
    assert!(err.to_string().contains("(request_id: req-1)"));
}

#[test]
fn test_validation_failed_display_counts_fields() {
    let mut field_errors = FieldErrors::new();
    field_errors.insert("title".to_string(), vec!["a".to_string()]);
    field_errors.insert("expires".to_string(), vec!["b".to_string()]);

    let err = SnipboxError::ValidationFailed { field_errors };
    assert_eq!(err.to_string(), "Validation failed for 2 field(s)");
}

use snipbox_core::forms::{
    SnippetCreateForm, MSG_BLANK, MSG_EXPIRES_NOT_PERMITTED, MSG_TITLE_TOO_LONG,
};
use snipbox_core::{SnipErrorKind, SnipboxError};

fn form(title: &str, content: &str, expires: i64) -> SnippetCreateForm {
    SnippetCreateForm {
        title: title.to_string(),
        content: content.to_string(),
        expires,
    }
}

// ===== CREATION POLICY =====

#[test]
fn test_blank_title_yields_single_title_error() {
    let v = form("", "x", 7).validate();

    assert!(!v.valid());
    assert_eq!(v.field_errors().len(), 1);
    assert_eq!(v.errors_for("title"), [MSG_BLANK]);
}

#[test]
fn test_unpermitted_expiry_yields_single_expires_error() {
    let v = form("ok", "ok", 3).validate();

    assert!(!v.valid());
    assert_eq!(v.field_errors().len(), 1);
    assert_eq!(v.errors_for("expires"), [MSG_EXPIRES_NOT_PERMITTED]);
    assert!(v.errors_for("title").is_empty());
    assert!(v.errors_for("content").is_empty());
}

#[test]
fn test_correct_submission_is_valid() {
    for expires in [1, 7, 365] {
        let v = form("O snail", "Climb Mount Fuji, but slowly, slowly!", expires).validate();
        assert!(v.valid(), "expires={expires} should be accepted");
        assert!(v.field_errors().is_empty());
    }
}

#[test]
fn test_long_blank_title_reports_both_title_messages() {
    let v = form(&" ".repeat(101), "c", 1).validate();

    assert_eq!(v.errors_for("title"), [MSG_BLANK, MSG_TITLE_TOO_LONG]);
}

#[test]
fn test_title_length_counts_characters() {
    let accented = "é".repeat(100);
    assert!(form(&accented, "c", 1).validate().valid());

    let too_long = "é".repeat(101);
    assert_eq!(
        form(&too_long, "c", 1).validate().errors_for("title"),
        [MSG_TITLE_TOO_LONG]
    );
}

#[test]
fn test_each_submission_gets_a_fresh_validator() {
    let bad = form("", "", 0);
    let good = form("t", "c", 7);

    assert!(!bad.validate().valid());
    assert!(good.validate().valid());
    assert!(!bad.validate().valid());
}

// ===== PARSING BEFORE VALIDATION =====

#[test]
fn test_non_integer_expires_is_malformed_not_invalid() {
    let err = SnippetCreateForm::parse("title", "content", "7days").unwrap_err();

    assert_eq!(err.kind(), SnipErrorKind::MalformedInput);
    assert!(!matches!(err, SnipboxError::ValidationFailed { .. }));
}

#[test]
fn test_empty_expires_is_malformed() {
    let err = SnippetCreateForm::parse("title", "content", "").unwrap_err();
    assert_eq!(err.kind(), SnipErrorKind::MalformedInput);
}

#[test]
fn test_parse_then_validate_round() {
    let parsed = SnippetCreateForm::parse("", "body", "7").unwrap();
    let err = parsed.validate().into_result().unwrap_err();

    match err {
        SnipboxError::ValidationFailed { field_errors } => {
            assert_eq!(field_errors.keys().collect::<Vec<_>>(), ["title"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

use crate::errors::{FieldErrors, SnipboxError};

/// Per-submission error accumulator
///
/// One `Validator` belongs to one submission. `check_field` records a message
/// only when its check failed and never short-circuits, so a single pass
/// reports every problem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validator {
    field_errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no check has failed
    pub fn valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Append `message` under `field` unless `passed`
    pub fn check_field(&mut self, passed: bool, field: &str, message: &str) {
        if !passed {
            self.add_field_error(field, message);
        }
    }

    /// Record an error unconditionally
    pub fn add_field_error(&mut self, field: &str, message: &str) {
        self.field_errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Messages recorded for one field (empty when the field passed)
    pub fn errors_for(&self, field: &str) -> &[String] {
        self.field_errors
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn into_field_errors(self) -> FieldErrors {
        self.field_errors
    }

    /// `Ok(())` when valid, otherwise `ValidationFailed` with the full map
    pub fn into_result(self) -> Result<(), SnipboxError> {
        if self.valid() {
            Ok(())
        } else {
            Err(SnipboxError::ValidationFailed {
                field_errors: self.field_errors,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validator_is_valid() {
        let v = Validator::new();
        assert!(v.valid());
        assert!(v.into_result().is_ok());
    }

    #[test]
    fn test_passing_check_records_nothing() {
        let mut v = Validator::new();
        v.check_field(true, "title", "never shown");
        assert!(v.valid());
        assert!(v.errors_for("title").is_empty());
    }

    #[test]
    fn test_failures_accumulate_in_check_order() {
        let mut v = Validator::new();
        v.check_field(false, "title", "first");
        v.check_field(true, "content", "skipped");
        v.check_field(false, "expires", "third");
        v.check_field(false, "title", "second");

        let keys: Vec<_> = v.field_errors().keys().cloned().collect();
        assert_eq!(keys, vec!["title", "expires"]);
        assert_eq!(v.errors_for("title"), ["first", "second"]);
        assert!(!v.valid());
    }

    #[test]
    fn test_into_result_carries_map() {
        let mut v = Validator::new();
        v.check_field(false, "content", "This field cannot be blank");

        match v.into_result() {
            Err(SnipboxError::ValidationFailed { field_errors }) => {
                assert_eq!(field_errors.len(), 1);
                assert_eq!(field_errors["content"], vec!["This field cannot be blank"]);
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }
}

use indexmap::IndexMap;
use snipbox_core_types::RequestId;
use thiserror::Error;

/// Field name → messages, in the order the failing checks ran
pub type FieldErrors = IndexMap<String, Vec<String>>;

/// Result type alias using SnipboxError
pub type Result<T> = std::result::Result<T, SnipboxError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure leaving the core is classified by exactly one kind so that
/// callers can branch on it without matching message text. Each kind maps to
/// a stable code suitable for API responses and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnipErrorKind {
    /// Caller data could not be parsed into the expected shape
    MalformedInput,
    /// Parsed, but rejected by the validation rules
    ValidationFailed,
    /// Record absent or no longer live
    NotFound,
    /// The store dependency is missing
    Configuration,
    /// The store call itself failed
    Persistence,
}

impl SnipErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            SnipErrorKind::MalformedInput => "ERR_MALFORMED_INPUT",
            SnipErrorKind::ValidationFailed => "ERR_VALIDATION_FAILED",
            SnipErrorKind::NotFound => "ERR_NOT_FOUND",
            SnipErrorKind::Configuration => "ERR_CONFIGURATION",
            SnipErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }

    /// True for failures caused by the caller's input rather than the system
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            SnipErrorKind::MalformedInput | SnipErrorKind::ValidationFailed | SnipErrorKind::NotFound
        )
    }
}

/// Canonical structured error type
///
/// Carries the classification plus whatever context the failing layer knew:
/// the operation name, the entity id involved, the request it belongs to and,
/// for validation failures, the complete field error map.
#[derive(Debug, Clone)]
pub struct SnipError {
    kind: SnipErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    field_errors: Option<FieldErrors>,
}

impl SnipError {
    /// Create a new error with the specified kind
    pub fn new(kind: SnipErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            message: String::new(),
            field_errors: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the field error map of a failed validation
    pub fn with_field_errors(mut self, field_errors: FieldErrors) -> Self {
        self.field_errors = Some(field_errors);
        self
    }

    pub fn kind(&self) -> SnipErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Field error map; only present on `ValidationFailed`
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        self.field_errors.as_ref()
    }
}

impl std::fmt::Display for SnipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for SnipError {}

// ========== End Error Facility ==========

/// Domain errors raised while turning caller input into snippet values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnipboxError {
    /// A field could not be parsed (e.g. a non-integer where one is required)
    #[error("Malformed value for field '{field}': {reason}")]
    MalformedInput { field: String, reason: String },

    /// One or more validation rules failed
    #[error("Validation failed for {} field(s)", .field_errors.len())]
    ValidationFailed { field_errors: FieldErrors },

    /// No live snippet with this id
    #[error("Snippet not found: {id}")]
    SnippetNotFound { id: i64 },
}

impl SnipboxError {
    /// Classify this error in the canonical taxonomy
    pub fn kind(&self) -> SnipErrorKind {
        match self {
            SnipboxError::MalformedInput { .. } => SnipErrorKind::MalformedInput,
            SnipboxError::ValidationFailed { .. } => SnipErrorKind::ValidationFailed,
            SnipboxError::SnippetNotFound { .. } => SnipErrorKind::NotFound,
        }
    }
}

impl From<SnipboxError> for SnipError {
    fn from(err: SnipboxError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        match err {
            SnipboxError::MalformedInput { field, .. } => SnipError::new(kind)
                .with_entity_id(field)
                .with_message(message),
            SnipboxError::ValidationFailed { field_errors } => SnipError::new(kind)
                .with_message(message)
                .with_field_errors(field_errors),
            SnipboxError::SnippetNotFound { id } => SnipError::new(kind)
                .with_entity_id(id.to_string())
                .with_message(message),
        }
    }
}

//! Canonical logging macros
//!
//! Callers must depend on `snipbox-core-types` for the event constants.

/// Log the start of an operation
///
/// ```
/// # use snipbox_core::log_op_start;
/// log_op_start!("snippet_view");
/// log_op_start!("snippet_view", snippet_id = 3);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = snipbox_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = snipbox_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use snipbox_core::log_op_end;
/// log_op_end!("snippet_view", duration_ms = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = snipbox_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = snipbox_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation failure
///
/// Client faults (malformed input, validation, not found) are logged at
/// `warn`; everything else at `error`.
///
/// ```
/// # use snipbox_core::log_op_error;
/// # use snipbox_core::errors::SnipboxError;
/// let err = SnipboxError::SnippetNotFound { id: 1 };
/// log_op_error!("snippet_view", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let snip_err: $crate::errors::SnipError = $err.into();
        if snip_err.kind().is_client_error() {
            tracing::warn!(
                component = module_path!(),
                op = $op,
                event = snipbox_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?snip_err.kind(),
                err_code = snip_err.code(),
                $($field)*
            );
        } else {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = snipbox_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?snip_err.kind(),
                err_code = snip_err.code(),
                $($field)*
            );
        }
    }};
}

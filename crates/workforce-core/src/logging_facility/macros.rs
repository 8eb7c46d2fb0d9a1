//! Operation boundary macros
//!
//! Every repository write is bracketed by a start event and either an end
//! or an end_error event. All three share the `component`/`op`/`event`
//! prefix; event names come from `workforce_core::schema`.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        );
    };
}

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use workforce_core::log_op_start;
/// log_op_start!("review_save");
/// log_op_start!("review_save", employee_id = 7);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(info, $op, $crate::schema::EVENT_START $(, $($field)*)?)
    };
}

/// Log the successful end of an operation
///
/// `duration_ms` is mandatory so every end event can be timed.
///
/// ```
/// # use workforce_core::log_op_end;
/// log_op_end!("review_delete", duration_ms = 3, review_id = 1);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            $crate::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log a failed operation with the error's kind and stable code
///
/// Accepts anything convertible into `ExError`, so both store errors and
/// `WorkforceError` values can be passed directly.
///
/// ```
/// # use workforce_core::{log_op_error, errors::WorkforceError};
/// let err = WorkforceError::ReviewNotFound { review_id: 1 };
/// log_op_error!("review_delete", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            error,
            $op,
            $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}

//! Span definitions per operation: compute, storage, export.
//!
//! Callers must depend on `tracing` directly.

/// Create a matrix computation span.
#[macro_export]
macro_rules! compute_span {
    ($date:expr, $gender:expr) => {
        tracing::debug_span!("mysticnum.compute", date = %$date, gender = %$gender)
    };
}

/// Create a storage operation span.
#[macro_export]
macro_rules! storage_span {
    ($op:expr) => {
        tracing::debug_span!("mysticnum.storage", op = $op)
    };
}

/// Create an export span.
#[macro_export]
macro_rules! export_span {
    ($format:expr, $birth_date:expr) => {
        tracing::info_span!("mysticnum.export", format = $format, birth_date = %$birth_date)
    };
}


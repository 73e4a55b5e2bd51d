//! Tracing and logging (shared setup).

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use crate::tracing::{LogTarget, ObservabilityError};

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(target: LogTarget) -> Result<(), ObservabilityError> {
    crate::tracing::init(target)
}

//! Error types for the cursor module.

use thiserror::Error;

/// Errors that can occur while advancing a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CursorError {
    /// The cursor was advanced after its last item was returned.
    #[error("Cursor exhausted: all {len} items have already been returned")]
    Exhausted { len: usize },
}

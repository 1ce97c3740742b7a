//! Trait definitions for the cursor module.

use super::error::CursorError;

/// Logical state of a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// At least one more item can be returned.
    HasMore,
    /// Every item has been returned. Terminal.
    Exhausted,
}

/// A single-pass, forward-only cursor over a fixed snapshot of items.
///
/// There is no reset and no removal. Once [`has_next`](Cursor::has_next)
/// returns `false` it keeps returning `false` for the lifetime of the cursor.
pub trait Cursor {
    /// The type of item yielded by this cursor.
    type Item;

    /// Whether another item is available. Never advances the cursor.
    fn has_next(&self) -> bool;

    /// Returns the current item and advances by one.
    ///
    /// Fails with [`CursorError::Exhausted`] when no item is left; the
    /// cursor is left unchanged in that case.
    fn try_next(&mut self) -> Result<Self::Item, CursorError>;

    /// Current logical state, derived from [`has_next`](Cursor::has_next).
    fn state(&self) -> CursorState {
        if self.has_next() {
            CursorState::HasMore
        } else {
            CursorState::Exhausted
        }
    }
}

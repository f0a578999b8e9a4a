//! Argument, state and index guards.
//!
//! These checks work on plain booleans and integers rather than on a
//! [`Value`](crate::Value). Indices are signed so that negative input can be
//! reported instead of wrapping.

/// A guard over arguments, state or indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guard {
    /// An expression about a method argument must hold.
    Argument,
    /// An expression about the receiver's state must hold.
    State,
    /// `index` must address an element of a collection of `size`.
    ElementIndex,
    /// `index` must be a position in a collection of `size` (may equal `size`).
    PositionIndex,
    /// `start..end` must be a valid range of positions.
    PositionIndexes,
}

impl Guard {
    /// Returns the message used when the caller supplies none.
    pub fn default_message(self) -> &'static str {
        match self {
            Guard::Argument => "illegal argument",
            Guard::State => "illegal state",
            Guard::ElementIndex => "index out of bounds",
            Guard::PositionIndex => "position out of bounds",
            Guard::PositionIndexes => "position range out of bounds",
        }
    }

    /// Returns the machine-readable code, which matches the guard's method name.
    pub fn code(self) -> &'static str {
        match self {
            Guard::Argument => "check_argument",
            Guard::State => "check_state",
            Guard::ElementIndex => "check_element_index",
            Guard::PositionIndex => "check_position_index",
            Guard::PositionIndexes => "check_position_indexes",
        }
    }
}

/// Returns true if `index` is not a valid element index for `size`.
///
/// ```rust
/// use preconditions::check::bounds::element_index_fails;
///
/// assert!(element_index_fails(10, 10));
/// assert!(!element_index_fails(9, 10));
/// ```
pub fn element_index_fails(index: i64, size: i64) -> bool {
    index < 0 || index >= size
}

/// Returns true if `index` is not a valid position for `size`.
pub fn position_index_fails(index: i64, size: i64) -> bool {
    index < 0 || index > size
}

/// Returns true if `start..end` is not a valid position range for `size`.
pub fn position_indexes_fail(start: i64, end: i64, size: i64) -> bool {
    start < 0 || end < start || end > size
}

use std::error::Error;

/// Boxed error produced by a fallible comparison function.
pub(crate) type ComparisonFailure = Box<dyn Error + Send + Sync>;

/// Errors surfaced by operations on an [`OrderedTree`](crate::OrderedTree).
///
/// "Value not found" and "value already present" are expected outcomes
/// reported through the `bool` returned by the corresponding operation,
/// not through this type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The tree's comparison function failed to order a pair of values.
    ///
    /// The tree is left exactly as it was before the failing call.
    #[error("the comparison function could not order two values")]
    Comparison(#[source] ComparisonFailure),

    /// A `copy_to` start index at or past the end of the destination.
    #[error("start index {start} is out of bounds for a destination of length {len}")]
    StartIndexOutOfBounds {
        /// The offending start index.
        start: usize,
        /// The destination length.
        len: usize,
    },

    /// A `copy_to` destination without room for the whole tree.
    #[error("the destination has room for {room} values but the tree holds {count}")]
    DestinationTooSmall {
        /// Slots available from the start index to the end.
        room: usize,
        /// Values the tree would have written.
        count: usize,
    },
}

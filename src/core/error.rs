// ============================================================================
// spark-collection - Errors
// The single failure mode of a collection: an index outside the valid range
// ============================================================================

use std::fmt;

// =============================================================================
// OPERATION
// =============================================================================

/// The collection operation that rejected an index.
///
/// Each operation knows its own valid range. Everything checks against
/// `[0, count)` except [`Operation::InsertAt`], which also accepts `count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Get,
    Set,
    InsertAt,
    Exchange,
    RemoveAt,
}

impl Operation {
    /// Whether `count` itself is a valid index for this operation.
    pub const fn accepts_count(self) -> bool {
        matches!(self, Operation::InsertAt)
    }

    /// Name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Get => "get",
            Operation::Set => "set",
            Operation::InsertAt => "insert_at",
            Operation::Exchange => "exchange",
            Operation::RemoveAt => "remove_at",
        }
    }

    /// Renders the valid index range for a collection of `count` elements.
    pub fn valid_range(self, count: usize) -> impl fmt::Display {
        ValidRange {
            operation: self,
            count,
        }
    }

    /// Whether `index` lies inside this operation's valid range.
    pub const fn allows(self, index: usize, count: usize) -> bool {
        if self.accepts_count() {
            index <= count
        } else {
            index < count
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Renders the valid index range of an operation: `[0, 3)` or `[0, 3]`.
struct ValidRange {
    operation: Operation,
    count: usize,
}

impl fmt::Display for ValidRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.operation.accepts_count() { ']' } else { ')' };
        write!(f, "[0, {}{close}", self.count)
    }
}

// =============================================================================
// COLLECTION ERROR
// =============================================================================

/// Error returned by a collection operation.
///
/// A rejected call never modifies the collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// The index is negative or past the end of the operation's valid range.
    #[error(
        "index {index} out of range for {operation} on collection of count {count} (valid: {})",
        .operation.valid_range(*.count)
    )]
    IndexOutOfRange {
        /// The index as the caller passed it, negatives included.
        index: i128,
        /// Live element count at the time of the call.
        count: usize,
        /// The rejected operation.
        operation: Operation,
    },
}

impl CollectionError {
    pub(crate) fn out_of_range(index: i128, count: usize, operation: Operation) -> Self {
        CollectionError::IndexOutOfRange {
            index,
            count,
            operation,
        }
    }

    /// The rejected index.
    pub fn index(&self) -> i128 {
        match self {
            CollectionError::IndexOutOfRange { index, .. } => *index,
        }
    }

    /// The operation that rejected the index.
    pub fn operation(&self) -> Operation {
        match self {
            CollectionError::IndexOutOfRange { operation, .. } => *operation,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CollectionError>;

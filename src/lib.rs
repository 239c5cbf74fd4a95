// ============================================================================
// spark-collection - A Growable Array Collection for Rust
// ============================================================================
//
// Collection<T>: contiguous storage that starts at 16 slots and doubles when
// full, bounds-checked positional operations that return errors instead of
// panicking, and a canonical `[a, b, c]` string form that nests.
// ============================================================================

#[macro_use]
mod macros;

pub mod collection;
pub mod core;

// Re-export core items at crate root for ergonomic access
pub use crate::core::constants;
pub use crate::core::error::{CollectionError, Operation, Result};
pub use crate::core::policy::GrowthPolicy;
pub use crate::core::position::Position;

// Re-export the collection
pub use collection::Collection;

// =============================================================================
// TESTS
// =============================================================================

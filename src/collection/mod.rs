// ============================================================================
// spark-collection - Collection Module
// The growable array and its string form and std trait integration
// ============================================================================
//
// Collection keeps its live elements in a Vec and tracks a logical capacity
// on top of it:
//
// 1. Capacity starts at the policy's initial size (16 by default)
// 2. An insert into a full collection grows capacity by the policy's factor
// 3. Capacity never shrinks, so clear() keeps the allocation
// ============================================================================

mod display;
mod list;
mod traits;

pub use list::Collection;

// ============================================================================
// spark-collection - Constants
// Default sizing for collections built without an explicit growth policy
// ============================================================================

// =============================================================================
// CAPACITY
// =============================================================================

/// Capacity of a collection created empty.
pub const DEFAULT_CAPACITY: usize = 16;

/// Smallest capacity a growth policy will start from.
pub const MIN_CAPACITY: usize = 1;

// =============================================================================
// GROWTH
// =============================================================================

/// Factor applied to the capacity when a collection runs out of room.
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// Smallest accepted growth factor. Anything lower would break doubling.
pub const MIN_GROWTH_FACTOR: usize = 2;

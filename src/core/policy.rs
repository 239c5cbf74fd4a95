// ============================================================================
// spark-collection - Growth Policy
// How much room a collection starts with and how it grows when full
// ============================================================================

use crate::core::constants::{
    DEFAULT_CAPACITY, DEFAULT_GROWTH_FACTOR, MIN_CAPACITY, MIN_GROWTH_FACTOR,
};

/// Capacity configuration for a [`Collection`](crate::Collection).
///
/// The default starts at 16 slots and doubles whenever the collection is
/// full. Both values can be raised but never lowered below the point where
/// growth would stop at least doubling.
///
/// # Example
///
/// ```
/// use spark_collection::{Collection, GrowthPolicy};
///
/// let policy = GrowthPolicy::default()
///     .with_initial_capacity(4)
///     .with_growth_factor(3);
///
/// let mut numbers: Collection<i32> = Collection::with_policy(policy);
/// assert_eq!(numbers.capacity(), 4);
///
/// numbers.add_range([1, 2, 3, 4, 5]);
/// assert_eq!(numbers.capacity(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    initial_capacity: usize,
    growth_factor: usize,
}

impl GrowthPolicy {
    /// The default policy: 16 slots, doubling.
    pub const fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Sets the capacity of an empty collection. Clamped to at least 1.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        if capacity < MIN_CAPACITY {
            tracing::warn!(capacity, min = MIN_CAPACITY, "initial capacity raised to minimum");
        }
        self.initial_capacity = capacity.max(MIN_CAPACITY);
        self
    }

    /// Sets the factor applied on growth. Clamped to at least 2.
    #[must_use]
    pub fn with_growth_factor(mut self, factor: usize) -> Self {
        if factor < MIN_GROWTH_FACTOR {
            tracing::warn!(factor, min = MIN_GROWTH_FACTOR, "growth factor raised to minimum");
        }
        self.growth_factor = factor.max(MIN_GROWTH_FACTOR);
        self
    }

    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub const fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Capacity for a collection built from `count` initial values.
    ///
    /// The initial capacity, multiplied by the growth factor until it holds
    /// every value.
    pub fn starting_capacity(&self, count: usize) -> usize {
        let mut capacity = self.initial_capacity;
        while capacity < count {
            capacity = capacity.saturating_mul(self.growth_factor);
        }
        capacity
    }

    /// Capacity after growing from `current` to fit at least `required`.
    ///
    /// Never less than `current * factor`. A bulk insert that needs more
    /// than that gets exactly what it needs.
    pub fn grown_capacity(&self, current: usize, required: usize) -> usize {
        current
            .max(MIN_CAPACITY)
            .saturating_mul(self.growth_factor)
            .max(required)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new()
    }
}

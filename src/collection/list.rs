// ============================================================================
// spark-collection - Collection
// A contiguous, growable array with bounds-checked positional operations
// ============================================================================

use std::slice::{Iter, IterMut};

use crate::core::error::{CollectionError, Operation, Result};
use crate::core::policy::GrowthPolicy;
use crate::core::position::Position;

// =============================================================================
// COLLECTION
// =============================================================================

/// An ordered, indexable, growable sequence of `T`.
///
/// Elements live contiguously at positions `[0, count)`. The collection
/// tracks its own capacity: it starts at 16 and at least doubles whenever an
/// insert finds no free slot. Capacity never shrinks, not even on
/// [`clear`](Collection::clear).
///
/// Every positional operation is bounds-checked and returns
/// [`CollectionError::IndexOutOfRange`] instead of panicking. A rejected
/// call leaves the collection untouched.
///
/// # Example
///
/// ```
/// use spark_collection::Collection;
///
/// let mut names = Collection::new();
/// names.add("Ivan");
/// names.add("Maria");
///
/// assert_eq!(names.get(0), Ok(&"Ivan"));
/// assert!(names.get(2).is_err());
///
/// names.insert_at(1, "Peter").unwrap();
/// names.exchange(0, 2).unwrap();
/// assert_eq!(names.to_string(), "[Maria, Peter, Ivan]");
///
/// assert_eq!(names.remove_at(1), Ok("Peter"));
/// assert_eq!(names.count(), 2);
/// assert_eq!(names.capacity(), 16);
/// ```
pub struct Collection<T> {
    /// Live elements. The allocation is always at least `capacity`.
    items: Vec<T>,

    /// Logical capacity, grown only through `policy`.
    capacity: usize,

    policy: GrowthPolicy,
}

impl<T> Collection<T> {
    /// Create an empty collection with capacity 16.
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    /// Create an empty collection sized and grown by `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        let capacity = policy.initial_capacity();
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            policy,
        }
    }

    /// Create a collection holding one value.
    pub fn single(value: T) -> Self {
        let mut collection = Self::new();
        collection.add(value);
        collection
    }

    /// Create a collection holding `values` in order.
    ///
    /// Capacity is 16, doubled as often as needed to hold every value.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_values_with_policy(values, GrowthPolicy::default())
    }

    /// Like [`from_values`](Collection::from_values), with a custom policy.
    pub fn from_values_with_policy<I>(values: I, policy: GrowthPolicy) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = values.into_iter().collect();
        Self::from_vec_with_policy(items, policy)
    }

    pub(crate) fn from_vec_with_policy(mut items: Vec<T>, policy: GrowthPolicy) -> Self {
        let capacity = policy.starting_capacity(items.len());
        items.reserve_exact(capacity - items.len());
        Self {
            items,
            capacity,
            policy,
        }
    }

    // =========================================================================
    // COUNT / CAPACITY
    // =========================================================================

    /// Number of live elements.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the collection holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocated slots, always at least [`count`](Collection::count).
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The growth policy in effect.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    // =========================================================================
    // BOUNDS
    // =========================================================================

    /// Map `index` to a position valid for `operation`, or explain why not.
    fn check<P: Position>(&self, index: P, operation: Operation) -> Result<usize> {
        let count = self.items.len();
        match index.to_offset() {
            Some(offset) if operation.allows(offset, count) => Ok(offset),
            _ => {
                let err = CollectionError::out_of_range(index.to_signed(), count, operation);
                tracing::trace!(%err, "rejected index");
                Err(err)
            }
        }
    }

    // =========================================================================
    // GROWTH
    // =========================================================================

    /// Make room for `required` elements, growing by the policy if needed.
    fn ensure_capacity(&mut self, required: usize) {
        if required <= self.capacity {
            return;
        }

        let old_capacity = self.capacity;
        let new_capacity = self.policy.grown_capacity(old_capacity, required);
        self.items.reserve_exact(new_capacity - self.items.len());
        self.capacity = new_capacity;

        tracing::debug!(
            old_capacity,
            new_capacity,
            count = self.items.len(),
            "collection grew"
        );
    }

    // =========================================================================
    // GET / SET
    // =========================================================================

    /// Returns the element at `index`.
    ///
    /// Fails if `index` is negative or not below [`count`](Collection::count).
    pub fn get<P: Position>(&self, index: P) -> Result<&T> {
        let offset = self.check(index, Operation::Get)?;
        Ok(&self.items[offset])
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut<P: Position>(&mut self, index: P) -> Result<&mut T> {
        let offset = self.check(index, Operation::Get)?;
        Ok(&mut self.items[offset])
    }

    /// Replaces the element at `index`, returning the old one.
    pub fn set<P: Position>(&mut self, index: P, value: T) -> Result<T> {
        let offset = self.check(index, Operation::Set)?;
        Ok(std::mem::replace(&mut self.items[offset], value))
    }

    // =========================================================================
    // ADD
    // =========================================================================

    /// Appends `value` at the end, growing when the collection is full.
    pub fn add(&mut self, value: T) {
        self.ensure_capacity(self.items.len() + 1);
        self.items.push(value);
    }

    /// Appends every value in order.
    ///
    /// Grows once up front for as many values as the iterator reports, so a
    /// slice or array batch costs at most one reallocation.
    pub fn add_range<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let (lower, _) = values.size_hint();
        self.ensure_capacity(self.items.len().saturating_add(lower));

        for value in values {
            self.add(value);
        }
    }

    // =========================================================================
    // INSERT / REMOVE
    // =========================================================================

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// `index` may equal [`count`](Collection::count), which appends.
    pub fn insert_at<P: Position>(&mut self, index: P, value: T) -> Result<()> {
        let offset = self.check(index, Operation::InsertAt)?;
        self.ensure_capacity(self.items.len() + 1);
        self.items.insert(offset, value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    pub fn remove_at<P: Position>(&mut self, index: P) -> Result<T> {
        let offset = self.check(index, Operation::RemoveAt)?;
        Ok(self.items.remove(offset))
    }

    // =========================================================================
    // EXCHANGE
    // =========================================================================

    /// Swaps the elements at `first` and `second`.
    ///
    /// Both indices are checked before anything moves.
    pub fn exchange<P: Position, Q: Position>(&mut self, first: P, second: Q) -> Result<()> {
        let a = self.check(first, Operation::Exchange)?;
        let b = self.check(second, Operation::Exchange)?;
        self.items.swap(a, b);
        Ok(())
    }

    // =========================================================================
    // CLEAR
    // =========================================================================

    /// Removes every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    // =========================================================================
    // ACCESS
    // =========================================================================

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Converts into a `Vec` of the live elements.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Collection<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
            policy: self.policy,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

// ============================================================================
// spark-collection - Macros
// ============================================================================

/// Create a [`Collection`](crate::Collection) from a list of values.
///
/// The variadic counterpart of [`Collection::from_values`](crate::Collection::from_values):
/// capacity is 16, doubled until every value fits.
///
/// # Usage
///
/// ```rust
/// use spark_collection::{collection, Collection};
///
/// let numbers = collection![5, 6, 7];
/// assert_eq!(numbers.count(), 3);
/// assert_eq!(numbers.to_string(), "[5, 6, 7]");
///
/// let empty: Collection<String> = collection![];
/// assert_eq!(empty.capacity(), 16);
/// ```
#[macro_export]
macro_rules! collection {
    () => {
        $crate::Collection::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Collection::from_values([$($value),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::Collection;

    #[test]
    fn empty_macro_uses_default_capacity() {
        let c: Collection<u8> = collection![];
        assert_eq!(c.count(), 0);
        assert_eq!(c.capacity(), 16);
    }

    #[test]
    fn trailing_comma() {
        let c = collection!["Ivan", "Maria",];
        assert_eq!(c.count(), 2);
        assert_eq!(c.get(1), Ok(&"Maria"));
    }

    #[test]
    fn more_values_than_default_capacity() {
        let c = collection![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
        assert_eq!(c.count(), 17);
        assert_eq!(c.capacity(), 32);
    }
}

// ============================================================================
// spark-collection - String Form
// `[e0, e1, ..., en]`, with nested collections rendered recursively
// ============================================================================

use std::fmt;

use super::list::Collection;

const OPEN: &str = "[";
const CLOSE: &str = "]";
const SEPARATOR: &str = ", ";

/// Canonical string form: elements in order, separated by `", "`, inside
/// square brackets. An empty collection renders as `[]`.
///
/// Elements render through their own `Display`, so a collection of
/// collections nests naturally. Mixed element types work through
/// `Box<dyn Display>`:
///
/// ```
/// use std::fmt::Display;
/// use spark_collection::{collection, Collection};
///
/// let names = collection!["Peter", "Maria"];
/// let numbers = collection![1, 2, 3];
/// let empty: Collection<f64> = Collection::new();
///
/// let nested: Collection<Box<dyn Display>> =
///     collection![Box::new(names) as Box<dyn Display>, Box::new(numbers), Box::new(empty)];
///
/// assert_eq!(nested.to_string(), "[[Peter, Maria], [1, 2, 3], []]");
/// ```
impl<T: fmt::Display> fmt::Display for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(OPEN)?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            // Forward the formatter so width/precision reach each element.
            fmt::Display::fmt(item, f)?;
        }
        f.write_str(CLOSE)
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("items", &self.as_slice())
            .field("count", &self.count())
            .field("capacity", &self.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_renders_brackets() {
        let c: Collection<i32> = Collection::new();
        assert_eq!(c.to_string(), "[]");
    }

    #[test]
    fn single_has_no_separator() {
        assert_eq!(Collection::single(1).to_string(), "[1]");
    }

    #[test]
    fn elements_are_comma_space_separated() {
        assert_eq!(Collection::from_values([5, 6, 7]).to_string(), "[5, 6, 7]");
    }

    #[test]
    fn nested_same_type() {
        let inner = Collection::from_values([
            Collection::from_values(["a", "b"]),
            Collection::single("c"),
            Collection::new(),
        ]);
        assert_eq!(inner.to_string(), "[[a, b], [c], []]");
    }

    #[test]
    fn deep_nesting() {
        let level1 = Collection::single(1);
        let level2 = Collection::single(level1);
        let level3 = Collection::from_values([level2.clone(), level2]);
        assert_eq!(level3.to_string(), "[[[1]], [[1]]]");
    }

    #[test]
    fn format_spec_applies_to_elements() {
        let c = Collection::from_values([1.0, 2.5]);
        assert_eq!(format!("{c:.2}"), "[1.00, 2.50]");
    }

    #[test]
    fn debug_shows_count_and_capacity() {
        let c = Collection::from_values([1, 2, 3]);
        let debug = format!("{c:?}");
        assert!(debug.contains("Collection"));
        assert!(debug.contains("[1, 2, 3]"));
        assert!(debug.contains("capacity: 16"));
    }
}

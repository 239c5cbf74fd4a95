// ============================================================================
// spark-collection - Positions
// Integer index arguments, signed or unsigned, mapped onto logical positions
// ============================================================================

/// An integer usable as an index argument.
///
/// Collection operations take any primitive integer so that callers working
/// in signed arithmetic can pass their values straight through. A negative
/// value never names a position and is rejected as out of range, with the
/// original value kept for the error.
///
/// Untyped literals fall back to `i32`, so `collection.get(-1)` compiles and
/// returns an error instead of failing to type-check.
pub trait Position: Copy {
    /// The logical position this value names, or `None` if it is negative
    /// or does not fit in `usize`.
    fn to_offset(self) -> Option<usize>;

    /// The value as the caller wrote it, for error reporting.
    fn to_signed(self) -> i128;
}

macro_rules! impl_position {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Position for $ty {
                #[inline]
                fn to_offset(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline]
                fn to_signed(self) -> i128 {
                    i128::try_from(self).unwrap_or(i128::MAX)
                }
            }
        )+
    };
}

impl_position!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_values_map_directly() {
        assert_eq!(7usize.to_offset(), Some(7));
        assert_eq!(0u8.to_offset(), Some(0));
        assert_eq!(u32::MAX.to_signed(), i128::from(u32::MAX));
    }

    #[test]
    fn negative_values_have_no_offset() {
        assert_eq!((-1i32).to_offset(), None);
        assert_eq!(isize::MIN.to_offset(), None);
        assert_eq!((-1i64).to_signed(), -1);
    }

    #[test]
    fn literal_fallback_is_i32() {
        fn offset_of<P: Position>(p: P) -> Option<usize> {
            p.to_offset()
        }

        assert_eq!(offset_of(3), Some(3));
        assert_eq!(offset_of(-3), None);
    }
}

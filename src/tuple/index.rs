use crate::util::error::TupleError;

/// An integer usable as a runtime tuple index.
///
/// Implemented for every primitive integer type. Values that cannot name a
/// slot (negative, or too wide for `usize`) map to `usize::MAX`, which is
/// always out of range.
pub trait TupleIndex: Copy {
    fn to_slot(self) -> usize;
}

macro_rules! impl_tuple_index {
    ($($t:ty),* $(,)?) => {
        $(
            impl TupleIndex for $t {
                #[inline(always)]
                fn to_slot(self) -> usize {
                    usize::try_from(self).unwrap_or(usize::MAX)
                }
            }
        )*
    };
}

impl_tuple_index!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Compile-time bounds proof for index `I` into a tuple of length `N`.
///
/// Referencing [`InBounds::OK`] forces evaluation when the caller is
/// monomorphized, so an out-of-range constant index is a build error.
pub(crate) struct InBounds<const I: usize, const N: usize>;

impl<const I: usize, const N: usize> InBounds<I, N> {
    pub(crate) const OK: () = assert!(
        I < N,
        "IndexOutOfBounds: compile-time index must be less than the tuple length"
    );
}

/// Bounds check for runtime-indexed access.
///
/// Only asserts in debug builds, or in any build with the `checked-index`
/// feature. Otherwise compiles to nothing.
#[inline(always)]
#[track_caller]
pub(crate) fn check_runtime_index(index: usize, len: usize) {
    if cfg!(any(debug_assertions, feature = "checked-index")) {
        assert!(index < len, "{}", TupleError::IndexOutOfBounds { index, len });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_likes_map_to_slots() {
        assert_eq!(2, 2u8.to_slot());
        assert_eq!(7, 7i64.to_slot());
        assert_eq!(0, 0isize.to_slot());
        assert_eq!(usize::MAX, (-1i32).to_slot());
        assert_eq!(usize::MAX, i8::MIN.to_slot());
    }

    #[test]
    fn in_range_passes() {
        check_runtime_index(0, 1);
        check_runtime_index(3, 4);
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "checked-index"))]
    #[should_panic(expected = "IndexOutOfBounds: index 4 is out of range for a tuple of length 4")]
    fn out_of_range_asserts() {
        check_runtime_index(4, 4);
    }
}

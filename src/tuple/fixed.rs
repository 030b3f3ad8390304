use std::{fmt, slice};

use bytemuck::Pod;
use itertools::Itertools;

use crate::util::error::{validate_size, TupleError};

use super::index::{check_runtime_index, InBounds, TupleIndex};

/// A value holding exactly `N` elements of `T`, stored contiguously in
/// index order.
///
/// The layout is that of `[T; N]`, so a tuple of register types can be
/// passed around like a plain array: no heap, no indirection, copied
/// bitwise.
///
/// A tuple must hold at least one element. Naming a zero-length tuple in
/// code that gets built is a compile error:
///
/// ```compile_fail,E0080
/// use fixed_tuple::FixedTuple;
///
/// let empty = FixedTuple::<u8, 0>::new([]);
/// ```
///
/// There is no all-zeroes constructor that could skip that check:
///
/// ```compile_fail,E0277
/// use fixed_tuple::FixedTuple;
///
/// let empty: FixedTuple<u8, 0> = bytemuck::Zeroable::zeroed();
/// ```
///
/// Supplying the wrong number of elements does not type check either:
///
/// ```compile_fail,E0308
/// use fixed_tuple::FixedTuple;
///
/// let t = FixedTuple::<u8, 3>::new([1, 2]);
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Index,
    derive_more::IndexMut,
)]
#[repr(transparent)]
pub struct FixedTuple<T, const N: usize> {
    #[index]
    #[index_mut]
    storage: [T; N],
}

impl<T, const N: usize> FixedTuple<T, N> {
    /// Number of elements in every tuple of this type.
    pub const LEN: usize = N;

    pub(super) const SIZE_CHECK: () = match validate_size(N) {
        Ok(()) => (),
        Err(_) => panic!("InvalidSize: a fixed tuple must hold at least one element"),
    };

    /// Construct a tuple whose element `i` is `elements[i]`.
    #[inline]
    pub const fn new(elements: [T; N]) -> Self {
        let () = Self::SIZE_CHECK;
        Self { storage: elements }
    }

    /// Construct a tuple by calling `f` once per index, in index order.
    #[inline]
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::new(std::array::from_fn(f))
    }

    /// Construct a tuple from exactly `N` items.
    ///
    /// Fails with [`TupleError::ArityMismatch`] if the iterator yields fewer
    /// or more items. At most `N + 1` items are pulled, so for an over-long
    /// (or endless) iterator `actual` is reported as `N + 1`.
    pub fn try_from_iter<I>(elements: I) -> Result<Self, TupleError>
    where
        I: IntoIterator<Item = T>,
        T: Copy,
    {
        let mut iter = elements.into_iter();
        let mut slots = Self::uninit();

        for i in 0..N {
            match iter.next() {
                Some(value) => slots.write(i, value),
                None => return Err(arity_mismatch(N, i)),
            }
        }

        if iter.next().is_some() {
            return Err(arity_mismatch(N, N + 1));
        }

        // UNSAFE: the loop above wrote every slot
        Ok(unsafe { slots.assume_init() })
    }

    /// The number of elements, `N`.
    #[allow(clippy::len_without_is_empty)]
    #[inline(always)]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns the underlying array.
    #[inline(always)]
    pub fn into_array(self) -> [T; N] {
        self.storage
    }

    /// Apply `f` to each element, producing a tuple of the results.
    #[inline]
    pub fn map<U, F>(self, f: F) -> FixedTuple<U, N>
    where
        F: FnMut(T) -> U,
    {
        FixedTuple::new(self.storage.map(f))
    }

    /// Address of the first element.
    ///
    /// The `N` elements follow contiguously. The pointer is valid while
    /// `self` is alive and not moved; nothing stops the caller from reading
    /// past element `N - 1`.
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Mutable address of the first element. See [`Self::as_ptr`].
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.storage.iter_mut()
    }

    /// Mutable reference to the element at constant index `I`.
    #[inline(always)]
    pub fn get_mut<const I: usize>(&mut self) -> &mut T {
        let () = InBounds::<I, N>::OK;
        &mut self.storage[I]
    }
}

impl<T: Copy, const N: usize> FixedTuple<T, N> {
    /// Construct a tuple with every element set to `value`.
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    /// Construct a tuple from a slice of exactly `N` elements.
    ///
    /// Fails with [`TupleError::ArityMismatch`] if `elements.len() != N`.
    pub fn try_from_slice(elements: &[T]) -> Result<Self, TupleError> {
        let () = Self::SIZE_CHECK;

        if elements.len() != N {
            return Err(arity_mismatch(N, elements.len()));
        }

        if N == 1 {
            // Single value: broadcast it.
            return Ok(Self::splat(elements[0]));
        }

        Ok(Self::from_fn(|i| elements[i]))
    }

    /// Returns the element at constant index `I`.
    ///
    /// An index out of range fails to build:
    ///
    /// ```compile_fail,E0080
    /// use fixed_tuple::FixedTuple;
    ///
    /// let t = FixedTuple::new([1, 2, 3]);
    /// let x = t.get::<3>();
    /// ```
    #[inline(always)]
    pub const fn get<const I: usize>(&self) -> T {
        let () = InBounds::<I, N>::OK;
        self.storage[I]
    }

    /// Overwrites the element at constant index `I`.
    #[inline(always)]
    pub fn set<const I: usize>(&mut self, value: T) {
        let () = InBounds::<I, N>::OK;
        self.storage[I] = value;
    }

    /// Returns the element at a runtime `index`, without a bounds check in
    /// release builds.
    ///
    /// # Safety
    ///
    /// `index` must be less than `N`. This is asserted in debug builds and
    /// with the `checked-index` feature; otherwise an out-of-range index is
    /// undefined behavior. Use [`Self::try_get`] or indexing for a checked
    /// read.
    #[inline(always)]
    #[track_caller]
    pub unsafe fn get_unchecked(&self, index: impl TupleIndex) -> T {
        let index = index.to_slot();
        check_runtime_index(index, N);

        // SAFETY: the caller guarantees `index < N`
        unsafe { self.as_ptr().add(index).read() }
    }

    /// Overwrites the element at a runtime `index`, without a bounds check
    /// in release builds.
    ///
    /// # Safety
    ///
    /// Same contract as [`Self::get_unchecked`].
    #[inline(always)]
    #[track_caller]
    pub unsafe fn set_unchecked(&mut self, index: impl TupleIndex, value: T) {
        let index = index.to_slot();
        check_runtime_index(index, N);

        // SAFETY: the caller guarantees `index < N`
        unsafe { self.as_mut_ptr().add(index).write(value) }
    }

    /// Returns the element at `index`, or [`TupleError::IndexOutOfBounds`].
    pub fn try_get(&self, index: impl TupleIndex) -> Result<T, TupleError> {
        let index = index.to_slot();
        match self.storage.get(index) {
            Some(&value) => Ok(value),
            None => Err(index_out_of_bounds(index, N)),
        }
    }

    /// Overwrites the element at `index`, or fails with
    /// [`TupleError::IndexOutOfBounds`] leaving `self` unchanged.
    pub fn try_set(&mut self, index: impl TupleIndex, value: T) -> Result<(), TupleError> {
        let index = index.to_slot();
        match self.storage.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(index_out_of_bounds(index, N)),
        }
    }

    /// Combine two tuples element by element.
    #[inline]
    pub fn zip_with<U, R, F>(self, other: FixedTuple<U, N>, mut f: F) -> FixedTuple<R, N>
    where
        U: Copy,
        F: FnMut(T, U) -> R,
    {
        FixedTuple::from_fn(|i| f(self.storage[i], other.storage[i]))
    }
}

impl<T: Pod, const N: usize> FixedTuple<T, N> {
    /// The storage viewed as raw bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice::<T, u8>(&self.storage)
    }
}

fn arity_mismatch(expected: usize, actual: usize) -> TupleError {
    let err = TupleError::ArityMismatch { expected, actual };
    tracing::debug!(%err, "rejected tuple construction");
    err
}

fn index_out_of_bounds(index: usize, len: usize) -> TupleError {
    let err = TupleError::IndexOutOfBounds { index, len };
    tracing::debug!(%err, "rejected checked tuple access");
    err
}

impl<T: Copy + Default, const N: usize> Default for FixedTuple<T, N> {
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for FixedTuple<T, N> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        Self::new(elements)
    }
}

impl<T, const N: usize> From<FixedTuple<T, N>> for [T; N] {
    #[inline]
    fn from(tuple: FixedTuple<T, N>) -> Self {
        tuple.storage
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for FixedTuple<T, N> {
    type Error = TupleError;

    fn try_from(elements: &[T]) -> Result<Self, Self::Error> {
        Self::try_from_slice(elements)
    }
}

impl<T: Copy, const N: usize> TryFrom<Vec<T>> for FixedTuple<T, N> {
    type Error = TupleError;

    fn try_from(elements: Vec<T>) -> Result<Self, Self::Error> {
        Self::try_from_slice(&elements)
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedTuple<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.storage
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedTuple<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.storage
    }
}

impl<T, const N: usize> IntoIterator for FixedTuple<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedTuple<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedTuple<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter_mut()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedTuple<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `Format` hands `f` to each element, so precision carries through.
        write!(f, "[")?;
        fmt::Display::fmt(&self.storage.iter().format(", "), f)?;
        write!(f, "]")
    }
}

/// Construct a [`FixedTuple`](crate::FixedTuple) from its elements, or
/// broadcast one value with `fixed_tuple![value; N]`.
///
/// ```
/// use fixed_tuple::fixed_tuple;
///
/// let t = fixed_tuple![1.0, 2.0, 3.0];
/// assert_eq!(3, t.len());
/// assert_eq!(2.0, t.get::<1>());
///
/// let ones = fixed_tuple![1u8; 4];
/// assert_eq!([1, 1, 1, 1], ones.into_array());
/// ```
#[macro_export]
macro_rules! fixed_tuple {
    ($value:expr; $n:expr) => {
        $crate::FixedTuple::<_, $n>::splat($value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::FixedTuple::new([$($value),+])
    };
}

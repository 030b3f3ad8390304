use std::mem::{self, MaybeUninit};

use super::FixedTuple;

impl<T: Copy, const N: usize> FixedTuple<T, N> {
    /// Reserve storage for a tuple without initializing any element.
    ///
    /// Fill every slot with [`FixedTuple::write`] (or indexed/constant-index
    /// stores of `MaybeUninit::new`) before calling
    /// [`FixedTuple::assume_init`].
    ///
    /// ```
    /// use fixed_tuple::FixedTuple;
    ///
    /// let mut slots = FixedTuple::<u32, 3>::uninit();
    /// for i in 0..3 {
    ///     slots.write(i, i as u32 * 10);
    /// }
    /// let t = unsafe { slots.assume_init() };
    /// assert_eq!([0, 10, 20], t.into_array());
    /// ```
    #[inline(always)]
    pub const fn uninit() -> FixedTuple<MaybeUninit<T>, N> {
        let () = Self::SIZE_CHECK;
        FixedTuple::new([MaybeUninit::uninit(); N])
    }
}

impl<T: Copy, const N: usize> FixedTuple<MaybeUninit<T>, N> {
    /// Initialize the slot at `index`. Panics if `index >= N`.
    #[inline(always)]
    pub fn write(&mut self, index: usize, value: T) {
        self[index].write(value);
    }

    /// Reinterpret the storage as initialized.
    ///
    /// # Safety
    ///
    /// Every one of the `N` slots must have been written. Reading a slot
    /// that was never written is undefined behavior.
    #[inline(always)]
    pub unsafe fn assume_init(self) -> FixedTuple<T, N> {
        // SAFETY: `MaybeUninit<T>` has the layout of `T` and `FixedTuple` is
        // transparent over its array, so the two tuple types share a layout.
        // The caller guarantees every slot holds a valid `T`.
        unsafe { mem::transmute_copy(&self) }
    }
}

//! Fixed-size, homogeneous tuples of register types.
//!
//! [`FixedTuple<T, N>`] holds exactly `N` values of `T` inline, laid out as
//! `[T; N]`. The length lives in the type: constant indices are checked at
//! compile time, runtime indices in debug builds only.
//!
//! ```
//! use fixed_tuple::FixedTuple;
//!
//! let mut t = FixedTuple::new([1, 2, 3]);
//! t.set::<1>(20);
//! assert_eq!(20, t.get::<1>());
//!
//! // SAFETY: 2 < 3
//! unsafe { t.set_unchecked(2, 30) };
//! assert_eq!(Ok(30), t.try_get(2));
//! ```

pub mod tuple;
pub mod util;

pub use tuple::{FixedTuple, TupleIndex};
pub use util::error::TupleError;

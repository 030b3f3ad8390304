mod fixed;
mod index;
mod uninit;

pub use fixed::FixedTuple;
pub use index::TupleIndex;

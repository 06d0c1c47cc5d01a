//! Various unsorted geometrical and logical operators.

pub use self::fx_hasher::FxHasher32;
pub(crate) use self::sort::sort3;

mod fx_hasher;
pub mod hashmap;
mod sort;

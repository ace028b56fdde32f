//! Convenience aliases for thunks of common primitive types.

#[cfg(feature = "integer")]
pub use num_bigint::BigInt;
#[cfg(feature = "decimal")]
pub use rust_decimal::Decimal;

use crate::list::List;
use crate::thunk::Thunk;

pub type Bool = Thunk<bool>;
pub type Char = Thunk<char>;
pub type Int = Thunk<i64>;
/// An arbitrary-precision integer.
#[cfg(feature = "integer")]
pub type Integer = Thunk<BigInt>;
pub type Float = Thunk<f32>;
pub type Double = Thunk<f64>;
#[cfg(feature = "decimal")]
pub type Dec = Thunk<Decimal>;

/// A lazy string, as a list of characters.
pub type Str = List<char>;

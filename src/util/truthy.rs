//! Interpreting forced values as booleans.

#[cfg(feature = "integer")]
use num_bigint::BigInt;
#[cfg(feature = "integer")]
use num_traits::Zero;
#[cfg(feature = "decimal")]
use rust_decimal::Decimal;

/// Types whose values have a natural truth value.
/// Numbers are true when non-zero, characters when not NUL.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for char {
    fn is_truthy(&self) -> bool {
        *self != '\0'
    }
}

macro_rules! truthy_when_non_zero {
    ($($t:ty => $zero:expr),* $(,)?) => {
        $(
            impl Truthy for $t {
                fn is_truthy(&self) -> bool {
                    *self != $zero
                }
            }
        )*
    };
}

truthy_when_non_zero!(
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    f32 => 0.0, f64 => 0.0,
);

#[cfg(feature = "integer")]
impl Truthy for BigInt {
    fn is_truthy(&self) -> bool {
        !self.is_zero()
    }
}

#[cfg(feature = "decimal")]
impl Truthy for Decimal {
    fn is_truthy(&self) -> bool {
        !self.is_zero()
    }
}

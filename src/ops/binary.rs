use std::ops::{Add, Sub, Mul, Div, Rem};
use std::ops::{Shl, Shr};
use std::ops::{BitAnd, BitOr, BitXor};

use crate::thunk::Thunk;
use crate::util::Truthy;

macro_rules! lift_binary {
    ($($op:ident::$method:ident),* $(,)?) => {
        $(
            impl<T, U> $op<Thunk<U>> for Thunk<T>
            where
                T: $op<U> + Clone + 'static,
                U: Clone + 'static,
                T::Output: Clone + 'static,
            {
                type Output = Thunk<T::Output>;

                fn $method(self, rhs: Thunk<U>) -> Self::Output {
                    Thunk::deferred(move || Ok($op::$method(self.force()?, rhs.force()?)))
                }
            }

            impl<'a, 'b, T, U> $op<&'b Thunk<U>> for &'a Thunk<T>
            where
                T: $op<U> + Clone + 'static,
                U: Clone + 'static,
                T::Output: Clone + 'static,
            {
                type Output = Thunk<T::Output>;

                fn $method(self, rhs: &'b Thunk<U>) -> Self::Output {
                    $op::$method(self.clone(), rhs.clone())
                }
            }
        )*
    };
}

lift_binary!(
    Mul::mul, Div::div, Rem::rem,
    Add::add, Sub::sub,
    Shl::shl, Shr::shr,
    BitAnd::bitand, BitXor::bitxor, BitOr::bitor,
);

/// Helper for the comparison methods, which cannot be trait impls since Rust's comparison traits return `bool`.
fn compare<T, U, F>(lhs: &Thunk<T>, rhs: &Thunk<U>, cmp: F) -> Thunk<bool>
where
    T: Clone + 'static,
    U: Clone + 'static,
    F: Fn(&T, &U) -> bool + 'static,
{
    let (lhs, rhs) = (lhs.clone(), rhs.clone());
    Thunk::deferred(move || Ok(cmp(&lhs.force()?, &rhs.force()?)))
}

/// Relational and equality operators, deferred.
impl<T: Clone + 'static> Thunk<T> {
    pub fn lt<U>(&self, other: &Thunk<U>) -> Thunk<bool>
    where
        T: PartialOrd<U>,
        U: Clone + 'static,
    {
        compare(self, other, |l, r| l < r)
    }

    pub fn le<U>(&self, other: &Thunk<U>) -> Thunk<bool>
    where
        T: PartialOrd<U>,
        U: Clone + 'static,
    {
        compare(self, other, |l, r| l <= r)
    }

    pub fn gt<U>(&self, other: &Thunk<U>) -> Thunk<bool>
    where
        T: PartialOrd<U>,
        U: Clone + 'static,
    {
        compare(self, other, |l, r| l > r)
    }

    pub fn ge<U>(&self, other: &Thunk<U>) -> Thunk<bool>
    where
        T: PartialOrd<U>,
        U: Clone + 'static,
    {
        compare(self, other, |l, r| l >= r)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn eq<U>(&self, other: &Thunk<U>) -> Thunk<bool>
    where
        T: PartialEq<U>,
        U: Clone + 'static,
    {
        compare(self, other, |l, r| l == r)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn ne<U>(&self, other: &Thunk<U>) -> Thunk<bool>
    where
        T: PartialEq<U>,
        U: Clone + 'static,
    {
        compare(self, other, |l, r| l != r)
    }
}

/// Logical operators over truth values.
///
/// These are lifted like every other binary operator: forcing the result forces both operands, left first.
/// The right operand is evaluated even when the left one already decides the outcome.
impl<T: Truthy + Clone + 'static> Thunk<T> {
    pub fn logical_and<U>(&self, other: &Thunk<U>) -> Thunk<bool>
    where
        U: Truthy + Clone + 'static,
    {
        let (lhs, rhs) = (self.clone(), other.clone());
        Thunk::deferred(move || {
            let l = lhs.is_truthy()?;
            let r = rhs.is_truthy()?;
            Ok(l && r)
        })
    }

    pub fn logical_or<U>(&self, other: &Thunk<U>) -> Thunk<bool>
    where
        U: Truthy + Clone + 'static,
    {
        let (lhs, rhs) = (self.clone(), other.clone());
        Thunk::deferred(move || {
            let l = lhs.is_truthy()?;
            let r = rhs.is_truthy()?;
            Ok(l || r)
        })
    }
}

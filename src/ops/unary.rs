use std::ops::Neg;
use std::ops::Not;

use crate::thunk::Thunk;
use crate::util::Truthy;

macro_rules! lift_unary {
    ($($op:ident::$method:ident),* $(,)?) => {
        $(
            impl<T> $op for Thunk<T>
            where
                T: $op + Clone + 'static,
                T::Output: Clone + 'static,
            {
                type Output = Thunk<T::Output>;

                fn $method(self) -> Self::Output {
                    Thunk::deferred(move || Ok($op::$method(self.force()?)))
                }
            }

            impl<'a, T> $op for &'a Thunk<T>
            where
                T: $op + Clone + 'static,
                T::Output: Clone + 'static,
            {
                type Output = Thunk<T::Output>;

                fn $method(self) -> Self::Output {
                    $op::$method(self.clone())
                }
            }
        )*
    };
}

// `!` is logical for `bool` and bitwise for integers, following the eager operator.
lift_unary!(Neg::neg, Not::not);

impl<T: Clone + 'static> Thunk<T> {
    /// Unary plus: a new thunk with the same value.
    pub fn pos(&self) -> Thunk<T> {
        let this = self.clone();
        Thunk::lazy(move || Ok(this.clone()))
    }
}

impl<T: Truthy + Clone + 'static> Thunk<T> {
    /// Logical negation of this thunk's truth value.
    pub fn logical_not(&self) -> Thunk<bool> {
        let this = self.clone();
        Thunk::deferred(move || Ok(!this.is_truthy()?))
    }
}

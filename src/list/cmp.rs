//! Structural equality and lexicographic ordering, both deferred.
//!
//! Only as much of either spine is forced as is needed to find a difference. Two unequal infinite
//! lists therefore compare in finite time, while two equal infinite lists never finish comparing.

use crate::list::List;
use crate::list::Node;
use crate::thunk::Thunk;

impl<T: Clone + 'static> List<T> {
    /// Lexicographic less-than. The empty list is less than any non-empty list.
    /// Tails are only compared when the heads are equal.
    pub fn lt(&self, other: &List<T>) -> Thunk<bool>
    where
        T: PartialOrd,
    {
        let (xs, ys) = (self.clone(), other.clone());
        Thunk::lazy(move || {
            // Nothing is less than the empty list, whatever the left side holds.
            let (y, ys) = match ys.force()? {
                Node::Nil => return Ok(Thunk::eager(false)),
                Node::Cons(y, ys) => (y, ys),
            };

            let (x, xs) = match xs.force()? {
                Node::Nil => return Ok(Thunk::eager(true)),
                Node::Cons(x, xs) => (x, xs),
            };

            let (x, y) = (x.force()?, y.force()?);

            if x < y { Ok(Thunk::eager(true)) }
            else if x == y { Ok(xs.lt(&ys)) }
            else { Ok(Thunk::eager(false)) }
        })
    }

    pub fn gt(&self, other: &List<T>) -> Thunk<bool>
    where
        T: PartialOrd,
    {
        other.lt(self)
    }

    pub fn le(&self, other: &List<T>) -> Thunk<bool>
    where
        T: PartialOrd,
    {
        !other.lt(self)
    }

    pub fn ge(&self, other: &List<T>) -> Thunk<bool>
    where
        T: PartialOrd,
    {
        !self.lt(other)
    }

    /// Structural equality: both empty, or equal heads followed by equal tails.
    #[allow(clippy::should_implement_trait)]
    pub fn eq(&self, other: &List<T>) -> Thunk<bool>
    where
        T: PartialEq,
    {
        let (xs, ys) = (self.clone(), other.clone());
        Thunk::lazy(move || {
            match (xs.force()?, ys.force()?) {
                (Node::Nil, Node::Nil) => Ok(Thunk::eager(true)),
                (Node::Cons(x, xs), Node::Cons(y, ys)) => {
                    if x.force()? == y.force()? { Ok(xs.eq(&ys)) }
                    else { Ok(Thunk::eager(false)) }
                },
                _ => Ok(Thunk::eager(false)),
            }
        })
    }

    #[allow(clippy::should_implement_trait)]
    pub fn ne(&self, other: &List<T>) -> Thunk<bool>
    where
        T: PartialEq,
    {
        !self.eq(other)
    }
}

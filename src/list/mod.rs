//! Lazy singly-linked lists whose node tag and tail are both deferred.

pub mod algo;
pub mod cmp;
pub mod iter;

pub use self::iter::Iter;

use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::iter::FromIterator;

use crate::error::Error;
use crate::thunk::Thunk;
use crate::util::singleton;

/// The value carried by a forced list: either empty, or an element followed by the rest of the list.
pub enum Node<T> {
    Nil,
    Cons(Thunk<T>, List<T>),
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Nil => Self::Nil,
            Self::Cons(x, xs) => Self::Cons(x.clone(), xs.clone()),
        }
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Nil => write!(f, "Nil"),
            Self::Cons(x, xs) => f.debug_tuple("Cons").field(x).field(xs).finish(),
        }
    }
}

/// A lazy list: a thunk yielding a node, where every tail is itself a lazy list.
///
/// Because every link is deferred, a list may be infinite or defined in terms of itself,
/// as long as each step of its definition only demands what has already been produced.
pub struct List<T>(Thunk<Node<T>>);

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        List(self.0.clone())
    }
}

/// Nodes shown by `Debug` before the output is cut short. Self-referential lists are cyclic once forced.
const DEBUG_NODE_LIMIT: usize = 16;

/// Shows the already-forced prefix of the list, then `<pending>` for an unforced tail. Never forces.
impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "List")?;

        let mut entries = f.debug_list();
        let mut next = self.clone();

        for _ in 0..DEBUG_NODE_LIMIT {
            match next.0.peek() {
                None => {
                    entries.entry(&format_args!("<pending>"));
                    return entries.finish();
                },
                Some(Node::Nil) => return entries.finish(),
                Some(Node::Cons(x, xs)) => {
                    entries.entry(&x);
                    next = xs;
                },
            }
        }

        if let Some(Node::Nil) = next.0.peek() {
            return entries.finish();
        }

        entries.entry(&format_args!(".."));
        entries.finish()
    }
}

/// Marks the per-type empty list in the singleton registry.
struct NilKey;

impl<T: Clone + 'static> List<T> {
    /// The empty list. Each element type shares a single empty node per thread.
    pub fn nil() -> Self {
        singleton::<NilKey, Self, _>(|| List(Thunk::eager(Node::Nil)))
    }

    /// Prepends an element, without forcing either the element or the rest of the list.
    pub fn cons(x: Thunk<T>, xs: List<T>) -> Self {
        List(Thunk::eager(Node::Cons(x, xs)))
    }

    /// Defers the construction of a list.
    pub fn lazy<F>(f: F) -> Self
    where
        F: Fn() -> Result<List<T>, Error> + 'static,
    {
        List(Thunk::lazy(move || f().map(List::into_thunk)))
    }

    /// Defines a list in terms of itself, such as `0 : map (+1) self`.
    /// See `Thunk::fix` for how the self reference is held.
    pub fn fix<F>(f: F) -> Self
    where
        F: Fn(List<T>) -> Result<List<T>, Error> + 'static,
    {
        List(Thunk::fix(move |this| f(List(this)).map(List::into_thunk)))
    }

    /// Builds a list from thunks of elements, eagerly and right to left.
    pub fn from_thunks<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Thunk<T>>,
    {
        let items: Vec<_> = items.into_iter().collect();
        items.into_iter().rev().fold(Self::nil(), |xs, x| Self::cons(x, xs))
    }

    /// Forces the first node of this list.
    pub fn force(&self) -> Result<Node<T>, Error> {
        self.0.force()
    }

    pub fn as_thunk(&self) -> &Thunk<Node<T>> {
        &self.0
    }

    pub fn into_thunk(self) -> Thunk<Node<T>> {
        self.0
    }

    /// The first element. Forcing it on an empty list fails.
    pub fn head(&self) -> Thunk<T> {
        let this = self.clone();
        Thunk::lazy(move || match this.force()? {
            Node::Nil => Err(Error::InvalidOperation("head of empty list")),
            Node::Cons(x, _) => Ok(x),
        })
    }

    /// Everything but the first element. Forcing it on an empty list fails.
    pub fn tail(&self) -> List<T> {
        let this = self.clone();
        List::lazy(move || match this.force()? {
            Node::Nil => Err(Error::InvalidOperation("tail of empty list")),
            Node::Cons(_, xs) => Ok(xs),
        })
    }

    /// Whether this list is empty, deferred.
    pub fn null(&self) -> Thunk<bool> {
        let this = self.clone();
        Thunk::deferred(move || this.is_empty())
    }

    /// Forces the first node and checks if it is empty.
    pub fn is_empty(&self) -> Result<bool, Error> {
        Ok(matches!(self.force()?, Node::Nil))
    }

    /// Returns the element at a zero-based index, forcing the spine up to that position.
    /// Each step of the descent is a nested call, so very large indices cost stack depth.
    pub fn at(&self, n: i64) -> Result<Thunk<T>, Error> {
        if n < 0 {
            return Err(Error::OutOfRange("negative index"));
        }

        match self.force()? {
            Node::Nil => Err(Error::OutOfRange("index too large")),
            Node::Cons(x, _) if n == 0 => Ok(x),
            Node::Cons(_, xs) => xs.at(n - 1),
        }
    }

    /// Deferred indexing: neither the index nor the list is forced until the result is.
    pub fn nth(&self, n: Thunk<i64>) -> Thunk<T> {
        let this = self.clone();
        Thunk::lazy(move || this.at(n.force()?))
    }

    /// Iterates over the elements, forcing each node and element as it is reached.
    pub fn iter(&self) -> Iter<T> {
        Iter::new(self.clone())
    }

    /// Forces the whole list into an eager container.
    /// Never returns for an infinite list.
    pub fn collect<C: FromIterator<T>>(&self) -> Result<C, Error> {
        self.iter().collect()
    }
}

impl<T: Clone + 'static> From<Thunk<Node<T>>> for List<T> {
    fn from(thunk: Thunk<Node<T>>) -> Self {
        List(thunk)
    }
}

impl<T: Clone + 'static> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_thunks(iter.into_iter().map(Thunk::eager))
    }
}

impl<T: Clone + 'static> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<T: Clone + 'static> From<&[T]> for List<T> {
    fn from(items: &[T]) -> Self {
        items.iter().cloned().collect()
    }
}

impl<T: Clone + 'static, const N: usize> From<[T; N]> for List<T> {
    fn from(items: [T; N]) -> Self {
        Vec::from(items).into()
    }
}

impl From<&str> for List<char> {
    fn from(s: &str) -> Self {
        s.chars().collect()
    }
}

/// Shorthand for `List::nil`.
pub fn nil<T: Clone + 'static>() -> List<T> {
    List::nil()
}

/// Shorthand for `List::cons`.
pub fn cons<T: Clone + 'static>(x: Thunk<T>, xs: List<T>) -> List<T> {
    List::cons(x, xs)
}

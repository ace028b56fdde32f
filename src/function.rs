//! Function values: thunks whose payload is a callable.

use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::rc::Rc;

use crate::error::Error;
use crate::thunk::Thunk;

/// A callable taking arguments of type `A` (a tuple for several arguments) and returning a deferred `R`.
pub struct Callable<A, R>(Rc<dyn Fn(A) -> Thunk<R>>);

impl<A, R> Clone for Callable<A, R> {
    fn clone(&self) -> Self {
        Callable(Rc::clone(&self.0))
    }
}

impl<A, R> Callable<A, R> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(A) -> Thunk<R> + 'static,
    {
        Callable(Rc::new(f))
    }

    /// Invokes the callable directly. The result is whatever deferred value the callable builds.
    pub fn invoke(&self, args: A) -> Thunk<R> {
        (self.0)(args)
    }
}

impl<A, R> Debug for Callable<A, R> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "<function>")
    }
}

/// A deferred callable.
pub type Function<A, R> = Thunk<Callable<A, R>>;

impl<A, R> Thunk<Callable<A, R>>
where
    A: Clone + 'static,
    R: Clone + 'static,
{
    /// Wraps a closure as an already-evaluated function value.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(A) -> Thunk<R> + 'static,
    {
        Thunk::eager(Callable::new(f))
    }

    /// Calls this function.
    ///
    /// Nothing is evaluated here: the returned thunk, once forced, forces the callable, invokes it with
    /// `args`, and forces what it returns. Each call yields a fresh thunk; results are not cached per argument.
    pub fn call(&self, args: A) -> Thunk<R> {
        let this = self.clone();
        Thunk::lazy(move || -> Result<Thunk<R>, Error> {
            let callable = this.force()?;
            Ok(callable.invoke(args.clone()))
        })
    }
}

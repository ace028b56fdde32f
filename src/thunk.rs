//! Deferred, memoizing single-assignment value cells.

use std::cell::RefCell;
use std::convert::TryFrom;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::rc::Rc;
use std::rc::Weak;

use crate::error::Error;
use crate::util::Truthy;

/// Produces the definition of a pending thunk.
/// The returned thunk is forced in turn, so a producer may hand back another deferred value.
pub(crate) type Producer<T> = Rc<dyn Fn() -> Result<Thunk<T>, Error>>;

enum State<T> {
    Pending(Producer<T>),
    Done(T),
}

/// A shared handle to a value that is computed at most once, on first demand.
///
/// Cloning a thunk creates an alias of the same cell, not a copy of its contents.
/// Whichever alias is forced first performs the computation, and every alias observes the result.
/// There is no cycle detection: forcing a thunk from inside its own producer recurses until the stack runs out.
pub struct Thunk<T>(Rc<RefCell<State<T>>>);

impl<T> Clone for Thunk<T> {
    fn clone(&self) -> Self {
        Thunk(Rc::clone(&self.0))
    }
}

impl<T: Clone + 'static> Thunk<T> {
    /// Wraps an already-known value.
    pub fn eager(value: T) -> Self {
        Thunk(Rc::new(RefCell::new(State::Done(value))))
    }

    /// Defers a computation that yields another thunk of the same type.
    /// The closure is not called until this thunk is forced.
    pub fn lazy<F>(f: F) -> Self
    where
        F: Fn() -> Result<Thunk<T>, Error> + 'static,
    {
        Thunk(Rc::new(RefCell::new(State::Pending(Rc::new(f)))))
    }

    /// Defers a computation that yields a plain value.
    pub fn deferred<F>(f: F) -> Self
    where
        F: Fn() -> Result<T, Error> + 'static,
    {
        Self::lazy(move || f().map(Thunk::eager))
    }

    /// Defines a thunk in terms of itself.
    ///
    /// The closure receives an alias of the thunk being defined. The alias is held weakly until the
    /// thunk is forced, so an unforced definition does not keep itself alive.
    /// Once forced, a definition that captures itself forms a reference cycle and lives until the thread exits.
    pub fn fix<F>(f: F) -> Self
    where
        F: Fn(Thunk<T>) -> Result<Thunk<T>, Error> + 'static,
    {
        let cell = Rc::new_cyclic(|weak: &Weak<RefCell<State<T>>>| {
            let weak = weak.clone();
            let producer: Producer<T> = Rc::new(move || {
                // A forcer always holds a strong alias, so this only fails for a producer smuggled out of its cell.
                let this = weak.upgrade().map(Thunk).ok_or(Error::InvalidOperation("self reference outlived its definition"))?;
                f(this)
            });

            RefCell::new(State::Pending(producer))
        });

        Thunk(cell)
    }

    /// Computes and caches the value if needed, then returns a copy of it.
    ///
    /// If the producer fails, the error propagates to the caller and the thunk stays pending.
    pub fn force(&self) -> Result<T, Error> {
        let producer = match &*self.0.borrow() {
            State::Done(value) => return Ok(value.clone()),
            State::Pending(producer) => Rc::clone(producer),
        };

        // No borrow is held while the producer runs, so it may freely force other aliases.
        log::trace!("evaluating pending thunk");
        let value = match producer().and_then(|next| next.force()) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("thunk evaluation failed: {}", err);
                return Err(err);
            },
        };

        // A re-entrant force may have resolved this cell while the producer ran; its value stands.
        let mut state = self.0.borrow_mut();
        if let State::Done(resolved) = &*state {
            return Ok(resolved.clone());
        }

        *state = State::Done(value.clone());
        Ok(value)
    }

    /// Forces this thunk and converts the result into a type it may fail to convert into,
    /// such as a narrower integer. A failed conversion is reported as `Error::Conversion`.
    pub fn try_force_as<U>(&self) -> Result<U, Error>
    where
        U: TryFrom<T>,
        U::Error: std::fmt::Display,
    {
        U::try_from(self.force()?).map_err(|err| Error::Conversion(err.to_string()))
    }

    /// Forces this thunk and converts the result into another type.
    pub fn force_as<U: From<T>>(&self) -> Result<U, Error> {
        self.force().map(U::from)
    }

    /// Returns a new thunk that applies a function to this thunk's value once forced.
    pub fn map<U, F>(&self, f: F) -> Thunk<U>
    where
        U: Clone + 'static,
        F: Fn(T) -> U + 'static,
    {
        let this = self.clone();
        Thunk::deferred(move || this.force().map(&f))
    }

    /// Wraps this thunk as a thunk of a type it converts into infallibly.
    pub fn convert<U>(&self) -> Thunk<U>
    where
        U: From<T> + Clone + 'static,
    {
        self.map(U::from)
    }

    /// Wraps this thunk as a thunk of a type it may fail to convert into.
    /// A failed conversion is reported when the result is forced.
    pub fn try_convert<U>(&self) -> Thunk<U>
    where
        U: TryFrom<T> + Clone + 'static,
        U::Error: std::fmt::Display,
    {
        let this = self.clone();
        Thunk::deferred(move || this.try_force_as())
    }
}

impl<T> Thunk<T> {
    /// Checks if this thunk has already been evaluated. Never forces.
    pub fn is_forced(&self) -> bool {
        matches!(&*self.0.borrow(), State::Done(..))
    }

    /// Checks if two thunks are aliases of the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Returns a copy of the value if this thunk has already been evaluated. Never forces.
    pub(crate) fn peek(&self) -> Option<T>
    where
        T: Clone,
    {
        match self.0.try_borrow().as_deref() {
            Ok(State::Done(value)) => Some(value.clone()),
            _ => None,
        }
    }
}

impl<T: Truthy + Clone + 'static> Thunk<T> {
    /// Forces this thunk and interprets its value as a boolean.
    pub fn is_truthy(&self) -> Result<bool, Error> {
        self.force().map(|value| value.is_truthy())
    }
}

impl<T: Clone + 'static> From<T> for Thunk<T> {
    fn from(value: T) -> Self {
        Self::eager(value)
    }
}

impl<T: Debug> Debug for Thunk<T> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self.0.try_borrow().as_deref() {
            Ok(State::Done(value)) => f.debug_tuple("Thunk").field(value).finish(),
            Ok(State::Pending(..)) => write!(f, "Thunk(<pending>)"),
            Err(..) => write!(f, "Thunk(<busy>)"),
        }
    }
}

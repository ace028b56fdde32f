#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use crate::function::Function;
use crate::list::List;
use crate::list::cons;
use crate::thunk::Thunk;
use crate::types::Int;
use crate::util::singleton;

/// Counts how often something was evaluated. Clones share the same count.
#[derive(Clone)]
pub(crate) struct Counter(Rc<Cell<usize>>);

impl Counter {
    pub fn new() -> Self {
        Counter(Rc::new(Cell::new(0)))
    }

    pub fn tick(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn count(&self) -> usize {
        self.0.get()
    }
}

pub(crate) fn ints(values: &[i64]) -> List<i64> {
    List::from(values)
}

pub(crate) fn succ() -> Function<Int, i64> {
    Function::from_fn(|x: Int| x + Thunk::eager(1))
}

pub(crate) fn double() -> Function<Int, i64> {
    Function::from_fn(|x: Int| x * Thunk::eager(2))
}

struct NatsKey;
struct FibsKey;

/// `0, 1, 2, ...`, defined as `0 : map succ nats`.
pub(crate) fn nats() -> List<i64> {
    singleton::<NatsKey, List<i64>, _>(|| List::lazy(|| Ok(cons(Thunk::eager(0), nats().map(&succ())))))
}

/// `0, 1, 1, 2, 3, ...`, defined as `0 : 1 : zip_with (+) fibs (tail fibs)`.
pub(crate) fn fibs() -> List<u64> {
    singleton::<FibsKey, List<u64>, _>(|| {
        List::lazy(|| {
            let add = Function::from_fn(|(x, y): (Thunk<u64>, Thunk<u64>)| x + y);
            let rest = fibs().zip_with(&add, &fibs().tail());
            Ok(cons(Thunk::eager(0), cons(Thunk::eager(1), rest)))
        })
    })
}

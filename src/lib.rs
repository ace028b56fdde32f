//! Lazy evaluation building blocks: memoizing thunks, lifted operators, deferred functions,
//! and lazy lists that may be infinite or self-referential.
//!
//! Nothing is evaluated when an expression is built. Evaluation happens when a thunk is forced,
//! happens at most once per thunk, and is shared by every alias of that thunk.
//!
//! ```
//! use thunkery::{Function, Int, List, Thunk, cons};
//!
//! let succ: Function<Int, i64> = Function::from_fn(|x: Int| x + Thunk::eager(1));
//! let nats = List::fix(move |nats| Ok(cons(Thunk::eager(0i64), nats.map(&succ))));
//!
//! assert_eq!(Ok(vec![0, 1, 2]), nats.take(3).collect::<Vec<_>>());
//! ```

mod error;
mod function;
mod list;
mod ops;
mod thunk;
mod types;
pub mod util;

#[cfg(test)] mod test_util;

pub use crate::error::Error;
pub use crate::error::ErrorKind;
pub use crate::function::Callable;
pub use crate::function::Function;
pub use crate::list::List;
pub use crate::list::Node;
pub use crate::list::Iter;
pub use crate::list::nil;
pub use crate::list::cons;
pub use crate::thunk::Thunk;
pub use crate::types::*;
pub use crate::util::Truthy;
pub use crate::util::singleton;

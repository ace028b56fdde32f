//! Eager operators lifted to operate on thunks.
//!
//! Applying a lifted operator never evaluates anything. The resulting thunk captures aliases of the
//! operands, and forcing it forces every operand before applying the eager operator.

pub mod unary;
pub mod binary;

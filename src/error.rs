//! Failures that can surface when a deferred value is forced.

use strum::{EnumDiscriminants, AsRefStr};
use thiserror::Error;

/// Errors raised while forcing thunks and lists.
/// Building a deferred computation never fails; only forcing it does.
#[derive(Debug, Error, Clone, PartialEq, Eq, EnumDiscriminants)]
#[strum_discriminants(name(ErrorKind), derive(Hash, AsRefStr))]
pub enum Error {
    #[error("out of range: {0}")]
    OutOfRange(&'static str),
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
    #[error("cannot convert value: {0}")]
    Conversion(String),
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an error for use inside user-supplied producers.
    pub fn custom<S: Into<String>>(msg: S) -> Self {
        Self::Custom(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        self.into()
    }
}

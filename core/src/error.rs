use thiserror::Error;

use crate::failure::{Classify, FailureKind};

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required input was absent or of the wrong shape.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Classify for Error {
    fn kind(&self) -> FailureKind {
        match self {
            // Passing a bad argument is a caller bug.
            Error::InvalidArgument(_) => FailureKind::Logic,
        }
    }
}

//! Classification of failures into unchecked and checked.
//!
//! Unchecked failures signal a bug ([`FailureKind::Logic`]) or a condition
//! the process cannot recover from ([`FailureKind::Environment`]). Everything
//! else is [`FailureKind::Checked`] and is handled as an ordinary error value.

use core::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Programming error: broken invariant, bad argument, unreachable state.
    Logic,
    /// Unrecoverable environment condition: resource exhaustion and the like.
    Environment,
    /// Recoverable condition the caller is expected to handle.
    Checked,
}

impl FailureKind {
    pub fn is_unchecked(self) -> bool {
        matches!(self, FailureKind::Logic | FailureKind::Environment)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FailureKind::Logic => write!(f, "logic"),
            FailureKind::Environment => write!(f, "environment"),
            FailureKind::Checked => write!(f, "checked"),
        }
    }
}

/// Types that know which [`FailureKind`] they belong to.
pub trait Classify {
    fn kind(&self) -> FailureKind;
}

impl<C: Classify + ?Sized> Classify for Box<C> {
    fn kind(&self) -> FailureKind {
        (**self).kind()
    }
}

/// A general-purpose classified failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} failure: {message}")]
pub struct Failure {
    kind: FailureKind,
    message: String,
}

impl Failure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn logic(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Logic, message)
    }

    pub fn environment(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Environment, message)
    }

    pub fn checked(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Checked, message)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Classify for Failure {
    fn kind(&self) -> FailureKind {
        self.kind
    }
}

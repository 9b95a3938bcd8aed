//! Mu - small utilities over dynamically typed values
//!
//! # Overview
//!
//! Mu values carry their own type tag ([`Value`]), and type descriptors
//! ([`TyKind`]) answer "is this value an instance of that type?". On top of
//! that, this crate offers four independent helpers:
//!
//! - [`map_array`] / [`map_value`]: a lazy view applying a function on every
//!   element access,
//! - [`typed`] / [`typed_by`]: adapt a predicate over `T` into a predicate over
//!   any value,
//! - [`cast`] / [`cast_as`]: type-checked extraction returning `Option`,
//! - [`propagate_if_unchecked`]: keep unwinding with bugs and unrecoverable
//!   failures, hand recoverable ones back to the caller.
//!
//! # Quick Start
//!
//! ```
//! use mu::{ArrayView, Value, cast, map_value, ty, typed};
//!
//! let scores = Value::array(ty!(Int), [70_i64, 85, 92].map(Value::from));
//!
//! // Lazy: nothing is computed until an element is read.
//! let passed = map_value(&scores, |v| cast::<i64>(&v).is_some_and(|n| n >= 80)).unwrap();
//! assert_eq!(passed.iter().collect::<Vec<_>>(), vec![false, true, true]);
//!
//! let has_any = typed::<Vec<i64>, _>(|v| !v.is_empty());
//! assert!(has_any(&scores));
//! assert!(!has_any(&Value::Null));
//! ```
//!
//! # Failures
//!
//! ```
//! use mu::{Failure, PropagateExt};
//!
//! fn lookup(key: &str) -> Result<i64, Failure> {
//!     Err(Failure::checked(format!("no entry for {key}")))
//! }
//!
//! // Checked failures come back as ordinary errors.
//! let err = lookup("answer").propagate_unchecked().unwrap_err();
//! assert_eq!(err.message(), "no entry for answer");
//! ```

pub use mu_core::{
    Classify, Error, Failure, FailureKind, MappedArray, PropagateExt, Result, cast, cast_as,
    map_array, map_value, propagate_if_unchecked, typed, typed_by,
};
pub use mu_types::{Scalar, TyKind, ty};
pub use mu_values::{
    dynamic::{Array, Value},
    traits::ArrayView,
    typed::Marshal,
};

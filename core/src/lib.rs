//! Typed value utilities.
//!
//! Four independent, stateless helpers over Mu [`Value`](mu_values::dynamic::Value)s:
//!
//! - [`map_array`] / [`map_value`]: a lazy mapping view over an array,
//! - [`typed`] / [`typed_by`]: a predicate adapter guarded by a type check,
//! - [`cast`] / [`cast_as`]: a type-checked cast that yields `Option`,
//! - [`propagate_if_unchecked`]: re-raises unchecked failures, returns the rest.

pub mod error;
pub mod failure;
pub mod util;

pub use error::{Error, Result};
pub use failure::{Classify, Failure, FailureKind};
pub use util::{
    MappedArray, PropagateExt, cast, cast_as, map_array, map_value, propagate_if_unchecked,
    typed, typed_by,
};

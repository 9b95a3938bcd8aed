//! Runtime type descriptors for Mu values.
//!
//! Every Mu value carries its own type tag. A [`TyKind`] describes such a
//! tag, and [`TyKind::accepts`] answers the "is an instance of" question that
//! typed predicates and casts are built on.
//!
//! # Example
//!
//! ```
//! use mu_types::{ty, TyKind};
//!
//! let ints = ty!(Array[Int]);
//! assert!(ty!(Any).accepts(&ints));
//! assert!(ty!(Array[Any]).accepts(&ints));
//! assert!(!ints.accepts(&ty!(Array[Str])));
//! assert_eq!(ints.to_string(), "Array[Int]");
//! ```

#![no_std]
extern crate alloc;

mod kind;
mod macros;

pub use kind::{Scalar, TyKind};

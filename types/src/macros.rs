//! Type construction macros.
//!
//! # Example
//!
//! ```
//! use mu_types::{ty, Scalar, TyKind};
//!
//! assert_eq!(ty!(Int), TyKind::Scalar(Scalar::Int));
//! assert_eq!(ty!(Array[Array[Str]]), TyKind::array(TyKind::array(TyKind::str())));
//! ```

/// Macro for constructing type descriptors with a concise syntax.
///
/// # Syntax
///
/// | Pattern | Meaning |
/// |---------|---------|
/// | `Int`, `Str`, `Bool`, `Float`, `Bytes` | Scalar types |
/// | `Any` | Top type |
/// | `Array[T]` | Array type |
#[macro_export]
macro_rules! ty {
    (Int) => {
        $crate::TyKind::Scalar($crate::Scalar::Int)
    };
    (Float) => {
        $crate::TyKind::Scalar($crate::Scalar::Float)
    };
    (Bool) => {
        $crate::TyKind::Scalar($crate::Scalar::Bool)
    };
    (Str) => {
        $crate::TyKind::Scalar($crate::Scalar::Str)
    };
    (Bytes) => {
        $crate::TyKind::Scalar($crate::Scalar::Bytes)
    };
    (Any) => {
        $crate::TyKind::Any
    };
    (Array[$($elem:tt)+]) => {
        $crate::TyKind::array($crate::ty!($($elem)+))
    };
}

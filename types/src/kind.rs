use alloc::boxed::Box;
use core::fmt;

/// A runtime type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TyKind {
    /// The top type. Every non-null value is an instance of `Any`.
    Any,

    /// Scalar types (Bool, Int, Float, Str, Bytes)
    Scalar(Scalar),

    /// Array type with element type
    Array(Box<TyKind>),
}

impl TyKind {
    pub const fn bool() -> Self {
        TyKind::Scalar(Scalar::Bool)
    }

    pub const fn int() -> Self {
        TyKind::Scalar(Scalar::Int)
    }

    pub const fn float() -> Self {
        TyKind::Scalar(Scalar::Float)
    }

    pub const fn str() -> Self {
        TyKind::Scalar(Scalar::Str)
    }

    pub const fn bytes() -> Self {
        TyKind::Scalar(Scalar::Bytes)
    }

    pub fn array(element: TyKind) -> Self {
        TyKind::Array(Box::new(element))
    }

    /// Returns `true` if a value of type `other` is an instance of `self`.
    ///
    /// Arrays are read-only, so `Array[T]` accepts `Array[U]` whenever `T`
    /// accepts `U`.
    pub fn accepts(&self, other: &TyKind) -> bool {
        match (self, other) {
            (TyKind::Any, _) => true,
            (TyKind::Scalar(a), TyKind::Scalar(b)) => a == b,
            (TyKind::Array(a), TyKind::Array(b)) => a.accepts(b),
            _ => false,
        }
    }

    /// Element type if this is an array type.
    pub fn element(&self) -> Option<&TyKind> {
        match self {
            TyKind::Array(elem) => Some(elem),
            _ => None,
        }
    }
}

impl From<Scalar> for TyKind {
    fn from(scalar: Scalar) -> Self {
        TyKind::Scalar(scalar)
    }
}

impl fmt::Display for TyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TyKind::Any => f.write_str("Any"),
            TyKind::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            TyKind::Array(elem) => write!(f, "Array[{elem}]"),
        }
    }
}

/// Scalar type variants
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scalar {
    /// Boolean type
    Bool,

    /// Integer type
    Int,

    /// Floating-point type
    Float,

    /// String type
    Str,

    /// Bytes type
    Bytes,
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scalar::Bool => "Bool",
            Scalar::Int => "Int",
            Scalar::Float => "Float",
            Scalar::Str => "Str",
            Scalar::Bytes => "Bytes",
        };
        f.write_str(name)
    }
}

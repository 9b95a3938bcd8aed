use alloc::{string::String, sync::Arc, vec::Vec};

use mu_types::{Scalar, TyKind};

use super::Array;

/// A dynamically typed value that carries its own type tag.
///
/// `Null` is the absent value: it has no type and is an instance of nothing,
/// not even [`TyKind::Any`]. Arrays never contain `Null`.
///
/// # Example
///
/// ```
/// use mu_types::ty;
/// use mu_values::dynamic::Value;
///
/// let v = Value::from(42_i64);
/// assert_eq!(v.as_int(), Some(42));
/// assert!(v.is_instance_of(&ty!(Int)));
/// assert!(!Value::Null.is_instance_of(&ty!(Any)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    Bytes(Arc<[u8]>),
    Array(Array),
}

impl Value {
    /// Create an array value. See [`Array::new`].
    pub fn array(element_ty: TyKind, elements: impl IntoIterator<Item = Value>) -> Self {
        Value::Array(Array::new(element_ty, elements))
    }

    /// The type tag of this value, or `None` for `Null`.
    pub fn ty(&self) -> Option<TyKind> {
        let scalar = match self {
            Value::Null => return None,
            Value::Array(array) => return Some(array.ty()),
            Value::Bool(_) => Scalar::Bool,
            Value::Int(_) => Scalar::Int,
            Value::Float(_) => Scalar::Float,
            Value::Str(_) => Scalar::Str,
            Value::Bytes(_) => Scalar::Bytes,
        };
        Some(TyKind::Scalar(scalar))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this is a non-null instance of `ty`.
    pub fn is_instance_of(&self, ty: &TyKind) -> bool {
        match (ty, self) {
            (_, Value::Null) => false,
            (TyKind::Any, _) => true,
            (TyKind::Scalar(Scalar::Bool), Value::Bool(_))
            | (TyKind::Scalar(Scalar::Int), Value::Int(_))
            | (TyKind::Scalar(Scalar::Float), Value::Float(_))
            | (TyKind::Scalar(Scalar::Str), Value::Str(_))
            | (TyKind::Scalar(Scalar::Bytes), Value::Bytes(_)) => true,
            (TyKind::Array(elem), Value::Array(array)) => elem.accepts(array.element_ty()),
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(&**b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value.into())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Bytes(value.into())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Bytes(value.into())
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync, Clone);
static_assertions::assert_impl_all!(Array: Send, Sync, Clone);

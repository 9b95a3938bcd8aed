//! Marshalling between Rust types and Mu values.
//!
//! # Implemented for
//!
//! - `bool` (Mu `Bool`)
//! - `i64` (Mu `Int`)
//! - `f64` (Mu `Float`)
//! - `String`, `Arc<str>` (Mu `Str`)
//! - `Arc<[u8]>` (Mu `Bytes`)
//! - [`Array`] (any Mu array)
//! - `Vec<T>` (Mu `Array[T]`)
//! - [`Value`] (Mu `Any`)

use alloc::{string::String, sync::Arc, vec::Vec};

use mu_types::{Scalar, TyKind};

use crate::dynamic::{Array, Value};
use crate::traits::ArrayView;

/// Marshalling between a Rust type and a [`Value`].
///
/// `from_value(v)` is `Some` exactly when `v` is a non-null instance of
/// `Self::ty()`.
pub trait Marshal: Sized {
    /// The type descriptor for this Rust type.
    fn ty() -> TyKind;

    /// Returns `true` if a value of type `ty` can be extracted as `Self`.
    fn matches_ty(ty: &TyKind) -> bool {
        Self::ty().accepts(ty)
    }

    /// Extract a value, or `None` if `value` is null or of another type.
    fn from_value(value: &Value) -> Option<Self>;

    fn into_value(self) -> Value;
}

// =============================================================================
// Primitive implementations
// =============================================================================

impl Marshal for bool {
    fn ty() -> TyKind {
        TyKind::Scalar(Scalar::Bool)
    }

    fn matches_ty(ty: &TyKind) -> bool {
        matches!(ty, TyKind::Scalar(Scalar::Bool))
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl Marshal for i64 {
    fn ty() -> TyKind {
        TyKind::Scalar(Scalar::Int)
    }

    fn matches_ty(ty: &TyKind) -> bool {
        matches!(ty, TyKind::Scalar(Scalar::Int))
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }

    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl Marshal for f64 {
    fn ty() -> TyKind {
        TyKind::Scalar(Scalar::Float)
    }

    fn matches_ty(ty: &TyKind) -> bool {
        matches!(ty, TyKind::Scalar(Scalar::Float))
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_float()
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl Marshal for Arc<str> {
    fn ty() -> TyKind {
        TyKind::Scalar(Scalar::Str)
    }

    fn matches_ty(ty: &TyKind) -> bool {
        matches!(ty, TyKind::Scalar(Scalar::Str))
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Str(s) => Some(Arc::clone(s)),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

impl Marshal for String {
    fn ty() -> TyKind {
        TyKind::Scalar(Scalar::Str)
    }

    fn matches_ty(ty: &TyKind) -> bool {
        matches!(ty, TyKind::Scalar(Scalar::Str))
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(String::from)
    }

    fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl Marshal for Arc<[u8]> {
    fn ty() -> TyKind {
        TyKind::Scalar(Scalar::Bytes)
    }

    fn matches_ty(ty: &TyKind) -> bool {
        matches!(ty, TyKind::Scalar(Scalar::Bytes))
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bytes(b) => Some(Arc::clone(b)),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Bytes(self)
    }
}

// =============================================================================
// Compound implementations
// =============================================================================

/// Any array, whatever its element type. Described as `Array[Any]`.
impl Marshal for Array {
    fn ty() -> TyKind {
        TyKind::array(TyKind::Any)
    }

    fn matches_ty(ty: &TyKind) -> bool {
        matches!(ty, TyKind::Array(_))
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_array().cloned()
    }

    fn into_value(self) -> Value {
        Value::Array(self)
    }
}

/// Element-wise conversion. The array's declared element type decides the
/// match, not the runtime contents.
///
/// `into_value` skips elements that are not instances of `T::ty()`, which
/// only `Value::Null` can be, so the resulting array always casts back.
impl<T: Marshal> Marshal for Vec<T> {
    fn ty() -> TyKind {
        TyKind::array(T::ty())
    }

    fn matches_ty(ty: &TyKind) -> bool {
        ty.element().is_some_and(T::matches_ty)
    }

    fn from_value(value: &Value) -> Option<Self> {
        let array = value.as_array()?;
        if !T::matches_ty(array.element_ty()) {
            return None;
        }
        array.iter().map(|elem| T::from_value(&elem)).collect()
    }

    fn into_value(self) -> Value {
        let element_ty = T::ty();
        let elements = self
            .into_iter()
            .map(T::into_value)
            .filter(|elem| elem.is_instance_of(&element_ty));
        Value::array(element_ty.clone(), elements)
    }
}

/// Every non-null value. `into_value` is the identity.
impl Marshal for Value {
    fn ty() -> TyKind {
        TyKind::Any
    }

    fn matches_ty(_ty: &TyKind) -> bool {
        true
    }

    fn from_value(value: &Value) -> Option<Self> {
        (!value.is_null()).then(|| value.clone())
    }

    fn into_value(self) -> Value {
        self
    }
}

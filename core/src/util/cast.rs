use mu_types::TyKind;
use mu_values::{dynamic::Value, typed::Marshal};

/// Extract `value` as `T` if it is a non-null instance of `T::ty()`.
///
/// A mismatch is `None`, never an error.
///
/// # Example
///
/// ```
/// use mu_core::cast;
/// use mu_values::dynamic::Value;
///
/// assert_eq!(cast::<i64>(&Value::from(7_i64)), Some(7));
/// assert_eq!(cast::<i64>(&Value::from("7")), None);
/// assert_eq!(cast::<String>(&Value::Null), None);
/// ```
pub fn cast<T: Marshal>(value: &Value) -> Option<T> {
    T::from_value(value)
}

/// Return `value` itself if it is a non-null instance of `ty`.
pub fn cast_as<'v>(value: &'v Value, ty: &TyKind) -> Option<&'v Value> {
    value.is_instance_of(ty).then_some(value)
}

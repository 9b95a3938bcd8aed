use mu_types::TyKind;
use mu_values::{dynamic::Value, typed::Marshal};

use super::cast;

/// Adapt a predicate over `T` into a predicate over any [`Value`].
///
/// The adapted predicate is `false` for `Null` and for values that are not
/// instances of `T::ty()`; `predicate` only runs once that check has passed.
///
/// # Example
///
/// ```
/// use mu_core::typed;
/// use mu_values::dynamic::Value;
///
/// let is_even = typed::<i64, _>(|n| n % 2 == 0);
/// assert!(is_even(&Value::from(4_i64)));
/// assert!(!is_even(&Value::from(3_i64)));
/// assert!(!is_even(&Value::from("4")));
/// assert!(!is_even(&Value::Null));
/// ```
pub fn typed<T, P>(predicate: P) -> impl Fn(&Value) -> bool
where
    T: Marshal,
    P: Fn(&T) -> bool,
{
    move |value| cast::<T>(value).is_some_and(|t| predicate(&t))
}

/// Like [`typed`], with the type given as a runtime descriptor.
///
/// `predicate` sees the value itself, already known to be an instance of `ty`.
pub fn typed_by<P>(ty: TyKind, predicate: P) -> impl Fn(&Value) -> bool
where
    P: Fn(&Value) -> bool,
{
    move |value| value.is_instance_of(&ty) && predicate(value)
}

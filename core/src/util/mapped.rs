use core::{fmt, marker::PhantomData};

use mu_values::{
    dynamic::{Array, Value},
    traits::ArrayView,
};

use crate::{Error, Result};

/// A lazy, read-only view of `source` with `mapper` applied to each element.
///
/// Nothing is cached: every [`get`](ArrayView::get) reads the source and runs
/// the mapper again. The view's length is always the source's current length,
/// and an out-of-range index yields whatever the source yields (`None`).
///
/// Use a handle with interior mutability (`&RefCell<Vec<_>>`, `Rc<RefCell<_>>`)
/// as the source to observe mutations made after the view was created.
pub struct MappedArray<S, F, E> {
    source: S,
    mapper: F,
    _marker: PhantomData<fn(E)>,
}

impl<S, F, E> MappedArray<S, F, E> {
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_inner(self) -> (S, F) {
        (self.source, self.mapper)
    }
}

impl<S, F, E, T> ArrayView<T> for MappedArray<S, F, E>
where
    S: ArrayView<E>,
    F: Fn(E) -> T,
{
    fn len(&self) -> usize {
        self.source.len()
    }

    fn get(&self, index: usize) -> Option<T> {
        self.source.get(index).map(&self.mapper)
    }
}

impl<S: fmt::Debug, F, E> fmt::Debug for MappedArray<S, F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedArray")
            .field("source", &self.source)
            .field("mapper", &core::any::type_name::<F>())
            .finish()
    }
}

impl<S: Clone, F: Clone, E> Clone for MappedArray<S, F, E> {
    fn clone(&self) -> Self {
        MappedArray {
            source: self.source.clone(),
            mapper: self.mapper.clone(),
            _marker: PhantomData,
        }
    }
}

/// Create a lazy view of `source` with `mapper` applied on every access.
///
/// # Example
///
/// ```
/// use mu_core::map_array;
/// use mu_values::traits::ArrayView;
///
/// let words = vec!["a", "bb", "ccc"];
/// let lengths = map_array(&words, |w: &str| w.len());
/// assert_eq!(lengths.len(), 3);
/// assert_eq!(lengths.get(2), Some(3));
/// assert_eq!(lengths.get(3), None);
/// ```
pub fn map_array<S, F, E, T>(source: S, mapper: F) -> MappedArray<S, F, E>
where
    S: ArrayView<E>,
    F: Fn(E) -> T,
{
    MappedArray {
        source,
        mapper,
        _marker: PhantomData,
    }
}

/// Create a lazy view over a dynamic array value.
///
/// Fails with [`Error::InvalidArgument`] when `value` is `Null` or not an
/// array. The check happens here, before any element is read. The returned
/// view shares the array's storage.
pub fn map_value<F, T>(value: &Value, mapper: F) -> Result<MappedArray<Array, F, Value>>
where
    F: Fn(Value) -> T,
{
    let Some(array) = value.as_array() else {
        let found = value
            .ty()
            .map_or_else(|| "Null".to_string(), |ty| ty.to_string());
        tracing::trace!(%found, "Rejected non-array mapping source");
        return Err(Error::InvalidArgument(format!(
            "expected an array to map over, found {found}"
        )));
    };
    Ok(map_array(array.clone(), mapper))
}

static_assertions::assert_impl_all!(MappedArray<Array, fn(Value) -> i64, Value>: Send, Sync);

use alloc::sync::Arc;

use mu_types::TyKind;

use crate::traits::ArrayView;

use super::Value;

/// A homogeneous array value.
///
/// Stores the element type once; every element is an instance of it. Clones
/// share the element storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    element_ty: TyKind,
    elements: Arc<[Value]>,
}

impl Array {
    /// Create an array of `element_ty` from the given elements.
    ///
    /// All elements must be non-null instances of `element_ty`. This is only
    /// checked in debug builds; `Vec<T>::into_value` drops offending elements
    /// before they get here.
    pub fn new(element_ty: TyKind, elements: impl IntoIterator<Item = Value>) -> Self {
        let elements: Arc<[Value]> = elements.into_iter().collect();
        debug_assert!(
            elements.iter().all(|e| e.is_instance_of(&element_ty)),
            "all array elements must be instances of {element_ty}",
        );
        Self {
            element_ty,
            elements,
        }
    }

    pub fn element_ty(&self) -> &TyKind {
        &self.element_ty
    }

    /// The full type of this array, `Array[element_ty]`.
    pub fn ty(&self) -> TyKind {
        TyKind::array(self.element_ty.clone())
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.elements
    }
}

impl ArrayView<Value> for Array {
    fn len(&self) -> usize {
        <[Value]>::len(&self.elements)
    }

    // Slice methods by path: `Arc<[Value]>` is itself an `ArrayView`.
    fn get(&self, index: usize) -> Option<Value> {
        <[Value]>::get(&self.elements, index).cloned()
    }
}

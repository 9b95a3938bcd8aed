use alloc::{rc::Rc, sync::Arc, vec::Vec};
use core::cell::RefCell;

/// Read-only, indexable access to an ordered sequence.
///
/// Elements are returned by value. Reading past the end returns `None`, which
/// is the only out-of-bounds signal a view produces.
pub trait ArrayView<E> {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<E>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> impl Iterator<Item = E> + '_ {
        (0..self.len()).map_while(move |index| self.get(index))
    }
}

impl<T: Clone> ArrayView<T> for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<T> {
        <[T]>::get(self, index).cloned()
    }
}

impl<T: Clone> ArrayView<T> for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}

// --- Forwarding through handles ---

impl<E, A: ArrayView<E> + ?Sized> ArrayView<E> for &A {
    fn len(&self) -> usize {
        <A as ArrayView<E>>::len(self)
    }

    fn get(&self, index: usize) -> Option<E> {
        <A as ArrayView<E>>::get(self, index)
    }
}

impl<E, A: ArrayView<E> + ?Sized> ArrayView<E> for Rc<A> {
    fn len(&self) -> usize {
        <A as ArrayView<E>>::len(self)
    }

    fn get(&self, index: usize) -> Option<E> {
        <A as ArrayView<E>>::get(self, index)
    }
}

impl<E, A: ArrayView<E> + ?Sized> ArrayView<E> for Arc<A> {
    fn len(&self) -> usize {
        <A as ArrayView<E>>::len(self)
    }

    fn get(&self, index: usize) -> Option<E> {
        <A as ArrayView<E>>::get(self, index)
    }
}

/// Borrows on every call, so a view over a `RefCell` always sees the current
/// contents. Panics if the cell is mutably borrowed during the read.
impl<E, A: ArrayView<E> + ?Sized> ArrayView<E> for RefCell<A> {
    fn len(&self) -> usize {
        <A as ArrayView<E>>::len(&self.borrow())
    }

    fn get(&self, index: usize) -> Option<E> {
        <A as ArrayView<E>>::get(&self.borrow(), index)
    }
}

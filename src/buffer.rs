use crate::element::Element;
use core::ops::{Deref, DerefMut};

/// Fixed-length, contiguous run of elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Buffer<T: Element> {
    elements: Box<[T]>,
}

impl<T: Element> Buffer<T> {
    /// All elements zero.
    pub fn zeroed(len: usize) -> Self {
        Self { elements: vec![T::wrapping_from_index(0); len].into_boxed_slice() }
    }

    /// Element `i` holds `i`, wrapped into `T`.
    pub fn sequential(len: usize) -> Self {
        Self { elements: (0..len).map(T::wrapping_from_index).collect() }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }
}

impl<T: Element> Deref for Buffer<T> {
    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: Element> DerefMut for Buffer<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.elements
    }
}

impl<T: Element> AsRef<[T]> for Buffer<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: Element> AsMut<[T]> for Buffer<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.elements
    }
}

impl<T: Element> From<Vec<T>> for Buffer<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements: elements.into_boxed_slice() }
    }
}

use std::fmt;

use super::{CursorMut, RandomAccessCursor};

/// Signed index into a shared slice.
///
/// The index may leave the slice while stepping; reading there panics, use
/// [`try_get`](Self::try_get) for a checked read.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    index: isize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor at the first element.
    pub fn new(slice: &'a [T]) -> Self {
        Self::at(slice, 0)
    }

    /// Cursor at `index`.
    pub fn at(slice: &'a [T], index: isize) -> Self {
        Self { slice, index }
    }

    /// Cursor one past the last element.
    pub fn end(slice: &'a [T]) -> Self {
        Self::at(slice, slice.len() as isize)
    }

    /// Current index.
    pub fn index(&self) -> isize {
        self.index
    }

    /// The slice being walked.
    pub fn slice(&self) -> &'a [T] {
        self.slice
    }

    /// Element at the current index, if inside the slice.
    pub fn try_get(&self) -> Option<&'a T> {
        let index = usize::try_from(self.index).ok()?;
        self.slice.get(index)
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice, other.slice) && self.index == other.index
    }
}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> RandomAccessCursor for SliceCursor<'_, T> {
    type Value = T;

    #[inline]
    fn offset(&mut self, n: isize) {
        self.index += n;
    }

    #[inline]
    fn distance_from(&self, origin: &Self) -> isize {
        self.index - origin.index
    }

    #[inline]
    fn get(&self) -> &T {
        match self.try_get() {
            Some(value) => value,
            None => out_of_bounds(self.index, self.slice.len()),
        }
    }
}

/// Signed index into an exclusively borrowed slice.
pub struct SliceCursorMut<'a, T> {
    slice: &'a mut [T],
    index: isize,
}

impl<'a, T> SliceCursorMut<'a, T> {
    /// Cursor at the first element.
    pub fn new(slice: &'a mut [T]) -> Self {
        Self::at(slice, 0)
    }

    /// Cursor at `index`.
    pub fn at(slice: &'a mut [T], index: isize) -> Self {
        Self { slice, index }
    }

    /// Current index.
    pub fn index(&self) -> isize {
        self.index
    }

    /// Length of the underlying slice.
    pub fn len(&self) -> usize {
        self.slice.len()
    }

    /// Whether the underlying slice is empty.
    pub fn is_empty(&self) -> bool {
        self.slice.is_empty()
    }

    /// Element at the current index, if inside the slice.
    pub fn try_get(&self) -> Option<&T> {
        let index = usize::try_from(self.index).ok()?;
        self.slice.get(index)
    }

    /// Mutable element at the current index, if inside the slice.
    pub fn try_get_mut(&mut self) -> Option<&mut T> {
        let index = usize::try_from(self.index).ok()?;
        self.slice.get_mut(index)
    }
}

impl<T> PartialEq for SliceCursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice.as_ptr(), other.slice.as_ptr())
            && self.slice.len() == other.slice.len()
            && self.index == other.index
    }
}

impl<T> fmt::Debug for SliceCursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursorMut")
            .field("index", &self.index)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> RandomAccessCursor for SliceCursorMut<'_, T> {
    type Value = T;

    #[inline]
    fn offset(&mut self, n: isize) {
        self.index += n;
    }

    #[inline]
    fn distance_from(&self, origin: &Self) -> isize {
        self.index - origin.index
    }

    #[inline]
    fn get(&self) -> &T {
        let (index, len) = (self.index, self.slice.len());
        match self.try_get() {
            Some(value) => value,
            None => out_of_bounds(index, len),
        }
    }
}

impl<T> CursorMut for SliceCursorMut<'_, T> {
    #[inline]
    fn get_mut(&mut self) -> &mut T {
        let (index, len) = (self.index, self.slice.len());
        match self.try_get_mut() {
            Some(value) => value,
            None => out_of_bounds(index, len),
        }
    }
}

#[cold]
#[track_caller]
fn out_of_bounds(index: isize, len: usize) -> ! {
    panic!("cursor index {index} out of bounds for slice of length {len}")
}

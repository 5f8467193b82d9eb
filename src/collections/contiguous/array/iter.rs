use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use super::Array;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let result = IntoIter {
            buf: self.ptr,
            cap: self.size,
            start: 0,
            end: self.size,
            _phantom: PhantomData,
        };
        mem::forget(self);
        result
    }
}

/// A type for owned iteration over an [`Array`]. The values in `start..end` haven't been yielded
/// yet, while the allocation itself is described by `buf` and `cap`.
pub struct IntoIter<T> {
    pub(crate) buf: NonNull<T>,
    pub(crate) cap: usize,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> IntoIter<T> {
    /// Returns the values which haven't been yielded yet as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: All values in start..end are initialized and within the allocation.
        unsafe {
            std::slice::from_raw_parts(self.buf.add(self.start).as_ptr(), self.end - self.start)
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Values in start..end are initialized and haven't been moved out. Each is dropped
        // exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.add(self.start).as_ptr(),
                self.end - self.start,
            ));
        }

        // SAFETY: buf was allocated by an Array of cap values and is never used again.
        unsafe { Array::deallocate(self.buf, self.cap) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start is in bounds and initialized. Incrementing start afterwards means that
            // the value is effectively moved out of the allocation.
            let value = unsafe { self.buf.add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: end has just been decremented and is still >= start, so the value is
            // initialized and hasn't been yielded yet.
            let value = unsafe { self.buf.add(self.end).read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

// Borrowed iteration comes from Deref<Target = [T]>.

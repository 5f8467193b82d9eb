use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use log::trace;

use super::position::{self, Position};
use crate::collections::contiguous::Array;
use crate::error::{
    EmptyContainer, IndexOutOfBounds, InvalidPosition, InvalidRange, PositionError, StalePosition,
};

const GROWTH_FACTOR: usize = 2;

/// A growable sequence stored in one contiguous buffer, built on [`Array<T>`].
///
/// Elements are addressed either by index, through the slice that a Vector dereferences to, or by
/// [`Position`], which supports the arithmetic of a random access iterator. Positions don't borrow
/// the Vector, instead they are invalidated (become stale) whenever the Vector reallocates or shifts
/// its elements. Stale Positions are rejected rather than causing undefined behavior.
///
/// # Growth
/// When a push doesn't fit, the capacity grows to `(cap + 1) * 2`. When inserting `k` elements that
/// don't fit, it grows to `(len + k) * 2`. Capacity only decreases through
/// [`shrink_to_fit`](Vector::shrink_to_fit).
///
/// # Time Complexity
/// - `n`: Elements currently held.
/// - `i`: Index the operation starts at.
/// - `k`: Elements inserted or erased at once.
///
/// | Operation | Cost |
/// |-|-|
/// | `at` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_back` | `O(1)`*, `O(n)` |
/// | `pop_back` | `O(1)` |
/// | `remove` | `O(n-i)` |
/// | `insert` | `O(n-i)`, `O(n)` |
/// | `insert_iter` | `O(n-i+k)`, `O(n+k)` |
/// | `erase` | `O(n-i)` |
/// | `erase_range` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)`, `O(1)` |
/// | `assign` | `O(n+k)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push_back` will take `O(n)`.
///
/// \** If the Vector already has the requested capacity, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
    pub(crate) generation: u64,
}

impl<T> Vector<T> {
    /// Creates an empty Vector. Nothing is allocated until the first element arrives.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let vec: Vector<char> = Vector::new();
    /// assert!(vec.is_empty());
    /// assert_eq!((vec.len(), vec.cap()), (0, 0));
    /// ```
    pub fn new() -> Vector<T> {
        Vector::with_cap(0)
    }

    /// Creates an empty Vector with room for exactly `cap` elements.
    ///
    /// # Panics
    /// Panics if `cap` elements would take more than [`isize::MAX`] bytes.
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
            generation: position::next_generation(),
        }
    }

    /// Collects an [`ExactSizeIterator`] into a Vector whose capacity matches its length.
    ///
    /// # Panics
    /// Panics if the items would take more than [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let vec = Vector::from_iter_exact(1_u8..=3);
    /// assert_eq!(vec.cap(), 3);
    /// assert_eq!(vec.back(), Some(&3));
    /// ```
    pub fn from_iter_exact<I>(items: I) -> Vector<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        Array::from_iter_exact(items).into()
    }

    /// The number of live elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the Vector holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of cells allocated. This is always exactly what the growth policy or a call to
    /// [`reserve`](Vector::reserve) asked for, never rounded up by the allocator.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns a Position at the first element of the Vector.
    pub const fn begin(&self) -> Position {
        Position::new(0, self.generation)
    }

    /// Returns a Position one past the last element of the Vector.
    pub const fn end(&self) -> Position {
        Position::new(self.len as isize, self.generation)
    }

    /// Returns a reference to the element at `index`, checking that it is in bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 2, 3]);
    /// assert_eq!(vec.at(2), Ok(&3));
    /// assert!(vec.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at `index`, checking that it is in bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Returns a reference to the first element, or [`None`] if the Vector is empty.
    pub fn front(&self) -> Option<&T> {
        self.first()
    }

    /// Returns a mutable reference to the first element, if there is one.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.first_mut()
    }

    /// Returns a reference to the last element, or [`None`] if the Vector is empty.
    pub fn back(&self) -> Option<&T> {
        self.last()
    }

    /// Returns a mutable reference to the last element, if there is one.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// # Errors
    /// Returns [`StalePosition`] if `pos` was invalidated, or [`InvalidPosition`] if it doesn't
    /// refer to an element.
    pub fn get_at(&self, pos: Position) -> Result<&T, PositionError> {
        let index = self.element_index(pos)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// # Errors
    /// Returns [`StalePosition`] if `pos` was invalidated, or [`InvalidPosition`] if it doesn't
    /// refer to an element.
    pub fn get_at_mut(&mut self, pos: Position) -> Result<&mut T, PositionError> {
        let index = self.element_index(pos)?;
        Ok(&mut self[index])
    }

    /// Push the provided value onto the end of the Vector, growing the capacity to
    /// `(cap + 1) * 2` if the Vector is full. Growing invalidates all Positions.
    ///
    /// # Panics
    /// Panics if the new capacity would take more than [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3, 4, 5]);
    /// vec.push_back(6);
    /// assert_eq!(vec.cap(), 12);
    /// assert_eq!(&*vec, &[1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: A full Vector was grown above, so there is a free cell at len.
        unsafe { self.push_unchecked(value) }
    }

    /// Appends `value` without checking for a free cell.
    ///
    /// # Safety
    /// `len` must be less than `cap`.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: The caller guarantees len < cap, so the cell at len lies inside the allocation.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Removes the last value of the Vector and returns it. The capacity is unchanged.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the Vector has no elements.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2]);
    /// assert_eq!(vec.pop_back(), Ok(2));
    /// assert_eq!(vec.pop_back(), Ok(1));
    /// assert!(vec.pop_back().is_err());
    /// ```
    pub fn pop_back(&mut self) -> Result<T, EmptyContainer> {
        if self.len == 0 {
            return Err(EmptyContainer);
        }

        self.len -= 1;

        // SAFETY: len has just been decremented, so the value at len is initialized and is no
        // longer considered part of the Vector, which moves it out.
        Ok(unsafe { self.arr.ptr.add(self.len).read().assume_init() })
    }

    /// Removes the element at `index` and returns it, shifting all following elements to the left.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;

        // SAFETY: index has just been checked to be in bounds.
        Ok(unsafe { self.remove_unchecked(index) })
    }

    /// Inserts `value` before `pos`, returning a Position at the inserted element. Any previously
    /// obtained Positions are invalidated.
    ///
    /// # Errors
    /// - [`StalePosition`] if `pos` was invalidated.
    /// - [`EmptyContainer`] if the Vector is empty and `pos` isn't [`begin`](Vector::begin).
    /// - [`InvalidPosition`] if `pos` isn't within `[begin, end]`.
    ///
    /// # Panics
    /// Panics if the new capacity would take more than [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3, 4, 5]);
    /// let pos = vec.insert(vec.begin() + 2, 99).unwrap();
    /// assert_eq!(&*vec, &[1, 2, 99, 3, 4, 5]);
    /// assert_eq!(vec.get_at(pos), Ok(&99));
    /// ```
    pub fn insert(&mut self, pos: Position, value: T) -> Result<Position, PositionError> {
        self.insert_iter(pos, iter::once(value))
    }

    /// Inserts all items produced by `items` before `pos`, in order, returning a Position at the
    /// first inserted element. If at least one item is inserted, previously obtained Positions are
    /// invalidated.
    ///
    /// If the iterator yields fewer items than it claimed, only those items are inserted. Any
    /// additional items are ignored.
    ///
    /// # Errors
    /// - [`StalePosition`] if `pos` was invalidated.
    /// - [`EmptyContainer`] if the Vector is empty and `pos` isn't [`begin`](Vector::begin).
    /// - [`InvalidPosition`] if `pos` isn't within `[begin, end]`.
    ///
    /// # Panics
    /// Panics if the new capacity would take more than [`isize::MAX`] bytes.
    pub fn insert_iter<I>(&mut self, pos: Position, items: I) -> Result<Position, PositionError>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let index = self.check_insert_position(pos)?;
        let iter = items.into_iter();
        let count = iter.len();

        if count == 0 {
            return Ok(Position::new(index as isize, self.generation));
        }

        let required = self.len.checked_add(count).expect("Capacity overflow!");
        if required > self.cap() {
            // The offset is kept instead of pos, so the reallocation doesn't matter.
            self.realloc_with_cap(required.checked_mul(GROWTH_FACTOR).expect("Capacity overflow!"));
        }

        let tail = self.len - index;

        // SAFETY: index <= len and len + count <= cap, so both the source and destination ranges
        // are within the allocation. ptr::copy handles the overlap.
        unsafe {
            ptr::copy(
                self.arr.ptr.add(index).as_ptr(),
                self.arr.ptr.add(index + count).as_ptr(),
                tail,
            );
        }

        // If the iterator panics, the shifted tail is leaked rather than dropped twice.
        self.len = index;

        let mut written = 0;
        for item in iter.take(count) {
            // SAFETY: index + written < index + count <= cap, and the cell has been vacated.
            unsafe { self.arr.ptr.add(index + written).write(MaybeUninit::new(item)); }
            written += 1;
            self.len = index + written;
        }

        if written < count {
            // SAFETY: Close the gap left by the short iterator, both ranges are within the
            // allocation.
            unsafe {
                ptr::copy(
                    self.arr.ptr.add(index + count).as_ptr(),
                    self.arr.ptr.add(index + written).as_ptr(),
                    tail,
                );
            }
        }

        self.len = index + written + tail;
        self.invalidate();

        Ok(Position::new(index as isize, self.generation))
    }

    /// Inserts clones of all values in `values` before `pos`. See [`Vector::insert_iter`].
    ///
    /// # Errors
    /// See [`Vector::insert_iter`].
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 5]);
    /// vec.insert_slice(vec.begin() + 1, &[2, 3, 4]).unwrap();
    /// assert_eq!(&*vec, &[1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_slice(&mut self, pos: Position, values: &[T]) -> Result<Position, PositionError>
    where
        T: Clone,
    {
        self.insert_iter(pos, values.iter().cloned())
    }

    /// Removes the element at `pos`, shifting all following elements to the left. Returns a
    /// Position at the element which followed the removed one. Previously obtained Positions are
    /// invalidated.
    ///
    /// # Errors
    /// - [`EmptyContainer`] if the Vector has no elements.
    /// - [`StalePosition`] if `pos` was invalidated.
    /// - [`InvalidPosition`] if `pos` isn't within `[begin, end)`.
    pub fn erase(&mut self, pos: Position) -> Result<Position, PositionError> {
        if self.is_empty() {
            return Err(EmptyContainer.into());
        }
        let index = self.element_index(pos)?;

        // SAFETY: index has just been checked to be in bounds.
        let removed = unsafe { self.remove_unchecked(index) };
        self.invalidate();
        drop(removed);

        Ok(Position::new(index as isize, self.generation))
    }

    /// Removes the elements in `[first, last)`, shifting all following elements to the left.
    /// Returns a Position at the element which followed the removed range. If at least one element
    /// is removed, previously obtained Positions are invalidated.
    ///
    /// # Errors
    /// - [`EmptyContainer`] if the Vector has no elements.
    /// - [`StalePosition`] if `first` or `last` was invalidated.
    /// - [`InvalidRange`] unless `begin <= first <= last <= end`.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3, 4, 5]);
    /// let next = vec.erase_range(vec.begin() + 1, vec.begin() + 3).unwrap();
    /// assert_eq!(&*vec, &[1, 4, 5]);
    /// assert_eq!(vec.get_at(next), Ok(&4));
    /// ```
    pub fn erase_range(&mut self, first: Position, last: Position) -> Result<Position, PositionError> {
        if self.is_empty() {
            return Err(EmptyContainer.into());
        }
        let (start, end) = self.range_indices(first, last)?;

        if start == end {
            return Ok(Position::new(start as isize, self.generation));
        }

        let tail = self.len - end;

        // If dropping panics, the tail is leaked rather than dropped twice.
        self.len = start;

        // SAFETY: start..end is within the initialized range and is now outside of len, so each
        // value is dropped exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.arr.ptr.add(start).as_ptr().cast::<T>(),
                end - start,
            ));
        }

        // SAFETY: end + tail == old len <= cap, so both ranges are within the allocation.
        unsafe {
            ptr::copy(
                self.arr.ptr.add(end).as_ptr(),
                self.arr.ptr.add(start).as_ptr(),
                tail,
            );
        }

        self.len = start + tail;
        self.invalidate();

        Ok(Position::new(start as isize, self.generation))
    }

    /// Drops all elements of the Vector, keeping its capacity. Previously obtained Positions are
    /// invalidated.
    pub fn clear(&mut self) {
        let len = self.len;
        // If dropping panics, the remaining values are leaked rather than dropped twice.
        self.len = 0;

        // SAFETY: All values < len are initialized and are now outside of the Vector.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast::<T>(),
                len,
            ));
        }

        self.invalidate();
    }

    /// Ensures that the capacity of the Vector is at least `new_cap`. If it is currently smaller,
    /// the Vector is reallocated with a capacity of exactly `new_cap`, invalidating all Positions.
    ///
    /// # Panics
    /// Panics if the new capacity would take more than [`isize::MAX`] bytes.
    pub fn reserve(&mut self, new_cap: usize) {
        if new_cap > self.cap() {
            self.realloc_with_cap(new_cap);
        }
    }

    /// Releases every unused cell, leaving `cap == len`. Reallocating invalidates all Positions.
    pub fn shrink_to_fit(&mut self) {
        if self.cap() > self.len {
            self.realloc_with_cap(self.len);
        }
    }

    /// Replaces the contents of the Vector with `count` clones of `value`. The Vector is only
    /// reallocated if `count` exceeds the current capacity, in which case the capacity becomes
    /// exactly `count`.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let mut vec = Vector::from([1, 2, 3, 4, 5]);
    /// vec.assign(3, 7);
    /// assert_eq!(&*vec, &[7, 7, 7]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn assign(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        self.assign_iter(iter::repeat_n(value, count));
    }

    /// Replaces the contents of the Vector with the items produced by `items`. See
    /// [`Vector::assign`] for the reallocation behavior.
    pub fn assign_iter<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = items.into_iter();
        let count = iter.len();

        self.clear();
        if count > self.cap() {
            self.realloc_with_cap(count);
        }

        for item in iter.take(count) {
            // SAFETY: take(count) never yields more than the cap reserved above.
            unsafe { self.push_unchecked(item); }
        }
    }

    /// Replaces the contents of the Vector with clones of `values`. See [`Vector::assign`] for the
    /// reallocation behavior.
    pub fn assign_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.assign_iter(values.iter().cloned());
    }

    /// Swaps the contents of two Vectors, including their capacity. Positions keep referring to the
    /// contents they were created from.
    pub fn swap_with(&mut self, other: &mut Vector<T>) {
        mem::swap(self, other);
    }

    /// Creates a Vector containing clones of the elements of `source` in `[first, last)`.
    ///
    /// # Errors
    /// - [`StalePosition`] if `first` or `last` was invalidated.
    /// - [`InvalidRange`] unless `begin <= first <= last <= end` for `source`.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Vector;
    /// let vec = Vector::from([1, 2, 3, 4, 5]);
    /// let part = Vector::from_range(&vec, vec.begin() + 1, vec.begin() + 3).unwrap();
    /// assert_eq!(&*part, &[2, 3]);
    /// ```
    pub fn from_range(
        source: &Vector<T>,
        first: Position,
        last: Position,
    ) -> Result<Vector<T>, PositionError>
    where
        T: Clone,
    {
        let (start, end) = source.range_indices(first, last)?;
        Ok(Vector::from_iter_exact(source[start..end].iter().cloned()))
    }
}

impl<T: Default> Vector<T> {
    /// Creates a Vector of `len` default values, with capacity equal to its length.
    ///
    /// # Panics
    /// Panics if the elements would take more than [`isize::MAX`] bytes.
    pub fn with_len(len: usize) -> Vector<T> {
        Array::repeat_default(len).into()
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a Vector containing clones of `values`, with capacity equal to its length.
    pub fn from_slice(values: &[T]) -> Vector<T> {
        Vector::from_iter_exact(values.iter().cloned())
    }
}

impl<T> Vector<T> {
    /// Starts a new generation, making all existing Positions stale.
    pub(crate) fn invalidate(&mut self) {
        self.generation = position::next_generation();
    }

    /// Moves the elements into a buffer of exactly `new_cap` cells. `new_cap` is never below len.
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        if new_cap == self.cap() { return; }

        trace!("reallocating Vector from {} to {} cells ({} live)", self.cap(), new_cap, self.len);
        self.arr.realloc(new_cap);
        self.invalidate();
    }

    /// Applies the push growth policy, `(cap + 1) * 2`.
    pub(crate) fn grow(&mut self) {
        let new_cap = self.cap()
            .checked_add(1)
            .and_then(|cap| cap.checked_mul(GROWTH_FACTOR))
            .expect("Capacity overflow!");

        self.realloc_with_cap(new_cap);
    }

    /// Removes and returns the value at `index` without checking bounds.
    ///
    /// # Safety
    /// `index` must be less than len.
    pub(crate) unsafe fn remove_unchecked(&mut self, index: usize) -> T {
        // SAFETY: The caller guarantees that index < len, so the value is initialized. The
        // following values are then moved left over the vacated cell.
        unsafe {
            let value = self.arr.ptr.add(index).read().assume_init();
            ptr::copy(
                self.arr.ptr.add(index + 1).as_ptr(),
                self.arr.ptr.add(index).as_ptr(),
                self.len - index - 1,
            );
            self.len -= 1;
            value
        }
    }

    /// Bounds check used by the fallible accessors.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            })
        } else {
            Ok(())
        }
    }

    pub(crate) const fn check_fresh(&self, pos: Position) -> Result<(), StalePosition> {
        if pos.generation == self.generation {
            Ok(())
        } else {
            Err(StalePosition)
        }
    }

    /// Validates a Position which must refer to an element, returning its index.
    pub(crate) fn element_index(&self, pos: Position) -> Result<usize, PositionError> {
        self.check_fresh(pos)?;

        if pos.offset < 0 || pos.offset as usize >= self.len {
            return Err(InvalidPosition {
                offset: pos.offset,
                len: self.len,
            }.into());
        }

        Ok(pos.offset as usize)
    }

    /// Validates a Position before which elements may be inserted, returning its index. An empty
    /// Vector only accepts insertion at its start, which is also its end.
    pub(crate) fn check_insert_position(&self, pos: Position) -> Result<usize, PositionError> {
        self.check_fresh(pos)?;

        if self.is_empty() && pos.offset != 0 {
            return Err(EmptyContainer.into());
        }

        if pos.offset < 0 || pos.offset as usize > self.len {
            return Err(InvalidPosition {
                offset: pos.offset,
                len: self.len,
            }.into());
        }

        Ok(pos.offset as usize)
    }

    /// Validates a range of Positions, returning the corresponding indices.
    pub(crate) fn range_indices(
        &self,
        first: Position,
        last: Position,
    ) -> Result<(usize, usize), PositionError> {
        self.check_fresh(first)?;
        self.check_fresh(last)?;

        if first.offset < 0 || first.offset > last.offset || last.offset as usize > self.len {
            return Err(InvalidRange {
                first: first.offset,
                last: last.offset,
                len: self.len,
            }.into());
        }

        Ok((first.offset as usize, last.offset as usize))
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let items = value.into_iter();
        let mut vec = Vector::with_cap(items.size_hint().0);

        items.for_each(|item| vec.push_back(item));
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: Only the first len cells are live. The buffer itself is freed when arr drops,
        // which never touches the MaybeUninit contents.
        unsafe { ptr::drop_in_place(&mut **self as *mut [T]) }
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: MaybeUninit<T> has the layout of T and the first len cells are initialized.
        unsafe { slice::from_raw_parts(self.arr.ptr.cast::<T>().as_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: See deref. The slice holds the unique borrow of self.
        unsafe { slice::from_raw_parts_mut(self.arr.ptr.cast::<T>().as_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Clones the Vector, keeping its capacity.
    fn clone(&self) -> Self {
        let mut copy = Self::with_cap(self.cap());
        for value in self.iter() {
            // SAFETY: copy was allocated with cap >= len cells.
            unsafe { copy.push_unchecked(value.clone()); }
        }
        copy
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(value: [T; N]) -> Self {
        Vector::from_iter_exact(value)
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        Vector::from_slice(value)
    }
}

impl<T> From<Vector<T>> for Array<T> {
    fn from(mut value: Vector<T>) -> Self {
        value.shrink_to_fit();
        // Ownership of the elements moves to the Array.
        value.len = 0;

        let cells = mem::take(&mut value.arr);
        // SAFETY: Once shrunk, every cell was below len and so holds a live element.
        unsafe { cells.assume_init() }
    }
}

impl<T> From<Array<T>> for Vector<T> {
    fn from(value: Array<T>) -> Self {
        let len = value.size();
        Vector {
            arr: value.forget_init(),
            len,
            generation: position::next_generation(),
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    /// Two Vectors are equal if they have the same length and equal elements. Capacity isn't
    /// considered.
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("elements", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("generation", &self.generation)
            .finish()
    }
}

/// Shows the live elements, then a `|` followed by one `_` per reserved cell.
///
/// ```
/// # use basic_collections::collections::contiguous::Vector;
/// let mut vec = Vector::from([1, 2, 3]);
/// vec.reserve(5);
/// assert_eq!(vec.to_string(), "{ 1 2 3 | _ _ }, len=3, cap=5");
/// ```
impl<T: Display> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for value in self.iter() {
            write!(f, "{value} ")?;
        }
        write!(f, "| ")?;
        for _ in self.len..self.cap() {
            write!(f, "_ ")?;
        }
        write!(f, "}}, len={}, cap={}", self.len, self.cap())
    }
}

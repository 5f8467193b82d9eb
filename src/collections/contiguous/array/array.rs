use std::alloc::{self, Layout};
use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

/// A heap buffer with a length chosen at runtime, similar to a [`Box<[T]>`](Box<T>). While an
/// `Array<T>` always has every cell initialized, an `Array<MaybeUninit<T>>` can also be resized to
/// an exact number of cells with [`realloc`](Array::realloc).
///
/// Array is the storage behind both [`Vector`](super::super::Vector), which tracks how many of its
/// cells are initialized, and [`HashTable`](crate::collections::hash::HashTable), which keeps one
/// chain per cell.
///
/// # Time Complexity
/// - `n`: The number of cells in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | indexing | `O(1)` |
/// | `size` | `O(1)` |
/// | `repeat_default` | `O(n)` |
/// | `realloc` | `O(n)`*, `O(1)` |
///
/// \* The global allocator may be able to resize the allocation in place.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates an empty Array without allocating.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert!(arr.is_empty());
    /// ```
    pub fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates `size` uninitialized cells.
    ///
    /// # Panics
    /// Panics if `size` cells of `T` would take more than [`isize::MAX`] bytes.
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        Array {
            ptr: Array::<MaybeUninit<T>>::allocate(size),
            size,
            _phantom: PhantomData,
        }
    }

    /// Collects an [`ExactSizeIterator`] into an Array with a single allocation.
    ///
    /// The reported length is trusted for the allocation only. If the iterator ends early, the
    /// Array is shrunk to the items it actually produced. Items past the reported length are
    /// never pulled from the iterator.
    ///
    /// # Panics
    /// Panics if the reported length of `T`s would take more than [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Array;
    /// let arr = Array::from_iter_exact(["a", "b", "c"]);
    /// assert_eq!(&*arr, &["a", "b", "c"]);
    /// ```
    pub fn from_iter_exact<I>(items: I) -> Array<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let iter = items.into_iter();
        let mut cells = Self::new_uninit(iter.len());

        let mut filled = 0;
        for (cell, item) in cells.iter_mut().zip(iter) {
            cell.write(item);
            filled += 1;
        }

        if filled < cells.size {
            cells.realloc(filled);
        }

        // SAFETY: Every cell in 0..filled was written and the Array holds exactly filled cells.
        unsafe { cells.assume_init() }
    }

    /// Returns the number of cells in the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Reinterprets the Array as uninitialized cells so that it can be resized. The current values
    /// are forgotten rather than dropped.
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let this = mem::ManuallyDrop::new(self);

        Array {
            ptr: this.ptr.cast(),
            size: this.size,
            _phantom: PhantomData,
        }
    }
}

impl<T> Array<T> {
    /// The layout of `cells` consecutive values of `T`.
    ///
    /// # Panics
    /// Panics with "Capacity overflow!" if the layout would exceed [`isize::MAX`] bytes.
    pub(crate) fn layout_for(cells: usize) -> Layout {
        Layout::array::<T>(cells).expect("Capacity overflow!")
    }

    /// Allocates room for `cells` values of `T` in the global allocator. Nothing is allocated for a
    /// zero-sized layout, for which a dangling pointer is returned instead. Allocation failure is
    /// reported through [`alloc::handle_alloc_error`].
    ///
    /// # Panics
    /// See [`Array::layout_for`].
    pub(crate) fn allocate(cells: usize) -> NonNull<T> {
        let layout = Self::layout_for(cells);
        if layout.size() == 0 {
            return NonNull::dangling();
        }

        // SAFETY: The layout has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        NonNull::new(raw.cast()).unwrap_or_else(|| alloc::handle_alloc_error(layout))
    }

    /// Returns an allocation made by [`Array::allocate`] to the global allocator, without dropping
    /// anything inside it.
    ///
    /// # Safety
    /// `ptr` must have come from `Array::<T>::allocate(cells)` (or a reallocation to `cells`) and
    /// must not be used afterwards.
    pub(crate) unsafe fn deallocate(ptr: NonNull<T>, cells: usize) {
        let layout = Self::layout_for(cells);
        if layout.size() != 0 {
            // SAFETY: The caller guarantees that ptr was allocated with this exact layout, which
            // isn't zero-sized.
            unsafe { alloc::dealloc(ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T: Default> Array<T> {
    /// Creates an Array holding `count` default values of `T`.
    ///
    /// # Panics
    /// Panics if `count` cells of `T` would take more than [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::collections::contiguous::Array;
    /// let arr: Array<Option<u8>> = Array::repeat_default(2);
    /// assert_eq!(&*arr, &[None, None]);
    /// ```
    pub fn repeat_default(count: usize) -> Array<T> {
        let mut cells = Self::new_uninit(count);
        for cell in cells.iter_mut() {
            cell.write(T::default());
        }

        // SAFETY: The loop above wrote every cell.
        unsafe { cells.assume_init() }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Treats every cell of the Array as initialized.
    ///
    /// # Safety
    /// Every cell must hold a valid `T`. Otherwise, reading or dropping the returned Array is
    /// undefined behavior.
    pub unsafe fn assume_init(self) -> Array<T> {
        let this = mem::ManuallyDrop::new(self);

        Array {
            ptr: this.ptr.cast(),
            size: this.size,
            _phantom: PhantomData,
        }
    }

    /// Resizes the Array to exactly `new_size` cells. The contents of the first
    /// `min(size, new_size)` cells are kept, cells past `new_size` are discarded without being
    /// dropped and new cells are uninitialized.
    ///
    /// # Panics
    /// Panics if `new_size` cells of `T` would take more than [`isize::MAX`] bytes.
    pub fn realloc(&mut self, new_size: usize) {
        if size_of::<T>() == 0 {
            // Zero-sized cells never own memory.
            self.size = new_size;
            return;
        }

        self.ptr = match (self.size, new_size) {
            (old, new) if old == new => return,
            (0, new) => Self::allocate(new),
            (old, 0) => {
                // SAFETY: ptr was allocated for old cells and is replaced straight away.
                unsafe { Self::deallocate(self.ptr, old) };
                NonNull::dangling()
            },
            (old, new) => {
                let old_layout = Self::layout_for(old);
                let new_layout = Self::layout_for(new);

                // SAFETY: ptr was allocated in the global allocator with old_layout, and the new
                // size is non-zero and has been checked against isize::MAX.
                let raw = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size())
                };
                NonNull::new(raw.cast()).unwrap_or_else(|| alloc::handle_alloc_error(new_layout))
            },
        };
        self.size = new_size;
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: Every cell is initialized and dropped exactly once, then the allocation is
        // released with the size it was made for.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
            Self::deallocate(self.ptr, self.size);
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: ptr is aligned and non-null, and is followed by size initialized values of T.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with self borrowed mutably for as long as the slice lives.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

// SAFETY: An Array owns its values outright, like a Box<[T]>.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Shared access only ever hands out shared references to the values.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from_iter_exact(self.iter().cloned())
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self[..] == other[..]
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self[..].hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

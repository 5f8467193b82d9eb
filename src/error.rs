//! Error types returned by the collections in this crate.
//!
//! Every failure condition is its own type, so that a method can state exactly which conditions it
//! may produce. [`PositionError`] combines the conditions shared by the position-based methods of
//! [`Vector`](crate::collections::contiguous::Vector).

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A checked lookup was performed with a key that isn't present in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFound;

impl Display for KeyNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key not found!")
    }
}

impl Error for KeyNotFound {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A structural change was requested which requires at least one element, or (for insertion) a
/// position other than the start was used on a collection without elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyContainer;

impl Display for EmptyContainer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation requires a non-empty collection!")
    }
}

impl Error for EmptyContainer {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPosition {
    pub offset: isize,
    pub len: usize,
}

impl Display for InvalidPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Position {} is invalid for collection with {} elements!", self.offset, self.len)
    }
}

impl Error for InvalidPosition {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRange {
    pub first: isize,
    pub last: isize,
    pub len: usize,
}

impl Display for InvalidRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range [{}, {}) is invalid for collection with {} elements!",
            self.first, self.last, self.len
        )
    }
}

impl Error for InvalidRange {}

/// A position was used after the collection it refers to reallocated or shifted its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StalePosition;

impl Display for StalePosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Position was invalidated by a reallocation or shift!")
    }
}

impl Error for StalePosition {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidLoadFactor(pub f32);

impl Display for InvalidLoadFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Load factor {} must be finite and greater than 0!", self.0)
    }
}

impl Error for InvalidLoadFactor {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum PositionError {
    EmptyContainer(EmptyContainer),
    InvalidPosition(InvalidPosition),
    InvalidRange(InvalidRange),
    StalePosition(StalePosition),
}

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::sync::atomic::{self, AtomicU64};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(0);

/// Returns a generation that no Vector has used before. Drawing all generations from one counter
/// means that a Position from one Vector is never mistaken for a fresh Position of another.
pub(crate) fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, atomic::Ordering::Relaxed)
}

/// A random-access cursor into a [`Vector`](super::Vector). It supports the arithmetic of a slice
/// index, but doesn't borrow the Vector it was created from.
///
/// A Position is a signed offset paired with the generation of the Vector when the Position was
/// created. Any operation which reallocates or shifts the elements of a Vector starts a new
/// generation, after which older Positions are stale and rejected by every method which accepts a
/// Position.
///
/// Arithmetic and comparisons only consider the offset. Moving a Position outside of a Vector's
/// bounds is allowed, the bounds are only checked when it is used.
///
/// # Panics
/// Every arithmetic operation panics with "Position overflow!" if the offset would leave the range
/// of [`isize`].
///
/// # Examples
/// ```
/// # use basic_collections::collections::contiguous::Vector;
/// let vec = Vector::from([1, 2, 3, 4, 5]);
/// let mut pos = vec.begin() + 2;
/// assert_eq!(vec.get_at(pos), Ok(&3));
/// pos += 1;
/// assert_eq!(vec.get_at(pos), Ok(&4));
/// assert_eq!(vec.end() - pos, 2);
/// assert!(pos < vec.end());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Position {
    pub(crate) offset: isize,
    pub(crate) generation: u64,
}

impl Position {
    pub(crate) const fn new(offset: isize, generation: u64) -> Position {
        Position {
            offset,
            generation,
        }
    }

    /// Returns the offset of this Position from the start of its Vector.
    pub const fn offset(&self) -> isize {
        self.offset
    }

    /// Moves forward by one and returns the updated Position (pre-increment).
    pub const fn inc(&mut self) -> Position {
        self.offset = shift(self.offset, 1);
        *self
    }

    /// Moves forward by one and returns the Position from before the move (post-increment).
    pub const fn post_inc(&mut self) -> Position {
        let old = *self;
        self.offset = shift(self.offset, 1);
        old
    }

    /// Moves back by one and returns the updated Position (pre-decrement).
    pub const fn dec(&mut self) -> Position {
        self.offset = shift(self.offset, -1);
        *self
    }

    /// Moves back by one and returns the Position from before the move (post-decrement).
    pub const fn post_dec(&mut self) -> Position {
        let old = *self;
        self.offset = shift(self.offset, -1);
        old
    }
}

/// Adds `delta` to `offset`.
///
/// # Panics
/// Panics with "Position overflow!" if the result doesn't fit in an [`isize`].
const fn shift(offset: isize, delta: isize) -> isize {
    offset.checked_add(delta).expect("Position overflow!")
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset
    }
}

impl Eq for Position {}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.offset.hash(state);
    }
}

impl Add<isize> for Position {
    type Output = Position;

    fn add(self, rhs: isize) -> Self::Output {
        Position::new(shift(self.offset, rhs), self.generation)
    }
}

impl Add<Position> for isize {
    type Output = Position;

    fn add(self, rhs: Position) -> Self::Output {
        rhs + self
    }
}

impl AddAssign<isize> for Position {
    fn add_assign(&mut self, rhs: isize) {
        self.offset = shift(self.offset, rhs);
    }
}

impl Sub<isize> for Position {
    type Output = Position;

    fn sub(self, rhs: isize) -> Self::Output {
        Position::new(
            self.offset.checked_sub(rhs).expect("Position overflow!"),
            self.generation,
        )
    }
}

impl SubAssign<isize> for Position {
    fn sub_assign(&mut self, rhs: isize) {
        self.offset = self.offset.checked_sub(rhs).expect("Position overflow!");
    }
}

/// The signed distance between two Positions.
impl Sub<Position> for Position {
    type Output = isize;

    fn sub(self, rhs: Position) -> Self::Output {
        self.offset.checked_sub(rhs.offset).expect("Position overflow!")
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[@ {}, generation {}]", self.offset, self.generation)
    }
}

//! The growable [`Vector`] and its cursor type.
//!
//! A [`Position`] is a Copy cursor supporting offset arithmetic and ordering. It is checked against
//! the Vector's generation whenever it is used, so a Position that outlived a reallocation or a
//! shift is refused instead of reading the wrong cell. Owned iteration uses [`IntoIter`]; borrowed
//! iteration goes through the slice view.

mod iter;
mod position;
mod tests;
mod vector;

pub use iter::*;
pub use position::Position;
pub use vector::*;

//! Contiguous collection types. [`Array`] is a buffer sized at runtime and [`Vector`] is a
//! collection that grows and shrinks at runtime.
#![warn(missing_docs)]

pub mod array;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use vector::{Position, Vector};

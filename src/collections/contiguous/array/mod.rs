//! The fixed-size [`Array`] buffer and its owning [`IntoIter`]. Borrowed iteration goes through the
//! slice that an Array dereferences to.

mod array;
mod iter;

pub use array::*;
pub use iter::*;

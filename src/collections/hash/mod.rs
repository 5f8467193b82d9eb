//! Hash-based collections.

pub mod table;

#[doc(inline)]
pub use table::HashTable;

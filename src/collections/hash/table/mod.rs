//! A module containing [`HashTable`] and associated types.
//!
//! Each bucket of a HashTable is a singly linked chain of [`Entry`] values. The other included
//! types provide owned and borrowed iteration over entries, keys or values in a table.
//!
//! There is no mutable iterator over keys, because mutating the keys of a HashTable in place would
//! cause a logic error.
//!
//! [`HashTable`] is also re-exported under the parent module.

mod chain;
mod hash_table;
mod iter;
mod prime;

pub use chain::Entry;
pub use hash_table::*;
pub use iter::*;
pub use prime::{is_prime, next_prime};

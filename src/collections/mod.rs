//! Various general-purpose collection types.
//!
//! # Purpose
//! These types are written from scratch to show how each of the data structures works underneath,
//! covering concepts such as allocations, growth policies, iterators and hashing.
//!
//! # Method
//! [`Vector`](contiguous::Vector) implements [`Deref<Target = [T]>`](std::ops::Deref) (and
//! DerefMut), which saves writing some of the more repetitive functionality. Both containers store
//! their data in an [`Array`](contiguous::Array).

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;

//! A small crate of hand-written container types: a [`Vector`](collections::contiguous::Vector)
//! with amortized growth and random-access positions, and a separately chained
//! [`HashTable`](collections::hash::HashTable) that rehashes into prime-sized bucket arrays.
//!
//! # Purpose
//! Both containers are written from the ground up as an exercise in how these data structures work
//! underneath: allocation, growth policies, invalidation of positions and collision handling. The
//! only "real" building block is [`Array`](collections::contiguous::Array), a runtime-sized heap
//! buffer which both containers store their data in. Neither container uses [`Vec`] internally.
//!
//! # Error Handling
//! Fallible operations return [`Result`]s with strongly typed errors from the [`error`] module.
//! Each failure condition is a small struct implementing [`Error`](std::error::Error); where an
//! operation can fail in several ways, the conditions are combined into an enum for static
//! dispatch (e.g. [`PositionError`](error::PositionError)).
//!
//! Some failures still panic, where handling them every time would be unreasonable: capacity
//! overflow, allocation failure and the indexing operators, which behave like the standard
//! library's.
//!
//! # Logging
//! Structural events (reallocation of a Vector, rehashing of a HashTable) are reported through the
//! [`log`] facade at `trace` level. Nothing is logged on lookup paths.
//!
//! # Features
//! - `contiguous`: [`Array`](collections::contiguous::Array) and
//!   [`Vector`](collections::contiguous::Vector).
//! - `hash`: [`HashTable`](collections::hash::HashTable), which depends on `contiguous`.
//! - `collections-all` (default): everything.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
pub mod error;

pub(crate) mod util;

#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The Chained Library
//!
//! A pair of containers for in-memory indexes over homogeneous records.
//! -   The `Vector`: a growable sequence, with an explicit additive growth policy.
//! -   The `HashSet`: a separate-chaining hash table, with a fixed number of buckets.
//!
//! The behavior of each container is customized by its hooks: allocation, destruction, and for the `HashSet` hashing
//! and comparison.

pub mod allocator;
pub mod failure;
pub mod hashset;
pub mod vector;

mod seqcore;
mod utils;

use self::utils::root;

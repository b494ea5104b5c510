//! #   The HashSet.
//!
//! The `HashSet` is a set of elements keyed by user-provided hashing and comparison, which never rehashes.
//!
//! ##  Under the covers.
//!
//! Under the covers the `HashSet` is a fixed-size array of buckets, chosen at construction: each bucket is a growable
//! sequence of elements, of initial capacity `BUCKET_ALLOCATION`, growing by as much.
//!
//! The main consequences are:
//!
//! -   The number of buckets is never changed, hence elements never move to another bucket.
//! -   Operations are linear in the length of the bucket of the element, so pick a number of buckets in proportion to
//!     the expected number of elements.
//!
//! When constructing a new `HashSet`, pay attention to the number of buckets!
//!
//! #   Example: basic
//!
//! General usage of `HashSet` involves entering elements, either using `enter`, to enter one element at a time, or
//! `extend`, to enter multiple elements at once.
//!
//! The faillible equivalent exist too: `try_enter` and `try_extend` will return a `Result` indicating whether the
//! operation succeeded, and the cause of its failure if it did not.
//!
//! ```
//! use chained::hashset::HashSet;
//!
//! let mut set: HashSet<_> = HashSet::new(8);
//! set.enter(1);
//! set.enter(2);
//!
//! assert_eq!(2, set.len());
//! assert_eq!(Some(&1), set.lookup(&1));
//!
//! set.extend([2, 3, 4].iter().copied());
//!
//! assert_eq!(4, set.len());
//!
//! for e in &set {
//!     println!("{}", e);
//! }
//! ```
//!
//! #   Example: records
//!
//! Using callbacks, the elements may be records keyed by a subset of their fields. Entering a record whose key is
//! already present replaces the former record, after invoking the destroy hook on it.
//!
//! ```
//! use std::cmp::Ordering;
//!
//! use chained::hashset::HashSet;
//!
//! #[derive(Debug, PartialEq)]
//! struct Entry { key: u32, payload: &'static str }
//!
//! fn hash(e: &Entry, buckets: usize) -> usize { e.key as usize % buckets }
//! fn compare(a: &Entry, b: &Entry) -> Ordering { a.key.cmp(&b.key) }
//! fn destroy(e: &mut Entry) { println!("Evicting {}", e.payload); }
//!
//! let mut set = HashSet::with_callbacks(4, hash, compare, Some(destroy));
//!
//! for (key, payload) in [(1, "one"), (5, "five"), (9, "nine")].iter().copied() {
//!     set.enter(Entry { key, payload });
//! }
//!
//! //  All in bucket 1.
//! assert_eq!(3, set.len());
//! assert_eq!(3, set.bucket(1).len());
//!
//! let probe = |key| Entry { key, payload: "" };
//!
//! assert_eq!(Some("five"), set.lookup(&probe(5)).map(|e| e.payload));
//! assert_eq!(None, set.lookup(&probe(6)));
//!
//! //  Evicting five
//! assert!(!set.enter(Entry { key: 5, payload: "cinq" }));
//!
//! assert_eq!(3, set.len());
//! assert_eq!(Some("cinq"), set.lookup(&probe(5)).map(|e| e.payload));
//! ```

mod hashset;
mod hooks;
mod iterator;

pub use self::hashset::{HashSet, BUCKET_ALLOCATION};
pub use self::hooks::{Callbacks, HashHooks};
pub use self::iterator::Iter;

#[cfg(feature = "with-std")]
pub use self::hooks::DefaultHashHooks;

use super::allocator;
use super::failure;
use super::root;
use super::seqcore;
use super::vector;

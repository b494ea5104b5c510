//! #   The Vector.
//!
//! The `Vector` is a growable sequence of elements, akin to `Vec`, with an explicit growth policy and a destroy hook.
//!
//! ##  Under the covers.
//!
//! Under the covers the `Vector` is a single contiguous array, which grows by a fixed increment: the capacity it was
//! created with.
//!
//! The main consequences are:
//!
//! -   Pushing `N` elements performs `ceil(N / increment) - 1` reallocations, rather than `log2(N)`.
//! -   Inserting or deleting in the middle shifts all later elements.
//!
//! When constructing a new `Vector`, pay attention to the capacity!
//!
//! #   Example: basic
//!
//! General usage of `Vector` involve pushing elements, either using `push`, to
//! push one element at a time, or `extend`, to push multiple elements at once.
//!
//! The faillible equivalent exist too: `try_push` and `try_extend` will return
//! a `Result` indicating whether the operation succeeded, and the cause of its
//! failure if it did not.
//!
//! ```
//! use chained::vector::Vector;
//!
//! let mut vec: Vector<_> = Vector::new();
//! vec.push(1);
//! vec.push(2);
//!
//! assert_eq!(2, vec.len());
//! assert_eq!(1, vec[0]);
//!
//! vec.extend([3, 4, 5].iter().copied());
//!
//! assert_eq!(5, vec.len());
//! assert_eq!(4, vec[3]);
//!
//! for x in &vec {
//!     println!("{}", x);
//! }
//! ```
//!
//! #   Example: positional edition
//!
//! Elements may be inserted, replaced, or deleted at any position; positions are only stable until the next insertion
//! or deletion.
//!
//! ```
//! use chained::vector::Vector;
//!
//! let mut vec: Vector<_> = [1, 2, 3].iter().copied().collect();
//!
//! vec.insert(9, 1);
//! assert_eq!(&[1, 9, 2, 3], vec.as_slice());
//!
//! vec.replace(8, 0);
//! assert_eq!(&[8, 9, 2, 3], vec.as_slice());
//!
//! vec.delete(1);
//! assert_eq!(&[8, 2, 3], vec.as_slice());
//! ```
//!
//! #   Example: searching
//!
//! `search` looks up the position of an element, either by a linear scan, or by a binary search if the elements are
//! sorted.
//!
//! ```
//! use chained::vector::Vector;
//!
//! let mut vec: Vector<_> = [5, 1, 4, 2].iter().copied().collect();
//!
//! assert_eq!(Some(2), vec.search(&4, |e, k| e.cmp(k), 0, false));
//! assert_eq!(None, vec.search(&3, |e, k| e.cmp(k), 0, false));
//!
//! vec.sort();
//! assert_eq!(Some(3), vec.search(&5, |e, k| e.cmp(k), 0, true));
//! ```
//!
//! #   Example: managing capacity
//!
//! The capacity a `Vector` is created with is also its growth increment.
//!
//! ```
//! use chained::vector::Vector;
//!
//! //  A capacity of 0 is normalized to 4.
//! let mut vec: Vector<i32> = Vector::with_capacity(0);
//! assert_eq!(4, vec.capacity());
//!
//! vec.extend(0..5);
//! assert_eq!(8, vec.capacity());
//!
//! vec.extend(5..9);
//! assert_eq!(12, vec.capacity());
//! ```
//!
//! #   Example: destroy hook
//!
//! A destroy hook is invoked on each element leaving the `Vector`, whether overwritten, deleted, or disposed of.
//!
//! ```
//! use chained::vector::Vector;
//!
//! fn shout(name: &mut String) { println!("Farewell, {}!", name); }
//!
//! let mut vec = Vector::with_destructor(2, shout);
//! vec.push("Ada".to_string());
//! vec.push("Grace".to_string());
//!
//! vec.delete(0);      //  Farewell, Ada!
//! drop(vec);          //  Farewell, Grace!
//! ```

mod hooks;
mod vector;

pub use self::hooks::{Destructor, VectorHooks};
pub use self::vector::Vector;

pub use super::seqcore::capacity::DEFAULT_INCREMENT;

#[cfg(feature = "with-std")]
pub use self::hooks::DefaultVectorHooks;

use super::allocator;
use super::failure;
use super::root;
use super::seqcore;

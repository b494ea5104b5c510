//! Hooks of the HashSet.

#[cfg(feature = "with-std")]
use std::collections::hash_map;

use super::allocator;
use super::root::{cmp, fmt};
use super::vector::VectorHooks;

#[cfg(feature = "with-std")]
use super::root::hash::{self, BuildHasher, Hasher};

/// HashHooks
///
/// On top of the hooks of its buckets, there are two important hooks for a HashSet:
/// -   The hashing algorithm, which selects the bucket of an element.
/// -   The comparison algorithm, which decides whether two elements share the same key.
///
/// The two must be consistent: elements comparing `Equal` must be assigned the same bucket.
///
/// Also see DefaultHashHooks for the default, when the `with-std` feature is used, and `Callbacks` for hooks specified
/// as function pointers.
pub trait HashHooks<T>: VectorHooks<T> {
    /// Returns the index of the bucket of `element`, which must be less than `number_buckets`.
    fn bucket_of(&self, element: &T, number_buckets: usize) -> usize;

    /// Compares two elements; `Equal` denotes that both have the same key.
    fn compare(&self, left: &T, right: &T) -> cmp::Ordering;
}

/// DefaultHashHooks
///
/// Default hooks for the HashSet:
/// -   deferring allocation and deallocation to `DefaultAllocator`.
/// -   hashing with `RandomState`, modulo the number of buckets.
/// -   comparing with `Ord`.
/// -   doing nothing on destruction, beyond the `Drop` of the element.
#[cfg(feature = "with-std")]
#[derive(Clone, Debug, Default)]
pub struct DefaultHashHooks(allocator::DefaultAllocator, hash_map::RandomState);

#[cfg(feature = "with-std")]
impl allocator::Allocator for DefaultHashHooks {
    unsafe fn allocate(&self, layout: allocator::Layout) -> *mut u8 {
        //  Safety:
        //  -   Forwarding.
        unsafe { self.0.allocate(layout) }
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: allocator::Layout) {
        //  Safety:
        //  -   Forwarding.
        unsafe { self.0.deallocate(ptr, layout) }
    }

    unsafe fn reallocate(&self, ptr: *mut u8, old: allocator::Layout, new: allocator::Layout) -> *mut u8 {
        //  Safety:
        //  -   Forwarding.
        unsafe { self.0.reallocate(ptr, old, new) }
    }
}

#[cfg(feature = "with-std")]
impl<T> VectorHooks<T> for DefaultHashHooks {}

#[cfg(feature = "with-std")]
impl<T: hash::Hash + Ord> HashHooks<T> for DefaultHashHooks {
    fn bucket_of(&self, element: &T, number_buckets: usize) -> usize {
        let mut hasher = self.1.build_hasher();
        element.hash(&mut hasher);

        (hasher.finish() % number_buckets as u64) as usize
    }

    fn compare(&self, left: &T, right: &T) -> cmp::Ordering { left.cmp(right) }
}

/// Callbacks
///
/// Hooks specified as function pointers, with a user-provided allocator:
/// -   `hash`, mapping an element and the number of buckets to the index of its bucket.
/// -   `compare`, returning `Equal` for elements with the same key.
/// -   `destroy`, optionally, invoked on each element leaving the HashSet.
///
/// #   Example
///
/// ```
/// use std::cmp::Ordering;
///
/// use chained::allocator::DefaultAllocator;
/// use chained::hashset::{Callbacks, HashSet};
///
/// fn hash(e: &(u32, &str), buckets: usize) -> usize { e.0 as usize % buckets }
/// fn compare(a: &(u32, &str), b: &(u32, &str)) -> Ordering { a.0.cmp(&b.0) }
///
/// let hooks = Callbacks::with_allocator(DefaultAllocator, hash, compare, None);
/// let mut set = HashSet::with_hooks(8, hooks);
///
/// set.enter((1, "one"));
/// assert_eq!(Some(&(1, "one")), set.lookup(&(1, "")));
/// ```
pub struct Callbacks<T, A> {
    allocator: A,
    hash: fn(&T, usize) -> usize,
    compare: fn(&T, &T) -> cmp::Ordering,
    destroy: Option<fn(&mut T)>,
}

impl<T, A> Callbacks<T, A> {
    /// Creates an instance, allocating from `allocator`.
    pub fn with_allocator(
        allocator: A,
        hash: fn(&T, usize) -> usize,
        compare: fn(&T, &T) -> cmp::Ordering,
        destroy: Option<fn(&mut T)>,
    )
        -> Self
    {
        Self { allocator, hash, compare, destroy }
    }
}

#[cfg(feature = "with-std")]
impl<T> Callbacks<T, allocator::DefaultAllocator> {
    /// Creates an instance, relying on the global allocator.
    pub fn new(
        hash: fn(&T, usize) -> usize,
        compare: fn(&T, &T) -> cmp::Ordering,
        destroy: Option<fn(&mut T)>,
    )
        -> Self
    {
        Self::with_allocator(allocator::DefaultAllocator, hash, compare, destroy)
    }
}

impl<T, A: allocator::Allocator> allocator::Allocator for Callbacks<T, A> {
    unsafe fn allocate(&self, layout: allocator::Layout) -> *mut u8 {
        //  Safety:
        //  -   Forwarding.
        unsafe { self.allocator.allocate(layout) }
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: allocator::Layout) {
        //  Safety:
        //  -   Forwarding.
        unsafe { self.allocator.deallocate(ptr, layout) }
    }

    unsafe fn reallocate(&self, ptr: *mut u8, old: allocator::Layout, new: allocator::Layout) -> *mut u8 {
        //  Safety:
        //  -   Forwarding.
        unsafe { self.allocator.reallocate(ptr, old, new) }
    }
}

impl<T, A: allocator::Allocator> VectorHooks<T> for Callbacks<T, A> {
    fn destroy(&self, element: &mut T) {
        if let Some(destroy) = self.destroy {
            destroy(element);
        }
    }
}

impl<T, A: allocator::Allocator> HashHooks<T> for Callbacks<T, A> {
    fn bucket_of(&self, element: &T, number_buckets: usize) -> usize {
        (self.hash)(element, number_buckets)
    }

    fn compare(&self, left: &T, right: &T) -> cmp::Ordering { (self.compare)(left, right) }
}

impl<T, A: Clone> Clone for Callbacks<T, A> {
    fn clone(&self) -> Self {
        Self::with_allocator(self.allocator.clone(), self.hash, self.compare, self.destroy)
    }
}

impl<T, A: fmt::Debug> fmt::Debug for Callbacks<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("allocator", &self.allocator)
            .field("destroy", &self.destroy.is_some())
            .finish()
    }
}

#[cfg(all(test, feature = "with-std"))]
mod tests {

use super::*;

#[test]
fn default_bucket_of_in_range() {
    let hooks = DefaultHashHooks::default();

    for number_buckets in 1..20 {
        for element in 0..100 {
            assert!(hooks.bucket_of(&element, number_buckets) < number_buckets);
        }
    }
}

#[test]
fn default_bucket_of_deterministic() {
    let hooks = DefaultHashHooks::default();

    let first = hooks.bucket_of(&"Hello", 13);
    let second = hooks.bucket_of(&"Hello", 13);

    assert_eq!(first, second);
}

#[test]
fn default_compare() {
    let hooks = DefaultHashHooks::default();

    assert_eq!(cmp::Ordering::Less, HashHooks::<i32>::compare(&hooks, &1, &2));
    assert_eq!(cmp::Ordering::Equal, HashHooks::<i32>::compare(&hooks, &2, &2));
}

#[test]
fn callbacks_forward() {
    fn hash(e: &u32, n: usize) -> usize { *e as usize % n }
    fn compare(a: &u32, b: &u32) -> cmp::Ordering { b.cmp(a) }
    fn destroy(e: &mut u32) { *e = 0; }

    let hooks = Callbacks::new(hash, compare, Some(destroy));

    assert_eq!(3, hooks.bucket_of(&7, 4));
    assert_eq!(cmp::Ordering::Greater, hooks.compare(&1, &2));

    let mut element = 5;
    hooks.destroy(&mut element);
    assert_eq!(0, element);
}

}

//! The HashSet

use super::root::fmt;

use super::failure::{panic_from_failure, Result};
use super::hooks::HashHooks;
use super::iterator::Iter;
use super::seqcore::capacity::Capacity;
use super::seqcore::sequence::Sequence;

#[cfg(feature = "with-std")]
use super::root::cmp;

#[cfg(feature = "with-std")]
use super::allocator::DefaultAllocator;

#[cfg(feature = "with-std")]
use super::hooks::{Callbacks, DefaultHashHooks};

/// The initial capacity, and growth increment, of each bucket.
pub const BUCKET_ALLOCATION: usize = 10;

//
//  Public Interface
//

/// `HashSet`
#[cfg(not(feature = "with-std"))]
pub struct HashSet<T, H: HashHooks<T>> {
    hooks: H,
    size: usize,
    buckets: Sequence<Sequence<T>>,
}

/// `HashSet`
#[cfg(feature = "with-std")]
pub struct HashSet<T, H: HashHooks<T> = DefaultHashHooks> {
    //  Hooks of the HashSet.
    hooks: H,
    //  Total number of elements, across all buckets.
    size: usize,
    //  The buckets, all allocated by `hooks`, as is the array itself.
    buckets: Sequence<Sequence<T>>,
}

impl<T, H: HashHooks<T> + Default> HashSet<T, H> {
    /// Creates a new instance of the `HashSet`, with `number_buckets` buckets.
    ///
    /// The number of buckets is fixed for the lifetime of the instance.
    ///
    /// #   Panics
    ///
    /// Panics if `number_buckets` is 0, if T is zero-sized, or if the storage cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let set: HashSet<i32> = HashSet::new(16);
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(16, set.number_buckets());
    /// ```
    pub fn new(number_buckets: usize) -> Self {
        Self::with_hooks(number_buckets, H::default())
    }
}

#[cfg(feature = "with-std")]
impl<T> HashSet<T, Callbacks<T, DefaultAllocator>> {
    /// Creates a new instance of the `HashSet`, with `number_buckets` buckets, hashing with `hash`, comparing with
    /// `compare`, and invoking `destroy`, if any, on each element leaving it.
    ///
    /// `hash` receives an element and the number of buckets, and must return a bucket index less than the latter.
    ///
    /// #   Panics
    ///
    /// Panics if `number_buckets` is 0, if T is zero-sized, or if the storage cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// fn hash(x: &u32, buckets: usize) -> usize { *x as usize % buckets }
    ///
    /// let mut set = HashSet::with_callbacks(4, hash, u32::cmp, None);
    /// set.enter(5);
    ///
    /// assert_eq!(&[5], set.bucket(1));
    /// ```
    pub fn with_callbacks(
        number_buckets: usize,
        hash: fn(&T, usize) -> usize,
        compare: fn(&T, &T) -> cmp::Ordering,
        destroy: Option<fn(&mut T)>,
    )
        -> Self
    {
        Self::with_hooks(number_buckets, Callbacks::new(hash, compare, destroy))
    }
}

impl<T, H: HashHooks<T>> HashSet<T, H> {
    /// Creates a new instance of the `HashSet`, with `number_buckets` buckets.
    ///
    /// #   Panics
    ///
    /// Panics if `number_buckets` is 0, if T is zero-sized, or if the storage cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::{HashSet, DefaultHashHooks};
    /// let set: HashSet<i32> = HashSet::with_hooks(3, DefaultHashHooks::default());
    ///
    /// assert_eq!(3, set.number_buckets());
    /// ```
    pub fn with_hooks(number_buckets: usize, hooks: H) -> Self {
        Self::try_with_hooks(number_buckets, hooks).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Creates a new instance of the `HashSet`, with `number_buckets` buckets.
    ///
    /// Each bucket is allocated upfront, with room for `BUCKET_ALLOCATION` elements.
    ///
    /// #   Panics
    ///
    /// Panics if `number_buckets` is 0, or if T is zero-sized.
    ///
    /// #   Errors
    ///
    /// Returns an error if the storage cannot be allocated; any partial allocation is released.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::{HashSet, DefaultHashHooks};
    /// let set: HashSet<i32> = HashSet::try_with_hooks(3, DefaultHashHooks::default()).unwrap();
    ///
    /// assert_eq!(3, set.number_buckets());
    /// ```
    pub fn try_with_hooks(number_buckets: usize, hooks: H) -> Result<Self> {
        if number_buckets == 0 {
            panic_no_bucket();
        }

        let buckets = Sequence::try_new(Capacity::new(number_buckets), &hooks)?;

        //  Built first, so that Drop releases the buckets allocated so far on failure.
        let mut result = Self { hooks, size: 0, buckets };

        for _ in 0..number_buckets {
            let bucket = Sequence::try_new(Capacity::new(BUCKET_ALLOCATION), &result.hooks)?;

            debug_assert!(result.buckets.len() < result.buckets.capacity().get());

            //  Safety:
            //  -   `result.hooks` allocated the array of buckets.
            //  -   The array has room for `number_buckets` buckets, hence never grows.
            unsafe { result.buckets.try_push(bucket, &result.hooks)? };
        }

        log::debug!("HashSet created with {} buckets of {} elements", number_buckets, BUCKET_ALLOCATION);

        Ok(result)
    }
}

impl<T, H: HashHooks<T>> HashSet<T, H> {
    /// Returns whether the `HashSet` is empty.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<i32> = HashSet::new(4);
    /// assert!(set.is_empty());
    ///
    /// set.enter(1);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.size == 0 }

    /// Returns the number of elements, across all buckets.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<i32> = HashSet::new(4);
    /// set.enter(1);
    /// set.enter(1);
    /// set.enter(2);
    ///
    /// assert_eq!(2, set.len());
    /// ```
    pub fn len(&self) -> usize { self.size }

    /// Returns the number of buckets.
    pub fn number_buckets(&self) -> usize { self.buckets.len() }

    /// Returns the hooks.
    pub fn hooks(&self) -> &H { &self.hooks }

    /// Returns the elements of the bucket at index `i`, in insertion order.
    ///
    /// #   Panics
    ///
    /// Panics if `i` is greater than or equal to `number_buckets()`.
    pub fn bucket(&self, i: usize) -> &[T] { self.buckets.element_at(i).as_slice() }

    /// Returns an iterator over the elements, bucket after bucket.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<i32> = HashSet::new(4);
    /// set.extend([1, 2, 3].iter().copied());
    ///
    /// assert_eq!(6, set.iter().sum::<i32>());
    /// ```
    pub fn iter(&self) -> Iter<'_, T> { Iter::new(self.buckets.as_slice(), self.size) }

    /// Enters `value` in the `HashSet`.
    ///
    /// If an element with the same key, as per the hooks, is already present in the bucket of `value`, it is destroyed
    /// and replaced in place by `value`; the number of elements is unchanged. Otherwise `value` is appended to its
    /// bucket.
    ///
    /// Returns whether `value` was newly inserted.
    ///
    /// #   Panics
    ///
    /// Panics if the hooks assign `value` to a bucket index out of bounds.
    ///
    /// #   Errors
    ///
    /// Returns an error, leaving the instance untouched, if the bucket is full and cannot grow.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<i32> = HashSet::new(4);
    ///
    /// assert_eq!(Ok(true), set.try_enter(1));
    /// assert_eq!(Ok(false), set.try_enter(1));
    /// ```
    pub fn try_enter(&mut self, value: T) -> Result<bool> {
        let index = self.bucket_index(&value);

        let hooks = &self.hooks;
        let bucket = self.buckets.element_at_mut(index);

        if let Some(position) = bucket.search(&value, |e, v| hooks.compare(e, v), 0, false) {
            bucket.replace(value, position, |e| hooks.destroy(e));
            return Ok(false);
        }

        //  Safety:
        //  -   `self.hooks` allocated every bucket.
        //  -   The buckets are only released on drop.
        unsafe { bucket.try_push(value, hooks)? };

        self.size += 1;

        Ok(true)
    }

    /// Enters `value` in the `HashSet`, replacing any element with the same key.
    ///
    /// Calling this method is equivalent to calling `try_enter` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the hooks assign `value` to a bucket index out of bounds, or if the bucket is full and cannot grow.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<i32> = HashSet::new(4);
    ///
    /// assert!(set.enter(1));
    /// assert!(!set.enter(1));
    /// assert_eq!(1, set.len());
    /// ```
    pub fn enter(&mut self, value: T) -> bool {
        self.try_enter(value).unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Enters multiple values, in order.
    ///
    /// #   Errors
    ///
    /// Returns an error if any of the values cannot be entered; the values entered until then remain.
    pub fn try_extend<C>(&mut self, collection: C) -> Result<()>
    where
        C: IntoIterator<Item = T>,
    {
        collection.into_iter().try_for_each(|value| self.try_enter(value).map(|_| ()))
    }

    /// Enters multiple values, in order.
    ///
    /// Calling this method is equivalent to calling `try_extend` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if any of the values cannot be entered.
    pub fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        self.try_extend(collection).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Returns the element with the same key as `key`, if any.
    ///
    /// #   Panics
    ///
    /// Panics if the hooks assign `key` to a bucket index out of bounds.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// fn hash(e: &(u32, char), buckets: usize) -> usize { e.0 as usize % buckets }
    /// fn compare(a: &(u32, char), b: &(u32, char)) -> std::cmp::Ordering { a.0.cmp(&b.0) }
    ///
    /// let mut set = HashSet::with_callbacks(4, hash, compare, None);
    /// set.enter((5, 'a'));
    ///
    /// assert_eq!(Some(&(5, 'a')), set.lookup(&(5, '?')));
    /// assert_eq!(None, set.lookup(&(6, '?')));
    /// ```
    pub fn lookup(&self, key: &T) -> Option<&T> {
        let bucket = self.buckets.element_at(self.bucket_index(key));

        bucket
            .search(key, |e, k| self.hooks.compare(e, k), 0, false)
            .map(|position| bucket.element_at(position))
    }

    /// Returns whether an element with the same key as `key` is present.
    ///
    /// #   Panics
    ///
    /// Panics if the hooks assign `key` to a bucket index out of bounds.
    pub fn contains(&self, key: &T) -> bool { self.lookup(key).is_some() }

    /// Invokes `visitor` on each element, bucket after bucket, each bucket in insertion order.
    ///
    /// The visitor may modify the elements in place, as long as their key is unchanged, and capture any auxiliary
    /// data it needs.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::hashset::HashSet;
    /// let mut set: HashSet<i32> = HashSet::new(4);
    /// set.extend([1, 2, 3].iter().copied());
    ///
    /// let mut visited = 0;
    /// set.traverse(|_| visited += 1);
    ///
    /// assert_eq!(3, visited);
    /// ```
    pub fn traverse<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut T),
    {
        for bucket in self.buckets.as_mut_slice() {
            bucket.traverse(&mut visitor);
        }
    }

    /// Destroys, then drops, all elements, retaining the buckets and their storage.
    pub fn clear(&mut self) {
        //  Forget the elements first, in case `destroy` or a Drop panics; each bucket does the same.
        self.size = 0;

        let hooks = &self.hooks;

        for bucket in self.buckets.as_mut_slice() {
            bucket.clear(|e| hooks.destroy(e));
        }
    }
}

impl<T, H: HashHooks<T>> Drop for HashSet<T, H> {
    fn drop(&mut self) {
        let hooks = &self.hooks;

        for bucket in self.buckets.as_mut_slice() {
            //  Safety:
            //  -   `self.hooks` allocated every bucket.
            unsafe { bucket.dispose(hooks, |e| hooks.destroy(e)) };
        }

        //  Safety:
        //  -   `self.hooks` allocated the array of buckets.
        //  -   Each bucket was disposed of above, and has nothing left to release.
        unsafe { self.buckets.dispose(hooks, |_| ()) };
    }
}

impl<T: fmt::Debug, H: HashHooks<T>> fmt::Debug for HashSet<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("size", &self.size)
            .field("buckets", &self.buckets)
            .finish()
    }
}

impl<'a, T, H: HashHooks<T>> IntoIterator for &'a HashSet<T, H> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

//
//  Implementation
//

impl<T, H: HashHooks<T>> HashSet<T, H> {
    //  Returns the index of the bucket of `element`.
    //
    //  #   Panics
    //
    //  Panics if the hooks return an index out of bounds.
    fn bucket_index(&self, element: &T) -> usize {
        let number_buckets = self.buckets.len();
        let index = self.hooks.bucket_of(element, number_buckets);

        if index >= number_buckets {
            panic_bucket_out_of_bounds(index, number_buckets);
        }

        index
    }
}

#[cold]
#[inline(never)]
fn panic_no_bucket() -> ! {
    panic!("A HashSet requires at least 1 bucket");
}

#[cold]
#[inline(never)]
fn panic_bucket_out_of_bounds(index: usize, number_buckets: usize) -> ! {
    panic!("Bucket {} is out of bounds [0, {})", index, number_buckets);
}

#[cfg(test)]
mod tests {

    use std::cmp::Ordering;

    use super::*;

    use crate::failure::Failure;
    use crate::utils::tester::*;

    type TestSet<'a, T> = HashSet<T, Callbacks<T, &'a TestAllocator>>;

    fn test_set<'a, T>(
        number_buckets: usize,
        hash: fn(&T, usize) -> usize,
        compare: fn(&T, &T) -> Ordering,
        destroy: Option<fn(&mut T)>,
        allocator: &'a TestAllocator,
    )
        -> TestSet<'a, T>
    {
        HashSet::with_hooks(number_buckets, Callbacks::with_allocator(allocator, hash, compare, destroy))
    }

    fn modulo(x: &u32, number_buckets: usize) -> usize { *x as usize % number_buckets }

    fn tracked_set<'a, 'b>(
        number_buckets: usize,
        allocator: &'a TestAllocator,
    )
        -> TestSet<'a, Tracked<'b>>
    {
        test_set(number_buckets, Tracked::hash, Tracked::compare, Some(Tracked::destroy), allocator)
    }

    #[test]
    fn trait_debug() {
        let mut set = HashSet::with_callbacks(3, modulo, u32::cmp, None);
        set.extend([1, 4, 2].iter().copied());

        assert_eq!("HashSet { size: 3, buckets: [[], [1, 4], [2]] }", format!("{:?}", set));
    }

    #[test]
    #[should_panic(expected = "A HashSet requires at least 1 bucket")]
    fn new_no_bucket() {
        let _: HashSet<u32> = HashSet::new(0);
    }

    #[test]
    #[should_panic(expected = "Zero-sized elements are not supported")]
    fn new_zero_sized() {
        let _: HashSet<()> = HashSet::new(4);
    }

    #[test]
    fn new_allocations() {
        let allocator = TestAllocator::unlimited();

        {
            let set = test_set(4, modulo, u32::cmp, None, &allocator);

            assert_eq!(4, set.number_buckets());
            assert!(set.is_empty());

            //  The array of buckets, then each bucket.
            assert_eq!(5, allocator.performed.get());
            assert_eq!(vec![4 * std::mem::size_of::<Sequence<u32>>(), 40, 40, 40, 40], allocator.allocation_sizes());
        }

        assert!(allocator.allocations().is_empty());
    }

    #[test]
    fn new_out_of_memory() {
        let allocator = TestAllocator::with_allowed(3);

        let result = HashSet::try_with_hooks(4, Callbacks::with_allocator(&allocator, modulo, u32::cmp, None));

        assert_eq!(Some(Failure::OutOfMemory), result.err());
        assert!(allocator.allocations().is_empty());
    }

    #[test]
    fn enter_then_lookup() {
        let allocator = TestAllocator::unlimited();
        let destroyed = SpyCount::zero();

        {
            let mut set = tracked_set(4, &allocator);

            assert!(set.enter(Tracked::new(1, 10, &destroyed)));
            assert!(set.enter(Tracked::new(5, 50, &destroyed)));
            assert!(set.enter(Tracked::new(9, 90, &destroyed)));

            assert_eq!(3, set.len());
            assert_eq!(3, set.bucket(1).len());

            let found = set.lookup(&Tracked::new(5, 0, &destroyed));
            assert_eq!(Some(50), found.map(|t| t.payload));

            assert!(set.lookup(&Tracked::new(6, 0, &destroyed)).is_none());
            assert!(!set.contains(&Tracked::new(2, 0, &destroyed)));

            assert!(!set.enter(Tracked::new(5, 55, &destroyed)));

            assert_eq!(3, set.len());
            assert_eq!(1, destroyed.get());

            let found = set.lookup(&Tracked::new(5, 0, &destroyed));
            assert_eq!(Some(55), found.map(|t| t.payload));

            //  Replaced in place.
            let keys: Vec<_> = set.bucket(1).iter().map(|t| (t.key, t.payload)).collect();
            assert_eq!(vec![(1, 10), (5, 55), (9, 90)], keys);
        }

        assert_eq!(4, destroyed.get());
        assert!(allocator.allocations().is_empty());
    }

    #[test]
    fn enter_isolates_buckets() {
        let mut set = HashSet::with_callbacks(4, modulo, u32::cmp, None);

        set.extend(0..23);

        for i in 0..4 {
            assert!(set.bucket(i).iter().all(|x| *x as usize % 4 == i));
        }

        let total: usize = (0..4).map(|i| set.bucket(i).len()).sum();

        assert_eq!(23, set.len());
        assert_eq!(total, set.len());
    }

    #[test]
    fn enter_grows_bucket() {
        let allocator = TestAllocator::unlimited();

        {
            let mut set = test_set(1, modulo, u32::cmp, None, &allocator);

            set.extend(0..25);

            assert_eq!(25, set.len());
            assert_eq!((0..25).collect::<Vec<_>>(), set.bucket(0));

            //  The array of buckets, and the single bucket, of capacity 30.
            assert_eq!(vec![std::mem::size_of::<Sequence<u32>>(), 30 * 4], allocator.allocation_sizes());
        }

        assert!(allocator.allocations().is_empty());
    }

    #[test]
    fn enter_out_of_memory() {
        let allocator = TestAllocator::with_allowed(2);
        let mut set = test_set(1, modulo, u32::cmp, None, &allocator);

        set.extend(0..10);

        assert_eq!(Err(Failure::OutOfMemory), set.try_enter(10));

        //  Replacing does not allocate.
        assert_eq!(Ok(false), set.try_enter(3));

        assert_eq!(10, set.len());
    }

    #[test]
    #[should_panic(expected = "Bucket 4 is out of bounds [0, 4)")]
    fn enter_bucket_out_of_bounds() {
        let mut set = HashSet::with_callbacks(4, |_, n| n, u32::cmp, None);

        set.enter(1);
    }

    #[test]
    #[should_panic(expected = "Bucket 7 is out of bounds [0, 4)")]
    fn lookup_bucket_out_of_bounds() {
        let set = HashSet::with_callbacks(4, |_, _| 7, u32::cmp, None);

        set.lookup(&1);
    }

    #[test]
    fn default_hooks_lookup() {
        let mut set: HashSet<String> = HashSet::new(7);

        for word in "the quick brown fox jumps over the lazy dog".split(' ') {
            set.enter(word.to_string());
        }

        assert_eq!(8, set.len());
        assert!(set.contains(&"fox".to_string()));
        assert!(!set.contains(&"cat".to_string()));
        assert_eq!(set.len(), set.iter().count());
    }

    #[test]
    fn iter_bucket_order() {
        let mut set = HashSet::with_callbacks(3, modulo, u32::cmp, None);
        set.extend([5, 3, 1, 2, 4, 0].iter().copied());

        let elements: Vec<_> = set.iter().copied().collect();

        assert_eq!(vec![3, 0, 1, 4, 5, 2], elements);
        assert_eq!(6, set.iter().len());
    }

    #[test]
    fn traverse_with_aux_data() {
        fn hash(e: &(u32, u32), n: usize) -> usize { e.0 as usize % n }
        fn compare(a: &(u32, u32), b: &(u32, u32)) -> Ordering { a.0.cmp(&b.0) }

        let mut set = HashSet::with_callbacks(3, hash, compare, None);
        set.extend((0..6).map(|key| (key, 0)));

        let mut visited = Vec::new();
        set.traverse(|e| {
            visited.push(e.0);
            e.1 = e.0 * 10;
        });

        assert_eq!(vec![0, 3, 1, 4, 2, 5], visited);
        assert_eq!(6, set.len());
        assert_eq!(Some(&(4, 40)), set.lookup(&(4, 0)));
        assert_eq!(Some(&(5, 50)), set.lookup(&(5, 0)));
    }

    #[test]
    fn clear_destroys_all() {
        let allocator = TestAllocator::unlimited();
        let destroyed = SpyCount::zero();

        let mut set = tracked_set(3, &allocator);
        set.extend((0..8).map(|key| Tracked::new(key, 0, &destroyed)));

        set.clear();

        assert!(set.is_empty());
        assert_eq!(8, destroyed.get());
        assert_eq!(4, allocator.allocations().len());

        set.enter(Tracked::new(1, 0, &destroyed));
        assert_eq!(1, set.len());
    }

    #[test]
    fn drop_destroys_all() {
        let allocator = TestAllocator::unlimited();
        let destroyed = SpyCount::zero();
        let alive = SpyCount::zero();

        {
            let mut set = tracked_set(4, &allocator);
            set.extend((0..13).map(|key| Tracked::new(key, 0, &destroyed)));

            let mut spies = test_set::<SpyElement<'_>>(2, |_, _| 1, |_, _| Ordering::Less, None, &allocator);
            spies.extend((0..3).map(|_| SpyElement::new(&alive)));

            assert_eq!(3, alive.get());
            assert_eq!(0, destroyed.get());
        }

        assert_eq!(13, destroyed.get());
        assert_eq!(0, alive.get());
        assert!(allocator.allocations().is_empty());
    }

    #[test]
    fn panic_drop() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        fn hash(e: &PanickyDrop<u32>, n: usize) -> usize { e.0 as usize % n }
        fn compare(a: &PanickyDrop<u32>, b: &PanickyDrop<u32>) -> Ordering { a.0.cmp(&b.0) }

        let mut set = HashSet::with_callbacks(2, hash, compare, None);
        set.enter(PanickyDrop::new(0));
        set.enter(PanickyDrop::panicky(1));
        set.enter(PanickyDrop::new(3));

        let panicked = catch_unwind(AssertUnwindSafe(|| {
            set.clear();
        }));
        assert!(panicked.is_err());

        let total: usize = (0..2).map(|i| set.bucket(i).len()).sum();

        assert_eq!(0, set.len());
        assert_eq!(total, set.len());
        assert_eq!(0, set.iter().len());
        assert_eq!(0, set.iter().count());
    }

    #[test]
    fn trait_send_sync() {
        fn ensure_send<T: Send>(_: &T) {}
        fn ensure_sync<T: Sync>(_: &T) {}

        let set: HashSet<String> = HashSet::new(2);

        ensure_send(&set);
        ensure_sync(&set);
    }

}

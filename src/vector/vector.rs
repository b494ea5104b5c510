//! The Vector

use super::root::{cmp, fmt, iter, ops, slice};

use super::failure::{panic_from_failure, Result};
use super::hooks::{Destructor, VectorHooks};
use super::seqcore::capacity::Capacity;
use super::seqcore::sequence::Sequence;

#[cfg(feature = "with-std")]
use super::allocator::DefaultAllocator;

#[cfg(feature = "with-std")]
use super::hooks::DefaultVectorHooks;

//
//  Public Interface
//

/// `Vector`
#[cfg(not(feature = "with-std"))]
pub struct Vector<T, H: VectorHooks<T>> {
    hooks: H,
    sequence: Sequence<T>,
}

/// `Vector`
#[cfg(feature = "with-std")]
pub struct Vector<T, H: VectorHooks<T> = DefaultVectorHooks> {
    //  Hooks of the Vector.
    hooks: H,
    //  The elements, allocated by `hooks`.
    sequence: Sequence<T>,
}

impl<T, H: VectorHooks<T> + Default> Vector<T, H> {
    /// Creates a new instance of the `Vector` with a capacity, and increment, of 4.
    ///
    /// #   Panics
    ///
    /// Panics if T is zero-sized, or if the storage cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let vec: Vector<i32> = Vector::new();
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(4, vec.capacity());
    /// assert_eq!(4, vec.increment());
    /// ```
    pub fn new() -> Self {
        Self::with_hooks(H::default())
    }

    /// Creates a new instance of the `Vector` with a capacity, and increment, of `capacity`.
    ///
    /// A `capacity` of 0 is normalized to 4.
    ///
    /// #   Panics
    ///
    /// Panics if T is zero-sized, or if the storage cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let vec: Vector<i32> = Vector::with_capacity(10);
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(10, vec.capacity());
    /// assert_eq!(10, vec.increment());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hooks(capacity, H::default())
    }
}

#[cfg(feature = "with-std")]
impl<T> Vector<T, Destructor<T, DefaultAllocator>> {
    /// Creates a new instance of the `Vector` with a capacity, and increment, of `capacity`, invoking `destroy` on
    /// each element leaving it.
    ///
    /// A `capacity` of 0 is normalized to 4.
    ///
    /// #   Panics
    ///
    /// Panics if T is zero-sized, or if the storage cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// fn destroy(x: &mut i32) { println!("Destroying {}", x); }
    ///
    /// let mut vec = Vector::with_destructor(0, destroy);
    /// vec.push(1);
    ///
    /// assert_eq!(4, vec.capacity());
    /// ```
    pub fn with_destructor(capacity: usize, destroy: fn(&mut T)) -> Self {
        Self::with_capacity_and_hooks(capacity, Destructor::new(Some(destroy)))
    }
}

impl<T, H: VectorHooks<T>> Vector<T, H> {
    /// Creates a new instance of the `Vector` with a capacity, and increment, of 4.
    ///
    /// #   Panics
    ///
    /// Panics if T is zero-sized, or if the storage cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::{Vector, DefaultVectorHooks};
    /// let vec: Vector<i32> = Vector::with_hooks(DefaultVectorHooks::default());
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(4, vec.capacity());
    /// ```
    pub fn with_hooks(hooks: H) -> Self {
        Self::with_capacity_and_hooks(0, hooks)
    }

    /// Creates a new instance of the `Vector` with a capacity, and increment, of `capacity`.
    ///
    /// A `capacity` of 0 is normalized to 4.
    ///
    /// #   Panics
    ///
    /// Panics if T is zero-sized, or if the storage cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::{Vector, DefaultVectorHooks};
    /// let hooks = DefaultVectorHooks::default();
    /// let vec: Vector<i32> = Vector::with_capacity_and_hooks(2, hooks);
    ///
    /// assert_eq!(0, vec.len());
    /// assert_eq!(2, vec.capacity());
    /// ```
    pub fn with_capacity_and_hooks(capacity: usize, hooks: H) -> Self {
        Self::try_with_capacity_and_hooks(capacity, hooks)
            .unwrap_or_else(|failure| panic_from_failure(failure))
    }

    /// Creates a new instance of the `Vector` with a capacity, and increment, of `capacity`.
    ///
    /// A `capacity` of 0 is normalized to 4.
    ///
    /// #   Panics
    ///
    /// Panics if T is zero-sized.
    ///
    /// #   Errors
    ///
    /// Returns an error if the storage cannot be allocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::failure::Failure;
    /// #   use chained::vector::{Vector, DefaultVectorHooks};
    /// let hooks = DefaultVectorHooks::default();
    /// let vec = Vector::<i32>::try_with_capacity_and_hooks(usize::MAX / 2, hooks);
    ///
    /// assert_eq!(Some(Failure::BytesOverflow), vec.err());
    /// ```
    pub fn try_with_capacity_and_hooks(capacity: usize, hooks: H) -> Result<Self> {
        let sequence = Sequence::try_new(Capacity::new(capacity), &hooks)?;

        Ok(Self { hooks, sequence })
    }
}

impl<T, H: VectorHooks<T>> Vector<T, H> {
    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<_> = Vector::new();
    /// assert!(vec.is_empty());
    ///
    /// vec.push(1);
    /// assert!(!vec.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.sequence.is_empty() }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<_> = Vector::new();
    /// assert_eq!(0, vec.len());
    ///
    /// vec.push(1);
    /// assert_eq!(1, vec.len());
    /// ```
    pub fn len(&self) -> usize { self.sequence.len() }

    /// Returns the current capacity of the instance.
    ///
    /// The capacity only ever increases, by `increment` at a time.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<_> = Vector::with_capacity(2);
    /// assert_eq!(2, vec.capacity());
    ///
    /// vec.extend([1, 2, 3, 4, 5].iter().copied());
    /// assert_eq!(6, vec.capacity());
    /// ```
    pub fn capacity(&self) -> usize { self.sequence.capacity().get() }

    /// Returns the growth increment of the instance, that is its initial capacity.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let vec: Vector<i32> = Vector::with_capacity(3);
    /// assert_eq!(3, vec.increment());
    /// ```
    pub fn increment(&self) -> usize { self.sequence.capacity().increment() }

    /// Returns a reference to the hooks.
    pub fn hooks(&self) -> &H { &self.hooks }

    /// Returns a reference to the ith element, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.push(1);
    ///
    /// assert_eq!(Some(1), vec.get(0).copied());
    /// assert_eq!(None, vec.get(1));
    /// ```
    pub fn get(&self, i: usize) -> Option<&T> { self.as_slice().get(i) }

    /// Returns a mutable reference to the ith element, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.push(1);
    ///
    /// if let Some(e) = vec.get_mut(0) {
    ///     *e = 3;
    /// }
    /// assert_eq!(3, vec[0]);
    /// ```
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> { self.as_mut_slice().get_mut(i) }

    /// Returns the elements, as a slice.
    pub fn as_slice(&self) -> &[T] { self.sequence.as_slice() }

    /// Returns the elements, as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] { self.sequence.as_mut_slice() }

    /// Returns an iterator over the elements, in order.
    pub fn iter(&self) -> slice::Iter<'_, T> { self.as_slice().iter() }

    /// Returns an iterator over the elements, in order, allowing modification.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> { self.as_mut_slice().iter_mut() }

    /// Replaces the ith element by `value`.
    ///
    /// The destroy hook is invoked on the former element, which is then dropped.
    ///
    /// #   Panics
    ///
    /// Panics if `i` is out of bounds.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2, 3].iter().copied().collect();
    ///
    /// vec.replace(7, 2);
    /// assert_eq!(&[1, 2, 7], vec.as_slice());
    /// ```
    pub fn replace(&mut self, value: T, i: usize) {
        let hooks = &self.hooks;
        self.sequence.replace(value, i, |e| hooks.destroy(e));
    }

    /// Deletes the ith element, shifting all later elements.
    ///
    /// The destroy hook is invoked on the element, which is then dropped.
    ///
    /// #   Panics
    ///
    /// Panics if `i` is out of bounds.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2, 3].iter().copied().collect();
    ///
    /// vec.delete(0);
    /// assert_eq!(&[2, 3], vec.as_slice());
    /// ```
    pub fn delete(&mut self, i: usize) {
        let hooks = &self.hooks;
        self.sequence.delete(i, |e| hooks.destroy(e));
    }

    /// Clears the instance.
    ///
    /// The destroy hook is invoked on each element, in order, which is then dropped. The instance is then empty,
    /// although it retains previously allocated memory.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.extend([1, 2, 3, 4, 5].iter().copied());
    ///
    /// vec.clear();
    /// assert_eq!(0, vec.len());
    /// assert_eq!(8, vec.capacity());
    /// ```
    pub fn clear(&mut self) {
        let hooks = &self.hooks;
        self.sequence.clear(|e| hooks.destroy(e));
    }

    /// Grows the capacity by one increment.
    ///
    /// This happens automatically when pushing into, or inserting into, a full instance.
    ///
    /// #   Errors
    ///
    /// Returns an error, leaving the instance untouched, if the storage cannot be reallocated.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::with_capacity(3);
    ///
    /// assert_eq!(Ok(()), vec.try_grow());
    /// assert_eq!(6, vec.capacity());
    /// ```
    pub fn try_grow(&mut self) -> Result<()> {
        //  Safety:
        //  -   `self.hooks` allocated the storage.
        //  -   The storage is only released on drop.
        unsafe { self.sequence.try_grow(&self.hooks) }
    }

    /// Grows the capacity by one increment.
    ///
    /// Calling this method is equivalent to calling `try_grow` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the storage cannot be reallocated.
    pub fn grow(&mut self) {
        self.try_grow().unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Inserts an element at position `i`, shifting all later elements.
    ///
    /// Inserting at position `len()` is equivalent to pushing.
    ///
    /// #   Panics
    ///
    /// Panics if `i` is strictly greater than `len()`.
    ///
    /// #   Errors
    ///
    /// Returns an error, leaving the instance untouched, if the instance is full and cannot grow.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<_> = [1, 3].iter().copied().collect();
    ///
    /// assert_eq!(Ok(()), vec.try_insert(2, 1));
    /// assert_eq!(&[1, 2, 3], vec.as_slice());
    /// ```
    pub fn try_insert(&mut self, value: T, i: usize) -> Result<()> {
        //  Safety:
        //  -   `self.hooks` allocated the storage.
        //  -   The storage is only released on drop.
        unsafe { self.sequence.try_insert(value, i, &self.hooks) }
    }

    /// Inserts an element at position `i`, shifting all later elements.
    ///
    /// Calling this method is equivalent to calling `try_insert` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `i` is strictly greater than `len()`, or if the instance is full and cannot grow.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<_> = [1, 3].iter().copied().collect();
    ///
    /// vec.insert(4, 2);
    /// assert_eq!(&[1, 3, 4], vec.as_slice());
    /// ```
    pub fn insert(&mut self, value: T, i: usize) {
        self.try_insert(value, i).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Appends an element to the back.
    ///
    /// #   Errors
    ///
    /// Returns an error if the instance is full and cannot grow.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// assert_eq!(Ok(()), vec.try_push(3));
    /// assert_eq!(3, vec[0]);
    /// ```
    pub fn try_push(&mut self, value: T) -> Result<()> {
        //  Safety:
        //  -   `self.hooks` allocated the storage.
        //  -   The storage is only released on drop.
        unsafe { self.sequence.try_push(value, &self.hooks) }
    }

    /// Appends an element to the back.
    ///
    /// Calling this method is equivalent to calling `try_push` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the instance is full and cannot grow.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.push(3);
    /// assert_eq!(3, vec[0]);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Appends multiple elements to the back.
    ///
    /// #   Errors
    ///
    /// Returns an error if any of the values cannot be pushed; the values pushed until then remain.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// assert_eq!(Ok(()), vec.try_extend([1, 2, 3].iter().copied()));
    /// assert_eq!(3, vec.len());
    /// ```
    pub fn try_extend<C>(&mut self, collection: C) -> Result<()>
    where
        C: IntoIterator<Item = T>,
    {
        collection.into_iter().try_for_each(|value| self.try_push(value))
    }

    /// Appends multiple elements to the back.
    ///
    /// Calling this method is equivalent to calling `try_extend` and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if any of the values cannot be pushed.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<i32> = Vector::new();
    /// vec.extend([1, 2, 3].iter().copied());
    /// assert_eq!(3, vec.len());
    /// ```
    pub fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        self.try_extend(collection).unwrap_or_else(|failure| panic_from_failure(failure));
    }

    /// Sorts the elements as per `compare`.
    ///
    /// The sort is not stable: elements comparing equal may be reordered.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<_> = [3, 1, 2].iter().copied().collect();
    ///
    /// vec.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(&[3, 2, 1], vec.as_slice());
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> cmp::Ordering,
    {
        self.sequence.sort_by(compare);
    }

    /// Sorts the elements in ascending order.
    ///
    /// The sort is not stable: elements comparing equal may be reordered.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Invokes `visitor` on each element, in order.
    ///
    /// The visitor may modify the elements in place, and capture any auxiliary data it needs.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let mut vec: Vector<_> = [1, 2, 3].iter().copied().collect();
    ///
    /// let mut sum = 0;
    /// vec.traverse(|e| { *e *= 2; sum += *e; });
    ///
    /// assert_eq!(12, sum);
    /// assert_eq!(&[2, 4, 6], vec.as_slice());
    /// ```
    pub fn traverse<F>(&mut self, visitor: F)
    where
        F: FnMut(&mut T),
    {
        self.sequence.traverse(visitor);
    }

    /// Returns the position of the first element, at or after `start`, for which `compare(element, key)` returns
    /// `Equal`, if any.
    ///
    /// If `sorted` is true, a binary search is performed, which assumes that the elements in `[start, len())` are
    /// sorted as per `compare`; if multiple elements match, any of them may be returned. Otherwise, a linear scan is
    /// performed.
    ///
    /// #   Panics
    ///
    /// Panics if `start` is strictly greater than `len()`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chained::vector::Vector;
    /// let vec: Vector<_> = [(1, 'a'), (2, 'b'), (1, 'c')].iter().copied().collect();
    ///
    /// let by_key = |e: &(i32, char), k: &i32| e.0.cmp(k);
    ///
    /// assert_eq!(Some(0), vec.search(&1, by_key, 0, false));
    /// assert_eq!(Some(2), vec.search(&1, by_key, 1, false));
    /// assert_eq!(None, vec.search(&3, by_key, 0, false));
    /// ```
    pub fn search<K, F>(&self, key: &K, compare: F, start: usize, sorted: bool) -> Option<usize>
    where
        K: ?Sized,
        F: FnMut(&T, &K) -> cmp::Ordering,
    {
        self.sequence.search(key, compare, start, sorted)
    }
}

impl<T, H: VectorHooks<T>> Drop for Vector<T, H> {
    fn drop(&mut self) {
        let hooks = &self.hooks;

        //  Safety:
        //  -   `self.hooks` allocated the storage.
        unsafe { self.sequence.dispose(hooks, |e| hooks.destroy(e)) };
    }
}

impl<T, H: VectorHooks<T> + Default> Default for Vector<T, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, H: VectorHooks<T>> fmt::Debug for Vector<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Vector")
            .field("capacity", &self.capacity())
            .field("length", &self.len())
            .field("elements", &self.sequence)
            .finish()
    }
}

impl<T, H: VectorHooks<T> + Default> iter::FromIterator<T> for Vector<T, H> {
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>,
    {
        let mut result: Vector<_, _> = Vector::with_hooks(H::default());
        result.extend(collection);
        result
    }
}

impl<'a, T, H: VectorHooks<T>> IntoIterator for &'a Vector<T, H> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<'a, T, H: VectorHooks<T>> IntoIterator for &'a mut Vector<T, H> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter_mut() }
}

impl<T, H: VectorHooks<T>> ops::Index<usize> for Vector<T, H> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.sequence.element_at(index)
    }
}

impl<T, H: VectorHooks<T>> ops::IndexMut<usize> for Vector<T, H> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.sequence.element_at_mut(index)
    }
}

//  mod tests

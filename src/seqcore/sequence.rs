//! The core Sequence: the contiguous storage of a Vector, or of a HashSet bucket.

use super::root::{cmp, fmt, hint, marker, mem, ptr, slice};

use super::allocator::Allocator;
use super::capacity::Capacity;
use super::failure::{Failure, Result};

//  The storage.
//
//  The first `length` slots are initialized, in positional order, the
//  remaining slots up to `capacity` are not.
//
//  A Sequence remembers neither its allocator, nor how to destroy its
//  elements: it does not release anything on drop. Its owner is responsible
//  for calling `dispose`, with the allocator which allocated it.
pub struct Sequence<T> {
    ptr: ptr::NonNull<T>,
    length: usize,
    capacity: Capacity,
    _marker: marker::PhantomData<T>,
}

impl<T> Sequence<T> {
    //  Creates an instance, allocating storage for `capacity` elements.
    //
    //  #   Panics
    //
    //  Panics if T is zero-sized.
    //
    //  #   Errors
    //
    //  Returns an error if the storage cannot be allocated.
    pub fn try_new<A: Allocator>(capacity: Capacity, allocator: &A) -> Result<Self> {
        if mem::size_of::<T>() == 0 {
            panic_zero_sized_element();
        }

        let layout = capacity.layout::<T>()?;

        //  Safety:
        //  -   The size of the layout is non-zero, as neither the size of T nor
        //      the capacity are.
        let ptr = unsafe { allocator.allocate(layout) };
        let ptr = ptr::NonNull::new(ptr as *mut T).ok_or(Failure::OutOfMemory)?;

        Ok(Self { ptr, length: 0, capacity, _marker: marker::PhantomData })
    }

    //  Returns the number of elements.
    pub fn len(&self) -> usize { self.length }

    //  Returns whether there is no element.
    pub fn is_empty(&self) -> bool { self.length == 0 }

    //  Returns the capacity.
    pub fn capacity(&self) -> Capacity { self.capacity }

    //  Returns the initialized elements.
    pub fn as_slice(&self) -> &[T] {
        //  Safety:
        //  -   The first `length` elements are initialized.
        //  -   `ptr` is non-null and aligned, even once released.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.length) }
    }

    //  Returns the initialized elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        //  Safety:
        //  -   The first `length` elements are initialized.
        //  -   `ptr` is non-null and aligned, even once released.
        //  -   Exclusive access, as per &mut self.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.length) }
    }

    //  Returns a reference to the ith element.
    //
    //  #   Panics
    //
    //  Panics if `position` is out of bounds.
    pub fn element_at(&self, position: usize) -> &T {
        match self.as_slice().get(position) {
            Some(element) => element,
            None => panic_out_of_bounds(position, self.length),
        }
    }

    //  Returns a mutable reference to the ith element.
    //
    //  #   Panics
    //
    //  Panics if `position` is out of bounds.
    pub fn element_at_mut(&mut self, position: usize) -> &mut T {
        let length = self.length;

        match self.as_mut_slice().get_mut(position) {
            Some(element) => element,
            None => panic_out_of_bounds(position, length),
        }
    }

    //  Grows the storage by one increment, preserving all elements.
    //
    //  #   Errors
    //
    //  Returns an error, leaving the storage untouched, if the storage cannot
    //  be reallocated.
    //
    //  #   Safety
    //
    //  -   Assumes that `allocator` allocated the current storage.
    //  -   Assumes that the storage was not released.
    pub unsafe fn try_grow<A: Allocator>(&mut self, allocator: &A) -> Result<()> {
        debug_assert!(self.capacity.is_allocated());

        let grown = self.capacity.grown()?;
        let old = self.capacity.layout::<T>()?;
        let new = grown.layout::<T>()?;

        //  Safety:
        //  -   `ptr` was allocated by `allocator` with `old`, as per pre-conditions.
        //  -   `new` is larger than `old`, with the same alignment.
        let ptr = allocator.reallocate(self.ptr.as_ptr() as *mut u8, old, new);
        let ptr = ptr::NonNull::new(ptr as *mut T).ok_or(Failure::OutOfMemory)?;

        log::trace!(
            "sequence of {} elements grown from {} to {} slots",
            self.length,
            self.capacity.get(),
            grown.get()
        );

        self.ptr = ptr;
        self.capacity = grown;

        Ok(())
    }

    //  Inserts `value` at `position`, shifting the later elements by one.
    //
    //  Grows the storage first, if full.
    //
    //  #   Panics
    //
    //  Panics if `position` is strictly greater than the length.
    //
    //  #   Errors
    //
    //  Returns an error, leaving the elements untouched, if the storage is full
    //  and cannot be grown.
    //
    //  #   Safety
    //
    //  -   Assumes that `allocator` allocated the current storage.
    //  -   Assumes that the storage was not released.
    pub unsafe fn try_insert<A: Allocator>(
        &mut self,
        value: T,
        position: usize,
        allocator: &A,
    )
        -> Result<()>
    {
        if position > self.length {
            panic_out_of_bounds(position, self.length + 1);
        }

        if self.length == self.capacity.get() {
            self.try_grow(allocator)?;
        }

        debug_assert!(self.length < self.capacity.get());

        //  Safety:
        //  -   `position` is at most `length`, which is less than `capacity`.
        //  -   The slots in `[position, length]` are within the allocation.
        let base = self.ptr.as_ptr().add(position);
        ptr::copy(base, base.add(1), self.length - position);
        ptr::write(base, value);

        self.length += 1;

        Ok(())
    }

    //  Appends `value`.
    //
    //  #   Errors
    //
    //  Returns an error if the storage is full and cannot be grown.
    //
    //  #   Safety
    //
    //  -   Assumes that `allocator` allocated the current storage.
    //  -   Assumes that the storage was not released.
    pub unsafe fn try_push<A: Allocator>(&mut self, value: T, allocator: &A) -> Result<()> {
        self.try_insert(value, self.length, allocator)
    }

    //  Replaces the element at `position` by `value`.
    //
    //  `destroy` is invoked on the former element, which is then dropped.
    //
    //  #   Panics
    //
    //  Panics if `position` is out of bounds.
    pub fn replace<D>(&mut self, value: T, position: usize, destroy: D)
    where
        D: FnOnce(&mut T),
    {
        let slot = self.element_at_mut(position);

        destroy(&mut *slot);

        *slot = value;
    }

    //  Deletes the element at `position`, shifting the later elements by one.
    //
    //  `destroy` is invoked on the element, which is then dropped.
    //
    //  #   Panics
    //
    //  Panics if `position` is out of bounds.
    pub fn delete<D>(&mut self, position: usize, destroy: D)
    where
        D: FnOnce(&mut T),
    {
        destroy(self.element_at_mut(position));

        //  Safety:
        //  -   `position` is less than `length`, as checked above.
        //  -   The element is moved out before its slot is overwritten.
        let removed = unsafe {
            let base = self.ptr.as_ptr().add(position);
            let removed = ptr::read(base);
            ptr::copy(base.add(1), base, self.length - position - 1);
            removed
        };

        self.length -= 1;

        mem::drop(removed);
    }

    //  Finds the first element, at or after `start`, for which `compare`
    //  returns `Equal`.
    //
    //  If `sorted`, the elements in `[start, length)` are assumed to be sorted
    //  as per `compare`, and any matching element may be returned.
    //
    //  #   Panics
    //
    //  Panics if `start` is strictly greater than the length.
    pub fn search<K, F>(&self, key: &K, mut compare: F, start: usize, sorted: bool)
        -> Option<usize>
    where
        K: ?Sized,
        F: FnMut(&T, &K) -> cmp::Ordering,
    {
        if start > self.length {
            panic_out_of_bounds(start, self.length + 1);
        }

        let candidates = &self.as_slice()[start..];

        let found = if sorted {
            candidates.binary_search_by(|element| compare(element, key)).ok()
        } else {
            candidates.iter().position(|element| compare(element, key) == cmp::Ordering::Equal)
        };

        found.map(|index| index + start)
    }

    //  Sorts the elements, not necessarily stably.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> cmp::Ordering,
    {
        self.as_mut_slice().sort_unstable_by(compare);
    }

    //  Invokes `visitor` on each element, in order.
    pub fn traverse<F>(&mut self, visitor: F)
    where
        F: FnMut(&mut T),
    {
        self.as_mut_slice().iter_mut().for_each(visitor);
    }

    //  Destroys, then drops, each element in order, retaining the storage.
    pub fn clear<D>(&mut self, mut destroy: D)
    where
        D: FnMut(&mut T),
    {
        let length = self.length;

        //  Forget the elements first, in case `destroy` or a Drop panics.
        self.length = 0;

        //  Safety:
        //  -   The first `length` elements are initialized.
        //  -   They are no longer reachable, `self.length` being 0.
        let elements = unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), length) };

        for element in elements {
            destroy(element);

            //  Safety:
            //  -   The element is initialized, and dropped only once.
            unsafe { ptr::drop_in_place(element) };
        }
    }

    //  Destroys, then drops, each element in order, then releases the storage.
    //
    //  Disposing of a Sequence a second time has no effect.
    //
    //  #   Safety
    //
    //  -   Assumes that `allocator` allocated the current storage.
    pub unsafe fn dispose<A, D>(&mut self, allocator: &A, destroy: D)
    where
        A: Allocator,
        D: FnMut(&mut T),
    {
        //  Should `destroy` or a Drop panic, the storage is leaked.
        self.clear(destroy);

        if !self.capacity.is_allocated() {
            return;
        }

        let layout = match self.capacity.layout::<T>() {
            Ok(layout) => layout,
            Err(_) => {
                //  Safety:
                //  -   Cannot error, it succeeded during the allocation.
                debug_assert!(false, "{:?} succeeded in allocation!", self.capacity);
                hint::unreachable_unchecked()
            },
        };

        //  Safety:
        //  -   The pointer matches the pointer of the allocation.
        //  -   The layout matches the layout of the allocation.
        allocator.deallocate(self.ptr.as_ptr() as *mut u8, layout);

        self.ptr = ptr::NonNull::dangling();
        self.capacity = self.capacity.released();
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

//  A Sequence owns its elements, and offers no interior mutability.
unsafe impl<T: Send> Send for Sequence<T> {}

unsafe impl<T: Sync> Sync for Sequence<T> {}

#[cold]
#[inline(never)]
fn panic_zero_sized_element() -> ! {
    panic!("Zero-sized elements are not supported");
}

#[cold]
#[inline(never)]
fn panic_out_of_bounds(position: usize, bound: usize) -> ! {
    panic!("Position {} is out of bounds [0, {})", position, bound);
}

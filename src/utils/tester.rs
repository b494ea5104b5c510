//! Internal testing utilities

use std::cell;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::root::{cmp, fmt, ptr};

use crate::allocator::{Allocator, DefaultAllocator, Layout};

//  Allocation
//
//  Description of an allocation.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Allocation {
    //  The size of the allocation, in bytes.
    pub size: usize,
    //  The alignment of the allocation, in bytes.
    pub alignment: usize,
    //  The pointer allocated.
    pub pointer: *mut u8,
}

impl Allocation {
    pub fn new(pointer: *mut u8, layout: Layout) -> Self {
        Allocation {
            size: layout.size(),
            alignment: layout.align(),
            pointer,
        }
    }

    pub fn layout(&self) -> Layout {
        Layout::from_size_align(self.size, self.alignment).unwrap()
    }
}

//  Test Allocator
//
//  An allocator specifically for testing:
//  -   Allows injecting allocation failures.
//  -   Checks that allocations and deallocations match.
//  -   Counts the allocations performed, including those since released.
pub struct TestAllocator {
    //  The actual allocator.
    pub allocator: DefaultAllocator,
    //  The number of allocations allowed.
    pub allowed: cell::Cell<usize>,
    //  The number of allocations performed so far.
    pub performed: cell::Cell<usize>,
    //  The live allocations; to check deallocation requests.
    pub allocations: cell::RefCell<Vec<Allocation>>,
}

impl TestAllocator {
    //  Creates an allocator allowing up to `allowed` allocations.
    pub fn with_allowed(allowed: usize) -> Self {
        let result = Self::default();
        result.allowed.set(allowed);
        result
    }

    //  Creates an allocator without limit.
    pub fn unlimited() -> Self { Self::with_allowed(usize::MAX) }

    pub fn allocations(&self) -> Vec<Allocation> {
        self.allocations.borrow().clone()
    }

    pub fn allocation_sizes(&self) -> Vec<usize> {
        self.allocations.borrow().iter()
            .map(|&a| a.size)
            .collect()
    }

    pub fn clear(&self) {
        for a in self.allocations.borrow_mut().drain(..) {
            //  Safety:
            //  -   Were allocated, and not deallocated.
            unsafe { self.allocator.deallocate(a.pointer, a.layout()) };
        }
    }

    fn locate(&self, allocation: Allocation) -> Option<usize> {
        self.allocations.borrow().iter().position(|a| *a == allocation)
    }
}

impl Default for TestAllocator {
    fn default() -> Self {
        TestAllocator {
            allocator: DefaultAllocator,
            allowed: cell::Cell::new(0),
            performed: cell::Cell::new(0),
            allocations: cell::RefCell::new(Vec::new()),
        }
    }
}

impl Allocator for TestAllocator {
    unsafe fn allocate(&self, layout: Layout) -> *mut u8 {
        if self.allowed.get() == 0 {
            return ptr::null_mut();
        }

        self.allowed.set(self.allowed.get() - 1);
        self.performed.set(self.performed.get() + 1);

        let result = self.allocator.allocate(layout);
        assert_ne!(ptr::null_mut(), result);

        let allocation = Allocation::new(result, layout);
        self.allocations.borrow_mut().push(allocation);

        result
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout) {
        let allocation = Allocation::new(ptr, layout);

        if let Some(index) = self.locate(allocation) {
            self.allocations.borrow_mut().remove(index);
        } else {
            panic!("Could not find {:?} in {:?}",
                allocation, &*self.allocations.borrow());
        }

        self.allocator.deallocate(ptr, layout);
    }
}

impl Drop for TestAllocator {
    fn drop(&mut self) { self.clear() }
}

//  SpyCount
//
//  A counter, of live instances or of hook invocations.
pub struct SpyCount(AtomicUsize);

impl SpyCount {
    pub fn zero() -> Self { SpyCount(AtomicUsize::new(0)) }

    pub fn get(&self) -> usize { self.0.load(Ordering::Relaxed) }

    pub fn increment(&self) { self.0.fetch_add(1, Ordering::Relaxed); }

    fn decrement(&self) { self.0.fetch_sub(1, Ordering::Relaxed); }
}

//  Spy Element
//
//  An element tracking the number of instances, helpful to ensure proper drop.
pub struct SpyElement<'a> {
    count: &'a SpyCount,
}

impl<'a> SpyElement<'a> {
    pub fn new(count: &'a SpyCount) -> Self {
        count.increment();
        SpyElement { count }
    }
}

impl<'a> Drop for SpyElement<'a> {
    fn drop(&mut self) {
        self.count.decrement();
    }
}

//  Tracked Element
//
//  A keyed record, counting how many times the destroy hook was invoked on
//  instances sharing its counter.
//
//  Only `key` participates in comparisons and hashing.
#[derive(Debug)]
pub struct Tracked<'a> {
    pub key: u32,
    pub payload: u32,
    destroyed: &'a SpyCount,
}

impl<'a> Tracked<'a> {
    pub fn new(key: u32, payload: u32, destroyed: &'a SpyCount) -> Self {
        Tracked { key, payload, destroyed }
    }

    //  The destroy hook.
    pub fn destroy(element: &mut Tracked<'a>) { element.destroyed.increment(); }

    //  Compares by key.
    pub fn compare(left: &Tracked<'a>, right: &Tracked<'a>) -> cmp::Ordering {
        left.key.cmp(&right.key)
    }

    //  Hashes by key, modulo the number of buckets.
    pub fn hash(element: &Tracked<'a>, number_buckets: usize) -> usize {
        element.key as usize % number_buckets
    }
}

impl fmt::Debug for SpyCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

//  A value which may panic on drop.
#[derive(Debug, Eq, Hash, PartialEq)]
pub struct PanickyDrop<T>(pub T, bool);

impl<T> PanickyDrop<T> {
    //  Creates a normal instance.
    pub fn new(value: T) -> Self { Self(value, false) }

    //  Creates a panicky instance.
    pub fn panicky(value: T) -> Self { Self(value, true) }
}

impl<T> Drop for PanickyDrop<T> {
    fn drop(&mut self) { if self.1 { panic!("Oh No!") } }
}

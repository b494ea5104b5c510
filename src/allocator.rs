//! Allocator.
//!
//! The `Allocator` trait allows a user to customize where the storage of a container comes from, on a per instance
//! basis, without depending on the `alloc` crate.
use super::root::{alloc, cmp, ptr};

/// Layout, re-exported.
pub type Layout = alloc::Layout;

/// Allocator
pub trait Allocator {
    /// Allocates memory as per the size and alignment requirements.
    ///
    /// May return a null pointer if the allocation cannot be satisfied.
    ///
    /// #   Safety
    ///
    /// -   Assumes that the size of the Layout is non-zero.
    unsafe fn allocate(&self, layout: Layout) -> *mut u8;

    /// Deallocates memory.
    ///
    /// #   Safety
    ///
    /// -   Assumes that `ptr` was allocated by `self.allocate`.
    /// -   Assumes that `ptr` was not already deallocated.
    /// -   Assumes that `layout` matches the layout with which `ptr` was allocated.
    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout);

    /// Moves an allocation to a larger one, preserving its first `old.size()` bytes.
    ///
    /// Returns a null pointer, and leaves the former allocation untouched, if the new allocation cannot be satisfied.
    ///
    /// The default implementation allocates, copies, then deallocates.
    ///
    /// #   Safety
    ///
    /// -   Assumes that `ptr` was allocated by `self.allocate` with the layout `old`.
    /// -   Assumes that `new` has the same alignment as `old`, and a size at least as large.
    unsafe fn reallocate(&self, ptr: *mut u8, old: Layout, new: Layout) -> *mut u8 {
        debug_assert_eq!(old.align(), new.align());

        let result = self.allocate(new);

        if result.is_null() {
            return result;
        }

        //  Safety:
        //  -   Both allocations are at least `old.size()` bytes.
        //  -   Distinct allocations do not overlap.
        ptr::copy_nonoverlapping(ptr, result, cmp::min(old.size(), new.size()));

        self.deallocate(ptr, old);

        result
    }
}

impl<A: Allocator + ?Sized> Allocator for &A {
    unsafe fn allocate(&self, layout: Layout) -> *mut u8 {
        //  Safety:
        //  -   Forwarding.
        unsafe { (**self).allocate(layout) }
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout) {
        //  Safety:
        //  -   Forwarding.
        unsafe { (**self).deallocate(ptr, layout) }
    }

    unsafe fn reallocate(&self, ptr: *mut u8, old: Layout, new: Layout) -> *mut u8 {
        //  Safety:
        //  -   Forwarding.
        unsafe { (**self).reallocate(ptr, old, new) }
    }
}

/// DefaultAllocator
///
/// A default implementation of the `Allocator` trait, relying on the `alloc` crate global allocator.
#[cfg(feature = "with-std")]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DefaultAllocator;

#[cfg(feature = "with-std")]
impl Allocator for DefaultAllocator {
    unsafe fn allocate(&self, layout: Layout) -> *mut u8 {
        alloc::alloc(layout)
    }

    unsafe fn deallocate(&self, ptr: *mut u8, layout: Layout) {
        alloc::dealloc(ptr, layout)
    }

    unsafe fn reallocate(&self, ptr: *mut u8, old: Layout, new: Layout) -> *mut u8 {
        //  Safety:
        //  -   `ptr` was allocated by the global allocator with `old`, as per pre-conditions.
        //  -   `new.size()` is non-zero, being at least `old.size()`.
        alloc::realloc(ptr, old, new.size())
    }
}

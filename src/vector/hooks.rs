//! Hooks of the Vector.

use super::allocator;
use super::root::fmt;

/// VectorHooks
///
/// There are two important hooks for a Vector:
/// -   The allocator and deallocator functions, which provide the storage.
/// -   The destroy hook, invoked on an element right before it is overwritten, deleted, or disposed of.
///
/// The destroy hook is invoked exactly once per element leaving the `Vector`, before the element is dropped. It may
/// release resources the element refers to, it should not attempt to release the element itself, which the `Vector`
/// drops right after.
///
/// Also see DefaultVectorHooks for the default, when the `with-std` feature is used, and `Destructor` for a destroy
/// hook specified as a function pointer.
pub trait VectorHooks<T>: allocator::Allocator {
    /// Invoked on an element about to be overwritten, deleted, or disposed of.
    ///
    /// Does nothing by default.
    fn destroy(&self, _element: &mut T) {}
}

/// DefaultVectorHooks
///
/// Default hooks for the Vector:
/// -   deferring allocation and deallocation to `DefaultAllocator`.
/// -   doing nothing on destruction, beyond the `Drop` of the element.
#[cfg(feature = "with-std")]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DefaultVectorHooks(allocator::DefaultAllocator);

#[cfg(feature = "with-std")]
impl allocator::Allocator for DefaultVectorHooks {
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
impl<T> VectorHooks<T> for DefaultVectorHooks {}

/// Destructor
///
/// Hooks with an optional destroy hook specified as a function pointer, and a user-provided allocator.
///
/// #   Example
///
/// ```
/// use chained::allocator::DefaultAllocator;
/// use chained::vector::{Destructor, Vector};
///
/// fn release(name: &mut String) { name.clear(); }
///
/// let hooks = Destructor::with_allocator(DefaultAllocator, Some(release as fn(&mut String)));
/// let mut vec = Vector::with_capacity_and_hooks(2, hooks);
/// vec.push("Ada".to_string());
///
/// assert_eq!(1, vec.len());
/// ```
pub struct Destructor<T, A> {
    allocator: A,
    destroy: Option<fn(&mut T)>,
}

impl<T, A> Destructor<T, A> {
    /// Creates an instance, allocating from `allocator`, invoking `destroy` if any.
    pub fn with_allocator(allocator: A, destroy: Option<fn(&mut T)>) -> Self {
        Self { allocator, destroy }
    }
}

#[cfg(feature = "with-std")]
impl<T> Destructor<T, allocator::DefaultAllocator> {
    /// Creates an instance, relying on the global allocator, invoking `destroy` if any.
    ///
    /// #   Example
    ///
    /// ```
    /// use chained::vector::{Destructor, Vector};
    ///
    /// let hooks = Destructor::new(Some((|x: &mut i32| *x = 0) as fn(&mut i32)));
    /// let vec: Vector<i32, _> = Vector::with_hooks(hooks);
    ///
    /// assert!(vec.is_empty());
    /// ```
    pub fn new(destroy: Option<fn(&mut T)>) -> Self {
        Self::with_allocator(allocator::DefaultAllocator, destroy)
    }
}

impl<T, A: allocator::Allocator> allocator::Allocator for Destructor<T, A> {
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

impl<T, A: allocator::Allocator> VectorHooks<T> for Destructor<T, A> {
    fn destroy(&self, element: &mut T) {
        if let Some(destroy) = self.destroy {
            destroy(element);
        }
    }
}

impl<T, A: Clone> Clone for Destructor<T, A> {
    fn clone(&self) -> Self {
        Self::with_allocator(self.allocator.clone(), self.destroy)
    }
}

impl<T, A: fmt::Debug> fmt::Debug for Destructor<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Destructor")
            .field("allocator", &self.allocator)
            .field("destroy", &self.destroy.is_some())
            .finish()
    }
}

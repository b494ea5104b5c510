//! The Sequence capacity.
//!
//! A Sequence grows by a fixed increment, the capacity it was created with, rather than by doubling. As a result, `N`
//! pushes into an empty Sequence perform `ceil(N / increment) - 1` reallocations, that is O(N / increment) rather
//! than O(log N).

use super::allocator::Layout;
use super::failure::{Failure, Result};

/// The capacity, and increment, used when a capacity of 0 is requested.
pub const DEFAULT_INCREMENT: usize = 4;

//  Capacity.
//
//  A building block for computations related to the capacity of a Sequence.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Capacity {
    //  The number of slots currently allocated, or 0 once released.
    current: usize,
    //  The number of slots added by each growth, never 0.
    increment: usize,
}

impl Capacity {
    //  Creates an instance of `initial` slots, also used as increment.
    //
    //  An `initial` capacity of 0 is normalized to DEFAULT_INCREMENT.
    pub fn new(initial: usize) -> Self {
        let initial = if initial == 0 { DEFAULT_INCREMENT } else { initial };

        Self { current: initial, increment: initial }
    }

    //  Returns the number of slots.
    pub fn get(self) -> usize { self.current }

    //  Returns the growth increment.
    pub fn increment(self) -> usize { self.increment }

    //  Returns whether any slot is allocated.
    pub fn is_allocated(self) -> bool { self.current != 0 }

    //  Returns the capacity after one growth.
    //
    //  #   Errors
    //
    //  Returns `ElementsOverflow` if the number of slots overflows.
    pub fn grown(self) -> Result<Self> {
        match self.current.checked_add(self.increment) {
            Some(current) => Ok(Self { current, ..self }),
            None => Err(Failure::ElementsOverflow),
        }
    }

    //  Returns the capacity once the storage is released.
    pub fn released(self) -> Self { Self { current: 0, ..self } }

    //  Computes the layout of the storage, for elements of type T.
    //
    //  #   Errors
    //
    //  Returns `BytesOverflow` if the number of bytes overflows.
    pub fn layout<T>(self) -> Result<Layout> {
        Layout::array::<T>(self.current).map_err(|_| Failure::BytesOverflow)
    }
}

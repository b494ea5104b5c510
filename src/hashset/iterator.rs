//! Iterators over HashSet.

use super::root::{fmt, iter, slice};

use super::seqcore::sequence::Sequence;

/// An iterator over the elements of a HashSet, bucket after bucket, each bucket in insertion order.
pub struct Iter<'a, T> {
    buckets: slice::Iter<'a, Sequence<T>>,
    current: slice::Iter<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    //  Creates an instance, over `buckets` which contain `size` elements in total.
    pub(crate) fn new(buckets: &'a [Sequence<T>], size: usize) -> Self {
        Self { buckets: buckets.iter(), current: <&'a [T]>::default().iter(), remaining: size }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { buckets: self.buckets.clone(), current: self.current.clone(), remaining: self.remaining }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(element) = self.current.next() {
                self.remaining -= 1;
                return Some(element);
            }

            self.current = self.buckets.next()?.as_slice().iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<'a, T> iter::ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> iter::FusedIterator for Iter<'a, T> {}

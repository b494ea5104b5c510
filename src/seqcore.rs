//! Internal definition of the Sequence, the storage of both Vector and HashSet buckets.

pub mod capacity;
pub mod sequence;

use super::allocator;
use super::failure;
use super::root;

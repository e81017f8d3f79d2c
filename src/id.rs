//! typed handles into a [`Registry`](crate::Registry)

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::num::NonZeroU32;
use typenum::Unsigned;

// This "static" assert will get compiled out in any case we care about.
pub(crate) fn static_assert_index_bits<IndexBits: Unsigned>() {
    assert!(IndexBits::U32 >= 1);
    assert!(IndexBits::U32 <= 32);
}

pub trait IdTrait:
    Sized + Copy + Clone + PartialEq + Eq + PartialOrd + Ord + Hash + fmt::Debug
{
    type IndexBits: Unsigned;

    // The index must be less or equal to max_len. It's equal for the null ID.
    unsafe fn new_unchecked(index: u32) -> Self;

    fn index(&self) -> u32;

    fn max_len() -> u32 {
        static_assert_index_bits::<Self::IndexBits>();
        // The all-1-bits index is unrepresentable, and the index one below that is reserved for
        // the null ID. For example, if IndexBits=2 then index 3 is unrepresentable, index 2 is
        // null, and max_len is 2.
        (u32::MAX >> (32 - Self::IndexBits::U32)) - 1
    }

    fn new(index: u32) -> Option<Self> {
        if index > Self::max_len() {
            None
        } else {
            Some(unsafe { Self::new_unchecked(index) })
        }
    }

    fn null() -> Self {
        unsafe { Self::new_unchecked(Self::max_len()) }
    }

    fn is_null(&self) -> bool {
        self.index() == Self::max_len()
    }

    fn debug_format(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.is_null() {
            write!(f, "Id {{ null }}")
        } else {
            write!(f, "Id {{ index: {} }}", self.index())
        }
    }
}

/// A handle to one element of a [`Registry`](crate::Registry).
///
/// Handles compare by index only, so two elements that happen to be equal (two people with the
/// same name, say) still get distinct handles. The `T` parameter keeps handles from different
/// kinds of registry apart at compile time. `IndexBits` caps how many elements a registry using
/// this handle type can hold; the default of 32 bits is plenty for anything that fits in memory.
// Note that we can't use #[derive(...)] for common traits here, because for example Id should be
// Copy and Ord and Eq even when T isn't. See https://github.com/rust-lang/rust/issues/108894.
#[repr(transparent)]
pub struct Id<T, IndexBits: Unsigned = typenum::U32>(
    NonZeroU32,
    // https://doc.rust-lang.org/nomicon/phantom-data.html#table-of-phantomdata-patterns
    PhantomData<fn() -> (T, IndexBits)>,
);

impl<T, IndexBits: Unsigned> IdTrait for Id<T, IndexBits> {
    type IndexBits = IndexBits;

    unsafe fn new_unchecked(index: u32) -> Self {
        // Adding 1 here makes index=u32::MAX unrepresentable, rather than index=0. max_len()
        // already excludes that index.
        unsafe { Self(NonZeroU32::new_unchecked(index + 1), PhantomData) }
    }

    fn index(&self) -> u32 {
        self.0.get() - 1
    }
}

impl<T, IndexBits: Unsigned> Copy for Id<T, IndexBits> {}

impl<T, IndexBits: Unsigned> Clone for Id<T, IndexBits> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, IndexBits: Unsigned> fmt::Debug for Id<T, IndexBits> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.debug_format(f)
    }
}

impl<T, IndexBits: Unsigned> Hash for Id<T, IndexBits> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T, IndexBits: Unsigned> PartialEq for Id<T, IndexBits> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T, IndexBits: Unsigned> Eq for Id<T, IndexBits> {}

impl<T, IndexBits: Unsigned> PartialOrd for Id<T, IndexBits> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, IndexBits: Unsigned> Ord for Id<T, IndexBits> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

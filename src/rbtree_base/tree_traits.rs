use std::cmp::Ordering;
use std::fmt::Debug;
use std::marker::PhantomData;

// Traits bound
pub trait Comparator<P> {
    fn compare(&self, lhs: &P, rhs: &P) -> Ordering;
}

impl<P, F> Comparator<P> for F
where
    F: Fn(&P, &P) -> Ordering,
{
    fn compare(&self, lhs: &P, rhs: &P) -> Ordering {
        self(lhs, rhs)
    }
}

#[derive(Clone, Debug)]
pub struct DefaultComparator<P> {
    _p: PhantomData<P>,
}

impl<P> DefaultComparator<P> {
    pub fn new() -> Self {
        Self { _p: PhantomData }
    }
}

impl<P> Default for DefaultComparator<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Ord> Comparator<P> for DefaultComparator<P> {
    fn compare(&self, lhs: &P, rhs: &P) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Compile-time knobs of a tree.
pub trait TreeTraits: Clone + Debug {
    /// Re-check every red-black invariant after each insertion (debug builds).
    const SELF_VERIFY: bool;
    /// Number of arena slots reserved up front.
    const INITIAL_CAPACITY: usize;
}

#[derive(Clone, Debug)]
pub struct DefaultTreeTraits;

impl TreeTraits for DefaultTreeTraits {
    const SELF_VERIFY: bool = false;
    const INITIAL_CAPACITY: usize = 0;
}

#[derive(Clone, Debug)]
pub struct VerifiedTreeTraits;

impl TreeTraits for VerifiedTreeTraits {
    const SELF_VERIFY: bool = true;
    const INITIAL_CAPACITY: usize = 16;
}

#[cfg(test)]
#[test]
fn test_comparators() {
    let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
    assert_eq!(DefaultComparator::<u64>::new().compare(&7, &3), Ordering::Greater);
    assert!(VerifiedTreeTraits::SELF_VERIFY);
    assert!(!DefaultTreeTraits::SELF_VERIFY);
}

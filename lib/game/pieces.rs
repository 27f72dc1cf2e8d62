use bitvec::{bitvec, vec::BitVec};

#[cfg(test)]
use proptest::{collection::vec, prelude::*};

/// Tracks which pieces of a catalog a player has already placed.
///
/// Holds exactly one slot per catalog entry.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PieceSet(BitVec);

#[cfg(test)]
impl Arbitrary for PieceSet {
    type Parameters = ();
    type Strategy = BoxedStrategy<PieceSet>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        vec(any::<bool>(), 1..=32)
            .prop_map(|v| PieceSet(BitVec::from_iter(v)))
            .boxed()
    }
}

impl PieceSet {
    /// An empty set with capacity for `len` pieces.
    #[inline]
    pub fn new(len: usize) -> Self {
        PieceSet(bitvec![0; len])
    }

    /// The number of slots, one per catalog entry.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the catalog this set tracks is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether piece number `i` was used.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        self.0[i]
    }

    /// Marks piece number `i` as used.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn insert(&mut self, i: usize) {
        self.0.set(i, true);
    }

    /// Marks every piece as unused.
    #[inline]
    pub fn clear(&mut self) {
        self.0.fill(false);
    }

    /// The number of used pieces.
    #[inline]
    pub fn count(&self) -> usize {
        self.0.count_ones()
    }

    /// An iterator over the used piece numbers, in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn new_set_is_empty(#[strategy(..64usize)] n: usize) {
        let s = PieceSet::new(n);
        assert_eq!(s.len(), n);
        assert_eq!(s.count(), 0);
        assert_eq!(s.iter().next(), None);
    }

    #[proptest]
    fn inserted_piece_is_contained(mut s: PieceSet, #[strategy(..#s.len())] i: usize) {
        s.insert(i);
        assert!(s.contains(i));
        assert!(s.iter().any(|j| j == i));
    }

    #[proptest]
    fn inserting_does_not_change_the_number_of_slots(
        mut s: PieceSet,
        #[strategy(..#s.len())] i: usize,
    ) {
        let len = s.len();
        s.insert(i);
        assert_eq!(s.len(), len);
    }

    #[proptest]
    fn clear_empties_the_set(mut s: PieceSet) {
        s.clear();
        assert_eq!(s.count(), 0);
    }

    #[proptest]
    fn count_matches_iter(s: PieceSet) {
        assert_eq!(s.iter().count(), s.count());
    }

    #[proptest]
    #[should_panic]
    fn contains_panics_if_out_of_range(s: PieceSet, #[strategy(#s.len()..)] i: usize) {
        s.contains(i);
    }
}

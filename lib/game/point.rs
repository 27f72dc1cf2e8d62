use derive_more::{Add, Constructor, Display, Sub};

/// A (column, row) coordinate, origin at the top-left corner of the board.
///
/// Points may lie outside the board; only [`Board`][`crate::game::Board`] knows its bounds.
#[derive(
    Debug, Display, Default, Copy, Clone, Eq, PartialEq, Hash, Add, Sub, Constructor,
)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{col},{row}")]
pub struct Point {
    #[cfg_attr(test, strategy(-8i32..22))]
    pub col: i32,
    #[cfg_attr(test, strategy(-8i32..22))]
    pub row: i32,
}

const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

impl Point {
    /// The four points sharing an edge with this one.
    #[inline]
    pub fn orthogonal(self) -> impl Iterator<Item = Point> {
        ORTHOGONAL
            .into_iter()
            .map(move |(c, r)| self + Point::new(c, r))
    }

    /// The four points sharing only a corner with this one.
    #[inline]
    pub fn diagonal(self) -> impl Iterator<Item = Point> {
        DIAGONAL
            .into_iter()
            .map(move |(c, r)| self + Point::new(c, r))
    }
}

/// Points are ordered row-major, the order in which the board is scanned.
impl Ord for Point {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl PartialOrd for Point {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

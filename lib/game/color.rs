use crate::game::Point;
use derive_more::Display;
use std::ops::Not;

/// The color of a player's pieces.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Color {
    #[display(fmt = "orange")]
    Orange,
    #[display(fmt = "purple")]
    Purple,
}

impl Color {
    /// Both colors, in turn order.
    pub const ALL: [Color; 2] = [Color::Orange, Color::Purple];

    /// An iterator over both colors, in turn order.
    #[inline]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }

    /// The cell this color's opening placement must cover.
    ///
    /// The two starting cells sit on diagonally opposite sides of the board.
    #[inline]
    pub fn start(&self) -> Point {
        match self {
            Color::Orange => Point::new(4, 4),
            Color::Purple => Point::new(9, 9),
        }
    }
}

impl Not for Color {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        match self {
            Color::Orange => Color::Purple,
            Color::Purple => Color::Orange,
        }
    }
}

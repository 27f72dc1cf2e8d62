use crate::game::Color;
use derive_more::Display;

/// The state of a game, either still in progress or finished.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Status {
    #[display(fmt = "playing")]
    Playing,

    #[display(fmt = "{_0} wins")]
    Win(Color),

    #[display(fmt = "tie")]
    Tie,
}

impl Status {
    /// Whether the game has finished.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::Playing)
    }

    /// The winning side, if any.
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        match *self {
            Status::Win(c) => Some(c),
            _ => None,
        }
    }

    /// The final status given how many cells each side covers.
    ///
    /// The side covering more cells wins.
    #[inline]
    pub fn from_scores(orange: usize, purple: usize) -> Self {
        use std::cmp::Ordering::*;
        match orange.cmp(&purple) {
            Greater => Status::Win(Color::Orange),
            Less => Status::Win(Color::Purple),
            Equal => Status::Tie,
        }
    }
}

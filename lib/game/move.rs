use crate::game::Point;
use derive_more::{Constructor, Display, Error};
use std::str::FromStr;

/// An intent to place a piece.
///
/// A move says which piece, in which orientation and where its mask's
/// top-left corner goes; it knows nothing about whether it is legal.
///
/// Written as `p{piece}r{rotation}[m]@{col},{row}`, where the optional `m`
/// marks a mirrored piece, e.g. `p12r1m@4,4`.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Constructor)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "p{piece}r{rotation}{}@{anchor}", "if *flip { \"m\" } else { \"\" }")]
pub struct Move {
    /// The piece number, its index in the [`Catalog`][`crate::game::Catalog`].
    #[cfg_attr(test, strategy(0usize..21))]
    pub piece: usize,
    /// Where the top-left corner of the piece's mask lands.
    pub anchor: Point,
    /// Whether the piece is mirrored before rotating.
    pub flip: bool,
    /// Number of quarter turns clockwise.
    #[cfg_attr(test, strategy(0u8..4))]
    pub rotation: u8,
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse move")]
pub struct ParseMoveError;

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lhs, anchor) = s.split_once('@').ok_or(ParseMoveError)?;
        let (col, row) = anchor.split_once(',').ok_or(ParseMoveError)?;
        let (piece, rotation) = lhs
            .strip_prefix('p')
            .and_then(|s| s.split_once('r'))
            .ok_or(ParseMoveError)?;

        let (rotation, flip) = match rotation.strip_suffix('m') {
            Some(r) => (r, true),
            None => (rotation, false),
        };

        let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !digits(piece) || !digits(rotation) {
            return Err(ParseMoveError);
        }

        Ok(Move {
            piece: piece.parse().map_err(|_| ParseMoveError)?,
            anchor: Point::new(
                col.parse().map_err(|_| ParseMoveError)?,
                row.parse().map_err(|_| ParseMoveError)?,
            ),
            flip,
            rotation: rotation.parse().map_err(|_| ParseMoveError)?,
        })
    }
}

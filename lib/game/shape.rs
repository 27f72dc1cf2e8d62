use crate::game::Point;
use bitvec::vec::BitVec;
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::str::FromStr;

use proptest::{collection::vec, prelude::*};

/// The character marking an occupied cell in the text representation of a [`Shape`].
pub const MARKER: char = '*';

/// A piece footprint, a rectangular mask of occupied cells.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Shape {
    width: usize,
    height: usize,
    cells: BitVec,
}

impl Arbitrary for Shape {
    type Parameters = ();
    type Strategy = BoxedStrategy<Shape>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (1..=5usize, 1..=5usize)
            .prop_flat_map(|(w, h)| {
                vec(any::<bool>(), w * h)
                    .prop_filter("empty", |cells| cells.contains(&true))
                    .prop_map(move |cells| Shape::new(w, h, cells))
            })
            .boxed()
    }
}

impl Shape {
    /// Constructs a [`Shape`] from its cells in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if the number of cells is not `width * height`.
    pub fn new<I: IntoIterator<Item = bool>>(width: usize, height: usize, cells: I) -> Self {
        let cells = BitVec::from_iter(cells);
        assert_eq!(cells.len(), width * height, "shape is not rectangular");

        Shape {
            width,
            height,
            cells,
        }
    }

    /// The number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The number of occupied cells.
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.count_ones()
    }

    /// Whether the cell at `(col, row)` is occupied.
    ///
    /// Cells outside the mask are never occupied.
    #[inline]
    pub fn get(&self, col: usize, row: usize) -> bool {
        col < self.width && row < self.height && self.cells[row * self.width + col]
    }

    /// Occupied cells as offsets from the top-left corner of the mask, in row-major order.
    #[inline]
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter_ones().map(|i| {
            Point::new((i % self.width) as i32, (i / self.width) as i32)
        })
    }

    /// Mirrors then rotates this shape.
    ///
    /// The mirror is horizontal and is applied first; each `rotation` is a
    /// quarter turn clockwise, taken modulo 4. Odd rotations swap width and height.
    pub fn variant(&self, flip: bool, rotation: u8) -> Self {
        let (w, h) = (self.width, self.height);
        let mut shape = self.clone();

        if flip {
            shape = Shape::new(w, h, (0..w * h).map(|i| self.get(w - 1 - i % w, i / w)));
        }

        for _ in 0..rotation % 4 {
            let (w, h) = (shape.width, shape.height);
            // The rotated mask is `h` wide and `w` tall.
            let cells = (0..w * h).map(|i| shape.get(i / h, h - 1 - i % h));
            shape = Shape::new(h, w, cells);
        }

        shape
    }

    /// The distinct orientations of this shape along with the transform producing each.
    ///
    /// Symmetric shapes produce fewer than 8 variants.
    pub fn variants(&self) -> Vec<(bool, u8, Shape)> {
        let mut variants: Vec<(bool, u8, Shape)> = Vec::with_capacity(8);

        for flip in [false, true] {
            for rotation in 0..4 {
                let v = self.variant(flip, rotation);
                if variants.iter().all(|(_, _, s)| *s != v) {
                    variants.push((flip, rotation, v));
                }
            }
        }

        variants
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                f.write_char('\n')?;
            }

            for col in 0..self.width {
                f.write_char(if self.get(col, row) { MARKER } else { '.' })?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing [`Shape`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseShapeError {
    #[display(fmt = "shape has no rows")]
    Empty,
    #[display(fmt = "row {row} is {len} wide, expected {width}")]
    Ragged { row: usize, len: usize, width: usize },
    #[display(fmt = "shape has no occupied cells")]
    Vacant,
}

impl FromStr for Shape {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<_> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let width = match lines.first() {
            Some(l) if !l.is_empty() => l.chars().count(),
            _ => return Err(ParseShapeError::Empty),
        };

        for (row, l) in lines.iter().enumerate() {
            let len = l.chars().count();
            if len != width {
                return Err(ParseShapeError::Ragged { row, len, width });
            }
        }

        let cells = lines.iter().flat_map(|l| l.chars()).map(|c| c == MARKER);
        let shape = Shape::new(width, lines.len(), cells);

        if shape.area() == 0 {
            Err(ParseShapeError::Vacant)
        } else {
            Ok(shape)
        }
    }
}

use crate::game::{Color, Point};
use std::fmt::{self, Write};
use std::ops::Index;

#[cfg(test)]
use proptest::{collection::vec, prelude::*};

/// The game board, a fixed grid of cells each either empty or covered by a [`Color`].
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Option<Color>; Board::COLS]; Board::ROWS],
}

// We provide a custom implementation of Arbitrary rather than deriving,
// otherwise proptest overflows the stack generating large arrays.
#[cfg(test)]
impl Arbitrary for Board {
    type Parameters = ();
    type Strategy = BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        vec(any::<Option<Color>>(), Board::ROWS * Board::COLS)
            .prop_map(|v| {
                let mut board = Board::new();

                board
                    .cells
                    .iter_mut()
                    .flatten()
                    .zip(v)
                    .for_each(|(c, v)| *c = v);

                board
            })
            .boxed()
    }
}

impl Board {
    /// The number of rows.
    pub const ROWS: usize = 14;

    /// The number of columns.
    pub const COLS: usize = 14;

    /// An empty board.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a [`Point`] lies on the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (0..Self::COLS as i32).contains(&p.col) && (0..Self::ROWS as i32).contains(&p.row)
    }

    /// The contents of the cell at a [`Point`], or `None` if it lies outside the board.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Option<Color>> {
        if self.contains(p) {
            Some(self.cells[p.row as usize][p.col as usize])
        } else {
            None
        }
    }

    /// Whether the cell at a [`Point`] lies on the board and is empty.
    #[inline]
    pub fn is_empty_at(&self, p: Point) -> bool {
        self.get(p) == Some(None)
    }

    /// Whether the cell at a [`Point`] lies on the board and is covered by a [`Color`].
    #[inline]
    pub fn is_color_at(&self, p: Point, c: Color) -> bool {
        self.get(p) == Some(Some(c))
    }

    /// Sets the contents of the cell at a [`Point`].
    ///
    /// # Panics
    ///
    /// Panics if the point lies outside the board.
    #[inline]
    pub fn set(&mut self, p: Point, cell: Option<Color>) {
        assert!(self.contains(p), "point `{p}` is outside the board");
        self.cells[p.row as usize][p.col as usize] = cell;
    }

    /// Every point on the board, in row-major order.
    #[inline]
    pub fn points() -> impl DoubleEndedIterator<Item = Point> {
        (0..Self::ROWS as i32)
            .flat_map(|row| (0..Self::COLS as i32).map(move |col| Point::new(col, row)))
    }

    /// An iterator over every cell along with its [`Point`], in row-major order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Point, Option<Color>)> + '_ {
        Self::points().map(|p| (p, self[p]))
    }

    /// The number of cells covered by a [`Color`].
    #[inline]
    pub fn count(&self, c: Color) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == Some(c)).count()
    }
}

/// Retrieves the contents of the cell at a [`Point`].
///
/// # Panics
///
/// Panics if the point lies outside the board.
impl Index<Point> for Board {
    type Output = Option<Color>;

    #[inline]
    fn index(&self, p: Point) -> &Self::Output {
        assert!(self.contains(p), "point `{p}` is outside the board");
        &self.cells[p.row as usize][p.col as usize]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                f.write_char(match cell {
                    Some(Color::Orange) => 'O',
                    Some(Color::Purple) => 'P',
                    None => '.',
                })?;
            }

            f.write_char('\n')?;
        }

        Ok(())
    }
}

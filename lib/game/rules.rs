//! Move legality, stateless over a snapshot of the [`Board`].
//!
//! A color's first piece must cover its starting cell. Every later piece
//! must lie on empty cells, touch the same color only at corners and
//! cover at least one of that color's anchors.

use crate::game::{Board, Catalog, Color, Move, PieceSet, Point, Shape};
use std::collections::{BTreeSet, HashSet};

/// The cells a [`Move`] covers.
///
/// # Panics
///
/// Panics if the move refers to a piece not in the [`Catalog`],
/// or if a covered cell's coordinates overflow `i32`.
pub fn footprint(catalog: &Catalog, m: Move) -> Vec<Point> {
    let shape = variant(catalog, m);
    cover(&shape, m.anchor).collect()
}

fn variant(catalog: &Catalog, m: Move) -> Shape {
    assert!(
        m.piece < catalog.len(),
        "piece #{} is not in the catalog of {} pieces",
        m.piece,
        catalog.len()
    );

    catalog[m.piece].variant(m.flip, m.rotation)
}

fn cover(shape: &Shape, anchor: Point) -> impl Iterator<Item = Point> + '_ {
    shape.cells().map(move |p| anchor + p)
}

/// Whether a mask anchored at `anchor` overlaps the board at all.
///
/// Cells of masks outside this window are never computed.
fn reaches_board(shape: &Shape, anchor: Point) -> bool {
    let (col, row) = (i64::from(anchor.col), i64::from(anchor.row));
    let (w, h) = (shape.width() as i64, shape.height() as i64);

    (1 - w..Board::COLS as i64).contains(&col) && (1 - h..Board::ROWS as i64).contains(&row)
}

/// Whether any of the four cells sharing an edge with `p` is covered by `color`.
#[inline]
pub fn orthogonally_adjacent_to_self(board: &Board, p: Point, color: Color) -> bool {
    p.orthogonal().any(|q| board.is_color_at(q, color))
}

/// The empty cells `color` may currently place a piece through.
///
/// While its starting cell is empty, that cell is the only anchor,
/// regardless of whose turn it is. Otherwise, a color has no anchors
/// outside its turn; during its turn, an anchor is any empty cell
/// diagonal to its territory that does not share an edge with it.
pub fn legal_anchors(board: &Board, color: Color, turn: Color) -> BTreeSet<Point> {
    let start = color.start();

    if board.is_empty_at(start) {
        BTreeSet::from([start])
    } else if color != turn {
        BTreeSet::new()
    } else {
        Board::points()
            .filter(|&p| board.is_empty_at(p))
            .filter(|&p| p.diagonal().any(|q| board.is_color_at(q, color)))
            .filter(|&p| !orthogonally_adjacent_to_self(board, p, color))
            .collect()
    }
}

/// Whether a piece covering `cells` may be placed by `color`, given its anchors.
fn fits(board: &Board, color: Color, cells: &[Point], anchors: &BTreeSet<Point>) -> bool {
    let start = color.start();

    if board.is_empty_at(start) && cells.contains(&start) {
        cells.iter().all(|&p| board.is_empty_at(p))
    } else {
        cells.iter().any(|p| anchors.contains(p))
            && cells.iter().all(|&p| {
                board.is_empty_at(p) && !orthogonally_adjacent_to_self(board, p, color)
            })
    }
}

/// Whether `color` may play a [`Move`] when it is `turn`'s turn.
///
/// Never fails: moves out of turn, with a used piece, off the board,
/// overlapping or touching the same color along an edge, or not through
/// an anchor are simply illegal.
///
/// # Panics
///
/// Panics if the move refers to a piece not in the [`Catalog`].
pub fn is_valid_move(
    catalog: &Catalog,
    board: &Board,
    used: &PieceSet,
    color: Color,
    turn: Color,
    m: Move,
) -> bool {
    let shape = variant(catalog, m);

    if color != turn || used.contains(m.piece) || !reaches_board(&shape, m.anchor) {
        return false;
    }

    let cells: Vec<_> = cover(&shape, m.anchor).collect();

    let anchors = legal_anchors(board, color, turn);
    fits(board, color, &cells, &anchors)
}

/// Every legal [`Move`] available to `color` when it is `turn`'s turn.
///
/// Each placement of a piece is listed once, under the first orientation
/// in [`Shape::variants`] that covers those cells.
pub fn legal_moves(
    catalog: &Catalog,
    board: &Board,
    used: &PieceSet,
    color: Color,
    turn: Color,
) -> Vec<Move> {
    if color != turn {
        return Vec::new();
    }

    let anchors = legal_anchors(board, color, turn);
    let mut seen = HashSet::new();
    let mut moves = Vec::new();

    for (piece, shape) in catalog.iter().enumerate() {
        if used.contains(piece) {
            continue;
        }

        for (flip, rotation, variant) in shape.variants() {
            let offsets: Vec<_> = variant.cells().collect();

            for &a in &anchors {
                for &o in &offsets {
                    let anchor = a - o;
                    let mut cells: Vec<_> = cover(&variant, anchor).collect();
                    cells.sort();

                    if fits(board, color, &cells, &anchors) && seen.insert((piece, cells)) {
                        moves.push(Move::new(piece, anchor, flip, rotation));
                    }
                }
            }
        }
    }

    moves
}

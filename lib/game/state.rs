use crate::game::{rules, Board, Catalog, Color, Move, PieceSet, Point, Status};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, instrument, trace};

use proptest::{prelude::*, sample::Selector};

/// The authoritative state of a game.
///
/// Cloning produces an independent snapshot that shares only the
/// immutable [`Catalog`], so hypothetical moves may be explored on the
/// clone without affecting the original.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct GameState {
    catalog: Catalog,
    board: Board,
    used: [PieceSet; 2],
    skipped: [bool; 2],
    turn: Color,
}

impl Arbitrary for GameState {
    type Parameters = ();
    type Strategy = BoxedStrategy<GameState>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (0..32usize, any::<Selector>())
            .prop_map(|(plies, selector)| {
                let mut state = GameState::default();
                for _ in 0..plies {
                    let turn = state.turn();
                    match selector.try_select(state.moves(turn)) {
                        Some(m) => assert!(state.make_move(m, turn)),
                        None => state.pass(),
                    }
                }

                state
            })
            .boxed()
    }
}

impl Default for GameState {
    #[inline]
    fn default() -> Self {
        Self::new(Catalog::standard())
    }
}

impl GameState {
    /// A fresh game played with the pieces in the [`Catalog`].
    pub fn new(catalog: Catalog) -> Self {
        let used = [PieceSet::new(catalog.len()), PieceSet::new(catalog.len())];

        GameState {
            catalog,
            board: Board::new(),
            used,
            skipped: [false; 2],
            turn: Color::Orange,
        }
    }

    /// Restores the unplayed state, keeping the same [`Catalog`].
    #[instrument(level = "trace", skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new(self.catalog.clone());
    }

    /// The pieces this game is played with.
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current contents of the board.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The pieces a [`Color`] has already placed.
    #[inline]
    pub fn used(&self, c: Color) -> &PieceSet {
        &self.used[c as usize]
    }

    /// Whether a [`Color`] passed on its last turn.
    #[inline]
    pub fn skipped(&self, c: Color) -> bool {
        self.skipped[c as usize]
    }

    /// The number of cells covered by a [`Color`].
    #[inline]
    pub fn score(&self, c: Color) -> usize {
        self.board.count(c)
    }

    /// The cells a [`Move`] would cover.
    ///
    /// # Panics
    ///
    /// Panics if the move refers to a piece not in the [`Catalog`].
    #[inline]
    pub fn footprint(&self, m: Move) -> Vec<Point> {
        rules::footprint(&self.catalog, m)
    }

    /// Whether a [`Color`] may currently play a [`Move`].
    ///
    /// # Panics
    ///
    /// Panics if the move refers to a piece not in the [`Catalog`].
    #[inline]
    pub fn is_valid_move(&self, m: Move, c: Color) -> bool {
        rules::is_valid_move(
            &self.catalog,
            &self.board,
            self.used(c),
            c,
            self.turn,
            m,
        )
    }

    /// The empty cells a [`Color`] may currently place a piece through.
    #[inline]
    pub fn legal_anchors(&self, c: Color) -> BTreeSet<Point> {
        rules::legal_anchors(&self.board, c, self.turn)
    }

    /// Every legal [`Move`] currently available to a [`Color`].
    #[inline]
    pub fn moves(&self, c: Color) -> Vec<Move> {
        rules::legal_moves(&self.catalog, &self.board, self.used(c), c, self.turn)
    }

    /// Plays a [`Move`] on behalf of a [`Color`], returning whether it was accepted.
    ///
    /// An illegal move in the player's own turn counts as a pass.
    /// An attempt out of turn changes nothing.
    ///
    /// # Panics
    ///
    /// Panics if the move refers to a piece not in the [`Catalog`].
    #[instrument(level = "trace", skip(self))]
    pub fn make_move(&mut self, m: Move, c: Color) -> bool {
        if self.is_valid_move(m, c) {
            self.place_piece(m, c);
            self.used[c as usize].insert(m.piece);
            self.skipped[c as usize] = false;
            self.advance_turn();
            debug!(player = %c, %m, "placed piece");
            true
        } else if c == self.turn {
            debug!(player = %c, %m, "illegal move, passing");
            self.pass();
            false
        } else {
            trace!(player = %c, turn = %self.turn, "not this player's turn");
            false
        }
    }

    /// Records a pass for the side to move and hands the turn over.
    #[instrument(level = "trace", skip(self), fields(player = %self.turn))]
    pub fn pass(&mut self) {
        self.skipped[self.turn as usize] = true;
        self.advance_turn();
    }

    /// Hands the turn over to the other side.
    #[inline]
    pub fn advance_turn(&mut self) {
        self.turn = !self.turn;
    }

    /// Covers the cells of a [`Move`] with a [`Color`], without validating it.
    ///
    /// Neither the turn, the passes nor the used pieces are updated.
    /// Meant for exploring hypothetical moves on a clone.
    ///
    /// # Panics
    ///
    /// Panics if the piece is not in the [`Catalog`] or any cell lies outside the board.
    pub fn place_piece(&mut self, m: Move, c: Color) {
        self.fill(m, Some(c));
    }

    /// Empties the cells of a [`Move`], undoing [`GameState::place_piece`].
    ///
    /// # Panics
    ///
    /// Panics if the piece is not in the [`Catalog`] or any cell lies outside the board.
    pub fn remove_piece(&mut self, m: Move) {
        self.fill(m, None);
    }

    fn fill(&mut self, m: Move, cell: Option<Color>) {
        let cells = self.footprint(m);

        // Check every cell before touching the board.
        for &p in &cells {
            assert!(self.board.contains(p), "move `{m}` covers `{p}` off the board");
        }

        for p in cells {
            self.board.set(p, cell);
        }
    }

    /// The [`Status`] of the game.
    ///
    /// The game ends once both sides have passed in a row.
    pub fn status(&self) -> Status {
        if self.skipped.iter().all(|&s| s) {
            Status::from_scores(self.score(Color::Orange), self.score(Color::Purple))
        } else {
            Status::Playing
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "status: {}", self.status())?;
        write!(f, "{}", self.board)
    }
}

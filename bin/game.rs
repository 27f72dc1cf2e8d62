use crate::{build::Build, player::Player};
use derive_more::Constructor;
use lib::game::{Board, Color, GameState, Move, Status};
use std::fmt::{self, Display};
use tracing::{field::display, instrument, warn, Span};

/// The record of a finished game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Record {
    pub orange: String,
    pub purple: String,
    pub status: Status,

    /// Every ply in order, `None` standing for a pass.
    pub moves: Vec<Option<Move>>,

    pub board: Board,
}

impl Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[Orange \"{}\"]", self.orange)?;
        writeln!(f, "[Purple \"{}\"]", self.purple)?;
        writeln!(f, "[Status \"{}\"]", self.status)?;
        writeln!(f)?;

        for (i, m) in self.moves.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }

            match m {
                Some(m) => write!(f, "{m}")?,
                None => f.write_str("-")?,
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.board)
    }
}

/// Holds the players of a game.
#[derive(Debug, Constructor)]
pub struct Game<O, P> {
    orange: O,
    purple: P,
}

impl<O, P> Game<O, P>
where
    O: Build + Display,
    P: Build + Display,
    O::Output: Player,
    P::Output: Player,
{
    /// Play a game to the end from the given [`GameState`].
    #[instrument(level = "debug", skip(self, state),
        fields(orange = %self.orange, purple = %self.purple, status))]
    pub fn play(self, mut state: GameState) -> Record {
        let orange_config = self.orange.to_string();
        let purple_config = self.purple.to_string();

        let mut orange = self.orange.build();
        let mut purple = self.purple.build();

        let mut moves = Vec::new();

        let status = loop {
            let status = state.status();
            if status.is_terminal() {
                Span::current().record("status", display(status));
                break status;
            }

            let turn = state.turn();
            let choice = match turn {
                Color::Orange => orange.play(&state),
                Color::Purple => purple.play(&state),
            };

            match choice {
                Some(m) if state.make_move(m, turn) => moves.push(Some(m)),
                Some(m) => {
                    warn!(player = %turn, %m, "illegal move counted as a pass");
                    moves.push(None);
                }
                None => {
                    state.pass();
                    moves.push(None);
                }
            }
        };

        Record {
            orange: orange_config,
            purple: purple_config,
            status,
            moves,
            board: *state.board(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{MockPlayer, PlayerConfig};
    use derive_more::Display;
    use lib::game::{Catalog, Point};
    use proptest::sample::Selector;
    use std::sync::{Arc, Mutex};
    use test_strategy::proptest;

    #[derive(Display)]
    #[display(fmt = "mock")]
    struct MockBuilder(MockPlayer);

    impl Build for MockBuilder {
        type Output = MockPlayer;

        fn build(self) -> Self::Output {
            self.0
        }
    }

    fn catalog(s: &str) -> Catalog {
        s.parse().unwrap()
    }

    #[proptest]
    fn game_ends_when_both_sides_pass(c: Catalog) {
        let mut o = MockPlayer::new();
        o.expect_play().once().returning(|_| None);

        let mut p = MockPlayer::new();
        p.expect_play().once().returning(|_| None);

        let game = Game::new(MockBuilder(o), MockBuilder(p));

        assert_eq!(
            game.play(GameState::new(c)),
            Record {
                orange: "mock".into(),
                purple: "mock".into(),
                status: Status::Tie,
                moves: vec![None, None],
                board: Board::new(),
            }
        );
    }

    #[test]
    fn illegal_move_counts_as_a_pass() {
        let mut o = MockPlayer::new();
        o.expect_play()
            .once()
            .return_const(Some(Move::new(0, Point::new(0, 0), false, 0)));

        let mut p = MockPlayer::new();
        p.expect_play().once().returning(|_| None);

        let game = Game::new(MockBuilder(o), MockBuilder(p));
        let record = game.play(GameState::default());

        assert_eq!(record.status, Status::Tie);
        assert_eq!(record.moves, vec![None, None]);
        assert_eq!(record.board, Board::new());
    }

    #[proptest]
    fn game_returns_record(c: Catalog, selector: Selector) {
        let mut next = GameState::new(c.clone());
        let mut moves = Vec::new();

        let status = loop {
            let status = next.status();
            if status.is_terminal() {
                break status;
            }

            let turn = next.turn();
            match selector.try_select(next.moves(turn)) {
                Some(m) => {
                    assert!(next.make_move(m, turn));
                    moves.push(Some(m));
                }
                None => {
                    next.pass();
                    moves.push(None);
                }
            }
        };

        let script = Arc::new(Mutex::new(moves.iter().rev().copied().collect::<Vec<_>>()));
        let act = move |_: &GameState| script.lock().unwrap().pop().flatten();

        let mut o = MockPlayer::new();
        o.expect_play().returning(act.clone());

        let mut p = MockPlayer::new();
        p.expect_play().returning(act);

        let game = Game::new(MockBuilder(o), MockBuilder(p));

        assert_eq!(
            game.play(GameState::new(c)),
            Record {
                orange: "mock".into(),
                purple: "mock".into(),
                status,
                moves,
                board: *next.board(),
            }
        );
    }

    #[test]
    fn record_lists_the_plies() {
        let mut o = MockPlayer::new();
        o.expect_play()
            .returning(|s| s.moves(s.turn()).first().copied());

        let mut p = MockPlayer::new();
        p.expect_play().returning(|_| None);

        let game = Game::new(MockBuilder(o), MockBuilder(p));
        let record = game.play(GameState::new(catalog("*")));

        assert_eq!(record.status, Status::Win(Color::Orange));
        assert_eq!(record.moves, vec![Some(Move::new(0, Point::new(4, 4), false, 0)), None, None]);

        let text = record.to_string();
        assert!(text.contains("[Status \"orange wins\"]"));
        assert!(text.contains("p0r0@4,4 - -"));
    }

    #[test]
    fn configured_bots_play_to_completion() {
        let game = Game::new(PlayerConfig::Greedy, PlayerConfig::First);
        let record = game.play(GameState::default());

        assert!(record.status.is_terminal());
        assert_eq!(record.orange, PlayerConfig::Greedy.to_string());
        assert_eq!(record.purple, PlayerConfig::First.to_string());
        assert!(record.moves.iter().flatten().count() > 0);
    }
}

use crate::applet::load_catalog;
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::game::{GameState, Move};
use std::path::PathBuf;
use tracing::{instrument, warn};

/// Replays a sequence of moves and shows the resulting position.
#[derive(Debug, Parser)]
pub struct Replay {
    /// A file listing the pieces to play with, the standard ones by default.
    #[clap(short, long)]
    catalog: Option<PathBuf>,

    /// The moves to play in turn, written as `p{piece}r{rotation}[m]@{col},{row}`.
    moves: Vec<Move>,
}

impl Replay {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let state = self.replay()?;
        let turn = state.turn();

        let anchors: Vec<_> = state
            .legal_anchors(turn)
            .into_iter()
            .map(|p| p.to_string())
            .collect();

        println!("{}", state);
        println!("{} to move, anchors: {}", turn, anchors.join(" "));

        Ok(())
    }

    fn replay(&self) -> Result<GameState, Anyhow> {
        let catalog = load_catalog(self.catalog.as_deref())?;
        let mut state = GameState::new(catalog);

        for &m in &self.moves {
            if m.piece >= state.catalog().len() {
                anyhow::bail!("move `{m}` refers to a piece not in the catalog");
            }

            let turn = state.turn();
            if !state.make_move(m, turn) {
                warn!(player = %turn, %m, "illegal move counted as a pass");
            }
        }

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::game::{Color, Point, Status};

    #[test]
    fn moves_are_played_in_turn() {
        let replay = Replay::try_parse_from(["replay", "p0r0@4,4", "p0r0@9,9"]).unwrap();
        let state = replay.replay().unwrap();

        assert_eq!(state.turn(), Color::Orange);
        assert_eq!(state.board()[Point::new(4, 4)], Some(Color::Orange));
        assert_eq!(state.board()[Point::new(9, 9)], Some(Color::Purple));
        assert_eq!(state.status(), Status::Playing);
    }

    #[test]
    fn illegal_moves_are_passes() {
        let replay = Replay::try_parse_from(["replay", "p0r0@0,0"]).unwrap();
        let state = replay.replay().unwrap();

        assert!(state.skipped(Color::Orange));
        assert_eq!(state.turn(), Color::Purple);
        assert_eq!(state.score(Color::Orange), 0);
    }

    #[test]
    fn moves_far_off_the_board_are_passes() {
        let replay = Replay::try_parse_from(["replay", "p9r0@2147483647,0", "p9r0@0,-2147483648"]).unwrap();
        let state = replay.replay().unwrap();

        assert!(state.skipped(Color::Orange));
        assert!(state.skipped(Color::Purple));
        assert_eq!(state.board(), &lib::game::Board::new());
    }

    #[test]
    fn unknown_piece_is_an_error() {
        let replay = Replay::try_parse_from(["replay", "p21r0@4,4"]).unwrap();
        assert!(replay.replay().is_err());
    }

    #[test]
    fn malformed_move_is_rejected() {
        assert!(Replay::try_parse_from(["replay", "p0r0"]).is_err());
    }

    #[test]
    fn replay_prints_the_position() {
        let replay = Replay::try_parse_from(["replay", "p20r1m@3,3"]).unwrap();
        assert!(replay.execute().is_ok());
    }
}

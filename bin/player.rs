use derive_more::{Display, Error, From};
use lib::game::{GameState, Move};
use serde::{Deserialize, Serialize};
use std::{cmp::Reverse, str::FromStr};
use test_strategy::Arbitrary;

/// Trait for types that know how to pick a [`Move`] in a [`GameState`].
#[cfg_attr(test, mockall::automock)]
pub trait Player {
    /// Picks a [`Move`] for the side to move, or `None` to pass.
    fn play(&mut self, state: &GameState) -> Option<Move>;
}

/// Plays the first legal [`Move`] found.
#[derive(Debug, Default, Copy, Clone)]
pub struct First;

impl Player for First {
    fn play(&mut self, state: &GameState) -> Option<Move> {
        state.moves(state.turn()).into_iter().next()
    }
}

/// Plays the legal [`Move`] that covers the most cells.
#[derive(Debug, Default, Copy, Clone)]
pub struct Greedy;

impl Player for Greedy {
    fn play(&mut self, state: &GameState) -> Option<Move> {
        let catalog = state.catalog();

        // Ties go to the move found first.
        state
            .moves(state.turn())
            .into_iter()
            .min_by_key(|m| Reverse(catalog[m.piece].area()))
    }
}

/// The reason why parsing [`PlayerConfig`] failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse player configuration")]
pub struct ParsePlayerError(ron::de::SpannedError);

/// Runtime configuration for a [`Bot`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Arbitrary, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "lowercase")]
pub enum PlayerConfig {
    #[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
    First,

    #[display(fmt = "{}", "ron::ser::to_string(self).unwrap()")]
    Greedy,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig::Greedy
    }
}

impl FromStr for PlayerConfig {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}

/// A generic automated player.
#[derive(Debug, From)]
pub enum Bot {
    First(First),
    Greedy(Greedy),
}

impl From<PlayerConfig> for Bot {
    fn from(config: PlayerConfig) -> Self {
        match config {
            PlayerConfig::First => First.into(),
            PlayerConfig::Greedy => Greedy.into(),
        }
    }
}

impl Player for Bot {
    fn play(&mut self, state: &GameState) -> Option<Move> {
        match self {
            Bot::First(p) => p.play(state),
            Bot::Greedy(p) => p.play(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::game::{Catalog, Color, Point};
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_player_config_is_an_identity(c: PlayerConfig) {
        assert_eq!(c.to_string().parse(), Ok(c));
    }

    #[test]
    fn player_config_is_deserializable() {
        assert_eq!("first".parse(), Ok(PlayerConfig::First));
        assert_eq!("greedy".parse(), Ok(PlayerConfig::Greedy));
    }

    #[test]
    fn unknown_player_config_is_rejected() {
        assert!("minimax".parse::<PlayerConfig>().is_err());
    }

    #[test]
    fn bots_play_legal_moves() {
        for c in [PlayerConfig::First, PlayerConfig::Greedy] {
            let mut state = GameState::default();
            let mut bot = Bot::from(c);

            while !state.status().is_terminal() {
                let turn = state.turn();
                match bot.play(&state) {
                    Some(m) => assert!(state.make_move(m, turn)),
                    None => {
                        assert!(state.moves(turn).is_empty());
                        state.pass();
                    }
                }
            }
        }
    }

    #[test]
    fn first_plays_the_first_legal_move() {
        let state = GameState::default();
        assert_eq!(First.play(&state), state.moves(Color::Orange).first().copied());
    }

    #[test]
    fn greedy_prefers_larger_pieces() {
        let catalog: Catalog = "*\n\n***\n\n**".parse().unwrap();
        let state = GameState::new(catalog);
        let m = Greedy.play(&state).unwrap();

        assert_eq!(m.piece, 1);
        assert!(state.footprint(m).contains(&Point::new(4, 4)));
    }

    #[test]
    fn bots_pass_when_out_of_moves() {
        let catalog: Catalog = "*".parse().unwrap();
        let mut state = GameState::new(catalog);
        assert!(state.make_move(Move::new(0, Point::new(4, 4), false, 0), Color::Orange));
        state.pass();

        assert_eq!(First.play(&state), None);
        assert_eq!(Greedy.play(&state), None);
    }
}

use crate::{applet::load_catalog, game::Game, player::PlayerConfig};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::game::GameState;
use std::{num::NonZeroUsize, path::PathBuf};
use tracing::{info, instrument};

/// A match between two automated players.
#[derive(Debug, Parser)]
pub struct Play {
    /// How many games to play.
    #[clap(short = 'n', long, default_value = "1")]
    games: NonZeroUsize,

    /// A file listing the pieces to play with, the standard ones by default.
    #[clap(short, long)]
    catalog: Option<PathBuf>,

    /// The challenging player starts with the orange pieces.
    #[clap(default_value_t)]
    challenger: PlayerConfig,

    /// The defending player starts with the purple pieces.
    #[clap(default_value_t)]
    defender: PlayerConfig,
}

impl Default for Play {
    fn default() -> Self {
        Play {
            games: NonZeroUsize::MIN,
            catalog: None,
            challenger: PlayerConfig::default(),
            defender: PlayerConfig::default(),
        }
    }
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let catalog = load_catalog(self.catalog.as_deref())?;
        let players = [self.challenger, self.defender];
        let (mut wins, mut losses, mut ties) = (0, 0, 0);
        let mut records = Vec::with_capacity(self.games.into());

        for n in 0..self.games.into() {
            let game = Game::new(players[n % 2], players[(n + 1) % 2]);
            let record = game.play(GameState::new(catalog.clone()));

            let wl = [&mut wins, &mut losses];
            match record.status.winner() {
                Some(c) => *wl[(n + c as usize) % 2] += 1,
                _ => ties += 1,
            }

            info!(games = wins + losses + ties, wins, losses, ties);

            records.push(record);
        }

        for record in records {
            println!("{}\n", record);
        }

        Ok(())
    }
}

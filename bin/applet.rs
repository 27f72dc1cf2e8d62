use anyhow::{Context, Error as Anyhow};
use clap::Subcommand;
use derive_more::From;
use lib::game::Catalog;
use std::{fs, path::Path};
use tracing::debug;

mod play;
mod replay;

#[derive(From, Subcommand)]
pub enum Applet {
    Play(play::Play),
    Replay(replay::Replay),
}

impl Default for Applet {
    fn default() -> Self {
        play::Play::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Play(a) => a.execute(),
            Applet::Replay(a) => a.execute(),
        }
    }
}

/// Loads the [`Catalog`] at `path`, or the standard one if there is none.
fn load_catalog(path: Option<&Path>) -> Result<Catalog, Anyhow> {
    let Some(path) = path else {
        return Ok(Catalog::standard());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;

    let catalog: Catalog = text
        .parse()
        .with_context(|| format!("failed to parse `{}`", path.display()))?;

    debug!(path = %path.display(), pieces = catalog.len(), "loaded catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, process};

    #[test]
    fn missing_path_loads_the_standard_catalog() {
        assert_eq!(load_catalog(None).unwrap(), Catalog::standard());
    }

    #[test]
    fn catalog_is_loaded_from_file() {
        let path = env::temp_dir().join(format!("catalog-{}-ok.txt", process::id()));
        fs::write(&path, "*\n\n**\n*.\n").unwrap();

        let catalog = load_catalog(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.area(), 4);
    }

    #[test]
    fn unreadable_catalog_is_an_error() {
        let path = env::temp_dir().join(format!("catalog-{}-missing.txt", process::id()));
        assert!(load_catalog(Some(&path)).is_err());
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        let path = env::temp_dir().join(format!("catalog-{}-bad.txt", process::id()));
        fs::write(&path, "**\n*\n").unwrap();

        let result = load_catalog(Some(&path));
        fs::remove_file(&path).unwrap();

        assert!(result.is_err());
    }
}

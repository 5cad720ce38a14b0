pub mod card;
pub mod config;
pub mod console;
pub mod deck;
pub mod error;
pub mod layout;
pub mod loader;
pub mod metrics;
pub mod render;
pub mod text;

use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

pub use card::{Card, StoryType};
pub use config::DeckConfig;
pub use error::DeckError;
pub use render::CardLayout;

/// Initialize tracing (stderr, `RUST_LOG` or the default filter).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct GeneratedDeck {
    pub path: PathBuf,
    pub file_name: String,
    pub cards: Vec<Card>,
}

/// Full pipeline: load `input`, map cards, render, write `<base>.pdf`
/// into `out_dir`.
pub fn generate_from_csv(
    input: &Path,
    config: &DeckConfig,
    out_dir: &Path,
) -> Result<GeneratedDeck, DeckError> {
    let rows = loader::load_rows(input)?;
    let cards = card::map_cards(&rows);
    let file_name = config::output_file_name(input);

    let bytes = deck::generate_deck(&cards, &file_name, config)?;
    let path = deck::export_deck(&bytes, &file_name, out_dir)?;

    Ok(GeneratedDeck {
        path,
        file_name,
        cards,
    })
}

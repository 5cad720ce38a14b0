use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pivotal_cards_lib::{config, console, generate_from_csv, init_tracing, CardLayout, DeckConfig};

#[derive(Parser)]
#[command(
    name = "pivotal-cards",
    version,
    about = "Print tracker stories as planning-poker cards, four per A4 page"
)]
struct Cli {
    /// CSV export of the stories (first row is a header).
    csv: Option<PathBuf>,

    /// Card variant.
    #[arg(long, value_enum, default_value_t = CardLayout::Classic)]
    layout: CardLayout,

    /// TrueType font to embed (overrides PIVOTAL_CARDS_FONT).
    #[arg(long)]
    font: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(input) = cli.csv else {
        console::print_usage();
        return ExitCode::FAILURE;
    };

    init_tracing();
    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);

    let deck_config = DeckConfig::resolve(cli.layout, cli.font);
    let out_dir = PathBuf::from(".");

    match generate_from_csv(&input, &deck_config, &out_dir) {
        Ok(deck) => {
            console::print_summary(&deck.file_name, &deck.cards);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(input = %input.display(), error = %err, "Deck generation failed");
            console::print_failure(&err);
            ExitCode::FAILURE
        }
    }
}

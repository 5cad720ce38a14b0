use thiserror::Error;

/// Everything that can abort a deck generation run.
#[derive(Error, Debug)]
pub enum DeckError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Font error ({path}): {reason}")]
    Font { path: String, reason: String },

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("No stories found in {0} (only a header row, or empty)")]
    NoStories(String),
}

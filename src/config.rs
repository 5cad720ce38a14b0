use std::path::{Path, PathBuf};

use crate::render::CardLayout;

/// Application-level constants
pub const APP_NAME: &str = "pivotal-cards";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable naming a TrueType font to embed.
pub const FONT_ENV_VAR: &str = "PIVOTAL_CARDS_FONT";

/// File name looked up in font directories when no font is given explicitly.
pub const DEFAULT_FONT_FILE: &str = "DejaVuSans.ttf";

/// System locations where DejaVu Sans usually lives.
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/local/share/fonts/DejaVuSans.ttf",
    "/Library/Fonts/DejaVuSans.ttf",
];

// ─── Page geometry (points) ──────────────────────────────────────────────────

/// A4 landscape, in millimetres (printpdf page units).
pub const PAGE_WIDTH_MM: f32 = 297.0;
pub const PAGE_HEIGHT_MM: f32 = 210.0;

pub const MARGIN_TOP: f32 = 25.0;
pub const MARGIN_RIGHT: f32 = 25.0;
pub const MARGIN_BOTTOM: f32 = 50.0;
pub const MARGIN_LEFT: f32 = 25.0;

pub const GRID_COLUMNS: usize = 2;
pub const GRID_ROWS: usize = 2;
pub const CARDS_PER_PAGE: usize = GRID_COLUMNS * GRID_ROWS;
pub const GRID_GUTTER: f32 = 42.0;

/// Inset of the title box inside a card.
pub const CARD_PADDING: f32 = 12.0;

/// Footer baseline offset below the bottom content margin.
pub const FOOTER_OFFSET: f32 = 28.0;
/// Pulls the page counter in from the right bound.
pub const FOOTER_COUNTER_INSET: f32 = 16.0;
pub const FOOTER_FONT_SIZE: f32 = 10.0;

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "pivotal_cards=info,pivotal_cards_lib=info"
}

/// Settings for one deck generation run.
#[derive(Debug, Clone, Default)]
pub struct DeckConfig {
    pub layout: CardLayout,
    /// TrueType font to embed. `None` uses the built-in Helvetica.
    pub font_path: Option<PathBuf>,
}

impl DeckConfig {
    /// Builds a config, resolving the font from the explicit path, the
    /// environment and the usual font directories (first existing wins).
    pub fn resolve(layout: CardLayout, explicit_font: Option<PathBuf>) -> Self {
        let env_font = std::env::var_os(FONT_ENV_VAR).map(PathBuf::from);
        let font_path = resolve_font(explicit_font, env_font, &font_search_paths());
        if font_path.is_none() {
            tracing::warn!("No TrueType font found, falling back to built-in Helvetica");
        }
        Self { layout, font_path }
    }
}

/// Font directories searched after explicit and environment overrides.
pub fn font_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = dirs::font_dir() {
        paths.push(dir.join(DEFAULT_FONT_FILE));
    }
    paths.extend(SYSTEM_FONT_PATHS.iter().map(PathBuf::from));
    paths
}

/// Picks the first candidate that exists on disk.
///
/// An explicit path is returned even when missing so the font loader
/// reports it instead of silently falling back.
pub fn resolve_font(
    explicit: Option<PathBuf>,
    env: Option<PathBuf>,
    search: &[PathBuf],
) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }
    env.into_iter()
        .chain(search.iter().cloned())
        .find(|p| p.is_file())
}

/// `stories.csv` → `stories.pdf`. Only a trailing `.csv` is stripped; the
/// result always lands in the working directory.
pub fn output_file_name(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = name.strip_suffix(".csv").unwrap_or(&name);
    format!("{base}.pdf")
}

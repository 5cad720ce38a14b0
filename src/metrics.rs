//! Glyph advance widths for the font a deck is drawn with.
//!
//! Built-in Helvetica uses the standard Adobe width table; embedded
//! TrueType fonts are measured from their own `hmtx` table via
//! `ttf-parser`.

use crate::error::DeckError;

/// Helvetica advance widths (1/1000 em) for ASCII 32..=126.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

/// Width used for characters outside the ASCII table (Helvetica's widest
/// Latin-1 letters sit at or below this).
const HELVETICA_FALLBACK: u16 = 1000;

fn helvetica_width(c: char) -> u16 {
    match c {
        ' '..='~' => HELVETICA_WIDTHS[c as usize - 32],
        _ => HELVETICA_FALLBACK,
    }
}

/// Advance-width source for one font.
#[derive(Debug, Clone, Default)]
pub enum FontMetrics {
    #[default]
    Helvetica,
    TrueType { data: Vec<u8> },
}

impl FontMetrics {
    /// Validates `data` as a TrueType/OpenType face.
    pub fn from_ttf(data: Vec<u8>) -> Result<Self, ttf_parser::FaceParsingError> {
        ttf_parser::Face::parse(&data, 0)?;
        Ok(Self::TrueType { data })
    }

    /// Rendered width of `text` at `size` points.
    pub fn width(&self, text: &str, size: f32) -> f32 {
        match self {
            Self::Helvetica => {
                let units: u32 = text.chars().map(|c| u32::from(helvetica_width(c))).sum();
                units as f32 * size / 1000.0
            }
            Self::TrueType { data } => {
                // Validated in `from_ttf`; an unparsable face measures as
                // one em per char so text still truncates rather than spills.
                let Ok(face) = ttf_parser::Face::parse(data, 0) else {
                    return text.chars().count() as f32 * size;
                };
                let per_em = f32::from(face.units_per_em().max(1));
                let notdef = face
                    .glyph_hor_advance(ttf_parser::GlyphId(0))
                    .unwrap_or(face.units_per_em());
                let units: u32 = text
                    .chars()
                    .map(|c| {
                        face.glyph_index(c)
                            .and_then(|id| face.glyph_hor_advance(id))
                            .unwrap_or(notdef)
                    })
                    .map(u32::from)
                    .sum();
                units as f32 * size / per_em
            }
        }
    }
}

/// Reads and validates the TrueType font at `path`.
pub fn load_ttf(path: &std::path::Path) -> Result<(Vec<u8>, FontMetrics), DeckError> {
    let font_error = |reason: String| DeckError::Font {
        path: path.display().to_string(),
        reason,
    };
    let data = std::fs::read(path).map_err(|e| font_error(e.to_string()))?;
    let metrics = FontMetrics::from_ttf(data.clone()).map_err(|e| font_error(e.to_string()))?;
    Ok((data, metrics))
}

/// First usable TrueType font on this machine, if any.
#[cfg(test)]
pub(crate) fn system_ttf() -> Option<std::path::PathBuf> {
    crate::config::font_search_paths()
        .into_iter()
        .find(|p| p.is_file() && load_ttf(p).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helvetica_known_widths() {
        let m = FontMetrics::Helvetica;
        assert!((m.width("M", 10.0) - 8.33).abs() < 0.001);
        assert!((m.width("i", 10.0) - 2.22).abs() < 0.001);
        assert!((m.width("Bug", 1000.0) - (667.0 + 556.0 + 556.0)).abs() < 0.01);
        assert_eq!(m.width("", 12.0), 0.0);
    }

    #[test]
    fn test_helvetica_table_covers_printable_ascii() {
        for c in ' '..='~' {
            assert!(helvetica_width(c) > 0, "{c:?}");
        }
        assert_eq!(helvetica_width('~'), 584);
        assert_eq!(helvetica_width('é'), HELVETICA_FALLBACK);
    }

    #[test]
    fn test_capitals_are_wider_than_lowercase() {
        let m = FontMetrics::Helvetica;
        assert!(m.width("MMMM", 10.0) > m.width("iiii", 10.0) * 3.0);
    }

    #[test]
    fn test_garbage_is_not_a_font() {
        assert!(FontMetrics::from_ttf(b"definitely not a font".to_vec()).is_err());
    }

    #[test]
    fn test_load_ttf_rejects_garbage_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("fake.ttf");
        std::fs::write(&path, b"nope").unwrap();
        assert!(matches!(load_ttf(&path), Err(DeckError::Font { .. })));
    }

    #[test]
    fn test_truetype_widths_when_available() {
        let Some(path) = system_ttf() else {
            eprintln!("no system TrueType font; skipping");
            return;
        };
        let (_, metrics) = load_ttf(&path).unwrap();
        let wide = metrics.width("MMMMMMMMMM", 10.0);
        let narrow = metrics.width("iiiiiiiiii", 10.0);
        assert!(wide > narrow);
        assert!(wide > 0.0);
    }
}

//! Fixed text boxes.
//!
//! A box has a fixed origin, width and height. Text wraps at word
//! boundaries to the box width, measured with the deck font's advance
//! widths, and any lines that do not fit the height are dropped, with no
//! ellipsis.

use crate::metrics::FontMetrics;

/// Baseline-to-baseline distance as a fraction of the font size.
pub const LINE_SPACING: f32 = 1.2;
/// Distance from the top of a line box to its baseline.
pub const ASCENT: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// A fixed region in cell coordinates (points, origin bottom-left of the
/// cell). `top` is the y of the box's upper edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBox {
    pub x: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub size: f32,
    pub align: Align,
}

/// One line ready to draw, positioned at its baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub baseline: f32,
}

impl TextBox {
    pub fn new(x: f32, top: f32, width: f32, height: f32, size: f32) -> Self {
        Self {
            x,
            top,
            width,
            height,
            size,
            align: Align::Left,
        }
    }

    pub fn right_aligned(mut self) -> Self {
        self.align = Align::Right;
        self
    }

    pub fn line_height(&self) -> f32 {
        self.size * LINE_SPACING
    }

    /// Whole lines that fit the box height.
    pub fn max_lines(&self) -> usize {
        if self.height < self.size {
            return 0;
        }
        // The last line only needs its glyph height, not a full line gap.
        1 + ((self.height - self.size) / self.line_height()).floor() as usize
    }

    /// Wraps and truncates `text`, returning the lines that fit.
    pub fn fit(&self, text: &str, metrics: &FontMetrics) -> Vec<String> {
        let mut lines = wrap_text(text, self.width, |s| metrics.width(s, self.size));
        lines.truncate(self.max_lines());
        lines
    }

    /// Fitted lines with their draw positions, relative to the cell.
    pub fn layout(&self, text: &str, metrics: &FontMetrics) -> Vec<PlacedLine> {
        let first_baseline = self.top - self.size * ASCENT;
        self.fit(text, metrics)
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                let x = match self.align {
                    Align::Left => self.x,
                    Align::Right => {
                        self.x + (self.width - metrics.width(&line, self.size)).max(0.0)
                    }
                };
                PlacedLine {
                    text: line,
                    x,
                    baseline: first_baseline - i as f32 * self.line_height(),
                }
            })
            .collect()
    }
}

/// Word-wrap so no line measures wider than `max_width`. Hard line breaks
/// are kept and words wider than a line are split between characters.
pub fn wrap_text<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if measure(&candidate) <= max_width {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if measure(word) <= max_width {
                current = word.to_string();
                continue;
            }

            // At least one char per line so an absurdly narrow box still
            // makes progress.
            for c in word.chars() {
                let mut next = current.clone();
                next.push(c);
                if !current.is_empty() && measure(&next) > max_width {
                    lines.push(std::mem::replace(&mut current, c.to_string()));
                } else {
                    current = next;
                }
            }
        }

        lines.push(current);
    }

    // Drop trailing blank lines left by trailing newlines.
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_count(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn test_wrap_text() {
        let text = "This is a long sentence that should be wrapped at around forty characters or so.";
        let lines = wrap_text(text, 40.0, char_count);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 40);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_text_short() {
        let lines = wrap_text("Short", 40.0, char_count);
        assert_eq!(lines, vec!["Short"]);
    }

    #[test]
    fn test_wrap_text_empty() {
        assert!(wrap_text("", 40.0, char_count).is_empty());
        assert!(wrap_text("\n\n", 40.0, char_count).is_empty());
    }

    #[test]
    fn test_wrap_text_keeps_hard_breaks() {
        let lines = wrap_text("first\n\nthird", 40.0, char_count);
        assert_eq!(lines, vec!["first", "", "third"]);
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        let lines = wrap_text("ab abcdefghij", 4.0, char_count);
        assert_eq!(lines, vec!["ab", "abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_text_counts_chars_not_bytes() {
        let lines = wrap_text("ééé ééé", 7.0, char_count);
        assert_eq!(lines, vec!["ééé ééé"]);
    }

    #[test]
    fn test_body_box_capacity() {
        // Card body: 10pt in a 75pt-high box.
        let body = TextBox::new(12.0, 160.0, 357.0, 75.0, 10.0);
        assert_eq!(body.max_lines(), 6);
    }

    #[test]
    fn test_overflow_is_truncated_silently() {
        let metrics = FontMetrics::Helvetica;
        let body = TextBox::new(12.0, 160.0, 100.0, 30.0, 10.0);
        let lines = body.fit(&"word ".repeat(500), &metrics);
        assert_eq!(lines.len(), body.max_lines());
        assert!(lines.iter().all(|l| !l.contains('…')));
        assert!(lines.iter().all(|l| metrics.width(l, body.size) <= body.width));
    }

    #[test]
    fn test_wide_capitals_stay_inside_box() {
        let metrics = FontMetrics::Helvetica;
        let body = TextBox::new(12.0, 160.0, 357.0, 75.0, 10.0);

        let solid = "M".repeat(300);
        let lines = body.fit(&solid, &metrics);
        assert_eq!(lines.len(), body.max_lines());
        for line in &lines {
            assert!(metrics.width(line, body.size) <= body.width, "{line}");
        }
        // 357pt / 8.33pt per M.
        assert_eq!(lines[0].chars().count(), 42);

        let title = TextBox::new(12.0, 227.0, 350.9, 67.0, 20.0);
        let text = "Implement OAuth2 Login With Google Workspace SSO For Admins";
        for line in title.layout(text, &metrics) {
            assert!(line.x + metrics.width(&line.text, title.size) <= title.x + title.width);
        }
    }

    #[test]
    fn test_truetype_capitals_stay_inside_box() {
        let Some(path) = crate::metrics::system_ttf() else {
            eprintln!("no system TrueType font; skipping");
            return;
        };
        let (_, metrics) = crate::metrics::load_ttf(&path).unwrap();
        let body = TextBox::new(12.0, 160.0, 357.0, 75.0, 10.0);
        for line in body.layout(&"WM ".repeat(200), &metrics) {
            assert!(line.x + metrics.width(&line.text, body.size) <= body.x + body.width);
        }
    }

    #[test]
    fn test_box_too_short_draws_nothing() {
        let tiny = TextBox::new(0.0, 10.0, 100.0, 5.0, 10.0);
        assert!(tiny.fit("anything", &FontMetrics::Helvetica).is_empty());
    }

    #[test]
    fn test_layout_baselines_step_down() {
        let tb = TextBox::new(12.0, 100.0, 25.0, 100.0, 10.0);
        let lines = tb.layout("aaaa bbbb cccc", &FontMetrics::Helvetica);
        assert_eq!(lines.len(), 3);
        assert!((lines[0].baseline - 92.0).abs() < 0.001);
        assert!((lines[1].baseline - 80.0).abs() < 0.001);
        assert!(lines.iter().all(|l| l.baseline > tb.top - tb.height));
        assert!(lines.iter().all(|l| (l.x - 12.0).abs() < f32::EPSILON));
    }

    #[test]
    fn test_right_alignment_ends_at_box_edge() {
        let metrics = FontMetrics::Helvetica;
        let tb = TextBox::new(12.0, 50.0, 200.0, 20.0, 10.0).right_aligned();
        let lines = tb.layout("Bug", &metrics);
        assert_eq!(lines.len(), 1);
        let end = lines[0].x + metrics.width("Bug", 10.0);
        assert!((end - 212.0).abs() < 0.001);
    }
}

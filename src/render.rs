//! Card rendering.
//!
//! [`compose_card`] turns one card into a list of drawing operations in
//! cell-relative points; [`paint_card`] replays them onto a printpdf layer
//! at the cell's page offset. Every operation carries its own color, so
//! nothing set for one card carries over to the next.

use printpdf::path::PaintMode;
use printpdf::*;

use crate::card::{Card, StoryType};
use crate::config::CARD_PADDING;
use crate::layout::CellBox;
use crate::metrics::FontMetrics;
use crate::text::TextBox;

/// Card variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CardLayout {
    /// Labels, points and requester with prefixes, type name in the corner.
    #[default]
    Classic,
    /// Accent labels under the title, task list, bare right-aligned points.
    Tasks,
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8(pub u8, pub u8, pub u8);

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8(0x00, 0x00, 0x00);
    pub const BORDER: Rgb8 = Rgb8(0x66, 0x66, 0x66);
    pub const MUTED: Rgb8 = Rgb8(0x99, 0x99, 0x99);
    pub const ACCENT: Rgb8 = Rgb8(0xCC, 0x33, 0x00);

    pub const FEATURE: Rgb8 = Rgb8(0x00, 0xFF, 0x66);
    pub const CHORE: Rgb8 = Rgb8(0x66, 0x99, 0xFF);
    pub const BUG: Rgb8 = Rgb8(0xFF, 0x66, 0x66);
    pub const RELEASE: Rgb8 = Rgb8(0xFF, 0x99, 0xFF);

    pub fn to_color(self) -> Color {
        Color::Rgb(Rgb::new(
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
            None,
        ))
    }
}

/// Background for a story type; `None` leaves the card unfilled.
pub fn background_color(story_type: &StoryType) -> Option<Rgb8> {
    match story_type {
        StoryType::Feature => Some(Rgb8::FEATURE),
        StoryType::Chore => Some(Rgb8::CHORE),
        StoryType::Bug => Some(Rgb8::BUG),
        StoryType::Release => Some(Rgb8::RELEASE),
        StoryType::Other(_) => None,
    }
}

/// A drawing step in cell coordinates (points, origin bottom-left).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillCell { color: Rgb8 },
    StrokeCell { color: Rgb8 },
    Text {
        text: String,
        x: f32,
        baseline: f32,
        size: f32,
        color: Rgb8,
    },
}

impl DrawOp {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

// Fixed regions, measured from the cell's bottom-left corner.
const TITLE_SIZE: f32 = 20.0;
const BODY_TOP: f32 = 160.0;
const BODY_HEIGHT: f32 = 75.0;
const BODY_SIZE: f32 = 10.0;
const FIELD_X: f32 = 12.0;
/// Field boxes are narrower than the cell by this much.
const FIELD_INSET: f32 = 18.0;

struct Composer<'a> {
    ops: Vec<DrawOp>,
    metrics: &'a FontMetrics,
}

impl Composer<'_> {
    fn text(&mut self, text_box: TextBox, text: &str, color: Rgb8) {
        for line in text_box.layout(text, self.metrics) {
            self.ops.push(DrawOp::Text {
                text: line.text,
                x: line.x,
                baseline: line.baseline,
                size: text_box.size,
                color,
            });
        }
    }
}

/// Drawing operations for `card` in a `width` x `height` cell, with text
/// measured by `metrics`.
pub fn compose_card(
    card: &Card,
    layout: CardLayout,
    width: f32,
    height: f32,
    metrics: &FontMetrics,
) -> Vec<DrawOp> {
    let mut out = Composer {
        ops: Vec::new(),
        metrics,
    };

    if let Some(color) = background_color(&card.story_type) {
        out.ops.push(DrawOp::FillCell { color });
    }
    out.ops.push(DrawOp::StrokeCell { color: Rgb8::BORDER });

    let field_width = width - FIELD_INSET;
    let title_top = height - CARD_PADDING;

    match layout {
        CardLayout::Classic => {
            let title = TextBox::new(
                CARD_PADDING,
                title_top,
                width - CARD_PADDING * 2.0,
                title_top - BODY_TOP,
                TITLE_SIZE,
            );
            out.text(title, &card.title, Rgb8::BLACK);

            let body = TextBox::new(FIELD_X, BODY_TOP, field_width, BODY_HEIGHT, BODY_SIZE);
            out.text(body, &card.body, Rgb8::BLACK);

            let labels = TextBox::new(FIELD_X, 80.0, field_width, 30.0, 10.0);
            out.text(labels, &format!("Labels: {}", card.labels), Rgb8::BLACK);

            let points = TextBox::new(FIELD_X, 50.0, field_width, 24.0, 12.0);
            out.text(points, &format!("Points: {}", card.points), Rgb8::BLACK);

            let owner = TextBox::new(FIELD_X, 18.0, field_width, 10.0, 8.0);
            out.text(owner, &format!("Requester: {}", card.owner), Rgb8::BLACK);

            let kind = TextBox::new(FIELD_X, 18.0, field_width, 10.0, 8.0).right_aligned();
            out.text(kind, &card.story_type.display_name(), Rgb8::MUTED);
        }
        CardLayout::Tasks => {
            let title = TextBox::new(
                CARD_PADDING,
                title_top,
                width - CARD_PADDING * 2.0,
                title_top - 184.0,
                TITLE_SIZE,
            );
            out.text(title, &card.title, Rgb8::BLACK);

            let labels = TextBox::new(FIELD_X, 180.0, field_width, 16.0, 12.0);
            out.text(labels, &card.labels, Rgb8::ACCENT);

            let body = TextBox::new(FIELD_X, BODY_TOP, field_width, BODY_HEIGHT, BODY_SIZE);
            out.text(body, &card.body, Rgb8::BLACK);

            if !card.tasks.is_empty() {
                let tasks = TextBox::new(FIELD_X, 80.0, field_width, 42.0, 10.0);
                out.text(tasks, &format!("Tasks: {}", card.tasks), Rgb8::BLACK);
            }

            let points = TextBox::new(FIELD_X, 34.0, field_width, 17.0, 14.0).right_aligned();
            out.text(points, &card.points, Rgb8::BLACK);

            let owner = TextBox::new(FIELD_X, 18.0, field_width, 10.0, 8.0);
            out.text(owner, &format!("Requester: {}", card.owner), Rgb8::BLACK);
        }
    }

    out.ops
}

fn mm(points: f32) -> Mm {
    Mm::from(Pt(points))
}

fn cell_rect(cell: &CellBox, mode: PaintMode) -> Rect {
    Rect::new(
        mm(cell.left),
        mm(cell.bottom),
        mm(cell.right()),
        mm(cell.top()),
    )
    .with_mode(mode)
}

/// Replays `ops` onto `layer` inside `cell`.
pub fn paint_card(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    cell: &CellBox,
    ops: &[DrawOp],
) {
    for op in ops {
        match op {
            DrawOp::FillCell { color } => {
                layer.set_fill_color(color.to_color());
                layer.add_rect(cell_rect(cell, PaintMode::Fill));
            }
            DrawOp::StrokeCell { color } => {
                layer.set_outline_color(color.to_color());
                layer.set_outline_thickness(1.0);
                layer.add_rect(cell_rect(cell, PaintMode::Stroke));
            }
            DrawOp::Text {
                text,
                x,
                baseline,
                size,
                color,
            } => {
                layer.set_fill_color(color.to_color());
                layer.use_text(
                    text.as_str(),
                    *size,
                    mm(cell.left + x),
                    mm(cell.bottom + baseline),
                    font,
                );
            }
        }
    }
    layer.set_fill_color(Rgb8::BLACK.to_color());
}

//! Page/grid placement.
//!
//! Cards fill a 2x2 grid in reading order, four to a page. Placement only
//! depends on the card's sequence index; the running page state is passed
//! in and handed back explicitly by [`advance`].

use crate::config::{
    CARDS_PER_PAGE, GRID_COLUMNS, GRID_GUTTER, GRID_ROWS, MARGIN_BOTTOM, MARGIN_LEFT,
    MARGIN_RIGHT, MARGIN_TOP,
};

/// Where a card lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub page: usize,
    pub row: usize,
    pub column: usize,
    /// True for the first card of every page after the first.
    pub starts_page: bool,
}

/// Running pagination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationState {
    pub page: usize,
    pub cards_on_page: usize,
}

/// Number of pages needed for `cards`.
pub fn page_count(cards: usize) -> usize {
    cards.div_ceil(CARDS_PER_PAGE)
}

/// Places card `index` and returns the updated state.
pub fn advance(state: PaginationState, index: usize) -> (PaginationState, GridPosition) {
    let starts_page = index > 0 && index % CARDS_PER_PAGE == 0;
    let next = if starts_page {
        PaginationState {
            page: state.page + 1,
            cards_on_page: 1,
        }
    } else {
        PaginationState {
            page: state.page,
            cards_on_page: state.cards_on_page + 1,
        }
    };

    let slot = index % CARDS_PER_PAGE;
    let position = GridPosition {
        page: next.page,
        row: slot / GRID_COLUMNS,
        column: index % GRID_COLUMNS,
        starts_page,
    };
    (next, position)
}

/// Positions for `cards` cards, in input order.
pub fn paginate(cards: usize) -> Vec<GridPosition> {
    let mut state = PaginationState::default();
    let mut positions = Vec::with_capacity(cards);
    for index in 0..cards {
        let (next, position) = advance(state, index);
        tracing::debug!(
            index,
            page = position.page,
            row = position.row,
            column = position.column,
            "Placed card"
        );
        positions.push(position);
        state = next;
    }
    positions
}

/// Axis-aligned box in page points, origin bottom-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBox {
    pub left: f32,
    pub bottom: f32,
    pub width: f32,
    pub height: f32,
}

impl CellBox {
    pub fn top(&self) -> f32 {
        self.bottom + self.height
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

/// 2x2 card grid inside the page margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGrid {
    /// Content bounds (inside the margins).
    pub bounds: CellBox,
    pub gutter: f32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl PageGrid {
    /// Grid for a page of `width` x `height` points.
    pub fn for_page(width: f32, height: f32) -> Self {
        let bounds = CellBox {
            left: MARGIN_LEFT,
            bottom: MARGIN_BOTTOM,
            width: width - MARGIN_LEFT - MARGIN_RIGHT,
            height: height - MARGIN_TOP - MARGIN_BOTTOM,
        };
        let gutter = GRID_GUTTER;
        Self {
            bounds,
            gutter,
            cell_width: (bounds.width - gutter * (GRID_COLUMNS as f32 - 1.0)) / GRID_COLUMNS as f32,
            cell_height: (bounds.height - gutter * (GRID_ROWS as f32 - 1.0)) / GRID_ROWS as f32,
        }
    }

    /// Box of the cell at (`row`, `column`); row 0 is the top row.
    pub fn cell(&self, row: usize, column: usize) -> CellBox {
        let left = self.bounds.left + column as f32 * (self.cell_width + self.gutter);
        let top = self.bounds.top() - row as f32 * (self.cell_height + self.gutter);
        CellBox {
            left,
            bottom: top - self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        }
    }
}

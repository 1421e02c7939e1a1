use crate::config::Theme;
use crate::geometry::{Point, Rect};
use crate::input::DirectionalInput;
use crate::surface::Surface;
use crate::widget::Widget;

/// An interactive decision table: a fixed R×C grid with one highlighted
/// cell moved by directional input.
///
/// Both axes wrap, and horizontal movement carries into vertical movement
/// like an odometer: stepping right past the last column lands on column 0
/// of the next row, stepping left past column 0 lands on column 0 of the
/// previous row. Holding a single direction therefore visits every cell
/// before repeating.
pub struct Table {
    bounds: Rect,
    rows: u32,
    cols: u32,
    // Signed so a move may briefly leave range before wrapping pulls it back.
    sel_row: i32,
    sel_col: i32,
    theme: Theme,
}

impl Table {
    /// Builds a table over `bounds`. Row and column counts are clamped to at
    /// least 1, so the per-render cell dimension divisions are total.
    pub fn new(bounds: Rect, rows: u32, cols: u32, theme: Theme) -> Self {
        if rows == 0 {
            log::warn!("Table row count 0 clamped to 1");
        }
        if cols == 0 {
            log::warn!("Table column count 0 clamped to 1");
        }

        Self {
            bounds,
            rows: rows.max(1),
            cols: cols.max(1),
            sel_row: 0,
            sel_col: 0,
            theme,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Current selection as (row, column). Always in range.
    pub fn selection(&self) -> (u32, u32) {
        (self.sel_row as u32, self.sel_col as u32)
    }

    /// Steps the selected row forward or backward, wrapping at both edges.
    /// Never touches the column.
    pub fn move_vertical(&mut self, forward: bool) {
        if forward {
            self.sel_row += 1;
        } else {
            self.sel_row -= 1;
        }

        if self.sel_row < 0 {
            self.sel_row = self.rows as i32 - 1;
        } else if self.sel_row >= self.rows as i32 {
            self.sel_row = 0;
        }
    }

    /// Steps the selected column forward or backward. Crossing either edge
    /// resets the column to 0 and carries into a vertical step in the same
    /// direction, which itself wraps.
    pub fn move_horizontal(&mut self, forward: bool) {
        if forward {
            self.sel_col += 1;
        } else {
            self.sel_col -= 1;
        }

        if self.sel_col < 0 {
            self.sel_col = 0;
            self.move_vertical(false);
        } else if self.sel_col >= self.cols as i32 {
            self.sel_col = 0;
            self.move_vertical(true);
        }
    }
}

impl Widget for Table {
    /// One step per pressed direction, applied in the order up, down,
    /// left, right.
    fn update(&mut self, input: &DirectionalInput) {
        if input.up {
            self.move_vertical(false);
        }
        if input.down {
            self.move_vertical(true);
        }
        if input.left {
            self.move_horizontal(false);
        }
        if input.right {
            self.move_horizontal(true);
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        let rows = self.rows as f32;
        let cols = self.cols as f32;
        let border_size = self.bounds.w / (1.2 * cols);
        let cell_width = self.bounds.w / cols;
        let cell_height = self.bounds.h / rows;

        surface.fill_rect(self.bounds, self.theme.background);

        for i in 0..self.rows {
            let y = self.bounds.y + cell_height * i as f32;
            surface.line(
                Point::new(self.bounds.x, y),
                Point::new(self.bounds.right(), y),
                border_size,
                self.theme.border,
            );
        }

        for i in 0..self.cols {
            let x = self.bounds.x + cell_width * i as f32;
            surface.line(
                Point::new(x, self.bounds.y),
                Point::new(x, self.bounds.bottom()),
                border_size,
                self.theme.border,
            );
        }

        // The loops above already cover the top and left edges; the outline
        // redraws them along with the bottom and right ones.
        surface.rect_outline(self.bounds, border_size, self.theme.border);

        // Cells in row 0 or column 0 never show the highlight, even though
        // they are valid selections. Likewise, the column index feeds the
        // vertical pixel offset and the row index the horizontal one. Both
        // behaviors are kept deliberately; see DESIGN.md.
        if self.sel_col > 0 && self.sel_row > 0 {
            let y = self.bounds.y + cell_height * self.sel_col as f32;
            let x = self.bounds.x + cell_width * self.sel_row as f32;
            surface.rounded_rect(
                Rect::new(x, y, cell_width, cell_height),
                border_size,
                self.theme.selection,
            );
        }
    }
}

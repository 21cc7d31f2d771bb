use crate::config::{BOARD_MARGIN_X, BOARD_MARGIN_Y, MAX_CELL_SIZE};

/// Top edge of the board, below the title and control bar
pub const BOARD_TOP: f32 = 150.0;

/// BoardLayout maps between screen pixels and board cells
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_size: f32,
    pub rows: usize,
    pub cols: usize,
}

impl BoardLayout {
    /// Size cells to fit the viewport and center the board horizontally
    pub fn fit(viewport_width: f32, viewport_height: f32, rows: usize, cols: usize) -> Self {
        let cell_size = Self::cell_size_for(viewport_width, viewport_height, rows, cols);
        let board_width = cell_size * cols as f32;
        Self {
            origin_x: ((viewport_width - board_width) / 2.0).max(0.0),
            origin_y: BOARD_TOP,
            cell_size,
            rows,
            cols,
        }
    }

    /// Largest cell edge that fits both axes, capped at `MAX_CELL_SIZE`
    pub fn cell_size_for(viewport_width: f32, viewport_height: f32, rows: usize, cols: usize) -> f32 {
        let by_width = (viewport_width - BOARD_MARGIN_X) / cols.max(1) as f32;
        let by_height = (viewport_height - BOARD_MARGIN_Y) / rows.max(1) as f32;
        by_width.min(by_height).min(MAX_CELL_SIZE).max(1.0)
    }

    /// Convert screen coordinates to a signed (row, col).
    /// The result may lie outside the board; check with [`BoardLayout::contains`].
    pub fn cell_at(&self, screen_x: f32, screen_y: f32) -> (isize, isize) {
        let col = ((screen_x - self.origin_x) / self.cell_size).floor() as isize;
        let row = ((screen_y - self.origin_y) / self.cell_size).floor() as isize;
        (row, col)
    }

    pub fn contains(&self, row: isize, col: isize) -> bool {
        (0..self.rows as isize).contains(&row) && (0..self.cols as isize).contains(&col)
    }

    /// Convert a cell to the screen coordinates of its top-left corner
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.cell_size,
            self.origin_y + row as f32 * self.cell_size,
        )
    }

    /// Total board size in pixels
    pub fn board_size(&self) -> (f32, f32) {
        (self.cols as f32 * self.cell_size, self.rows as f32 * self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size_is_capped() {
        assert_eq!(BoardLayout::cell_size_for(4000.0, 4000.0, 30, 50), MAX_CELL_SIZE);
    }

    #[test]
    fn test_cell_size_follows_tighter_axis() {
        // width: (532 - 32) / 50 = 10, height: (800 - 200) / 30 = 20
        assert_eq!(BoardLayout::cell_size_for(532.0, 800.0, 30, 50), 10.0);
        // width: (1032 - 32) / 50 = 20, height: (350 - 200) / 30 = 5
        assert_eq!(BoardLayout::cell_size_for(1032.0, 350.0, 30, 50), 5.0);
    }

    #[test]
    fn test_cell_round_trip() {
        let layout = BoardLayout::fit(1000.0, 800.0, 30, 50);
        let (x, y) = layout.cell_origin(7, 12);
        let half = layout.cell_size / 2.0;
        assert_eq!(layout.cell_at(x + half, y + half), (7, 12));
    }

    #[test]
    fn test_points_off_board() {
        let layout = BoardLayout::fit(1000.0, 800.0, 30, 50);
        let (row, col) = layout.cell_at(layout.origin_x - 1.0, layout.origin_y - 1.0);
        assert_eq!((row, col), (-1, -1));
        assert!(!layout.contains(row, col));

        let (w, h) = layout.board_size();
        let (row, col) = layout.cell_at(layout.origin_x + w + 1.0, layout.origin_y + h + 1.0);
        assert_eq!((row, col), (30, 50));
        assert!(!layout.contains(row, col));
    }

    #[test]
    fn test_board_is_centered() {
        let layout = BoardLayout::fit(1000.0, 800.0, 30, 50);
        let (w, _) = layout.board_size();
        assert!((layout.origin_x * 2.0 + w - 1000.0).abs() < 0.01);
    }
}

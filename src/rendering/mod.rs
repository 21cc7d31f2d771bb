use macroquad::prelude::*;

use crate::application::{BoardLayout, Session};
use crate::domain::Grid;
use crate::ui::{BORDER_COLOR, Button, DEAD_COLOR, Dropdown, LIVE_COLOR, TEXT_COLOR};

const TITLE: &str = "Conway's Game of Life";

/// Draw every cell as a bordered square
pub fn draw_board(grid: &Grid, layout: &BoardLayout) {
    let size = layout.cell_size;
    let draw_borders = size >= 4.0;

    for (row, col, cell) in grid.iter_cells() {
        let (x, y) = layout.cell_origin(row, col);
        let color = if cell.is_alive() { LIVE_COLOR } else { DEAD_COLOR };
        draw_rectangle(x, y, size, size, color);
        if draw_borders {
            draw_rectangle_lines(x, y, size, size, 1.0, BORDER_COLOR);
        }
    }
}

/// Centered page title
pub fn draw_title() {
    let font_size = if screen_width() < 700.0 { 24 } else { 36 };
    let measure = measure_text(TITLE, None, font_size, 1.0);
    draw_text(
        TITLE,
        (screen_width() - measure.width) / 2.0,
        50.0,
        font_size as f32,
        TEXT_COLOR,
    );
}

/// Generation, population and playback status under the board
pub fn draw_status(session: &Session, layout: &BoardLayout) {
    let (_, board_height) = layout.board_size();
    let y = layout.origin_y + board_height + 24.0;
    let status = format!(
        "Generation {}   Population {}   {} ({}ms)   {}",
        session.engine.generation(),
        session.engine.population(),
        session.speed.label(),
        session.speed.millis(),
        if session.is_playing() { "Running" } else { "Paused" },
    );
    draw_text(&status, layout.origin_x, y, 18.0, TEXT_COLOR);
}

/// Draw the control bar; the dropdown goes last so its menu sits on top
pub fn draw_controls(buttons: &[Button], dropdown: &Dropdown, mouse_pos: (f32, f32)) {
    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    dropdown.draw(mouse_pos);
}

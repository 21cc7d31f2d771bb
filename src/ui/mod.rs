mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use macroquad::prelude::Color;

use crate::config::PlaybackSpeed;

pub const BUTTON_WIDTH: f32 = 110.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const DROPDOWN_WIDTH: f32 = 140.0;
pub const CONTROL_GAP: f32 = 16.0;
pub const CONTROL_BAR_Y: f32 = 80.0;

/// Board palette
pub const LIVE_COLOR: Color = Color::new(0.482, 0.776, 0.933, 1.0); // #7bc6ee
pub const DEAD_COLOR: Color = Color::new(0.024, 0.169, 0.263, 1.0); // #062b43
pub const BORDER_COLOR: Color = Color::new(0.314, 0.584, 0.914, 1.0); // #5095e9
pub const BACKGROUND_COLOR: Color = Color::new(0.941, 0.969, 1.0, 1.0);
pub const TEXT_COLOR: Color = Color::new(0.05, 0.05, 0.08, 1.0);

/// Indices into the button row
pub const PLAY_BUTTON: usize = 0;
pub const SEED_BUTTON: usize = 1;
pub const CLEAR_BUTTON: usize = 2;

/// Point-in-rectangle test shared by the widgets
pub fn hit(x: f32, y: f32, width: f32, height: f32, pos: (f32, f32)) -> bool {
    pos.0 >= x && pos.0 <= x + width && pos.1 >= y && pos.1 <= y + height
}

/// Left edge of the centered control bar
pub fn control_bar_x(screen_width: f32) -> f32 {
    let total = 3.0 * BUTTON_WIDTH + DROPDOWN_WIDTH + 3.0 * CONTROL_GAP;
    ((screen_width - total) / 2.0).max(0.0)
}

/// X position of the speed dropdown
pub fn speed_dropdown_x(screen_width: f32) -> f32 {
    control_bar_x(screen_width) + 3.0 * (BUTTON_WIDTH + CONTROL_GAP)
}

/// Play/Pause, Seed and Clear, left to right
pub fn create_buttons(screen_width: f32, is_playing: bool) -> Vec<Button> {
    let x = control_bar_x(screen_width);
    let play_label = if is_playing { "Pause" } else { "Play" };
    [play_label, "Seed", "Clear"]
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let bx = x + i as f32 * (BUTTON_WIDTH + CONTROL_GAP);
            Button::new(bx, CONTROL_BAR_Y, BUTTON_WIDTH, BUTTON_HEIGHT, *label)
        })
        .collect()
}

/// Speed selector listing the presets in `PlaybackSpeed::ALL` order
pub fn speed_dropdown(screen_width: f32, selected: PlaybackSpeed) -> Dropdown {
    let items = PlaybackSpeed::ALL.iter().map(|s| s.label().to_string()).collect();
    let mut dropdown = Dropdown::new(
        speed_dropdown_x(screen_width),
        CONTROL_BAR_Y + 5.0,
        DROPDOWN_WIDTH,
        "Speed",
        items,
    );
    dropdown.set_selected(selected.index());
    dropdown
}

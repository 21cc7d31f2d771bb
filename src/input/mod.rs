use log::warn;
use macroquad::prelude::*;

use crate::application::{BoardLayout, Session};
use crate::config::PlaybackSpeed;
use crate::ui::{self, Button};

/// Drag editing: pressing on a cell toggles it, and every other cell the
/// pointer enters while held is toggled once on entry.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragToggle {
    held: bool,
    last: Option<(isize, isize)>,
}

impl DragToggle {
    pub fn is_dragging(&self) -> bool {
        self.held
    }

    /// Pointer went down over `cell` (None when off the board).
    /// Returns the cell to toggle.
    pub fn press(&mut self, cell: Option<(isize, isize)>) -> Option<(isize, isize)> {
        self.held = cell.is_some();
        self.last = cell;
        cell
    }

    /// Pointer is over `cell` while the button may still be held
    pub fn hover(&mut self, cell: Option<(isize, isize)>) -> Option<(isize, isize)> {
        if !self.held || cell == self.last {
            return None;
        }
        self.last = cell;
        cell
    }

    pub fn release(&mut self) {
        self.held = false;
        self.last = None;
    }
}

/// Feed the pointer state for this frame into the drag editor
pub fn handle_pointer(
    session: &mut Session,
    drag: &mut DragToggle,
    layout: &BoardLayout,
    mouse_pos: (f32, f32),
) {
    let (row, col) = layout.cell_at(mouse_pos.0, mouse_pos.1);
    let cell = layout.contains(row, col).then_some((row, col));

    let target = if is_mouse_button_pressed(MouseButton::Left) {
        drag.press(cell)
    } else if is_mouse_button_down(MouseButton::Left) {
        drag.hover(cell)
    } else {
        drag.release();
        None
    };

    if let Some((row, col)) = target {
        if let Err(err) = session.toggle_cell(row, col) {
            warn!("Ignoring edit: {}", err);
        }
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(session: Session) -> Session {
    type KeyAction = (KeyCode, fn(Session) -> Session);

    let actions: [KeyAction; 7] = [
        (KeyCode::Space, Session::toggle_playing),
        (KeyCode::R, Session::seed),
        (KeyCode::C, Session::clear),
        (KeyCode::Key1, |s| s.set_speed(PlaybackSpeed::Slow)),
        (KeyCode::Key2, |s| s.set_speed(PlaybackSpeed::Medium)),
        (KeyCode::Key3, |s| s.set_speed(PlaybackSpeed::Fast)),
        (KeyCode::Key4, |s| s.set_speed(PlaybackSpeed::Lightning)),
    ];

    actions.iter().fold(session, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(session: Session, buttons: &[Button], mouse_pos: (f32, f32)) -> Session {
    buttons
        .iter()
        .enumerate()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .fold(session, |s, (idx, _)| match idx {
            ui::PLAY_BUTTON => s.toggle_playing(),
            ui::SEED_BUTTON => s.seed(),
            ui::CLEAR_BUTTON => s.clear(),
            _ => s,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_toggles_pressed_cell() {
        let mut drag = DragToggle::default();
        assert_eq!(drag.press(Some((2, 3))), Some((2, 3)));
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_drag_toggles_each_entered_cell_once() {
        let mut drag = DragToggle::default();
        drag.press(Some((0, 0)));
        assert_eq!(drag.hover(Some((0, 0))), None);
        assert_eq!(drag.hover(Some((0, 1))), Some((0, 1)));
        assert_eq!(drag.hover(Some((0, 1))), None);
        assert_eq!(drag.hover(Some((1, 1))), Some((1, 1)));
    }

    #[test]
    fn test_leaving_and_reentering_toggles_again() {
        let mut drag = DragToggle::default();
        drag.press(Some((4, 4)));
        assert_eq!(drag.hover(None), None);
        assert_eq!(drag.hover(Some((4, 4))), Some((4, 4)));
    }

    #[test]
    fn test_no_toggles_after_release() {
        let mut drag = DragToggle::default();
        drag.press(Some((1, 1)));
        drag.release();
        assert!(!drag.is_dragging());
        assert_eq!(drag.hover(Some((1, 2))), None);
    }

    #[test]
    fn test_press_off_board_does_not_start_drag() {
        let mut drag = DragToggle::default();
        assert_eq!(drag.press(None), None);
        assert_eq!(drag.hover(Some((0, 0))), None);
    }
}

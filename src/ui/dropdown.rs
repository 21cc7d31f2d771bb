use macroquad::prelude::*;

use super::{BORDER_COLOR, DEAD_COLOR, TEXT_COLOR, hit};

const FONT_SIZE: f32 = 16.0;

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            height: 30.0,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set selected index; out-of-range indices are ignored
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Whether the pointer is over the dropdown or its open menu
    pub fn is_hovered_any(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered_main(mouse_pos)
            || (self.is_open && (0..self.items.len()).any(|i| self.is_hovered_item(mouse_pos, i)))
    }

    /// Draw dropdown without handling interaction
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, TEXT_COLOR);

        let button_color = if self.is_hovered_main(mouse_pos) {
            Color::from_rgba(12, 70, 108, 255)
        } else {
            DEAD_COLOR
        };
        draw_rectangle(self.x, self.y, self.width, self.height, button_color);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, BORDER_COLOR);

        let text = self.items.get(self.selected).map(String::as_str).unwrap_or("");
        draw_text(text, self.x + 6.0, self.y + 21.0, FONT_SIZE, WHITE);
        draw_text("v", self.x + self.width - 16.0, self.y + 20.0, FONT_SIZE, WHITE);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * self.height;
        draw_rectangle(self.x, self.y + self.height, self.width, menu_height, DEAD_COLOR);

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.item_y(i);
            let item_color = if self.is_hovered_item(mouse_pos, i) {
                Color::from_rgba(12, 70, 108, 255)
            } else if i == self.selected {
                Color::from_rgba(9, 56, 88, 255)
            } else {
                DEAD_COLOR
            };

            draw_rectangle(self.x, item_y, self.width, self.height, item_color);
            draw_text(item, self.x + 6.0, item_y + 21.0, FONT_SIZE, WHITE);
        }

        draw_rectangle_lines(self.x, self.y + self.height, self.width, menu_height, 2.0, BORDER_COLOR);
    }

    /// Handle interaction and return true if selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        if !is_mouse_button_pressed(MouseButton::Left) {
            return false;
        }

        if self.is_hovered_main(mouse_pos) {
            self.is_open = !self.is_open;
            return false;
        }

        if !self.is_open {
            return false;
        }

        let clicked = (0..self.items.len()).find(|&i| self.is_hovered_item(mouse_pos, i));
        self.is_open = false;
        match clicked {
            Some(i) if i != self.selected => {
                self.selected = i;
                true
            }
            _ => false,
        }
    }

    fn item_y(&self, index: usize) -> f32 {
        self.y + self.height + index as f32 * self.height
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        hit(self.x, self.y, self.width, self.height, mouse_pos)
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        hit(self.x, self.item_y(index), self.width, self.height, mouse_pos)
    }
}

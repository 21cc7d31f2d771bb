use std::time::Duration;

use life_board::{
    BoardLayout, PlaybackSpeed, Session, SimulationConfig,
    input::{self, DragToggle},
    rendering,
    ui::{self, BACKGROUND_COLOR},
};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: 1100,
        window_height: 850,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = SimulationConfig::default();
    log::info!("Board {}x{}", config.rows, config.cols);

    let mut session = Session::new(config);
    let mut drag = DragToggle::default();
    let mut speed_dropdown = ui::speed_dropdown(screen_width(), session.speed);

    loop {
        let mouse_pos = mouse_position();
        let layout = BoardLayout::fit(screen_width(), screen_height(), config.rows, config.cols);
        let buttons = ui::create_buttons(screen_width(), session.is_playing());
        speed_dropdown.set_position(ui::speed_dropdown_x(screen_width()), ui::CONTROL_BAR_Y + 5.0);

        // The open menu overlaps the board, so it swallows the click
        let dropdown_has_pointer = speed_dropdown.is_hovered_any(mouse_pos);
        if speed_dropdown.update(mouse_pos) {
            let speed = PlaybackSpeed::ALL[speed_dropdown.selected()];
            session = session.set_speed(speed);
        }

        session = input::process_button_clicks(session, &buttons, mouse_pos);
        session = input::process_keyboard_input(session);
        speed_dropdown.set_selected(session.speed.index());
        if dropdown_has_pointer || speed_dropdown.is_open() {
            drag.release();
        } else {
            input::handle_pointer(&mut session, &mut drag, &layout, mouse_pos);
        }

        session = session.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(BACKGROUND_COLOR);
        rendering::draw_title();
        rendering::draw_board(session.engine.grid(), &layout);
        rendering::draw_status(&session, &layout);
        rendering::draw_controls(&buttons, &speed_dropdown, mouse_pos);

        next_frame().await;
    }
}

//! Panel Demo: The test screen running against a live terminal.
//!
//! Opens a display, attaches the demo test screen, and runs a
//! quit-on-signal render loop: clear background, draw the panel tree,
//! blit it centered, present, throttle.

use panelkit::{Buffer, Display, Event, KeyCode, Rgb, TestScreen, UiElement};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut display = Display::new()?;
    let mut screen = TestScreen::new(display.width(), display.height());
    screen.attach_screen(display.width(), display.height());

    let mut frame = Buffer::new(display.width(), display.height());
    let mut running = true;

    while running {
        while let Some(event) = display.poll_event(Duration::ZERO)? {
            match event {
                Event::Key { code, modifiers } => match code {
                    KeyCode::Esc | KeyCode::Char('q') => running = false,
                    KeyCode::Char('c') if modifiers.control => running = false,
                    _ => {}
                },
                // The demo layout is fixed-size; keep drawing into the
                // original frame on resize.
                Event::Resize { .. } => {}
            }
        }

        display.begin_frame();
        frame.fill(Rgb::WHITE);
        screen.draw()?;
        frame.blit(screen.surface(), screen.center()?);
        display.present(&frame)?;
        display.end_frame();
    }

    Ok(())
}

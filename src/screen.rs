//! `TestScreen`: A demo composition of panels into a full-screen layout.
//!
//! The screen owns a surface sized to 90% of the attached display and
//! composes a bordered main panel with a default-styled text panel on it.
//! Drawing requires a screen to be attached first; operating without one is
//! a precondition violation.

use crate::buffer::{Buffer, Rgb};
use crate::error::UiError;
use crate::layout::{align, Anchor, HAlign, Rect};
use crate::widget::{Panel, TextStyle, UiElement};

/// Fraction of the attached screen the demo surface occupies (9/10).
const SURFACE_SCALE_NUM: u32 = 9;
const SURFACE_SCALE_DEN: u32 = 10;

/// A demo screen composing panels into a full-screen layout.
pub struct TestScreen {
    surface: Buffer,
    screen_size: Option<(u16, u16)>,
}

impl TestScreen {
    /// Create a test screen for a display of the given size.
    ///
    /// The screen's own surface takes 90% of the display in each
    /// dimension.
    pub fn new(screen_width: u16, screen_height: u16) -> Self {
        let width = scaled(screen_width);
        let height = scaled(screen_height);
        Self {
            surface: Buffer::new(width, height),
            screen_size: None,
        }
    }

    /// Attach the screen this surface will be drawn on.
    pub fn attach_screen(&mut self, width: u16, height: u16) {
        log::debug!("test screen attached to {width}x{height} display");
        self.screen_size = Some((width, height));
    }

    /// Whether a screen has been attached.
    pub const fn is_attached(&self) -> bool {
        self.screen_size.is_some()
    }

    /// Compose the panel tree onto this screen's surface.
    ///
    /// # Errors
    ///
    /// Fails with [`UiError::ScreenNotAttached`] if no screen has been
    /// attached yet.
    pub fn draw(&mut self) -> Result<(), UiError> {
        self.screen_frame()?;

        // Main panel spans the whole surface, centered on it.
        let mut main_panel = Panel::new(self.width(), self.height());
        main_panel.fill(Rgb::BEIGE);
        main_panel.add_border(1, Rgb::DARK_BROWN);
        let main_at = main_panel.center_of(self.surface.frame(), 0);
        self.surface.blit(main_panel.surface(), main_at);

        // Text panel anchored at the top of the main panel.
        let panel_width = main_panel.width().saturating_sub(8).max(12);
        let panel_height = (main_panel.height() / 2).max(6);
        let mut panel = Panel::new(panel_width, panel_height);
        panel.apply_default_style();
        panel.add_text(
            "This is some testing text.",
            &TextStyle::new(Rgb::BLACK),
            Anchor::TopRight,
            3,
        );
        panel.add_multiline_text(
            "Panels place text\nacross nine anchors\nwith symmetric padding",
            &TextStyle::new(Rgb::BLACK),
            Anchor::Center,
            3,
            1,
            HAlign::Center,
        );

        let panel_at = panel.align(self.surface.frame(), Anchor::Top, 2);
        self.surface.blit(panel.surface(), panel_at);

        Ok(())
    }

    /// The rectangle at which this surface sits centered on the attached
    /// screen.
    ///
    /// # Errors
    ///
    /// Fails with [`UiError::ScreenNotAttached`] if no screen has been
    /// attached yet.
    pub fn center(&self) -> Result<Rect, UiError> {
        let screen = self.screen_frame()?;
        Ok(align(self.size(), screen, Anchor::Center, 0))
    }

    fn screen_frame(&self) -> Result<Rect, UiError> {
        self.screen_size
            .map(|(w, h)| Rect::from_size(w, h))
            .ok_or(UiError::ScreenNotAttached)
    }
}

impl UiElement for TestScreen {
    fn width(&self) -> u16 {
        self.surface.width()
    }

    fn height(&self) -> u16 {
        self.surface.height()
    }

    fn surface(&self) -> &Buffer {
        &self.surface
    }
}

/// Scale a screen dimension to the surface fraction, at least one cell.
#[allow(clippy::cast_possible_truncation)]
fn scaled(dim: u16) -> u16 {
    ((u32::from(dim) * SURFACE_SCALE_NUM / SURFACE_SCALE_DEN) as u16).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_surface_is_scaled() {
        let screen = TestScreen::new(100, 40);
        assert_eq!(screen.size(), (90, 36));
        assert_eq!(screen.frame(), Rect::new(0, 0, 90, 36));
    }

    #[test]
    fn test_screen_draw_requires_attachment() {
        let mut screen = TestScreen::new(100, 40);
        assert_eq!(screen.draw(), Err(UiError::ScreenNotAttached));
        assert_eq!(screen.center().unwrap_err(), UiError::ScreenNotAttached);
    }

    #[test]
    fn test_screen_draw_after_attachment() {
        let mut screen = TestScreen::new(100, 40);
        screen.attach_screen(100, 40);
        assert!(screen.is_attached());
        screen.draw().unwrap();

        // Main panel fill shows through outside the text panel
        let surface = screen.surface();
        assert_eq!(surface.get(0, 0).unwrap().bg(), Rgb::DARK_BROWN);
        assert_eq!(surface.get(2, 30).unwrap().bg(), Rgb::BEIGE);
    }

    #[test]
    fn test_screen_center_on_display() {
        let mut screen = TestScreen::new(100, 40);
        screen.attach_screen(100, 40);
        let at = screen.center().unwrap();
        assert_eq!((at.width, at.height), (90, 36));
        assert_eq!(at.center(), Rect::from_size(100, 40).center());
    }
}

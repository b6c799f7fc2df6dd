//! Bar: A minimal fixed-size colored surface.

use super::traits::UiElement;
use crate::buffer::{Buffer, Rgb};

/// A plain rectangular element with a flat color.
///
/// Bars carry no content of their own; they exist to be aligned and
/// composited, e.g. as separators or backdrop strips.
#[derive(Debug, Clone)]
pub struct Bar {
    surface: Buffer,
}

impl Bar {
    /// Create a bar with default (empty) surface contents.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            surface: Buffer::new(width, height),
        }
    }

    /// Create a bar filled with a flat color.
    pub fn with_color(width: u16, height: u16, color: Rgb) -> Self {
        let mut bar = Self::new(width, height);
        bar.surface.fill(color);
        bar
    }

    /// Fill the bar with a flat color.
    pub fn fill(&mut self, color: Rgb) {
        self.surface.fill(color);
    }
}

impl UiElement for Bar {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;

    #[test]
    fn test_bar_basic() {
        let bar = Bar::new(12, 3);
        assert_eq!(bar.size(), (12, 3));
        assert_eq!(bar.frame(), Rect::new(0, 0, 12, 3));
    }

    #[test]
    fn test_bar_with_color() {
        let bar = Bar::with_color(6, 2, Rgb::DARK_BROWN);
        assert!(bar.surface().cells().iter().all(|c| c.bg() == Rgb::DARK_BROWN));
    }
}

//! Panel: A composable rectangular region with fill, border, and text.
//!
//! A panel owns its surface. Content is mutated in place by drawing
//! operations; the panel's size never changes after construction. Panels
//! are composited onto a parent surface at a rectangle computed by the
//! alignment family.

use super::text::{render_line, render_multiline, TextStyle};
use super::traits::UiElement;
use crate::buffer::{Buffer, Cell, Rgb};
use crate::error::UiError;
use crate::layout::{align, Anchor, HAlign, Rect};

/// Default panel fill color (off-white).
pub const DEFAULT_FILL: Rgb = Rgb::OFF_WHITE;
/// Default panel border color (black).
pub const DEFAULT_BORDER: Rgb = Rgb::BLACK;
/// Default panel border thickness in cells.
pub const DEFAULT_BORDER_WIDTH: u16 = 2;

/// A rectangular drawable region supporting fill, border, and text
/// composition.
#[derive(Debug, Clone)]
pub struct Panel {
    surface: Buffer,
}

impl Panel {
    /// Create an empty panel of the given size.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            surface: Buffer::new(width, height),
        }
    }

    /// Fill the entire panel surface with a flat color.
    pub fn fill(&mut self, color: Rgb) {
        self.surface.fill(color);
    }

    /// Stroke a border of the given thickness along the panel's outer frame.
    pub fn add_border(&mut self, width: u16, color: Rgb) {
        let frame = self.surface.frame();
        self.surface.stroke_rect(frame, width, Cell::EMPTY.with_bg(color));
    }

    /// Apply the default panel styling: off-white fill, 2-cell black border.
    pub fn apply_default_style(&mut self) {
        self.fill(DEFAULT_FILL);
        self.add_border(DEFAULT_BORDER_WIDTH, DEFAULT_BORDER);
    }

    /// Render a line of text and composite it at an anchor inside the
    /// panel's padded bounds.
    ///
    /// The text surface keeps the panel's existing background under its
    /// glyphs.
    pub fn add_text(&mut self, text: &str, style: &TextStyle, anchor: Anchor, padding: u16) {
        let rendered = render_line(text, style);
        let at = align(
            (rendered.width(), rendered.height()),
            self.surface.frame(),
            anchor,
            padding,
        );
        self.surface.blit_transparent(&rendered, at);
    }

    /// String-keyed variant of [`add_text`](Self::add_text).
    ///
    /// Accepts the anchor vocabulary by name (`"center"`, `"top"`,
    /// `"topleft"`, `"top_left"`, ...); an unrecognized name fails with
    /// [`UiError::InvalidAnchor`].
    pub fn add_text_at(
        &mut self,
        text: &str,
        style: &TextStyle,
        position: &str,
        padding: u16,
    ) -> Result<(), UiError> {
        let anchor = position.parse::<Anchor>()?;
        self.add_text(text, style, anchor, padding);
        Ok(())
    }

    /// Render multi-line text and composite it at an anchor inside the
    /// panel's padded bounds.
    ///
    /// Lines are stacked with `line_spacing` blank rows between them and
    /// horizontally aligned within the widest line per `halign`.
    pub fn add_multiline_text(
        &mut self,
        text: &str,
        style: &TextStyle,
        anchor: Anchor,
        padding: u16,
        line_spacing: u16,
        halign: HAlign,
    ) {
        let rendered = render_multiline(text, style, line_spacing, halign);
        let at = align(
            (rendered.width(), rendered.height()),
            self.surface.frame(),
            anchor,
            padding,
        );
        self.surface.blit_transparent(&rendered, at);
    }

    /// String-keyed variant of [`add_multiline_text`](Self::add_multiline_text).
    pub fn add_multiline_text_at(
        &mut self,
        text: &str,
        style: &TextStyle,
        position: &str,
        padding: u16,
        line_spacing: u16,
        halign: &str,
    ) -> Result<(), UiError> {
        let anchor = position.parse::<Anchor>()?;
        let halign = halign.parse::<HAlign>()?;
        self.add_multiline_text(text, style, anchor, padding, line_spacing, halign);
        Ok(())
    }

    /// Compute the rectangle at which this panel should be composited onto
    /// a target so the named anchors coincide.
    ///
    /// `padding` shrinks the target symmetrically before the anchor point
    /// is computed; it moves the result, never resizes it.
    pub fn align(&self, target: Rect, anchor: Anchor, padding: u16) -> Rect {
        align(self.size(), target, anchor, padding)
    }

    /// String-keyed variant of [`align`](Self::align), case-insensitive.
    pub fn align_named(&self, target: Rect, position: &str, padding: u16) -> Result<Rect, UiError> {
        Ok(self.align(target, position.parse::<Anchor>()?, padding))
    }

    /// Centered on the target.
    pub fn center_of(&self, target: Rect, padding: u16) -> Rect {
        self.align(target, Anchor::Center, padding)
    }

    /// Against the middle of the target's top edge.
    pub fn top_of(&self, target: Rect, padding: u16) -> Rect {
        self.align(target, Anchor::Top, padding)
    }

    /// Against the middle of the target's bottom edge.
    pub fn bottom_of(&self, target: Rect, padding: u16) -> Rect {
        self.align(target, Anchor::Bottom, padding)
    }

    /// Against the middle of the target's left edge.
    pub fn left_of(&self, target: Rect, padding: u16) -> Rect {
        self.align(target, Anchor::Left, padding)
    }

    /// Against the middle of the target's right edge.
    pub fn right_of(&self, target: Rect, padding: u16) -> Rect {
        self.align(target, Anchor::Right, padding)
    }

    /// In the target's top-left corner.
    pub fn top_left_of(&self, target: Rect, padding: u16) -> Rect {
        self.align(target, Anchor::TopLeft, padding)
    }

    /// In the target's top-right corner.
    pub fn top_right_of(&self, target: Rect, padding: u16) -> Rect {
        self.align(target, Anchor::TopRight, padding)
    }

    /// In the target's bottom-left corner.
    pub fn bottom_left_of(&self, target: Rect, padding: u16) -> Rect {
        self.align(target, Anchor::BottomLeft, padding)
    }

    /// In the target's bottom-right corner.
    pub fn bottom_right_of(&self, target: Rect, padding: u16) -> Rect {
        self.align(target, Anchor::BottomRight, padding)
    }
}

impl UiElement for Panel {
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

    #[test]
    fn test_panel_frame_invariant() {
        let panel = Panel::new(20, 10);
        assert_eq!(panel.frame(), Rect::new(0, 0, 20, 10));
        assert_eq!(panel.size(), (20, 10));
    }

    #[test]
    fn test_panel_default_style_readback() {
        let mut panel = Panel::new(20, 10);
        panel.apply_default_style();

        let surface = panel.surface();
        // Border band at the default thickness
        for x in 0..20 {
            assert_eq!(surface.get(x, 0).unwrap().bg(), DEFAULT_BORDER);
            assert_eq!(surface.get(x, 1).unwrap().bg(), DEFAULT_BORDER);
            assert_eq!(surface.get(x, 9).unwrap().bg(), DEFAULT_BORDER);
        }
        assert_eq!(surface.get(0, 5).unwrap().bg(), DEFAULT_BORDER);
        assert_eq!(surface.get(1, 5).unwrap().bg(), DEFAULT_BORDER);
        assert_eq!(surface.get(19, 5).unwrap().bg(), DEFAULT_BORDER);
        // Off-white interior
        assert_eq!(surface.get(5, 5).unwrap().bg(), DEFAULT_FILL);
        assert_eq!(surface.get(2, 2).unwrap().bg(), DEFAULT_FILL);
    }

    #[test]
    fn test_panel_add_text_centered() {
        let mut panel = Panel::new(11, 3);
        panel.fill(Rgb::OFF_WHITE);
        panel.add_text("hi", &TextStyle::new(Rgb::BLACK), Anchor::Center, 0);

        // 2-wide text centered on an 11-wide panel lands at x = 5 - 1 = 4
        let cell = panel.surface().get(4, 1).unwrap();
        assert_eq!(cell.glyph(), "h");
        assert_eq!(cell.fg(), Rgb::BLACK);
        assert_eq!(cell.bg(), Rgb::OFF_WHITE);
        assert_eq!(panel.surface().get(5, 1).unwrap().glyph(), "i");
    }

    #[test]
    fn test_panel_add_text_top_right_with_padding() {
        let mut panel = Panel::new(12, 5);
        panel.add_text("ab", &TextStyle::default(), Anchor::TopRight, 1);

        // Padded bounds end at x = 11 (exclusive), so "ab" occupies 9..11
        assert_eq!(panel.surface().get(9, 1).unwrap().glyph(), "a");
        assert_eq!(panel.surface().get(10, 1).unwrap().glyph(), "b");
    }

    #[test]
    fn test_panel_add_text_at_accepts_both_spellings() {
        let mut panel = Panel::new(12, 5);
        panel
            .add_text_at("x", &TextStyle::default(), "topleft", 0)
            .unwrap();
        panel
            .add_text_at("y", &TextStyle::default(), "bottom_right", 0)
            .unwrap();
        assert_eq!(panel.surface().get(0, 0).unwrap().glyph(), "x");
        assert_eq!(panel.surface().get(11, 4).unwrap().glyph(), "y");
    }

    #[test]
    fn test_panel_add_text_at_invalid_anchor() {
        let mut panel = Panel::new(12, 5);
        let err = panel
            .add_text_at("x", &TextStyle::default(), "diagonal", 0)
            .unwrap_err();
        assert_eq!(err, UiError::InvalidAnchor("diagonal".to_string()));
    }

    #[test]
    fn test_panel_add_multiline_text_at_invalid_alignment() {
        let mut panel = Panel::new(12, 5);
        let err = panel
            .add_multiline_text_at("a\nb", &TextStyle::default(), "center", 0, 0, "justify")
            .unwrap_err();
        assert_eq!(err, UiError::InvalidAlignment("justify".to_string()));
    }

    #[test]
    fn test_panel_multiline_placement() {
        let mut panel = Panel::new(10, 7);
        panel.add_multiline_text(
            "ab\ncd",
            &TextStyle::default(),
            Anchor::Center,
            0,
            1,
            HAlign::Left,
        );

        // 2x3 composite centered on 10x7: x = 5 - 1 = 4, y = 3 - 1 = 2
        assert_eq!(panel.surface().get(4, 2).unwrap().glyph(), "a");
        assert_eq!(panel.surface().get(4, 4).unwrap().glyph(), "c");
    }

    #[test]
    fn test_panel_align_family() {
        let panel = Panel::new(6, 4);
        let target = Rect::new(0, 0, 30, 20);

        assert_eq!(panel.center_of(target, 0), Rect::new(12, 8, 6, 4));
        assert_eq!(panel.top_of(target, 0), Rect::new(12, 0, 6, 4));
        assert_eq!(panel.bottom_right_of(target, 0), Rect::new(24, 16, 6, 4));
        assert_eq!(panel.top_left_of(target, 3), Rect::new(3, 3, 6, 4));
    }

    #[test]
    fn test_panel_align_named() {
        let panel = Panel::new(6, 4);
        let target = Rect::new(0, 0, 30, 20);

        assert_eq!(
            panel.align_named(target, "Top_Right", 0).unwrap(),
            Rect::new(24, 0, 6, 4)
        );
        assert_eq!(
            panel.align_named(target, "diagonal", 0).unwrap_err(),
            UiError::InvalidAnchor("diagonal".to_string())
        );
    }

    #[test]
    fn test_panel_align_never_resizes() {
        let panel = Panel::new(7, 3);
        let target = Rect::new(5, 5, 40, 25);
        for padding in [0u16, 2, 6] {
            for anchor in Anchor::ALL {
                let placed = panel.align(target, anchor, padding);
                assert_eq!((placed.width, placed.height), (7, 3));
            }
        }
    }
}

//! Text rasterization: Rendering strings into offscreen text surfaces.
//!
//! Text is rendered into its own buffer first, then anchored and composited
//! onto a panel. Empty cells in a text surface are treated as transparent
//! by the compositing blit.

use crate::buffer::{Buffer, Modifiers, Rgb};
use crate::layout::{HAlign, Rect};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Styling applied to rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Text color.
    pub fg: Rgb,
    /// Style modifiers (bold, italic, underline, ...).
    pub modifiers: Modifiers,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::DEFAULT_FG,
            modifiers: Modifiers::empty(),
        }
    }
}

impl TextStyle {
    /// Plain text in the given color.
    pub const fn new(fg: Rgb) -> Self {
        Self {
            fg,
            modifiers: Modifiers::empty(),
        }
    }

    /// Set the modifiers (builder pattern).
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Display width of a line in columns.
fn line_width(line: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(line)).unwrap_or(u16::MAX)
}

/// Render a single line of text into a one-row offscreen surface.
///
/// The surface is exactly as wide as the text's display width (minimum one
/// column so the buffer is constructible for empty input).
pub fn render_line(text: &str, style: &TextStyle) -> Buffer {
    let width = line_width(text).max(1);
    let mut surface = Buffer::new(width, 1);

    let mut col = 0u16;
    for grapheme in text.graphemes(true) {
        if col >= width {
            break;
        }
        let advance = surface.set_grapheme(col, 0, grapheme, style.fg, Rgb::DEFAULT_BG);
        if let Some(cell) = surface.get_mut(col, 0) {
            *cell = cell.with_modifiers(style.modifiers);
        }
        col += u16::from(advance.max(1));
    }

    surface
}

/// Render multi-line text into one composite offscreen surface.
///
/// The input is split on line breaks; each line is rendered independently,
/// stacked vertically with `line_spacing` blank rows between lines, and
/// horizontally aligned within the widest line per `halign`. The composite
/// height is `lines + (lines - 1) * line_spacing` rows and its width is the
/// maximum per-line display width.
pub fn render_multiline(
    text: &str,
    style: &TextStyle,
    line_spacing: u16,
    halign: HAlign,
) -> Buffer {
    let lines: Vec<Buffer> = text.split('\n').map(|line| render_line(line, style)).collect();

    let line_count = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let max_width = lines.iter().map(Buffer::width).max().unwrap_or(1);
    let total_height = line_count + line_spacing * line_count.saturating_sub(1);

    let mut composite = Buffer::new(max_width, total_height.max(1));
    let mut y_offset = 0u16;

    for line in &lines {
        let x_offset = match halign {
            HAlign::Left => 0,
            HAlign::Center => (max_width - line.width()) / 2,
            HAlign::Right => max_width - line.width(),
        };
        composite.blit_transparent(line, Rect::new(x_offset, y_offset, line.width(), 1));
        y_offset += 1 + line_spacing;
    }

    composite
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_line_width() {
        let surface = render_line("hello", &TextStyle::default());
        assert_eq!(surface.width(), 5);
        assert_eq!(surface.height(), 1);
        assert_eq!(surface.get(0, 0).unwrap().glyph(), "h");
        assert_eq!(surface.get(4, 0).unwrap().glyph(), "o");
    }

    #[test]
    fn test_render_line_empty() {
        let surface = render_line("", &TextStyle::default());
        assert_eq!(surface.width(), 1);
    }

    #[test]
    fn test_render_line_style() {
        let style = TextStyle::new(Rgb::BLACK).with_modifiers(Modifiers::BOLD);
        let surface = render_line("hi", &style);
        let cell = surface.get(0, 0).unwrap();
        assert_eq!(cell.fg(), Rgb::BLACK);
        assert!(cell.modifiers().contains(Modifiers::BOLD));
    }

    #[test]
    fn test_render_line_wide_glyphs() {
        let surface = render_line("日本", &TextStyle::default());
        assert_eq!(surface.width(), 4);
        assert!(surface.get(1, 0).unwrap().is_wide_continuation());
        assert_eq!(surface.get(2, 0).unwrap().glyph(), "本");
    }

    #[test]
    fn test_multiline_composite_dimensions() {
        let surface = render_multiline("one\nlonger line\nmid", &TextStyle::default(), 2, HAlign::Left);
        // 3 lines + 2 gaps of 2 rows
        assert_eq!(surface.height(), 3 + 2 * 2);
        assert_eq!(surface.width(), line_width("longer line"));
    }

    #[test]
    fn test_multiline_single_line_no_spacing() {
        let surface = render_multiline("solo", &TextStyle::default(), 5, HAlign::Left);
        assert_eq!(surface.height(), 1);
        assert_eq!(surface.width(), 4);
    }

    #[test]
    fn test_multiline_halign_right() {
        let surface = render_multiline("ab\nabcd", &TextStyle::default(), 0, HAlign::Right);
        // Short line flush right within the 4-column composite
        assert_eq!(surface.get(2, 0).unwrap().glyph(), "a");
        assert_eq!(surface.get(3, 0).unwrap().glyph(), "b");
        assert_eq!(surface.get(0, 1).unwrap().glyph(), "a");
    }

    #[test]
    fn test_multiline_halign_center() {
        let surface = render_multiline("ab\nabcdef", &TextStyle::default(), 0, HAlign::Center);
        assert_eq!(surface.get(2, 0).unwrap().glyph(), "a");
        assert_eq!(surface.get(3, 0).unwrap().glyph(), "b");
    }

    #[test]
    fn test_multiline_rows_between_lines_stay_empty() {
        let surface = render_multiline("a\nb", &TextStyle::default(), 1, HAlign::Left);
        assert_eq!(surface.height(), 3);
        assert_eq!(surface.get(0, 0).unwrap().glyph(), "a");
        assert_eq!(surface.get(0, 1).unwrap().glyph(), " ");
        assert_eq!(surface.get(0, 2).unwrap().glyph(), "b");
    }
}

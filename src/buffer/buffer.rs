//! Buffer: A fixed-size grid of cells acting as a drawable surface.
//!
//! Cells are stored contiguously in row-major order. A buffer's size is
//! fixed at construction; content is mutated in place by fill, stroke, and
//! blit operations.

use super::cell::{Cell, Rgb};
use crate::layout::Rect;

/// A grid of cells representing a drawable surface.
///
/// Access is in row-major order: `index = y * width + x`. Buffers never
/// resize after construction; composition happens by blitting one buffer
/// onto another at an offset rectangle.
#[derive(Clone)]
pub struct Buffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Width in columns.
    width: u16,
    /// Height in rows.
    height: u16,
}

impl Buffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// All cells are initialized to empty (space with default colors).
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Buffer dimensions must be non-zero");
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::EMPTY; size],
            width,
            height,
        }
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The buffer's own bounds at the origin.
    #[inline]
    pub const fn frame(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the buffer is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize) * (self.width as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Get a reference to a cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to a cell at (x, y).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index_of(x, y).map(|i| &mut self.cells[i])
    }

    /// Set a cell at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Set a grapheme at (x, y).
    ///
    /// For wide glyphs (CJK), this also sets a continuation cell at
    /// (x+1, y). Graphemes that exceed inline storage are replaced with
    /// U+FFFD.
    ///
    /// Returns the display width of the glyph, or 0 if out of bounds.
    pub fn set_grapheme(&mut self, x: u16, y: u16, grapheme: &str, fg: Rgb, bg: Rgb) -> u8 {
        let Some(idx) = self.index_of(x, y) else {
            return 0;
        };

        let cell = Cell::from_grapheme(grapheme)
            .unwrap_or_else(|| Cell::from_char('\u{FFFD}'))
            .with_fg(fg)
            .with_bg(bg);
        let width = cell.display_width();
        self.cells[idx] = cell;

        if width == 2 {
            if let Some(next_idx) = self.index_of(x + 1, y) {
                self.cells[next_idx] = Cell::wide_continuation().with_bg(bg);
            }
        }

        width
    }

    /// Fill the whole buffer with a flat background color.
    pub fn fill(&mut self, color: Rgb) {
        self.cells.fill(Cell::EMPTY.with_bg(color));
    }

    /// Fill a rectangular region with a cell.
    pub fn fill_rect(&mut self, rect: Rect, cell: Cell) {
        for row in rect.y..rect.bottom().min(self.height) {
            for col in rect.x..rect.right().min(self.width) {
                if let Some(idx) = self.index_of(col, row) {
                    self.cells[idx] = cell;
                }
            }
        }
    }

    /// Stroke a rectangle outline of the given thickness.
    ///
    /// The stroke grows inward from the rectangle's edges, matching the
    /// border contract of panels.
    pub fn stroke_rect(&mut self, rect: Rect, thickness: u16, cell: Cell) {
        if thickness == 0 || rect.is_empty() {
            return;
        }
        let t = thickness.min(rect.width).min(rect.height);

        // Top and bottom bands
        self.fill_rect(Rect::new(rect.x, rect.y, rect.width, t), cell);
        self.fill_rect(
            Rect::new(rect.x, rect.bottom().saturating_sub(t), rect.width, t),
            cell,
        );
        // Left and right bands
        self.fill_rect(Rect::new(rect.x, rect.y, t, rect.height), cell);
        self.fill_rect(
            Rect::new(rect.right().saturating_sub(t), rect.y, t, rect.height),
            cell,
        );
    }

    /// Clear the entire buffer (fill with empty cells).
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Copy another buffer onto this one at an offset rectangle.
    ///
    /// Only the offset of `at` is used for placement; the copy is clipped
    /// to this buffer's bounds.
    pub fn blit(&mut self, src: &Self, at: Rect) {
        for y in 0..src.height {
            let Some(dst_y) = at.y.checked_add(y).filter(|&v| v < self.height) else {
                break;
            };
            for x in 0..src.width {
                let Some(dst_x) = at.x.checked_add(x).filter(|&v| v < self.width) else {
                    break;
                };
                if let (Some(src_idx), Some(dst_idx)) =
                    (src.index_of(x, y), self.index_of(dst_x, dst_y))
                {
                    self.cells[dst_idx] = src.cells[src_idx];
                }
            }
        }
    }

    /// Copy glyphs from another buffer, treating empty cells as transparent.
    ///
    /// Empty source cells are skipped and copied glyphs keep the destination
    /// background, so text composites sit on whatever the panel already
    /// painted underneath.
    pub fn blit_transparent(&mut self, src: &Self, at: Rect) {
        for y in 0..src.height {
            let Some(dst_y) = at.y.checked_add(y).filter(|&v| v < self.height) else {
                break;
            };
            for x in 0..src.width {
                let Some(dst_x) = at.x.checked_add(x).filter(|&v| v < self.width) else {
                    break;
                };
                let (Some(src_idx), Some(dst_idx)) =
                    (src.index_of(x, y), self.index_of(dst_x, dst_y))
                else {
                    continue;
                };
                let cell = src.cells[src_idx];
                if cell == Cell::EMPTY {
                    continue;
                }
                let bg = self.cells[dst_idx].bg();
                self.cells[dst_idx] = cell.with_bg(bg);
            }
        }
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

//! Cell: The atomic unit of a drawable surface.
//!
//! A cell holds one glyph (up to 4 UTF-8 bytes inline), its display width,
//! foreground and background colors, and text style modifiers. Grapheme
//! clusters that do not fit the inline storage are substituted with the
//! replacement character by the text renderer.

use bitflags::bitflags;

/// True-color RGB representation.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Default foreground (white)
    pub const DEFAULT_FG: Self = Self::WHITE;
    /// Default background (black)
    pub const DEFAULT_BG: Self = Self::BLACK;

    /// Muted beige used for main panel backgrounds.
    pub const BEIGE: Self = Self::new(120, 81, 79);
    /// Dark brown used for main panel borders.
    pub const DARK_BROWN: Self = Self::new(94, 58, 56);
    /// Off-white used for default panel fills.
    pub const OFF_WHITE: Self = Self::new(217, 217, 217);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0001_0000;
        /// Strikethrough text
        const STRIKETHROUGH = 0b0010_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single surface cell.
#[derive(Clone, Copy)]
pub struct Cell {
    /// Inline glyph storage (UTF-8 bytes).
    glyph: [u8; 4],
    /// Byte length of the glyph (0 for a wide-glyph continuation).
    glyph_len: u8,
    /// Display width (0 = continuation, 1 = normal, 2 = wide CJK).
    display_width: u8,
    /// Foreground color.
    fg: Rgb,
    /// Background color.
    bg: Rgb,
    /// Text modifiers (bold, italic, etc.).
    modifiers: Modifiers,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// An empty cell (space character with default colors).
    pub const EMPTY: Self = Self {
        glyph: [b' ', 0, 0, 0],
        glyph_len: 1,
        display_width: 1,
        fg: Rgb::DEFAULT_FG,
        bg: Rgb::DEFAULT_BG,
        modifiers: Modifiers::empty(),
    };

    /// Create a new cell with a single ASCII character.
    #[inline]
    pub fn new(c: char) -> Self {
        debug_assert!(c.is_ascii(), "Use Cell::from_char for non-ASCII");
        Self {
            glyph: [c as u8, 0, 0, 0],
            glyph_len: 1,
            display_width: 1,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a cell from any character.
    #[inline]
    #[allow(clippy::missing_panics_doc)]
    pub fn from_char(c: char) -> Self {
        let mut glyph = [0u8; 4];
        let s = c.encode_utf8(&mut glyph);
        let len = u8::try_from(s.len()).unwrap();
        let width = u8::try_from(unicode_width::UnicodeWidthChar::width(c).unwrap_or(0)).unwrap();

        Self {
            glyph,
            glyph_len: len,
            display_width: width,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a cell from a grapheme string.
    ///
    /// Returns `None` if the grapheme exceeds the 4-byte inline storage
    /// (complex emoji ZWJ sequences); callers substitute a replacement glyph.
    #[inline]
    #[allow(clippy::missing_panics_doc)]
    pub fn from_grapheme(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() > 4 {
            return None;
        }

        let mut glyph = [0u8; 4];
        glyph[..bytes.len()].copy_from_slice(bytes);
        let width = u8::try_from(unicode_width::UnicodeWidthStr::width(s)).unwrap_or(1);

        Some(Self {
            glyph,
            glyph_len: u8::try_from(bytes.len()).unwrap(),
            display_width: width,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
        })
    }

    /// Create a wide-glyph continuation cell.
    ///
    /// This is placed after a wide CJK glyph that takes 2 columns.
    #[inline]
    pub const fn wide_continuation() -> Self {
        Self {
            glyph: [0, 0, 0, 0],
            glyph_len: 0,
            display_width: 0,
            fg: Rgb::DEFAULT_FG,
            bg: Rgb::DEFAULT_BG,
            modifiers: Modifiers::empty(),
        }
    }

    /// Get the glyph as a string slice.
    #[inline]
    #[allow(unsafe_code)]
    pub fn glyph(&self) -> &str {
        // SAFETY: We only store valid UTF-8 in the glyph bytes
        unsafe { std::str::from_utf8_unchecked(&self.glyph[..self.glyph_len as usize]) }
    }

    /// Check if this is a wide-glyph continuation.
    #[inline]
    pub const fn is_wide_continuation(&self) -> bool {
        self.glyph_len == 0 && self.display_width == 0
    }

    /// Get the display width (0, 1, or 2).
    #[inline]
    pub const fn display_width(&self) -> u8 {
        self.display_width
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Get the modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Set the modifiers (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl PartialEq for Cell {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.glyph == other.glyph
            && self.glyph_len == other.glyph_len
            && self.fg == other.fg
            && self.bg == other.bg
            && self.modifiers == other.modifiers
            && self.display_width == other.display_width
    }
}

impl Eq for Cell {}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("glyph", &self.glyph())
            .field("width", &self.display_width)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}

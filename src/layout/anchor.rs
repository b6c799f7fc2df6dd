//! Anchor: Named alignment points and the alignment computation.
//!
//! An anchor names a point on a rectangle (a corner, an edge midpoint, or
//! the center). Aligning an element to a target places the element so that
//! its own anchor point coincides with the same anchor point of the target,
//! optionally shrunk by a symmetric padding first.

use super::rect::Rect;
use crate::error::UiError;
use std::str::FromStr;

/// The nine supported anchor positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Center of the rectangle.
    Center,
    /// Midpoint of the top edge.
    Top,
    /// Midpoint of the bottom edge.
    Bottom,
    /// Midpoint of the left edge.
    Left,
    /// Midpoint of the right edge.
    Right,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

/// Horizontal alignment policy (also the horizontal component of an anchor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HAlign {
    /// Flush with the left edge.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush with the right edge.
    Right,
}

/// Vertical component of an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum VAlign {
    Top,
    Center,
    Bottom,
}

impl Anchor {
    /// All nine anchors, for exhaustive iteration.
    pub const ALL: [Self; 9] = [
        Self::Center,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// The anchor point on a rectangle.
    pub const fn point_on(self, rect: Rect) -> (u16, u16) {
        match self {
            Self::Center => rect.center(),
            Self::Top => rect.mid_top(),
            Self::Bottom => rect.mid_bottom(),
            Self::Left => rect.mid_left(),
            Self::Right => rect.mid_right(),
            Self::TopLeft => rect.top_left(),
            Self::TopRight => rect.top_right(),
            Self::BottomLeft => rect.bottom_left(),
            Self::BottomRight => rect.bottom_right(),
        }
    }

    const fn horizontal(self) -> HAlign {
        match self {
            Self::Left | Self::TopLeft | Self::BottomLeft => HAlign::Left,
            Self::Center | Self::Top | Self::Bottom => HAlign::Center,
            Self::Right | Self::TopRight | Self::BottomRight => HAlign::Right,
        }
    }

    const fn vertical(self) -> VAlign {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => VAlign::Top,
            Self::Center | Self::Left | Self::Right => VAlign::Center,
            Self::Bottom | Self::BottomLeft | Self::BottomRight => VAlign::Bottom,
        }
    }
}

impl FromStr for Anchor {
    type Err = UiError;

    /// Parse an anchor name, case-insensitively.
    ///
    /// Corner anchors accept both spellings (`top_left` and `topleft`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "center" => Ok(Self::Center),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top_left" | "topleft" => Ok(Self::TopLeft),
            "top_right" | "topright" => Ok(Self::TopRight),
            "bottom_left" | "bottomleft" => Ok(Self::BottomLeft),
            "bottom_right" | "bottomright" => Ok(Self::BottomRight),
            _ => Err(UiError::InvalidAnchor(s.to_string())),
        }
    }
}

impl FromStr for HAlign {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(UiError::InvalidAlignment(s.to_string())),
        }
    }
}

/// Compute where an element of `size` lands on `target` for an anchor.
///
/// The target is first shrunk symmetrically by `padding` on each side; the
/// returned rectangle always has exactly `size` — padding moves it, never
/// resizes it. Positions saturate at the screen origin when the element is
/// larger than the padded target.
pub fn align(size: (u16, u16), target: Rect, anchor: Anchor, padding: u16) -> Rect {
    let (width, height) = size;
    let padded = target.shrink(padding);
    let (px, py) = anchor.point_on(padded);

    let x = match anchor.horizontal() {
        HAlign::Left => px,
        HAlign::Center => px.saturating_sub(width / 2),
        HAlign::Right => px.saturating_sub(width),
    };
    let y = match anchor.vertical() {
        VAlign::Top => py,
        VAlign::Center => py.saturating_sub(height / 2),
        VAlign::Bottom => py.saturating_sub(height),
    };

    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_parse_canonical() {
        assert_eq!("center".parse::<Anchor>().unwrap(), Anchor::Center);
        assert_eq!("top".parse::<Anchor>().unwrap(), Anchor::Top);
        assert_eq!("bottom_right".parse::<Anchor>().unwrap(), Anchor::BottomRight);
    }

    #[test]
    fn test_anchor_parse_alternate_spelling() {
        assert_eq!("topleft".parse::<Anchor>().unwrap(), Anchor::TopLeft);
        assert_eq!("bottomright".parse::<Anchor>().unwrap(), Anchor::BottomRight);
    }

    #[test]
    fn test_anchor_parse_case_insensitive() {
        assert_eq!("TOP_LEFT".parse::<Anchor>().unwrap(), Anchor::TopLeft);
        assert_eq!("Center".parse::<Anchor>().unwrap(), Anchor::Center);
    }

    #[test]
    fn test_anchor_parse_invalid() {
        let err = "diagonal".parse::<Anchor>().unwrap_err();
        assert_eq!(err, UiError::InvalidAnchor("diagonal".to_string()));
    }

    #[test]
    fn test_halign_parse() {
        assert_eq!("left".parse::<HAlign>().unwrap(), HAlign::Left);
        assert_eq!("RIGHT".parse::<HAlign>().unwrap(), HAlign::Right);
        assert_eq!(
            "justify".parse::<HAlign>().unwrap_err(),
            UiError::InvalidAlignment("justify".to_string())
        );
    }

    #[test]
    fn test_align_preserves_size() {
        let target = Rect::new(3, 7, 40, 20);
        for padding in [0, 1, 3] {
            for anchor in Anchor::ALL {
                let placed = align((8, 4), target, anchor, padding);
                assert_eq!((placed.width, placed.height), (8, 4), "{anchor:?} pad {padding}");
            }
        }
    }

    #[test]
    fn test_align_center_matches_padded_center() {
        let target = Rect::new(0, 0, 50, 31);
        for padding in [0, 2, 5] {
            let placed = align((10, 5), target, Anchor::Center, padding);
            assert_eq!(placed.center(), target.shrink(padding).center());
        }
    }

    #[test]
    fn test_align_top_left_offsets_by_padding() {
        let target = Rect::new(6, 9, 30, 12);
        let placed = align((5, 3), target, Anchor::TopLeft, 4);
        assert_eq!((placed.x, placed.y), (10, 13));
    }

    #[test]
    fn test_align_bottom_right_flush() {
        let target = Rect::new(0, 0, 20, 10);
        let placed = align((6, 4), target, Anchor::BottomRight, 0);
        assert_eq!(placed.right(), 20);
        assert_eq!(placed.bottom(), 10);
    }

    #[test]
    fn test_align_edge_anchors_keep_symmetric_padding() {
        // Padding shrinks all four sides even for edge anchors.
        let target = Rect::new(0, 0, 40, 20);
        let placed = align((10, 2), target, Anchor::Top, 3);
        assert_eq!(placed.y, 3);
        assert_eq!(placed.center().0, target.shrink(3).center().0);
    }

    #[test]
    fn test_align_oversized_element_pins_to_origin() {
        let target = Rect::new(0, 0, 4, 4);
        let placed = align((10, 10), target, Anchor::BottomRight, 0);
        assert_eq!((placed.x, placed.y), (0, 0));
        assert_eq!((placed.width, placed.height), (10, 10));
    }
}

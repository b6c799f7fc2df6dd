//! The `UiElement` capability shared by all widgets.

use crate::buffer::Buffer;
use crate::layout::Rect;

/// A widget with a fixed size and a drawable surface.
///
/// Elements are constructed with fixed dimensions and never resize;
/// their [`frame`](UiElement::frame) is always their surface's own bounds
/// at the origin. Composition onto a parent happens by blitting the
/// surface at a rectangle computed by the alignment family.
pub trait UiElement {
    /// Width of the element in columns.
    fn width(&self) -> u16;

    /// Height of the element in rows.
    fn height(&self) -> u16;

    /// The element's drawable surface.
    fn surface(&self) -> &Buffer;

    /// The element's bounding rectangle, anchored at its local origin.
    fn frame(&self) -> Rect {
        Rect::from_size(self.width(), self.height())
    }

    /// (width, height) convenience pair.
    fn size(&self) -> (u16, u16) {
        (self.width(), self.height())
    }
}

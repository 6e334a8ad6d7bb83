use serde::Serialize;

/// The rectangle describing an element's position within the viewport, in CSS pixels.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingRect {
    /// Distance from the top of the viewport to the top edge.
    pub top: f64,
    /// Distance from the top of the viewport to the bottom edge.
    pub bottom: f64,
    /// Distance from the left of the viewport to the left edge.
    pub left: f64,
    /// Distance from the left of the viewport to the right edge.
    pub right: f64,
}

impl BoundingRect {
    /// Creates a new `BoundingRect` from its edges.
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// The height of the rectangle.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// A scroll notification carrying the vertical scroll offset of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    /// Vertical scroll offset of the page.
    pub offset: f64,
}

/// Whether the navigation panel should be shown given its rect and the footer's.
///
/// The panel is hidden as soon as its bottom edge goes past the footer's top edge.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn is_nav_visible(nav: &BoundingRect, footer: &BoundingRect) -> bool {
    !(nav.bottom > footer.top)
}

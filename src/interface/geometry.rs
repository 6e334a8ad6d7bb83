use crate::BoundingRect;

/// A trait for reading the current geometry of the tracked page elements.
///
/// A `None` rect means the element is not attached yet.
#[cfg_attr(test, mockall::automock)]
pub trait GeometrySource: Sync + Send {
    /// The bounding rect of the fixed navigation panel.
    fn nav_rect(&self) -> Option<BoundingRect>;

    /// The bounding rect of the footer container.
    fn footer_rect(&self) -> Option<BoundingRect>;
}

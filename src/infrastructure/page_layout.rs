use std::sync::RwLock;

use crate::{BoundingRect, GeometrySource};

/// Width of the collapsed navigation panel.
const NAV_WIDTH: f64 = 60.0;

/// Dimensions of a simulated projects page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDimensions {
    /// Height of the viewport.
    pub viewport_height: f64,
    /// Width of the viewport.
    pub viewport_width: f64,
    /// Height of the fixed navigation panel.
    pub nav_height: f64,
    /// Distance from the top of the document to the footer.
    pub footer_offset: f64,
    /// Height of the footer.
    pub footer_height: f64,
}

impl Default for PageDimensions {
    fn default() -> Self {
        Self {
            viewport_height: 900.0,
            viewport_width: 1280.0,
            nav_height: 320.0,
            footer_offset: 2400.0,
            footer_height: 400.0,
        }
    }
}

#[derive(Debug)]
struct LayoutState {
    scroll_offset: f64,
    footer_attached: bool,
}

/// A headless page layout: a navigation panel fixed at the vertical centre of
/// the viewport and a footer that moves up as the page scrolls.
#[derive(Debug)]
pub struct PageLayout {
    dimensions: PageDimensions,
    state: RwLock<LayoutState>,
}

impl PageLayout {
    /// Creates a new `PageLayout` scrolled to the top.
    pub fn new(dimensions: PageDimensions) -> Self {
        Self {
            dimensions,
            state: RwLock::new(LayoutState {
                scroll_offset: 0.0,
                footer_attached: true,
            }),
        }
    }

    /// Scrolls the page to `offset`.
    pub fn scroll_to(&self, offset: f64) {
        if let Ok(mut state) = self.state.write() {
            state.scroll_offset = offset;
        }
    }

    /// Removes the footer from the page.
    pub fn detach_footer(&self) {
        if let Ok(mut state) = self.state.write() {
            state.footer_attached = false;
        }
    }

    /// Puts the footer back on the page.
    pub fn attach_footer(&self) {
        if let Ok(mut state) = self.state.write() {
            state.footer_attached = true;
        }
    }
}

impl GeometrySource for PageLayout {
    fn nav_rect(&self) -> Option<BoundingRect> {
        let top = (self.dimensions.viewport_height - self.dimensions.nav_height) / 2.0;

        Some(BoundingRect::new(
            top,
            top + self.dimensions.nav_height,
            0.0,
            NAV_WIDTH,
        ))
    }

    fn footer_rect(&self) -> Option<BoundingRect> {
        let state = self.state.read().ok()?;
        if !state.footer_attached {
            return None;
        }
        let top = self.dimensions.footer_offset - state.scroll_offset;

        Some(BoundingRect::new(
            top,
            top + self.dimensions.footer_height,
            0.0,
            self.dimensions.viewport_width,
        ))
    }
}

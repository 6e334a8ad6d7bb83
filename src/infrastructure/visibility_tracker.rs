use std::sync::Arc;

use log::{debug, trace};
use tokio::{
    sync::{broadcast::error::RecvError, watch},
    task::JoinHandle,
};

use crate::{GeometrySource, ScrollSignal, is_nav_visible};

/// Tracks whether the fixed navigation panel should be shown.
///
/// The check runs once when mounted and again on every scroll event until the
/// tracker is unmounted or dropped, which releases the scroll subscription.
pub struct VisibilityTracker {
    visible: Arc<watch::Sender<bool>>,
    task: Option<JoinHandle<()>>,
}

impl VisibilityTracker {
    /// Mounts a tracker reading `geometry` on every event of `scroll_signal`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(geometry: Arc<dyn GeometrySource>, scroll_signal: &dyn ScrollSignal) -> Self {
        let mut scroll_events = scroll_signal.subscribe();
        let (visible, _) = watch::channel(true);
        let visible = Arc::new(visible);
        check_visibility(geometry.as_ref(), &visible);

        let task = tokio::spawn({
            let visible = visible.clone();
            async move {
                loop {
                    match scroll_events.recv().await {
                        Ok(event) => {
                            trace!("Scroll event at offset {}", event.offset);
                        }
                        Err(RecvError::Lagged(skipped)) => {
                            debug!("Visibility tracker skipped {skipped} scroll event(s)");
                        }
                        Err(RecvError::Closed) => break,
                    }
                    check_visibility(geometry.as_ref(), &visible);
                }
            }
        });

        Self {
            visible,
            task: Some(task),
        }
    }

    /// Whether the navigation panel is currently shown.
    pub fn is_visible(&self) -> bool {
        *self.visible.borrow()
    }

    /// Subscribes to visibility changes.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.visible.subscribe()
    }

    /// Releases the scroll subscription and waits for the listening task to end.
    pub async fn unmount(mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            let _ = task.await;
        }
    }
}

impl Drop for VisibilityTracker {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Updates `visible` from the current geometry, skipping the check while an
/// element is not attached.
fn check_visibility(geometry: &dyn GeometrySource, visible: &watch::Sender<bool>) {
    let (Some(nav), Some(footer)) = (geometry.nav_rect(), geometry.footer_rect()) else {
        return;
    };
    let is_visible = is_nav_visible(&nav, &footer);
    visible.send_if_modified(|current| {
        if *current == is_visible {
            return false;
        }
        *current = is_visible;
        true
    });
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use crate::{
        BoundingRect, BroadcastScrollSignal, MockGeometrySource, PageDimensions, PageLayout,
    };

    use super::*;

    const WAIT: Duration = Duration::from_secs(1);
    const SKIPPED_WAIT: Duration = Duration::from_millis(100);

    fn nav() -> BoundingRect {
        BoundingRect::new(290.0, 610.0, 0.0, 60.0)
    }

    fn footer_at(top: f64) -> BoundingRect {
        BoundingRect::new(top, top + 400.0, 0.0, 1280.0)
    }

    #[tokio::test]
    async fn checks_visibility_at_mount() {
        let geometry = {
            let mut geometry = MockGeometrySource::new();
            geometry.expect_nav_rect().returning(|| Some(nav())).times(1);
            geometry
                .expect_footer_rect()
                .returning(|| Some(footer_at(100.0)))
                .times(1);

            geometry
        };
        let signal = BroadcastScrollSignal::new();

        let tracker = VisibilityTracker::mount(Arc::new(geometry), &signal);

        assert!(!tracker.is_visible());
    }

    #[tokio::test]
    async fn skips_check_when_element_not_attached() {
        let geometry = {
            let mut geometry = MockGeometrySource::new();
            geometry.expect_nav_rect().returning(|| None);
            geometry
                .expect_footer_rect()
                .returning(|| Some(footer_at(100.0)));

            geometry
        };
        let signal = BroadcastScrollSignal::new();

        let tracker = VisibilityTracker::mount(Arc::new(geometry), &signal);

        assert!(tracker.is_visible());
    }

    #[tokio::test]
    async fn toggles_visibility_on_scroll() {
        let layout = Arc::new(PageLayout::new(PageDimensions::default()));
        let signal = BroadcastScrollSignal::new();
        let tracker = VisibilityTracker::mount(layout.clone(), &signal);
        let mut visibility = tracker.subscribe();
        assert!(tracker.is_visible());

        layout.scroll_to(2000.0);
        signal.emit(2000.0);
        timeout(WAIT, visibility.changed()).await.unwrap().unwrap();
        assert!(!tracker.is_visible());

        layout.scroll_to(0.0);
        signal.emit(0.0);
        timeout(WAIT, visibility.changed()).await.unwrap().unwrap();
        assert!(tracker.is_visible());
    }

    #[tokio::test]
    async fn retries_on_next_scroll_after_missing_element() {
        let layout = Arc::new(PageLayout::new(PageDimensions::default()));
        let signal = BroadcastScrollSignal::new();
        let tracker = VisibilityTracker::mount(layout.clone(), &signal);
        let mut visibility = tracker.subscribe();

        layout.detach_footer();
        layout.scroll_to(2000.0);
        signal.emit(2000.0);
        timeout(SKIPPED_WAIT, visibility.changed())
            .await
            .expect_err("Expected no visibility change while the footer is detached");
        assert!(tracker.is_visible());

        layout.attach_footer();
        signal.emit(2000.0);
        timeout(WAIT, visibility.changed()).await.unwrap().unwrap();

        assert!(!tracker.is_visible());
    }

    #[tokio::test]
    async fn unmount_releases_scroll_subscription() {
        let layout = Arc::new(PageLayout::new(PageDimensions::default()));
        let signal = BroadcastScrollSignal::new();
        let tracker = VisibilityTracker::mount(layout, &signal);
        assert_eq!(1, signal.subscriber_count());

        tracker.unmount().await;

        assert_eq!(0, signal.subscriber_count());
    }
}

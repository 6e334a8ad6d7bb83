use std::sync::Arc;

use log::{info, warn};
use tokio::{sync::watch, task::JoinHandle};

use crate::{
    GeometrySource, PageView, RemoteListLoader, RepositoryFetcher, ScrollSignal,
    VisibilityTracker,
};

/// The projects page: a repository card grid next to a fading side navigation.
pub struct ProjectsPage {
    tracker: VisibilityTracker,
    loader: Arc<RemoteListLoader>,
    load_task: Option<JoinHandle<()>>,
}

impl ProjectsPage {
    /// Mounts the page: checks the navigation visibility and starts loading the repositories.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(
        fetcher: Arc<dyn RepositoryFetcher>,
        geometry: Arc<dyn GeometrySource>,
        scroll_signal: &dyn ScrollSignal,
    ) -> Self {
        info!("Mounting projects page");
        let tracker = VisibilityTracker::mount(geometry, scroll_signal);
        let loader = Arc::new(RemoteListLoader::new(fetcher));
        let load_task = loader.spawn();

        Self {
            tracker,
            loader,
            load_task: Some(load_task),
        }
    }

    /// Waits for the initial load to settle, if it has not yet.
    pub async fn loaded(&mut self) {
        if let Some(load_task) = self.load_task.take() {
            if let Err(e) = load_task.await {
                warn!("Repository load task ended abnormally: {e}");
            }
        }
    }

    /// Subscribes to the navigation visibility changes.
    pub fn visibility(&self) -> watch::Receiver<bool> {
        self.tracker.subscribe()
    }

    /// Returns what the page currently renders.
    pub async fn view(&self) -> PageView {
        PageView {
            nav_visible: self.tracker.is_visible(),
            cards: self.loader.cards().await,
        }
    }

    /// Unmounts the page, releasing the scroll subscription.
    ///
    /// A pending load is left to complete on its own.
    pub async fn unmount(self) {
        info!("Unmounting projects page");
        self.tracker.unmount().await;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use anyhow::anyhow;
    use tokio::time::timeout;

    use crate::{
        BroadcastScrollSignal, FetchOutcome, MockRepositoryFetcher, PageDimensions, PageLayout,
        RemoteRepository,
    };

    use super::*;

    fn fetcher_returning(repositories: Vec<RemoteRepository>) -> MockRepositoryFetcher {
        let mut fetcher = MockRepositoryFetcher::new();
        fetcher
            .expect_fetch()
            .returning(move || Ok(FetchOutcome::Fetched(repositories.clone())))
            .times(1);

        fetcher
    }

    #[tokio::test]
    async fn mount_renders_empty_page_before_load() {
        let layout = Arc::new(PageLayout::new(PageDimensions::default()));
        let signal = BroadcastScrollSignal::new();

        let mut fetcher = MockRepositoryFetcher::new();
        fetcher.expect_fetch().returning(|| {
            Ok(FetchOutcome::Fetched(vec![RemoteRepository::new(
                "foo",
                None,
                "https://x/foo",
            )]))
        });

        let page = ProjectsPage::mount(Arc::new(fetcher), layout, &signal);

        assert_eq!(PageView { nav_visible: true, cards: vec![] }, page.view().await);
    }

    #[tokio::test]
    async fn mount_loads_repositories() {
        let layout = Arc::new(PageLayout::new(PageDimensions::default()));
        let signal = BroadcastScrollSignal::new();
        let mut page = ProjectsPage::mount(
            Arc::new(fetcher_returning(vec![
                RemoteRepository::new("foo", None, "https://x/foo"),
                RemoteRepository::new("bar", Some("Bar"), "https://x/bar"),
            ])),
            layout,
            &signal,
        );

        page.loaded().await;

        let view = page.view().await;
        assert!(view.nav_visible);
        assert_eq!(2, view.cards.len());
    }

    #[tokio::test]
    async fn failed_load_renders_empty_list() {
        let layout = Arc::new(PageLayout::new(PageDimensions::default()));
        let signal = BroadcastScrollSignal::new();
        let mut fetcher = MockRepositoryFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|| Err(anyhow!("dns failure")))
            .times(1);
        let mut page = ProjectsPage::mount(Arc::new(fetcher), layout, &signal);

        page.loaded().await;

        assert!(page.view().await.cards.is_empty());
    }

    #[tokio::test]
    async fn scrolling_to_footer_fades_navigation() {
        let layout = Arc::new(PageLayout::new(PageDimensions::default()));
        let signal = BroadcastScrollSignal::new();
        let mut page =
            ProjectsPage::mount(Arc::new(fetcher_returning(vec![])), layout.clone(), &signal);
        let mut visibility = page.visibility();
        page.loaded().await;

        layout.scroll_to(2200.0);
        signal.emit(2200.0);
        timeout(Duration::from_secs(1), visibility.changed())
            .await
            .unwrap()
            .unwrap();

        assert!(!page.view().await.nav_visible);
    }

    #[tokio::test]
    async fn unmount_releases_scroll_subscription() {
        let layout = Arc::new(PageLayout::new(PageDimensions::default()));
        let signal = BroadcastScrollSignal::new();
        let mut page = ProjectsPage::mount(Arc::new(fetcher_returning(vec![])), layout, &signal);
        page.loaded().await;

        page.unmount().await;

        assert_eq!(0, signal.subscriber_count());
    }
}

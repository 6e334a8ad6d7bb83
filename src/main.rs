use std::{sync::Arc, time::Duration};

use clap::Parser;
use log::{debug, info};
use tokio::time::timeout;

use portfolio_projects::{
    BroadcastScrollSignal, DEFAULT_GITHUB_ACCOUNT, GITHUB_API_ENDPOINT, GITHUB_TOKEN_ENV_VAR,
    PageDimensions, PageLayout, ProjectsPage, RestFetcher, StdResult,
};

/// How long to wait for the navigation to react to a replayed scroll.
const SCROLL_SETTLE_TIMEOUT: Duration = Duration::from_millis(50);

/// Command line arguments for the projects page
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// GitHub account whose repositories are listed
    #[arg(short, long, default_value = DEFAULT_GITHUB_ACCOUNT)]
    account: String,

    /// GitHub REST API endpoint
    #[arg(short, long, default_value = GITHUB_API_ENDPOINT)]
    endpoint: String,

    /// Environment variable holding the GitHub access token
    #[arg(long, default_value = GITHUB_TOKEN_ENV_VAR)]
    token_variable: String,

    /// Height of the simulated viewport
    #[arg(long, default_value_t = PageDimensions::default().viewport_height)]
    viewport_height: f64,

    /// Height of the side navigation panel
    #[arg(long, default_value_t = PageDimensions::default().nav_height)]
    nav_height: f64,

    /// Distance from the top of the page to the footer
    #[arg(long, default_value_t = PageDimensions::default().footer_offset)]
    footer_offset: f64,

    /// Scroll offsets to replay after mounting (e.g., 0,800,1900)
    #[arg(short, long, value_delimiter = ',')]
    scroll_offsets: Vec<f64>,

    /// Print the rendered page as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> StdResult<()> {
    env_logger::init();
    let args = Args::parse();
    debug!("Arguments: {args:?}");

    let fetcher = Arc::new(
        RestFetcher::try_new(&args.endpoint, &args.account)?
            .with_token_variable(&args.token_variable),
    );
    let layout = Arc::new(PageLayout::new(PageDimensions {
        viewport_height: args.viewport_height,
        nav_height: args.nav_height,
        footer_offset: args.footer_offset,
        ..PageDimensions::default()
    }));
    let scroll_signal = BroadcastScrollSignal::new();

    let mut page = ProjectsPage::mount(fetcher, layout.clone(), &scroll_signal);
    let mut visibility = page.visibility();
    page.loaded().await;

    for offset in &args.scroll_offsets {
        layout.scroll_to(*offset);
        scroll_signal.emit(*offset);
        // An unchanged flag never notifies.
        let _ = timeout(SCROLL_SETTLE_TIMEOUT, visibility.changed()).await;
        let report = scroll_report(*offset, *visibility.borrow_and_update());
        if args.json {
            info!("{report}");
        } else {
            println!("{report}");
        }
    }

    let view = page.view().await;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{view}");
    }
    page.unmount().await;

    Ok(())
}

/// Describes the navigation state after scrolling to `offset`.
fn scroll_report(offset: f64, nav_visible: bool) -> String {
    format!(
        "Scrolled to {offset}: navigation {}",
        if nav_visible { "shown" } else { "faded" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_report_shown() {
        assert_eq!("Scrolled to 0: navigation shown", scroll_report(0.0, true));
    }

    #[test]
    fn scroll_report_faded() {
        assert_eq!(
            "Scrolled to 1900.5: navigation faded",
            scroll_report(1900.5, false)
        );
    }

    #[test]
    fn parse_scroll_offsets() {
        let args = Args::parse_from(["portfolio-projects", "--scroll-offsets", "0,800,1900"]);

        assert_eq!(vec![0.0, 800.0, 1900.0], args.scroll_offsets);
        assert!(!args.json);
    }
}

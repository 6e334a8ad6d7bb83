mod fetcher_rest;
mod list_loader;
mod page_layout;
mod projects_page;
mod scroll_signal;
mod visibility_tracker;

pub use fetcher_rest::*;
pub use list_loader::*;
pub use page_layout::*;
pub use projects_page::*;
pub use scroll_signal::*;
pub use visibility_tracker::*;

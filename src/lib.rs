//! Logic behind the "Projects" page of a portfolio website.
//!
//! The page lists the repositories of a GitHub account as cards and fades its
//! fixed side navigation out once the footer scrolls over it.

mod infrastructure;
mod interface;
mod model;

pub use infrastructure::*;
pub use interface::*;
pub use model::*;

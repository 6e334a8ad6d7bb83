mod fetcher;
mod geometry;
mod scroll;

pub use fetcher::*;
pub use geometry::*;
pub use scroll::*;

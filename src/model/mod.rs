mod entities;
mod error;
mod geometry;
mod response;

pub use entities::*;
pub use error::*;
pub use geometry::*;
pub use response::*;

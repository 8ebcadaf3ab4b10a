//! Data-source and collaborator boundaries: the feed catalog coming in, the
//! boost command going out.

mod boost;
mod catalog;
mod models;

pub use boost::*;
pub use catalog::*;
pub use models::*;

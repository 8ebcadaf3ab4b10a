//! The components module contains all shared components for our app.

mod app;
mod boost_modal;
mod header;
mod icons;
mod video_feed;
mod video_player;

pub use app::*;
pub use boost_modal::*;
pub use header::*;
pub use icons::*;
pub use video_feed::*;
pub use video_player::*;

//! Feed core: scroll-to-active-item resolution and per-item playback state.
//!
//! Everything here is platform-neutral and synchronous; the browser pieces
//! (media elements, event listeners, promise resolution) live in the
//! component layer and drive these state machines through explicit commands.

pub mod gate;
pub mod playback;
pub mod preload;
pub mod scroll;

pub use gate::{Interaction, InteractionGate};
pub use playback::{FeedPlayback, PlayOutcome, PlayRequest, PlaybackPhase, ToggleAction};
pub use preload::PreloadHint;
pub use scroll::FeedScrollTracker;

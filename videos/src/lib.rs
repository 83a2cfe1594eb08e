//! Video lesson library and watched-toggle flow.
//!
//! Available only once the student is enrolled. The library holds the lesson
//! list and a detached copy of the selected video (the player pane); a
//! successful toggle updates both copies to the identical value, a failed one
//! changes neither. Toggles on different videos are independent; a toggle in
//! flight for a video only blocks that video's own control.

pub mod api;
pub mod library;

pub use api::VideoApi;
pub use library::{toggle_watched, ToggleIntent, VideoLibrary};

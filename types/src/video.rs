//! Video lessons and watched-progress tracking.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend identifier for a video lesson.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VideoId(u64);

impl VideoId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A video lesson with its watched checkpoint.
///
/// The `url` is a playable-content locator; playback itself is delegated to
/// whatever surface hosts the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub url: String,
    pub title: String,
    pub description: String,
    pub watched: bool,
}

//! Course metadata as presented on the course detail view.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend identifier for a course.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourseId(u64);

impl CourseId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Static course metadata fetched once per page load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    /// Price in the backend's minor currency unit.
    pub price: u64,
    pub instructor_name: String,
    pub image_url: String,
    pub sections: Vec<CourseSection>,
}

/// A named section within a course outline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseSection {
    pub id: u64,
    pub title: String,
}

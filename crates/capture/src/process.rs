use serde::{Deserialize, Serialize};
use std::fmt;

/// A process observed in the capture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    pub image_name: String,
    pub id: u32,
}

impl Process {
    pub fn new(image_name: impl Into<String>, id: u32) -> Self {
        Self {
            image_name: image_name.into(),
            id,
        }
    }

    /// Identity string used for keys and report ordering.
    pub fn identity(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.image_name, self.id)
    }
}

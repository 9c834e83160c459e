#![forbid(unsafe_code)]

use crate::domain::{ImageId, ProcessId};

/// An (image, process) pair tracked by the candidacy map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateKey(pub ImageId, pub ProcessId);

impl CandidateKey {
    pub fn new(image: ImageId, process: ProcessId) -> Self {
        Self(image, process)
    }

    pub fn image(self) -> ImageId {
        self.0
    }

    pub fn process(self) -> ProcessId {
        self.1
    }
}

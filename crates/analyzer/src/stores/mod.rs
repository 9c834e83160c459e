#![forbid(unsafe_code)]

mod candidacy;
mod candidate_key;
mod images;
mod processes;

pub use candidacy::CandidacyMap;
pub use candidate_key::CandidateKey;
pub use images::ImageStore;
pub use processes::ProcessStore;

use crate::domain::{ImageId, ProcessId};
use capture::{Image, Process};

/// State owned by a single classification pass.
#[derive(Debug, Default)]
pub struct Stores {
    pub processes: ProcessStore,
    pub images: ImageStore,
    pub candidacy: CandidacyMap,
}

impl Stores {
    pub fn ensure_process(&mut self, process: &Process) -> ProcessId {
        self.processes.ensure(process)
    }

    pub fn ensure_image(&mut self, image: &Image) -> ImageId {
        self.images.ensure(image)
    }
}

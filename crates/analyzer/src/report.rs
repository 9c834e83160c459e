#![forbid(unsafe_code)]

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A process that loads an image statically but never runs its code.
///
/// Candidates order by process, then image, ignoring case; exact byte order
/// only breaks ties between names that differ in case alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DelayLoadCandidate {
    pub process: String,
    pub image: String,
}

impl DelayLoadCandidate {
    pub fn new(process: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            process: process.into(),
            image: image.into(),
        }
    }

    fn folded_key(&self) -> (String, String) {
        (self.process.to_lowercase(), self.image.to_lowercase())
    }
}

impl Ord for DelayLoadCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded_key()
            .cmp(&other.folded_key())
            .then_with(|| (&self.process, &self.image).cmp(&(&other.process, &other.image)))
    }
}

impl PartialOrd for DelayLoadCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for DelayLoadCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} can delay load {}", self.process, self.image)
    }
}

/// Counters describing what a classification pass saw.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct PassStats {
    pub processes: usize,
    pub images: usize,
    pub static_candidates: usize,
    pub accesses_scanned: usize,
    pub skipped_unknown_process: usize,
    pub skipped_excluded_process: usize,
    pub skipped_no_file: usize,
    pub skipped_not_image: usize,
    pub skipped_not_code: usize,
    pub loader_accesses: usize,
    pub disqualifying_accesses: usize,
    pub candidates: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DelayLoadReport {
    /// Sorted by process identity, then image path.
    pub candidates: Vec<DelayLoadCandidate>,
    pub stats: PassStats,
}

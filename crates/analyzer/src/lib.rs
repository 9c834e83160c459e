#![forbid(unsafe_code)]

mod classifier;
pub mod domain;
mod error;
mod loader;
mod report;
pub mod stores;

pub use classifier::{DelayLoadClassifier, analyze_file};
pub use error::Error;
pub use loader::LoaderSignature;
pub use report::{DelayLoadCandidate, DelayLoadReport, PassStats};

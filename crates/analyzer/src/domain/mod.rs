#![forbid(unsafe_code)]

mod ids;

pub use ids::{ImageId, ImageKey, ProcessId, ProcessKey};

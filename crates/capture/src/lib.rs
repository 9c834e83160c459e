#![forbid(unsafe_code)]

mod error;
pub mod image;
pub mod page;
pub mod process;
pub mod section;
mod trace_capture;

pub use error::Error;
pub use image::{Image, ImageSection, LoadReason};
pub use page::{AccessedPage, Page, PageCategory, Stack, StackFrame};
pub use process::Process;
pub use section::{ImageSectionResolver, SectionName, SectionResolver};
pub use trace_capture::{ProcessRecord, ReferenceSetInterval, SCHEMA_VERSION, TraceCapture};

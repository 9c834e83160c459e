#![allow(dead_code)]

use capture::{
    AccessedPage, Image, ImageSection, LoadReason, Page, PageCategory, Process, ProcessRecord,
    ReferenceSetInterval, Stack, StackFrame, TraceCapture,
};

pub const TEXT_OFFSET: u64 = 0x1000;
pub const DATA_OFFSET: u64 = 0x3000;

pub fn image(path: &str, load_reason: LoadReason) -> Image {
    Image::new(path, load_reason, Some(36_000)).with_sections(vec![
        ImageSection::new(".text", 0x400, 0x2000),
        ImageSection::new(".data", 0x2000, 0x4000),
    ])
}

pub fn process(name: &str, id: u32, images: Vec<Image>) -> ProcessRecord {
    ProcessRecord {
        process: Process::new(name, id),
        images,
    }
}

pub fn access(
    process: Option<Process>,
    path: &str,
    file_offset: u64,
    frames: Option<Vec<StackFrame>>,
) -> AccessedPage {
    AccessedPage {
        process,
        page: Some(Page {
            path: Some(path.into()),
            category: PageCategory::Image,
            file_offset: Some(file_offset),
        }),
        stack: frames.map(|frames| Stack { frames }),
    }
}

/// A code access from `process` with an ordinary application stack.
pub fn code_access(process: &Process, path: &str) -> AccessedPage {
    access(
        Some(process.clone()),
        path,
        TEXT_OFFSET,
        Some(vec![
            StackFrame::new("app.exe", "main"),
            StackFrame::new("ntdll.dll", "RtlUserThreadStart"),
        ]),
    )
}

/// A code access from `process` made while the loader prepares the image.
pub fn loader_access(process: &Process, path: &str) -> AccessedPage {
    access(
        Some(process.clone()),
        path,
        TEXT_OFFSET,
        Some(vec![StackFrame::new(
            "ntdll.dll",
            "LdrpPrepareModuleForExecution",
        )]),
    )
}

pub fn build_capture(processes: Vec<ProcessRecord>, accesses: Vec<AccessedPage>) -> TraceCapture {
    TraceCapture {
        processes,
        reference_set: vec![ReferenceSetInterval {
            start: Some(0),
            end: Some(100),
            page_accesses: accesses,
        }],
        ..Default::default()
    }
}

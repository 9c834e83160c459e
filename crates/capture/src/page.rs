use crate::Process;
use serde::{Deserialize, Serialize};

/// Classification of a resident page by what backs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageCategory {
    Image,
    CopyOnWriteImage,
    SessionCopyOnWriteImage,
    Driver,
    MappedFile,
    ProcessPrivate,
    PagedPool,
    NonPagedPool,
    PageTable,
    Metafile,
    #[default]
    #[serde(other)]
    Other,
}

impl PageCategory {
    /// Pages that belong to a mapped image and can be resolved to a section.
    pub fn is_image_backed(self) -> bool {
        matches!(
            self,
            Self::Image | Self::CopyOnWriteImage | Self::SessionCopyOnWriteImage | Self::Driver
        )
    }

    /// Pages the image loader touches while preparing or tearing down a
    /// user-mode image.
    pub fn is_loader_mapped(self) -> bool {
        matches!(self, Self::Image | Self::CopyOnWriteImage)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub category: PageCategory,
    #[serde(default)]
    pub file_offset: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackFrame {
    /// File name of the image owning the frame's address.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub function: Option<String>,
}

impl StackFrame {
    pub fn new(image: impl Into<String>, function: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            function: Some(function.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    #[serde(default)]
    pub frames: Vec<StackFrame>,
}

/// A single page access recorded in a reference-set interval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessedPage {
    #[serde(default)]
    pub process: Option<Process>,
    #[serde(default)]
    pub page: Option<Page>,
    #[serde(default)]
    pub stack: Option<Stack>,
}

impl AccessedPage {
    /// Path of the file backing the accessed page, if it resolved to one.
    pub fn path(&self) -> Option<&str> {
        self.page.as_ref()?.path.as_deref()
    }

    pub fn category(&self) -> PageCategory {
        self.page.as_ref().map(|page| page.category).unwrap_or_default()
    }

    pub fn frames(&self) -> impl Iterator<Item = &StackFrame> {
        self.stack.iter().flat_map(|stack| stack.frames.iter())
    }
}

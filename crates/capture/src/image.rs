use educe::Educe;
use serde::{Deserialize, Serialize};

/// Why the loader mapped an image into a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadReason {
    /// Pulled in through the import table of another image.
    StaticDependency,
    /// Loaded explicitly at runtime.
    Dynamic,
    #[default]
    #[serde(other)]
    Other,
}

/// A named section of an image and the file range it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSection {
    pub name: String,
    pub base: u64,
    pub limit: u64,
}

impl ImageSection {
    pub fn new(name: impl Into<String>, base: u64, limit: u64) -> Self {
        Self {
            name: name.into(),
            base,
            limit,
        }
    }

    #[inline]
    pub fn contains(&self, offset: u64) -> bool {
        (self.base..self.limit).contains(&offset)
    }
}

/// An image loaded into a process.
///
/// Equality only considers the load itself; the section table is lookup
/// data and does not take part in identity.
#[derive(Clone, Educe, Serialize, Deserialize)]
#[educe(Debug, Eq, PartialEq)]
pub struct Image {
    pub path: String,

    #[serde(default)]
    pub load_reason: LoadReason,

    /// Present iff the image was actually mapped during the capture.
    #[serde(default)]
    pub load_time: Option<u64>,

    /// Whether symbol data (and with it the section table) is available.
    #[serde(default)]
    #[educe(Eq(ignore))]
    pub symbols_loaded: bool,

    #[serde(default)]
    #[educe(Debug(ignore), Eq(ignore))]
    pub sections: Vec<ImageSection>,
}

impl Image {
    pub fn new(path: impl Into<String>, load_reason: LoadReason, load_time: Option<u64>) -> Self {
        Self {
            path: path.into(),
            load_reason,
            load_time,
            symbols_loaded: false,
            sections: Vec::new(),
        }
    }

    pub fn with_sections(mut self, sections: Vec<ImageSection>) -> Self {
        self.symbols_loaded = true;
        self.sections = sections;
        self
    }

    pub fn is_loaded(&self) -> bool {
        self.load_time.is_some()
    }

    pub fn is_static_dependency(&self) -> bool {
        self.load_reason == LoadReason::StaticDependency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_do_not_affect_identity() {
        let bare = Image::new("C:\\a.dll", LoadReason::StaticDependency, Some(1));
        let with = bare
            .clone()
            .with_sections(vec![ImageSection::new(".text", 0x400, 0x1000)]);
        assert_eq!(bare, with);
    }

    #[test]
    fn unknown_load_reason_decodes_as_other() {
        let reason: LoadReason = serde_json::from_str("\"delay_load\"").unwrap();
        assert_eq!(reason, LoadReason::Other);
    }

    #[test]
    fn section_range_is_half_open() {
        let section = ImageSection::new(".text", 0x400, 0x800);
        assert!(section.contains(0x400));
        assert!(section.contains(0x7ff));
        assert!(!section.contains(0x800));
    }
}

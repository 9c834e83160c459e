use crate::{Image, Page};
use std::fmt;

/// Name of the section a page access landed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionName {
    /// The access hit the first page of the file.
    ImageHeader,
    /// No section data was available for the access.
    Unknown,
    Named(String),
}

impl SectionName {
    /// Whether the access may have hit executable code.
    ///
    /// Unresolved sections count as code.
    pub fn is_code(&self, marker: &str) -> bool {
        match self {
            Self::ImageHeader => false,
            Self::Unknown => true,
            Self::Named(name) => name.contains(marker),
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageHeader => f.write_str("ImageHeader"),
            Self::Unknown => f.write_str("Unknown"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

pub trait SectionResolver {
    /// Name the section of `image` that contains the accessed `page`.
    fn section_name(&self, image: &Image, page: &Page) -> SectionName;
}

/// Resolves sections from the section table captured with each image.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageSectionResolver;

impl SectionResolver for ImageSectionResolver {
    fn section_name(&self, image: &Image, page: &Page) -> SectionName {
        if !page.category.is_image_backed() {
            return SectionName::Unknown;
        }

        let offset = page.file_offset.unwrap_or(0);
        if offset == 0 {
            return SectionName::ImageHeader;
        }
        if !image.symbols_loaded {
            return SectionName::Unknown;
        }

        image
            .sections
            .iter()
            .find(|section| section.contains(offset))
            .map_or(SectionName::Unknown, |section| {
                SectionName::Named(section.name.clone())
            })
    }
}

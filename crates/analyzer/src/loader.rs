#![forbid(unsafe_code)]

use capture::{AccessedPage, StackFrame};

/// Recognizes page accesses made by the image loader while it maps, prepares
/// or unloads an image.
#[derive(Debug, Clone)]
pub struct LoaderSignature {
    module: String,
    routines: Vec<String>,
}

impl LoaderSignature {
    pub fn new(config: &config::Classifier) -> Self {
        Self {
            module: config.loader_module.clone(),
            routines: config.loader_routines.clone(),
        }
    }

    /// A frame in the loader module running one of the allow-listed routines.
    pub fn matches_frame(&self, frame: &StackFrame) -> bool {
        let (Some(image), Some(function)) = (frame.image.as_deref(), frame.function.as_deref())
        else {
            return false;
        };
        image.contains(self.module.as_str())
            && self
                .routines
                .iter()
                .any(|routine| function.contains(routine.as_str()))
    }

    /// Whether the access came from the loader. Accesses without a stack never
    /// do.
    pub fn is_loader_access(&self, access: &AccessedPage) -> bool {
        access.category().is_loader_mapped()
            && access.frames().any(|frame| self.matches_frame(frame))
    }
}

#![forbid(unsafe_code)]

use crate::Error;
use serde::{Deserialize, Serialize};
use serde_with::{OneOrMany, formats::PreferMany, serde_as};

/// Tunables of the delay-load classification pass.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Classifier {
    /// Substring identifying a code section by name.
    pub code_section_marker: String,

    /// Substring of the file name of the module hosting the image loader.
    pub loader_module: String,

    /// Loader-internal routines whose page touches do not count as use.
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    pub loader_routines: Vec<String>,

    /// Process image names whose accesses are ignored entirely.
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    pub excluded_processes: Vec<String>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            code_section_marker: ".text".into(),
            loader_module: "ntdll".into(),
            loader_routines: vec![
                "LdrpPrepareModuleForExecution".into(),
                "LdrUnloadDll".into(),
                "LdrpDrainWorkQueue".into(),
            ],
            excluded_processes: vec!["MemCompression".into()],
        }
    }
}

impl Classifier {
    /// Reject values that would make every frame or section match.
    pub fn validate(&self) -> Result<(), Error> {
        if self.code_section_marker.is_empty() {
            return Err(Error::Invalid {
                field: "code_section_marker",
                reason: "must not be empty",
            });
        }
        if self.loader_module.is_empty() {
            return Err(Error::Invalid {
                field: "loader_module",
                reason: "must not be empty",
            });
        }
        if self.loader_routines.iter().any(String::is_empty) {
            return Err(Error::Invalid {
                field: "loader_routines",
                reason: "entries must not be empty",
            });
        }
        Ok(())
    }
}

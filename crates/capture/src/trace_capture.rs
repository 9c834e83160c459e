use crate::{AccessedPage, Error, Image, Process};
use humansize::{DECIMAL, format_size};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use tracing::{debug, warn};

/// Newest capture layout this crate understands.
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// A decoded trace: every process with its images, and the page accesses
/// recorded in each reference-set interval.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraceCapture {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Events the decoder reported as lost.
    #[serde(default)]
    pub lost_events: u64,

    #[serde(default)]
    pub processes: Vec<ProcessRecord>,

    #[serde(default)]
    pub reference_set: Vec<ReferenceSetInterval>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRecord {
    #[serde(flatten)]
    pub process: Process,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferenceSetInterval {
    #[serde(default)]
    pub start: Option<u64>,
    #[serde(default)]
    pub end: Option<u64>,
    #[serde(default)]
    pub page_accesses: Vec<AccessedPage>,
}

impl TraceCapture {
    /// Read a capture from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_owned()));
        }
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        debug!(?path, size = %format_size(size, DECIMAL), "reading trace capture");

        let capture: Self = serde_json::from_reader(BufReader::new(file))?;
        capture.check()
    }

    /// Parse a capture from an in-memory JSON document.
    pub fn from_json(document: &str) -> Result<Self, Error> {
        let capture: Self = serde_json::from_str(document)?;
        capture.check()
    }

    /// Every page access of every interval, in recording order.
    pub fn page_accesses(&self) -> impl Iterator<Item = &AccessedPage> {
        self.reference_set
            .iter()
            .flat_map(|interval| interval.page_accesses.iter())
    }

    fn check(self) -> Result<Self, Error> {
        if self.schema_version > SCHEMA_VERSION {
            return Err(Error::UnsupportedSchema {
                found: self.schema_version,
                supported: SCHEMA_VERSION,
            });
        }
        if self.lost_events > 0 {
            warn!(
                lost_events = self.lost_events,
                "capture has lost events; results may be incomplete"
            );
        }
        debug!(
            processes = self.processes.len(),
            intervals = self.reference_set.len(),
            "trace capture decoded"
        );
        Ok(self)
    }
}

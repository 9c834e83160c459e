#![forbid(unsafe_code)]

use capture::Process;
use slotmap::new_key_type;
use std::fmt;

new_key_type! { pub struct ProcessId; }
new_key_type! { pub struct ImageId; }

/// Process identity as printed in reports: `<image name> (<pid>)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ProcessKey(String);

impl ProcessKey {
    pub fn new(process: &Process) -> Self {
        Self(process.identity())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ProcessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProcessKey").field(&self.0).finish()
    }
}

/// Image path exactly as recorded in the trace.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ImageKey(String);

impl ImageKey {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }
}

impl fmt::Debug for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ImageKey").field(&self.0).finish()
    }
}

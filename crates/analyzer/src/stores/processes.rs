#![forbid(unsafe_code)]

use crate::domain::{ProcessId, ProcessKey};
use capture::Process;
use slotmap::SlotMap;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct ProcessStore {
    processes: SlotMap<ProcessId, ProcessKey>,
    by_key: HashMap<ProcessKey, ProcessId>,
}

impl ProcessStore {
    pub fn ensure(&mut self, process: &Process) -> ProcessId {
        let key = ProcessKey::new(process);
        if let Some(id) = self.by_key.get(&key) {
            return *id;
        }
        let id = self.processes.insert(key.clone());
        self.by_key.insert(key, id);
        id
    }

    pub fn get(&self, id: ProcessId) -> Option<&ProcessKey> {
        self.processes.get(id)
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

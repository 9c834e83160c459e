#![forbid(unsafe_code)]

use crate::domain::{ImageId, ImageKey};
use capture::Image;
use slotmap::SlotMap;
use std::collections::HashMap;

/// Loaded images by path. The first record seen for a path is the one kept
/// for section lookups.
#[derive(Debug, Default)]
pub struct ImageStore {
    images: SlotMap<ImageId, Image>,
    by_key: HashMap<ImageKey, ImageId>,
}

impl ImageStore {
    pub fn ensure(&mut self, image: &Image) -> ImageId {
        let key = ImageKey::new(image.path.as_str());
        if let Some(id) = self.by_key.get(&key) {
            return *id;
        }
        let id = self.images.insert(image.clone());
        self.by_key.insert(key, id);
        id
    }

    pub fn get(&self, id: ImageId) -> Option<&Image> {
        self.images.get(id)
    }

    pub fn id_by_path(&self, path: &str) -> Option<ImageId> {
        self.by_key.get(&ImageKey::new(path)).copied()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

use crate::error::{ListError, SnapshotError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opaque reference to a remote item, as handed out by the storage service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef(pub String);

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One immediate child of a remote folder. `size` is `None` when the service
/// does not report a byte size for the item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub is_folder: bool,
    pub size: Option<u64>,
    pub item_ref: ItemRef,
}

/// Resolves a folder reference to its immediate entries. Pagination,
/// rate-limiting and auth are entirely the implementor's concern; failures
/// must come back as a `ListError`, never as a truncated listing.
pub trait Lister {
    fn list_children(&self, folder: &ItemRef) -> Result<Vec<Entry>, ListError>;
}

/// In-memory listing snapshot mapping folder references to their entries.
/// Loadable from a JSON file, which stands in for an authenticated remote
/// client behind the same `Lister` seam.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SnapshotLister {
    folders: HashMap<String, Vec<Entry>>,
}

impl SnapshotLister {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let file = File::open(path)?;
        let lister = serde_json::from_reader(BufReader::new(file))?;
        Ok(lister)
    }

    pub fn insert(&mut self, folder: ItemRef, entries: Vec<Entry>) {
        self.folders.insert(folder.0, entries);
    }
}

impl Lister for SnapshotLister {
    fn list_children(&self, folder: &ItemRef) -> Result<Vec<Entry>, ListError> {
        self.folders
            .get(&folder.0)
            .cloned()
            .ok_or_else(|| ListError::Malformed(format!("unknown folder reference {}", folder)))
    }
}

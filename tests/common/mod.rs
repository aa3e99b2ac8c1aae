// Shared test helpers for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;

use lifecycle_diagram::core::layout::LayoutElement;
use lifecycle_diagram::core::{
    MemoryMedium, PreferenceStore, RootController, StorageMedium, StoredValue, SupportedLocales,
    VersionSet,
};
use lifecycle_diagram::error::StorageError;
use tempfile::{tempdir, TempDir};

/// Keys written to a [`RecordingMedium`], in order.
pub type WriteLog = Rc<RefCell<Vec<String>>>;

/// In-memory medium that records every successful write.
pub struct RecordingMedium {
    entries: BTreeMap<String, StoredValue>,
    writes: WriteLog,
}

impl RecordingMedium {
    pub fn new() -> (Self, WriteLog) {
        Self::with_entries(Vec::<(&str, StoredValue)>::new())
    }

    pub fn with_entries<K: Into<String>>(
        entries: impl IntoIterator<Item = (K, StoredValue)>,
    ) -> (Self, WriteLog) {
        let writes: WriteLog = Rc::new(RefCell::new(Vec::new()));
        let medium = Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            writes: writes.clone(),
        };
        (medium, writes)
    }
}

impl StorageMedium for RecordingMedium {
    fn read(&self, key: &str) -> Option<StoredValue> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: StoredValue) -> Result<(), StorageError> {
        self.writes.borrow_mut().push(key.to_string());
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

pub fn memory_store() -> PreferenceStore {
    PreferenceStore::new(MemoryMedium::new())
}

pub fn store_with(entries: Vec<(&str, StoredValue)>) -> PreferenceStore {
    PreferenceStore::new(MemoryMedium::new().with_entries(entries))
}

/// A controller over the built-in locales and versions.
pub fn controller(store: PreferenceStore, preferred: &[&str]) -> RootController {
    RootController::new(
        store,
        SupportedLocales::builtin(),
        VersionSet::builtin(),
        preferred,
    )
}

/// A root element of fixed width that records every width change.
pub struct FakeElement {
    pub width: f64,
    pub history: Vec<Option<f64>>,
}

impl FakeElement {
    pub fn new(width: f64) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            width,
            history: Vec::new(),
        }))
    }
}

impl LayoutElement for FakeElement {
    fn client_width(&self) -> f64 {
        self.width
    }

    fn set_width(&mut self, width: Option<f64>) {
        self.history.push(width);
    }
}

/// A scratch directory with a preference file path inside it (not yet created).
pub fn preference_file() -> (TempDir, PathBuf) {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("preferences.json");
    (dir, path)
}

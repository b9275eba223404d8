use std::{collections::HashMap, sync::Mutex};

use super::{Result, StorageBackend};

/// In-memory key-value backend for tests and embedding without a filesystem.
#[derive(Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.lock().expect("storage mutex poisoned");
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock().expect("storage mutex poisoned");
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut slots = self.slots.lock().expect("storage mutex poisoned");
        slots.remove(key);
        Ok(())
    }
}

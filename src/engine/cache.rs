//! In-memory result cache, keyed by tool id.

use parking_lot::Mutex;
use std::collections::HashMap;

use super::envelope::ResultEnvelope;

/// Most-recent result envelope per tool id.
///
/// Unbounded: the catalog is small, entries never expire, and the whole cache
/// lives only as long as the owning shell. Single writer: the dispatcher.
pub struct ResultCache {
    entries: Mutex<HashMap<String, ResultEnvelope>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Store an envelope, replacing any prior entry for the same tool whole.
    pub fn set(&self, tool_id: &str, envelope: ResultEnvelope) {
        self.entries.lock().insert(tool_id.to_string(), envelope);
    }

    pub fn get(&self, tool_id: &str) -> Option<ResultEnvelope> {
        self.entries.lock().get(tool_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

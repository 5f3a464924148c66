//! Execution dispatcher: strategy selection, sequencing, cache writes.

use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::debug;

use crate::catalog::ToolDescriptor;

use super::cache::ResultCache;
use super::envelope::ResultEnvelope;
use super::input::ExecutionInput;
use super::registry::StrategyRegistry;

#[derive(Default)]
struct SequenceSlot {
    issued: u64,
    committed: u64,
}

/// Runs a tool and records its envelope.
///
/// `execute` resolves the strategy on the normalized category, runs it, and
/// writes the envelope into the cache under the tool id, replacing any prior
/// entry. Overlapping invocations for the same tool are sequenced: each takes
/// a monotonically increasing ticket before executing, and a completion older
/// than the last committed one is returned to its caller but not written to
/// the cache, so a slow stale call cannot clobber a fresher result.
///
/// There are no retries; a failed delegated call produces one error envelope
/// per invocation.
pub struct Dispatcher {
    registry: StrategyRegistry,
    cache: ResultCache,
    slots: Mutex<HashMap<String, SequenceSlot>>,
}

impl Dispatcher {
    pub fn new(registry: StrategyRegistry) -> Self {
        Self {
            registry,
            cache: ResultCache::new(),
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub async fn execute(
        &self,
        tool: &ToolDescriptor,
        input: &ExecutionInput,
    ) -> ResultEnvelope {
        let ticket = self.begin(&tool.id);
        let strategy = self.registry.resolve(&tool.category);
        let envelope = strategy.execute(tool, input).await;

        if self.commit(&tool.id, ticket) {
            self.cache.set(&tool.id, envelope.clone());
        } else {
            debug!(tool_id = %tool.id, ticket, "stale result discarded");
        }
        envelope
    }

    fn begin(&self, tool_id: &str) -> u64 {
        let mut slots = self.slots.lock();
        let slot = slots.entry(tool_id.to_string()).or_default();
        slot.issued += 1;
        slot.issued
    }

    /// True when this ticket is newer than the last committed one.
    fn commit(&self, tool_id: &str, ticket: u64) -> bool {
        let mut slots = self.slots.lock();
        let slot = slots.entry(tool_id.to_string()).or_default();
        if ticket > slot.committed {
            slot.committed = ticket;
            true
        } else {
            false
        }
    }
}

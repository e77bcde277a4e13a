use std::collections::BTreeMap;

use pagedom::NodeId;

/// Open/closed state of one entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EntryState {
    #[default]
    Closed,
    Open,
}

impl EntryState {
    pub fn is_open(self) -> bool {
        self == EntryState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            EntryState::Closed => EntryState::Open,
            EntryState::Open => EntryState::Closed,
        }
    }

    /// Name of the custom event announcing a transition into this state.
    pub fn event_name(self) -> &'static str {
        match self {
            EntryState::Open => crate::emitter::ENTRY_OPEN,
            EntryState::Closed => crate::emitter::ENTRY_CLOSE,
        }
    }
}

/// Authoritative per-entry state, keyed by entry node. Classes on the
/// document are written from this, never read back.
#[derive(Debug, Clone, Default)]
pub struct EntryStates {
    entries: BTreeMap<NodeId, EntryState>,
}

impl EntryStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, entry: NodeId) -> EntryState {
        self.entries.get(&entry).copied().unwrap_or_default()
    }

    pub fn set(&mut self, entry: NodeId, state: EntryState) {
        self.entries.insert(entry, state);
    }

    /// Tracked entries in document-id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, EntryState)> + '_ {
        self.entries.iter().map(|(id, state)| (*id, *state))
    }

    pub fn open(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter()
            .filter(|(_, state)| state.is_open())
            .map(|(id, _)| id)
    }
}

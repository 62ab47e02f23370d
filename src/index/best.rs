use std::collections::HashMap;
use std::collections::hash_map::Entry;

use log::trace;

use crate::expression::{ExprId, ExprNode, ExprStore, StoreError};
use crate::index::frontier::CoverageFrontier;

/// What is known about one value.
///
/// `id` is the first node found for the value and never changes, so it is
/// also the shortest. `precedence` is the highest precedence of any node
/// stored for the value, which may belong to a longer synonym.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestEntry {
    pub id: ExprId,
    pub precedence: u8,
}

/// Outcome of offering a candidate node to the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consideration {
    /// First node for its value; stored and reported from now on.
    NewlyCovered(ExprId),
    /// Value already covered, but this node binds tighter than anything
    /// stored for it, so it is kept as an operand for later compositions.
    Synonym(ExprId),
    /// Nothing new; the node was not stored.
    Discarded,
}

/// Map from value to the best expression known for it.
///
/// Keys are the two's-complement bit pattern of the value so every `i32`,
/// negative ones included, has a distinct key.
#[derive(Debug, Clone, Default)]
pub struct BestIndex {
    entries: HashMap<u32, BestEntry>,
    frontier: CoverageFrontier,
}

#[inline]
fn key(value: i32) -> u32 {
    value as u32
}

impl BestIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn frontier(&self) -> CoverageFrontier {
        self.frontier
    }

    pub fn entry(&self, value: i32) -> Option<&BestEntry> {
        self.entries.get(&key(value))
    }

    pub fn best_id_for(&self, value: i32) -> Option<ExprId> {
        self.entry(value).map(|entry| entry.id)
    }

    pub fn is_covered(&self, value: i32) -> bool {
        self.entries.contains_key(&key(value))
    }

    /// Record a node that is already in the store, e.g. the literal.
    ///
    /// Returns `true` if the value was not covered before.
    pub fn register(&mut self, id: ExprId, node: &ExprNode) -> bool {
        let precedence = node.precedence();
        let newly_covered = match self.entries.entry(key(node.value)) {
            Entry::Vacant(slot) => {
                slot.insert(BestEntry { id, precedence });
                true
            }
            Entry::Occupied(mut slot) => {
                let entry = slot.get_mut();
                entry.precedence = entry.precedence.max(precedence);
                false
            }
        };
        self.advance_frontier(node.value);
        newly_covered
    }

    /// Offer a freshly evaluated node. It is appended to `store` only if its
    /// value is new or it binds tighter than every node stored for the value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot hand out another id.
    pub fn consider(
        &mut self,
        store: &mut ExprStore,
        node: ExprNode,
    ) -> Result<Consideration, StoreError> {
        let precedence = node.precedence();
        let outcome = match self.entries.entry(key(node.value)) {
            Entry::Vacant(slot) => {
                let id = store.append(node)?;
                slot.insert(BestEntry { id, precedence });
                trace!("Covered {} with node {} (length {})", node.value, id, node.length);
                Consideration::NewlyCovered(id)
            }
            Entry::Occupied(mut slot) if precedence > slot.get().precedence => {
                let id = store.append(node)?;
                slot.get_mut().precedence = precedence;
                Consideration::Synonym(id)
            }
            Entry::Occupied(_) => Consideration::Discarded,
        };
        self.advance_frontier(node.value);
        Ok(outcome)
    }

    fn advance_frontier(&mut self, value: i32) {
        let entries = &self.entries;
        self.frontier
            .advance(value, |v| entries.contains_key(&key(v)));
    }
}

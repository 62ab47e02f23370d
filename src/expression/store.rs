use std::ops::{Index, Range};

use log::debug;

use crate::expression::errors::StoreError;
use crate::expression::node::{ExprId, ExprNode};
use crate::grammar::Op;

/// Append-only arena of expression nodes, bucketed by printed length.
///
/// Nodes of a given printed length are contiguous because the search only
/// appends nodes of length `L` after [`open_bucket`](Self::open_bucket)`(L)`
/// and before the next bucket is opened.
#[derive(Debug, Clone)]
pub struct ExprStore {
    nodes: Vec<ExprNode>,
    /// `bucket_starts[len]` is the id of the first node of printed length `len`
    bucket_starts: Vec<u32>,
}

// Never empty: the literal node is present from construction on.
#[allow(clippy::len_without_is_empty)]
impl ExprStore {
    /// Create a store holding only the literal node, with every bucket up to
    /// and including the literal's length already open.
    pub fn new() -> Self {
        let literal_len = Op::NotLambda.length() as usize;
        Self {
            nodes: vec![ExprNode::literal()],
            bucket_starts: vec![0; literal_len + 1],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, id: ExprId) -> Option<&ExprNode> {
        self.nodes.get(id.index())
    }

    /// The printed length whose bucket is currently being filled.
    pub fn current_length(&self) -> u32 {
        (self.bucket_starts.len() - 1) as u32
    }

    /// Mark the current end of the store as the start of bucket `length`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `length` is exactly one past the last opened bucket.
    pub fn open_bucket(&mut self, length: u32) -> Result<(), StoreError> {
        if length as usize != self.bucket_starts.len() {
            return Err(StoreError::BucketOutOfOrder {
                requested: length,
                next: self.bucket_starts.len(),
            });
        }
        let start = self.next_raw_id()?;
        debug!("Opening bucket for length {} at node {}", length, start);
        self.bucket_starts.push(start);
        Ok(())
    }

    /// Ids of every node of printed length exactly `length`.
    ///
    /// Lengths that have not been opened yet yield an empty range.
    pub fn bucket(&self, length: u32) -> Range<u32> {
        let length = length as usize;
        let Some(&start) = self.bucket_starts.get(length) else {
            return 0..0;
        };
        let end = self
            .bucket_starts
            .get(length + 1)
            .copied()
            .unwrap_or(self.nodes.len() as u32);
        start..end
    }

    /// Nodes of printed length exactly `length`, paired with their ids.
    pub fn bucket_nodes(&self, length: u32) -> impl Iterator<Item = (ExprId, &ExprNode)> {
        let range = self.bucket(length);
        let slice = &self.nodes[range.start as usize..range.end as usize];
        slice
            .iter()
            .enumerate()
            .map(move |(offset, node)| (ExprId::new(range.start + offset as u32), node))
    }

    /// # Errors
    ///
    /// Returns an error once ids no longer fit in 32 bits.
    pub fn append(&mut self, node: ExprNode) -> Result<ExprId, StoreError> {
        let id = ExprId::new(self.next_raw_id()?);
        self.nodes.push(node);
        Ok(id)
    }

    fn next_raw_id(&self) -> Result<u32, StoreError> {
        u32::try_from(self.nodes.len()).map_err(|_| StoreError::Exhausted(self.nodes.len()))
    }
}

impl Default for ExprStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<ExprId> for ExprStore {
    type Output = ExprNode;

    fn index(&self, id: ExprId) -> &ExprNode {
        &self.nodes[id.index()]
    }
}

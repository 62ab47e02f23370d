use std::fmt;

use crate::index::CoverageFrontier;

/// Snapshot taken before each length round is searched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundProgress {
    pub length: u32,
    pub expr_count: usize,
    pub frontier: CoverageFrontier,
    pub remaining: u64,
}

impl fmt::Display for RoundProgress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "considering length {}, {} exprs so far, covering {}",
            self.length, self.expr_count, self.frontier
        )
    }
}

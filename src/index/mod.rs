//! Best known expression per value, and how far coverage reaches around zero

mod best;
mod frontier;

pub use best::{BestEntry, BestIndex, Consideration};
pub use frontier::CoverageFrontier;

#[cfg(test)]
mod tests;

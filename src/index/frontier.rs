use std::fmt;

/// First uncovered value on each side of zero.
///
/// Only used for progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageFrontier {
    pub negative: i32,
    pub positive: i32,
}

impl CoverageFrontier {
    pub fn new() -> Self {
        Self {
            negative: 0,
            positive: 0,
        }
    }

    /// Move the cursors outward past every covered value, if `value` was
    /// the one blocking either of them.
    pub fn advance(&mut self, value: i32, is_covered: impl Fn(i32) -> bool) {
        if value == self.positive {
            while is_covered(self.positive) {
                match self.positive.checked_add(1) {
                    Some(next) => self.positive = next,
                    None => break,
                }
            }
        }
        if value == self.negative {
            while is_covered(self.negative) {
                match self.negative.checked_sub(1) {
                    Some(next) => self.negative = next,
                    None => break,
                }
            }
        }
    }
}

impl Default for CoverageFrontier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CoverageFrontier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.negative, self.positive)
    }
}

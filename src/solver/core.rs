use log::{debug, info};
use rayon::prelude::*;

use crate::expression::{
    ExprId, ExprNode, ExprStore, eval_binary, eval_unary, parse_and_evaluate,
};
use crate::grammar::Op;
use crate::index::{BestIndex, Consideration};
use crate::solver::config::SearchConfig;
use crate::solver::errors::SolverError;
use crate::solver::progress::RoundProgress;

/// Length-by-length search for the shortest expression of every value in a range.
///
/// Round `L` builds every expression of printed length `L` from nodes of
/// strictly shorter lengths. Rounds run in increasing order, so the first
/// node recorded for a value is one of the shortest for it.
pub struct ExpressionSolver {
    config: SearchConfig,
    store: ExprStore,
    index: BestIndex,
    remaining: u64,
}

impl ExpressionSolver {
    /// Create a solver whose store and index hold only the `![]{}` literal.
    pub fn new(config: SearchConfig) -> Self {
        let store = ExprStore::new();
        let mut index = BestIndex::new();
        let mut remaining = config.width();

        let literal = store[ExprId::LITERAL];
        if index.register(ExprId::LITERAL, &literal) && config.contains(literal.value) {
            remaining -= 1;
        }

        Self {
            config,
            store,
            index,
            remaining,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn store(&self) -> &ExprStore {
        &self.store
    }

    pub fn index(&self) -> &BestIndex {
        &self.index
    }

    /// Values in the configured range that have no expression yet.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Search until every value in the range is covered.
    ///
    /// # Errors
    ///
    /// Returns an error if the store runs out of ids or a node's length
    /// disagrees with the grammar, which means the search itself is broken.
    pub fn run(&mut self) -> Result<(), SolverError> {
        self.run_with_progress(|_| {})
    }

    /// Like [`run`](Self::run), calling `observer` before each round.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub fn run_with_progress(
        &mut self,
        mut observer: impl FnMut(&RoundProgress),
    ) -> Result<(), SolverError> {
        info!(
            "Searching for shortest expressions of [{}, {}]",
            self.config.min, self.config.max
        );

        while !self.is_complete() {
            let length = self.store.current_length() + 1;
            let progress = self.progress(length);
            debug!("{}", progress);
            observer(&progress);
            self.search_round(length)?;
        }

        info!(
            "Covered [{}, {}] with {} expressions up to length {}",
            self.config.min,
            self.config.max,
            self.store.len(),
            self.store.current_length()
        );
        Ok(())
    }

    pub fn progress(&self, length: u32) -> RoundProgress {
        RoundProgress {
            length,
            expr_count: self.store.len(),
            frontier: self.index.frontier(),
            remaining: self.remaining,
        }
    }

    /// Build and record every expression of printed length `length`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `length` is the next round, or on the
    /// failures listed for [`run`](Self::run).
    pub fn search_round(&mut self, length: u32) -> Result<(), SolverError> {
        self.store.open_bucket(length)?;

        for op in Op::UNARY {
            let Some(operand_len) = length.checked_sub(op.length()) else {
                continue;
            };
            for lhs in self.store.bucket(operand_len) {
                self.compose(op, length, ExprId::new(lhs), ExprId::LITERAL)?;
            }
        }

        let min_len = Op::NotLambda.length();
        for op in Op::BINARY {
            let Some(operands_len) = length.checked_sub(op.length()) else {
                continue;
            };
            if operands_len < 2 * min_len {
                continue;
            }
            for lhs_len in min_len..=operands_len - min_len {
                let rhs_range = self.store.bucket(operands_len - lhs_len);
                for lhs in self.store.bucket(lhs_len) {
                    for rhs in rhs_range.clone() {
                        self.compose(op, length, ExprId::new(lhs), ExprId::new(rhs))?;
                    }
                }
            }
        }

        Ok(())
    }

    fn compose(
        &mut self,
        op: Op,
        length: u32,
        lhs: ExprId,
        rhs: ExprId,
    ) -> Result<(), SolverError> {
        let lhs_node = self.store[lhs];
        let rhs_node = self.store[rhs];

        let actual = ExprNode::composed_length(op, &lhs_node, &rhs_node);
        if actual != length {
            return Err(SolverError::LengthMismatch {
                op,
                expected: length,
                actual,
            });
        }

        let evaluated = if op.is_unary() {
            eval_unary(op, &lhs_node)
        } else {
            eval_binary(op, &lhs_node, &rhs_node)
        };
        let Ok(value) = evaluated else {
            return Ok(());
        };

        let node = ExprNode {
            op,
            length,
            lhs,
            rhs,
            value,
        };
        if let Consideration::NewlyCovered(_) = self.index.consider(&mut self.store, node)?
            && self.config.contains(value)
        {
            self.remaining -= 1;
        }
        Ok(())
    }

    pub fn best_id_for(&self, value: i32) -> Option<ExprId> {
        self.index.best_id_for(value)
    }

    /// Printed form of the shortest expression found for `value`.
    pub fn render_value(&self, value: i32) -> Option<String> {
        self.best_id_for(value).map(|id| self.store.render(id))
    }

    /// One line per value in the range, ascending: two spaces and the
    /// expression, or `(none)` if the value was never reached.
    pub fn report_lines(&self) -> Vec<String> {
        (self.config.min..=self.config.max)
            .into_par_iter()
            .map(|value| match self.best_id_for(value) {
                Some(id) => format!("  {}", self.store.display(id)),
                None => "  (none)".to_string(),
            })
            .collect()
    }

    /// Re-parse every reported expression and check it evaluates to its value.
    ///
    /// # Errors
    ///
    /// Returns the first mismatch or parse failure found.
    pub fn verify(&self) -> Result<(), SolverError> {
        (self.config.min..=self.config.max)
            .into_par_iter()
            .try_for_each(|value| {
                let Some(rendered) = self.render_value(value) else {
                    return Ok(());
                };
                match parse_and_evaluate(&rendered) {
                    Ok(parsed) if parsed == value => Ok(()),
                    Ok(parsed) => Err(SolverError::VerificationFailed {
                        value,
                        rendered,
                        reason: format!("evaluates to {}", parsed),
                    }),
                    Err(err) => Err(SolverError::verification(value, &rendered, err)),
                }
            })
    }
}

#[cfg(test)]
mod tests_compose {
    use super::ExpressionSolver;
    use crate::expression::ExprId;
    use crate::grammar::Op;
    use crate::solver::{SearchConfig, SolverError};

    fn fresh(min: i32, max: i32) -> ExpressionSolver {
        match SearchConfig::new(min, max) {
            Ok(config) => ExpressionSolver::new(config),
            Err(e) => panic!("invalid config: {}", e),
        }
    }

    #[test]
    fn test_length_mismatch_is_fatal() {
        let mut solver = fresh(1, 1);
        let result = solver.compose(Op::Add, 12, ExprId::LITERAL, ExprId::LITERAL);
        assert!(
            matches!(
                result,
                Err(SolverError::LengthMismatch {
                    op: Op::Add,
                    expected: 12,
                    actual: 11,
                })
            ),
            "got {:?}",
            result
        );
        assert_eq!(solver.store().len(), 1);
        assert_eq!(solver.remaining(), 1);
        assert_eq!(solver.best_id_for(-1), None);
    }

    #[test]
    fn test_matching_length_is_recorded() {
        let mut solver = fresh(-1, -1);
        assert!(solver.store.open_bucket(6).is_ok());
        let result = solver.compose(Op::Compl, 6, ExprId::LITERAL, ExprId::LITERAL);
        assert!(result.is_ok());
        assert_eq!(solver.store().len(), 2);
        assert_eq!(solver.remaining(), 0);
        assert_eq!(solver.render_value(-1).as_deref(), Some("~![]{}"));
    }
}

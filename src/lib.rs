//! Shortexpr - shortest expressions built from `![]{}` for every integer in a range
//!
//! Expressions are made only of the literal `![]{}` (a negated lambda, i.e.
//! `false`, i.e. zero), parentheses, prefix `-` and `~`, and the C binary
//! arithmetic and bitwise operators. Length is counted in printed characters.

pub mod expression;
pub mod grammar;
pub mod index;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{EvalError, ExprId, ExprNode, ExprStore, ParseError, parse_and_evaluate};
pub use grammar::Op;
pub use solver::{ExpressionSolver, RoundProgress, SearchConfig, SolverError};
pub use utils::{UtilsError, validate_range};

/// Find the shortest expression for every value in `[min, max]`
///
/// This is a convenience function that runs a solver to completion and
/// returns the report lines, one per value in ascending order.
///
/// # Errors
///
/// This function will return an error if:
/// * `min` is greater than `max`
/// * The search hits an internal inconsistency
///
/// # Examples
///
/// ```
/// use shortexpr::find_expressions;
///
/// match find_expressions(-1, 1) {
///     Ok(lines) => assert_eq!(lines, vec!["  ~![]{}", "  ![]{}", "  -~![]{}"]),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_expressions(min: i32, max: i32) -> Result<Vec<String>, SolverError> {
    let config = SearchConfig::new(min, max)?;

    let mut solver = ExpressionSolver::new(config);
    solver.run()?;
    Ok(solver.report_lines())
}

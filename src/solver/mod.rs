mod config;
mod core;
mod errors;
mod progress;

pub use config::SearchConfig;
pub use self::core::ExpressionSolver;
pub use errors::SolverError;
pub use progress::RoundProgress;

//! Expression nodes: storage, evaluation, rendering and re-parsing

mod display;
mod errors;
mod eval;
mod node;
mod parser;
mod store;

pub use display::Rendered;
pub use errors::{EvalError, ParseError, StoreError};
pub use eval::{apply_binary, apply_unary, eval_binary, eval_unary};
pub use node::{ExprId, ExprNode};
pub use parser::parse_and_evaluate;
pub use store::ExprStore;

use std::fmt;

use crate::expression::node::ExprId;
use crate::expression::store::ExprStore;
use crate::grammar::Op;

/// A node rendered in its printed form.
///
/// No parentheses are added beyond explicit [`Op::Paren`] nodes: every
/// stored node is already safe to print as is.
#[derive(Debug, Clone, Copy)]
pub struct Rendered<'a> {
    store: &'a ExprStore,
    id: ExprId,
}

impl ExprStore {
    pub fn display(&self, id: ExprId) -> Rendered<'_> {
        Rendered { store: self, id }
    }

    pub fn render(&self, id: ExprId) -> String {
        self.display(id).to_string()
    }
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn fmt_node(f: &mut fmt::Formatter, store: &ExprStore, id: ExprId) -> fmt::Result {
            let node = store.get(id).ok_or(fmt::Error)?;
            match node.op {
                Op::NotLambda => f.write_str(node.op.symbol()),
                Op::Paren => {
                    f.write_str("(")?;
                    fmt_node(f, store, node.lhs)?;
                    f.write_str(")")
                }
                op if op.is_unary() => {
                    f.write_str(op.symbol())?;
                    fmt_node(f, store, node.lhs)
                }
                op => {
                    fmt_node(f, store, node.lhs)?;
                    f.write_str(op.symbol())?;
                    fmt_node(f, store, node.rhs)
                }
            }
        }

        fmt_node(f, self.store, self.id)
    }
}

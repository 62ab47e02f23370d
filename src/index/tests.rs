use crate::expression::{ExprId, ExprNode, ExprStore};
use crate::grammar::Op;
use crate::index::{BestIndex, Consideration, CoverageFrontier};

fn node(op: Op, value: i32, length: u32) -> ExprNode {
    ExprNode {
        op,
        length,
        lhs: ExprId::LITERAL,
        rhs: ExprId::LITERAL,
        value,
    }
}

#[test]
fn test_first_node_wins_coverage() {
    let mut store = ExprStore::new();
    let mut index = BestIndex::new();

    let first_id = match index.consider(&mut store, node(Op::Add, 4, 11)) {
        Ok(Consideration::NewlyCovered(id)) => id,
        other => panic!("expected new coverage, got {:?}", other),
    };
    let same = index.consider(&mut store, node(Op::Sub, 4, 11));
    assert_eq!(same, Ok(Consideration::Discarded));
    assert_eq!(store.len(), 2);

    let tighter = index.consider(&mut store, node(Op::Mul, 4, 12));
    assert!(matches!(tighter, Ok(Consideration::Synonym(_))));
    assert_eq!(store.len(), 3);

    let entry = index.entry(4);
    assert_eq!(entry.map(|e| e.id), Some(first_id));
    assert_eq!(entry.map(|e| e.precedence), Some(6));
}

#[test]
fn test_lower_precedence_is_discarded() {
    let mut store = ExprStore::new();
    let mut index = BestIndex::new();
    assert!(index.consider(&mut store, node(Op::Neg, 1, 7)).is_ok());
    assert_eq!(
        index.consider(&mut store, node(Op::BitOr, 1, 13)),
        Ok(Consideration::Discarded)
    );
    assert_eq!(store.len(), 2);
}

#[test]
fn test_negative_and_extreme_keys_are_distinct() {
    let mut store = ExprStore::new();
    let mut index = BestIndex::new();
    for value in [i32::MIN, -1, i32::MAX, 1] {
        let outcome = index.consider(&mut store, node(Op::Compl, value, 6));
        assert!(matches!(outcome, Ok(Consideration::NewlyCovered(_))));
    }
    assert_eq!(index.len(), 4);
    assert!(index.is_covered(i32::MIN));
    assert!(!index.is_covered(0));
    assert_eq!(index.best_id_for(7), None);
}

#[test]
fn test_register_literal() {
    let mut index = BestIndex::new();
    assert!(index.register(ExprId::LITERAL, &ExprNode::literal()));
    assert_eq!(index.best_id_for(0), Some(ExprId::LITERAL));
    assert_eq!(
        index.frontier(),
        CoverageFrontier {
            negative: -1,
            positive: 1
        }
    );
}

#[test]
fn test_frontier_advances_over_contiguous_values() {
    let mut store = ExprStore::new();
    let mut index = BestIndex::new();
    index.register(ExprId::LITERAL, &ExprNode::literal());

    for value in [2, 3, -2] {
        assert!(index.consider(&mut store, node(Op::Neg, value, 9)).is_ok());
    }
    assert_eq!(index.frontier().positive, 1);
    assert_eq!(index.frontier().negative, -1);

    assert!(index.consider(&mut store, node(Op::Neg, 1, 7)).is_ok());
    assert_eq!(index.frontier().positive, 4);
    assert!(index.consider(&mut store, node(Op::Compl, -1, 6)).is_ok());
    assert_eq!(index.frontier().negative, -3);
    assert_eq!(index.frontier().to_string(), "(-3, 4)");
}

#[test]
fn test_frontier_stops_at_type_bounds() {
    let mut frontier = CoverageFrontier {
        negative: i32::MIN,
        positive: i32::MAX,
    };
    frontier.advance(i32::MAX, |_| true);
    frontier.advance(i32::MIN, |_| true);
    assert_eq!(frontier.positive, i32::MAX);
    assert_eq!(frontier.negative, i32::MIN);
}

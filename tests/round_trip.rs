mod common;

use common::init_logging;
use runic::{
    ast::{BinaryOperator, Expr},
    parse,
};

fn assert_round_trip(expr: &Expr) {
    let printed = expr.to_string();
    match parse(&printed) {
        Ok(reparsed) => assert_eq!(&reparsed, expr, "printed as {printed:?}"),
        Err(e) => panic!("{printed:?} printed from {expr:?} does not parse: {e}"),
    }
}

/// All trees one level deeper than `children`, built with the given operators.
fn grow(children: &[Expr], ops: &[BinaryOperator]) -> Vec<Expr> {
    let mut trees = children.to_vec();
    for left in children {
        for right in children {
            trees.extend(ops.iter()
                            .map(|op| Expr::binary(*op, left.clone(), right.clone())));
            trees.push(Expr::assign(left.clone(), right.clone()));
            trees.push(Expr::index(left.clone(), right.clone()));
        }
    }
    trees
}

#[test]
fn canonical_printing() {
    let tree = Expr::assign(Expr::index(Expr::variable("a"), Expr::literal(0)),
                            Expr::binary(BinaryOperator::LessEqual,
                                         Expr::variable("b"),
                                         Expr::binary(BinaryOperator::Mul,
                                                      Expr::literal(2),
                                                      Expr::variable("c"))));
    assert_eq!(tree.to_string(), "a[0] = b <= 2 * c");
}

#[test]
fn parsed_trees_are_expressible() {
    init_logging();
    for src in ["a", "7", "a = b = 1", "a[1][2] = x * y - 3", "p != q == r", "m[i = 0]"] {
        let tree = parse(src).unwrap();
        assert!(tree.is_expressible(), "{src}");
        assert_eq!(tree.to_string(), src);
    }
}

#[test]
fn trees_without_source_form_are_not_expressible() {
    let a = || Expr::variable("a");
    let one = || Expr::literal(1);

    let grouped = Expr::binary(BinaryOperator::Mul,
                               Expr::binary(BinaryOperator::Add, a(), one()),
                               one());
    let right_nested = Expr::binary(BinaryOperator::Sub,
                                    a(),
                                    Expr::binary(BinaryOperator::Sub, a(), one()));
    let literal_target = Expr::assign(one(), a());
    let indexed_literal = Expr::index(one(), a());
    let negative = Expr::literal(-1);
    let bad_name = Expr::variable("not a name");
    let assign_operand = Expr::binary(BinaryOperator::Add, Expr::assign(a(), one()), one());

    for tree in [grouped,
                 right_nested,
                 literal_target,
                 indexed_literal,
                 negative,
                 bad_name,
                 assign_operand]
    {
        assert!(!tree.is_expressible(), "{tree:?}");
    }
}

#[test]
fn every_small_expressible_tree_round_trips() {
    init_logging();
    let leaves = [Expr::literal(1), Expr::variable("a"), Expr::variable("b")];
    let depth_one = grow(&leaves, &BinaryOperator::ALL);
    let depth_two = grow(&depth_one,
                         &[BinaryOperator::Add, BinaryOperator::Mul, BinaryOperator::Less]);

    let mut checked = 0;
    for tree in depth_two.iter().filter(|tree| tree.is_expressible()) {
        assert_round_trip(tree);
        checked += 1;
    }
    assert!(checked > 1000, "only {checked} expressible trees generated");
}

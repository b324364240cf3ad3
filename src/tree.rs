//! Expression trees.
//!
//! A [`Node`] owns at most two children. Operator nodes always have a left child;
//! binary operators also have a right one. Leaves hold a variable name or, after
//! [substitution][Node::substitute], a boolean.

use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::token::Op;

/// Variable assignment used to parametrize one evaluation.
pub type Assignment = HashMap<String, bool>;

/// Value stored in a tree node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Op(Op),
    Var(String),
    Bool(bool),
}

/// Node of an expression tree.
///
/// `Clone` is a deep copy: the clone shares nothing with the original, so substituting
/// into it leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    value: Value,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    /// Leaf holding the variable `name`.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            value: Value::Var(name.into()),
            left: None,
            right: None,
        }
    }

    /// Leaf holding a boolean.
    pub fn constant(value: bool) -> Self {
        Self {
            value: Value::Bool(value),
            left: None,
            right: None,
        }
    }

    /// Negation of `child`, stored as the left child.
    pub fn negation(child: Node) -> Self {
        Self {
            value: Value::Op(Op::Not),
            left: Some(Box::new(child)),
            right: None,
        }
    }

    /// Binary operator node.
    ///
    /// # Panics
    ///
    /// Panics if `op` is unary.
    pub fn binary(op: Op, lhs: Node, rhs: Node) -> Self {
        assert!(op.is_binary(), "Operator {} is not binary", op);
        Self {
            value: Value::Op(op),
            left: Some(Box::new(lhs)),
            right: Some(Box::new(rhs)),
        }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Replaces every variable leaf that has a value in `assignment` by that value.
    ///
    /// Other leaves and all operator nodes are left as they are.
    pub fn substitute(&mut self, assignment: &Assignment) {
        if let Some(left) = self.left.as_deref_mut() {
            left.substitute(assignment);
        }
        if let Some(right) = self.right.as_deref_mut() {
            right.substitute(assignment);
        }
        if let Value::Var(name) = &self.value {
            if let Some(&value) = assignment.get(name) {
                self.value = Value::Bool(value);
            }
        }
    }

    /// Evaluates the tree.
    ///
    /// A variable leaf that was never substituted evaluates to `false`, and so does a
    /// missing operand.
    pub fn evaluate(&self) -> bool {
        match &self.value {
            Value::Bool(value) => *value,
            Value::Var(name) => {
                debug!("evaluate: unresolved variable '{}' taken as false", name);
                false
            }
            Value::Op(op) => {
                let lhs = self.left().is_some_and(Node::evaluate);
                let rhs = op.is_binary() && self.right().is_some_and(Node::evaluate);
                op.apply(lhs, rhs)
            }
        }
    }

    /// Evaluates a private copy of the tree under `assignment`.
    pub fn evaluate_under(&self, assignment: &Assignment) -> bool {
        let mut copy = self.clone();
        copy.substitute(assignment);
        copy.evaluate()
    }

    /// Names of the variable leaves, sorted and without duplicates.
    pub fn variables(&self) -> Vec<String> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars.into_iter().map(String::from).collect()
    }

    fn collect_variables<'a>(&'a self, vars: &mut BTreeSet<&'a str>) {
        if let Value::Var(name) = &self.value {
            vars.insert(name.as_str());
        }
        if let Some(left) = self.left() {
            left.collect_variables(vars);
        }
        if let Some(right) = self.right() {
            right.collect_variables(vars);
        }
    }

    /// Number of nodes in the tree.
    pub fn size(&self) -> usize {
        1 + self.left().map_or(0, Node::size) + self.right().map_or(0, Node::size)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn assignment(pairs: &[(&str, bool)]) -> Assignment {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn test_substitute() {
        let mut tree = Node::binary(Op::And, Node::leaf("a"), Node::negation(Node::leaf("b")));
        tree.substitute(&assignment(&[("a", true)]));

        assert_eq!(tree.value(), &Value::Op(Op::And));
        assert_eq!(tree.left().map(Node::value), Some(&Value::Bool(true)));
        let negated = tree.right().and_then(Node::left).map(Node::value);
        assert_eq!(negated, Some(&Value::Var("b".to_string())));
        assert_eq!(tree.size(), 4);
    }

    #[test]
    fn test_evaluate_operators() {
        let cases = [
            (Op::And, [false, false, false, true]),
            (Op::Or, [false, true, true, true]),
            (Op::Implies, [true, true, false, true]),
            (Op::Iff, [true, false, false, true]),
        ];
        for (op, expected) in cases {
            let tree = Node::binary(op, Node::leaf("x"), Node::leaf("y"));
            let mut i = 0;
            for x in [false, true] {
                for y in [false, true] {
                    let result = tree.evaluate_under(&assignment(&[("x", x), ("y", y)]));
                    assert_eq!(result, expected[i], "{} with x={}, y={}", op, x, y);
                    i += 1;
                }
            }
        }
    }

    #[test]
    fn test_evaluate_not() {
        let tree = Node::negation(Node::leaf("p"));
        assert!(tree.evaluate_under(&assignment(&[("p", false)])));
        assert!(!tree.evaluate_under(&assignment(&[("p", true)])));
    }

    #[test]
    fn test_unresolved_variable_is_false() {
        let tree = Node::binary(Op::Or, Node::leaf("p"), Node::leaf("q"));
        assert!(!tree.evaluate());
        assert!(Node::negation(Node::leaf("p")).evaluate());
        assert!(tree.evaluate_under(&assignment(&[("q", true)])));
    }

    #[test]
    fn test_clone_is_independent() {
        let tree = Node::binary(Op::Implies, Node::leaf("p"), Node::leaf("q"));
        let mut copy = tree.clone();
        copy.substitute(&assignment(&[("p", true), ("q", false)]));

        assert!(!copy.evaluate());
        assert_eq!(tree.variables(), vec!["p", "q"]);
        assert!(copy.variables().is_empty());
    }

    #[test]
    fn test_variables() {
        let tree = Node::binary(
            Op::Iff,
            Node::binary(Op::And, Node::leaf("b"), Node::leaf("a")),
            Node::negation(Node::leaf("b")),
        );
        assert_eq!(tree.variables(), vec!["a", "b"]);
        assert!(Node::constant(true).variables().is_empty());
        assert!(Node::constant(true).evaluate());
    }

    #[test]
    #[should_panic(expected = "Operator NOT is not binary")]
    fn test_binary_rejects_not() {
        Node::binary(Op::Not, Node::leaf("a"), Node::leaf("b"));
    }
}

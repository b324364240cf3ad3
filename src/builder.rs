//! Building expression trees from token sequences.
//!
//! The builder scans the tokens once with an operator stack and an operand stack.
//! A binary operator waits on the stack until its group is closed, and `NOT` is applied as soon
//! as its operand is complete. Parentheses only decide when operators are applied and are not
//! kept in the tree.

use std::str::FromStr;

use log::debug;

use crate::error::SyntaxError;
use crate::token::{tokenize, Op, Token};
use crate::tree::Node;
use crate::validate::validate;

#[derive(Debug, Copy, Clone)]
enum Pending {
    Group,
    Op(Op, usize),
}

/// Builds the expression tree for an already validated token sequence.
///
/// A `NOT` applies to the variable or group that follows it. On `)` the operators pushed
/// since the matching `(` are applied; a validated group holds at most one binary operator,
/// so no precedence is ever needed. Operators still pending at the end of unvalidated input
/// are applied as if the whole expression were enclosed in one more group.
pub fn build_tree<S: AsRef<str>>(tokens: &[S]) -> Result<Node, SyntaxError> {
    debug!("build_tree(tokens = {:?})", tokens.iter().map(|t| t.as_ref()).collect::<Vec<_>>());

    let mut operators: Vec<Pending> = Vec::new();
    let mut operands: Vec<Node> = Vec::new();

    for (index, raw) in tokens.iter().enumerate() {
        match Token::classify(raw.as_ref()) {
            Token::Open => operators.push(Pending::Group),
            Token::Op(op) => operators.push(Pending::Op(op, index)),
            Token::Close => {
                loop {
                    match operators.pop() {
                        Some(Pending::Group) => break,
                        Some(Pending::Op(op, at)) => reduce(op, at, &mut operands)?,
                        None => return Err(SyntaxError::UnbalancedParens { index: Some(index) }),
                    }
                }
                reduce_negations(&mut operators, &mut operands)?;
            }
            Token::Var(name) => {
                operands.push(Node::leaf(name));
                reduce_negations(&mut operators, &mut operands)?;
            }
        }
    }

    while let Some(pending) = operators.pop() {
        match pending {
            Pending::Group => return Err(SyntaxError::UnbalancedParens { index: None }),
            Pending::Op(op, at) => reduce(op, at, &mut operands)?,
        }
    }

    if operands.len() != 1 {
        return Err(SyntaxError::MalformedExpression {
            operands: operands.len(),
        });
    }
    operands.pop().ok_or(SyntaxError::MalformedExpression { operands: 0 })
}

/// Applies the negations waiting for the operand just completed.
fn reduce_negations(operators: &mut Vec<Pending>, operands: &mut Vec<Node>) -> Result<(), SyntaxError> {
    while let Some(&Pending::Op(Op::Not, at)) = operators.last() {
        operators.pop();
        reduce(Op::Not, at, operands)?;
    }
    Ok(())
}

fn reduce(op: Op, index: usize, operands: &mut Vec<Node>) -> Result<(), SyntaxError> {
    let node = if op.is_unary() {
        let child = operands.pop().ok_or(SyntaxError::MissingOperand { index })?;
        Node::negation(child)
    } else {
        // The right operand was pushed last.
        let (Some(rhs), Some(lhs)) = (operands.pop(), operands.pop()) else {
            return Err(SyntaxError::InsufficientOperands { op, index: Some(index) });
        };
        Node::binary(op, lhs, rhs)
    };
    operands.push(node);
    Ok(())
}

/// Tokenizes, validates and builds `input` into an expression tree.
///
/// ```
/// use prop_rs::builder::parse;
///
/// let tree = parse("( _ p _ => _ ( _ NOT _ q _ ) _ )").unwrap();
/// assert_eq!(tree.variables(), vec!["p", "q"]);
/// ```
pub fn parse(input: &str) -> Result<Node, SyntaxError> {
    let tokens = tokenize(input);
    validate(&tokens)?;
    build_tree(&tokens)
}

impl FromStr for Node {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

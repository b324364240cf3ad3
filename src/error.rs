use std::fmt;

use crate::token::Op;

/// Error raised while validating or building an expression.
///
/// Indices are positions in the token sequence produced by [`tokenize`][crate::token::tokenize].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// Token that is neither a variable, a parenthesis nor an operator.
    InvalidToken { token: String, index: usize },
    /// `(` right after an operand, or an operator left without its operand.
    MissingOperand { index: usize },
    /// Two operands with no operator between them.
    MissingOperator { index: usize },
    /// Operator in a position where the syntax forbids it. `token` is the spelling found in
    /// the input.
    MisplacedOperator { op: Op, token: String, index: usize },
    /// `()` with nothing inside; `index` points at the `(`.
    EmptyGroup { index: usize },
    /// Unmatched parenthesis. `None` means an unclosed `(` at end of input.
    UnbalancedParens { index: Option<usize> },
    /// Operator directly followed by `)`. `index` points at the `)`.
    DanglingOperator { op: Op, token: String, index: usize },
    /// Expression ends on an operator.
    TrailingOperator { op: Op, token: String },
    /// Groups and negations nested more than `limit` levels deep.
    NestingTooDeep { index: usize, limit: usize },
    /// No tokens at all.
    EmptyExpression,
    /// Binary operator reduced with fewer than two operands.
    InsufficientOperands { op: Op, index: Option<usize> },
    /// Not exactly one operand left after building.
    MalformedExpression { operands: usize },
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::InvalidToken { token, index } => {
                write!(f, "invalid token '{}' at position {}", token, index)
            }
            SyntaxError::MissingOperand { index } => write!(f, "missing operand at position {}", index),
            SyntaxError::MissingOperator { index } => {
                write!(f, "missing operator between operands at position {}", index)
            }
            SyntaxError::MisplacedOperator { op, token, index } => {
                write!(f, "operator '{}' ({}) misplaced at position {}", token, op.name(), index)
            }
            SyntaxError::EmptyGroup { index } => {
                write!(f, "empty parentheses at positions {} and {}", index, index + 1)
            }
            SyntaxError::UnbalancedParens { index: Some(index) } => {
                write!(f, "closing parenthesis without opening one at position {}", index)
            }
            SyntaxError::UnbalancedParens { index: None } => write!(f, "unbalanced parentheses"),
            SyntaxError::DanglingOperator { op, token, index } => write!(
                f,
                "operator '{}' ({}) not followed by an operand before ')' at position {}",
                token,
                op.name(),
                index
            ),
            SyntaxError::TrailingOperator { op, token } => write!(
                f,
                "expression ends with operator '{}' ({}), which requires an operand",
                token,
                op.name()
            ),
            SyntaxError::NestingTooDeep { index, limit } => {
                write!(f, "nesting deeper than {} levels at position {}", limit, index)
            }
            SyntaxError::EmptyExpression => write!(f, "empty expression"),
            SyntaxError::InsufficientOperands { op, index } => match index {
                Some(index) => write!(f, "insufficient operands for '{}' at position {}", op, index),
                None => write!(f, "insufficient operands for '{}'", op),
            },
            SyntaxError::MalformedExpression { operands } => {
                write!(f, "malformed expression: {} operands left, expected 1", operands)
            }
        }
    }
}

impl std::error::Error for SyntaxError {}

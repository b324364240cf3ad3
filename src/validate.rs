//! Syntactic validation of a token sequence.
//!
//! The validator makes a single pass over the tokens, tracking the open groups and the
//! previous token, and fails on the first violation. A sequence it accepts always builds into
//! exactly one tree.
//!
//! # Rules
//!
//! - Every token is a variable (ASCII letters), a parenthesis or an operator spelling.
//! - `(` and variables may only follow nothing, an operator or `(`.
//! - `)` may only follow a variable or `)`, and never closes more groups than were opened.
//! - A binary operator needs a left operand: it may only follow a variable or `)`.
//! - Every binary operator sits in its own group: a second one in the same group, or one
//!   outside any group, is misplaced. No grouping is ever inferred.
//! - `NOT` may only follow nothing, an operator or `(`.
//! - Groups and pending negations nest at most [`MAX_NESTING`] levels deep.
//! - The sequence is non-empty, all groups are closed and it does not end on an operator.

use crate::error::SyntaxError;
use crate::token::{is_variable, Token};

/// Deepest nesting of groups and negations accepted by [`validate`].
///
/// Trees are walked recursively, so this also bounds the recursion depth of every
/// operation on a parsed tree.
pub const MAX_NESTING: usize = 1000;

/// An open group; the bottom entry stands for the top level, where no binary operator may appear.
#[derive(Debug, Default)]
struct Group {
    /// A binary operator was already seen in this group.
    binary: bool,
    /// Negations still waiting for their operand.
    negations: usize,
}

/// Checks that `tokens` form a well-formed expression.
///
/// ```
/// use prop_rs::error::SyntaxError;
/// use prop_rs::token::{tokenize, Op};
/// use prop_rs::validate::validate;
///
/// assert!(validate(&tokenize("( _ a _ AND _ b _ )")).is_ok());
/// assert_eq!(
///     validate(&tokenize("AND _ p")),
///     Err(SyntaxError::MisplacedOperator { op: Op::And, token: "AND".to_string(), index: 0 })
/// );
/// ```
pub fn validate<S: AsRef<str>>(tokens: &[S]) -> Result<(), SyntaxError> {
    let mut groups: Vec<Group> = vec![Group::default()];
    let mut nesting: usize = 0;
    let mut prev: Option<(Token, &str)> = None;

    for (index, raw) in tokens.iter().enumerate() {
        let text = raw.as_ref();
        let token = Token::classify(text);
        let after_operand = matches!(prev, Some((Token::Var(_) | Token::Close, _)));

        match token {
            Token::Var(name) => {
                if !is_variable(name) {
                    return Err(SyntaxError::InvalidToken {
                        token: name.to_string(),
                        index,
                    });
                }
                if after_operand {
                    return Err(SyntaxError::MissingOperator { index });
                }
                nesting -= complete_operand(&mut groups);
            }
            Token::Open => {
                if after_operand {
                    return Err(SyntaxError::MissingOperand { index });
                }
                groups.push(Group::default());
                nesting += 1;
            }
            Token::Close => {
                if groups.len() == 1 {
                    return Err(SyntaxError::UnbalancedParens { index: Some(index) });
                }
                match prev {
                    Some((Token::Op(op), spelling)) => {
                        return Err(SyntaxError::DanglingOperator {
                            op,
                            token: spelling.to_string(),
                            index,
                        })
                    }
                    Some((Token::Open, _)) => return Err(SyntaxError::EmptyGroup { index: index - 1 }),
                    _ => {}
                }
                if let Some(group) = groups.pop() {
                    nesting -= 1 + group.negations;
                }
                // The closed group is an operand of the enclosing one.
                nesting -= complete_operand(&mut groups);
            }
            Token::Op(op) => {
                let misplaced = || SyntaxError::MisplacedOperator {
                    op,
                    token: text.to_string(),
                    index,
                };
                let allowed = if op.is_unary() { !after_operand } else { after_operand };
                if !allowed {
                    return Err(misplaced());
                }
                let top_level = groups.len() == 1;
                let Some(group) = groups.last_mut() else {
                    return Err(misplaced());
                };
                if op.is_unary() {
                    group.negations += 1;
                    nesting += 1;
                } else if top_level || group.binary {
                    return Err(misplaced());
                } else {
                    group.binary = true;
                }
            }
        }

        if nesting > MAX_NESTING {
            return Err(SyntaxError::NestingTooDeep {
                index,
                limit: MAX_NESTING,
            });
        }

        prev = Some((token, text));
    }

    match prev {
        None => Err(SyntaxError::EmptyExpression),
        Some(_) if groups.len() != 1 => Err(SyntaxError::UnbalancedParens { index: None }),
        Some((Token::Op(op), spelling)) => Err(SyntaxError::TrailingOperator {
            op,
            token: spelling.to_string(),
        }),
        Some(_) => Ok(()),
    }
}

/// Resolves the negations of the innermost group, which have just received their operand.
///
/// Returns how many nesting levels they held.
fn complete_operand(groups: &mut [Group]) -> usize {
    groups.last_mut().map_or(0, |group| std::mem::take(&mut group.negations))
}

//! Tokens of the underscore-separated expression syntax.
//!
//! An expression such as `( _ a _ AND _ ( _ NOT _ b _ ) _ )` is split on `_` into
//! tokens. Every operator has a canonical and a symbolic spelling:
//!
//! | Operator    | Spellings      |
//! |-------------|----------------|
//! | negation    | `NOT`, `-\|`   |
//! | conjunction | `AND`, `^`     |
//! | disjunction | `OR`, `V`      |
//! | implication | `=>`           |
//! | equivalence | `<=>`          |
//!
//! Spellings are normalized into [`Op`] as soon as a token is classified.

use std::collections::BTreeSet;
use std::fmt;

/// Logical operator, normalized from any of its spellings.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Op {
    Not,
    And,
    Or,
    Implies,
    Iff,
}

impl Op {
    /// Returns the operator spelled by `symbol`, if any.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "NOT" | "-|" => Some(Op::Not),
            "AND" | "^" => Some(Op::And),
            "OR" | "V" => Some(Op::Or),
            "=>" => Some(Op::Implies),
            "<=>" => Some(Op::Iff),
            _ => None,
        }
    }

    /// Canonical spelling, accepted back by [`Op::from_symbol`].
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Not => "NOT",
            Op::And => "AND",
            Op::Or => "OR",
            Op::Implies => "=>",
            Op::Iff => "<=>",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Op::Not => "NOT",
            Op::And => "AND",
            Op::Or => "OR",
            Op::Implies => "IMPLIES",
            Op::Iff => "IFF",
        }
    }

    pub fn is_unary(self) -> bool {
        self == Op::Not
    }

    pub fn is_binary(self) -> bool {
        !self.is_unary()
    }

    /// Applies the operator to already evaluated operands.
    ///
    /// `rhs` is ignored for [`Op::Not`].
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Op::Not => !lhs,
            Op::And => lhs && rhs,
            Op::Or => lhs || rhs,
            Op::Implies => !lhs || rhs,
            Op::Iff => lhs == rhs,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A classified token.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Token<'a> {
    Open,
    Close,
    Op(Op),
    /// Anything else. Whether it is a well-formed variable is checked by the validator.
    Var(&'a str),
}

impl<'a> Token<'a> {
    pub fn classify(token: &'a str) -> Self {
        match token {
            "(" => Token::Open,
            ")" => Token::Close,
            _ => match Op::from_symbol(token) {
                Some(op) => Token::Op(op),
                None => Token::Var(token),
            },
        }
    }
}

/// Checks that `name` is a non-empty run of ASCII letters that does not spell an operator.
pub fn is_variable(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic()) && Op::from_symbol(name).is_none()
}

/// Splits an expression into tokens.
///
/// Underscore is the only separator. Pieces are trimmed and empty pieces are dropped;
/// nothing else is checked here.
pub fn tokenize(input: &str) -> Vec<&str> {
    input.split('_').map(str::trim).filter(|t| !t.is_empty()).collect()
}

/// Returns the distinct variable names among `tokens`, sorted.
pub fn extract_variables<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let vars: BTreeSet<&str> = tokens
        .iter()
        .map(|t| t.as_ref())
        .filter(|t| matches!(Token::classify(t), Token::Var(_)))
        .collect();
    vars.into_iter().map(String::from).collect()
}

/// Joins tokens with spaces, spelling each operator by its readable name.
///
/// ```
/// use prop_rs::token::{to_readable, tokenize};
///
/// let tokens = tokenize("( _ a _ => _ ( _ -| _ b _ ) _ )");
/// assert_eq!(to_readable(&tokens), "( a IMPLIES ( NOT b ) )");
/// ```
pub fn to_readable<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| {
            let t = t.as_ref();
            Op::from_symbol(t).map_or(t, |op| op.name())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("( _ a _ AND _ b _ )"), vec!["(", "a", "AND", "b", ")"]);
        assert_eq!(tokenize("a__ _b_"), vec!["a", "b"]);
        assert_eq!(tokenize("  "), Vec::<&str>::new());
        // Not validated here.
        assert_eq!(tokenize("a _ ?? _ 12"), vec!["a", "??", "12"]);
    }

    #[test]
    fn test_aliases() {
        assert_eq!(Op::from_symbol("NOT"), Op::from_symbol("-|"));
        assert_eq!(Op::from_symbol("AND"), Op::from_symbol("^"));
        assert_eq!(Op::from_symbol("OR"), Op::from_symbol("V"));
        assert_eq!(Op::from_symbol("=>"), Some(Op::Implies));
        assert_eq!(Op::from_symbol("<=>"), Some(Op::Iff));
        assert_eq!(Op::from_symbol("and"), None);
        assert_eq!(Op::from_symbol("->"), None);
    }

    #[test]
    fn test_apply() {
        for lhs in [false, true] {
            for rhs in [false, true] {
                assert_eq!(Op::Implies.apply(lhs, rhs), !lhs || rhs);
                assert_eq!(Op::Iff.apply(lhs, rhs), lhs == rhs);
                assert_eq!(Op::Not.apply(lhs, rhs), !lhs);
            }
        }
    }

    #[test]
    fn test_classify() {
        assert_eq!(Token::classify("("), Token::Open);
        assert_eq!(Token::classify(")"), Token::Close);
        assert_eq!(Token::classify("V"), Token::Op(Op::Or));
        assert_eq!(Token::classify("x"), Token::Var("x"));
        assert_eq!(Token::classify("x1"), Token::Var("x1"));
    }

    #[test]
    fn test_is_variable() {
        assert!(is_variable("p"));
        assert!(is_variable("Rain"));
        assert!(!is_variable("V"));
        assert!(!is_variable("AND"));
        assert!(!is_variable("x1"));
        assert!(!is_variable(""));
    }

    #[test]
    fn test_extract_variables() {
        let tokens = tokenize("( _ ( _ b _ AND _ a _ ) _ OR _ ( _ NOT _ b _ ) _ )");
        assert_eq!(extract_variables(&tokens), vec!["a", "b"]);
        assert!(extract_variables::<&str>(&[]).is_empty());
    }
}

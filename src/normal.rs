//! Disjunctive and conjunctive normal forms read off a truth table.
//!
//! The construction is the direct one: DNF has one conjunction per true row, CNF one
//! disjunction per false row. No simplification is attempted.
//!
//! # Examples
//!
//! ```
//! use prop_rs::builder::parse;
//! use prop_rs::normal::{to_cnf, to_dnf};
//! use prop_rs::table::truth_table;
//!
//! let tree = parse("( _ a _ AND _ b _ )").unwrap();
//! let table = truth_table(&tree, &["a", "b"]);
//!
//! assert_eq!(to_dnf(&table), "(a AND b)");
//! assert_eq!(to_cnf(&table), "(a OR b) AND (a OR NOT_b) AND (NOT_a OR b)");
//! ```

use std::fmt;
use std::ops::Neg;

use crate::table::TruthTable;
use crate::token::Op;

/// A variable, possibly negated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    var: String,
    positive: bool,
}

impl Literal {
    pub fn positive(var: impl Into<String>) -> Self {
        Self {
            var: var.into(),
            positive: true,
        }
    }

    pub fn negative(var: impl Into<String>) -> Self {
        Self {
            var: var.into(),
            positive: false,
        }
    }

    pub fn var(&self) -> &str {
        &self.var
    }

    pub fn is_positive(&self) -> bool {
        self.positive
    }

    pub fn is_negative(&self) -> bool {
        !self.positive
    }
}

impl Neg for Literal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            var: self.var,
            positive: !self.positive,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Form {
    /// OR of AND-clauses.
    Dnf,
    /// AND of OR-clauses.
    Cnf,
}

impl Form {
    /// Connective inside a clause.
    fn inner(self) -> Op {
        match self {
            Form::Dnf => Op::And,
            Form::Cnf => Op::Or,
        }
    }

    /// Connective between clauses.
    fn outer(self) -> Op {
        match self {
            Form::Dnf => Op::Or,
            Form::Cnf => Op::And,
        }
    }
}

/// Rendering options for [`NormalForm::render`].
#[derive(Debug, Clone)]
pub struct NormalFormConfig {
    /// Conjunction word (default: "AND")
    pub and: &'static str,
    /// Disjunction word (default: "OR")
    pub or: &'static str,
    /// Prefix of a negated literal (default: "NOT_")
    pub negation_prefix: &'static str,
    /// Rendering of a DNF without clauses and of an empty CNF clause (default: "false")
    pub falsum: &'static str,
    /// Rendering of a CNF without clauses and of an empty DNF clause (default: "true")
    pub verum: &'static str,
}

impl Default for NormalFormConfig {
    fn default() -> Self {
        Self {
            and: "AND",
            or: "OR",
            negation_prefix: "NOT_",
            falsum: "false",
            verum: "true",
        }
    }
}

/// A DNF or CNF over a fixed list of variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalForm {
    form: Form,
    variables: Vec<String>,
    clauses: Vec<Vec<Literal>>,
}

impl NormalForm {
    pub fn form(&self) -> Form {
        self.form
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn clauses(&self) -> &[Vec<Literal>] {
        &self.clauses
    }

    /// Renders the form as text, e.g. `(a AND NOT_b) OR (NOT_a AND b)`.
    ///
    /// A clause without literals, which only a table without variables produces, is the
    /// identity of its connective: `verum` in a DNF, `falsum` in a CNF.
    pub fn render(&self, config: &NormalFormConfig) -> String {
        if self.clauses.is_empty() {
            return match self.form {
                Form::Dnf => config.falsum.to_string(),
                Form::Cnf => config.verum.to_string(),
            };
        }

        let word = |op: Op| if op == Op::And { config.and } else { config.or };
        let inner = format!(" {} ", word(self.form.inner()));
        let outer = format!(" {} ", word(self.form.outer()));

        self.clauses
            .iter()
            .map(|clause| {
                if clause.is_empty() {
                    return match self.form {
                        Form::Dnf => config.verum.to_string(),
                        Form::Cnf => config.falsum.to_string(),
                    };
                }
                let literals: Vec<String> = clause
                    .iter()
                    .map(|lit| {
                        if lit.positive {
                            lit.var.clone()
                        } else {
                            format!("{}{}", config.negation_prefix, lit.var)
                        }
                    })
                    .collect();
                format!("({})", literals.join(inner.as_str()))
            })
            .collect::<Vec<_>>()
            .join(outer.as_str())
    }

    /// Renders the form in the tokenized expression syntax, fully parenthesized so that
    /// it parses back into an equivalent tree.
    ///
    /// A form without clauses is written as `v AND NOT v` (DNF) or `v OR NOT v` (CNF) over
    /// its first variable. Returns `None` if there are no variables to write it with.
    pub fn to_expression(&self) -> Option<String> {
        if self.clauses.is_empty() {
            let var = self.variables.first()?;
            let pair = [Literal::positive(var.as_str()), Literal::negative(var.as_str())];
            return fold(pair.iter().map(literal_expression), self.form.inner());
        }

        let clauses = self
            .clauses
            .iter()
            .map(|clause| fold(clause.iter().map(literal_expression), self.form.inner()))
            .collect::<Option<Vec<_>>>()?;
        fold(clauses, self.form.outer())
    }
}

impl fmt::Display for NormalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&NormalFormConfig::default()))
    }
}

fn literal_expression(lit: &Literal) -> String {
    if lit.positive {
        lit.var.clone()
    } else {
        format!("( _ {} _ {} _ )", Op::Not.symbol(), lit.var)
    }
}

/// Joins `items` with `op`, pairing neighbours level by level so the nesting grows with
/// the logarithm of the number of items.
fn fold(items: impl IntoIterator<Item = String>, op: Op) -> Option<String> {
    let mut level: Vec<String> = items.into_iter().collect();
    while level.len() > 1 {
        let mut next = Vec::new();
        let mut items = level.into_iter();
        while let Some(lhs) = items.next() {
            next.push(match items.next() {
                Some(rhs) => format!("( _ {} _ {} _ {} _ )", lhs, op.symbol(), rhs),
                None => lhs,
            });
        }
        level = next;
    }
    level.pop()
}

impl TruthTable {
    /// One conjunction per true row: the variable if it is true in that row, its negation otherwise.
    pub fn dnf(&self) -> NormalForm {
        self.normal_form(Form::Dnf)
    }

    /// One disjunction per false row: the negated variable if it is true in that row, the variable otherwise.
    pub fn cnf(&self) -> NormalForm {
        self.normal_form(Form::Cnf)
    }

    fn normal_form(&self, form: Form) -> NormalForm {
        let wanted = form == Form::Dnf;
        let clauses: Vec<Vec<Literal>> = self
            .rows()
            .iter()
            .filter(|row| row.result == wanted)
            .map(|row| {
                self.variables()
                    .iter()
                    .zip(&row.values)
                    .map(|(var, &value)| {
                        let lit = Literal::positive(var.as_str());
                        if value == wanted {
                            lit
                        } else {
                            -lit
                        }
                    })
                    .collect()
            })
            .collect();

        NormalForm {
            form,
            variables: self.variables().to_vec(),
            clauses,
        }
    }
}

/// DNF of `table`, rendered with the default configuration.
pub fn to_dnf(table: &TruthTable) -> String {
    table.dnf().to_string()
}

/// CNF of `table`, rendered with the default configuration.
pub fn to_cnf(table: &TruthTable) -> String {
    table.cnf().to_string()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::builder::parse;
    use crate::table::truth_table;

    fn table(input: &str) -> TruthTable {
        let tree = parse(input).unwrap();
        truth_table(&tree, &tree.variables())
    }

    #[test]
    fn test_literal() {
        let lit = Literal::positive("x");
        assert!(lit.is_positive());
        assert_eq!((-lit.clone()).var(), "x");
        assert!((-lit.clone()).is_negative());
        assert_eq!(-(-lit.clone()), lit);
    }

    #[test]
    fn test_dnf() {
        assert_eq!(to_dnf(&table("( _ a _ AND _ b _ )")), "(a AND b)");
        assert_eq!(
            to_dnf(&table("( _ a _ <=> _ b _ )")),
            "(NOT_a AND NOT_b) OR (a AND b)"
        );
        assert_eq!(to_dnf(&table("( _ p _ AND _ ( _ NOT _ p _ ) _ )")), "false");
    }

    #[test]
    fn test_cnf() {
        assert_eq!(to_cnf(&table("( _ a _ OR _ b _ )")), "(a OR b)");
        assert_eq!(to_cnf(&table("( _ a _ => _ b _ )")), "(NOT_a OR b)");
        assert_eq!(to_cnf(&table("( _ p _ => _ p _ )")), "true");
    }

    #[test]
    fn test_render_with_config() {
        let config = NormalFormConfig {
            and: "&",
            or: "|",
            negation_prefix: "~",
            ..NormalFormConfig::default()
        };
        let t = table("( _ a _ <=> _ b _ )");
        assert_eq!(t.dnf().render(&config), "(~a & ~b) | (a & b)");
        assert_eq!(t.cnf().render(&config), "(a | ~b) & (~a | b)");
    }

    #[test]
    fn test_to_expression() {
        let t = table("( _ a _ <=> _ b _ )");
        assert_eq!(
            t.dnf().to_expression().as_deref(),
            Some("( _ ( _ ( _ NOT _ a _ ) _ AND _ ( _ NOT _ b _ ) _ ) _ OR _ ( _ a _ AND _ b _ ) _ )")
        );

        let t = table("( _ p _ => _ p _ )");
        assert_eq!(t.cnf().to_expression().as_deref(), Some("( _ p _ OR _ ( _ NOT _ p _ ) _ )"));
        assert_eq!(t.dnf().to_expression().as_deref(), Some("( _ ( _ NOT _ p _ ) _ OR _ p _ )"));
    }

    #[test]
    fn test_render_without_variables() {
        let t = truth_table::<&str>(&parse("( _ p _ => _ p _ )").unwrap(), &[]);
        assert_eq!(t.dnf().clauses(), &[Vec::<Literal>::new()]);
        assert_eq!(to_dnf(&t), "true");
        assert_eq!(to_cnf(&t), "true");

        let t = truth_table::<&str>(&parse("p").unwrap(), &[]);
        assert_eq!(to_dnf(&t), "false");
        assert_eq!(to_cnf(&t), "false");
    }

    #[test]
    fn test_fold_is_balanced() {
        let items = ["a", "b", "c", "d", "e"].map(String::from);
        assert_eq!(
            fold(items, Op::Or).as_deref(),
            Some("( _ ( _ ( _ a _ OR _ b _ ) _ OR _ ( _ c _ OR _ d _ ) _ ) _ OR _ e _ )")
        );
        assert_eq!(fold(Vec::new(), Op::And), None);
    }

    #[test]
    fn test_to_expression_without_variables() {
        let tree = parse("p").unwrap();
        let t = truth_table::<&str>(&tree, &[]);
        assert_eq!(t.dnf().to_expression(), None);
    }
}

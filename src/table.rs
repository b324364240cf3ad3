//! Truth tables.
//!
//! Assignments are enumerated by counting in binary over the variables, with the first
//! variable as the most significant bit and `false` before `true`. Each row evaluates its
//! own copy of the tree, so one row's substitution never affects another.

use log::debug;
use num_bigint::BigUint;

use crate::tree::{Assignment, Node};

/// Label of the result column in [`TruthTable::header`].
pub const RESULT_LABEL: &str = "result";

/// Number of assignments over `num_vars` variables, `2^num_vars`.
pub fn assignment_count(num_vars: usize) -> BigUint {
    BigUint::from(1u32) << num_vars
}

/// Iterator over all assignments of `num_vars` variables, in counting order.
///
/// ```
/// use prop_rs::table::Assignments;
///
/// let all: Vec<Vec<bool>> = Assignments::new(2).collect();
/// assert_eq!(all, vec![
///     vec![false, false],
///     vec![false, true],
///     vec![true, false],
///     vec![true, true],
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Assignments {
    next: Option<Vec<bool>>,
}

impl Assignments {
    pub fn new(num_vars: usize) -> Self {
        Self {
            next: Some(vec![false; num_vars]),
        }
    }
}

impl Iterator for Assignments {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        // Binary increment, starting from the least significant (last) position.
        let mut succ = current.clone();
        let mut i = succ.len();
        while i > 0 && succ[i - 1] {
            succ[i - 1] = false;
            i -= 1;
        }
        if i > 0 {
            succ[i - 1] = true;
            self.next = Some(succ);
        }

        Some(current)
    }
}

/// Pairs each variable with the value at the same position.
pub fn make_assignment<S: AsRef<str>>(variables: &[S], values: &[bool]) -> Assignment {
    variables
        .iter()
        .map(|v| v.as_ref().to_string())
        .zip(values.iter().copied())
        .collect()
}

/// One assignment and the value of the expression under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Values of the variables, in the order of [`TruthTable::variables`].
    pub values: Vec<bool>,
    pub result: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: Vec<String>,
    rows: Vec<Row>,
}

/// Evaluates `tree` under every assignment of `variables`.
///
/// The table has `2^n` rows for `n` variables; nothing is shared between rows.
pub fn truth_table<S: AsRef<str>>(tree: &Node, variables: &[S]) -> TruthTable {
    let variables: Vec<String> = variables.iter().map(|v| v.as_ref().to_string()).collect();
    debug!(
        "truth_table(variables = {:?}) with {} rows",
        variables,
        assignment_count(variables.len())
    );

    let rows = Assignments::new(variables.len())
        .map(|values| {
            let result = tree.evaluate_under(&make_assignment(&variables, &values));
            Row { values, result }
        })
        .collect();

    TruthTable { variables, rows }
}

impl TruthTable {
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Rows in enumeration order, header excluded.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Column labels: the variables followed by [`RESULT_LABEL`].
    pub fn header(&self) -> Vec<&str> {
        self.variables
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(RESULT_LABEL))
            .collect()
    }

    /// The result column.
    pub fn results(&self) -> impl Iterator<Item = bool> + '_ {
        self.rows.iter().map(|row| row.result)
    }

    /// True under every assignment.
    pub fn is_tautology(&self) -> bool {
        self.results().all(|r| r)
    }

    /// True under at least one assignment.
    pub fn is_satisfiable(&self) -> bool {
        self.results().any(|r| r)
    }

    pub fn is_unsatisfiable(&self) -> bool {
        !self.is_satisfiable()
    }

    /// False under at least one assignment.
    pub fn is_falsifiable(&self) -> bool {
        self.results().any(|r| !r)
    }
}

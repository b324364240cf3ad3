//! Semantic equivalence of expression trees.

use std::collections::BTreeSet;

use log::debug;

use crate::builder::parse;
use crate::error::SyntaxError;
use crate::table::{assignment_count, make_assignment, Assignments};
use crate::tree::Node;

/// Checks whether `lhs` and `rhs` agree under every assignment of their combined variables.
///
/// This compares truth tables, not structure: `( _ a _ AND _ b _ )` is equivalent to
/// `( _ b _ AND _ a _ )`. Stops at the first assignment where the two differ.
pub fn equivalent(lhs: &Node, rhs: &Node) -> bool {
    let variables: Vec<String> = lhs
        .variables()
        .into_iter()
        .chain(rhs.variables())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    debug!(
        "equivalent(variables = {:?}) over {} assignments",
        variables,
        assignment_count(variables.len())
    );

    Assignments::new(variables.len()).all(|values| {
        let assignment = make_assignment(&variables, &values);
        let same = lhs.evaluate_under(&assignment) == rhs.evaluate_under(&assignment);
        if !same {
            debug!("equivalent: differ under {:?}", assignment);
        }
        same
    })
}

/// Parses both expressions and checks them for equivalence.
///
/// ```
/// use prop_rs::equiv::equivalent_exprs;
///
/// let de_morgan = equivalent_exprs(
///     "( _ NOT _ ( _ a _ AND _ b _ ) _ )",
///     "( _ ( _ NOT _ a _ ) _ OR _ ( _ NOT _ b _ ) _ )",
/// );
/// assert_eq!(de_morgan, Ok(true));
/// assert!(equivalent_exprs("( _ a _ AND _ b _ )", "( _ a _ b _ )").is_err());
/// ```
pub fn equivalent_exprs(lhs: &str, rhs: &str) -> Result<bool, SyntaxError> {
    let lhs = parse(lhs)?;
    let rhs = parse(rhs)?;
    Ok(equivalent(&lhs, &rhs))
}

//! # prop-rs: propositional logic expressions
//!
//! **`prop-rs`** parses propositional formulas written as underscore-separated tokens,
//! evaluates them, and analyzes them by exhaustive enumeration.
//!
//! ## Syntax
//!
//! Tokens are separated by `_`; whitespace around them is ignored. Variables are runs of
//! ASCII letters. Operators come in a canonical and a symbolic spelling:
//! `NOT`/`-|`, `AND`/`^`, `OR`/`V`, `=>` and `<=>`.
//!
//! There is no operator precedence: every binary application must be parenthesized,
//! e.g. `( _ ( _ a _ AND _ b _ ) _ => _ c _ )`.
//!
//! ## Pipeline
//!
//! ```text
//! string --tokenize--> tokens --validate--> tokens --build_tree--> Node
//!     Node + variables --truth_table--> TruthTable --dnf/cnf--> NormalForm
//!     (Node, Node) --equivalent--> bool
//! ```
//!
//! ## Basic Usage
//!
//! ```rust
//! use prop_rs::builder::parse;
//! use prop_rs::equiv::equivalent;
//! use prop_rs::normal::to_dnf;
//! use prop_rs::table::truth_table;
//! use prop_rs::token::{extract_variables, tokenize};
//!
//! let input = "( _ a _ AND _ b _ )";
//! let tree = parse(input).unwrap();
//! let variables = extract_variables(&tokenize(input));
//! assert_eq!(variables, vec!["a", "b"]);
//!
//! let table = truth_table(&tree, &variables);
//! assert!(table.is_satisfiable());
//! assert!(!table.is_tautology());
//! assert_eq!(to_dnf(&table), "(a AND b)");
//!
//! let swapped = parse("( _ b _ ^ _ a _ )").unwrap();
//! assert!(equivalent(&tree, &swapped));
//! ```
//!
//! ## Core Components
//!
//! - **[`token`]**: tokenizer and operator normalization.
//! - **[`validate`]**: syntax checks run before any tree is built.
//! - **[`builder`]**: stack-based tree construction, and [`parse`][builder::parse].
//! - **[`tree`]**: the expression tree with substitution and evaluation.
//! - **[`table`]**: truth tables and the tautology/satisfiability predicates.
//! - **[`normal`]**: DNF and CNF.
//! - **[`equiv`]**: semantic equivalence.
//!
//! Errors are reported as [`SyntaxError`][error::SyntaxError].

pub mod builder;
pub mod equiv;
pub mod error;
pub mod normal;
pub mod table;
pub mod token;
pub mod tree;
pub mod validate;

//! Analyze propositional expressions from the command line.
//!
//! Run with:
//! ```bash
//! cargo run --example analyze -- "( _ ( _ a _ => _ c _ ) _ AND _ ( _ b _ => _ c _ ) _ )"
//! cargo run --example analyze -- "( _ p _ => _ q _ )" "( _ ( _ NOT _ p _ ) _ OR _ q _ )"
//! ```

use clap::Parser;
use color_eyre::Result;
use prop_rs::builder::parse;
use prop_rs::equiv::equivalent;
use prop_rs::table::{truth_table, TruthTable};
use prop_rs::token::{extract_variables, to_readable, tokenize};
use prop_rs::tree::{Node, Value};

#[derive(Parser)]
#[command(author, version, about = "Truth tables and normal forms of propositional expressions")]
struct Cli {
    /// Expression, with tokens separated by '_'
    expr: String,

    /// Second expression to check for equivalence with the first
    other: Option<String>,

    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn dump_tree(node: &Node, level: usize, out: &mut String) {
    let label = match node.value() {
        Value::Op(op) => op.name().to_string(),
        Value::Var(name) => name.clone(),
        Value::Bool(value) => value.to_string(),
    };
    out.push_str(&"    ".repeat(level));
    out.push_str(&label);
    out.push('\n');
    if let Some(left) = node.left() {
        dump_tree(left, level + 1, out);
    }
    if let Some(right) = node.right() {
        dump_tree(right, level + 1, out);
    }
}

fn print_table(table: &TruthTable) {
    let header = table.header();
    let cells: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| {
            row.values
                .iter()
                .chain(std::iter::once(&row.result))
                .map(|v| v.to_string())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, h)| cells.iter().map(|row| row[i].len()).chain(std::iter::once(h.len())).max().unwrap_or(0))
        .collect();

    let line = |values: Vec<&str>| {
        values
            .iter()
            .zip(&widths)
            .map(|(v, &w)| format!("{:<w$}", v, w = w))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    println!("{}", line(header.clone()));
    println!("{}", widths.iter().map(|&w| "-".repeat(w)).collect::<Vec<_>>().join("-+-"));
    for row in &cells {
        println!("{}", line(row.iter().map(String::as_str).collect()));
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        if cli.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let tokens = tokenize(&cli.expr);
    log::info!("Analyzing {}", to_readable(&tokens));

    let tree = parse(&cli.expr)?;
    let variables = extract_variables(&tokens);

    let mut dump = String::new();
    dump_tree(&tree, 0, &mut dump);
    println!("Tree:\n{}", dump);

    let table = truth_table(&tree, &variables);
    println!("Truth table:");
    print_table(&table);

    println!();
    println!("Tautology:     {}", table.is_tautology());
    println!("Satisfiable:   {}", table.is_satisfiable());
    println!("Unsatisfiable: {}", table.is_unsatisfiable());
    println!("Falsifiable:   {}", table.is_falsifiable());

    println!();
    println!("DNF: {}", table.dnf());
    println!("CNF: {}", table.cnf());

    if let Some(other) = &cli.other {
        let other_tree = parse(other)?;
        println!();
        println!("Equivalent: {}", equivalent(&tree, &other_tree));
    }

    Ok(())
}

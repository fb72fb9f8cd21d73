use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use rowred_linalg::AugmentedDisplay;
use rowred_rational::Rational;
use rowred_solve::{solve_text, ParameterStyle, SolveConfig, SolverResult};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Coefficient matrix, rows separated by `;` and cells by `,`, e.g. "1,1;2,2".
    #[arg(short, long)]
    pub matrix: String,

    /// Right-hand side, cells separated by `,`, e.g. "3,6".
    #[arg(short, long)]
    pub rhs: String,

    /// Continue to reduced row-echelon form.
    #[arg(long)]
    pub reduce: bool,

    /// Name free variables t1, t2, ... instead of t, s, r, q.
    #[arg(long)]
    pub indexed_params: bool,

    /// Reject malformed cells instead of reading them as zero.
    #[arg(long)]
    pub strict: bool,

    /// Print the full result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Only print the solution.
    #[arg(long)]
    pub no_steps: bool,
}

fn split_cells(text: &str) -> Vec<String> {
    text.split(',').map(|cell| cell.trim().to_owned()).collect()
}

fn split_matrix(text: &str) -> Vec<Vec<String>> {
    text.split(';').map(split_cells).collect()
}

fn check_cells<'a>(cells: impl IntoIterator<Item = &'a String>) -> Result<()> {
    for cell in cells {
        cell.parse::<Rational>()
            .with_context(|| format!("invalid cell {cell:?}"))?;
    }
    Ok(())
}

fn print_report(result: &SolverResult, show_steps: bool) {
    let n = result.num_unknowns();
    if show_steps {
        for (index, step) in result.steps.iter().enumerate() {
            println!("Step {}: {}", index + 1, step.description);
            println!(
                "{}",
                AugmentedDisplay::new(&step.matrix)
                    .boundary(n)
                    .highlight(step.highlight_row)
            );
            println!();
        }
    }

    println!(
        "rank(A) = {}, rank([A|b]) = {}, solution: {}",
        result.rank_a, result.rank_aug, result.solution_type
    );
    if !result.derivation.is_empty() {
        println!();
        println!("Back substitution:");
        for line in result.derivation.iter().rev() {
            println!("  {line}");
        }
    }
    println!();
    for line in &result.solution_text {
        println!("{line}");
    }
}

fn run(args: &Args) -> Result<()> {
    let a = split_matrix(&args.matrix);
    let b = split_cells(&args.rhs);
    if a.len() != b.len() {
        bail!(
            "matrix has {} rows but the right-hand side has {} entries",
            a.len(),
            b.len()
        );
    }
    if args.strict {
        check_cells(a.iter().flatten().chain(&b))?;
    }

    let config = SolveConfig {
        reduce_to_normal_form: args.reduce,
        parameter_style: if args.indexed_params {
            ParameterStyle::Indexed
        } else {
            ParameterStyle::Letters
        },
    };
    let result = solve_text(&a, &b, &config).context("could not solve the system")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result, !args.no_steps);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    log::debug!("Running with: {args:?}");
    if let Err(err) = run(&args) {
        eprintln!("error: {err:?}");
        process::exit(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_matrix() {
        assert_eq!(
            split_matrix("1, 1; 2,2"),
            [vec!["1", "1"], vec!["2", "2"]]
        );
        assert_eq!(split_cells("3,,6"), ["3", "", "6"]);
    }

    #[test]
    fn test_strict_cells() {
        let good = split_cells("1,-0.5,3/4");
        assert!(check_cells(&good).is_ok());
        let bad = split_cells("1,x");
        assert!(check_cells(&bad).is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "rowred", "--matrix", "1,1;2,2", "--rhs", "3,6", "--reduce", "--json",
        ])
        .unwrap();
        assert!(args.reduce && args.json && !args.no_steps);
        assert!(run(&args).is_ok());
    }

    #[test]
    fn test_row_count_mismatch() {
        let args =
            Args::try_parse_from(["rowred", "--matrix", "1,1;2,2", "--rhs", "3"]).unwrap();
        assert!(run(&args).is_err());
    }
}

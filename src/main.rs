use calc_lang::cli::{self, CheckOptions, CheckResult, CliError};
use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "calc")]
#[command(about = "Calc - evaluate arithmetic, comparison and logical formulas")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and evaluate an expression
    Check {
        /// The expression to evaluate
        expression: String,

        /// Variables as a JSON object (reads from stdin if not provided)
        #[arg(long)]
        vars: Option<String>,

        /// Single variable binding, NAME=VALUE (repeatable)
        #[arg(short, long = "var")]
        var: Vec<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't evaluate
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print the parsed expression with explicit grouping
    Ast {
        /// The expression to parse
        expression: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            expression,
            vars,
            var,
            pretty,
            syntax_only,
        } => run_check(expression, vars, var, pretty, syntax_only),
        Commands::Ast { expression } => run_ast(&expression),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    expression: String,
    vars: Option<String>,
    bindings: Vec<String>,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let vars = match vars {
        Some(s) => Some(s),
        None if !syntax_only && !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer).filter(|b| !b.trim().is_empty())
        }
        None => None,
    };

    let options = CheckOptions {
        expression,
        vars,
        bindings,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Empty if syntax_only => println!("No expression"),
        CheckResult::Empty => println!("null"),
        CheckResult::Success(output) => {
            let json = if pretty {
                serde_json::to_string_pretty(&output)?
            } else {
                serde_json::to_string(&output)?
            };
            println!("{}", json);
        }
    }
    Ok(())
}

fn run_ast(expression: &str) -> Result<(), CliError> {
    match cli::render_ast(expression)? {
        Some(tree) => println!("{}", tree),
        None => println!("No expression"),
    }
    Ok(())
}

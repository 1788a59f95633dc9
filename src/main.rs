use clap::{Parser as ClapParser, Subcommand};
use el_lang::cli::{self, CheckOptions, CheckOutput, CliError};
use std::io::{self, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "el")]
#[command(about = "el - validate and inspect expressions of the embedded expression language")]
#[command(version)]
struct Cli {
    /// Log parser activity to stderr (EL_LOG overrides the filter)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an expression and print it back normalized
    Check {
        /// The expression (reads from stdin if not provided)
        expression: Option<String>,

        /// Allow text after the first complete expression
        #[arg(short, long)]
        lenient: bool,

        /// Print the tree as JSON
        #[arg(short, long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// File name to report in error messages
        #[arg(long)]
        path: Option<PathBuf>,

        /// Reject expressions nested deeper than this
        #[arg(long)]
        max_depth: Option<usize>,

        /// Also list the variables the expression uses
        #[arg(long)]
        variables: bool,
    },

    /// List the tokens of an expression with their locations
    Tokens {
        /// The expression (reads from stdin if not provided)
        expression: Option<String>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'el docs' to list categories)
        category: String,
    },
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("EL_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            expression,
            lenient,
            json,
            pretty,
            path,
            max_depth,
            variables,
        } => read_expression(expression).and_then(|expression| {
            run_check(
                CheckOptions {
                    expression,
                    lenient,
                    json,
                    pretty,
                    path,
                    max_depth,
                },
                variables,
            )
        }),
        Commands::Tokens { expression } => read_expression(expression).and_then(run_tokens),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_expression(expression: Option<String>) -> Result<String, CliError> {
    match expression {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}

fn run_check(options: CheckOptions, show_variables: bool) -> Result<(), CliError> {
    let result = cli::execute_check(&options)?;

    match result.output {
        CheckOutput::Source(source) => println!("{}", source),
        CheckOutput::Json(json) if options.pretty => println!("{:#}", json),
        CheckOutput::Json(json) => println!("{}", json),
    }
    if show_variables {
        println!("variables: {}", result.variables.join(", "));
    }
    if !result.unconsumed.is_empty() {
        eprintln!("unconsumed: {}", result.unconsumed);
    }
    Ok(())
}

fn run_tokens(expression: String) -> Result<(), CliError> {
    for line in cli::list_tokens(&expression)? {
        println!("{}", line);
    }
    Ok(())
}

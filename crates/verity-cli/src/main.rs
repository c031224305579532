mod constructor;
mod errors;
mod formatters;
mod parser;
mod rules_doc;
mod runner;

use clap::{Parser, ValueEnum};
use tracing::Level;

/// Output format for validation results
#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    /// Print results to standard output (human-readable)
    Stdout,
    /// Output results in JSON format
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "verity",
    version,
    about = "Verity CLI - run a plan of value checks",
    long_about = "Verity runs the checks listed in a TOML plan file, in order, and \
                  reports every failed check with its message. The exit status is 0 \
                  only when every check passed.\n\n\
                  Example usage:\n  \
                  verity --config plan.toml --output stdout"
)]
struct Args {
    /// Path to the TOML plan file listing the checks
    #[arg(short, long, value_name = "FILE", required_unless_present = "list_rules")]
    config: Option<String>,

    /// Output format for validation results
    #[arg(short, long, value_enum, default_value = "stdout")]
    output: OutputFormat,

    /// Enable debug logging, backtraces and detailed error chains
    #[arg(short, long)]
    debug: bool,

    /// Print the available rules and exit
    #[arg(long)]
    list_rules: bool,
}

/// Text printed to stderr when a run fails.
fn error_report(err: &anyhow::Error, debug: bool) -> String {
    if debug {
        format!("Error: {:?}", err)
    } else {
        format!(
            "Error: {:#}\n\nHint: Run with --debug flag for detailed error chains",
            err
        )
    }
}

fn main() {
    let args = Args::parse();

    // Enable backtraces in debug mode
    if args.debug {
        // SAFETY: single-threaded here, nothing has spawned a thread yet.
        unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    }

    let level = if args.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if args.list_rules {
        rules_doc::print_rules_documentation();
        return;
    }

    match runner::run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{}", error_report(&err, args.debug));
            std::process::exit(1);
        }
    }
}

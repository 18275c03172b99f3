//! nmms - command-line front end for the NMMS sequent calculus
//!
//! Build material bases with `tell` and query them with `ask`.

use clap::{Parser, Subcommand};
use nmms::Dialect;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{Output, Status};

/// Non-monotonic multi-succedent sequent calculus
///
/// Bases are JSON files of atomic sentences, defeasible atomic
/// consequences and (in the ontology dialects) schemas.
#[derive(Parser)]
#[command(name = "nmms")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit one JSON object per statement on stdout
    #[arg(long, global = true, conflicts_with = "quiet")]
    json: bool,

    /// Suppress output; rely on the exit code
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an atom, a consequence or a schema to a base
    Tell {
        /// Path to the JSON base file
        #[arg(short, long)]
        base: PathBuf,

        /// Create the base file if it does not exist
        #[arg(long)]
        create: bool,

        /// Object-language dialect (propositional, rdfs, onto)
        #[arg(short, long, env = "NMMS_DIALECT", default_value = "propositional")]
        dialect: Dialect,

        /// Read statements from FILE, one per line (- for stdin)
        #[arg(long, value_name = "FILE", conflicts_with = "statement")]
        batch: Option<String>,

        /// `atom X "note"`, `A, B |~ C, D` or `schema <type> <arg1> <arg2>` (- for stdin)
        statement: Option<String>,
    },

    /// Decide whether a sequent is derivable from a base
    Ask {
        /// Path to the JSON base file
        #[arg(short, long)]
        base: PathBuf,

        /// Object-language dialect (propositional, rdfs, onto)
        #[arg(short, long, env = "NMMS_DIALECT", default_value = "propositional")]
        dialect: Dialect,

        /// Print the proof trace
        #[arg(long)]
        trace: bool,

        /// Maximum proof depth
        #[arg(
            long,
            env = "NMMS_MAX_DEPTH",
            default_value_t = nmms::ReasonerConfig::DEFAULT_MAX_DEPTH
        )]
        max_depth: usize,

        /// Read sequents from FILE, one per line (- for stdin)
        #[arg(long, value_name = "FILE", conflicts_with = "sequent")]
        batch: Option<String>,

        /// `A, B => C, D` (- for stdin)
        sequent: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the flag
    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = Output {
        json: cli.json,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Tell {
            base,
            create,
            dialect,
            batch,
            statement,
        } => commands::tell::run(base, create, dialect, batch, statement, &output),
        Commands::Ask {
            base,
            dialect,
            trace,
            max_depth,
            batch,
            sequent,
        } => commands::ask::run(base, dialect, trace, max_depth, batch, sequent, &output),
    };

    match result {
        Ok(status) => status.into(),
        Err(err) => {
            output.error(format!("{:#}", err));
            Status::Error.into()
        }
    }
}

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use trust_cli::{declared_summary, load_source, load_tree, LexOutput, DEFAULT_SOURCE};

#[derive(Parser, Debug)]
#[command(name = "trust")]
#[command(version, about = "Trust: tokenizer and declaration checker")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize a source file and dump the tokens
    Lex {
        /// Path to .trust source file
        #[arg(default_value = DEFAULT_SOURCE)]
        file: PathBuf,

        /// Include whitespace and comment tokens
        #[arg(long)]
        all: bool,

        /// Fail if any input was not recognized
        #[arg(long)]
        deny_unknown: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },

    /// Check declarations in a syntax tree given as JSON
    Check {
        /// Path to the tree JSON file
        tree: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Lex {
            file,
            all,
            deny_unknown,
            format,
        } => cmd_lex(&file, all, deny_unknown, format),
        Commands::Check { tree, format } => cmd_check(&tree, format),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn cmd_lex(file: &Path, all: bool, deny_unknown: bool, format: Format) -> Result<()> {
    let src = load_source(file)?;
    tracing::info!(file = %file.display(), bytes = src.len(), "tokenizing");

    let out = LexOutput::new(&src, all);
    match format {
        Format::Pretty => print!("{}", out.pretty()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&out)?),
    }

    if deny_unknown && out.unknown > 0 {
        eprintln!("Error: {} unrecognized token(s)", out.unknown);
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_check(tree: &Path, format: Format) -> Result<()> {
    let node = load_tree(tree)?;
    let report = trust_check::check(node.as_ref())?;
    tracing::info!(
        declared = report.declared.len(),
        diagnostics = report.diagnostics.len(),
        "checked"
    );

    match format {
        Format::Pretty => {
            for d in &report.diagnostics {
                eprintln!("error: {}", d);
            }
            println!("{}", declared_summary(&report));
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if !report.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}

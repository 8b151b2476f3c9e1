use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;

use fnlang::CompileError;
use fnlang::scanner::{self, ScanOptions};

#[derive(Parser, Debug)]
#[command(name = "fnlang", about = "Scanner front end for the fnlang language")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dump the token stream of a source file
    Tokens {
        file: PathBuf,

        /// Emit whitespace tokens too
        #[arg(long)]
        keep_whitespace: bool,
    },
    /// Report unrecognized characters in a source file
    Check { file: PathBuf },
    /// Read lines from stdin and dump their tokens
    Repl {
        /// Emit whitespace tokens too
        #[arg(long)]
        keep_whitespace: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact()
        .init();
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("read source file '{}'", path.display()))
}

fn report_errors(errors: Vec<CompileError>, path: &Path, source: &str) -> anyhow::Error {
    let count = errors.len();
    let name = path.display().to_string();
    for e in errors {
        let report = miette::Report::new(e.with_source_code(name.clone(), source.to_string()));
        eprintln!("{report:?}");
    }
    anyhow::anyhow!("{count} error(s)")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "parsed command line");

    match cli.command {
        Command::Tokens {
            file,
            keep_whitespace,
        } => {
            let source = read_source(&file)?;
            let tokens = scanner::tokenize(&source, ScanOptions { keep_whitespace });
            info!(count = tokens.len(), "scanned");
            print!("{}", scanner::render_tokens(&tokens));
            Ok(())
        }
        Command::Check { file } => {
            let source = read_source(&file)?;
            match scanner::scan(&source) {
                Ok(tokens) => {
                    info!(count = tokens.len(), "no unknown characters");
                    Ok(())
                }
                Err(errors) => Err(report_errors(errors, &file, &source)),
            }
        }
        Command::Repl { keep_whitespace } => {
            fnlang::repl::run_repl(ScanOptions { keep_whitespace });
            Ok(())
        }
    }
}

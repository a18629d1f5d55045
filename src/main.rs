//! loxlex - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use lox_lexer::repl::LineRepl;
use lox_lexer::util::config::{self, OutputFormat, UserConfig};
use lox_lexer::util::logger::{self, LogLevel};
use lox_lexer::{run, run_file, NAME, VERSION};

/// Exit status for source with lexical errors (sysexits EX_DATAERR)
const EXIT_DATA_ERROR: u8 = 65;

/// Scan Lox source and print its tokens
#[derive(Parser, Debug)]
#[command(name = "loxlex")]
#[command(version = VERSION)]
#[command(about = "Lox lexical analyzer", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Token output format (overrides the config file)
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a Lox source file
    Run {
        /// Source file to scan
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Scan Lox code given on the command line
    Eval {
        /// Code to scan
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Interactive prompt, one scan per line
    Repl,

    /// Print version information
    Version,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let loaded = config::load_user_config();
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => UserConfig::default(),
    };

    let level = if args.verbose {
        LogLevel::Debug
    } else {
        logger::level_from_env().unwrap_or(config.log.level)
    };
    logger::init_with_level(level);

    if let Err(e) = loaded {
        tracing::warn!("ignoring user config: {}", e);
    }

    let format = args.format.unwrap_or(config.output.format);

    let had_error = match args.command {
        Commands::Run { file } => {
            run_file(&file, format).with_context(|| format!("Failed to run: {}", file.display()))?
        }
        Commands::Eval { code } => run(&code, format).context("Failed to scan code")?,
        Commands::Repl => {
            LineRepl::new(config.repl, format)?.run()?;
            false
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
            false
        }
    };

    if had_error {
        Ok(ExitCode::from(EXIT_DATA_ERROR))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

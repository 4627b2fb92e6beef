use clap::{Parser, Subcommand};
use git_indicators::commands::*;
use git_indicators::core::{
    error::{GitIndicatorError, Result},
    print_error,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-indicators")]
#[command(about = "Git status indicators for directory listings")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a directory with a git status indicator per entry
    List {
        /// Directory to list (defaults to the current directory)
        path: Option<PathBuf>,
        /// Include ignored entries
        #[arg(long)]
        ignored: bool,
        /// Show raw two-character status codes instead of glyphs
        #[arg(long)]
        raw: bool,
        /// Compare against this revision instead of the working tree status
        #[arg(long)]
        revision: Option<String>,
        /// Width of the indicator column
        #[arg(long)]
        width: Option<usize>,
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the indicator used for each status category
    Legend {
        /// Show raw status code patterns instead of glyphs
        #[arg(long)]
        raw: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let result = match cli.command {
        Commands::List {
            path,
            ignored,
            raw,
            revision,
            width,
            json,
        } => execute_list(ListOptions {
            path,
            show_ignored: ignored,
            raw,
            revision,
            width,
            json,
        }),
        Commands::Legend { raw } => execute_legend(raw),
    };

    if let Err(e) = result {
        if let GitIndicatorError::NotInGitRepo = e {
            print_error("Not in a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }

    Ok(())
}

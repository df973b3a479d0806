use anyhow::{Context, Result};
use clap::Parser;
use jvav::SyntaxTree;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod config;
mod logging;
mod repl;

use crate::config::ReplConfig;
use crate::repl::{Outcome, Repl, Session};

#[derive(Parser)]
#[command(author, version, about = "Jvav interpreter and REPL", long_about = None)]
struct Cli {
    /// Run this file as a single fragment instead of starting the REPL
    script: Option<PathBuf>,
    /// Configuration file (defaults to repl.toml in the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print the syntax tree of every submission
    #[arg(long)]
    show_tree: bool,
    /// Print the bound tree of every submission
    #[arg(long)]
    show_program: bool,
    /// Log filter directives, used when JVAV_LOG is unset
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = ReplConfig::load(cli.config.as_deref())?;
    config.show_tree |= cli.show_tree;
    config.show_program |= cli.show_program;
    if cli.log.is_some() {
        config.log_filter = cli.log;
    }

    logging::init(config.log_filter.as_deref());
    tracing::debug!(?config, "configuration loaded");

    match cli.script {
        Some(path) => run_script(&path, &config),
        None => {
            Repl::new(config)?.run()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_script(path: &Path, config: &ReplConfig) -> Result<ExitCode> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut session = Session::new(config);
    let outcome = session.submit(SyntaxTree::parse(&text), &mut io::stdout())?;

    let code = match outcome {
        Outcome::Evaluated(_) => ExitCode::SUCCESS,
        Outcome::Rejected(_) | Outcome::Failed => ExitCode::FAILURE,
    };

    Ok(code)
}


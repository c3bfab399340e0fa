//! Burnish CLI entrypoint.
//!
//! This binary assembles the `-D` argument vector for Gradle distribution
//! integration tests and wraps local publishes in the cleanup-and-normalise
//! pipeline so repeated publication output stays byte-for-byte comparable.

use burnish::config::BurnishConfig;
use burnish::error::Result;
use clap::Parser;
use std::io::Write;

mod cli;
mod commands;
mod output;
mod runner;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<()> {
    let config = BurnishConfig::load_or_default(&cli.config)?;

    match &cli.command {
        Command::Args(args) => commands::run_args(args, stdout, stderr),
        Command::Clean(args) => commands::run_clean(args, &config, &cli.config, stderr),
        Command::Publish(args) => commands::run_publish(args, &config, &cli.config, stderr),
        Command::Normalise(args) => commands::run_normalise(args, stderr),
        Command::Fingerprint(args) => commands::run_fingerprint(args, stdout),
        Command::RemotePlan(args) => commands::run_remote_plan(args, &config, stdout),
    }
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            if writeln!(stderr, "{err}").is_err() {
                // Best-effort logging; ignore write failures.
            }
            1
        }
    }
}

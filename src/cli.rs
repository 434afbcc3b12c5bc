//! Command-line argument model for the `propsat` binary, kept separate
//! from `main` so it can be constructed and asserted on in tests without
//! touching the process environment.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A Tseitin-encoding, DPLL-based propositional satisfiability engine.
#[derive(Debug, Parser)]
#[command(name = "propsat", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity; repeat for more detail (-v, -vv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse, encode, and report SAT or UNSAT.
    Solve {
        /// Read the formula from this file instead of standard input.
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Parse and encode, printing the resulting CNF in DIMACS dialect.
    Convert {
        /// Read the formula from this file instead of standard input.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

impl Cli {
    /// The log level implied by the verbosity count: `warn` by default,
    /// `info` at `-v`, `trace` at `-vv` or higher.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_solve_with_default_stdin() {
        let cli = Cli::parse_from(["propsat", "solve"]);
        assert!(matches!(cli.command, Command::Solve { file: None }));
    }

    #[test]
    fn parses_convert_with_a_file() {
        let cli = Cli::parse_from(["propsat", "convert", "--file", "formula.txt"]);
        match cli.command {
            Command::Convert { file: Some(path) } => {
                assert_eq!(path, PathBuf::from("formula.txt"))
            }
            _ => panic!("expected Convert with a file"),
        }
    }

    #[test]
    fn verbosity_maps_to_log_level() {
        assert_eq!(
            Cli::parse_from(["propsat", "solve"]).log_level(),
            log::LevelFilter::Warn
        );
        assert_eq!(
            Cli::parse_from(["propsat", "-v", "solve"]).log_level(),
            log::LevelFilter::Info
        );
        assert_eq!(
            Cli::parse_from(["propsat", "-vv", "solve"]).log_level(),
            log::LevelFilter::Trace
        );
    }
}

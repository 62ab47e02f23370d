use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, info, warn};
use shortexpr::{ExpressionSolver, SearchConfig};

/// Shortexpr - Find the shortest expression built from ![]{} for each integer
#[derive(Parser, Debug)]
#[command(name = "shortexpr")]
#[command(
    about = "Find the shortest expression built only from ![]{} and C operators for every integer in a range"
)]
#[command(version, allow_negative_numbers = true)]
pub struct CliArgs {
    /// Smallest value to find an expression for
    pub min: i32,

    /// Largest value to find an expression for
    pub max: i32,

    /// Log level: off, error, warn, info, debug or trace (overrides RUST_LOG)
    #[arg(short, long, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Do not print a progress line before each length round
    #[arg(short, long)]
    pub quiet: bool,

    /// Re-parse every printed expression and check its value
    #[arg(long)]
    pub verify: bool,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub search: SearchConfig,
    pub log_level: LevelFilter,
    pub quiet: bool,
    pub verify: bool,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    config_from_args(args)
}

fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let search = SearchConfig::new(args.min, args.max).context("Invalid search range")?;

    Ok(CliConfig {
        search,
        log_level: args.log_level,
        quiet: args.quiet,
        verify: args.verify,
    })
}

/// Route library log records to stderr, capped at `level`
fn init_logging(level: LevelFilter) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_target(false)
        .try_init()
        .context("Logger already initialised")
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(config.log_level)?;

    let mut solver = ExpressionSolver::new(config.search);

    let quiet = config.quiet;
    solver
        .run_with_progress(|progress| {
            if !quiet {
                println!("{}", progress);
            }
        })
        .context("Search failed")?;

    if config.verify {
        info!("Verifying reported expressions");
        solver.verify().context("Verification failed")?;
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let lines = solver.report_lines();
    let missing = lines.iter().filter(|line| line.as_str() == "  (none)").count();
    for line in &lines {
        writeln!(out, "{}", line).context("Failed to write results")?;
    }
    out.flush().context("Failed to write results")?;

    if missing > 0 {
        warn!("{} values in range have no expression", missing);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["shortexpr", "-8", "8"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.min, -8);
            assert_eq!(args.max, 8);
            assert!(!args.quiet);
            assert!(!args.verify);
            assert_eq!(args.log_level, LevelFilter::Warn);
        }
    }

    #[test]
    fn test_cli_flags() {
        let args = CliArgs::try_parse_from([
            "shortexpr",
            "--quiet",
            "--verify",
            "--log-level",
            "debug",
            "0",
            "3",
        ]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(args.quiet);
            assert!(args.verify);
            assert_eq!(args.log_level, LevelFilter::Debug);
        }
    }

    #[test]
    fn test_missing_or_malformed_arguments() {
        assert!(CliArgs::try_parse_from(["shortexpr"]).is_err());
        assert!(CliArgs::try_parse_from(["shortexpr", "1"]).is_err());
        assert!(CliArgs::try_parse_from(["shortexpr", "1", "x"]).is_err());
        assert!(CliArgs::try_parse_from(["shortexpr", "1", "4294967296"]).is_err());
    }

    #[test]
    fn test_reversed_range_rejected() {
        let args = CliArgs::try_parse_from(["shortexpr", "5", "-5"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(config_from_args(args).is_err());
        }
    }

    #[test]
    fn test_log_level_values() {
        for (text, level) in [
            ("off", LevelFilter::Off),
            ("error", LevelFilter::Error),
            ("TRACE", LevelFilter::Trace),
        ] {
            let args = CliArgs::try_parse_from(["shortexpr", "-l", text, "0", "0"]);
            assert_eq!(args.map(|a| a.log_level).ok(), Some(level), "{}", text);
        }
        assert!(CliArgs::try_parse_from(["shortexpr", "-l", "loud", "0", "0"]).is_err());
    }
}

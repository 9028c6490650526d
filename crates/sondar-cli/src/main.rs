//! Sondador CLI: reachability checks for a deployed page's resources
//!
//! ## Usage
//!
//! ```bash
//! sondador check https://example.com        # Probe everything, print report
//! sondador check example.com -j 4           # Bounded fan-out
//! sondador extract https://example.com      # List references, no probing
//! ```

use clap::Parser;
use sondador::{CheckRunner, Cli, CliConfig, CliResult, Commands, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(&cli);
    let config = build_config(&cli);

    let runtime = tokio::runtime::Runtime::new()?;
    let runner = CheckRunner::new(config);
    match cli.command {
        Commands::Check(args) => {
            // Failing resources are report content; only operational
            // errors fail the process
            runtime.block_on(runner.check(&args.url)).map(|_| ())
        }
        Commands::Extract(args) => runtime.block_on(runner.extract(&args.url)),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    };

    let config = CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(cli.color.clone().into());

    match &cli.command {
        Commands::Check(args) => config
            .with_timeout_ms(args.timeout_ms)
            .with_jobs(args.jobs)
            .with_link_limit(args.link_limit)
            .with_strict_opaque(args.strict_opaque)
            .with_skip_meta(args.skip_meta),
        Commands::Extract(args) => config.with_link_limit(args.link_limit),
    }
}

fn init_tracing(cli: &Cli) {
    let default_filter = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

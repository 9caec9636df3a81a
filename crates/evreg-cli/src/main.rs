//! Event registration CLI.

use clap::{ColorChoice, Parser};
use evreg_cli::logging::{LogConfig, LogFormat, init_logging};
use evreg_cli::settings::load_settings;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_draft, run_export, run_policy, run_register, run_settings, run_stats};
use crate::summary::{print_export, print_stats, print_submission};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(2);
        }
    };
    let exit_code = match &cli.command {
        Command::Policy(args) => {
            run_policy(args);
            0
        }
        Command::Draft(args) => match run_draft(args) {
            Ok(prepared) => {
                if prepared.toggle_ignored {
                    eprintln!("note: team participation is fixed for this event");
                }
                if let Some(size) = prepared.applied_size
                    && args.size.is_some_and(|requested| requested != size)
                {
                    eprintln!("note: team size set to {size}");
                }
                0
            }
            Err(error) => fail(&error),
        },
        Command::Register(args) => match run_register(args, &settings) {
            Ok(outcome) => {
                print_submission(&outcome);
                0
            }
            Err(error) => fail(&error),
        },
        Command::Export(args) => match run_export(args, &settings) {
            Ok(report) => {
                print_export(&report);
                0
            }
            Err(error) => fail(&error),
        },
        Command::Stats(args) => match run_stats(args, &settings) {
            Ok(stats) => {
                print_stats(&args.target.event, &stats);
                0
            }
            Err(error) => fail(&error),
        },
        Command::Settings => match run_settings(&settings) {
            Ok(()) => 0,
            Err(error) => fail(&error),
        },
    };
    std::process::exit(exit_code);
}

fn fail(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

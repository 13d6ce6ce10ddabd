//! Binary entry point: parse arguments, set up logging, dispatch.
#![allow(clippy::print_stderr)]

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cosmikase_cli::cli::{Cli, Command};
use cosmikase_cli::commands;
use cosmikase_cli::logging::{self, Logger};

fn main() -> ExitCode {
    let args = Cli::parse();
    logging::init_subscriber(args.verbose, args.command.name());
    let log = Logger::new(args.command.name());

    let result: Result<ExitCode> = match &args.command {
        Command::Get(opts) => commands::get::run(opts, &log).map(|()| ExitCode::SUCCESS),
        Command::List(opts) => commands::list::run(opts, &log).map(|()| ExitCode::SUCCESS),
        Command::Validate(opts) => Ok(commands::validate::run(opts, &log)),
        Command::CheckRon(opts) => Ok(commands::check_ron::run(opts)),
        Command::Themes => commands::themes::run(&log).map(|()| ExitCode::SUCCESS),
        Command::Version => {
            commands::version::run();
            Ok(ExitCode::SUCCESS)
        }
    };

    result.unwrap_or_else(|err| {
        // Bare message on stderr, matching what shell wrappers parse.
        eprintln!("{err:#}");
        ExitCode::FAILURE
    })
}

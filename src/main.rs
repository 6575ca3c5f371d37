use std::env;
use std::process::ExitCode;

use clap::Parser as ClapParser;

use cli::CommandError;
use cli::command::{Cli, Job, USAGE};
use cli::decode::cmd_decode;
use cli::encode::cmd_encode;

mod cli;
mod io;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    // Help wins over everything else, including invalid flags.
    if args.len() == 1 || args[1..].iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(_) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let mut env_builder = env_logger::Builder::from_default_env();
    env_builder.filter_level(cli.loglevel.to_level_filter());
    env_builder.format_timestamp_secs();
    env_builder.init();

    let job = match cli.job() {
        Ok(job) => job,
        Err(err) => {
            log::debug!("argument validation failed: {err}");
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    let outcome = match &job {
        Job::Encode { input, output } => cmd_encode(input, output),
        Job::Decode { input, output } => cmd_decode(input, output),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ CommandError::MissingInput { .. }) => {
            eprintln!("Error: {err}.");
            ExitCode::FAILURE
        }
        Err(CommandError::Unexpected(cause)) => {
            eprintln!("An unexpected error occurred: {cause:#}");
            ExitCode::FAILURE
        }
    }
}

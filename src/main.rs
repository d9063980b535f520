use std::env;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use env_logger::Env;
use log::debug;

use cpc_conf::constants::{
    DEFAULT_LOG_FILTER, DESCRIPTION, HELP_NOTES, LONG_VERSION, PROGRAM_NAME, USAGE,
};
use cpc_conf::{get_value, set_value, ConfError};

// `-h`, `--help` and `--version` are only honoured as the sole argument, so
// clap's own flags are disabled everywhere and handled in `parse_args`.
#[derive(Parser, Debug)]
#[command(
    name = PROGRAM_NAME,
    version,
    long_version = LONG_VERSION,
    about = DESCRIPTION,
    after_help = HELP_NOTES,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Retrieve the value of a key from a specific section
    #[command(disable_help_flag = true, disable_version_flag = true)]
    Get {
        /// Path to the INI configuration file
        #[arg(allow_hyphen_values = true)]
        filename: String,

        /// Section name in the INI file (without brackets)
        #[arg(allow_hyphen_values = true)]
        section: String,

        /// Configuration key to get
        #[arg(allow_hyphen_values = true)]
        key: String,
    },

    /// Set or update a key-value pair in a specific section
    #[command(disable_help_flag = true, disable_version_flag = true)]
    Set {
        /// Path to the INI configuration file
        #[arg(allow_hyphen_values = true)]
        filename: String,

        /// Section name in the INI file (without brackets)
        #[arg(allow_hyphen_values = true)]
        section: String,

        /// Configuration key to set
        #[arg(allow_hyphen_values = true)]
        key: String,

        /// Value to assign to the key
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,
    },
}

/// What the command line asked for
enum Invocation {
    Help,
    Version,
    Run(Command),
}

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER));

    let args: Vec<String> = env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let result = parse_args(&args).and_then(|invocation| match invocation {
        Invocation::Help => print_help(),
        Invocation::Version => {
            print!("{}", Cli::command().render_long_version());
            Ok(())
        }
        Invocation::Run(command) => run(command),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn parse_args(args: &[String]) -> Result<Invocation, ConfError> {
    let operands = args.get(1..).unwrap_or_default();

    if let [only] = operands {
        match only.as_str() {
            "-h" | "--help" => return Ok(Invocation::Help),
            "--version" => return Ok(Invocation::Version),
            _ => {}
        }
    }

    if operands.len() < 3 {
        return Err(insufficient_arguments());
    }

    if !matches!(operands[0].as_str(), "get" | "set") {
        return Err(ConfError::UnknownCommand(operands[0].clone()));
    }

    Cli::try_parse_from(args)
        .map(|cli| Invocation::Run(cli.command))
        .map_err(|err| parse_error(&err))
}

fn print_help() -> Result<(), ConfError> {
    Cli::command()
        .print_help()
        .map_err(|e| ConfError::InvalidArguments(e.to_string()))
}

fn run(command: Command) -> Result<(), ConfError> {
    match command {
        Command::Get {
            filename,
            section,
            key,
        } => {
            let value = get_value(&filename, &section, &key)?;
            println!("{}", value);
        }
        Command::Set {
            filename,
            section,
            key,
            value,
        } => {
            let value = value.ok_or_else(|| {
                ConfError::MissingArgument(
                    "Value parameter is required for 'set' command.".to_string(),
                )
            })?;
            let outcome = set_value(&filename, &section, &key, &value)?;
            debug!("'{}' updated: {:?}", filename, outcome);
        }
    }

    Ok(())
}

fn insufficient_arguments() -> ConfError {
    ConfError::MissingArgument("Insufficient arguments provided.".to_string())
}

/// Translate a clap parse failure into the tool's own error taxonomy
fn parse_error(err: &clap::Error) -> ConfError {
    match err.kind() {
        ErrorKind::MissingSubcommand | ErrorKind::MissingRequiredArgument => {
            insufficient_arguments()
        }
        _ => {
            let rendered = err.render().to_string();
            let message = rendered.lines().next().unwrap_or_default();
            ConfError::InvalidArguments(message.trim_start_matches("error: ").to_string())
        }
    }
}

fn report(err: &ConfError) -> ExitCode {
    eprintln!("\nError: {}\n", err);

    if err.shows_usage() {
        if matches!(err, ConfError::UnknownCommand(_)) {
            println!("Valid commands: get, set");
        }
        println!("{}\n", USAGE);
    }

    ExitCode::from(err.exit_code())
}

// ABOUTME: Entry point for the attune command line tool
// ABOUTME: Parses arguments, loads configuration, initializes logging and dispatches a subcommand

mod cli;
mod commands;
mod config;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use attune_logging::{LoggingGuard, debug, init_logging_with_config};

use crate::cli::{Args, Command};
use crate::config::Config;

fn setup_logging(verbosity: u8, config: &Config) -> Result<LoggingGuard> {
    let guard = init_logging_with_config(config.logging_config(verbosity))
        .context("Failed to initialize attune logging")?;
    debug!(verbosity, "Attune logging system initialized");
    Ok(guard)
}

fn help() -> String {
    format!(
        "\
{} {}
{}

USAGE:
    attune [FLAGS] <COMMAND> [OPTIONS]

COMMANDS:
    resolve                        Resolves stored settings into theme tokens (JSON)
        -s, --settings <file>      Stored settings JSON to resolve (default: fresh settings)
        -p, --preset <id>          Activates a preset on top of the stored settings
        -w, --workspace <id>       Applies the named workspace overlay
        --pretty                   Pretty-prints the output
        --report                   Includes the merge report with the tokens
    presets                        Lists the curated presets
        -l, --level <A|AA|AAA>     Only presets targeting this WCAG level
        -s, --search <text>        Only presets whose name or description matches
        --json                     Prints full preset records as JSON
    validate <file>                Checks a dimensions overlay or every overlay of a stored
                                   settings file; exits with 1 when anything is invalid
    system                         Prints the detected system preferences

FLAGS:
    -h, --help                     Prints help information
    -c, --config <file>            Specifies a file to use for configuration
                                   (default file: {})
    -v                             Increases logging verbosity each use for up to 3 times
    -V, --version                  Prints version information
",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_DESCRIPTION"),
        config::default_config_dir()
            .map(|dir| dir.join(config::CONFIG_FILE_NAME).display().to_string())
            .unwrap_or_else(|| config::CONFIG_FILE_NAME.to_string()),
    )
}

fn main() -> Result<ExitCode> {
    let args = Args::parse_args().context("could not parse arguments")?;

    // Help has a higher priority and should be handled separately.
    if args.display_help || (args.command.is_none() && !args.display_version) {
        print!("{}", help());
        return Ok(ExitCode::SUCCESS);
    }

    if args.display_version {
        println!("attune {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    let loaded = Config::load(args.config_file.as_deref())?;
    let _guard = setup_logging(args.verbosity, &loaded.config)?;
    let config = loaded.checked();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match &args.command {
        Some(Command::Resolve(resolve)) => commands::resolve(&config, resolve, &mut out)?,
        Some(Command::Presets(presets)) => commands::presets(presets, &mut out)?,
        Some(Command::Validate { file }) => commands::validate_file(file, &mut out)?,
        Some(Command::System) => commands::system(&config, &mut out)?,
        None => ExitCode::SUCCESS,
    };
    out.flush()?;
    Ok(code)
}

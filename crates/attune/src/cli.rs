// ABOUTME: Command line argument parsing for the attune binary
// ABOUTME: Hand-rolled flag walker: global flags anywhere, one subcommand with its own options

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use attune_types::{PresetId, WcagLevel};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveArgs {
    /// Stored settings JSON to resolve; fresh defaults when absent
    pub settings_file: Option<PathBuf>,
    /// Preset applied on top of the loaded settings
    pub preset: Option<PresetId>,
    pub workspace: Option<String>,
    pub pretty: bool,
    /// Emit the merge report alongside the tokens
    pub report: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresetsArgs {
    pub level: Option<WcagLevel>,
    pub search: Option<String>,
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Resolve(ResolveArgs),
    Presets(PresetsArgs),
    Validate { file: PathBuf },
    System,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub command: Option<Command>,
    pub config_file: Option<PathBuf>,
    pub verbosity: u8,
    pub display_help: bool,
    pub display_version: bool,
}

impl Args {
    pub fn parse_args() -> Result<Args> {
        Self::parse(std::env::args().skip(1))
    }

    pub fn parse(argv: impl IntoIterator<Item = String>) -> Result<Args> {
        let mut args = Args::default();
        let mut argv = argv.into_iter().peekable();

        while let Some(arg) = argv.next() {
            match arg.as_str() {
                "-h" | "--help" => args.display_help = true,
                "-V" | "--version" => args.display_version = true,
                "-c" | "--config" => {
                    let path = argv.next().context("--config must specify a path")?;
                    args.config_file = Some(PathBuf::from(path));
                }
                flag if is_verbosity(flag) => {
                    args.verbosity = args.verbosity.saturating_add((flag.len() - 1) as u8);
                }
                option if option.starts_with('-') => {
                    let Some(command) = args.command.as_mut() else {
                        bail!("unexpected argument '{option}'");
                    };
                    command.parse_option(option, &mut argv)?;
                }
                name => {
                    if args.command.is_some() {
                        args.command_argument(name)?;
                    } else {
                        args.command = Some(Command::named(name)?);
                    }
                }
            }
        }

        if let Some(Command::Validate { file }) = &args.command
            && file.as_os_str().is_empty()
            && !args.display_help
        {
            bail!("validate requires a settings file");
        }

        Ok(args)
    }

    fn command_argument(&mut self, value: &str) -> Result<()> {
        match &mut self.command {
            Some(Command::Validate { file }) if file.as_os_str().is_empty() => {
                *file = PathBuf::from(value);
                Ok(())
            }
            _ => bail!("unexpected argument '{value}'"),
        }
    }
}

fn is_verbosity(flag: &str) -> bool {
    flag.len() > 1 && flag.starts_with('-') && flag[1..].chars().all(|c| c == 'v')
}

fn value_for(
    option: &str,
    argv: &mut std::iter::Peekable<impl Iterator<Item = String>>,
) -> Result<String> {
    argv.next()
        .with_context(|| format!("{option} requires a value"))
}

impl Command {
    fn named(name: &str) -> Result<Self> {
        Ok(match name {
            "resolve" => Command::Resolve(ResolveArgs::default()),
            "presets" => Command::Presets(PresetsArgs::default()),
            "validate" => Command::Validate {
                file: PathBuf::new(),
            },
            "system" => Command::System,
            other => bail!("unknown command '{other}'"),
        })
    }

    fn parse_option(
        &mut self,
        option: &str,
        argv: &mut std::iter::Peekable<impl Iterator<Item = String>>,
    ) -> Result<()> {
        match (self, option) {
            (Command::Resolve(args), "-s" | "--settings") => {
                args.settings_file = Some(PathBuf::from(value_for(option, argv)?));
            }
            (Command::Resolve(args), "-p" | "--preset") => {
                let id = value_for(option, argv)?;
                args.preset = Some(id.parse().map_err(anyhow::Error::msg)?);
            }
            (Command::Resolve(args), "-w" | "--workspace") => {
                args.workspace = Some(value_for(option, argv)?);
            }
            (Command::Resolve(args), "--pretty") => args.pretty = true,
            (Command::Resolve(args), "--report") => args.report = true,
            (Command::Presets(args), "-l" | "--level") => {
                let level = value_for(option, argv)?;
                args.level = Some(level.parse().map_err(anyhow::Error::msg)?);
            }
            (Command::Presets(args), "-s" | "--search") => {
                args.search = Some(value_for(option, argv)?);
            }
            (Command::Presets(args), "--json") => args.json = true,
            (_, option) => bail!("unexpected argument '{option}'"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn test_no_arguments() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn test_global_flags() {
        let args = parse(&["-vv", "--config", "/tmp/attune.toml", "-v", "system"]).unwrap();
        assert_eq!(args.verbosity, 3);
        assert_eq!(args.config_file, Some(PathBuf::from("/tmp/attune.toml")));
        assert_eq!(args.command, Some(Command::System));

        assert!(parse(&["-h"]).unwrap().display_help);
        assert!(parse(&["--version"]).unwrap().display_version);
    }

    #[test]
    fn test_resolve_options() {
        let args = parse(&[
            "resolve",
            "--settings",
            "settings.json",
            "-p",
            "crisis-emergency",
            "-w",
            "ops",
            "--pretty",
            "--report",
        ])
        .unwrap();

        assert_eq!(
            args.command,
            Some(Command::Resolve(ResolveArgs {
                settings_file: Some(PathBuf::from("settings.json")),
                preset: Some(PresetId::CrisisEmergency),
                workspace: Some("ops".into()),
                pretty: true,
                report: true,
            }))
        );
    }

    #[test]
    fn test_presets_options() {
        let args = parse(&["presets", "--level", "aaa", "--search", "motion", "--json"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Presets(PresetsArgs {
                level: Some(WcagLevel::AAA),
                search: Some("motion".into()),
                json: true,
            }))
        );
    }

    #[test]
    fn test_validate_takes_a_file() {
        let args = parse(&["validate", "stored.json"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Validate {
                file: PathBuf::from("stored.json")
            })
        );
        assert!(parse(&["validate"]).is_err());
        assert!(parse(&["validate", "a.json", "b.json"]).is_err());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse(&["frobnicate"]).is_err());
        assert!(parse(&["--pretty"]).is_err());
        assert!(parse(&["presets", "--pretty"]).is_err());
        assert!(parse(&["resolve", "--preset", "no-such-preset"]).is_err());
        assert!(parse(&["resolve", "--workspace"]).is_err());
        assert!(parse(&["--config"]).is_err());
    }
}

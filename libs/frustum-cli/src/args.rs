//! Command-line argument parsing.
//!
//! ```text
//! frustum [-o|--output PATH] [--name NAME] [--config FILE.json] [SIDES [H R1 R2]...]
//! ```
//!
//! Tokens that look like negative numbers (`-1`, `-0.5`) are positional
//! values, not flags.

use config::constants::{DEFAULT_OBJECT_NAME, DEFAULT_OUTPUT_PATH};
use frustum_mesh::validate::parse_number;
use std::path::PathBuf;
use thiserror::Error;

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
usage: frustum [-o|--output PATH] [--name NAME] [--config FILE.json] [SIDES [H R1 R2]...]

  SIDES          radial sides, 3..=36 (default 8)
  H R1 R2        segment height, bottom radius, top radius (repeatable)
  -o, --output   output file (default building.obj)
      --name     object name written to the file (default building)
      --config   read sides and segments from a JSON file
  -h, --help     print this help";

/// Argument errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    /// Flag not recognised
    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    /// Flag given without its value
    #[error("flag '{0}' requires a value")]
    MissingValue(String),

    /// Positional values and --config used together
    #[error("positional values cannot be combined with --config")]
    ConflictingInput,
}

/// Where the stack description comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Side count followed by flat segment values
    Positional(Vec<String>),
    /// JSON document on disk
    ConfigFile(PathBuf),
}

/// What the command should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Print usage and exit
    Help,
    /// Generate a mesh
    Generate(CliArgs),
}

/// Parsed options for a generate run.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub output: PathBuf,
    pub name: String,
    pub input: Input,
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut output = PathBuf::from(DEFAULT_OUTPUT_PATH);
    let mut name = DEFAULT_OBJECT_NAME.to_string();
    let mut config_file = None;
    let mut positional = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-o" | "--output" => output = PathBuf::from(value_for(&arg, args.next())?),
            "--name" => name = value_for(&arg, args.next())?,
            "--config" => config_file = Some(PathBuf::from(value_for(&arg, args.next())?)),
            "--" => positional.extend(args.by_ref()),
            flag if is_flag(flag) => return Err(ArgsError::UnknownFlag(arg)),
            _ => positional.push(arg),
        }
    }

    let input = match config_file {
        Some(_) if !positional.is_empty() => return Err(ArgsError::ConflictingInput),
        Some(path) => Input::ConfigFile(path),
        None => Input::Positional(positional),
    };

    Ok(Command::Generate(CliArgs {
        output,
        name,
        input,
    }))
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, ArgsError> {
    value.ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}

fn is_flag(token: &str) -> bool {
    token.starts_with('-') && token.len() > 1 && parse_number(token).is_nan()
}

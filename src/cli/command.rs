use std::path::PathBuf;

use clap::{Parser as ClapParser, ValueEnum};

/// Fixed usage text shown for `-h`/`--help`, for bare invocations and
/// alongside every argument error.
pub const USAGE: &str = "\
------------------------------------------------------
UTF-256 encoder/decoder

utf256 [FLAG] INPUT_FILE -o OUTPUT_FILE

|-----------|------------------------------------------|
|  FLAG     |  What it does                            |
|-----------|------------------------------------------|
| -e        | Encodes a UTF-8 file into a UTF-256 file |
| --encode  |                                          |
|-----------|------------------------------------------|
| -d        | Decodes a UTF-256 file into a UTF-8 file |
| --decode  |                                          |
|-----------|------------------------------------------|

Other flags:
  -o, --output <FILE>     Destination file for the converted data (required)
      --loglevel <LEVEL>  off, error, warn, info, debug or trace (default: info)";

#[derive(Debug, ClapParser)]
#[command(
    name       = env!("CARGO_PKG_NAME"),
    about      = "Encode UTF-8 text into the UTF-256 byte-per-bit format and back",
    long_about = None,
    disable_help_flag = true,
)]
pub struct Cli {
    /// UTF-8 text file to encode.
    #[arg(short = 'e', long = "encode", value_name = "FILE")]
    pub encode: Option<PathBuf>,

    /// UTF-256 file to decode.
    #[arg(short = 'd', long = "decode", value_name = "FILE")]
    pub decode: Option<PathBuf>,

    /// Destination file for the converted data.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Set the log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub loglevel: LogLevel,
}

/// A fully validated unit of work derived from the raw flags.
#[derive(Debug, PartialEq, Eq)]
pub enum Job {
    Encode { input: PathBuf, output: PathBuf },
    Decode { input: PathBuf, output: PathBuf },
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("exactly one of -e/--encode or -d/--decode is required")]
    MissingMode,

    #[error("-e/--encode and -d/--decode cannot be combined")]
    ConflictingModes,

    #[error("-o/--output is required")]
    MissingOutput,
}

impl Cli {
    /// Resolve the raw flags into a single job.
    ///
    /// Exactly one of `-e`/`-d` must be present and `-o` is always
    /// required; anything else is an argument error.
    pub fn job(&self) -> Result<Job, ArgumentError> {
        let output = || self.output.clone().ok_or(ArgumentError::MissingOutput);

        match (&self.encode, &self.decode) {
            (Some(_), Some(_)) => Err(ArgumentError::ConflictingModes),
            (None, None) => Err(ArgumentError::MissingMode),
            (Some(input), None) => Ok(Job::Encode {
                input: input.clone(),
                output: output()?,
            }),
            (None, Some(input)) => Ok(Job::Decode {
                input: input.clone(),
                output: output()?,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Disable logging output.
    Off,
    /// No output except errors.
    Error,
    /// Show warnings and errors.
    Warn,
    /// Show info, warnings and errors (default).
    Info,
    /// Show debug, info, warnings and errors.
    Debug,
    /// Show all log messages including trace.
    Trace,
}

impl LogLevel {
    /// Convert LogLevel to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

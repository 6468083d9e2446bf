//! Command-line argument parsing for ragchat.
//!
//! This module handles parsing command-line arguments and determining
//! which mode to run in.

use thiserror::Error;

/// What the binary should do.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Ask one question and exit
    Ask(String),
    /// Read questions from stdin until exit (default)
    Interactive,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct CliInvocation {
    pub command: CliCommand,
    /// `--url` override for the service address
    pub url: Option<String>,
}

/// Invalid command line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

/// Parse command-line arguments.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// Words that are not options form the query, joined by single spaces.
/// Everything after `--` is treated as query text.
///
/// # Examples
///
/// ```
/// use ragchat::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["ragchat".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliInvocation, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut url = None;
    let mut words: Vec<String> = Vec::new();
    let mut only_words = false;
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        if only_words {
            words.push(arg);
            continue;
        }
        match arg.as_str() {
            "--version" | "-V" => {
                return Ok(CliInvocation {
                    command: CliCommand::Version,
                    url,
                })
            }
            "--help" | "-h" => {
                return Ok(CliInvocation {
                    command: CliCommand::Help,
                    url,
                })
            }
            "--url" => {
                url = Some(args.next().ok_or(ArgsError::MissingValue("--url"))?);
            }
            "--" => only_words = true,
            other => {
                if let Some(value) = other.strip_prefix("--url=") {
                    url = Some(value.to_string());
                } else if other.starts_with('-') && other.len() > 1 {
                    return Err(ArgsError::UnknownOption(other.to_string()));
                } else {
                    words.push(other.to_string());
                }
            }
        }
    }

    let query = words.join(" ");
    let command = if query.trim().is_empty() {
        CliCommand::Interactive
    } else {
        CliCommand::Ask(query)
    };

    Ok(CliInvocation { command, url })
}

//! CLI module for ragchat.
//!
//! This module provides command-line interface functionality including:
//! - Argument parsing
//! - One-shot and interactive question loops
//! - Version and usage text
//!
//! # Usage
//!
//! ```ignore
//! use ragchat::cli::{parse_args, run_once, CliCommand};
//!
//! let invocation = parse_args(std::env::args())?;
//! if let CliCommand::Ask(query) = invocation.command {
//!     run_once(&mut session, &mut renderer, &query).await?;
//! }
//! ```

pub mod args;
pub mod input;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, CliInvocation};
pub use input::InputCommand;
pub use version::{version_line, USAGE, VERSION};

use std::io::Write;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::signal;

use crate::render::TerminalRenderer;
use crate::session::ChatSession;
use crate::traits::HttpClient;

const PROMPT: &str = "> ";
const CANCELLED: &str = "(cancelled)";

/// Ask one question and print the answer.
///
/// Fails if the answer fails or Ctrl-C interrupts it.
pub async fn run_once<C, W>(
    session: &mut ChatSession<C>,
    renderer: &mut TerminalRenderer<W>,
    query: &str,
) -> Result<()>
where
    C: HttpClient,
    W: Write,
{
    let outcome = tokio::select! {
        result = session.send(query, &mut *renderer) => Some(result),
        _ = signal::ctrl_c() => None,
    };

    match outcome {
        Some(Ok(_)) => Ok(()),
        Some(Err(err)) => Err(err.into()),
        None => {
            renderer.notice(CANCELLED);
            Err(eyre!("interrupted"))
        }
    }
}

/// Read questions line by line until `exit`, `quit`, end of input or Ctrl-C
/// at the prompt.
///
/// Ctrl-C while an answer streams cancels only that answer. A failed
/// answer is reported by the renderer and the loop continues.
pub async fn run_interactive<C, W, R>(
    session: &mut ChatSession<C>,
    renderer: &mut TerminalRenderer<W>,
    input: R,
) -> Result<()>
where
    C: HttpClient,
    W: Write,
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();

    loop {
        renderer.prompt(PROMPT);

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };

        match InputCommand::parse(&line) {
            InputCommand::Empty => {}
            InputCommand::Quit => break,
            InputCommand::Expand(n) => {
                if !renderer.expand(n) {
                    renderer.notice(&format!("No document {}", n));
                }
            }
            InputCommand::Collapse(n) => {
                if !renderer.collapse(n) {
                    renderer.notice(&format!("No document {}", n));
                }
            }
            InputCommand::Invalid(text) => {
                renderer.notice(&format!("Unknown command: {}", text));
            }
            InputCommand::Ask(query) => {
                let outcome = tokio::select! {
                    result = session.send(&query, &mut *renderer) => Some(result),
                    _ = signal::ctrl_c() => None,
                };
                if outcome.is_none() {
                    tracing::info!("answer cancelled");
                    renderer.notice(CANCELLED);
                }
            }
        }
    }

    tracing::debug!(answered = session.answered(), "leaving interactive mode");
    Ok(())
}

//! Process execution with structured arguments.
//!
//! Programs are spawned directly with an argv list, never through a shell,
//! so values are passed byte-for-byte without any quoting concerns.

use crate::defines::quote_args;
use crate::error::{Result, ShiplaneError};
use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,
}

/// Output line from command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
}

/// Callback for streaming output.
pub type OutputCallback = Box<dyn Fn(OutputLine) + Send>;

fn command_line(program: &str, args: &[String]) -> String {
    let mut parts = Vec::with_capacity(args.len() + 1);
    parts.push(program.to_string());
    parts.extend(args.iter().cloned());
    quote_args(&parts)
}

/// Forward every line of `reader` to `send` and return the full text.
///
/// Lines are read as bytes and decoded lossily, so invalid UTF-8 never
/// stops the reader. The pipe stays drained until the child closes it.
fn pump_lines<R, F>(reader: R, send: F) -> String
where
    R: Read,
    F: Fn(String),
{
    let mut reader = BufReader::new(reader);
    let mut output = String::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                let line = String::from_utf8_lossy(&buf).into_owned();
                output.push_str(&line);
                output.push('\n');
                send(line);
            }
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::debug!("stopped reading child output: {}", e);
                break;
            }
        }
    }

    output
}

/// Execute a program, handing each output line to `callback` as it arrives.
pub fn execute_streaming_args(
    program: &str,
    args: &[String],
    options: &CommandOptions,
    callback: OutputCallback,
) -> Result<CommandResult> {
    let start = Instant::now();
    let spawn_failed = |e: std::io::Error| {
        tracing::debug!("spawn of {} failed: {}", program, e);
        ShiplaneError::CommandFailed {
            command: command_line(program, args),
            code: None,
        }
    };

    let mut cmd = Command::new(program);
    cmd.args(args);
    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    let mut child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(spawn_failed)?;

    let (tx, rx) = mpsc::channel();
    let tx_stderr = tx.clone();

    let stdout_handle = child.stdout.take().map(|stdout| {
        thread::spawn(move || {
            pump_lines(stdout, |line| {
                let _ = tx.send(OutputLine::Stdout(line));
            })
        })
    });

    let stderr_handle = child.stderr.take().map(|stderr| {
        thread::spawn(move || {
            pump_lines(stderr, |line| {
                let _ = tx_stderr.send(OutputLine::Stderr(line));
            })
        })
    });

    for line in rx {
        callback(line);
    }

    let stdout = stdout_handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default();
    let stderr = stderr_handle
        .and_then(|h| h.join().ok())
        .unwrap_or_default();

    let status = child.wait().map_err(spawn_failed)?;

    Ok(CommandResult {
        exit_code: status.code(),
        stdout,
        stderr,
        duration: start.elapsed(),
        success: status.success(),
    })
}

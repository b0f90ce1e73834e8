//! Reporting of the run outcome back to the GitHub Actions runner.
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT`; failures and
//! secret masks are workflow commands written to stdout. The process exit code
//! is what the runner ultimately uses to mark the step as failed.
use log::*;
use std::{
    env,
    fs::OpenOptions,
    io::{self, Stdout, Write},
    path::PathBuf,
    process::{self, ExitCode},
};

use crate::error::Result;

/// Name of the output set on success.
pub const STATUS_OUTPUT: &str = "status";
/// Value of the status output on success.
pub const SUCCESS_STATUS: &str = "✅ Message sent!";

const OUTPUT_FILE_ENV_VAR: &str = "GITHUB_OUTPUT";

/// Final result of a run. Consumed by [`ActionsReporter::report`] so exactly
/// one of success or failure is ever signaled.
#[derive(Debug, PartialEq)]
pub enum RunOutcome {
    Success,
    Failure(String),
}

impl From<Result<()>> for RunOutcome {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => RunOutcome::Success,
            Err(err) => RunOutcome::Failure(err.to_string()),
        }
    }
}

pub struct ActionsReporter<W: Write> {
    out: W,
    output_file: Option<PathBuf>,
}

impl ActionsReporter<Stdout> {
    /// Reporter writing commands to stdout and outputs to `$GITHUB_OUTPUT`.
    pub fn from_env() -> Self {
        let output_file = env::var_os(OUTPUT_FILE_ENV_VAR)
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Self::new(io::stdout(), output_file)
    }
}

impl<W: Write> ActionsReporter<W> {
    pub fn new(out: W, output_file: Option<PathBuf>) -> Self {
        Self { out, output_file }
    }

    /// Ask the runner to mask `secret` in all subsequent log output.
    pub fn add_mask(&mut self, secret: &str) -> Result<()> {
        if secret.is_empty() {
            return Ok(());
        }

        writeln!(self.out, "::add-mask::{}", escape_data(secret))?;

        Ok(())
    }

    /// Set a step output.
    pub fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        match &self.output_file {
            Some(path) => {
                let mut file =
                    OpenOptions::new().create(true).append(true).open(path)?;
                file.write_all(key_value_message(name, value).as_bytes())?;
            }
            None => {
                writeln!(
                    self.out,
                    "::set-output name={}::{}",
                    escape_property(name),
                    escape_data(value)
                )?;
            }
        }

        Ok(())
    }

    /// Mark the step as failed with `message`.
    pub fn set_failed(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "::error::{}", escape_data(message))?;
        self.out.flush()?;

        Ok(())
    }

    /// Signal `outcome` to the runner and return the matching exit code.
    pub fn report(mut self, outcome: RunOutcome) -> ExitCode {
        let failure = match outcome {
            RunOutcome::Success => {
                match self.set_output(STATUS_OUTPUT, SUCCESS_STATUS) {
                    Ok(()) => {
                        info!("{STATUS_OUTPUT}: {SUCCESS_STATUS}");
                        return ExitCode::SUCCESS;
                    }
                    Err(err) => err.to_string(),
                }
            }
            RunOutcome::Failure(message) => message,
        };

        error!("{failure}");

        if let Err(err) = self.set_failed(&failure) {
            error!("failed to signal failure to the runner: {err}");
        }

        ExitCode::FAILURE
    }
}

/// Render `name=value`, switching to the heredoc form for multi-line values.
fn key_value_message(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{name}={value}\n");
    }

    let mut delimiter = format!("ghadelimiter_{}", process::id());
    while value.contains(&delimiter) {
        delimiter.push('_');
    }

    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

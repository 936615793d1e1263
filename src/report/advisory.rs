//! Short natural-language advice on a projection
//!
//! Advice text comes from an opaque external provider. The engine result is
//! only summarised into a prompt; any provider failure yields
//! [`FALLBACK_ADVICE`] instead of an error.

use std::io::{Read, Write};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use anyhow::{bail, Context};
use log::{debug, warn};

use super::format::format_currency;
use crate::input::{coerce_number, ProjectionInput};
use crate::projection::ProjectionResult;

/// Returned whenever the provider fails or answers with nothing
pub const FALLBACK_ADVICE: &str = "Time is the best friend of compound interest.";

/// Environment variable naming the external advisor command
pub const ADVISOR_CMD_ENV: &str = "WEALTH_ADVISOR_CMD";

/// Environment variable overriding the advisor deadline, in seconds
pub const ADVISOR_TIMEOUT_ENV: &str = "WEALTH_ADVISOR_TIMEOUT_SECS";

/// Time an advisor command gets before it is killed
pub const DEFAULT_ADVISOR_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that turns a prompt into prose
pub trait AdviceProvider {
    fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Provider that pipes the prompt to an external command's stdin and reads
/// the advice from its stdout
///
/// A command still running at the deadline is killed and counts as a failure.
#[derive(Debug, Clone)]
pub struct CommandAdviceProvider {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandAdviceProvider {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            timeout: DEFAULT_ADVISOR_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build from `WEALTH_ADVISOR_CMD` (whitespace-separated program and args)
    /// and the optional `WEALTH_ADVISOR_TIMEOUT_SECS`
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = std::env::var(ADVISOR_CMD_ENV)
            .with_context(|| format!("{} is not set", ADVISOR_CMD_ENV))?;
        let mut parts = raw.split_whitespace().map(str::to_string);
        let provider = match parts.next() {
            Some(program) => Self::new(program, parts.collect()),
            None => bail!("{} is empty", ADVISOR_CMD_ENV),
        };

        match std::env::var(ADVISOR_TIMEOUT_ENV) {
            Ok(secs) => Ok(provider.with_timeout(parse_timeout(&secs))),
            Err(_) => Ok(provider),
        }
    }
}

/// Deadline from text seconds; unparsable or non-positive values use the default
fn parse_timeout(secs: &str) -> Duration {
    let value = coerce_number(secs);
    if value > 0.0 {
        Duration::try_from_secs_f64(value).unwrap_or(DEFAULT_ADVISOR_TIMEOUT)
    } else {
        DEFAULT_ADVISOR_TIMEOUT
    }
}

fn kill(child: &mut Child) {
    if let Err(e) = child.kill() {
        debug!("Advisor already exited: {}", e);
    }
    // Reap so no zombie is left behind
    let _ = child.wait();
}

impl AdviceProvider for CommandAdviceProvider {
    fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to start advisor `{}`", self.program))?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(prompt.as_bytes()) {
                kill(&mut child);
                return Err(e).context("failed to send prompt");
            }
        }

        let mut stdout = match child.stdout.take() {
            Some(stdout) => stdout,
            None => {
                kill(&mut child);
                bail!("advisor stdout was not captured");
            }
        };

        // Read on a separate thread so the wait can be bounded
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let mut buf = Vec::new();
            let read = stdout.read_to_end(&mut buf).map(|_| buf);
            let _ = tx.send(read);
        });

        let output = match rx.recv_timeout(self.timeout) {
            Ok(read) => read.context("failed to read advisor output")?,
            Err(RecvTimeoutError::Timeout) => {
                kill(&mut child);
                bail!("advisor timed out after {:?}", self.timeout);
            }
            Err(RecvTimeoutError::Disconnected) => {
                kill(&mut child);
                bail!("advisor output reader stopped");
            }
        };

        let status = child.wait().context("advisor did not finish")?;
        if !status.success() {
            bail!("advisor exited with {}", status);
        }
        String::from_utf8(output).context("advisor output is not UTF-8")
    }
}

/// Summary string handed to the advice provider
pub fn advisory_prompt(input: &ProjectionInput, result: &ProjectionResult) -> String {
    let contribution = result
        .required_monthly_contribution
        .unwrap_or(input.monthly_contribution);
    format!(
        "Analyze: initial capital {}, monthly contribution {}, rate {}% ({}). Final result: {}. \
         Give a very short piece of financial advice.",
        format_currency(input.initial_capital),
        format_currency(contribution),
        input.nominal_rate,
        input.rate_basis.as_str(),
        format_currency(result.final_total),
    )
}

/// Ask the provider for advice, falling back to a fixed message on any failure
pub fn advise(provider: &dyn AdviceProvider, input: &ProjectionInput, result: &ProjectionResult) -> String {
    let prompt = advisory_prompt(input, result);
    debug!("Advisory prompt: {}", prompt);

    match provider.generate(&prompt) {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        Ok(_) => {
            warn!("Advice provider returned an empty answer");
            FALLBACK_ADVICE.to_string()
        }
        Err(e) => {
            warn!("Advice provider failed: {:#}", e);
            FALLBACK_ADVICE.to_string()
        }
    }
}

/// Advice from the provider configured in the environment, or the fallback
pub fn advise_from_env(input: &ProjectionInput, result: &ProjectionResult) -> String {
    match CommandAdviceProvider::from_env() {
        Ok(provider) => advise(&provider, input, result),
        Err(e) => {
            warn!("No advice provider: {:#}", e);
            FALLBACK_ADVICE.to_string()
        }
    }
}

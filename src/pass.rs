//! Invocation of the external password tool.

use std::process::Command;

use anyhow::{Context, Result};
use zeroize::Zeroize;

use crate::consts::PASSPICK_PASS_BINARY;
use crate::error::PasspickError;

/// Asks the external tool (`pass` unless `PASSPICK_PASS_BINARY` says
/// otherwise) to decrypt `entry` and returns the first line of its output.
pub fn show(entry: &str) -> Result<String> {
    show_with(&PASSPICK_PASS_BINARY, entry)
}

/// Like [`show`], with the tool made explicit.
///
/// The tool runs synchronously with `entry` as its only argument and the
/// caller's environment. Anything on stderr is a failure and is passed
/// through verbatim; the exit status is not consulted.
pub fn show_with(binary: &str, entry: &str) -> Result<String> {
    let output = Command::new(binary)
        .arg(entry)
        .output()
        .with_context(|| format!("Failed to run {}", binary))?;

    if !output.stderr.is_empty() {
        let message = String::from_utf8_lossy(&output.stderr)
            .trim_end()
            .to_owned();
        return Err(PasspickError::PassFailed(message).into());
    }

    // the buffer gets wiped even when it was not valid UTF-8
    let mut stdout = output.stdout;
    let secret = std::str::from_utf8(&stdout)
        .map(|text| text.lines().next().unwrap_or_default().to_owned());
    stdout.zeroize();

    Ok(secret?)
}

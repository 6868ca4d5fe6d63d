// TODO: Mac?

use std::env;
use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;
use std::time;

use anyhow::{Context, Result};
use data_encoding::HEXLOWER;
use ring::digest;

use crate::consts::{PASSWORD_STORE_CLIP_TIME, PASSWORD_STORE_X_SELECTION};
use crate::PasspickError;

pub fn clip<S>(contents: S) -> Result<()>
where
    S: AsRef<[u8]>,
{
    let contents = contents.as_ref();
    if env::var("WAYLAND_DISPLAY").is_ok() {
        Command::new("wl-copy")
            .arg("--trim-newline")
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| "Failed to spawn wl-copy")?
            .stdin
            .with_context(|| "stdin wasn't captured")?
            .write_all(contents)?;
    } else if env::var("DISPLAY").is_ok() {
        Command::new("xclip")
            .args(&["-in", "-selection", &PASSWORD_STORE_X_SELECTION])
            .stdin(Stdio::piped())
            .spawn()
            .with_context(|| "Failed to spawn xclip")?
            .stdin
            .with_context(|| "stdin wasn't captured")?
            .write_all(contents)?;
    } else {
        return Err(PasspickError::ClipFailed.into());
    }

    Ok(())
}

pub fn paste() -> Result<Vec<u8>> {
    let bytes = if env::var("WAYLAND_DISPLAY").is_ok() {
        Command::new("wl-paste")
            .arg("--no-newline")
            .output()
            .with_context(|| "Failed to spawn wl-paste")?
            .stdout
    } else if env::var("DISPLAY").is_ok() {
        Command::new("xclip")
            .args(&["-out", "-selection", &PASSWORD_STORE_X_SELECTION])
            .output()
            .with_context(|| "Failed to spawn xclip")?
            .stdout
    } else {
        return Err(PasspickError::PasteFailed.into());
    };

    Ok(bytes)
}

pub fn clear() -> Result<()> {
    if env::var("WAYLAND_DISPLAY").is_ok() {
        Command::new("wl-copy")
            .arg("--clear")
            .status()
            .with_context(|| "Failed to spawn wl-copy")?;

        Ok(())
    } else {
        clip("")
    }
}

/// Hex digest a clipboard payload, so the unclip helper can tell whether the
/// clipboard still holds what we put there.
pub fn hash<S>(contents: S) -> String
where
    S: AsRef<[u8]>,
{
    HEXLOWER.encode(digest::digest(&digest::SHA256, contents.as_ref()).as_ref())
}

/// Copies `secret` and arms the detached unclip helper, which clears the
/// clipboard after `PASSWORD_STORE_CLIP_TIME` seconds.
pub fn copy_timed<S>(secret: S) -> Result<()>
where
    S: AsRef<[u8]>,
{
    let secret = secret.as_ref();
    let hash = hash(secret);

    clip(secret)?;

    // otherwise, the clipboard tool may not have taken ownership yet
    thread::sleep(time::Duration::from_millis(50));

    Command::new(env::current_exe()?)
        .args(&["unclip", PASSWORD_STORE_CLIP_TIME.as_str()])
        .env("PASSPICK_UNCLIP_HASH", hash)
        .spawn()
        .with_context(|| "Failed to spawn the unclip helper")?;

    Ok(())
}

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::clipboard;
use crate::consts::PASSPICK_UNCLIP_HASH;
use crate::error::PasspickError;

/// Sleeps out the clip time, then clears the clipboard if it still holds
/// what was copied. Spawned by pick with the expected hash in the
/// environment; never user-facing.
pub fn unclip(timeout: u64, force: bool) -> Result<()> {
    if PASSPICK_UNCLIP_HASH.is_empty() {
        eprintln!(
            "Unclip is spawned in the background when a secret is copied. \
             This should not be called by a user."
        );
        return Ok(());
    }

    thread::sleep(Duration::from_secs(timeout));

    // the user may have copied something else in the meantime; that is
    // theirs to keep
    let current = clipboard::hash(clipboard::paste()?);
    if current != *PASSPICK_UNCLIP_HASH && !force {
        return Err(PasspickError::HashMismatch(current, PASSPICK_UNCLIP_HASH.clone()).into());
    }

    clipboard::clear()
}

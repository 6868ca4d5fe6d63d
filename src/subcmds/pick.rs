use anyhow::Result;
use termion::color::{self, Fg};
use zeroize::Zeroize;

use crate::clipboard;
use crate::consts::{PASSWORD_STORE_CLIP_TIME, PASSWORD_STORE_DIR};
use crate::error::PasspickError;
use crate::search::{self, Query};
use crate::store::Store;
use crate::ui;

/// The default operation: pick an entry interactively and put its secret on
/// the clipboard for `PASSWORD_STORE_CLIP_TIME` seconds.
pub fn pick(query: Vec<String>, flat: bool) -> Result<()> {
    let store = Store::read(&*PASSWORD_STORE_DIR)?;
    if store.is_empty() {
        return Err(PasspickError::EmptyStore.into());
    }

    let seed = query.join(" ");
    if !seed.is_empty() && search::view(&store, &Query::new(&seed), flat).is_empty() {
        return Err(PasspickError::NoMatchesFound(seed).into());
    }

    match ui::picker(&store, &seed, flat)? {
        Some(mut picked) => {
            // the secret gets wiped whether or not the clip landed
            let copied = clipboard::copy_timed(&picked.secret);
            picked.secret.zeroize();
            copied?;

            println!(
                "{}",
                confirmation(&picked.path, PASSWORD_STORE_CLIP_TIME.as_str())
            );

            Ok(())
        }
        None => Err(PasspickError::UserAbort.into()),
    }
}

fn confirmation(path: &str, seconds: &str) -> String {
    format!(
        "{}Copied {} to the clipboard. Will clear in {} seconds.{}",
        Fg(color::Yellow),
        path,
        seconds,
        Fg(color::Reset)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_confirmation_is_colored_and_names_the_entry() {
        let message = confirmation("Internet/amazon.com/password", "45");

        assert!(message.starts_with(&Fg(color::Yellow).to_string()));
        assert!(message.contains("Copied Internet/amazon.com/password to the clipboard"));
        assert!(message.contains("clear in 45 seconds"));
        assert!(message.ends_with(&Fg(color::Reset).to_string()));
    }
}

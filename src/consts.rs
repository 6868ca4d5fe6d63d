//! Runtime constants
//!
//! # consts
//!
//! This module houses constants used throughout the code. Many of these are
//! just lazily-evaluated environment variables, named after the pass(1)
//! variables where pass defines them.

use std::env;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use structopt::clap::crate_version;

pub static VERSION: Lazy<String> = Lazy::new(|| {
    let ver = crate_version!().to_owned();
    let commit_hash = env!("GIT_HASH");

    if !commit_hash.is_empty() {
        format!("{} ({})", ver, commit_hash)
    } else {
        ver
    }
});
pub static HOME: Lazy<String> = Lazy::new(|| env::var("HOME").expect("HOME was not set"));
pub static PASSPICK_UNCLIP_HASH: Lazy<String> =
    Lazy::new(|| env::var("PASSPICK_UNCLIP_HASH").unwrap_or_default());
pub static PASSPICK_PASS_BINARY: Lazy<String> =
    Lazy::new(|| env::var("PASSPICK_PASS_BINARY").unwrap_or_else(|_| String::from("pass")));

// pass(1)
pub static PASSWORD_STORE_DIR: Lazy<PathBuf> = Lazy::new(|| match env::var("PASSWORD_STORE_DIR") {
    Ok(store) => expand_tilde(&store, &HOME),
    Err(_) => PathBuf::from(format!("{}/.password-store", *HOME)),
});
pub static PASSWORD_STORE_X_SELECTION: Lazy<String> =
    Lazy::new(|| match env::var("PASSWORD_STORE_X_SELECTION") {
        Ok(sel) => match sel.as_ref() {
            "p" | "primary" => sel.to_owned(),
            "sec" | "secondary" => sel.to_owned(),
            _ => "clipboard".to_owned(),
        },
        Err(_) => "clipboard".to_owned(),
    });
pub static PASSWORD_STORE_CLIP_TIME: Lazy<String> =
    Lazy::new(|| env::var("PASSWORD_STORE_CLIP_TIME").unwrap_or_else(|_| "45".to_owned()));

/// Expands a leading `~` or `~/` to `home`. A `~user` form names somebody
/// else's home directory, which is not ours to resolve, so it passes through
/// untouched.
fn expand_tilde(store: &str, home: &str) -> PathBuf {
    let store = match store.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => format!("{}{}", home, rest),
        _ => store.to_owned(),
    };

    PathBuf::from(store.trim_end_matches('/'))
}

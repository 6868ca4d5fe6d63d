//! The password store, read into a search-indexed tree.
//!
//! The store is a directory of `.gpg` files; nothing here decrypts anything.
//! One walk at startup produces a flat, depth-first pre-order list of rows:
//! directory groups first, their secrets beneath them, siblings sorted by
//! file name. The list is never mutated afterward.

use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::error::PasspickError;

/// One row of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Display name: the file stem for secrets, the directory name for
    /// groups.
    pub name: String,
    /// Path relative to the walked root, `.gpg` stripped. For secrets this
    /// is the argument handed to the external tool.
    pub path: String,
    /// Lowercased `path`; what the search filter matches against.
    pub search: String,
    /// Directory grouping row. Never decryptable.
    pub is_dir: bool,
    /// Nesting level below the root, starting at 0.
    pub depth: usize,
}

impl Entry {
    fn secret(path: String, depth: usize) -> Entry {
        Entry {
            name: basename(&path).to_owned(),
            search: path.to_lowercase(),
            path,
            is_dir: false,
            depth,
        }
    }

    fn group(path: String, depth: usize) -> Entry {
        Entry {
            name: basename(&path).to_owned(),
            search: path.to_lowercase(),
            path,
            is_dir: true,
            depth,
        }
    }
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[derive(Debug, Clone, Default)]
pub struct Store {
    entries: Vec<Entry>,
}

impl Store {
    /// Walks `root` and builds the row list.
    ///
    /// Hidden files and directories are pruned, subtrees included. Files
    /// without the `.gpg` extension are skipped, and a directory only gets a
    /// group row if at least one secret survives somewhere beneath it.
    pub fn read<P>(root: P) -> Result<Store>
    where
        P: AsRef<Path>,
    {
        let root = root.as_ref();

        if !root.is_dir() {
            return Err(PasspickError::StoreDoesntExist.into());
        }

        let mut entries = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .sort_by(|a, b| a.file_name().cmp(b.file_name()))
            .into_iter()
            .filter_entry(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .map(|s| !s.starts_with('.'))
                    .unwrap_or(false)
            })
        {
            let entry = entry?;
            let depth = entry.depth() - 1;
            let rel = entry
                .path()
                .strip_prefix(root)?
                .to_str()
                .with_context(|| "Entry did not contain a valid path")?
                .to_owned();

            if entry.file_type().is_dir() {
                entries.push(Entry::group(rel, depth));
            } else if rel.ends_with(".gpg") {
                let rel = rel[..rel.len() - 4].to_owned();
                entries.push(Entry::secret(rel, depth));
            }
        }

        Ok(Store {
            entries: prune_childless(entries),
        })
    }

    /// All rows, pre-order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_entries(entries: Vec<Entry>) -> Store {
        Store { entries }
    }
}

/// Drops group rows without a single secret in their subtree. In pre-order
/// the subtree of a group is the contiguous run of deeper rows right after
/// it.
fn prune_childless(entries: Vec<Entry>) -> Vec<Entry> {
    let keep = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            if !entry.is_dir {
                return true;
            }

            entries[i + 1..]
                .iter()
                .take_while(|below| below.depth > entry.depth)
                .any(|below| !below.is_dir)
        })
        .collect::<Vec<_>>();

    entries
        .into_iter()
        .zip(keep)
        .filter_map(|(entry, keep)| if keep { Some(entry) } else { None })
        .collect()
}

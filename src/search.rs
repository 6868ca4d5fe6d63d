//! The search filter.
//!
//! Matching is plain substring containment, not fuzzy ranking: every
//! whitespace-separated word of the query must occur somewhere in the
//! entry's lowercased path.

use crate::store::{Entry, Store};

#[derive(Debug, Clone, Default)]
pub struct Query {
    words: Vec<String>,
}

impl Query {
    pub fn new<S>(raw: S) -> Query
    where
        S: AsRef<str>,
    {
        Query {
            words: raw
                .as_ref()
                .split_whitespace()
                .map(|word| word.to_lowercase())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `entry` survives the filter. Group rows never match on their
    /// own; they only appear in a view above a surviving secret.
    pub fn matches(&self, entry: &Entry) -> bool {
        if entry.is_dir {
            return false;
        }

        self.words.iter().all(|word| entry.search.contains(word.as_str()))
    }
}

/// Indices into `store.entries()` that survive `query`, in store order.
///
/// With `flat` the view holds secrets only; otherwise each surviving secret
/// pulls its ancestor groups in above it, once.
pub fn view(store: &Store, query: &Query, flat: bool) -> Vec<usize> {
    let entries = store.entries();
    let mut view = Vec::new();
    // group rows between the last flushed row and the walk position; always
    // strictly increasing in depth, so they are exactly the unflushed
    // ancestors of whatever comes next
    let mut pending: Vec<usize> = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        while pending
            .last()
            .map(|&p| entries[p].depth >= entry.depth)
            .unwrap_or(false)
        {
            pending.pop();
        }

        if entry.is_dir {
            if !flat {
                pending.push(i);
            }
        } else if query.matches(entry) {
            view.append(&mut pending);
            view.push(i);
        }
    }

    view
}

/// Position of the first secret row within `view`; the place the cursor
/// lands after every filter change.
pub fn first_secret(store: &Store, view: &[usize]) -> Option<usize> {
    view.iter()
        .position(|&i| !store.entries()[i].is_dir)
}

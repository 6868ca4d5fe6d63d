//! Branch-drawn rendering of a store, tree(1)-style.

use std::fmt;
use std::fmt::Display;

use termion::color;
use termion::style;

use crate::store::{Entry, Store};

const EDGE: &str = "├── ";
const LINE: &str = "│   ";
const CORNER: &str = "└── ";
const BLANK: &str = "    ";

/// Displays a store under `label`, directories bold blue, secrets plain.
pub struct Tree<'a> {
    store: &'a Store,
    label: &'a str,
}

impl<'a> Tree<'a> {
    pub fn new(store: &'a Store, label: &'a str) -> Tree<'a> {
        Tree { store, label }
    }
}

fn directory(name: &str) -> String {
    format!(
        "{bold}{blue}{}{reset}",
        name,
        bold = style::Bold,
        blue = color::Fg(color::Blue),
        reset = style::Reset
    )
}

/// Whether no later row is a sibling of row `i`. The first following row at
/// the same depth or shallower decides.
fn is_last_sibling(entries: &[Entry], i: usize) -> bool {
    entries[i + 1..]
        .iter()
        .find(|entry| entry.depth <= entries[i].depth)
        .map(|entry| entry.depth < entries[i].depth)
        .unwrap_or(true)
}

impl Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", directory(self.label))?;

        let entries = self.store.entries();
        // one flag per open ancestor: true once that branch has run out of
        // siblings and only needs blank padding below it
        let mut lasts: Vec<bool> = Vec::new();

        for (i, entry) in entries.iter().enumerate() {
            lasts.truncate(entry.depth);

            for &done in &lasts {
                if done {
                    write!(f, "{}", BLANK)?;
                } else {
                    write!(f, "{}", LINE)?;
                }
            }

            let last = is_last_sibling(entries, i);
            let glyph = if last { CORNER } else { EDGE };

            if entry.is_dir {
                writeln!(f, "{}{}", glyph, directory(&entry.name))?;
                lasts.push(last);
            } else {
                writeln!(f, "{}{}", glyph, entry.name)?;
            }
        }

        Ok(())
    }
}

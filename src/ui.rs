//! The interactive picker.
//!
//! A full-screen terminal view over the store: a search bar, the filtered
//! entry list, and a help footer. Keystrokes edit the filter in place;
//! Enter asks the external tool for the secret under the cursor. Decryption
//! runs synchronously inside the loop so a failure turns into the error
//! view and the list survives underneath it.

use anyhow::Result;
use termion::event::Key;
use termion::input::MouseTerminal;
use termion::raw::IntoRawMode;
use termion::screen::AlternateScreen;
use tui::backend::{Backend, TermionBackend};
use tui::layout::{Constraint, Direction, Layout};
use tui::style::{Color, Modifier, Style};
use tui::widgets::{Block, Borders, Paragraph, SelectableList, Text, Widget};
use tui::Terminal;

use crate::event::{Event, Events};
use crate::pass;
use crate::search::{self, Query};
use crate::store::Store;

/// A successful pick: the entry's store-relative path and the first line of
/// its decrypted contents.
pub struct Picked {
    pub path: String,
    pub secret: String,
}

/// What a key press asks the surrounding loop to do.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Redraw,
    /// Decrypt the secret under the cursor.
    Activate(String),
    Abort,
}

struct App<'a> {
    store: &'a Store,
    flat: bool,
    query: String,
    /// Indices into `store.entries()` that survive the query.
    view: Vec<usize>,
    /// Cursor position within `view`; `None` exactly when the view is empty.
    selected: Option<usize>,
    /// When set, the list is replaced by this message until a key is pressed.
    error: Option<String>,
}

impl<'a> App<'a> {
    fn new(store: &'a Store, seed: &str, flat: bool) -> App<'a> {
        let mut app = App {
            store,
            flat,
            query: seed.to_owned(),
            view: Vec::new(),
            selected: None,
            error: None,
        };
        app.refilter();

        app
    }

    fn refilter(&mut self) {
        self.view = search::view(self.store, &Query::new(&self.query), self.flat);
        self.selected = search::first_secret(self.store, &self.view);
    }

    /// Secrets surviving the filter; what the footer reports.
    fn matching(&self) -> usize {
        self.view
            .iter()
            .filter(|&&i| !self.store.entries()[i].is_dir)
            .count()
    }

    fn on_key(&mut self, key: Key) -> Action {
        // the error view swallows one key press, then the list is back
        if self.error.take().is_some() {
            return Action::Redraw;
        }

        match key {
            Key::Esc | Key::Ctrl('c') => return Action::Abort,
            Key::Up => {
                if let Some(selected) = self.selected {
                    if selected > 0 {
                        self.selected = Some(selected - 1);
                    }
                }
            }
            Key::Down => {
                if let Some(selected) = self.selected {
                    if selected + 1 < self.view.len() {
                        self.selected = Some(selected + 1);
                    }
                }
            }
            Key::Char('\n') => {
                if let Some(selected) = self.selected {
                    let entry = &self.store.entries()[self.view[selected]];
                    // group rows are inert
                    if !entry.is_dir {
                        return Action::Activate(entry.path.clone());
                    }
                }
            }
            Key::Char(c) => {
                self.query.push(c);
                self.refilter();
            }
            Key::Backspace => {
                if self.query.pop().is_some() {
                    self.refilter();
                }
            }
            _ => {}
        }

        Action::Redraw
    }

    fn rows(&self) -> Vec<String> {
        self.view
            .iter()
            .map(|&i| {
                let entry = &self.store.entries()[i];

                if self.flat {
                    entry.path.clone()
                } else if entry.is_dir {
                    format!("{}{}/", "  ".repeat(entry.depth), entry.name)
                } else {
                    format!("{}{}", "  ".repeat(entry.depth), entry.name)
                }
            })
            .collect()
    }
}

/// +-Password Store-------------------------------------------+
/// | ama▋                                                     |
/// +----------------------------------------------------------+
/// | Internet/                                                |
/// |   amazon.com/                                            |
/// | >   password <-- as selected entry                       |
/// +----------------------------------------------------------+
/// | Found 1 matching secrets. <↑/↓> to move, <Enter> to      |
/// | decrypt and copy, <Esc> to quit                          |
/// +----------------------------------------------------------+
///
/// Returns the picked entry and its secret, or `None` if the user backed
/// out.
pub fn picker(store: &Store, seed: &str, flat: bool) -> Result<Option<Picked>> {
    let mut app = App::new(store, seed, flat);
    let mut picked = None;

    // `terminal` gets dropped at the end of the scope, allowing stdout to work
    // as expected
    {
        let stdout = std::io::stdout().into_raw_mode()?;
        let stdout = MouseTerminal::from(stdout);
        let stdout = AlternateScreen::from(stdout);
        let backend = TermionBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        let events = Events::new();
        terminal.hide_cursor()?;

        loop {
            draw(&mut terminal, &app)?;

            match events.next()? {
                Event::Input(key) => match app.on_key(key) {
                    Action::Redraw => {}
                    Action::Abort => break,
                    Action::Activate(path) => match pass::show(&path) {
                        Ok(secret) => {
                            picked = Some(Picked { path, secret });
                            break;
                        }
                        Err(err) => app.error = Some(format!("{:#}", err)),
                    },
                },
                Event::Tick => {}
            }
        }

        terminal.show_cursor()?;
    }

    Ok(picked)
}

fn draw<B>(terminal: &mut Terminal<B>, app: &App) -> Result<()>
where
    B: Backend,
{
    let size = terminal.size()?;
    let rows = app.rows();

    terminal.draw(|mut frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(
                [
                    Constraint::Length(3), // search bar
                    Constraint::Min(1),    // entry list or error view
                    Constraint::Length(3), // help footer
                ]
                .as_ref(),
            )
            .split(size);

        Paragraph::new(vec![Text::raw(format!("{}▋", app.query))].iter())
            .block(
                Block::default()
                    .title("Password Store")
                    .title_style(Style::default().fg(Color::Red))
                    .borders(Borders::ALL),
            )
            .render(&mut frame, chunks[0]);

        if let Some(error) = &app.error {
            Paragraph::new(
                vec![Text::styled(
                    error.as_str(),
                    Style::default().fg(Color::Red),
                )]
                .iter(),
            )
            .block(Block::default().borders(Borders::ALL).title("Error"))
            .wrap(true)
            .render(&mut frame, chunks[1]);
        } else {
            SelectableList::default()
                .block(Block::default().borders(Borders::ALL))
                .items(&rows)
                .select(app.selected)
                .highlight_style(Style::default().fg(Color::Yellow).modifier(Modifier::BOLD))
                .highlight_symbol(">")
                .render(&mut frame, chunks[1]);
        }

        let help = if app.error.is_some() {
            "Press any key to return to the list".to_owned()
        } else {
            format!(
                "Found {} matching secrets. <↑/↓> to move, <Enter> to decrypt and copy, \
                 <Esc> to quit",
                app.matching()
            )
        };
        Paragraph::new(vec![Text::raw(help)].iter())
            .block(Block::default().borders(Borders::ALL))
            .wrap(true)
            .render(&mut frame, chunks[2]);
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::store::Entry;

    fn entry(path: &str, is_dir: bool, depth: usize) -> Entry {
        Entry {
            name: path.rsplit('/').next().unwrap().to_owned(),
            search: path.to_lowercase(),
            path: path.to_owned(),
            is_dir,
            depth,
        }
    }

    fn sample() -> Store {
        Store::from_entries(vec![
            entry("Internet", true, 0),
            entry("Internet/amazon.com", true, 1),
            entry("Internet/amazon.com/password", false, 2),
            entry("Internet/mail", false, 1),
            entry("standalone", false, 0),
        ])
    }

    fn typing(app: &mut App, text: &str) {
        for c in text.chars() {
            app.on_key(Key::Char(c));
        }
    }

    #[test]
    fn the_cursor_starts_on_the_first_secret() {
        let store = sample();
        let app = App::new(&store, "", false);

        // two group rows above it
        assert_eq!(app.selected, Some(2));
    }

    #[test]
    fn typing_narrows_and_backspace_widens() {
        let store = sample();
        let mut app = App::new(&store, "", false);
        assert_eq!(app.view.len(), 5);

        typing(&mut app, "mail");
        assert_eq!(app.view.len(), 2); // Internet + mail
        assert_eq!(app.matching(), 1);

        app.on_key(Key::Backspace);
        app.on_key(Key::Backspace);
        app.on_key(Key::Backspace);
        app.on_key(Key::Backspace);
        assert_eq!(app.view.len(), 5);
        assert_eq!(app.matching(), 3);
    }

    #[test]
    fn a_seed_prefilters_the_view() {
        let store = sample();
        let app = App::new(&store, "amazon", false);

        assert_eq!(app.view.len(), 3);
        assert_eq!(app.selected, Some(2));
    }

    #[test]
    fn movement_clamps_at_both_edges() {
        let store = sample();
        let mut app = App::new(&store, "", false);

        app.on_key(Key::Up);
        app.on_key(Key::Up);
        assert_eq!(app.selected, Some(0));
        app.on_key(Key::Up);
        assert_eq!(app.selected, Some(0));

        for _ in 0..10 {
            app.on_key(Key::Down);
        }
        assert_eq!(app.selected, Some(4));
    }

    #[test]
    fn enter_on_a_group_row_is_inert() {
        let store = sample();
        let mut app = App::new(&store, "", false);

        app.on_key(Key::Up);
        app.on_key(Key::Up);
        assert_eq!(app.on_key(Key::Char('\n')), Action::Redraw);
    }

    #[test]
    fn enter_on_a_secret_activates_it() {
        let store = sample();
        let mut app = App::new(&store, "", false);

        assert_eq!(
            app.on_key(Key::Char('\n')),
            Action::Activate("Internet/amazon.com/password".to_owned())
        );
    }

    #[test]
    fn enter_on_an_empty_view_is_inert() {
        let store = sample();
        let mut app = App::new(&store, "no such entry", false);

        assert_eq!(app.selected, None);
        assert_eq!(app.on_key(Key::Char('\n')), Action::Redraw);
        assert_eq!(app.on_key(Key::Up), Action::Redraw);
        assert_eq!(app.on_key(Key::Down), Action::Redraw);
    }

    #[test]
    fn escape_and_ctrl_c_abort() {
        let store = sample();
        let mut app = App::new(&store, "", false);

        assert_eq!(app.on_key(Key::Esc), Action::Abort);
        assert_eq!(app.on_key(Key::Ctrl('c')), Action::Abort);
    }

    #[test]
    fn the_error_view_swallows_one_key() {
        let store = sample();
        let mut app = App::new(&store, "", false);
        app.error = Some("gpg: decryption failed".to_owned());

        assert_eq!(app.on_key(Key::Char('q')), Action::Redraw);
        assert!(app.error.is_none());
        // swallowed, not typed into the filter
        assert_eq!(app.query, "");

        app.on_key(Key::Char('q'));
        assert_eq!(app.query, "q");
    }

    #[test]
    fn flat_rows_are_full_paths() {
        let store = sample();
        let app = App::new(&store, "", true);

        assert_eq!(
            app.rows(),
            vec!["Internet/amazon.com/password", "Internet/mail", "standalone"]
        );
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn tree_rows_indent_by_depth() {
        let store = sample();
        let app = App::new(&store, "", false);

        assert_eq!(
            app.rows(),
            vec![
                "Internet/",
                "  amazon.com/",
                "    password",
                "  mail",
                "standalone",
            ]
        );
    }
}

use std::fs;
use std::path::Path;

use termion::color;
use termion::style;

use passpick::search::{self, Query};
use passpick::store::Store;
use passpick::tree::Tree;

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

fn sample_store() -> (tempfile::TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    for file in &[
        "Internet/amazon.com/password.gpg",
        "Internet/github.com/password.gpg",
        "Phone/pin.gpg",
        "standalone.gpg",
    ] {
        touch(&dir.path().join(file));
    }

    let store = Store::read(dir.path()).unwrap();
    (dir, store)
}

fn paths(store: &Store, view: &[usize]) -> Vec<String> {
    view.iter()
        .map(|&i| store.entries()[i].path.clone())
        .collect()
}

#[test]
fn a_walked_store_filters_down_to_one_branch() {
    let (_dir, store) = sample_store();

    let view = search::view(&store, &Query::new("github pass"), false);

    assert_eq!(
        paths(&store, &view),
        vec![
            "Internet",
            "Internet/github.com",
            "Internet/github.com/password",
        ]
    );
    assert_eq!(search::first_secret(&store, &view), Some(2));
}

#[test]
fn the_flat_view_of_a_walked_store_holds_every_secret() {
    let (_dir, store) = sample_store();

    let view = search::view(&store, &Query::new(""), true);

    assert_eq!(
        paths(&store, &view),
        vec![
            "Internet/amazon.com/password",
            "Internet/github.com/password",
            "Phone/pin",
            "standalone",
        ]
    );
}

#[test]
fn a_walked_store_renders_as_a_tree() {
    let dir = tempfile::tempdir().unwrap();
    for file in &[
        "Internet/mail.gpg",
        "Internet/shops/amazon.gpg",
        "standalone.gpg",
    ] {
        touch(&dir.path().join(file));
    }
    let store = Store::read(dir.path()).unwrap();

    let blue = |name: &str| {
        format!(
            "{}{}{}{}",
            style::Bold,
            color::Fg(color::Blue),
            name,
            style::Reset
        )
    };
    let expected = format!(
        "{root}\n\
         ├── {internet}\n\
         │   ├── mail\n\
         │   └── {shops}\n\
         │       └── amazon\n\
         └── standalone\n",
        root = blue("Password Store"),
        internet = blue("Internet"),
        shops = blue("shops"),
    );

    assert_eq!(Tree::new(&store, "Password Store").to_string(), expected);
}

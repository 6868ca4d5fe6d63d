use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

use crate::consts::PASSWORD_STORE_DIR;
use crate::error::PasspickError;
use crate::store::Store;
use crate::tree::Tree;

/// Prints the store (or a subfolder of it) as a tree, without starting the
/// picker.
pub fn ls(subfolder: Option<String>) -> Result<()> {
    let (root, label) = resolve(subfolder)?;

    let store = Store::read(&root)?;
    if store.is_empty() {
        // nothing worth drawing
        return Ok(());
    }

    print!("{}", Tree::new(&store, &label));

    Ok(())
}

fn resolve(subfolder: Option<String>) -> Result<(PathBuf, String)> {
    let subfolder = match subfolder {
        Some(subfolder) => subfolder,
        None => return Ok((PASSWORD_STORE_DIR.clone(), "Password Store".to_owned())),
    };

    if is_sneaky(&subfolder) {
        return Err(PasspickError::SneakyPath(subfolder).into());
    }

    let root = PASSWORD_STORE_DIR.join(&subfolder);
    if !root.is_dir() {
        return Err(PasspickError::NotInStore(subfolder).into());
    }

    let label = root
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| "Subfolder did not have a valid name")?
        .to_owned();

    Ok((root, label))
}

/// A subfolder may descend into the store but never climb out of it. That
/// rules out `..` components and absolute paths, which would replace the
/// store root wholesale when joined onto it.
fn is_sneaky(subfolder: &str) -> bool {
    Path::new(subfolder).components().any(|c| match c {
        Component::Normal(_) | Component::CurDir => false,
        _ => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_bare_store_is_labeled_password_store() {
        let (root, label) = resolve(None).unwrap();

        assert_eq!(root, *PASSWORD_STORE_DIR);
        assert_eq!(label, "Password Store");
    }

    #[test]
    fn parent_components_are_sneaky() {
        assert!(is_sneaky(".."));
        assert!(is_sneaky("../"));
        assert!(is_sneaky("Internet/.."));
        assert!(is_sneaky("a/../b"));

        assert!(!is_sneaky("Internet"));
        assert!(!is_sneaky("Internet/shops"));
        // dots inside a name are fine
        assert!(!is_sneaky("amazon..com"));
    }

    #[test]
    fn absolute_subfolders_are_sneaky() {
        assert!(is_sneaky("/"));
        assert!(is_sneaky("/etc"));
        assert!(is_sneaky("/tmp/elsewhere"));
    }

    #[test]
    fn sneaky_subfolders_are_rejected_before_the_store_is_touched() {
        assert!(resolve(Some("../outside".to_owned())).is_err());
    }

    #[test]
    fn an_absolute_subfolder_cannot_replace_the_store_root() {
        // a directory that genuinely exists outside the store
        let outside = tempfile::tempdir().unwrap();

        let err = resolve(Some(outside.path().display().to_string())).unwrap_err();

        match err.downcast_ref::<PasspickError>() {
            Some(PasspickError::SneakyPath(_)) => {}
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

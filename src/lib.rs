pub mod cli;
pub mod clipboard;
pub mod consts;
pub mod error;
pub mod event;
pub mod pass;
pub mod search;
pub mod store;
pub mod subcmds;
pub mod tree;
pub mod ui;

pub use error::PasspickError;

use anyhow::Result;
use structopt::clap::AppSettings;
use structopt::StructOpt;

use crate::consts::VERSION;
use crate::subcmds::*;

#[derive(Debug, StructOpt)]
#[structopt(
    set_term_width(80),
    settings = &[AppSettings::ArgsNegateSubcommands,
                 AppSettings::DeriveDisplayOrder,
                 AppSettings::VersionlessSubcommands],
    version = VERSION.as_str())]
struct Passpick {
    /// Show matching secrets as a flat list instead of a tree
    #[structopt(long, short = "f")]
    flat: bool,
    /// Words to seed the search filter with
    query: Vec<String>,
    #[structopt(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Debug, StructOpt)]
enum Cmd {
    /// Print the password store (or a subfolder of it) as a tree
    Ls { subfolder: Option<String> },
    #[structopt(setting = AppSettings::Hidden)]
    Unclip {
        #[structopt(required = true)]
        timeout: u64,
        #[structopt(long, short = "f")]
        force: bool,
    },
}

pub fn opt() -> Result<()> {
    let matches = Passpick::from_args();
    #[cfg(debug_assertions)]
    eprintln!("{:#?}", matches);

    match matches.cmd {
        Some(Cmd::Ls { subfolder }) => ls::ls(subfolder),
        Some(Cmd::Unclip { timeout, force }) => unclip::unclip(timeout, force),
        None => pick::pick(matches.query, matches.flat),
    }
}

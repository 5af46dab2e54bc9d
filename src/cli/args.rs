use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contacts")]
#[command(about = "An interactive address book assistant", version, disable_version_flag = true)]
pub(crate) struct Cli {
    /// Address book file. Falls back to $CONTACTS_BOOK, then ./addressbook.db
    #[arg(short = 'b', long = "book", value_name = "PATH")]
    pub(crate) book: Option<PathBuf>,

    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub(crate) version: Option<bool>,
}

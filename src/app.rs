use anyhow::Result;
use std::path::PathBuf;

use crate::{db, domain::AddressBook};

pub(crate) struct AppContext {
    book_path: PathBuf,
    book: AddressBook,
}

impl AppContext {
    pub(crate) fn load(book_path: PathBuf) -> Result<Self> {
        let book = db::load_book(&book_path)?;
        Ok(Self { book_path, book })
    }

    pub(crate) fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    pub(crate) fn save(&self) -> Result<()> {
        db::save_book(&self.book_path, &self.book)
    }
}

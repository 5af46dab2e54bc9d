use anyhow::{Context, Result};
use rusqlite::Connection;
use std::{fs, path::Path};
use tracing::info;

use crate::domain::AddressBook;

mod contact_repo;
mod schema;

pub(crate) struct Db {
    conn: Connection,
}

impl Db {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open address book at {}", path.display()))?;
        schema::init(&conn)?;
        Ok(Self { conn })
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    pub(crate) fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}

/// Loads the snapshot at `path`. A missing file means a fresh, empty book;
/// any other failure is returned to the caller.
pub(crate) fn load_book(path: &Path) -> Result<AddressBook> {
    if !path.exists() {
        info!(path = %path.display(), "no address book yet, starting empty");
        return Ok(AddressBook::new());
    }
    let db = Db::open(path)?;
    let book = contact_repo::load_book(&db)?;
    info!(path = %path.display(), contacts = book.len(), "address book loaded");
    Ok(book)
}

/// Overwrites the snapshot at `path` with `book`.
pub(crate) fn save_book(path: &Path, book: &AddressBook) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut db = Db::open(path)?;
    contact_repo::save_book(&mut db, book)?;
    info!(path = %path.display(), contacts = book.len(), "address book saved");
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

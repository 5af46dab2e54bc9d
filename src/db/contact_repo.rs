use anyhow::Result;
use rusqlite::params;

use crate::{
    db::Db,
    domain::{AddressBook, Birthday, Record},
};

/// Replaces everything stored with the current contents of `book`.
pub(crate) fn save_book(db: &mut Db, book: &AddressBook) -> Result<()> {
    let tx = db.conn_mut().transaction()?;
    tx.execute("DELETE FROM phones", [])?;
    tx.execute("DELETE FROM contacts", [])?;
    {
        let mut insert_contact = tx.prepare(
            "INSERT INTO contacts (position, name, birthday)
             VALUES (?1, ?2, ?3)",
        )?;
        let mut insert_phone = tx.prepare(
            "INSERT INTO phones (contact_id, position, value)
             VALUES (?1, ?2, ?3)",
        )?;

        for (position, record) in book.records().enumerate() {
            insert_contact.execute(params![
                position as i64,
                record.name().as_str(),
                record.birthday().map(ToString::to_string)
            ])?;
            let contact_id = tx.last_insert_rowid();
            for (index, phone) in record.phones().iter().enumerate() {
                insert_phone.execute(params![contact_id, index as i64, phone.as_str()])?;
            }
        }
    }
    tx.commit()?;
    Ok(())
}

/// Rebuilds the book in stored order. Every value goes through the same
/// validation as user input, so a tampered file fails loudly.
pub(crate) fn load_book(db: &Db) -> Result<AddressBook> {
    let mut stmt = db.conn().prepare(
        "SELECT id, name, birthday
         FROM contacts
         ORDER BY position",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, Option<String>>(2)?,
        ))
    })?;

    let mut contacts = Vec::new();
    for row in rows {
        contacts.push(row?);
    }

    let mut phone_stmt = db.conn().prepare(
        "SELECT value
         FROM phones
         WHERE contact_id = ?1
         ORDER BY position",
    )?;

    let mut book = AddressBook::new();
    for (contact_id, name, birthday) in contacts {
        let mut record = Record::new(name);
        let phones = phone_stmt.query_map(params![contact_id], |row| row.get::<_, String>(0))?;
        for phone in phones {
            record.add_phone(&phone?)?;
        }
        if let Some(raw) = birthday {
            record.set_birthday(Birthday::parse(&raw)?);
        }
        book.add_record(record);
    }
    Ok(book)
}

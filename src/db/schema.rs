use anyhow::Result;
use rusqlite::Connection;

pub(super) fn init(conn: &Connection) -> Result<()> {
    create_contacts_table(conn)?;
    create_phones_table(conn)
}

fn create_contacts_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS contacts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            position INTEGER NOT NULL,
            name TEXT NOT NULL UNIQUE,
            birthday TEXT
        );
        CREATE INDEX IF NOT EXISTS contacts_position_idx
            ON contacts (position);",
    )?;
    Ok(())
}

fn create_phones_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS phones (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            contact_id INTEGER NOT NULL REFERENCES contacts (id) ON DELETE CASCADE,
            position INTEGER NOT NULL,
            value TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS phones_contact_position_idx
            ON phones (contact_id, position);",
    )?;
    Ok(())
}

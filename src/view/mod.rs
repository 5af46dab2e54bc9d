//! Output boundary of the assistant. The command layer only talks to
//! [`View`], so another surface can replace the console without touching it.

use anyhow::Result;

mod console;

pub(crate) use console::ConsoleView;

pub(crate) const EMPTY_BOOK_MESSAGE: &str = "The contact list is empty.";

pub(crate) const HELP_TITLE: &str = "Available commands:";

pub(crate) const HELP_LINES: &[&str] = &[
    "hello - Say hello",
    "add [name] [phone]... - Add a contact or more phones to it",
    "change [name] [new_phone] - Replace the contact's phones with one number",
    "show [name] - Show contact details",
    "all - Show all contacts",
    "add-birthday [name] [DD.MM.YYYY] - Add a birthday to the contact",
    "show-birthday [name] - Show the contact's birthday",
    "all-birthdays - Show all birthdays",
    "birthdays [days] - Birthdays in the next days (default 7), weekends moved to Monday",
    "next-birthday [weekday] - Nearest birthday moved to a weekday, 0 = Monday .. 6 = Sunday",
    "edit-phone [name] [old_phone] [new_phone] - Change one phone of the contact",
    "remove-phone [name] [phone] - Remove one phone from the contact",
    "delete [name] - Delete the contact",
    "close/exit - Save and exit the application",
];

/// A contact as shown in the listing: its name and phones in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ContactLine {
    pub(crate) name: String,
    pub(crate) phones: Vec<String>,
}

pub(crate) trait View {
    fn display_message(&mut self, message: &str) -> Result<()>;

    fn display_contacts(&mut self, contacts: &[ContactLine]) -> Result<()>;

    fn display_help(&mut self) -> Result<()>;

    fn display_error(&mut self, message: &str) -> Result<()> {
        self.display_message(message)
    }

    fn display_prompt(&mut self, _prompt: &str) -> Result<()> {
        Ok(())
    }
}

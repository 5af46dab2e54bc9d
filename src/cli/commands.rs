use anyhow::Result;
use chrono::{NaiveDate, Weekday};
use tracing::debug;

use crate::{
    domain::{AddressBook, ContactError, DEFAULT_UPCOMING_DAYS, Phone, Record},
    format,
    view::{ContactLine, View},
};

const INVALID_COMMAND_MESSAGE: &str = "Invalid command.";

const ADD_USAGE: &str = "add [name] [phone]...";
const CHANGE_USAGE: &str = "change [name] [new_phone]";
const SHOW_USAGE: &str = "show [name]";
const ADD_BIRTHDAY_USAGE: &str = "add-birthday [name] [DD.MM.YYYY]";
const SHOW_BIRTHDAY_USAGE: &str = "show-birthday [name]";
const BIRTHDAYS_USAGE: &str = "birthdays [days]";
const NEXT_BIRTHDAY_USAGE: &str = "next-birthday [weekday]";
const EDIT_PHONE_USAGE: &str = "edit-phone [name] [old_phone] [new_phone]";
const REMOVE_PHONE_USAGE: &str = "remove-phone [name] [phone]";
const DELETE_USAGE: &str = "delete [name]";

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Hello,
    Add,
    Change,
    Show,
    All,
    AddBirthday,
    ShowBirthday,
    AllBirthdays,
    Birthdays,
    NextBirthday,
    EditPhone,
    RemovePhone,
    Delete,
    Exit,
}

impl Command {
    fn from_keyword(keyword: &str) -> Option<Self> {
        let command = match keyword {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "show" => Self::Show,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "all-birthdays" => Self::AllBirthdays,
            "birthdays" => Self::Birthdays,
            "next-birthday" => Self::NextBirthday,
            "edit-phone" => Self::EditPhone,
            "remove-phone" => Self::RemovePhone,
            "delete" => Self::Delete,
            "close" | "exit" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }
}

/// Runs one command against `book`.
///
/// Command failures are shown through `view` and never end the session;
/// only errors from the view itself are returned.
pub(crate) fn dispatch(
    book: &mut AddressBook,
    view: &mut dyn View,
    today: NaiveDate,
    keyword: &str,
    args: &[String],
) -> Result<Flow> {
    let Some(command) = Command::from_keyword(keyword) else {
        debug!(keyword, "unknown command");
        view.display_message(INVALID_COMMAND_MESSAGE)?;
        view.display_help()?;
        return Ok(Flow::Continue);
    };
    debug!(?command, args = args.len(), "dispatching command");

    let reply = match command {
        Command::Exit => return Ok(Flow::Exit),
        Command::All => {
            view.display_contacts(&contact_lines(book))?;
            return Ok(Flow::Continue);
        }
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => add_contact(args, book),
        Command::Change => change_contact(args, book),
        Command::Show => show_contact(args, book),
        Command::AddBirthday => add_birthday(args, book),
        Command::ShowBirthday => show_birthday(args, book),
        Command::AllBirthdays => Ok(all_birthdays(book)),
        Command::Birthdays => upcoming_birthdays(args, book, today),
        Command::NextBirthday => next_birthday(args, book, today),
        Command::EditPhone => edit_phone(args, book),
        Command::RemovePhone => remove_phone(args, book),
        Command::Delete => delete_contact(args, book),
    };

    match reply {
        Ok(message) => view.display_message(&message)?,
        Err(err) => {
            debug!(?command, %err, "command failed");
            view.display_error(&err.to_string())?
        }
    }
    Ok(Flow::Continue)
}

fn contact_lines(book: &AddressBook) -> Vec<ContactLine> {
    book.records()
        .map(|record| ContactLine {
            name: record.name().to_string(),
            phones: record.phones().iter().map(ToString::to_string).collect(),
        })
        .collect()
}

fn record_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record, ContactError> {
    book.find_mut(name)
        .ok_or_else(|| ContactError::NotFound(name.to_string()))
}

// Every phone is validated before the book is touched.
fn add_contact(args: &[String], book: &mut AddressBook) -> Result<String, ContactError> {
    let [name, phones @ ..] = args else {
        return Err(ContactError::ArgumentCount(ADD_USAGE));
    };
    if phones.is_empty() {
        return Err(ContactError::ArgumentCount(ADD_USAGE));
    }
    let phones = phones
        .iter()
        .map(|raw| Phone::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(record) = book.find_mut(name) {
        for phone in phones {
            record.push_phone(phone);
        }
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name.as_str());
    for phone in phones {
        record.push_phone(phone);
    }
    book.add_record(record);
    Ok("Contact added.".to_string())
}

fn change_contact(args: &[String], book: &mut AddressBook) -> Result<String, ContactError> {
    let [name, phone] = args else {
        return Err(ContactError::ArgumentCount(CHANGE_USAGE));
    };
    let record = record_mut(book, name)?;
    record.replace_phones(Phone::parse(phone)?);
    Ok("Contact updated successfully.".to_string())
}

fn show_contact(args: &[String], book: &AddressBook) -> Result<String, ContactError> {
    let [name] = args else {
        return Err(ContactError::ArgumentCount(SHOW_USAGE));
    };
    book.find(name)
        .map(ToString::to_string)
        .ok_or_else(|| ContactError::NotFound(name.to_string()))
}

fn add_birthday(args: &[String], book: &mut AddressBook) -> Result<String, ContactError> {
    let [name, birthday] = args else {
        return Err(ContactError::ArgumentCount(ADD_BIRTHDAY_USAGE));
    };
    record_mut(book, name)?.add_birthday(birthday)?;
    Ok(format!("Birthday added for contact '{}'.", name))
}

fn show_birthday(args: &[String], book: &AddressBook) -> Result<String, ContactError> {
    let [name] = args else {
        return Err(ContactError::ArgumentCount(SHOW_BIRTHDAY_USAGE));
    };
    let record = book
        .find(name)
        .ok_or_else(|| ContactError::NotFound(name.to_string()))?;
    Ok(match record.birthday() {
        Some(birthday) => format!("Birthday of contact '{}': {}", name, birthday),
        None => format!("No birthday set for contact '{}'.", name),
    })
}

fn all_birthdays(book: &AddressBook) -> String {
    let lines: Vec<_> = book
        .records()
        .filter_map(|record| {
            record
                .birthday()
                .map(|birthday| format!("{}: {}", record.name(), birthday))
        })
        .collect();
    if lines.is_empty() {
        "No contacts with birthdays in the address book.".to_string()
    } else {
        lines.join("\n")
    }
}

fn upcoming_birthdays(
    args: &[String],
    book: &AddressBook,
    today: NaiveDate,
) -> Result<String, ContactError> {
    let days = match args {
        [] => DEFAULT_UPCOMING_DAYS,
        [raw] => raw
            .parse::<u64>()
            .map_err(|_| ContactError::InvalidDays(raw.to_string()))?,
        _ => return Err(ContactError::ArgumentCount(BIRTHDAYS_USAGE)),
    };

    let upcoming = book.upcoming_birthdays(today, days);
    if upcoming.is_empty() {
        return Ok(format!("No birthdays in the next {} days.", days));
    }
    Ok(upcoming
        .iter()
        .map(|entry| format!("{}: {}", entry.name, format::format_day(entry.congratulation_date)))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn next_birthday(
    args: &[String],
    book: &AddressBook,
    today: NaiveDate,
) -> Result<String, ContactError> {
    let [raw] = args else {
        return Err(ContactError::ArgumentCount(NEXT_BIRTHDAY_USAGE));
    };
    let weekday = parse_weekday(raw)?;
    Ok(match book.find_next_birthday(weekday, today) {
        Some(date) => format!(
            "Nearest birthday moved to {}: {}",
            format::weekday_name(weekday),
            format::format_day(date)
        ),
        None => "No contacts with birthdays in the address book.".to_string(),
    })
}

fn parse_weekday(raw: &str) -> Result<Weekday, ContactError> {
    raw.parse::<usize>()
        .ok()
        .and_then(|index| WEEKDAYS.get(index).copied())
        .ok_or_else(|| ContactError::InvalidWeekday(raw.to_string()))
}

fn edit_phone(args: &[String], book: &mut AddressBook) -> Result<String, ContactError> {
    let [name, old, new] = args else {
        return Err(ContactError::ArgumentCount(EDIT_PHONE_USAGE));
    };
    let record = record_mut(book, name)?;
    if record.find_phone(old).is_none() {
        return Err(ContactError::PhoneNotFound {
            name: name.to_string(),
            phone: old.to_string(),
        });
    }
    record.edit_phone(old, new)?;
    Ok("Phone updated.".to_string())
}

fn remove_phone(args: &[String], book: &mut AddressBook) -> Result<String, ContactError> {
    let [name, phone] = args else {
        return Err(ContactError::ArgumentCount(REMOVE_PHONE_USAGE));
    };
    let record = record_mut(book, name)?;
    if record.find_phone(phone).is_none() {
        return Err(ContactError::PhoneNotFound {
            name: name.to_string(),
            phone: phone.to_string(),
        });
    }
    record.remove_phone(phone);
    Ok("Phone removed.".to_string())
}

fn delete_contact(args: &[String], book: &mut AddressBook) -> Result<String, ContactError> {
    let [name] = args else {
        return Err(ContactError::ArgumentCount(DELETE_USAGE));
    };
    book.delete(name)
        .ok_or_else(|| ContactError::NotFound(name.to_string()))?;
    Ok(format!("Contact '{}' deleted.", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::HELP_LINES;

    #[derive(Default)]
    struct RecordingView {
        messages: Vec<String>,
        errors: Vec<String>,
        listings: Vec<Vec<ContactLine>>,
        help_shown: usize,
    }

    impl View for RecordingView {
        fn display_message(&mut self, message: &str) -> Result<()> {
            self.messages.push(message.to_string());
            Ok(())
        }

        fn display_contacts(&mut self, contacts: &[ContactLine]) -> Result<()> {
            self.listings.push(contacts.to_vec());
            Ok(())
        }

        fn display_help(&mut self) -> Result<()> {
            self.help_shown += 1;
            Ok(())
        }

        fn display_error(&mut self, message: &str) -> Result<()> {
            self.errors.push(message.to_string());
            Ok(())
        }
    }

    struct Session {
        book: AddressBook,
        view: RecordingView,
    }

    impl Session {
        fn new() -> Self {
            Self {
                book: AddressBook::new(),
                view: RecordingView::default(),
            }
        }

        fn run(&mut self, line: &str) -> Flow {
            // 2026-10-19 is a Monday.
            let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
            let (keyword, args) = crate::cli::parser::parse_input(line).unwrap();
            dispatch(&mut self.book, &mut self.view, today, &keyword, &args).unwrap()
        }

        fn last_message(&self) -> &str {
            self.view.messages.last().map(String::as_str).unwrap_or_default()
        }

        fn last_error(&self) -> &str {
            self.view.errors.last().map(String::as_str).unwrap_or_default()
        }

        fn phones(&self, name: &str) -> Vec<String> {
            self.book
                .find(name)
                .unwrap()
                .phones()
                .iter()
                .map(ToString::to_string)
                .collect()
        }
    }

    #[test]
    fn add_creates_record_with_phones_in_order() {
        let mut session = Session::new();
        assert_eq!(session.run("add Alice 0123456789 1111111111"), Flow::Continue);

        assert_eq!(session.last_message(), "Contact added.");
        assert_eq!(session.phones("Alice"), vec!["0123456789", "1111111111"]);
    }

    #[test]
    fn add_on_existing_name_appends_phones() {
        let mut session = Session::new();
        session.run("add Alice 0123456789");
        session.run("add-birthday Alice 01.01.1990");
        session.run("add Alice 1111111111");

        assert_eq!(session.last_message(), "Contact updated.");
        assert_eq!(session.phones("Alice"), vec!["0123456789", "1111111111"]);
        assert!(session.book.find("Alice").unwrap().birthday().is_some());
    }

    #[test]
    fn add_with_one_bad_phone_changes_nothing() {
        let mut session = Session::new();
        session.run("add Alice 0123456789 12345 1111111111");

        assert_eq!(
            session.last_error(),
            ContactError::InvalidPhone("12345".to_string()).to_string()
        );
        assert!(session.book.find("Alice").is_none());

        session.run("add Bob 0123456789");
        session.run("add Bob 1111111111 nope");
        assert_eq!(session.phones("Bob"), vec!["0123456789"]);
    }

    #[test]
    fn add_needs_name_and_phone() {
        let mut session = Session::new();
        session.run("add Alice");
        assert_eq!(
            session.last_error(),
            "Wrong number of arguments. Usage: add [name] [phone]..."
        );
        assert_eq!(session.book.len(), 0);
    }

    #[test]
    fn change_leaves_exactly_one_phone() {
        let mut session = Session::new();
        session.run("add Alice 0123456789 1111111111 2222222222");
        session.run("change Alice 3333333333");

        assert_eq!(session.last_message(), "Contact updated successfully.");
        assert_eq!(session.phones("Alice"), vec!["3333333333"]);
    }

    #[test]
    fn change_reports_unknown_name_and_bad_phone() {
        let mut session = Session::new();
        session.run("change Zed 0123456789");
        assert_eq!(session.last_error(), "Contact 'Zed' not found.");

        session.run("add Alice 0123456789");
        session.run("change Alice 12");
        assert_eq!(
            session.last_error(),
            ContactError::InvalidPhone("12".to_string()).to_string()
        );
        assert_eq!(session.phones("Alice"), vec!["0123456789"]);

        session.run("change Alice");
        assert!(session.last_error().contains("change [name] [new_phone]"));
    }

    #[test]
    fn show_renders_record_or_not_found() {
        let mut session = Session::new();
        session.run("show Zed");
        assert_eq!(session.last_error(), "Contact 'Zed' not found.");

        session.run("add Alice 0123456789 1111111111");
        session.run("show Alice");
        assert_eq!(
            session.last_message(),
            "name: Alice, phone: 0123456789; 1111111111"
        );
    }

    #[test]
    fn all_passes_every_contact_to_the_view() {
        let mut session = Session::new();
        session.run("all");
        assert_eq!(session.view.listings, vec![Vec::<ContactLine>::new()]);

        session.run("add Alice 0123456789");
        session.run("add Bob 1111111111 2222222222");
        session.run("all");
        assert_eq!(
            session.view.listings[1],
            vec![
                ContactLine {
                    name: "Alice".to_string(),
                    phones: vec!["0123456789".to_string()],
                },
                ContactLine {
                    name: "Bob".to_string(),
                    phones: vec!["1111111111".to_string(), "2222222222".to_string()],
                },
            ]
        );
    }

    #[test]
    fn birthday_commands() {
        let mut session = Session::new();
        session.run("all-birthdays");
        assert_eq!(
            session.last_message(),
            "No contacts with birthdays in the address book."
        );

        session.run("add-birthday Zed 01.01.1990");
        assert_eq!(session.last_error(), "Contact 'Zed' not found.");

        session.run("add Alice 0123456789");
        session.run("show-birthday Alice");
        assert_eq!(session.last_message(), "No birthday set for contact 'Alice'.");

        session.run("add-birthday Alice 1990-01-01");
        assert_eq!(
            session.last_error(),
            "Invalid date '1990-01-01'. Use DD.MM.YYYY."
        );

        session.run("add-birthday Alice 05.03.1990");
        assert_eq!(session.last_message(), "Birthday added for contact 'Alice'.");
        session.run("show-birthday Alice");
        assert_eq!(
            session.last_message(),
            "Birthday of contact 'Alice': 05.03.1990"
        );

        session.run("add Bob 1111111111");
        session.run("add-birthday Bob 24.10.1991");
        session.run("all-birthdays");
        assert_eq!(
            session.last_message(),
            "Alice: 05.03.1990\nBob: 24.10.1991"
        );
    }

    #[test]
    fn upcoming_birthdays_command() {
        let mut session = Session::new();
        session.run("add Alice 0123456789");
        session.run("add-birthday Alice 24.10.1990");
        session.run("add Bob 1111111111");
        session.run("add-birthday Bob 22.10.1990");

        session.run("birthdays");
        assert_eq!(session.last_message(), "Alice: 2026.10.26\nBob: 2026.10.22");

        session.run("birthdays 3");
        assert_eq!(session.last_message(), "Bob: 2026.10.22");

        session.run("birthdays 1");
        assert_eq!(session.last_message(), "No birthdays in the next 1 days.");

        session.run("birthdays soon");
        assert!(session.last_error().starts_with("Invalid number of days 'soon'"));
    }

    #[test]
    fn next_birthday_command() {
        let mut session = Session::new();
        session.run("next-birthday 0");
        assert_eq!(
            session.last_message(),
            "No contacts with birthdays in the address book."
        );

        session.run("add Alice 0123456789");
        session.run("add-birthday Alice 20.10.1990");
        session.run("next-birthday 5");
        assert_eq!(
            session.last_message(),
            "Nearest birthday moved to Saturday: 2026.10.24"
        );

        session.run("next-birthday 7");
        assert!(session.last_error().starts_with("Invalid weekday '7'"));
    }

    #[test]
    fn phone_editing_commands() {
        let mut session = Session::new();
        session.run("add Alice 0123456789 1111111111");

        session.run("edit-phone Alice 0123456789 2222222222");
        assert_eq!(session.last_message(), "Phone updated.");
        assert_eq!(session.phones("Alice"), vec!["2222222222", "1111111111"]);

        session.run("edit-phone Alice 9999999999 2222222222");
        assert_eq!(
            session.last_error(),
            "Phone '9999999999' not found for contact 'Alice'."
        );

        session.run("remove-phone Alice 1111111111");
        assert_eq!(session.last_message(), "Phone removed.");
        assert_eq!(session.phones("Alice"), vec!["2222222222"]);

        session.run("remove-phone Alice 1111111111");
        assert_eq!(
            session.last_error(),
            "Phone '1111111111' not found for contact 'Alice'."
        );
    }

    #[test]
    fn delete_command() {
        let mut session = Session::new();
        session.run("add Alice 0123456789");
        session.run("delete Alice");
        assert_eq!(session.last_message(), "Contact 'Alice' deleted.");
        assert_eq!(session.book.len(), 0);

        session.run("delete Alice");
        assert_eq!(session.last_error(), "Contact 'Alice' not found.");
    }

    #[test]
    fn unknown_command_prints_message_and_help() {
        let mut session = Session::new();
        assert_eq!(session.run("fly away"), Flow::Continue);
        assert_eq!(session.last_message(), INVALID_COMMAND_MESSAGE);
        assert_eq!(session.view.help_shown, 1);
        assert!(!HELP_LINES.is_empty());
    }

    #[test]
    fn keywords_are_case_insensitive_and_exit_ends_the_loop() {
        let mut session = Session::new();
        assert_eq!(session.run("HELLO"), Flow::Continue);
        assert_eq!(session.last_message(), "How can I help you?");
        assert_eq!(session.run("Exit"), Flow::Exit);
        assert_eq!(session.run("close"), Flow::Exit);
    }
}

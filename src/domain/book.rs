use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::domain::{fields::Name, record::Record};

pub(crate) const DEFAULT_UPCOMING_DAYS: u64 = 7;

/// A contact whose birthday falls inside the upcoming window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct UpcomingBirthday {
    pub(crate) name: Name,
    pub(crate) congratulation_date: NaiveDate,
}

/// All contacts, keyed by name and kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Stores `record` under its own name. A record already stored under
    /// that name is replaced and the slot keeps its position.
    pub(crate) fn add_record(&mut self, record: Record) {
        match self.position_of(record.name().as_str()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    pub(crate) fn find(&self, name: &str) -> Option<&Record> {
        self.position_of(name).map(|index| &self.records[index])
    }

    pub(crate) fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position_of(name).map(|index| &mut self.records[index])
    }

    pub(crate) fn delete(&mut self, name: &str) -> Option<Record> {
        self.position_of(name).map(|index| self.records.remove(index))
    }

    /// Earliest upcoming birthday after moving each one forward onto `weekday`.
    pub(crate) fn find_next_birthday(
        &self,
        weekday: Weekday,
        today: NaiveDate,
    ) -> Option<NaiveDate> {
        self.records
            .iter()
            .filter_map(|record| next_occurrence(record, today))
            .filter_map(|date| advance_to_weekday(date, weekday))
            .min()
    }

    /// Birthdays within `[today, today + days]`. Weekend dates move to the
    /// following Monday, which may land past the window.
    pub(crate) fn upcoming_birthdays(&self, today: NaiveDate, days: u64) -> Vec<UpcomingBirthday> {
        let last_day = today.checked_add_days(Days::new(days));
        self.records
            .iter()
            .filter_map(|record| {
                let date = next_occurrence(record, today)?;
                if last_day.is_some_and(|last| date > last) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().clone(),
                    congratulation_date: skip_weekend(date)?,
                })
            })
            .collect()
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }
}

// This year's occurrence, or next year's once it has passed.
fn next_occurrence(record: &Record, today: NaiveDate) -> Option<NaiveDate> {
    let birthday = record.birthday()?;
    let this_year = birthday.occurrence_in(today.year())?;
    if this_year < today {
        birthday.occurrence_in(today.year() + 1)
    } else {
        Some(this_year)
    }
}

fn advance_to_weekday(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let offset = (7 + weekday.num_days_from_monday() - date.weekday().num_days_from_monday()) % 7;
    date.checked_add_days(Days::new(u64::from(offset)))
}

fn skip_weekend(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.checked_add_days(Days::new(2)),
        Weekday::Sun => date.checked_add_days(Days::new(1)),
        _ => Some(date),
    }
}

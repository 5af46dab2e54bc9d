use std::fmt;

use crate::domain::{
    error::ContactError,
    fields::{Birthday, Name, Phone},
};

/// One contact: a fixed name, its phones in entry order and an optional birthday.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub(crate) fn new(name: impl Into<Name>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub(crate) fn name(&self) -> &Name {
        &self.name
    }

    pub(crate) fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub(crate) fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub(crate) fn add_phone(&mut self, raw: &str) -> Result<(), ContactError> {
        let phone = Phone::parse(raw)?;
        self.push_phone(phone);
        Ok(())
    }

    pub(crate) fn push_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Drops the first phone equal to `raw`. Unknown phones are ignored.
    pub(crate) fn remove_phone(&mut self, raw: &str) {
        if let Some(index) = self.position_of(raw) {
            self.phones.remove(index);
        }
    }

    /// Rewrites the first phone equal to `old`. Unknown phones are ignored,
    /// and `new` is only validated when there is something to rewrite.
    pub(crate) fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ContactError> {
        if let Some(index) = self.position_of(old) {
            self.phones[index] = Phone::parse(new)?;
        }
        Ok(())
    }

    pub(crate) fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    pub(crate) fn replace_phones(&mut self, phone: Phone) {
        self.phones = vec![phone];
    }

    pub(crate) fn add_birthday(&mut self, raw: &str) -> Result<(), ContactError> {
        self.set_birthday(Birthday::parse(raw)?);
        Ok(())
    }

    pub(crate) fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == raw)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "name: {}, phone: {}", self.name, phones)
    }
}

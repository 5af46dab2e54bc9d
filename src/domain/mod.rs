pub(crate) mod book;
pub(crate) mod error;
pub(crate) mod fields;
pub(crate) mod record;

pub(crate) use book::{AddressBook, DEFAULT_UPCOMING_DAYS};
pub(crate) use error::ContactError;
pub(crate) use fields::{Birthday, Phone};
pub(crate) use record::Record;

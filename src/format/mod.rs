mod text;
mod time;

pub(crate) use text::{format_contact_line, name_column_width};
pub(crate) use time::{format_day, weekday_name};

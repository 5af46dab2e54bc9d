use chrono::{NaiveDate, Weekday};

const DAY_FORMAT: &str = "%Y.%m.%d";

pub(crate) fn format_day(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

pub(crate) fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_is_year_first_with_dots() {
        let date = NaiveDate::from_ymd_opt(2027, 1, 4).unwrap();
        assert_eq!(format_day(date), "2027.01.04");
    }
}

//! Property tests for field validation.

use addrbook::model::{Birthday, Phone, Record};
use chrono::NaiveDate;
use proptest::prelude::*;

proptest! {
    #[test]
    fn ten_digit_strings_are_valid_phones(p in "[0-9]{10}") {
        let phone = Phone::new(&p).unwrap();
        prop_assert_eq!(phone.as_str(), p.as_str());
        prop_assert_eq!(phone.to_string(), p);
    }

    #[test]
    fn wrong_length_digit_strings_are_rejected(p in "[0-9]{0,9}|[0-9]{11,20}") {
        prop_assert!(Phone::new(&p).is_err());
    }

    #[test]
    fn any_non_digit_is_rejected(
        head in "[0-9]{0,9}",
        bad in "[^0-9]",
        tail in "[0-9]{0,9}",
    ) {
        let candidate = format!("{}{}{}", head, bad, tail);
        prop_assert!(Phone::new(&candidate).is_err());
    }

    #[test]
    fn canonical_dates_are_valid_birthdays(days in 0i64..100_000) {
        let date = NaiveDate::from_ymd_opt(1800, 1, 1).unwrap() + chrono::Duration::days(days);
        let text = date.format("%Y-%m-%d").to_string();
        let birthday = Birthday::new(&text).unwrap();
        prop_assert_eq!(birthday.to_string(), text);
        prop_assert_eq!(birthday.date(), date);
    }

    #[test]
    fn days_to_birthday_is_within_a_year(
        birth in 0i64..60_000,
        today in 0i64..60_000,
    ) {
        let base = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let birth = base + chrono::Duration::days(birth);
        let today = base + chrono::Duration::days(today);

        let record = Record::new("Ann", Some(&birth.format("%Y-%m-%d").to_string())).unwrap();
        let days = record.days_to_birthday_from(today).unwrap();
        prop_assert!((0..=365).contains(&days));
    }

    #[test]
    fn edit_phone_moves_the_number(old in "[0-9]{10}", new in "[0-9]{10}") {
        let mut record = Record::new("Ann", None).unwrap();
        record.add_phone(&old).unwrap();
        record.edit_phone(&old, &new).unwrap();

        prop_assert!(record.find_phone(&new).is_some());
        if old != new {
            prop_assert!(record.find_phone(&old).is_none());
        }
    }
}

#[test]
fn other_date_formats_are_rejected() {
    for raw in ["31.12.2020", "2020/12/31", "not-a-date", "12-31-2020", "2020-13-01"] {
        assert!(Birthday::new(raw).is_err(), "{} should be rejected", raw);
    }
}

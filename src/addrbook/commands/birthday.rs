use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::AddressBook;
use chrono::NaiveDate;

use super::helpers::record_by_name_mut;

/// Optionally sets the birthday, then reports how far away it is from
/// `today`.
pub fn run(
    book: &mut AddressBook,
    name: &str,
    date: Option<&str>,
    today: NaiveDate,
) -> Result<CmdResult> {
    let record = record_by_name_mut(book, name)?;
    let mut result = CmdResult::default();

    if let Some(date) = date {
        record.set_birthday(date)?;
        result.add_message(CmdMessage::success(format!(
            "Birthday for {} set to {}",
            record.name(),
            date
        )));
        result.affected_records.push(record.clone());
    }

    let countdown = match record.days_to_birthday_from(today) {
        Some(0) => CmdMessage::success(format!("Today is {}'s birthday!", record.name())),
        Some(1) => CmdMessage::info(format!("1 day until {}'s birthday", record.name())),
        Some(days) => CmdMessage::info(format!("{} days until {}'s birthday", days, record.name())),
        None => CmdMessage::info(format!("No birthday saved for {}", record.name())),
    };
    result.add_message(countdown);

    Ok(result)
}

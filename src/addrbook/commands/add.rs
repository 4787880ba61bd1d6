use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddrBookError, Result};
use crate::model::Record;
use crate::store::AddressBook;

/// Creates a contact with one phone. An existing name is left untouched and
/// reported as a warning: use `change` to add numbers to it.
pub fn run(
    book: &mut AddressBook,
    name: &str,
    phone: &str,
    birthday: Option<&str>,
) -> Result<CmdResult> {
    let mut record = Record::new(name, birthday)?;
    let key = record.name().to_string();

    if book.contains(&key) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(
            AddrBookError::AlreadyExists(key).to_string(),
        )));
    }

    record.add_phone(phone)?;
    book.add_record(record.clone());

    Ok(CmdResult::default()
        .with_affected_records(vec![record])
        .with_message(CmdMessage::success(format!(
            "Added {} with phone number {}",
            key, phone
        ))))
}

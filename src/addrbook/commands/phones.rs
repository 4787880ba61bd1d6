use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::AddressBook;

use super::helpers::record_by_name_mut;

/// Replaces `old` with `new` on the named contact.
pub fn edit(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let record = record_by_name_mut(book, name)?;
    record.edit_phone(old, new)?;

    let message = format!(
        "Phone number for {} changed from {} to {}",
        record.name(),
        old,
        new
    );
    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(message)))
}

/// Drops `phone` from the named contact. A number it doesn't have is not an
/// error.
pub fn remove(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = record_by_name_mut(book, name)?;

    if record.find_phone(phone).is_none() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Contact {} has no phone number {}",
            record.name(),
            phone
        ))));
    }

    record.remove_phone(phone);
    let message = format!("Removed phone number {} from {}", phone, record.name());
    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(message)))
}

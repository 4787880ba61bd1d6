use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddrBookError, Result};
use crate::store::AddressBook;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let name = name.trim();
    let removed = book
        .delete(name)
        .ok_or_else(|| AddrBookError::ContactNotFound(name.to_string()))?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Deleted contact {}", name)))
        .with_affected_records(vec![removed]))
}

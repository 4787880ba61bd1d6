use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::AddressBook;

pub fn run(book: &AddressBook, query: &str) -> Result<CmdResult> {
    let found = book.search(query);
    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info("No contacts found."));
    }
    Ok(result.with_listed_records(found))
}

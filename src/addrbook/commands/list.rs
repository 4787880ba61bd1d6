use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::AddressBook;

/// Every record, split into pages of `page_size`.
pub fn run(book: &AddressBook, page_size: usize) -> Result<CmdResult> {
    let pages: Vec<_> = book.iterator(page_size).collect();
    let mut result = CmdResult::default();
    if pages.is_empty() {
        result.add_message(CmdMessage::info("No contacts found."));
    }
    Ok(result.with_pages(pages))
}

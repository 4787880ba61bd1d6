use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{AddressBook, LoadReport};
use std::path::Path;

pub fn run(book: &mut AddressBook, path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let LoadReport::Recovered { reason, backup } = book.load(path)? {
        result.add_message(CmdMessage::warning(format!(
            "Could not read {} ({}). It was moved to {} and the address book starts empty.",
            path.display(),
            reason,
            backup.display()
        )));
    }
    Ok(result)
}

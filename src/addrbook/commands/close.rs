use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::AddressBook;
use std::path::Path;

/// Saves the book and ends the session.
pub fn run(book: &AddressBook, path: &Path) -> Result<CmdResult> {
    book.save(path)?;
    let mut result = CmdResult::default().with_message(CmdMessage::info("Good bye!"));
    result.closed = true;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::book;
    use tempfile::TempDir;

    #[test]
    fn saves_and_closes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.json");
        let book = book(&[("Ann", &["1111111111"])]);

        let result = run(&book, &path).unwrap();
        assert!(result.closed);
        assert_eq!(result.text(), "Good bye!");

        let mut reloaded = AddressBook::new();
        reloaded.load(&path).unwrap();
        assert_eq!(reloaded, book);
    }
}

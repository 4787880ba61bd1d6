use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::AddressBook;

use super::helpers::record_by_name;

pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = record_by_name(book, name)?;
    Ok(CmdResult::default().with_message(CmdMessage::info(format!(
        "Phone number for {} is {}",
        record.name(),
        record.phone_list()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::book;

    #[test]
    fn renders_all_phones() {
        let book = book(&[("Ann", &["1111111111", "2222222222"])]);
        let result = run(&book, "Ann").unwrap();
        assert_eq!(
            result.text(),
            "Phone number for Ann is 1111111111; 2222222222"
        );
    }

    #[test]
    fn unknown_contact() {
        let book = AddressBook::new();
        assert_eq!(
            run(&book, "Ann").unwrap_err().to_string(),
            "Contact Ann not found"
        );
    }
}

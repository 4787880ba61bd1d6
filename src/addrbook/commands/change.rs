use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Phone;
use crate::store::AddressBook;

use super::helpers::record_by_name_mut;

/// Adds another phone to an existing contact. Existing phones are kept.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = record_by_name_mut(book, name)?;
    let phone = Phone::new(phone)?;
    if record.find_phone(phone.as_str()).is_some() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Contact {} already has phone number {}",
            record.name(),
            phone
        ))));
    }
    record.add_phone(phone.as_str())?;

    let message = format!("Changed phone number for {} to {}", record.name(), phone);
    Ok(CmdResult::default()
        .with_affected_records(vec![record.clone()])
        .with_message(CmdMessage::success(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::book;
    use crate::error::AddrBookError;

    #[test]
    fn appends_phone() {
        let mut book = book(&[("Ann", &["1111111111"])]);
        let result = run(&mut book, "Ann", "2222222222").unwrap();

        assert_eq!(result.text(), "Changed phone number for Ann to 2222222222");
        assert_eq!(
            book.find("Ann").unwrap().phone_list(),
            "1111111111; 2222222222"
        );
    }

    #[test]
    fn unknown_contact() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "Bob", "2222222222").unwrap_err();
        assert!(matches!(err, AddrBookError::ContactNotFound(ref n) if n == "Bob"));
    }

    #[test]
    fn invalid_phone_leaves_record_alone() {
        let mut book = book(&[("Ann", &["1111111111"])]);
        assert!(run(&mut book, "Ann", "22-22").is_err());
        assert_eq!(book.find("Ann").unwrap().phone_list(), "1111111111");
    }

    #[test]
    fn known_number_is_not_a_change() {
        let mut book = book(&[("Ann", &["1111111111"])]);
        let result = run(&mut book, "Ann", "1111111111").unwrap();

        assert!(!result.is_mutation());
        assert_eq!(result.text(), "Contact Ann already has phone number 1111111111");
        assert_eq!(book.find("Ann").unwrap().phone_list(), "1111111111");
    }
}

use crate::error::{AddrBookError, Result};
use crate::model::Record;
use crate::store::AddressBook;

pub fn record_by_name<'a>(book: &'a AddressBook, name: &str) -> Result<&'a Record> {
    book.find(name.trim())
        .ok_or_else(|| AddrBookError::ContactNotFound(name.trim().to_string()))
}

pub fn record_by_name_mut<'a>(book: &'a mut AddressBook, name: &str) -> Result<&'a mut Record> {
    book.find_mut(name.trim())
        .ok_or_else(|| AddrBookError::ContactNotFound(name.trim().to_string()))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Book with `(name, phones)` entries, for command tests.
    pub fn book(entries: &[(&str, &[&str])]) -> AddressBook {
        let mut book = AddressBook::new();
        for (name, phones) in entries {
            let mut record = Record::new(name, None).unwrap();
            for phone in *phones {
                record.add_phone(phone).unwrap();
            }
            book.add_record(record);
        }
        book
    }
}

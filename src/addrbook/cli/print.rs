use addrbook::commands::{CmdMessage, CmdResult, MessageLevel};
use addrbook::model::Record;
use colored::Colorize;

pub(crate) fn print_result(result: &CmdResult) {
    print_records(&result.listed_records);
    print_pages(&result.pages);
    print_messages(&result.messages);
}

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_records(records: &[Record]) {
    for record in records {
        println!("{}", record);
    }
}

fn print_pages(pages: &[Vec<Record>]) {
    let total = pages.len();
    for (i, page) in pages.iter().enumerate() {
        if total > 1 {
            println!("{}", format!("-- page {}/{} --", i + 1, total).dimmed());
        }
        print_records(page);
    }
}

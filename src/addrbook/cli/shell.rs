//! The interactive shell: read a line, run it, print the result.
//!
//! Commands are matched on fixed, case-insensitive prefixes. Names given to
//! `add`, `change`, `edit` and `remove` are single words; `phone`, `search`
//! and `delete` take the rest of the line.

use super::print::print_result;
use addrbook::api::AddrBookApi;
use addrbook::commands::{CmdMessage, CmdResult};
use addrbook::error::Result;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "Enter command: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    ShowAll,
    Search { query: String },
    Edit { name: String, old: String, new: String },
    Remove { name: String, phone: String },
    Delete { name: String },
    Birthday { name: String, date: Option<String> },
    Close,
    Empty,
    /// Known verb, wrong arguments. Holds the usage line.
    Invalid(String),
    Unknown,
}

pub fn parse_command(line: &str) -> ShellCommand {
    let line = line.trim();
    if line.is_empty() {
        return ShellCommand::Empty;
    }

    let lower = line.to_lowercase();
    match lower.as_str() {
        "hello" => return ShellCommand::Hello,
        "show all" => return ShellCommand::ShowAll,
        "good bye" | "close" | "exit" => return ShellCommand::Close,
        _ => {}
    }

    if let Some(rest) = strip_prefix_ci(line, "add ") {
        return match words(rest).as_slice() {
            [name, phone] => ShellCommand::Add {
                name: name.to_string(),
                phone: phone.to_string(),
            },
            _ => ShellCommand::Invalid("Usage: add <name> <phone>".to_string()),
        };
    }
    if let Some(rest) = strip_prefix_ci(line, "change ") {
        return match words(rest).as_slice() {
            [name, phone] => ShellCommand::Change {
                name: name.to_string(),
                phone: phone.to_string(),
            },
            _ => ShellCommand::Invalid("Usage: change <name> <phone>".to_string()),
        };
    }
    if let Some(rest) = strip_prefix_ci(line, "edit ") {
        return match words(rest).as_slice() {
            [name, old, new] => ShellCommand::Edit {
                name: name.to_string(),
                old: old.to_string(),
                new: new.to_string(),
            },
            _ => ShellCommand::Invalid("Usage: edit <name> <old phone> <new phone>".to_string()),
        };
    }
    if let Some(rest) = strip_prefix_ci(line, "remove ") {
        return match words(rest).as_slice() {
            [name, phone] => ShellCommand::Remove {
                name: name.to_string(),
                phone: phone.to_string(),
            },
            _ => ShellCommand::Invalid("Usage: remove <name> <phone>".to_string()),
        };
    }
    if let Some(rest) = strip_prefix_ci(line, "birthday ") {
        return match words(rest).as_slice() {
            [name] => ShellCommand::Birthday {
                name: name.to_string(),
                date: None,
            },
            [name, date] => ShellCommand::Birthday {
                name: name.to_string(),
                date: Some(date.to_string()),
            },
            _ => ShellCommand::Invalid("Usage: birthday <name> [YYYY-MM-DD]".to_string()),
        };
    }
    if let Some(rest) =
        strip_prefix_ci(line, "phone ").or_else(|| strip_prefix_ci(line, "find "))
    {
        return ShellCommand::Phone {
            name: rest.trim().to_string(),
        };
    }
    if let Some(rest) = strip_prefix_ci(line, "search ") {
        return ShellCommand::Search {
            query: rest.trim().to_string(),
        };
    }
    if let Some(rest) = strip_prefix_ci(line, "delete ") {
        return ShellCommand::Delete {
            name: rest.trim().to_string(),
        };
    }

    ShellCommand::Unknown
}

fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&line[prefix.len()..])
    } else {
        None
    }
}

fn words(rest: &str) -> Vec<&str> {
    rest.split_whitespace().collect()
}

pub fn dispatch(api: &mut AddrBookApi, command: ShellCommand) -> Result<CmdResult> {
    match command {
        ShellCommand::Hello => Ok(api.hello()),
        ShellCommand::Add { name, phone } => api.add_contact(&name, &phone, None),
        ShellCommand::Change { name, phone } => api.change_phone(&name, &phone),
        ShellCommand::Phone { name } => api.find_phone(&name),
        ShellCommand::ShowAll => api.show_all(),
        ShellCommand::Search { query } => api.search(&query),
        ShellCommand::Edit { name, old, new } => api.edit_phone(&name, &old, &new),
        ShellCommand::Remove { name, phone } => api.remove_phone(&name, &phone),
        ShellCommand::Delete { name } => api.delete_contact(&name),
        ShellCommand::Birthday { name, date } => api.birthday(&name, date.as_deref()),
        ShellCommand::Close => api.close(),
        ShellCommand::Empty => Ok(CmdResult::default()),
        ShellCommand::Invalid(usage) => {
            Ok(CmdResult::default().with_message(CmdMessage::error(usage)))
        }
        ShellCommand::Unknown => {
            Ok(CmdResult::default().with_message(CmdMessage::warning("Unknown command")))
        }
    }
}

/// Runs until `close` or end of input. End of input closes too, so the book
/// is always saved on the way out.
pub fn run(api: &mut AddrBookApi) -> Result<()> {
    let stdin = io::stdin();
    run_with(api, stdin.lock())
}

fn run_with<R: BufRead>(api: &mut AddrBookApi, mut input: R) -> Result<()> {
    let mut line = String::new();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            print_result(&api.close()?);
            return Ok(());
        }

        let result = dispatch(api, parse_command(&line))?;
        print_result(&result);
        if result.closed {
            return Ok(());
        }
    }
}

//! Terminal side of the binary: colored printing and the interactive shell.

pub mod print;
pub mod shell;

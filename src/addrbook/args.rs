use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "addrbook", version = get_version())]
#[command(about = "Personal contact book for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Address book file to use instead of the configured one
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact with one phone number
    Add {
        name: String,
        phone: String,

        /// Birthday as YYYY-MM-DD
        #[arg(short, long)]
        birthday: Option<String>,
    },

    /// Add another phone number to an existing contact
    Change { name: String, phone: String },

    /// Show the phone numbers of a contact
    #[command(alias = "find")]
    Phone { name: String },

    /// Show all contacts, page by page
    #[command(aliases = ["ls", "all"])]
    Show,

    /// Search contacts by name or phone number
    Search { query: String },

    /// Replace one phone number of a contact
    Edit {
        name: String,
        old: String,
        new: String,
    },

    /// Remove a phone number from a contact
    RemovePhone { name: String, phone: String },

    /// Delete a contact
    #[command(alias = "rm")]
    Delete { name: String },

    /// Show days until a contact's birthday, optionally setting it first
    Birthday {
        name: String,

        /// Birthday as YYYY-MM-DD
        date: Option<String>,
    },

    /// Start the interactive shell (the default)
    Shell,
}

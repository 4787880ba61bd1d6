use addrbook::api::AddrBookApi;
use addrbook::config::AppConfig;
use addrbook::error::{AddrBookError, Result};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;
use args::{Cli, Commands};
use cli::print::print_result;

fn main() {
    let opts = Cli::parse();
    init_tracing(opts.verbose);

    if let Err(e) = run(opts) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so command output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("ADDRBOOK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn data_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("ADDRBOOK_HOME") {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "addrbook", "addrbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| AddrBookError::Config("Could not determine data directory".to_string()))
}

fn run(opts: Cli) -> Result<()> {
    let home = data_home()?;
    let config = AppConfig::load(&home).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring config, using defaults");
        AppConfig::default()
    });
    let path = opts.file.unwrap_or_else(|| config.book_path(&home));

    let mut api = AddrBookApi::new(path, &config);
    print_result(&api.load()?);

    let result = match opts.command {
        None | Some(Commands::Shell) => return cli::shell::run(&mut api),
        Some(Commands::Add {
            name,
            phone,
            birthday,
        }) => api.add_contact(&name, &phone, birthday.as_deref())?,
        Some(Commands::Change { name, phone }) => api.change_phone(&name, &phone)?,
        Some(Commands::Phone { name }) => api.find_phone(&name)?,
        Some(Commands::Show) => api.show_all()?,
        Some(Commands::Search { query }) => api.search(&query)?,
        Some(Commands::Edit { name, old, new }) => api.edit_phone(&name, &old, &new)?,
        Some(Commands::RemovePhone { name, phone }) => api.remove_phone(&name, &phone)?,
        Some(Commands::Delete { name }) => api.delete_contact(&name)?,
        Some(Commands::Birthday { name, date }) => api.birthday(&name, date.as_deref())?,
    };

    print_result(&result);
    api.flush()
}

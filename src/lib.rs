//! Spotify CSV Playlist Importer Library
//!
//! This library fills a Spotify playlist from a CSV file of `Artist`/`Track`
//! rows. It authenticates through the authorization code flow, finds or
//! creates the target playlist, resolves every row through the catalog search
//! and appends the matches in batches.
//!
//! # Modules
//!
//! - `cli` - Command-line arguments and the `import` command
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by every module
//! - `spotify` - Spotify Web API client and authentication
//! - `tracklist` - CSV input handling
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//! - `workflow` - Playlist reconciliation and batched import
//!
//! # Example
//!
//! ```
//! use playlist_importer::{cli, config};
//!
//! fn main() -> playlist_importer::Res<()> {
//!     config::load_env();
//!     let options = cli::ImportOptions::new("Road Trip", "songs.csv");
//!     cli::import(&options)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod spotify;
pub mod tracklist;
pub mod types;
pub mod utils;
pub mod workflow;

pub use error::Error;

/// Result type used throughout the crate.
///
/// Every fallible operation reports an [`Error`], so callers can tell a
/// configuration problem from an API failure without downcasting.
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Added batch of {} tracks to the playlist!", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1. Only the binary uses this; library
/// code returns [`Error`] instead.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable problems such as an unmatched row or a failed batch.
///
/// # Example
///
/// ```
/// warning!("Track not found: {} - {}", artist, track);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

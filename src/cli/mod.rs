//! # CLI Module
//!
//! Command-line layer of the importer: argument definitions and the `import`
//! command that ties configuration, authentication and the workflow
//! together.
//!
//! ## Data Flow
//!
//! 1. **Validation**: credentials from the environment, rows from the CSV
//!    ([`prepare`]); failures here happen before any network call
//! 2. **Authentication**: a [`CredentialProvider`](crate::spotify::auth::CredentialProvider)
//!    yields the bearer token
//! 3. **Workflow**: [`crate::workflow::run`] resolves the playlist, searches
//!    every row and appends the matches
//!
//! ## Usage
//!
//! ```bash
//! playlist-importer --playlist "Road Trip" --csv songs.csv
//! playlist-importer --playlist "Road Trip" --csv songs.csv --open-browser
//! ```

mod args;
mod import;

pub use args::Cli;
pub use import::ImportOptions;
pub use import::PreparedImport;
pub use import::import;
pub use import::import_with;
pub use import::prepare;

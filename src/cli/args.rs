use std::path::PathBuf;

use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use crate::cli::ImportOptions;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name = env!("CARGO_PKG_NAME"),
  bin_name = env!("CARGO_PKG_NAME"),
  about = env!("CARGO_PKG_DESCRIPTION"),
  styles = styles(),
)]
pub struct Cli {
    /// Name of the playlist to fill (created when missing, cleared when found)
    #[clap(long)]
    pub playlist: String,

    /// CSV file with `Artist` and `Track` columns
    #[clap(long)]
    pub csv: PathBuf,

    /// Also try to open the authorization URL in the default browser
    #[clap(long)]
    pub open_browser: bool,
}

impl From<Cli> for ImportOptions {
    fn from(cli: Cli) -> Self {
        ImportOptions {
            playlist: cli.playlist,
            csv: cli.csv,
            open_browser: cli.open_browser,
        }
    }
}

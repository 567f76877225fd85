use clap::Parser;

use playlist_importer::{
    cli::{self, Cli, ImportOptions},
    config, error,
};

fn main() {
    let args = Cli::parse();

    config::load_env();

    let options = ImportOptions::from(args);
    match cli::import(&options) {
        Ok(_) => {}
        Err(e) if e.is_configuration() => error!("Configuration error: {}", e),
        Err(e) => error!("{}", e),
    }
}

//! Build script for the playlist importer.
//!
//! Copies `.env.example` from the crate root into the user's local data
//! directory so a template sits next to the `.env` file the binary reads:
//! - Linux: `~/.local/share/playlist-importer/.env.example`
//! - macOS: `~/Library/Application Support/playlist-importer/.env.example`
//! - Windows: `%LOCALAPPDATA%/playlist-importer/.env.example`
//!
//! A missing template only produces a cargo warning.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("playlist-importer");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    // Read-only build environments must not fail the build.
    if let Err(e) = fs::create_dir_all(&out_dir)
        .and_then(|_| fs::copy(&env_example_path, out_dir.join(".env.example")).map(|_| ()))
    {
        println!(
            "cargo:warning=could not install .env.example into {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}

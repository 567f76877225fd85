use std::{env, fs};

use playlist_importer::config::load_env_files;
use tempfile::tempdir;

#[test]
fn test_broken_env_file_does_not_stop_later_files() {
    let dir = tempdir().unwrap();
    let broken = dir.path().join("data.env");
    let local = dir.path().join("local.env");
    fs::write(&broken, "NOT A VALID LINE\n").unwrap();
    fs::write(&local, "PLAYLIST_IMPORTER_LOCAL_ENV=loaded\n").unwrap();

    load_env_files(&[broken, local]);

    assert_eq!(env::var("PLAYLIST_IMPORTER_LOCAL_ENV").unwrap(), "loaded");
}

#[test]
fn test_missing_env_files_are_skipped() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.env");
    let local = dir.path().join("local.env");
    fs::write(&local, "PLAYLIST_IMPORTER_FALLBACK_ENV=present\n").unwrap();

    load_env_files(&[missing, local]);

    assert_eq!(env::var("PLAYLIST_IMPORTER_FALLBACK_ENV").unwrap(), "present");
}

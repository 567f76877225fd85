use std::io::Write;

use clap::{Parser, error::ErrorKind};
use playlist_importer::{
    Error, Res,
    cli::{self, Cli, ImportOptions},
    config::{Credentials, DEFAULT_REDIRECT_URI},
    spotify::auth::CredentialProvider,
    types::Token,
};
use tempfile::NamedTempFile;

fn env_with<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

struct RefusingProvider {
    asked: usize,
}

impl CredentialProvider for RefusingProvider {
    fn access_token(&mut self) -> Res<Token> {
        self.asked += 1;
        Err(Error::Auth("access was not granted: access_denied".to_string()))
    }
}

#[test]
fn test_parse_arguments_success() {
    let cli = Cli::try_parse_from([
        "playlist-importer",
        "--playlist",
        "MyList",
        "--csv",
        "songs.csv",
    ])
    .unwrap();

    assert_eq!(cli.playlist, "MyList");
    assert_eq!(cli.csv.to_str(), Some("songs.csv"));
    assert!(!cli.open_browser);

    let options = ImportOptions::from(cli);
    assert_eq!(options, ImportOptions::new("MyList", "songs.csv"));
}

#[test]
fn test_missing_csv_is_rejected() {
    let err = Cli::try_parse_from(["playlist-importer", "--playlist", "MyList"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    assert_ne!(err.exit_code(), 0);
}

#[test]
fn test_missing_playlist_is_rejected() {
    let err = Cli::try_parse_from(["playlist-importer", "--csv", "songs.csv"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    assert_ne!(err.exit_code(), 0);
}

#[test]
fn test_open_browser_flag() {
    let cli = Cli::try_parse_from([
        "playlist-importer",
        "--playlist",
        "MyList",
        "--csv",
        "songs.csv",
        "--open-browser",
    ])
    .unwrap();

    assert!(cli.open_browser);
}

#[test]
fn test_missing_client_id_fails_before_reading_csv() {
    let options = ImportOptions::new("MyList", "/definitely/not/here.csv");
    let vars = [("SPOTIPY_CLIENT_SECRET", "secret")];

    let err = cli::prepare(&options, env_with(&vars)).unwrap_err();

    assert!(matches!(err, Error::MissingEnv("SPOTIPY_CLIENT_ID")));
    assert!(err.is_configuration());
}

#[test]
fn test_missing_client_secret_is_reported() {
    let options = ImportOptions::new("MyList", "/definitely/not/here.csv");
    let vars = [("SPOTIPY_CLIENT_ID", "id")];

    let err = cli::prepare(&options, env_with(&vars)).unwrap_err();

    assert!(matches!(err, Error::MissingEnv("SPOTIPY_CLIENT_SECRET")));
}

#[test]
fn test_empty_client_id_counts_as_missing() {
    let vars = [("SPOTIPY_CLIENT_ID", "  "), ("SPOTIPY_CLIENT_SECRET", "secret")];

    let err = Credentials::from_lookup(env_with(&vars)).unwrap_err();

    assert!(matches!(err, Error::MissingEnv("SPOTIPY_CLIENT_ID")));
}

#[test]
fn test_credentials_default_redirect_uri() {
    let vars = [("SPOTIPY_CLIENT_ID", "id"), ("SPOTIPY_CLIENT_SECRET", "secret")];

    let creds = Credentials::from_lookup(env_with(&vars)).unwrap();

    assert_eq!(creds.client_id, "id");
    assert_eq!(creds.client_secret, "secret");
    assert_eq!(creds.redirect_uri, DEFAULT_REDIRECT_URI);
}

#[test]
fn test_credentials_redirect_uri_override() {
    let vars = [
        ("SPOTIPY_CLIENT_ID", "id"),
        ("SPOTIPY_CLIENT_SECRET", "secret"),
        ("SPOTIPY_REDIRECT_URI", "http://127.0.0.1:9000/cb"),
    ];

    let creds = Credentials::from_lookup(env_with(&vars)).unwrap();

    assert_eq!(creds.redirect_uri, "http://127.0.0.1:9000/cb");
}

#[test]
fn test_prepare_reads_rows() {
    let file = csv_file("Artist,Track\nQueen,Bohemian Rhapsody\nABBA,Waterloo\n");
    let options = ImportOptions::new("MyList", file.path());
    let vars = [("SPOTIPY_CLIENT_ID", "id"), ("SPOTIPY_CLIENT_SECRET", "secret")];

    let prepared = cli::prepare(&options, env_with(&vars)).unwrap();

    assert_eq!(prepared.rows.len(), 2);
    assert_eq!(prepared.credentials.client_id, "id");
}

#[test]
fn test_prepare_fails_on_missing_csv() {
    let options = ImportOptions::new("MyList", "/definitely/not/here.csv");
    let vars = [("SPOTIPY_CLIENT_ID", "id"), ("SPOTIPY_CLIENT_SECRET", "secret")];

    let err = cli::prepare(&options, env_with(&vars)).unwrap_err();

    assert!(matches!(err, Error::Csv { .. }));
    assert!(!err.is_configuration());
}

#[test]
fn test_authentication_failure_stops_the_import() {
    let options = ImportOptions::new("MyList", "songs.csv");
    let mut provider = RefusingProvider { asked: 0 };

    let err = cli::import_with(&options, &[], &mut provider).unwrap_err();

    assert!(matches!(err, Error::Auth(_)));
    assert_eq!(provider.asked, 1);
}

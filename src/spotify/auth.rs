use std::{
    collections::HashMap,
    io::{self, BufRead, StdinLock, Write},
};

use reqwest::{Url, blocking::Client};

use crate::{
    Res,
    config::{self, Credentials},
    error::Error,
    info,
    spotify::client::check_status,
    success,
    types::{Token, TokenResponse},
    utils, warning,
};

/// Source of the bearer credential used for every catalog call.
///
/// The importer asks its provider exactly once per run. The interactive
/// provider blocks on the operator; tests and unattended runs plug in a
/// provider that already holds a token.
pub trait CredentialProvider {
    fn access_token(&mut self) -> Res<Token>;
}

/// Provider for a token issued out of band, e.g. through `SPOTIFY_ACCESS_TOKEN`.
pub struct StaticToken {
    access_token: String,
}

impl StaticToken {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

impl CredentialProvider for StaticToken {
    fn access_token(&mut self) -> Res<Token> {
        Ok(Token {
            access_token: self.access_token.clone(),
        })
    }
}

/// Authorization code flow driven by the operator.
///
/// # Authentication Flow
///
/// 1. **Authorization URL**: builds the Spotify authorize URL with a random
///    `state` and prints it (optionally opening it in the default browser)
/// 2. **User Authorization**: the operator grants access and lands on the
///    redirect URI
/// 3. **Code Entry**: one line is read from `input`; it may be the bare code
///    or the complete redirect URL
/// 4. **Token Exchange**: the code is exchanged for an access token using the
///    client id and secret
///
/// Nothing is cached, so every run goes through the full flow.
pub struct InteractiveCodeFlow<R> {
    credentials: Credentials,
    input: R,
    open_browser: bool,
    http: Client,
}

impl InteractiveCodeFlow<StdinLock<'static>> {
    /// Reads the authorization code from standard input.
    pub fn stdin(credentials: Credentials, open_browser: bool) -> Self {
        Self::new(credentials, io::stdin().lock(), open_browser)
    }
}

impl<R: BufRead> InteractiveCodeFlow<R> {
    pub fn new(credentials: Credentials, input: R, open_browser: bool) -> Self {
        Self {
            credentials,
            input,
            open_browser,
            http: Client::new(),
        }
    }

    fn read_code(&mut self, state: &str) -> Res<String> {
        print!("Enter the authorization code from the URL: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Auth("no authorization code entered".to_string()));
        }

        parse_response_code(&line, state)
    }
}

impl<R: BufRead> CredentialProvider for InteractiveCodeFlow<R> {
    fn access_token(&mut self) -> Res<Token> {
        let state = utils::generate_state();
        let auth_url = authorize_url(&self.credentials, &state)?;

        info!(
            "Please go to the following URL to authorize the application: {}",
            auth_url
        );

        if self.open_browser && webbrowser::open(auth_url.as_str()).is_err() {
            warning!("Failed to open browser. Please navigate to the URL above manually.");
        }

        let code = self.read_code(&state)?;
        let token = exchange_code(&self.http, &self.credentials, &code)?;

        success!("Authentication successful!");
        Ok(token)
    }
}

/// Builds the Spotify authorization URL for the configured application.
pub fn authorize_url(credentials: &Credentials, state: &str) -> Res<Url> {
    let base = config::spotify_auth_url();
    Url::parse_with_params(
        &base,
        &[
            ("client_id", credentials.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", credentials.redirect_uri.as_str()),
            ("scope", config::SPOTIFY_SCOPE),
            ("state", state),
        ],
    )
    .map_err(|e| Error::Auth(format!("invalid authorization URL {}: {}", base, e)))
}

/// Extracts the authorization code from what the operator pasted.
///
/// A complete redirect URL is parsed for its `code` parameter. An `error`
/// parameter means the operator denied access, and a `state` that does not
/// match `expected_state` is rejected. Anything that is not a URL is taken
/// as the code itself.
pub fn parse_response_code(input: &str, expected_state: &str) -> Res<String> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::Auth("no authorization code entered".to_string()));
    }

    let Ok(url) = Url::parse(input) else {
        return Ok(input.to_string());
    };

    let params: HashMap<String, String> = url.query_pairs().into_owned().collect();

    if let Some(error) = params.get("error") {
        return Err(Error::Auth(format!("access was not granted: {}", error)));
    }

    if let Some(state) = params.get("state") {
        if state != expected_state {
            return Err(Error::Auth(
                "state in redirect URL does not match this session".to_string(),
            ));
        }
    }

    params
        .get("code")
        .filter(|code| !code.is_empty())
        .cloned()
        .ok_or_else(|| Error::Auth("redirect URL has no code parameter".to_string()))
}

/// Exchanges an authorization code for an access token.
///
/// The client authenticates with HTTP Basic credentials, so the client secret
/// never appears in the form body.
pub fn exchange_code(http: &Client, credentials: &Credentials, code: &str) -> Res<Token> {
    let res = http
        .post(config::spotify_token_url())
        .header(
            reqwest::header::AUTHORIZATION,
            utils::basic_auth_value(&credentials.client_id, &credentials.client_secret),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", credentials.redirect_uri.as_str()),
        ])
        .send()?;

    let json: TokenResponse = check_status(res)
        .map_err(|e| Error::Auth(format!("token exchange failed: {}", e)))?
        .json()?;

    Ok(Token {
        access_token: json.access_token,
    })
}

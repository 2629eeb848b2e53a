//! core/remote/spotify.rs
//! Spotify Web API player endpoints over blocking reqwest.
//!
//! Auth is not handled here: the caller supplies a ready bearer token.

use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_LENGTH;
use reqwest::{Method, StatusCode};

use super::RemoteService;
use super::model::{CurrentlyPlaying, ErrorBody};
use crate::core::config::AppConfig;
use crate::core::error::{ClientError, Result};

const CURRENTLY_PLAYING: &str = "me/player/currently-playing";
const PLAY: &str = "me/player/play";
const PAUSE: &str = "me/player/pause";
const NEXT: &str = "me/player/next";
const PREVIOUS: &str = "me/player/previous";

#[derive(Debug, Clone)]
pub struct SpotifyRemote {
    http: Client,
    base_url: String,
    token: String,
}

impl SpotifyRemote {
    pub fn new(http: Client, base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// Fails with `MissingToken` when the config carries no usable token.
    pub fn from_config(config: &AppConfig, http: Client) -> Result<Self> {
        let token = config
            .access_token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ClientError::MissingToken)?;

        Ok(Self::new(http, config.api_base_url.clone(), token))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn query(&self, path: &str) -> Result<Response> {
        let resp = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.token)
            .send()?;
        check_status(resp)
    }

    /// Commands carry no body, but the API rejects PUT/POST without a length.
    fn command(&self, method: Method, path: &str) -> Result<()> {
        tracing::debug!(%method, path, "remote command");
        let resp = self
            .http
            .request(method, self.url(path))
            .bearer_auth(&self.token)
            .header(CONTENT_LENGTH, 0)
            .send()?;
        check_status(resp).map(|_| ())
    }
}

impl RemoteService for SpotifyRemote {
    fn currently_playing(&self) -> Result<Option<CurrentlyPlaying>> {
        let resp = self.query(CURRENTLY_PLAYING)?;
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let body = resp.text()?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(serde_json::from_str(&body)?))
    }

    fn play(&self) -> Result<()> {
        self.command(Method::PUT, PLAY)
    }

    fn pause(&self) -> Result<()> {
        self.command(Method::PUT, PAUSE)
    }

    fn next_track(&self) -> Result<()> {
        self.command(Method::POST, NEXT)
    }

    fn previous_track(&self) -> Result<()> {
        self.command(Method::POST, PREVIOUS)
    }
}

fn check_status(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized);
    }

    let reason = status.canonical_reason().unwrap_or("unknown status");
    let message = resp
        .text()
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
        .map(|b| b.error.message)
        .unwrap_or_else(|| reason.to_string());

    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

use std::time::Duration;

use reqwest::StatusCode;
use url::Url;

use crate::{LookupError, LyricsBody};

/// Settings for the lyrics lookup client.
#[derive(Debug, Clone)]
pub struct LookupSettings {
    /// Service root. The versioned lookup path is appended per request.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.lyrics.ovh".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// One lookup per call: a single outbound GET, no retries, no caching.
#[async_trait::async_trait]
pub trait LyricsLookup: Send + Sync {
    async fn fetch_lyrics(&self, artist: &str, title: &str) -> Result<LyricsBody, LookupError>;
}

/// lyrics.ovh client over reqwest.
#[derive(Debug, Clone)]
pub struct OvhLyricsClient {
    settings: LookupSettings,
}

impl OvhLyricsClient {
    pub fn new(settings: LookupSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, LookupError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| LookupError::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl LyricsLookup for OvhLyricsClient {
    async fn fetch_lyrics(&self, artist: &str, title: &str) -> Result<LyricsBody, LookupError> {
        let url = lookup_url(&self.settings.base_url, artist, title)?;
        let client = self.build_client()?;

        let response = client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // The 404 body is an `{"error": ...}` blob; the status alone
            // decides, so it is never read.
            return Err(LookupError::NotFound);
        }
        if !status.is_success() {
            return Err(LookupError::HttpStatus(status.as_u16()));
        }

        response.json().await.map_err(map_reqwest_error)
    }
}

/// Builds `<base>/v1/<artist>/<title>` with both names percent-encoded as
/// path segments, so slashes or spaces in a name cannot splice the path.
pub fn lookup_url(base: &str, artist: &str, title: &str) -> Result<Url, LookupError> {
    let mut url = Url::parse(base).map_err(|err| LookupError::InvalidUrl(err.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| LookupError::InvalidUrl("base url cannot carry a path".to_string()))?
        .pop_if_empty()
        .push("v1")
        .push(artist)
        .push(title);
    Ok(url)
}

fn map_reqwest_error(err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        return LookupError::Timeout;
    }
    if err.is_decode() {
        return LookupError::MalformedBody(err.to_string());
    }
    LookupError::Network(err.to_string())
}

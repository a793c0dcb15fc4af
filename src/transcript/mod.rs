use serde::{Deserialize, Serialize};

use crate::transport::{HttpTransport, ReqwestTransport};
use crate::video_id::{get_video_id, VideoId};
use crate::{Result, TranscriptError};

pub mod innertube;
pub mod nonce;
pub mod page;
pub mod response;

/// Locale hints forwarded verbatim into the transcript request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Interface language hint (`hl`)
    pub language: String,

    /// Country hint (`gl`)
    pub country: String,
}

impl FetchConfig {
    /// Create a config from language and country codes
    ///
    /// The values are not validated; the endpoint falls back on its own
    /// defaults for hints it does not recognize.
    pub fn new(language: &str, country: &str) -> Self {
        Self {
            language: language.to_string(),
            country: country.to_string(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new("en", "US")
    }
}

/// One timed caption line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptCue {
    /// Caption text
    pub text: String,

    /// How long the cue is displayed, in milliseconds
    pub duration_ms: u64,

    /// Cue start, in milliseconds from the beginning of the video
    pub offset_ms: u64,
}

/// Ordered transcript plus the video's display title
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptResult {
    /// Cues in the order the platform returned them (chronological)
    pub cues: Vec<TranscriptCue>,

    /// Display title, entity-decoded with the platform suffix stripped
    pub title: String,
}

/// Client for transcript and title fetching
///
/// Holds nothing but the transport, so one instance can serve concurrent
/// calls; every fetch is independent and leaves no state behind.
pub struct TranscriptClient {
    transport: Box<dyn HttpTransport>,
}

impl TranscriptClient {
    /// Create a client over the default reqwest transport
    pub fn new() -> Self {
        Self::with_transport(Box::new(ReqwestTransport::new()))
    }

    /// Create a client over a caller-supplied transport
    pub fn with_transport(transport: Box<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetch the transcript and title for a bare video ID or share URL
    ///
    /// Two sequential round-trips: the watch page (for the title and the
    /// request tokens), then the internal transcript endpoint. Any failure
    /// short-circuits; no step is retried.
    pub async fn fetch_transcript(
        &self,
        input: &str,
        config: &FetchConfig,
    ) -> Result<TranscriptResult> {
        let id = get_video_id(input)?;
        tracing::info!("Fetching transcript for video: {}", id);

        let watch_page = self.transport.get(&watch_url(&id)).await?;
        tracing::debug!("Watch page fetched: HTTP {}", watch_page.status);

        let title = page::extract_title(&watch_page.body);
        let secrets = page::PageSecrets::from_watch_page(&watch_page.body)?;
        tracing::debug!("Request tokens extracted from watch page");

        let request = innertube::TranscriptRequest::new(&secrets, config);
        let body = serde_json::to_value(&request).map_err(|err| {
            TranscriptError::RequestBuildFailed(format!("could not serialize request: {}", err))
        })?;

        let endpoint = self
            .transport
            .post_json(&transcript_url(&secrets.api_key), &body)
            .await?;
        tracing::debug!("Transcript endpoint answered: HTTP {}", endpoint.status);

        let cues = response::parse_transcript(&endpoint.body)?;
        tracing::debug!("Parsed {} transcript cues", cues.len());

        Ok(TranscriptResult { cues, title })
    }

    /// Fetch only the display title for an already-resolved video ID
    ///
    /// Unlike the transcript path, an empty title is fatal here: title-only
    /// callers have no other signal that the fetch failed.
    pub async fn fetch_title(&self, id: &VideoId) -> Result<String> {
        tracing::info!("Fetching title for video: {}", id);

        let watch_page = self.transport.get(&watch_url(id)).await?;
        tracing::debug!("Watch page fetched: HTTP {}", watch_page.status);

        let title = page::extract_title(&watch_page.body);
        if title.is_empty() {
            return Err(TranscriptError::TitleUnavailable);
        }

        Ok(title)
    }
}

impl Default for TranscriptClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch a transcript and title with a one-shot default client
pub async fn fetch_transcript(
    input: &str,
    language: &str,
    country: &str,
) -> Result<TranscriptResult> {
    TranscriptClient::new()
        .fetch_transcript(input, &FetchConfig::new(language, country))
        .await
}

/// Fetch a video title with a one-shot default client
pub async fn fetch_video_title(id: &VideoId) -> Result<String> {
    TranscriptClient::new().fetch_title(id).await
}

fn watch_url(id: &VideoId) -> String {
    format!("https://www.youtube.com/watch?v={}", id)
}

fn transcript_url(api_key: &str) -> String {
    format!(
        "https://www.youtube.com/youtubei/v1/get_transcript?key={}",
        urlencoding::encode(api_key)
    )
}

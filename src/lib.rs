//! yt-scribe - Client-side YouTube transcript and title scraping
//!
//! This library fetches the spoken-word transcript and display title for a
//! YouTube video, given a bare 11-character video ID or any of the common
//! share URL shapes. It scrapes the public watch page for the embedded API
//! key and session tokens, then calls the internal `get_transcript` endpoint
//! directly; no credentials are required.

pub mod transcript;
pub mod transport;
pub mod video_id;

pub use transcript::{
    fetch_transcript, fetch_video_title, FetchConfig, TranscriptClient, TranscriptCue,
    TranscriptResult,
};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};
pub use video_id::{get_video_id, VideoId};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, TranscriptError>;

/// Errors surfaced by video ID resolution and transcript/title fetching
///
/// Every failure is terminal for its call; the crate never retries. The
/// kinds are deliberately fine-grained because callers branch on them: a
/// disabled transcript is benign, a malformed response means the page or
/// endpoint shape changed, a transport error means the platform was
/// unreachable.
#[derive(thiserror::Error, Debug)]
pub enum TranscriptError {
    /// An 11-character input (or extracted candidate) outside the ID alphabet
    #[error("Invalid video ID: {0}")]
    InvalidVideoId(String),

    /// Input not recognized as a YouTube URL
    #[error("Invalid video URL: {0}")]
    InvalidUrl(String),

    /// The URL matched a known shape but no ID candidate could be extracted
    #[error("Could not extract a video ID from URL: {0}")]
    IdExtractionFailed(String),

    /// Network or protocol failure in the underlying HTTP transport
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The watch page carried no API key (platform gating or page change)
    #[error("Transcript unavailable: {0}")]
    TranscriptUnavailable(String),

    /// A token required for the transcript request was missing from the page
    #[error("Failed to build transcript request: {0}")]
    RequestBuildFailed(String),

    /// Transcripts are turned off for this video
    #[error("Transcript is disabled on this video")]
    TranscriptDisabled,

    /// A cue carried a duration or offset that is not a numeric string
    #[error("Malformed transcript cue: {0}")]
    MalformedCue(String),

    /// The response tree did not match the expected endpoint shape
    #[error("Malformed transcript response: {0}")]
    MalformedResponse(String),

    /// The endpoint returned something other than a transcript response
    #[error("Failed to fetch transcript: {0}")]
    FetchFailed(String),

    /// The watch page produced an empty title
    #[error("Failed to fetch video title")]
    TitleUnavailable,
}

impl From<reqwest::Error> for TranscriptError {
    fn from(err: reqwest::Error) -> Self {
        TranscriptError::Transport(Box::new(err))
    }
}

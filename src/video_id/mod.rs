use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::{Result, TranscriptError};

/// Pattern every canonical video ID satisfies
static VIDEO_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9A-Za-z_-]{11}$").unwrap());

/// Coarse domain check: recognized hosts and the URL shapes they serve IDs in
static PLATFORM_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)(?:youtube(?:-nocookie)?\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/ ]{11})"#,
    )
    .unwrap()
});

/// Permissive extraction of the ID candidate out of a recognized URL
static ID_EXTRACTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^.*(?:(?:youtu\.be/|v/|vi/|u/\w/|embed/)|(?:(?:watch)?\?v(?:i)?=|&v(?:i)?=))([^#&?]*).*",
    )
    .unwrap()
});

/// Canonical 11-character video identifier
///
/// Values only come out of [`get_video_id`], so holding a `VideoId` means
/// the identifier already passed alphabet validation; nothing downstream
/// re-validates it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// View the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolve a bare ID or share URL into a canonical [`VideoId`]
///
/// Exactly-11-byte inputs are validated directly against the ID alphabet.
/// Anything else must look like a platform URL: `watch?v=`, `youtu.be/`,
/// `embed/`, `v/`, `e/`, or extra path segments in front of a `v=` query
/// parameter, on `youtube.com`, `youtube-nocookie.com` or `youtu.be` hosts.
/// Matching runs in two stages (coarse domain check, then permissive
/// candidate extraction) so one overly strict pattern cannot reject the
/// platform's historical URL diversity.
pub fn get_video_id(input: &str) -> Result<VideoId> {
    if input.len() == 11 {
        if VIDEO_ID_REGEX.is_match(input) {
            return Ok(VideoId(input.to_string()));
        }
        return Err(TranscriptError::InvalidVideoId(input.to_string()));
    }

    if !PLATFORM_URL_REGEX.is_match(input) {
        return Err(TranscriptError::InvalidUrl(input.to_string()));
    }

    let candidate = ID_EXTRACTION_REGEX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());

    match candidate {
        Some(id) if VIDEO_ID_REGEX.is_match(id) => Ok(VideoId(id.to_string())),
        Some(id) => Err(TranscriptError::InvalidVideoId(id.to_string())),
        None => Err(TranscriptError::IdExtractionFailed(input.to_string())),
    }
}

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Result, TranscriptError};

static TITLE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<title>.*?([^<>]*)</title>").unwrap());

static TITLE_SUFFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\s-\sYouTube$").unwrap());

static API_KEY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""INNERTUBE_API_KEY":"(.*?)""#).unwrap());

static SHARE_ENTITY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""serializedShareEntity":"(.*?)""#).unwrap());

static VISITOR_DATA_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""VISITOR_DATA":"(.*?)""#).unwrap());

static CLICK_TRACKING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""clickTrackingParams":"(.*?)""#).unwrap());

/// Extract and clean the display title from a watch page body
///
/// HTML entities are decoded, then the trailing `" - YouTube"` the platform
/// appends is stripped case-insensitively. Returns an empty string when the
/// page has no title element; callers decide whether that is fatal.
pub fn extract_title(page: &str) -> String {
    let raw = TITLE_REGEX
        .captures(page)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or("");

    let decoded = html_escape::decode_html_entities(raw);
    TITLE_SUFFIX_REGEX.replace(&decoded, "").into_owned()
}

/// Request tokens scraped from one watch page fetch
///
/// Consumed once to build a single transcript request, then discarded.
#[derive(Debug)]
pub struct PageSecrets {
    /// Key for the `youtubei/v1` query string
    pub api_key: String,

    /// Share-entity token forwarded as the request `params`
    pub share_entity: String,

    /// Visitor session token for the client block
    pub visitor_data: String,

    /// Click-tracking token echoed back to the endpoint
    pub click_tracking_params: String,
}

impl PageSecrets {
    /// Scrape all four tokens from a watch page body
    ///
    /// A missing (or empty) API key means the platform is not serving
    /// transcript machinery for this page; a missing request token makes the
    /// POST body unbuildable. Either way no partial request is ever sent.
    pub fn from_watch_page(page: &str) -> Result<Self> {
        let api_key = capture(&API_KEY_REGEX, page)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                TranscriptError::TranscriptUnavailable(
                    "no API key found in watch page".to_string(),
                )
            })?;

        let share_entity = capture(&SHARE_ENTITY_REGEX, page).ok_or_else(|| {
            TranscriptError::RequestBuildFailed(
                "page has no serializedShareEntity marker".to_string(),
            )
        })?;
        let visitor_data = capture(&VISITOR_DATA_REGEX, page).ok_or_else(|| {
            TranscriptError::RequestBuildFailed("page has no VISITOR_DATA marker".to_string())
        })?;
        let click_tracking_params = capture(&CLICK_TRACKING_REGEX, page).ok_or_else(|| {
            TranscriptError::RequestBuildFailed(
                "page has no clickTrackingParams marker".to_string(),
            )
        })?;

        Ok(Self {
            api_key,
            share_entity,
            visitor_data,
            click_tracking_params,
        })
    }
}

fn capture(pattern: &Regex, page: &str) -> Option<String> {
    pattern
        .captures(page)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

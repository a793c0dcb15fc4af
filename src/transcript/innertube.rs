use serde::Serialize;
use serde_json::Value;

use super::nonce;
use super::page::PageSecrets;
use super::FetchConfig;

/// Body for the `youtubei/v1/get_transcript` endpoint
///
/// Field names and the client fingerprint are a compatibility contract with
/// the endpoint; everything except the locale hints and the scraped tokens
/// is fixed and deliberately not caller-configurable.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptRequest {
    context: RequestContext,
    params: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestContext {
    client: ClientInfo,
    request: RequestOptions,
    user: UserState,
    client_screen_nonce: String,
    click_tracking: ClickTracking,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientInfo {
    hl: String,
    gl: String,
    visitor_data: String,
    user_agent: String,
    client_name: String,
    client_version: String,
    os_name: String,
    os_version: String,
    browser_name: String,
    browser_version: String,
    screen_width_points: u32,
    screen_height_points: u32,
    screen_pixel_density: u32,
    utc_offset_minutes: i32,
    user_interface_theme: String,
    connection_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestOptions {
    internal_experiment_flags: Vec<Value>,
    consistency_token_jars: Vec<Value>,
}

/// Serializes to `{}`; the endpoint expects an empty user object
#[derive(Debug, Serialize)]
struct UserState {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClickTracking {
    click_tracking_params: String,
}

impl TranscriptRequest {
    /// Assemble the request body from page tokens and locale hints
    ///
    /// Draws a fresh screen nonce on every call.
    pub fn new(secrets: &PageSecrets, config: &FetchConfig) -> Self {
        Self {
            context: RequestContext {
                client: ClientInfo::with_locale(config, &secrets.visitor_data),
                request: RequestOptions {
                    internal_experiment_flags: Vec::new(),
                    consistency_token_jars: Vec::new(),
                },
                user: UserState {},
                client_screen_nonce: nonce::generate(),
                click_tracking: ClickTracking {
                    click_tracking_params: secrets.click_tracking_params.clone(),
                },
            },
            params: secrets.share_entity.clone(),
        }
    }
}

impl ClientInfo {
    /// Fixed browser fingerprint the endpoint accepts, plus caller locale
    ///
    /// Every literal here (including the odd `85.0f.4183.83` browser
    /// version) is sent verbatim; the endpoint matches on the combination.
    fn with_locale(config: &FetchConfig, visitor_data: &str) -> Self {
        Self {
            hl: config.language.clone(),
            gl: config.country.clone(),
            visitor_data: visitor_data.to_string(),
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_4) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/85.0.4183.83 Safari/537.36,gzip(gfe)".to_string(),
            client_name: "WEB".to_string(),
            client_version: "2.20200925.01.00".to_string(),
            os_name: "Macintosh".to_string(),
            os_version: "10_15_4".to_string(),
            browser_name: "Chrome".to_string(),
            browser_version: "85.0f.4183.83".to_string(),
            screen_width_points: 1440,
            screen_height_points: 770,
            screen_pixel_density: 2,
            utc_offset_minutes: 120,
            user_interface_theme: "USER_INTERFACE_THEME_LIGHT".to_string(),
            connection_type: "CONN_CELLULAR_3G".to_string(),
        }
    }
}

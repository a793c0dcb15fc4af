use serde_json::{Map, Value};

use super::TranscriptCue;
use crate::{Result, TranscriptError};

const CUE_GROUPS_PATH: &str =
    "/0/updateEngagementPanelAction/content/transcriptRenderer/body/transcriptBodyRenderer/cueGroups";
const CUE_RENDERER_PATH: &str = "/transcriptCueGroupRenderer/cues/0/transcriptCueRenderer";

/// Walk a `get_transcript` response body into ordered cues
///
/// The endpoint speaks loosely-typed JSON, so every step of the fixed path
/// is checked and converted into a typed error; a shape mismatch anywhere
/// means the endpoint contract changed and the whole call fails. The one
/// non-error case is a cue whose `simpleText` is absent: that is a
/// deliberately blank segment and is skipped without shifting its neighbors.
pub fn parse_transcript(body: &str) -> Result<Vec<TranscriptCue>> {
    let root: Value = serde_json::from_str(body).map_err(|err| {
        TranscriptError::FetchFailed(format!("response is not valid JSON: {}", err))
    })?;

    if root.get("responseContext").is_none() {
        return Err(TranscriptError::FetchFailed(
            "response has no responseContext".to_string(),
        ));
    }

    let actions = match root.get("actions") {
        Some(actions) => actions,
        None => return Err(TranscriptError::TranscriptDisabled),
    };

    let cue_groups = actions
        .pointer(CUE_GROUPS_PATH)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            TranscriptError::MalformedResponse(
                "no cueGroups under updateEngagementPanelAction".to_string(),
            )
        })?;

    let mut cues = Vec::with_capacity(cue_groups.len());
    for group in cue_groups {
        let renderer = group
            .pointer(CUE_RENDERER_PATH)
            .and_then(Value::as_object)
            .ok_or_else(|| {
                TranscriptError::MalformedResponse(
                    "cue group has no transcriptCueRenderer".to_string(),
                )
            })?;

        let duration_ms = millis_field(renderer, "durationMs")?;
        let offset_ms = millis_field(renderer, "startOffsetMs")?;

        let cue = renderer
            .get("cue")
            .and_then(Value::as_object)
            .ok_or_else(|| {
                TranscriptError::MalformedResponse(
                    "transcriptCueRenderer has no cue object".to_string(),
                )
            })?;

        let text = match cue.get("simpleText") {
            // Blank transcript segment, contributes nothing
            None | Some(Value::Null) => continue,
            Some(Value::String(text)) => text.clone(),
            Some(other) => {
                return Err(TranscriptError::MalformedResponse(format!(
                    "cue simpleText is not a string: {}",
                    other
                )))
            }
        };

        cues.push(TranscriptCue {
            text,
            duration_ms,
            offset_ms,
        });
    }

    Ok(cues)
}

/// Read a millisecond field carried as a numeric string
///
/// A missing or non-string field is a shape mismatch; a string that fails
/// integer parsing fails the whole call rather than silently zeroing the
/// cue timing.
fn millis_field(renderer: &Map<String, Value>, field: &str) -> Result<u64> {
    let raw = renderer.get(field).and_then(Value::as_str).ok_or_else(|| {
        TranscriptError::MalformedResponse(format!("cue renderer has no {} string", field))
    })?;

    raw.parse::<u64>().map_err(|_| {
        TranscriptError::MalformedCue(format!("{} is not a numeric string: {:?}", field, raw))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cue_group(duration: &str, offset: &str, text: Option<&str>) -> Value {
        let mut renderer = json!({
            "durationMs": duration,
            "startOffsetMs": offset,
            "cue": {}
        });
        if let Some(text) = text {
            renderer["cue"]["simpleText"] = json!(text);
        }

        json!({
            "transcriptCueGroupRenderer": {
                "cues": [{ "transcriptCueRenderer": renderer }]
            }
        })
    }

    fn response_with_groups(groups: Vec<Value>) -> String {
        json!({
            "responseContext": { "serviceTrackingParams": [] },
            "actions": [{
                "updateEngagementPanelAction": {
                    "content": {
                        "transcriptRenderer": {
                            "body": { "transcriptBodyRenderer": { "cueGroups": groups } }
                        }
                    }
                }
            }]
        })
        .to_string()
    }

    #[test]
    fn test_parse_ordered_cues() {
        let body = response_with_groups(vec![
            cue_group("5300", "0", Some("we're no strangers to love")),
            cue_group("4800", "5300", Some("you know the rules and so do I")),
        ]);

        let cues = parse_transcript(&body).unwrap();
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].text, "we're no strangers to love");
        assert_eq!(cues[0].duration_ms, 5300);
        assert_eq!(cues[0].offset_ms, 0);
        assert_eq!(cues[1].text, "you know the rules and so do I");
        assert_eq!(cues[1].offset_ms, 5300);
    }

    #[test]
    fn test_blank_segment_skipped_without_shifting_neighbors() {
        let body = response_with_groups(vec![
            cue_group("1000", "0", Some("first")),
            cue_group("2000", "1000", None),
            cue_group("3000", "3000", Some("third")),
        ]);

        let cues = parse_transcript(&body).unwrap();
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].text, "first");
        assert_eq!(cues[1].text, "third");
        assert_eq!(cues[1].offset_ms, 3000);
    }

    #[test]
    fn test_null_simple_text_is_blank_segment() {
        let mut group = cue_group("1000", "0", None);
        group["transcriptCueGroupRenderer"]["cues"][0]["transcriptCueRenderer"]["cue"]
            ["simpleText"] = Value::Null;
        let body = response_with_groups(vec![group]);

        assert!(parse_transcript(&body).unwrap().is_empty());
    }

    #[test]
    fn test_missing_actions_means_disabled() {
        let body = json!({ "responseContext": {} }).to_string();
        assert!(matches!(
            parse_transcript(&body),
            Err(TranscriptError::TranscriptDisabled)
        ));
    }

    #[test]
    fn test_unrecognized_shape_fails_fetch() {
        let body = json!({ "error": { "code": 404 } }).to_string();
        assert!(matches!(
            parse_transcript(&body),
            Err(TranscriptError::FetchFailed(_))
        ));
    }

    #[test]
    fn test_non_json_body_fails_fetch() {
        assert!(matches!(
            parse_transcript("<html>rate limited</html>"),
            Err(TranscriptError::FetchFailed(_))
        ));
    }

    #[test]
    fn test_broken_walk_path_is_malformed() {
        let body = json!({
            "responseContext": {},
            "actions": [{ "updateEngagementPanelAction": { "content": {} } }]
        })
        .to_string();

        assert!(matches!(
            parse_transcript(&body),
            Err(TranscriptError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_missing_cue_object_is_malformed() {
        let mut group = cue_group("1000", "0", Some("text"));
        group["transcriptCueGroupRenderer"]["cues"][0]["transcriptCueRenderer"]
            .as_object_mut()
            .unwrap()
            .remove("cue");
        let body = response_with_groups(vec![group]);

        assert!(matches!(
            parse_transcript(&body),
            Err(TranscriptError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_non_numeric_duration_is_malformed_cue() {
        let body = response_with_groups(vec![cue_group("12x45", "0", Some("text"))]);
        assert!(matches!(
            parse_transcript(&body),
            Err(TranscriptError::MalformedCue(_))
        ));
    }

    #[test]
    fn test_numeric_duration_must_be_a_string() {
        let mut group = cue_group("1000", "0", Some("text"));
        group["transcriptCueGroupRenderer"]["cues"][0]["transcriptCueRenderer"]["durationMs"] =
            json!(1000);
        let body = response_with_groups(vec![group]);

        assert!(matches!(
            parse_transcript(&body),
            Err(TranscriptError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_exact_integer_round_trip() {
        let body = response_with_groups(vec![cue_group(
            "4294967295",
            "18446744073709551615",
            Some("big"),
        )]);

        let cues = parse_transcript(&body).unwrap();
        assert_eq!(cues[0].duration_ms, 4294967295);
        assert_eq!(cues[0].offset_ms, 18446744073709551615);
    }
}

//! Response normalization.
//!
//! The remote automation workflows are loose about response shape: the same
//! endpoint may answer with a bare JSON object or with an array wrapping a
//! single object, and media URLs may appear under camelCase keys or the
//! spreadsheet-style human-readable keys. Normalization happens here, once,
//! so consumers always see one canonical record shape.
//!
//! Parsing rules:
//! 1. An array response is unwrapped to its first element; an empty array
//!    is malformed.
//! 2. A bare object is used as-is; any other JSON type is malformed.
//! 3. Media URLs are accepted under `videoUrl`/`Video URL` and
//!    `imageUrl`/`Image URL`.

use podflow_models::{MediaRecord, ScriptRecord};
use serde_json::Value;

use crate::error::{GatewayError, Result};

/// Unwraps an array-of-one response to its payload object.
pub fn unwrap_payload(value: Value) -> Result<Value> {
    match value {
        Value::Array(mut items) => {
            if items.is_empty() {
                return Err(GatewayError::Malformed("empty array response".to_string()));
            }
            Ok(items.swap_remove(0))
        }
        Value::Object(_) => Ok(value),
        other => Err(GatewayError::Malformed(format!(
            "expected object or array, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Normalizes a script-generation or post-processing response.
pub fn script_record(value: Value) -> Result<ScriptRecord> {
    let payload = unwrap_payload(value)?;
    serde_json::from_value(payload).map_err(|e| GatewayError::Malformed(e.to_string()))
}

/// Normalizes a media-generation response.
pub fn media_record(value: Value) -> Result<MediaRecord> {
    let payload = unwrap_payload(value)?;
    let Value::Object(map) = payload else {
        return Err(GatewayError::Malformed(
            "media response is not an object".to_string(),
        ));
    };

    let pick = |keys: [&str; 2]| {
        keys.iter()
            .find_map(|k| map.get(*k))
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    Ok(MediaRecord {
        video_url: pick(["videoUrl", "Video URL"]),
        image_url: pick(["imageUrl", "Image URL"]),
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_script_record_from_bare_object() {
        let value = json!({"Opening Hook": "h", "Part 1": "p1"});

        let record = script_record(value).unwrap();
        assert_eq!(record.opening_hook.as_deref(), Some("h"));
        assert_eq!(record.part_1.as_deref(), Some("p1"));
    }

    #[test]
    fn test_script_record_from_array_of_one() {
        let value = json!([{"Opening Hook": "h", "Grammar Topic": "g"}]);

        let record = script_record(value).unwrap();
        assert_eq!(record.opening_hook.as_deref(), Some("h"));
        assert_eq!(record.grammar_topic.as_deref(), Some("g"));
    }

    #[test]
    fn test_both_shapes_yield_identical_records() {
        let object = json!({"Opening Hook": "h", "Vocab 2": "v"});
        let array = json!([{"Opening Hook": "h", "Vocab 2": "v"}]);

        assert_eq!(script_record(object).unwrap(), script_record(array).unwrap());
    }

    #[test]
    fn test_empty_array_is_malformed() {
        let result = script_record(json!([]));
        assert!(matches!(result, Err(GatewayError::Malformed(_))));
    }

    #[test]
    fn test_scalar_response_is_malformed() {
        let result = script_record(json!("done"));
        assert!(matches!(result, Err(GatewayError::Malformed(_))));
    }

    #[test]
    fn test_media_record_camel_case_keys() {
        let value = json!({"videoUrl": "v", "imageUrl": "i"});

        let record = media_record(value).unwrap();
        assert_eq!(record.video_url.as_deref(), Some("v"));
        assert_eq!(record.image_url.as_deref(), Some("i"));
    }

    #[test]
    fn test_media_record_human_readable_keys() {
        let value = json!([{"Video URL": "v", "Image URL": "i"}]);

        let record = media_record(value).unwrap();
        assert_eq!(record.video_url.as_deref(), Some("v"));
        assert_eq!(record.image_url.as_deref(), Some("i"));
    }

    #[test]
    fn test_media_record_camel_case_wins_when_both_present() {
        let value = json!({"videoUrl": "camel", "Video URL": "human"});

        let record = media_record(value).unwrap();
        assert_eq!(record.video_url.as_deref(), Some("camel"));
    }

    #[test]
    fn test_media_record_partial() {
        let record = media_record(json!({"videoUrl": "v"})).unwrap();
        assert_eq!(record.video_url.as_deref(), Some("v"));
        assert!(record.image_url.is_none());
    }
}

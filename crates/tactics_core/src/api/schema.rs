//! JSON Schema export for the request/response surface

use schemars::schema_for;

use super::json_api::{EvaluationRequest, EvaluationResponse, PresetRequest};
use crate::engine::EngineTuning;
use crate::error::Result;
use crate::tactics::formation_meta::CounterPreset;

pub fn request_schema_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&schema_for!(EvaluationRequest))?)
}

pub fn response_schema_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&schema_for!(EvaluationResponse))?)
}

pub fn preset_request_schema_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&schema_for!(PresetRequest))?)
}

pub fn preset_schema_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&schema_for!(CounterPreset))?)
}

pub fn tuning_schema_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&schema_for!(EngineTuning))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_request_schema_carries_rating_range() {
        let schema: Value = serde_json::from_str(&request_schema_json().unwrap()).unwrap();
        let team = &schema["definitions"]["TeamProfile"]["properties"]["overall_rating"];
        assert_eq!(team["minimum"], 40.0);
        assert_eq!(team["maximum"], 99.0);
    }

    #[test]
    fn test_schemas_are_objects() {
        for json in [
            response_schema_json().unwrap(),
            preset_request_schema_json().unwrap(),
            preset_schema_json().unwrap(),
            tuning_schema_json().unwrap(),
        ] {
            let v: Value = serde_json::from_str(&json).unwrap();
            assert!(v.is_object());
            assert!(v.get("title").is_some());
        }
    }
}

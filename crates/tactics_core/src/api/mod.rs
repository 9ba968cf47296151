pub mod json_api;
pub mod schema;

mod tuning_env;

pub use json_api::{
    counter_preset, counter_preset_json, evaluate_batch_json, evaluate_batch_json_with,
    evaluate_json, evaluate_json_with, evaluate_request, EvaluationBody, EvaluationRequest,
    EvaluationResponse, PresetRequest, ResultView, SCHEMA_VERSION,
};
pub use schema::{
    preset_request_schema_json, preset_schema_json, request_schema_json, response_schema_json,
    tuning_schema_json,
};
pub use tuning_env::{calculator_from_env, shared_calculator, tuning_from_env, TUNING_PATH_ENV};

use std::env;

use once_cell::sync::OnceCell;

use crate::engine::{EngineTuning, TacticsCalculator, TuningError};

pub const TUNING_PATH_ENV: &str = "TACTICS_TUNING_PATH";

static SHARED_CALCULATOR: OnceCell<TacticsCalculator> = OnceCell::new();

/// Tuning named by `TACTICS_TUNING_PATH`, or the canonical tuning when unset
pub fn tuning_from_env() -> Result<EngineTuning, TuningError> {
    let Ok(path) = env::var(TUNING_PATH_ENV) else {
        return Ok(EngineTuning::default());
    };

    let path = path.trim();
    if path.is_empty() {
        return Ok(EngineTuning::default());
    }

    tracing::info!(path, "loading engine tuning from {TUNING_PATH_ENV}");
    EngineTuning::load(path)
}

pub fn calculator_from_env() -> Result<TacticsCalculator, TuningError> {
    TacticsCalculator::with_tuning(tuning_from_env()?)
}

/// Process-wide calculator built from the environment on first use.
///
/// The tuning file is read once; later changes to the file or to
/// `TACTICS_TUNING_PATH` are not picked up. A failed load is not cached.
pub fn shared_calculator() -> Result<&'static TacticsCalculator, TuningError> {
    SHARED_CALCULATOR.get_or_try_init(calculator_from_env)
}

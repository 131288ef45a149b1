//! Options mapping resolution.

use datespace_domain::constants::{OPTIONS_FIELD, ROUND_FIELD};
use datespace_domain::{DateSpaceError, GenerationOptions, Result, RoundMode};
use serde_json::Value;

/// Resolve a raw options mapping.
///
/// Omitted options, or a mapping without `round`, resolve to the defaults.
/// Unrecognized keys are ignored.
///
/// # Errors
///
/// - [`DateSpaceError::Type`] when `raw` is not a mapping or `round` is not a
///   string
/// - [`DateSpaceError::Validation`] when `round` is not a known keyword
pub fn resolve_options(raw: Option<&Value>) -> Result<GenerationOptions> {
    let Some(raw) = raw else {
        return Ok(GenerationOptions::default());
    };
    let Value::Object(map) = raw else {
        return Err(DateSpaceError::type_error(OPTIONS_FIELD, "options must be a mapping"));
    };
    let Some(round) = map.get(ROUND_FIELD) else {
        return Ok(GenerationOptions::default());
    };
    let Value::String(keyword) = round else {
        return Err(DateSpaceError::type_error(ROUND_FIELD, "round option must be a string"));
    };

    keyword
        .parse::<RoundMode>()
        .map(GenerationOptions::with_round)
        .map_err(|_| {
            DateSpaceError::validation(
                ROUND_FIELD,
                format!(
                    "unrecognized round option '{keyword}'. Must be one of [{}]",
                    RoundMode::KEYWORDS.join(",")
                ),
            )
        })
}

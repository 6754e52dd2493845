//! Control-plane / data-plane classification of API operations
//!
//! Operations without controller source evidence cannot be typed from code,
//! so their names are sent to an external text-classification oracle. Input
//! is batched to bound each request's payload; batches are issued strictly in
//! sequence and their results concatenated in batch order, so a classify call
//! is deterministic up to the oracle's own replies.

mod oracle;
mod prompt;

pub use oracle::{ChatCompletionsOracle, ClassificationOracle};
pub use prompt::build_classification_input;

use ack_api_extractor_common::{
    ClassificationResult, ExtractorError, Operation, OperationType, Result,
};
use std::collections::HashSet;

/// Upper bound on operation names per oracle request
pub const MAX_OPERATIONS_PER_BATCH: usize = 100;

/// Classify `operation_names` for `service` through `oracle`
pub fn classify(
    oracle: &dyn ClassificationOracle,
    service: &str,
    operation_names: &[String],
) -> Result<ClassificationResult> {
    classify_in_batches(oracle, service, operation_names, MAX_OPERATIONS_PER_BATCH)
}

fn classify_in_batches(
    oracle: &dyn ClassificationOracle,
    service: &str,
    operation_names: &[String],
    batch_size: usize,
) -> Result<ClassificationResult> {
    let mut combined = ClassificationResult::default();
    if operation_names.is_empty() {
        return Ok(combined);
    }

    let total_batches = operation_names.len().div_ceil(batch_size);
    for (index, batch) in operation_names.chunks(batch_size).enumerate() {
        eprintln!(
            "Classifying batch {}/{} ({} operations)",
            index + 1,
            total_batches,
            batch.len()
        );

        let input = prompt::build_classification_input(service, batch);
        let reply = oracle.invoke(prompt::INSTRUCTION, &input)?;
        let result = parse_classification_reply(&reply)?;

        combined.control_plane.extend(result.control_plane);
        combined.data_plane.extend(result.data_plane);
    }

    Ok(combined)
}

/// Parse the oracle's free-text reply
///
/// The reply must contain exactly one well-formed JSON object, bounded by the
/// first `{` and the last `}`; any text outside those bounds is ignored.
pub fn parse_classification_reply(reply: &str) -> Result<ClassificationResult> {
    let trimmed = reply.trim();

    let start = trimmed.find('{').ok_or_else(|| {
        ExtractorError::ClassificationParse(format!("no JSON object in reply: {trimmed}"))
    })?;
    let end = trimmed
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| {
            ExtractorError::ClassificationParse(format!("incomplete JSON object in reply: {trimmed}"))
        })?;

    let span = &trimmed[start..=end];
    serde_json::from_str(span)
        .map_err(|e| ExtractorError::ClassificationParse(format!("{e}; reply span: {span}")))
}

/// Apply a classification result onto operations
///
/// Types are assigned by membership in the result's name sets. A name the
/// oracle left out of both sets defaults to data plane.
pub fn apply_classification(operations: &mut [Operation], classification: &ClassificationResult) {
    let control_plane: HashSet<&str> = classification
        .control_plane
        .iter()
        .map(String::as_str)
        .collect();
    let data_plane: HashSet<&str> = classification
        .data_plane
        .iter()
        .map(String::as_str)
        .collect();

    for op in operations.iter_mut() {
        op.operation_type = if control_plane.contains(op.name.as_str()) {
            OperationType::ControlPlane
        } else if data_plane.contains(op.name.as_str()) {
            OperationType::DataPlane
        } else {
            // Names missing from the reply default to data plane.
            OperationType::DataPlane
        };
    }
}

//! Smithy model loading

use crate::types::SmithyModel;
use ack_api_extractor_common::{ExtractorError, Result};
use std::fs;
use std::path::Path;

impl SmithyModel {
    /// Load a Smithy model from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ExtractorError::ModelParse(format!(
                "failed to read model file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content).map_err(|e| {
            ExtractorError::ModelParse(format!("{}: {}", path.as_ref().display(), e))
        })
    }

    /// Parse a Smithy model from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ExtractorError::ModelParse(format!("invalid Smithy JSON: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_model() {
        let json = r#"{
            "smithy": "2.0",
            "shapes": {
                "com.example#MyService": {
                    "type": "service",
                    "version": "2023-01-01",
                    "operations": []
                }
            }
        }"#;

        let model = SmithyModel::from_json(json).unwrap();
        assert_eq!(model.smithy.as_deref(), Some("2.0"));
        assert_eq!(model.shapes.len(), 1);
    }

    #[test]
    fn test_parse_error_is_model_parse() {
        let err = SmithyModel::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ExtractorError::ModelParse(_)));
    }

    #[test]
    fn test_missing_file_is_model_parse() {
        let err = SmithyModel::from_file("/nonexistent/model.json").unwrap_err();
        assert!(matches!(err, ExtractorError::ModelParse(_)));
    }
}

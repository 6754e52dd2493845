//! Smithy JSON AST type definitions
//!
//! These types represent the structure of Smithy JSON model files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root Smithy model document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmithyModel {
    /// Smithy version (e.g., "2.0"); absent in some older model dumps
    #[serde(default)]
    pub smithy: Option<String>,

    /// Shape definitions (services, operations, structures, etc.)
    #[serde(default)]
    pub shapes: HashMap<String, Shape>,
}

/// A Smithy shape
///
/// Only service and operation shapes carry fields the extractor reads; every
/// other shape kind collapses into `Other`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    /// Service definition
    Service {
        /// API version
        #[serde(default)]
        version: Option<String>,

        /// Operations exposed by this service, in declaration order
        #[serde(default)]
        operations: Vec<ShapeReference>,
    },

    /// Operation definition
    Operation {
        /// Input shape
        #[serde(default)]
        input: Option<ShapeReference>,

        /// Output shape
        #[serde(default)]
        output: Option<ShapeReference>,
    },

    /// Fallback for all other shape types
    #[serde(other)]
    Other,
}

/// Reference to another shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeReference {
    /// Target shape ID (e.g., "com.amazonaws.dynamodb#CreateTable")
    pub target: String,
}

impl SmithyModel {
    /// Get a shape by its ID
    pub fn get_shape(&self, shape_id: &str) -> Option<&Shape> {
        self.shapes.get(shape_id)
    }

    /// Find the service shape carrying a non-empty operation list
    ///
    /// Shape IDs are visited in lexicographic order so the choice is stable
    /// even though the underlying mapping is unordered.
    pub fn find_service(&self) -> Option<(&String, &Shape)> {
        let mut shape_ids: Vec<&String> = self.shapes.keys().collect();
        shape_ids.sort();

        shape_ids.into_iter().find_map(|id| match &self.shapes[id] {
            shape @ Shape::Service { operations, .. } if !operations.is_empty() => {
                Some((id, shape))
            }
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_shape_kinds_collapse_to_other() {
        let json = r#"{
            "shapes": {
                "com.example#Name": { "type": "string" },
                "com.example#Tags": {
                    "type": "map",
                    "key": { "target": "com.example#Name" },
                    "value": { "target": "com.example#Name" }
                }
            }
        }"#;

        let model: SmithyModel = serde_json::from_str(json).unwrap();
        assert!(matches!(
            model.get_shape("com.example#Name"),
            Some(Shape::Other)
        ));
        assert!(matches!(
            model.get_shape("com.example#Tags"),
            Some(Shape::Other)
        ));
    }
}

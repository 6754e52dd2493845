//! Per-service operation metadata
//!
//! These types form the operations document written for each service. Summary
//! counts are always derived from the finished operation list by
//! [`ServiceOperationSet::from_operations`]; nothing increments them
//! independently, so the counts can never drift from the data they describe.

use serde::{Deserialize, Serialize};

/// Classification of an API operation by its primary purpose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    /// Not classified (classification disabled or not yet applied)
    #[default]
    Unclassified,

    /// Manages infrastructure: resource lifecycle, configuration, access
    ControlPlane,

    /// Works with data stored within existing resources
    DataPlane,

    /// Classification was attempted for this operation and failed
    Unknown,
}

/// Call site implementing an operation, relative to the controller root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Path relative to the controller directory (e.g. `pkg/resource/table/sdk.go`)
    pub file: String,

    /// 1-based line number
    pub line: u32,
}

/// A single API operation together with its implementation evidence
///
/// Presence of `source_location` is the sole signal that the operation is
/// implemented by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,

    #[serde(rename = "type")]
    pub operation_type: OperationType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_location: Option<SourceLocation>,
}

impl Operation {
    /// Create an operation that has not been located or classified yet
    pub fn unclassified(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operation_type: OperationType::Unclassified,
            source_location: None,
        }
    }

    /// Whether the controller implements this operation
    pub fn is_supported(&self) -> bool {
        self.source_location.is_some()
    }
}

/// All operations extracted for one service, with derived summary counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceOperationSet {
    pub service_name: String,
    pub total_operations: usize,
    pub supported_operations: usize,
    pub control_plane_operations: usize,
    pub supported_control_plane_operations: usize,
    pub operations: Vec<Operation>,
}

impl ServiceOperationSet {
    /// Build the set from a finished operation list
    ///
    /// All four counts are computed here by scanning the list, so they hold on
    /// every code path that produces a set.
    pub fn from_operations(service_name: impl Into<String>, operations: Vec<Operation>) -> Self {
        let supported = operations.iter().filter(|op| op.is_supported()).count();
        let control_plane = operations
            .iter()
            .filter(|op| op.operation_type == OperationType::ControlPlane)
            .count();
        let supported_control_plane = operations
            .iter()
            .filter(|op| op.operation_type == OperationType::ControlPlane && op.is_supported())
            .count();

        Self {
            service_name: service_name.into(),
            total_operations: operations.len(),
            supported_operations: supported,
            control_plane_operations: control_plane,
            supported_control_plane_operations: supported_control_plane,
            operations,
        }
    }
}

/// Operation names returned by the classification oracle, split by category
///
/// A name absent from both lists is treated as data plane when the result is
/// applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    #[serde(default)]
    pub control_plane: Vec<String>,

    #[serde(default)]
    pub data_plane: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(name: &str, operation_type: OperationType, supported: bool) -> Operation {
        Operation {
            name: name.to_string(),
            operation_type,
            source_location: supported.then(|| SourceLocation {
                file: "pkg/sdk.go".to_string(),
                line: 1,
            }),
        }
    }

    #[test]
    fn test_counts_derived_from_operations() {
        let set = ServiceOperationSet::from_operations(
            "dynamodb",
            vec![
                op("CreateTable", OperationType::ControlPlane, true),
                op("DeleteTable", OperationType::ControlPlane, false),
                op("Query", OperationType::DataPlane, false),
                op("Scan", OperationType::Unclassified, false),
            ],
        );

        assert_eq!(set.total_operations, 4);
        assert_eq!(set.supported_operations, 1);
        assert_eq!(set.control_plane_operations, 2);
        assert_eq!(set.supported_control_plane_operations, 1);
    }

    #[test]
    fn test_operation_type_json_names() {
        let json = serde_json::to_string(&OperationType::ControlPlane).unwrap();
        assert_eq!(json, r#""control_plane""#);

        let parsed: OperationType = serde_json::from_str(r#""data_plane""#).unwrap();
        assert_eq!(parsed, OperationType::DataPlane);
    }

    #[test]
    fn test_missing_source_location_omitted() {
        let json = serde_json::to_string(&Operation::unclassified("GetItem")).unwrap();
        assert!(!json.contains("source_location"));
        assert!(json.contains(r#""type":"unclassified""#));
    }

    #[test]
    fn test_classification_result_tolerates_missing_field() {
        let parsed: ClassificationResult =
            serde_json::from_str(r#"{"control_plane":["CreateTable"]}"#).unwrap();
        assert_eq!(parsed.control_plane, vec!["CreateTable".to_string()]);
        assert!(parsed.data_plane.is_empty());
    }
}

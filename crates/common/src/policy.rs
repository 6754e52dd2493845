//! IAM policy document model
//!
//! Field names follow the IAM policy grammar capitalization so serialized
//! documents can be attached to roles verbatim.

use serde::{Deserialize, Serialize};

/// Policy language version emitted for every generated policy
pub const POLICY_VERSION: &str = "2012-10-17";

/// An IAM policy document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IamPolicy {
    #[serde(rename = "Version")]
    pub version: String,

    #[serde(rename = "Statement")]
    pub statement: Vec<PolicyStatement>,
}

/// A single IAM policy statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyStatement {
    /// "Allow" or "Deny"
    #[serde(rename = "Effect")]
    pub effect: String,

    #[serde(rename = "Action")]
    pub action: Vec<String>,

    /// Resource ARN pattern; a string or a structured pattern
    #[serde(rename = "Resource")]
    pub resource: serde_json::Value,

    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_json_capitalization() {
        let policy = IamPolicy {
            version: POLICY_VERSION.to_string(),
            statement: vec![PolicyStatement {
                effect: "Allow".to_string(),
                action: vec!["dynamodb:CreateTable".to_string()],
                resource: serde_json::Value::String("arn:aws:dynamodb:*:*:*".to_string()),
                condition: None,
            }],
        };

        let json = serde_json::to_string(&policy).unwrap();
        assert!(json.contains(r#""Version":"2012-10-17""#));
        assert!(json.contains(r#""Statement""#));
        assert!(json.contains(r#""Effect":"Allow""#));
        assert!(json.contains(r#""Action""#));
        assert!(json.contains(r#""Resource""#));
        assert!(!json.contains("Condition"));
    }
}

//! Least-privilege IAM policy synthesis

use ack_api_extractor_analyzer::locator;
use ack_api_extractor_common::{
    ExtractorError, IamPolicy, Operation, PolicyStatement, Result, POLICY_VERSION,
};
use std::path::Path;

/// Synthesize one IAM policy covering the implemented operations of `service`
///
/// Only operations with a source location contribute actions, in list order.
/// The action namespace is the controller's implementation model name when
/// the generator config resolves, otherwise the raw service identifier.
pub fn synthesize_policy(
    root: &Path,
    service: &str,
    operations: &[Operation],
) -> Result<IamPolicy> {
    let namespace = action_namespace(root, service);

    let actions: Vec<String> = operations
        .iter()
        .filter(|op| op.is_supported())
        .map(|op| format!("{namespace}:{}", op.name))
        .collect();

    if actions.is_empty() {
        return Err(ExtractorError::NoSupportedOperations(service.to_string()));
    }

    Ok(IamPolicy {
        version: POLICY_VERSION.to_string(),
        statement: vec![PolicyStatement {
            effect: "Allow".to_string(),
            action: actions,
            resource: serde_json::Value::String(resource_pattern(&namespace)),
            condition: None,
        }],
    })
}

fn action_namespace(root: &Path, service: &str) -> String {
    locator::resolve_implementation_name(root, service)
        .unwrap_or_else(|_| service.to_string())
        .to_lowercase()
}

/// Resource ARN pattern for an action namespace
///
/// A fixed override table, not an inference: S3 ARNs are global, IAM is a
/// global service without a region segment, everything else gets the generic
/// service-scoped wildcard.
pub fn resource_pattern(namespace: &str) -> String {
    match namespace {
        "s3" => "*".to_string(),
        "iam" => "arn:aws:iam::*:*".to_string(),
        _ => format!("arn:aws:{namespace}:*:*:*"),
    }
}

/// Validate a synthesized policy document
///
/// Callers treat a failure here as a warning: operation extraction has
/// already succeeded by the time a policy is synthesized.
pub fn validate_policy(policy: &IamPolicy) -> Result<()> {
    serde_json::to_string(policy)
        .map_err(|e| ExtractorError::PolicyValidation(format!("policy does not serialize: {e}")))?;

    if policy.version.is_empty() {
        return Err(ExtractorError::PolicyValidation(
            "policy Version is required".to_string(),
        ));
    }

    if policy.statement.is_empty() {
        return Err(ExtractorError::PolicyValidation(
            "policy must have at least one statement".to_string(),
        ));
    }

    for (index, statement) in policy.statement.iter().enumerate() {
        if statement.effect != "Allow" && statement.effect != "Deny" {
            return Err(ExtractorError::PolicyValidation(format!(
                "statement {index}: Effect must be 'Allow' or 'Deny'"
            )));
        }

        if statement.action.is_empty() {
            return Err(ExtractorError::PolicyValidation(format!(
                "statement {index}: Action is required"
            )));
        }

        if statement.resource.is_null() {
            return Err(ExtractorError::PolicyValidation(format!(
                "statement {index}: Resource is required"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ack_api_extractor_common::{OperationType, SourceLocation};

    fn supported(name: &str) -> Operation {
        Operation {
            name: name.to_string(),
            operation_type: OperationType::ControlPlane,
            source_location: Some(SourceLocation {
                file: "pkg/sdk.go".to_string(),
                line: 10,
            }),
        }
    }

    #[test]
    fn test_actions_cover_supported_operations_only() {
        let root = tempfile::tempdir().unwrap();
        let operations = vec![
            supported("CreateTable"),
            Operation::unclassified("DeleteTable"),
            supported("UpdateTable"),
        ];

        let policy = synthesize_policy(root.path(), "dynamodb", &operations).unwrap();
        assert_eq!(policy.statement.len(), 1);
        assert_eq!(
            policy.statement[0].action,
            vec!["dynamodb:CreateTable", "dynamodb:UpdateTable"]
        );
        assert_eq!(policy.statement[0].effect, "Allow");
        assert_eq!(
            policy.statement[0].resource,
            serde_json::Value::String("arn:aws:dynamodb:*:*:*".to_string())
        );
    }

    #[test]
    fn test_namespace_resolves_through_generator_config() {
        let root = tempfile::tempdir().unwrap();
        let controller = root.path().join("documentdb-controller");
        std::fs::create_dir(&controller).unwrap();
        std::fs::write(
            controller.join("generator.yaml"),
            "sdk_names:\n  model_name: DocDB\n",
        )
        .unwrap();

        let policy =
            synthesize_policy(root.path(), "documentdb", &[supported("CreateDBCluster")]).unwrap();
        assert_eq!(policy.statement[0].action, vec!["docdb:CreateDBCluster"]);
    }

    #[test]
    fn test_no_supported_operations() {
        let root = tempfile::tempdir().unwrap();
        let err = synthesize_policy(
            root.path(),
            "dynamodb",
            &[Operation::unclassified("CreateTable")],
        )
        .unwrap_err();

        assert!(matches!(err, ExtractorError::NoSupportedOperations(_)));
    }

    #[test]
    fn test_resource_pattern_override_table() {
        assert_eq!(resource_pattern("s3"), "*");
        assert_eq!(resource_pattern("iam"), "arn:aws:iam::*:*");
        assert_eq!(resource_pattern("lambda"), "arn:aws:lambda:*:*:*");
    }

    #[test]
    fn test_validate_rejects_bad_effect() {
        let mut policy = IamPolicy {
            version: POLICY_VERSION.to_string(),
            statement: vec![PolicyStatement {
                effect: "Permit".to_string(),
                action: vec!["s3:GetObject".to_string()],
                resource: serde_json::Value::String("*".to_string()),
                condition: None,
            }],
        };
        assert!(matches!(
            validate_policy(&policy),
            Err(ExtractorError::PolicyValidation(_))
        ));

        policy.statement[0].effect = "Deny".to_string();
        assert!(validate_policy(&policy).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let valid = IamPolicy {
            version: POLICY_VERSION.to_string(),
            statement: vec![PolicyStatement {
                effect: "Allow".to_string(),
                action: vec!["s3:GetObject".to_string()],
                resource: serde_json::Value::String("*".to_string()),
                condition: None,
            }],
        };

        let mut no_version = valid.clone();
        no_version.version = String::new();
        assert!(validate_policy(&no_version).is_err());

        let mut no_statements = valid.clone();
        no_statements.statement.clear();
        assert!(validate_policy(&no_statements).is_err());

        let mut no_actions = valid.clone();
        no_actions.statement[0].action.clear();
        assert!(validate_policy(&no_actions).is_err());

        let mut null_resource = valid;
        null_resource.statement[0].resource = serde_json::Value::Null;
        assert!(validate_policy(&null_resource).is_err());
    }
}

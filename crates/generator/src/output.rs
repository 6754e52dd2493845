//! JSON artifact writers

use ack_api_extractor_common::{IamPolicy, Result, ServiceOperationSet};
use std::fs;
use std::path::Path;

/// Write a service operations document as pretty-printed JSON
pub fn write_operations_json(set: &ServiceOperationSet, path: &Path) -> Result<()> {
    write_pretty_json(&serde_json::to_string_pretty(set)?, path)
}

/// Write an IAM policy document as pretty-printed JSON
pub fn write_policy_json(policy: &IamPolicy, path: &Path) -> Result<()> {
    write_pretty_json(&serde_json::to_string_pretty(policy)?, path)
}

fn write_pretty_json(json: &str, path: &Path) -> Result<()> {
    let mut data = json.to_string();
    data.push('\n');
    fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ack_api_extractor_common::Operation;

    #[test]
    fn test_written_operations_document_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dynamodb-operations.json");
        let set = ServiceOperationSet::from_operations(
            "dynamodb",
            vec![Operation::unclassified("CreateTable")],
        );

        write_operations_json(&set, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.ends_with('\n'));
        let parsed: ServiceOperationSet = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, set);
    }
}

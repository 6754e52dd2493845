//! Service model location under the api-models-aws checkout

use crate::locator;
use ack_api_extractor_common::{ExtractorError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MODELS_REPO_DIR: &str = "api-models-aws";
const MODELS_SUBDIR: &str = "models";
const SERVICE_SUBDIR: &str = "service";

/// First model JSON file under `<root>/api-models-aws/models/<name>/service`,
/// in pinned lexicographic order
pub fn find_model_file(root: &Path, model_dir_name: &str) -> Option<PathBuf> {
    let service_dir = root
        .join(MODELS_REPO_DIR)
        .join(MODELS_SUBDIR)
        .join(model_dir_name)
        .join(SERVICE_SUBDIR);
    if !service_dir.is_dir() {
        return None;
    }

    WalkDir::new(&service_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .find(|entry| {
            entry.file_type().is_file()
                && entry.path().extension().and_then(|ext| ext.to_str()) == Some("json")
        })
        .map(|entry| entry.into_path())
}

/// Locate the model file for `service`
///
/// When the service identifier has no model directory of its own, the
/// controller's generator.yaml names the implementation model directory to
/// try instead (controller and model directory names diverge for some
/// services, e.g. a `documentdb-controller` backed by the `docdb` model).
pub fn locate_model(root: &Path, service: &str) -> Result<PathBuf> {
    if let Some(path) = find_model_file(root, service) {
        return Ok(path);
    }

    match locator::resolve_implementation_name(root, service) {
        Ok(model_name) => find_model_file(root, &model_name).ok_or_else(|| {
            ExtractorError::ModelNotFound(format!(
                "no model directory for service {service} or model name {model_name}"
            ))
        }),
        Err(err) => Err(ExtractorError::ModelNotFound(format!(
            "no model directory for service {service} (fallback failed: {err})"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_model(root: &Path, model_dir: &str, file_name: &str) -> PathBuf {
        let service_dir = root
            .join("api-models-aws")
            .join("models")
            .join(model_dir)
            .join("service");
        fs::create_dir_all(&service_dir).unwrap();
        let path = service_dir.join(file_name);
        fs::write(&path, "{\"shapes\":{}}").unwrap();
        path
    }

    #[test]
    fn test_find_model_file_picks_first_json_sorted() {
        let root = tempfile::tempdir().unwrap();
        write_model(root.path(), "dynamodb", "b.json");
        let first = write_model(root.path(), "dynamodb", "a.json");

        assert_eq!(find_model_file(root.path(), "dynamodb"), Some(first));
    }

    #[test]
    fn test_locate_model_direct() {
        let root = tempfile::tempdir().unwrap();
        let path = write_model(root.path(), "acm", "acm.json");

        assert_eq!(locate_model(root.path(), "acm").unwrap(), path);
    }

    #[test]
    fn test_locate_model_via_generator_config_fallback() {
        let root = tempfile::tempdir().unwrap();
        let path = write_model(root.path(), "docdb", "docdb.json");
        let controller = root.path().join("documentdb-controller");
        fs::create_dir(&controller).unwrap();
        fs::write(
            controller.join("generator.yaml"),
            "sdk_names:\n  model_name: docdb\n",
        )
        .unwrap();

        assert_eq!(locate_model(root.path(), "documentdb").unwrap(), path);
    }

    #[test]
    fn test_locate_model_missing_everywhere() {
        let root = tempfile::tempdir().unwrap();

        let err = locate_model(root.path(), "nosuch").unwrap_err();
        assert!(matches!(err, ExtractorError::ModelNotFound(_)));
    }
}

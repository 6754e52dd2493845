//! Controller checkout location and generator config resolution
//!
//! Controllers live in sibling directories named `<service>-controller`. Each
//! carries a `generator.yaml` whose `sdk_names.model_name` field names the
//! service's model directory when it diverges from the controller name.

use ack_api_extractor_common::{ExtractorError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Per-controller configuration file name
const GENERATOR_CONFIG_FILE: &str = "generator.yaml";

/// generator.yaml, reduced to the fields the extractor reads
#[derive(Debug, Default, Deserialize)]
struct GeneratorConfig {
    #[serde(default)]
    sdk_names: SdkNames,
}

#[derive(Debug, Default, Deserialize)]
struct SdkNames {
    #[serde(default)]
    model_name: Option<String>,
}

/// Path of the controller checkout for `service`, if one exists
///
/// A missing controller is a normal state (the service is not implemented
/// yet), so this returns `None` rather than an error.
pub fn find_controller(root: &Path, service: &str) -> Option<PathBuf> {
    let controller = root.join(format!("{service}-controller"));
    controller.is_dir().then_some(controller)
}

/// Resolve the implementation model name declared in the controller's
/// generator.yaml
pub fn resolve_implementation_name(root: &Path, service: &str) -> Result<String> {
    let controller = find_controller(root, service).ok_or_else(|| {
        ExtractorError::ConfigNotFound(format!(
            "controller directory not found for service {service}"
        ))
    })?;

    let config_path = controller.join(GENERATOR_CONFIG_FILE);
    if !config_path.is_file() {
        return Err(ExtractorError::ConfigNotFound(format!(
            "{GENERATOR_CONFIG_FILE} not found in {}",
            controller.display()
        )));
    }

    let content = fs::read_to_string(&config_path)?;
    let config: GeneratorConfig = serde_yaml::from_str(&content)
        .map_err(|e| ExtractorError::ConfigParse(format!("{}: {e}", config_path.display())))?;

    config
        .sdk_names
        .model_name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            ExtractorError::ConfigParse(format!(
                "sdk_names.model_name not set in {}",
                config_path.display()
            ))
        })
}

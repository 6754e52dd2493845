//! Operation extraction pipeline for a single service

use crate::{locator, model, scanner::SourceScanner};
use ack_api_extractor_classifier::{self as classifier, ChatCompletionsOracle, ClassificationOracle};
use ack_api_extractor_common::{
    ClassificationResult, ExtractorError, Operation, OperationType, Result, ServiceOperationSet,
};
use ack_api_extractor_parser::{operation_names, SmithyModel};
use std::path::PathBuf;

/// How operations with controller source evidence are typed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImplementedTypePolicy {
    /// Type implemented operations as control plane without consulting the
    /// oracle; only unimplemented operations are sent for classification.
    /// Keeps oracle traffic bounded by the unimplemented subset.
    #[default]
    AssumeControlPlane,

    /// Send every operation to the oracle, implemented or not
    AlwaysClassify,
}

/// Extracts the operation set for one service
///
/// `root` is the directory holding the sibling `api-models-aws` checkout and
/// `<service>-controller` directories.
pub struct OperationExtractor {
    root: PathBuf,
    scanner: SourceScanner,
    implemented_policy: ImplementedTypePolicy,
    oracle: Option<Box<dyn ClassificationOracle>>,
}

impl OperationExtractor {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            scanner: SourceScanner::default(),
            implemented_policy: ImplementedTypePolicy::default(),
            oracle: None,
        }
    }

    /// Replace the default call-site scanner
    pub fn with_scanner(mut self, scanner: SourceScanner) -> Self {
        self.scanner = scanner;
        self
    }

    /// Change how implemented operations are typed
    pub fn with_implemented_policy(mut self, policy: ImplementedTypePolicy) -> Self {
        self.implemented_policy = policy;
        self
    }

    /// Use a specific classification oracle instead of building one from the
    /// environment on first use
    pub fn with_oracle(mut self, oracle: Box<dyn ClassificationOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Extract all operations for `service`
    ///
    /// Every operation named by the service model is scanned for controller
    /// source evidence. Implemented operations are finalized according to the
    /// [`ImplementedTypePolicy`]; the rest form a pending bucket that is sent
    /// to the classification oracle when `classify` is set, or appended
    /// unclassified when it is not. A classifier failure downgrades the
    /// pending bucket to [`OperationType::Unknown`] and is reported, never
    /// fatal. Summary counts are derived from the finished list on every
    /// path.
    pub fn extract(&self, service: &str, classify: bool) -> Result<ServiceOperationSet> {
        let model_path = model::locate_model(&self.root, service)?;
        let smithy = SmithyModel::from_file(&model_path)?;
        let names = operation_names(&smithy);
        if names.is_empty() {
            return Err(ExtractorError::NoOperationsFound(service.to_string()));
        }

        let controller = locator::find_controller(&self.root, service);

        let mut finished = Vec::new();
        let mut pending = Vec::new();
        for name in names {
            let source_location = controller
                .as_deref()
                .and_then(|dir| self.scanner.find_operation(dir, &name));

            let implemented = source_location.is_some();
            if implemented && self.implemented_policy == ImplementedTypePolicy::AssumeControlPlane {
                finished.push(Operation {
                    name,
                    operation_type: OperationType::ControlPlane,
                    source_location,
                });
            } else {
                pending.push(Operation {
                    name,
                    operation_type: OperationType::Unclassified,
                    source_location,
                });
            }
        }

        if classify && !pending.is_empty() {
            let pending_names: Vec<String> = pending.iter().map(|op| op.name.clone()).collect();
            match self.classify_names(service, &pending_names) {
                Ok(result) => classifier::apply_classification(&mut pending, &result),
                Err(err) => {
                    eprintln!("Warning: failed to classify operations for {service}: {err}");
                    for op in &mut pending {
                        op.operation_type = OperationType::Unknown;
                    }
                }
            }
        }

        finished.append(&mut pending);
        Ok(ServiceOperationSet::from_operations(service, finished))
    }

    fn classify_names(&self, service: &str, names: &[String]) -> Result<ClassificationResult> {
        match &self.oracle {
            Some(oracle) => classifier::classify(oracle.as_ref(), service, names),
            None => {
                let oracle = ChatCompletionsOracle::from_env()?;
                classifier::classify(&oracle, service, names)
            }
        }
    }
}

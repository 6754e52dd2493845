//! Common types and utilities for the ACK API Extractor
//!
//! This crate contains the shared data structures, error types, and utilities
//! used across the parser, analyzer, classifier, and CLI components.

mod operations;
mod policy;

pub use operations::{
    ClassificationResult, Operation, OperationType, ServiceOperationSet, SourceLocation,
};
pub use policy::{IamPolicy, PolicyStatement, POLICY_VERSION};

use thiserror::Error;

/// Errors that can occur during operation extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("Service model not found: {0}")]
    ModelNotFound(String),

    #[error("Failed to parse service model: {0}")]
    ModelParse(String),

    #[error("Generator config not found: {0}")]
    ConfigNotFound(String),

    #[error("Failed to parse generator config: {0}")]
    ConfigParse(String),

    #[error("No operations found for service {0}")]
    NoOperationsFound(String),

    #[error("Classification request failed: {0}")]
    ClassificationInvoke(String),

    #[error("Failed to parse classification reply: {0}")]
    ClassificationParse(String),

    #[error("No supported operations found for service {0}")]
    NoSupportedOperations(String),

    #[error("Invalid IAM policy: {0}")]
    PolicyValidation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for extractor operations
pub type Result<T> = std::result::Result<T, ExtractorError>;

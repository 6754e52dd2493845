//! Controller analysis for the ACK API Extractor
//!
//! This crate ties the pipeline together for one service: locate the service
//! model and the sibling controller checkout, scan the controller source for
//! operation call sites, and aggregate everything into a
//! [`ServiceOperationSet`](ack_api_extractor_common::ServiceOperationSet).
//!
//! # Examples
//!
//! ```no_run
//! use ack_api_extractor_analyzer::OperationExtractor;
//!
//! let extractor = OperationExtractor::new("..");
//! let set = extractor.extract("dynamodb", false).expect("extraction failed");
//! println!(
//!     "{}: {}/{} operations implemented",
//!     set.service_name, set.supported_operations, set.total_operations
//! );
//! ```

mod extract;
pub mod locator;
mod model;
mod patterns;
mod scanner;

pub use extract::{ImplementedTypePolicy, OperationExtractor};
pub use model::{find_model_file, locate_model};
pub use patterns::{
    default_patterns, CallSitePattern, GenericClientCall, RawSdkClientCall, RecordedApiCall,
};
pub use scanner::SourceScanner;

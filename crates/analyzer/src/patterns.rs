//! Call-site patterns for detecting operation invocations in controller code
//!
//! Each pattern anchors the operation name to one conventional call-site
//! shape, so a name never matches as a bare substring of a longer identifier
//! (`UpdateTable` must not hit `BatchUpdateTable`). The pattern list is
//! ordered; the scanner applies every pattern to each line and the first
//! matching line wins.

use regex::Regex;

/// A structural pattern matching one conventional call-site shape
pub trait CallSitePattern: Send + Sync {
    /// Regex source matching a call site for `operation`
    fn source(&self, operation: &str) -> String;
}

/// Metrics-recording invocation carrying the operation name as its second
/// argument, e.g. `rm.metrics.RecordAPICall("READ_ONE", "DescribeTable", err)`
pub struct RecordedApiCall;

impl CallSitePattern for RecordedApiCall {
    fn source(&self, operation: &str) -> String {
        format!(r#"RecordAPICall\(\s*[^,)]+,\s*"{}""#, regex::escape(operation))
    }
}

/// Direct invocation on the raw SDK client receiver, e.g.
/// `rm.sdkapi.DescribeTableWithContext(ctx, input)`
pub struct RawSdkClientCall;

impl CallSitePattern for RawSdkClientCall {
    fn source(&self, operation: &str) -> String {
        format!(r"\.sdkapi\.{}(?:WithContext)?\(", regex::escape(operation))
    }
}

/// Direct invocation on the generic client receiver, e.g.
/// `r.client.DescribeTable(ctx, input)`
pub struct GenericClientCall;

impl CallSitePattern for GenericClientCall {
    fn source(&self, operation: &str) -> String {
        format!(r"\.client\.{}\(", regex::escape(operation))
    }
}

/// Default pattern list
pub fn default_patterns() -> Vec<Box<dyn CallSitePattern>> {
    vec![
        Box::new(RecordedApiCall),
        Box::new(RawSdkClientCall),
        Box::new(GenericClientCall),
    ]
}

/// Compile the pattern list for one operation name
///
/// Returns `None` if any pattern produces an invalid regex; the scanner
/// treats that operation as not found.
pub(crate) fn compile(patterns: &[Box<dyn CallSitePattern>], operation: &str) -> Option<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| Regex::new(&pattern.source(operation)).ok())
        .collect()
}

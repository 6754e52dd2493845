//! Operation name derivation from a Smithy model

use crate::types::{Shape, SmithyModel};
use std::collections::HashSet;

/// Extract the operation name from a shape ID or target string
///
/// Returns `None` for references without exactly one `#` or with nothing
/// after it.
///
/// # Examples
/// ```
/// use ack_api_extractor_parser::extract_operation_name;
///
/// assert_eq!(
///     extract_operation_name("com.amazonaws.acm#DeleteCertificate"),
///     Some("DeleteCertificate".to_string())
/// );
/// assert_eq!(extract_operation_name("DeleteCertificate"), None);
/// assert_eq!(extract_operation_name("a#b#c"), None);
/// ```
pub fn extract_operation_name(target: &str) -> Option<String> {
    let mut parts = target.split('#');
    let _namespace = parts.next()?;
    let name = parts.next()?;
    if parts.next().is_some() || name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// Derive the deduplicated, ordered operation-name list for a model
///
/// The service shape's operation targets come first, in declaration order.
/// Models that expose operations only as top-level shapes contribute those
/// shape names afterwards, in lexicographic order so repeated runs produce
/// identical lists. The first occurrence of a name wins.
pub fn operation_names(model: &SmithyModel) -> Vec<String> {
    let mut names = Vec::new();
    let mut seen = HashSet::new();

    if let Some((_, Shape::Service { operations, .. })) = model.find_service() {
        for op_ref in operations {
            if let Some(name) = extract_operation_name(&op_ref.target) {
                if seen.insert(name.clone()) {
                    names.push(name);
                }
            }
        }
    }

    let mut shape_ids: Vec<&String> = model.shapes.keys().collect();
    shape_ids.sort();
    for id in shape_ids {
        if matches!(model.shapes[id], Shape::Operation { .. }) {
            if let Some(name) = extract_operation_name(id) {
                if seen.insert(name.clone()) {
                    names.push(name);
                }
            }
        }
    }

    names
}

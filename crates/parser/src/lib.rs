//! Smithy service model parsing
//!
//! Reads AWS Smithy JSON AST files from an api-models-aws checkout and
//! exposes the operation names a service model declares.
//!
//! ## Format
//! Smithy JSON AST contains a `shapes` mapping from shape ID
//! (`com.amazonaws.dynamodb#CreateTable`) to shape. Operation names come from
//! two places:
//! - the service shape's ordered `operations` target list, and
//! - top-level shapes of kind `operation`, for models that never list them
//!   on a service shape.
//!
//! Only the fields this pipeline reads are modeled; everything else in the
//! model passes through the [`Shape::Other`] fallback untouched.

mod operations;
mod parser;
mod types;

pub use operations::{extract_operation_name, operation_names};
pub use types::{Shape, ShapeReference, SmithyModel};

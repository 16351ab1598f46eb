//! Schema inference module
//!
//! Builds a structural [`Schema`] from a parsed JSON document.
//!
//! # Features
//!
//! - **Type Inference**: Maps JSON values onto primitive, array and object shapes
//! - **Array Sampling**: Only the leading elements of an array are inspected
//! - **Shape Merging**: Heterogeneous array elements fold into one schema
//! - **Required Tracking**: Keys missing from any sampled instance become optional
//! - **Signatures**: Canonical keys for structurally identical objects

mod inference;
mod signature;
mod types;

pub use inference::{
    infer_schema, merge_schemas, SchemaInferrer, DEFAULT_MAX_DEPTH, DEFAULT_SAMPLE_LIMIT,
};
pub use signature::signature;
pub use types::{NumberKind, ObjectSchema, Primitive, Schema};

#[cfg(test)]
mod tests;

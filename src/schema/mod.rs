//! # Schemas
//!
//! A schema is the immutable, ordered list of field types that a record
//! conforms to. Transforms consume source schemas and produce an output
//! schema; records carry the schema they were created with.
//!
//! ## Module Structure
//!
//! - `descriptor`: `Schema` and the `Segment` range type
//! - `registry`: `SchemaRegistry` for interning structurally equal schemas
//!
//! ## Equality
//!
//! Equality and hashing are structural over the type sequence. Interning
//! only saves allocations; it never changes which schemas compare equal.

mod descriptor;
mod registry;

pub use descriptor::{Schema, Segment};
pub use registry::SchemaRegistry;

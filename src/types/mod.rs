//! # Type System
//!
//! Field-level types shared by schemas, records and transforms.
//!
//! ## Module Structure
//!
//! - `data_type`: `DataType` semantic field type
//! - `value`: Owned non-null `Value`
//! - `field`: Tri-state `Field` (value / NULL / not available)
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | `DataType` | Semantic type of one schema position |
//! | `Value` | Owned field value |
//! | `Field` | Field content including NULL and not-available |
//!
//! ## Usage
//!
//! ```ignore
//! use turtuple::types::{DataType, Field, Value};
//!
//! let field: Field = 42i64.into();
//! assert!(DataType::Int4.accepts(field.value().unwrap()));
//! ```

mod data_type;
mod field;
mod value;

pub use data_type::DataType;
pub use field::{Field, FieldState};
pub use value::Value;

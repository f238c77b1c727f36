//! # turtuple - Tuple Transformation Algebra
//!
//! turtuple composes *logical* fixed-schema rows out of one or more
//! *physical* rows without copying field values unless asked to. It is the
//! layer an object-relational mapper uses to project, concatenate, splice and
//! narrow rows as they move through query compilation, joins and entity
//! materialization.
//!
//! ## Quick Start
//!
//! ```ignore
//! use turtuple::{ConcatenateTransform, DataType, Field, RecordRef, Schema, Transform, TransformMode};
//!
//! let a = Schema::new(vec![DataType::Int8, DataType::Text]);
//! let b = Schema::new(vec![DataType::Bool]);
//!
//! let left = RecordRef::from_fields(a.clone(), [Field::from(1i64), Field::from("x")])?;
//! let right = RecordRef::from_fields(b.clone(), [true])?;
//!
//! let joined = ConcatenateTransform::new(false, &a, &b)
//!     .apply(TransformMode::View, &[left, right])?;
//! assert_eq!(joined.to_string(), "(1, x, true)");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │   Transforms (Segment, CutOut, CutIn,     │
//! │   Concatenate, Combine, ReadOnly)         │
//! ├──────────────────────────────────────────┤
//! │   MapTransform + FieldMap (dual map)      │
//! ├─────────────────────┬────────────────────┤
//! │  TupleView (lazy)   │ PlainRecord (eager) │
//! ├─────────────────────┴────────────────────┤
//! │   Record contract (tri-state fields)      │
//! ├──────────────────────────────────────────┤
//! │   Schema / DataType / Value               │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Evaluation Modes
//!
//! - `Materialize`: copy into a new `PlainRecord`
//! - `View`: return a `TupleView` that reads through to the sources
//! - `Auto`: materialize when any source is already a view, else view
//!
//! ## Threading
//!
//! Schemas and transforms are immutable and `Send + Sync`. Records are
//! single-owner and not `Send`; materialize with `RecordRef::to_plain` to
//! move a row across threads.
//!
//! ## Module Overview
//!
//! - [`config`]: Sentinels and inline capacities
//! - [`error`]: `TransformError` kinds carried inside `eyre::Report`
//! - [`types`]: `DataType`, `Value`, tri-state `Field`
//! - [`schema`]: `Schema`, `Segment`, `SchemaRegistry`
//! - [`records`]: `Record` trait, `PlainRecord`, `TupleView`, `RecordRef`
//! - [`transform`]: The transform algebra and `TransformCache`

#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod records;
pub mod schema;
pub mod transform;
pub mod types;

pub use error::{transform_error, TransformError};
pub use records::{PlainRecord, Record, RecordKind, RecordRef, TupleView};
pub use schema::{Schema, SchemaRegistry, Segment};
pub use transform::{
    CombineTransform, ConcatenateTransform, CutInTransform, CutOutTransform, FieldMap, FieldRef,
    MapTransform, ReadOnlyTransform, SegmentTransform, Transform, TransformCache, TransformMode,
    READ_ONLY,
};
pub use types::{DataType, Field, FieldState, Value};

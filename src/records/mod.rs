//! # Records
//!
//! The record contract consumed and produced by the transform algebra.
//!
//! ## Record Kinds
//!
//! | Kind | Type | Storage |
//! |------|------|---------|
//! | **Plain** | `PlainRecord` | Owns one `Field` per position |
//! | **View** | `TupleView` | None, resolves through a transform on access |
//! | **ReadOnly** | `TupleView` | None, rejects every write |
//!
//! All kinds implement [`Record`] and are passed around as [`RecordRef`]
//! handles, so a view can be the source of another transform.
//!
//! ## Field States
//!
//! Reads never fail for a position inside the schema: a position may hold a
//! value, an explicit NULL, or be not available. Only out-of-range indices,
//! writes to read-only records, and writes of mistyped values are errors.
//!
//! ## Module Structure
//!
//! - `record`: `Record` trait, `RecordKind`, equality and formatting helpers
//! - `plain`: `PlainRecord` physical rows with bulk copy
//! - `handle`: `RecordRef` shared handle
//! - `view`: `TupleView` lazy rows and `SourceSet`

mod handle;
mod plain;
mod record;
mod view;

#[cfg(test)]
mod tests;

pub use handle::RecordRef;
pub use plain::PlainRecord;
pub use record::{format_record, records_equal, Record, RecordKind};
pub use view::{SourceSet, TupleView};

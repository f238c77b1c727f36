//! # Tuple Transforms
//!
//! A transform is an immutable description of how one logical record is
//! assembled from one or more source records. Every transform can evaluate
//! eagerly (copying into a fresh `PlainRecord`) or lazily (returning a
//! `TupleView` that reads through to its sources on each access).
//!
//! ## Transform Catalog
//!
//! | Transform | Sources | Output |
//! |-----------|---------|--------|
//! | `MapTransform` | N | Any `(source, field)` remapping |
//! | `SegmentTransform` | 1 | Fields `[offset, offset + length)` |
//! | `CutOutTransform` | 1 | All fields except `[offset, offset + length)` |
//! | `CutInTransform` | 2 | Second record spliced in at an index |
//! | `ConcatenateTransform` | 2 | First record followed by second, no map |
//! | `CombineTransform` | N | Records end to end, via a field map |
//! | `ReadOnlyTransform` | 1 | Same fields, writes rejected |
//!
//! ## Modes
//!
//! ```text
//! Materialize ──> PlainRecord (independent copy)
//! View ─────────> TupleView   (reads through, no copy)
//! Auto ─────────> Materialize if any source is already a view, else View
//! ```
//!
//! `Auto` bounds the depth of view-over-view chains: a transform applied to
//! a view never produces a second level of indirection.
//!
//! ## Sharing
//!
//! Transforms are `Send + Sync` and never change once built (the map
//! setters on `MapTransform` take `&mut self`). Wrap them in `Arc` to share,
//! or use [`TransformCache`] to memoize them per schema.
//!
//! ## Errors
//!
//! Construction fails with `OutOfRange` for ranges or indices outside the
//! source schema. `apply` fails with `InsufficientSources` when given fewer
//! sources than `source_count()`; extra sources are ignored.

mod cache;
mod combine;
mod concatenate;
mod cut_in;
mod cut_out;
mod field_map;
mod map;
mod read_only;
mod segment;


use std::fmt;

use eyre::Result;

use crate::error::TransformError;
use crate::records::{PlainRecord, RecordRef};
use crate::schema::Schema;

pub use cache::TransformCache;
pub use combine::CombineTransform;
pub use concatenate::ConcatenateTransform;
pub use cut_in::CutInTransform;
pub use cut_out::CutOutTransform;
pub use field_map::{FieldMap, FieldRef};
pub use map::MapTransform;
pub use read_only::{ReadOnlyTransform, READ_ONLY};
pub use segment::SegmentTransform;

/// Evaluation strategy for [`Transform::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransformMode {
    #[default]
    Auto,
    Materialize,
    View,
}

impl TransformMode {
    /// Resolves `Auto` against the supplied sources. Never returns `Auto`.
    pub fn resolve(self, sources: &[RecordRef]) -> TransformMode {
        match self {
            TransformMode::Auto if sources.iter().any(RecordRef::is_view) => {
                tracing::debug!(sources = sources.len(), "source is a view, materializing");
                TransformMode::Materialize
            }
            TransformMode::Auto => TransformMode::View,
            mode => mode,
        }
    }
}

/// Common contract of every schema-producing transform.
pub trait Transform: fmt::Debug + Send + Sync {
    fn output_schema(&self) -> &Schema;

    /// Whether every record returned by `apply` rejects writes.
    fn is_read_only(&self) -> bool;

    /// Minimum number of sources `apply` needs.
    fn source_count(&self) -> usize;

    fn apply(&self, mode: TransformMode, sources: &[RecordRef]) -> Result<RecordRef>;
}

/// Fails unless at least `required` sources were supplied; returns `required`.
pub(crate) fn check_sources(required: usize, sources: &[RecordRef]) -> Result<usize> {
    if sources.len() < required {
        return Err(TransformError::InsufficientSources {
            expected: required,
            actual: sources.len(),
        }
        .into());
    }
    Ok(required)
}

/// Wraps a materialized record, freezing it when the transform is read-only.
pub(crate) fn finish(record: PlainRecord, read_only: bool) -> RecordRef {
    let record = RecordRef::new(record);
    if read_only {
        record.to_read_only()
    } else {
        record
    }
}

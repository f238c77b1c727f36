//! # ReadOnlyTransform
//!
//! Forbids writes to a record. The transform is stateless; use the shared
//! [`READ_ONLY`] constant.
//!
//! | Mode | Result |
//! |------|--------|
//! | `View` | Read-only view over the source; a read-only source is returned as-is |
//! | `Materialize` | Plain copy of the source, wrapped read-only |
//! | `Auto` | As-is if already read-only, `Materialize` if the source is a view, else `View` |
//!
//! The output schema is always the source's schema, so this transform does
//! not implement [`Transform`](super::Transform), whose output schema is
//! fixed at construction.

use eyre::Result;

use super::TransformMode;
use crate::records::{RecordRef, TupleView};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReadOnlyTransform;

pub const READ_ONLY: ReadOnlyTransform = ReadOnlyTransform;

impl ReadOnlyTransform {
    pub fn apply(&self, mode: TransformMode, source: &RecordRef) -> Result<RecordRef> {
        if source.is_read_only() && mode != TransformMode::Materialize {
            return Ok(source.clone());
        }
        match mode.resolve(std::slice::from_ref(source)) {
            TransformMode::Materialize => {
                let copy = RecordRef::new(source.to_plain()?);
                Ok(RecordRef::new(TupleView::read_only(copy)))
            }
            _ => Ok(RecordRef::new(TupleView::read_only(source.clone()))),
        }
    }
}

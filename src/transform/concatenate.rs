//! # ConcatenateTransform
//!
//! Joins two whole records end to end. Unlike [`CombineTransform`], which
//! produces the same result through a general field map, Concatenate keeps
//! no map at all. Its view resolves field `i` by comparing it against the
//! arity of the first schema. Its materialization is two bulk copies of
//! exactly those positions.
//!
//! ```text
//! first  [a b]    second [c]
//! output [a b c]  split = 2
//! ```
//!
//! [`CombineTransform`]: super::CombineTransform

use std::fmt;

use eyre::Result;

use super::{check_sources, finish, Transform, TransformMode};
use crate::records::{PlainRecord, RecordRef, TupleView};
use crate::schema::Schema;

#[derive(Debug, Clone)]
pub struct ConcatenateTransform {
    schema: Schema,
    split: usize,
    read_only: bool,
}

impl ConcatenateTransform {
    pub fn new(read_only: bool, first: &Schema, second: &Schema) -> Self {
        tracing::debug!(
            first = first.len(),
            second = second.len(),
            read_only,
            "created concatenate transform"
        );
        Self {
            schema: first.concat(second),
            split: first.len(),
            read_only,
        }
    }

    /// Number of leading output fields taken from the first source.
    pub fn split(&self) -> usize {
        self.split
    }

    /// Copies the first `split` fields of source 0 and the remaining output
    /// fields from source 1, reading the same positions the view reads.
    pub fn materialize(&self, sources: &[RecordRef]) -> Result<PlainRecord> {
        check_sources(2, sources)?;
        let mut target = PlainRecord::new(self.schema.clone());
        let tail = self.schema.len() - self.split;
        target.copy_range_from(&*sources[0].borrow(), 0, self.split)?;
        target.copy_range_from(&*sources[1].borrow(), self.split, tail)?;
        Ok(target)
    }
}

impl Transform for ConcatenateTransform {
    fn output_schema(&self) -> &Schema {
        &self.schema
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn source_count(&self) -> usize {
        2
    }

    fn apply(&self, mode: TransformMode, sources: &[RecordRef]) -> Result<RecordRef> {
        check_sources(2, sources)?;
        match mode.resolve(&sources[..2]) {
            TransformMode::Materialize => Ok(finish(self.materialize(sources)?, self.read_only)),
            _ => Ok(RecordRef::new(TupleView::concatenated(
                self.schema.clone(),
                self.split,
                sources[0].clone(),
                sources[1].clone(),
                self.read_only,
            ))),
        }
    }
}

impl fmt::Display for ConcatenateTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Concatenate({} split at {})", self.schema, self.split)
    }
}

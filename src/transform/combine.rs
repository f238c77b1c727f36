//! # CombineTransform
//!
//! Joins whole records end to end through an explicit field map:
//!
//! ```text
//! sources  [a b] [c] [d e]
//! output   [a b c d e]
//! map      [0:0 0:1 1:0 2:0 2:1]
//! ```
//!
//! For two sources the result is field-for-field identical to
//! [`ConcatenateTransform`](super::ConcatenateTransform). Combine goes
//! through the general `MapTransform` path, so it also accepts any number
//! of sources.

use eyre::{ensure, Result};

use super::{FieldMap, FieldRef, MapTransform};
use crate::schema::Schema;

#[derive(Debug, Clone)]
pub struct CombineTransform {
    inner: MapTransform,
}

impl CombineTransform {
    pub fn new(read_only: bool, sources: &[Schema]) -> Result<Self> {
        ensure!(!sources.is_empty(), "combine requires at least one source schema");
        let schema: Schema = sources.iter().flat_map(Schema::iter).collect();
        let refs: Vec<FieldRef> = sources
            .iter()
            .enumerate()
            .flat_map(|(source, schema)| {
                (0..schema.len()).map(move |field| FieldRef::new(source, field))
            })
            .collect();
        let map = FieldMap::from_refs(&refs, schema.len())?;
        Ok(Self {
            inner: MapTransform::new(read_only, schema, map)?,
        })
    }

    /// Two-source form, equivalent to `ConcatenateTransform::new`.
    pub fn pair(read_only: bool, first: &Schema, second: &Schema) -> Result<Self> {
        Self::new(read_only, &[first.clone(), second.clone()])
    }
}

delegate_transform!(CombineTransform, "Combine");

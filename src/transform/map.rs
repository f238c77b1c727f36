//! # MapTransform - The Field-Map Core
//!
//! `MapTransform` produces a record of its output schema from one or more
//! source records according to a [`FieldMap`]. Segment, Cut-Out, Cut-In and
//! Combine are all thin constructors around it.
//!
//! ## Evaluation
//!
//! | Mode | Result |
//! |------|--------|
//! | `Materialize` | Fresh `PlainRecord`, fields copied through the map |
//! | `View` | `TupleView` sharing the map, nothing copied |
//! | `Auto` | `Materialize` if any supplied source is a view, else `View` |
//!
//! ## Arity Fast Paths
//!
//! `apply` takes a slice of sources and branches on its length. One source
//! with a single-source map copies through the flat index array. Two and
//! three sources are destructured and copied with one `copy_mapped_from`
//! call each; larger counts loop over the sources the same way.
//!
//! ## Mutation
//!
//! `set_map` and `set_single_source_map` build a complete new `FieldMap`
//! before swapping it in, so both map forms always change together. Views
//! created earlier keep the map they were created with.

use std::fmt;
use std::sync::Arc;

use eyre::{ensure, Result};

use super::{check_sources, finish, FieldMap, Transform, TransformMode};
use crate::error::TransformError;
use crate::records::{PlainRecord, RecordRef, SourceSet, TupleView};
use crate::schema::Schema;

#[derive(Debug, Clone)]
pub struct MapTransform {
    schema: Schema,
    read_only: bool,
    map: Arc<FieldMap>,
}

impl MapTransform {
    /// Creates a transform with an explicit map. The map must cover exactly
    /// the output schema.
    pub fn new(read_only: bool, schema: Schema, map: FieldMap) -> Result<Self> {
        ensure!(
            map.len() == schema.len(),
            "field map has {} entries, output schema has {} fields",
            map.len(),
            schema.len()
        );
        tracing::debug!(
            arity = schema.len(),
            sources = map.source_count(),
            read_only,
            "created map transform"
        );
        Ok(Self {
            schema,
            read_only,
            map: Arc::new(map),
        })
    }

    /// Creates a one-source transform; see [`MapTransform::set_single_source_map`].
    pub fn with_indices(read_only: bool, schema: Schema, indices: &[usize]) -> Result<Self> {
        let map = FieldMap::from_indices(indices, schema.len())?;
        Self::new(read_only, schema, map)
    }

    /// Creates a general transform; see [`MapTransform::set_map`].
    pub fn with_pairs(read_only: bool, schema: Schema, pairs: &[(usize, usize)]) -> Result<Self> {
        let map = FieldMap::from_pairs(pairs, schema.len())?;
        Self::new(read_only, schema, map)
    }

    /// Replaces the mapping with a one-source map. Output field `i` reads
    /// `indices[i]`; positions past the end of `indices` are unmapped.
    pub fn set_single_source_map(&mut self, indices: &[usize]) -> Result<()> {
        self.map = Arc::new(FieldMap::from_indices(indices, self.schema.len())?);
        Ok(())
    }

    /// Replaces the mapping with a general `(source, field)` map.
    pub fn set_map(&mut self, pairs: &[(usize, usize)]) -> Result<()> {
        self.map = Arc::new(FieldMap::from_pairs(pairs, self.schema.len())?);
        Ok(())
    }

    pub fn map(&self) -> &FieldMap {
        &self.map
    }

    pub fn single_source_map(&self) -> Option<&[usize]> {
        self.map.single_source_map()
    }

    /// Single-source convenience entry point. Fails with
    /// `SingleSourceRequired` when the map reads from several sources.
    pub fn apply_single(&self, mode: TransformMode, source: &RecordRef) -> Result<RecordRef> {
        if self.map.source_count() > 1 {
            return Err(TransformError::SingleSourceRequired {
                source_count: self.map.source_count(),
            }
            .into());
        }
        self.apply(mode, std::slice::from_ref(source))
    }

    /// Copies every mapped field of `sources` into a new plain record.
    pub fn materialize(&self, sources: &[RecordRef]) -> Result<PlainRecord> {
        let required = check_sources(self.map.source_count(), sources)?;
        let sources = &sources[..required];
        let mut target = PlainRecord::new(self.schema.clone());
        let entries = self.map.entries();

        match (self.map.single_source_map(), sources) {
            (Some(indices), [source]) => {
                target.copy_indices_from(&*source.borrow(), indices)?;
            }
            (_, [a, b]) => {
                target.copy_mapped_from(&*a.borrow(), 0, entries)?;
                target.copy_mapped_from(&*b.borrow(), 1, entries)?;
            }
            (_, [a, b, c]) => {
                target.copy_mapped_from(&*a.borrow(), 0, entries)?;
                target.copy_mapped_from(&*b.borrow(), 1, entries)?;
                target.copy_mapped_from(&*c.borrow(), 2, entries)?;
            }
            _ => {
                for (index, source) in sources.iter().enumerate() {
                    target.copy_mapped_from(&*source.borrow(), index, entries)?;
                }
            }
        }
        Ok(target)
    }

    fn view(&self, sources: &[RecordRef]) -> Result<TupleView> {
        let required = check_sources(self.map.source_count(), sources)?;
        Ok(TupleView::mapped(
            self.schema.clone(),
            Arc::clone(&self.map),
            SourceSet::from_slice(&sources[..required]),
            self.read_only,
        ))
    }
}

impl Transform for MapTransform {
    fn output_schema(&self) -> &Schema {
        &self.schema
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn source_count(&self) -> usize {
        self.map.source_count()
    }

    fn apply(&self, mode: TransformMode, sources: &[RecordRef]) -> Result<RecordRef> {
        match mode.resolve(sources) {
            TransformMode::Materialize => Ok(finish(self.materialize(sources)?, self.read_only)),
            _ => Ok(RecordRef::new(self.view(sources)?)),
        }
    }
}

impl fmt::Display for MapTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MapTransform({} <- {}", self.schema, self.map)?;
        if self.read_only {
            f.write_str(", read-only")?;
        }
        f.write_str(")")
    }
}

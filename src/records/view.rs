//! # TupleView - Lazy Transformed Records
//!
//! A `TupleView` has no field storage. It holds the sources it was built
//! over and a resolver describing where each output field comes from; every
//! `get` and `set` is translated at call time into an access on one source.
//!
//! ## Resolvers
//!
//! | Resolver | Output field `i` reads |
//! |----------|------------------------|
//! | `Mapped(map)` | `sources[map[i].source][map[i].field]`, or n/a for `NO_FIELD` |
//! | `Concat { split }` | `sources[0][i]` if `i < split`, else `sources[1][i - split]` |
//! | `Identity` | `sources[0][i]` |
//!
//! ## Source Sets
//!
//! Up to three sources are stored inline in the `One`, `Two` and `Three`
//! variants of [`SourceSet`]; more spill into `Many`.
//!
//! ## Source Mutation
//!
//! Views never copy, so a view reflects the state of its sources at the
//! time of each read. Callers that need a stable snapshot materialize.
//!
//! ## Writes
//!
//! A writable view forwards `set` to the mapped source position. Writing a
//! `NO_FIELD` position fails with `UnmappedField`; a read-only view rejects
//! every write with `ReadOnly`.

use std::fmt;
use std::sync::Arc;

use eyre::Result;

use super::record::{format_record, Record, RecordKind};
use super::RecordRef;
use crate::error::TransformError;
use crate::schema::Schema;
use crate::transform::{FieldMap, FieldRef};
use crate::types::Field;

/// Source records of a view, stored inline for the common arities.
#[derive(Debug, Clone)]
pub enum SourceSet {
    One(RecordRef),
    Two(RecordRef, RecordRef),
    Three(RecordRef, RecordRef, RecordRef),
    Many(Vec<RecordRef>),
}

impl SourceSet {
    pub fn from_slice(sources: &[RecordRef]) -> Self {
        match sources {
            [a] => SourceSet::One(a.clone()),
            [a, b] => SourceSet::Two(a.clone(), b.clone()),
            [a, b, c] => SourceSet::Three(a.clone(), b.clone(), c.clone()),
            _ => SourceSet::Many(sources.to_vec()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SourceSet::One(_) => 1,
            SourceSet::Two(_, _) => 2,
            SourceSet::Three(_, _, _) => 3,
            SourceSet::Many(sources) => sources.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, idx: usize) -> Option<&RecordRef> {
        match (self, idx) {
            (SourceSet::One(a), 0)
            | (SourceSet::Two(a, _), 0)
            | (SourceSet::Three(a, _, _), 0) => Some(a),
            (SourceSet::Two(_, b), 1) | (SourceSet::Three(_, b, _), 1) => Some(b),
            (SourceSet::Three(_, _, c), 2) => Some(c),
            (SourceSet::Many(sources), idx) => sources.get(idx),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordRef> + '_ {
        (0..self.len()).filter_map(move |idx| self.get(idx))
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Resolver {
    Mapped(Arc<FieldMap>),
    Concat { split: usize },
    Identity,
}

#[derive(Debug, Clone)]
pub struct TupleView {
    schema: Schema,
    resolver: Resolver,
    sources: SourceSet,
    read_only: bool,
}

impl TupleView {
    pub(crate) fn mapped(
        schema: Schema,
        map: Arc<FieldMap>,
        sources: SourceSet,
        read_only: bool,
    ) -> Self {
        debug_assert_eq!(schema.len(), map.len());
        Self {
            schema,
            resolver: Resolver::Mapped(map),
            sources,
            read_only,
        }
    }

    pub(crate) fn concatenated(
        schema: Schema,
        split: usize,
        first: RecordRef,
        second: RecordRef,
        read_only: bool,
    ) -> Self {
        Self {
            schema,
            resolver: Resolver::Concat { split },
            sources: SourceSet::Two(first, second),
            read_only,
        }
    }

    pub(crate) fn read_only(source: RecordRef) -> Self {
        Self {
            schema: source.schema(),
            resolver: Resolver::Identity,
            sources: SourceSet::One(source),
            read_only: true,
        }
    }

    pub fn sources(&self) -> &SourceSet {
        &self.sources
    }

    /// Maps output field `idx` to its backing source field, `None` when the
    /// position has no backing field.
    pub fn resolve(&self, idx: usize) -> Result<Option<FieldRef>> {
        if idx >= self.schema.len() {
            return Err(TransformError::out_of_range("field index", idx, self.schema.len()).into());
        }
        let entry = match &self.resolver {
            Resolver::Mapped(map) => match map.single_source_map() {
                Some(indices) => FieldRef::new(0, indices[idx]),
                None => map.entries()[idx],
            },
            Resolver::Concat { split } if idx < *split => FieldRef::new(0, idx),
            Resolver::Concat { split } => FieldRef::new(1, idx - split),
            Resolver::Identity => FieldRef::new(0, idx),
        };
        Ok(entry.is_mapped().then_some(entry))
    }

    fn source(&self, idx: usize) -> Result<&RecordRef> {
        self.sources.get(idx).ok_or_else(|| {
            TransformError::InsufficientSources {
                expected: idx + 1,
                actual: self.sources.len(),
            }
            .into()
        })
    }
}

impl Record for TupleView {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn get(&self, idx: usize) -> Result<Field> {
        match self.resolve(idx)? {
            Some(entry) => self.source(entry.source)?.get(entry.field),
            None => Ok(Field::NotAvailable),
        }
    }

    fn set(&mut self, idx: usize, field: Field) -> Result<()> {
        if self.read_only {
            return Err(TransformError::ReadOnly { field: idx }.into());
        }
        match self.resolve(idx)? {
            Some(entry) => self.source(entry.source)?.set(entry.field, field),
            None => Err(TransformError::UnmappedField { field: idx }.into()),
        }
    }

    fn kind(&self) -> RecordKind {
        if self.read_only {
            RecordKind::ReadOnly
        } else {
            RecordKind::View
        }
    }
}

impl fmt::Display for TupleView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_record(self, f)
    }
}

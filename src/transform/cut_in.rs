//! # CutInTransform
//!
//! Splices the fields of a second record into a first record before position
//! `index`:
//!
//! ```text
//! first   [a b c]      second [x y]      index = 1
//! output  [a x y b c]
//! map     [0:0 1:0 1:1 0:1 0:2]
//! ```
//!
//! `index` ranges over `0..=first.len()`; `index == first.len()` appends.
//!
//! ## Scalar Cut-In
//!
//! [`CutInTransform::scalar`] inserts a single field of a given type. Its
//! [`apply_scalar`](CutInTransform::apply_scalar) wraps the value in a
//! one-field record and evaluates the general splice over it.

use eyre::{ensure, Result};

use super::{FieldRef, MapTransform, Transform, TransformMode};
use crate::records::{PlainRecord, RecordRef};
use crate::schema::Schema;
use crate::types::{DataType, Field};

#[derive(Debug, Clone)]
pub struct CutInTransform {
    inner: MapTransform,
    index: usize,
    inserted: Schema,
}

impl CutInTransform {
    /// Fails with `OutOfRange` if `index > source.len()`.
    pub fn new(read_only: bool, index: usize, source: &Schema, inserted: &Schema) -> Result<Self> {
        let schema = source.splice(index, inserted)?;
        let refs: Vec<FieldRef> = (0..index)
            .map(|field| FieldRef::new(0, field))
            .chain((0..inserted.len()).map(|field| FieldRef::new(1, field)))
            .chain((index..source.len()).map(|field| FieldRef::new(0, field)))
            .collect();
        let map = super::FieldMap::from_refs(&refs, schema.len())?;
        let inner = MapTransform::new(read_only, schema, map)?;
        Ok(Self {
            inner,
            index,
            inserted: inserted.clone(),
        })
    }

    /// Cut-In of a single field of type `data_type`.
    pub fn scalar(read_only: bool, index: usize, source: &Schema, data_type: DataType) -> Result<Self> {
        Self::new(read_only, index, source, &Schema::new(vec![data_type]))
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn inserted_schema(&self) -> &Schema {
        &self.inserted
    }

    /// Inserts `value` into `source`. Only valid for one-field insertions.
    pub fn apply_scalar(
        &self,
        mode: TransformMode,
        source: &RecordRef,
        value: impl Into<Field>,
    ) -> Result<RecordRef> {
        ensure!(
            self.inserted.len() == 1,
            "scalar cut-in requires a one-field insertion, this one inserts {} fields",
            self.inserted.len()
        );
        let wrapped = RecordRef::new(PlainRecord::from_fields(
            self.inserted.clone(),
            [value.into()],
        )?);
        self.apply(mode, &[source.clone(), wrapped])
    }
}

delegate_transform!(CutInTransform, "CutIn");

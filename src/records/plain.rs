//! # PlainRecord - Physical Rows
//!
//! `PlainRecord` owns one [`Field`] per schema position. It is what
//! `Materialize` mode produces, and it is the only record type that holds
//! data; every view ultimately reads from plain records.
//!
//! ## Bulk Copy
//!
//! Materialization fills a fresh record in one pass per source:
//!
//! | Method | Copies |
//! |--------|--------|
//! | `copy_from` | All source fields, shifted by a target offset |
//! | `copy_range_from` | The first `count` source fields, shifted by a target offset |
//! | `copy_indices_from` | Target `i` from source `map[i]`, skipping `NO_FIELD` |
//! | `copy_mapped_from` | Target `i` from entries naming one source index |
//!
//! Bulk copies propagate fields as-is. The type check of `set` only guards
//! values entering the record from outside the algebra.

use std::fmt;

use eyre::{ensure, Result};
use smallvec::SmallVec;

use super::record::{format_record, Record};
use crate::config::{INLINE_FIELD_COUNT, NO_FIELD};
use crate::error::TransformError;
use crate::schema::Schema;
use crate::transform::FieldRef;
use crate::types::Field;

#[derive(Debug, Clone, PartialEq)]
pub struct PlainRecord {
    schema: Schema,
    fields: SmallVec<[Field; INLINE_FIELD_COUNT]>,
}

impl PlainRecord {
    /// Creates a record whose fields are all not available.
    pub fn new(schema: Schema) -> Self {
        let fields = (0..schema.len()).map(|_| Field::NotAvailable).collect();
        Self { schema, fields }
    }

    /// Creates a record from `fields`, checking arity and value types.
    pub fn from_fields<I, F>(schema: Schema, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        let mut record = PlainRecord::new(schema);
        let mut count = 0;
        for (idx, field) in fields.into_iter().enumerate() {
            ensure!(
                idx < record.len(),
                "too many fields for schema of arity {}",
                record.len()
            );
            record.set(idx, field.into())?;
            count += 1;
        }
        ensure!(
            count == record.len(),
            "expected {} fields, got {}",
            record.len(),
            count
        );
        Ok(record)
    }

    pub(crate) fn from_raw(schema: Schema, fields: Vec<Field>) -> Self {
        debug_assert_eq!(schema.len(), fields.len());
        Self {
            schema,
            fields: SmallVec::from_vec(fields),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, idx: usize) -> Result<&Field> {
        self.fields
            .get(idx)
            .ok_or_else(|| TransformError::out_of_range("field index", idx, self.len()).into())
    }

    pub fn into_fields(self) -> Vec<Field> {
        self.fields.into_vec()
    }

    /// Stores `field` without type checking. `idx` must be in range.
    pub(crate) fn set_raw(&mut self, idx: usize, field: Field) {
        self.fields[idx] = field;
    }

    pub fn set_null(&mut self, idx: usize) -> Result<()> {
        self.set(idx, Field::Null)
    }

    /// Copies every field of `source` into positions `offset..offset + source.len()`.
    pub fn copy_from(&mut self, source: &dyn Record, offset: usize) -> Result<()> {
        self.copy_range_from(source, offset, source.len())
    }

    /// Copies source fields `0..count` into positions `offset..offset + count`.
    /// Fails with `OutOfRange` if `source` has fewer than `count` fields.
    pub fn copy_range_from(&mut self, source: &dyn Record, offset: usize, count: usize) -> Result<()> {
        let end = offset.saturating_add(count);
        if end > self.len() {
            return Err(TransformError::out_of_range("copy end", end, self.len()).into());
        }
        for idx in 0..count {
            self.fields[offset + idx] = source.get(idx)?;
        }
        Ok(())
    }

    /// Sets target field `i` to `source[map[i]]` for every mapped entry.
    pub fn copy_indices_from(&mut self, source: &dyn Record, map: &[usize]) -> Result<()> {
        if map.len() > self.len() {
            return Err(TransformError::MapTooLong {
                len: map.len(),
                arity: self.len(),
            }
            .into());
        }
        for (target, &field) in map.iter().enumerate() {
            if field != NO_FIELD {
                self.fields[target] = source.get(field)?;
            }
        }
        Ok(())
    }

    /// Copies the entries of `map` that name `source_index` from `source`.
    pub fn copy_mapped_from(
        &mut self,
        source: &dyn Record,
        source_index: usize,
        map: &[FieldRef],
    ) -> Result<()> {
        if map.len() > self.len() {
            return Err(TransformError::MapTooLong {
                len: map.len(),
                arity: self.len(),
            }
            .into());
        }
        for (target, entry) in map.iter().enumerate() {
            if entry.source == source_index && entry.is_mapped() {
                self.fields[target] = source.get(entry.field)?;
            }
        }
        Ok(())
    }
}

impl Record for PlainRecord {
    fn schema(&self) -> &Schema {
        &self.schema
    }

    fn get(&self, idx: usize) -> Result<Field> {
        self.field(idx).cloned()
    }

    fn set(&mut self, idx: usize, field: Field) -> Result<()> {
        let expected = self.schema.check_index(idx)?;
        if let Field::Value(value) = &field {
            if !expected.accepts(value) {
                return Err(TransformError::TypeMismatch {
                    field: idx,
                    expected,
                    actual: value.data_type(),
                }
                .into());
            }
        }
        self.fields[idx] = field;
        Ok(())
    }

    fn to_plain(&self) -> Result<PlainRecord> {
        Ok(self.clone())
    }
}

impl fmt::Display for PlainRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_record(self, f)
    }
}

//! # Record Contract
//!
//! `Record` is the fixed-arity, tri-state row every transform reads from and
//! produces. Physical rows ([`PlainRecord`]) own their fields; view rows
//! ([`TupleView`](super::TupleView)) resolve each access through a transform
//! at the moment of the call.
//!
//! ## Typed Accessors
//!
//! The `get_*` helpers return `Ok(Some(_))` for a value, `Ok(None)` for an
//! explicit NULL, and an error when the field is not available or holds a
//! different kind of value. Use [`Record::get`] to observe the raw tri-state.

use std::fmt;

use eyre::{bail, Result};

use super::PlainRecord;
use crate::schema::Schema;
use crate::types::{Field, FieldState, Value};

/// How a record stores its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Owns its fields.
    Plain,
    /// Resolves fields through a transform, writes route to the sources.
    View,
    /// Resolves fields through a transform, rejects every write.
    ReadOnly,
}

impl RecordKind {
    pub fn is_view(&self) -> bool {
        !matches!(self, RecordKind::Plain)
    }
}

pub trait Record: fmt::Debug {
    fn schema(&self) -> &Schema;

    /// Reads field `idx`. Fails only when `idx` is outside the schema.
    fn get(&self, idx: usize) -> Result<Field>;

    /// Writes field `idx`.
    fn set(&mut self, idx: usize, field: Field) -> Result<()>;

    fn kind(&self) -> RecordKind {
        RecordKind::Plain
    }

    fn len(&self) -> usize {
        self.schema().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_read_only(&self) -> bool {
        self.kind() == RecordKind::ReadOnly
    }

    fn state(&self, idx: usize) -> Result<FieldState> {
        Ok(self.get(idx)?.state())
    }

    fn is_available(&self, idx: usize) -> Result<bool> {
        Ok(self.get(idx)?.is_available())
    }

    fn is_null(&self, idx: usize) -> Result<bool> {
        Ok(self.get(idx)?.is_null())
    }

    /// Copies every field into a new source-independent record.
    fn to_plain(&self) -> Result<PlainRecord> {
        let fields = (0..self.len())
            .map(|idx| self.get(idx))
            .collect::<Result<Vec<_>>>()?;
        Ok(PlainRecord::from_raw(self.schema().clone(), fields))
    }

    fn get_int(&self, idx: usize) -> Result<Option<i64>> {
        match self.get(idx)? {
            Field::Value(Value::Int(i)) => Ok(Some(i)),
            other => typed_mismatch(idx, "INT", other),
        }
    }

    fn get_float(&self, idx: usize) -> Result<Option<f64>> {
        match self.get(idx)? {
            Field::Value(Value::Float(f)) => Ok(Some(f)),
            other => typed_mismatch(idx, "FLOAT", other),
        }
    }

    fn get_bool(&self, idx: usize) -> Result<Option<bool>> {
        match self.get(idx)? {
            Field::Value(Value::Bool(b)) => Ok(Some(b)),
            other => typed_mismatch(idx, "BOOL", other),
        }
    }

    fn get_text(&self, idx: usize) -> Result<Option<String>> {
        match self.get(idx)? {
            Field::Value(Value::Text(s)) => Ok(Some(s)),
            other => typed_mismatch(idx, "TEXT", other),
        }
    }

    fn get_blob(&self, idx: usize) -> Result<Option<Vec<u8>>> {
        match self.get(idx)? {
            Field::Value(Value::Blob(b)) => Ok(Some(b)),
            other => typed_mismatch(idx, "BLOB", other),
        }
    }
}

fn typed_mismatch<T>(idx: usize, expected: &str, found: Field) -> Result<Option<T>> {
    match found {
        Field::Null => Ok(None),
        Field::NotAvailable => bail!("field {} is not available", idx),
        Field::Value(other) => bail!("expected {} at field {}, got {:?}", expected, idx, other),
    }
}

/// Field-by-field equality: same schema and identical field states/values.
pub fn records_equal(a: &dyn Record, b: &dyn Record) -> Result<bool> {
    if a.schema() != b.schema() {
        return Ok(false);
    }
    for idx in 0..a.len() {
        if a.get(idx)? != b.get(idx)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Writes `(f0, f1, ...)` using each field's display form.
pub fn format_record(record: &dyn Record, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("(")?;
    for idx in 0..record.len() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        match record.get(idx) {
            Ok(field) => write!(f, "{}", field)?,
            Err(_) => f.write_str("?")?,
        }
    }
    f.write_str(")")
}

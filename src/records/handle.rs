//! # RecordRef - Shared Record Handle
//!
//! Transforms take their sources and return their results as `RecordRef`, a
//! reference-counted handle to any [`Record`]. A view keeps clones of the
//! handles it was built from, so it observes the sources as they are at the
//! time of each read, and writes through it land in those same records.
//!
//! ## Ownership
//!
//! Records are single-owner, request-scoped objects. `RecordRef` is
//! `Rc<RefCell<..>>`-based and therefore neither `Send` nor `Sync`. To hand
//! a row to another thread, call [`RecordRef::to_plain`] and move the
//! resulting `PlainRecord`.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;

use eyre::Result;

use super::record::{format_record, Record, RecordKind};
use super::view::TupleView;
use super::PlainRecord;
use crate::schema::Schema;
use crate::types::Field;

#[derive(Clone)]
pub struct RecordRef(Rc<RefCell<dyn Record>>);

impl RecordRef {
    pub fn new<R: Record + 'static>(record: R) -> Self {
        Self(Rc::new(RefCell::new(record)))
    }

    /// Builds a plain record from `fields` and wraps it.
    pub fn from_fields<I, F>(schema: Schema, fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        Ok(Self::new(PlainRecord::from_fields(schema, fields)?))
    }

    pub fn borrow(&self) -> Ref<'_, dyn Record> {
        self.0.borrow()
    }

    pub fn schema(&self) -> Schema {
        self.0.borrow().schema().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> RecordKind {
        self.0.borrow().kind()
    }

    /// Returns true for lazy views, read-only wrappers included.
    pub fn is_view(&self) -> bool {
        self.kind().is_view()
    }

    pub fn is_read_only(&self) -> bool {
        self.kind() == RecordKind::ReadOnly
    }

    pub fn get(&self, idx: usize) -> Result<Field> {
        self.0.borrow().get(idx)
    }

    pub fn set(&self, idx: usize, field: impl Into<Field>) -> Result<()> {
        self.0.borrow_mut().set(idx, field.into())
    }

    pub fn fields(&self) -> Result<Vec<Field>> {
        let record = self.0.borrow();
        let fields = (0..record.len()).map(|idx| record.get(idx)).collect();
        fields
    }

    pub fn to_plain(&self) -> Result<PlainRecord> {
        self.0.borrow().to_plain()
    }

    /// Wraps the record in a read-only view. Read-only records are returned
    /// as-is.
    pub fn to_read_only(&self) -> RecordRef {
        if self.is_read_only() {
            return self.clone();
        }
        RecordRef::new(TupleView::read_only(self.clone()))
    }

    pub fn ptr_eq(&self, other: &RecordRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn equals(&self, other: &RecordRef) -> Result<bool> {
        super::records_equal(&*self.borrow(), &*other.borrow())
    }
}

impl From<PlainRecord> for RecordRef {
    fn from(record: PlainRecord) -> Self {
        RecordRef::new(record)
    }
}

impl fmt::Debug for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RecordRef").field(&*self.0.borrow()).finish()
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_record(&*self.0.borrow(), f)
    }
}

//! # Schema (Tuple Descriptor)
//!
//! A `Schema` is the immutable, positionally indexed list of field types that
//! describes a record shape. Two schemas with the same type sequence are
//! equal and hash identically; the registry in [`super::registry`] relies on
//! this to intern them.
//!
//! ## Sharing
//!
//! The type list lives behind an `Arc<[DataType]>`, so cloning a schema is a
//! reference-count bump. Transforms hold their output schema by value and
//! hand out clones to every record they create.
//!
//! ## Derivation
//!
//! The specialized transforms compute their output schema from their
//! sources with the helpers below:
//!
//! | Helper | Result |
//! |--------|--------|
//! | `slice(segment)` | Fields `[offset, offset + length)` |
//! | `cut_out(segment)` | Fields outside `[offset, offset + length)` |
//! | `splice(index, other)` | `other` inserted before position `index` |
//! | `concat(other)` | `self` followed by `other` |

use std::fmt;
use std::ops::{Index, Range};
use std::sync::Arc;

use eyre::{ensure, Result};
use smallvec::SmallVec;

use crate::config::INLINE_FIELD_COUNT;
use crate::error::TransformError;
use crate::types::DataType;

/// Contiguous range `[offset, offset + length)` of schema positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub offset: usize,
    pub length: usize,
}

impl Segment {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Exclusive end of the segment, saturating on overflow.
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.length)
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    pub fn contains(&self, idx: usize) -> bool {
        idx >= self.offset && idx < self.end()
    }

    /// Fails with `OutOfRange` unless the segment lies within `arity` fields.
    pub fn check_within(&self, arity: usize) -> Result<()> {
        if self.offset > arity {
            return Err(TransformError::out_of_range("segment offset", self.offset, arity).into());
        }
        match self.offset.checked_add(self.length) {
            Some(end) if end <= arity => Ok(()),
            _ => Err(TransformError::out_of_range("segment end", self.end(), arity).into()),
        }
    }
}

impl TryFrom<Range<usize>> for Segment {
    type Error = eyre::Report;

    /// Fails for a reversed range; `start == end` is an empty segment.
    fn try_from(range: Range<usize>) -> Result<Self> {
        ensure!(
            range.start <= range.end,
            "reversed range {}..{} is not a segment",
            range.start,
            range.end
        );
        Ok(Segment::new(range.start, range.end - range.start))
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Schema {
    types: Arc<[DataType]>,
}

impl Schema {
    pub fn new(types: impl Into<Arc<[DataType]>>) -> Self {
        Self {
            types: types.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of fields (arity).
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn field_type(&self, idx: usize) -> Option<DataType> {
        self.types.get(idx).copied()
    }

    pub fn types(&self) -> &[DataType] {
        &self.types
    }

    pub fn iter(&self) -> impl Iterator<Item = DataType> + '_ {
        self.types.iter().copied()
    }

    /// Returns true if both schemas share the same allocation.
    pub fn ptr_eq(&self, other: &Schema) -> bool {
        Arc::ptr_eq(&self.types, &other.types)
    }

    pub fn check_index(&self, idx: usize) -> Result<DataType> {
        self.field_type(idx)
            .ok_or_else(|| TransformError::out_of_range("field index", idx, self.len()).into())
    }

    pub fn slice(&self, segment: Segment) -> Result<Schema> {
        segment.check_within(self.len())?;
        Ok(Schema::new(&self.types[segment.range()]))
    }

    pub fn cut_out(&self, segment: Segment) -> Result<Schema> {
        segment.check_within(self.len())?;
        let types: SmallVec<[DataType; INLINE_FIELD_COUNT]> = self
            .types
            .iter()
            .enumerate()
            .filter(|(idx, _)| !segment.contains(*idx))
            .map(|(_, ty)| *ty)
            .collect();
        Ok(Schema::new(types.as_slice()))
    }

    pub fn splice(&self, index: usize, inserted: &Schema) -> Result<Schema> {
        if index > self.len() {
            return Err(TransformError::out_of_range("insertion index", index, self.len()).into());
        }
        let mut types = Vec::with_capacity(self.len() + inserted.len());
        types.extend_from_slice(&self.types[..index]);
        types.extend_from_slice(inserted.types());
        types.extend_from_slice(&self.types[index..]);
        Ok(Schema::new(types))
    }

    pub fn concat(&self, other: &Schema) -> Schema {
        let mut types = Vec::with_capacity(self.len() + other.len());
        types.extend_from_slice(self.types());
        types.extend_from_slice(other.types());
        Schema::new(types)
    }
}

impl Index<usize> for Schema {
    type Output = DataType;

    fn index(&self, idx: usize) -> &DataType {
        &self.types[idx]
    }
}

impl std::borrow::Borrow<[DataType]> for Schema {
    fn borrow(&self) -> &[DataType] {
        &self.types
    }
}

impl FromIterator<DataType> for Schema {
    fn from_iter<I: IntoIterator<Item = DataType>>(iter: I) -> Self {
        Schema::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl From<Vec<DataType>> for Schema {
    fn from(types: Vec<DataType>) -> Self {
        Schema::new(types)
    }
}

impl From<&[DataType]> for Schema {
    fn from(types: &[DataType]) -> Self {
        Schema::new(types)
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.types.iter()).finish()
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

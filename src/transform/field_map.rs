//! # FieldMap - Dual Map Representation
//!
//! A `FieldMap` says, for every output field, which source record and which
//! field of that source back it. It is kept in two forms:
//!
//! ```text
//! general map        [(0,2) (1,0) (0,NO_FIELD) (0,1)]   any number of sources
//! single-source map  [2 0 NO_FIELD 1]                   only when every source == 0
//! ```
//!
//! ## Invariants
//!
//! 1. `source_count == 1 + max(entry.source)`, or 0 for an empty map
//! 2. `single_source_map()` is `Some` iff `source_count == 1`
//! 3. Both forms describe the same mapping
//!
//! A `FieldMap` is immutable. Both forms are computed by the same
//! constructor, so no caller can ever observe them disagreeing; a transform
//! that changes its mapping replaces its whole `FieldMap`.

use std::fmt;

use eyre::Result;
use smallvec::SmallVec;

use crate::config::{INLINE_FIELD_COUNT, NO_FIELD};
use crate::error::TransformError;

/// One general-map entry: output field is backed by `field` of source `source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldRef {
    pub source: usize,
    pub field: usize,
}

impl FieldRef {
    /// Entry for an output field with no backing source field.
    pub const UNMAPPED: FieldRef = FieldRef {
        source: 0,
        field: NO_FIELD,
    };

    pub const fn new(source: usize, field: usize) -> Self {
        Self { source, field }
    }

    pub fn is_mapped(&self) -> bool {
        self.field != NO_FIELD
    }
}

impl From<(usize, usize)> for FieldRef {
    fn from((source, field): (usize, usize)) -> Self {
        FieldRef::new(source, field)
    }
}

type Entries = SmallVec<[FieldRef; INLINE_FIELD_COUNT]>;
type Indices = SmallVec<[usize; INLINE_FIELD_COUNT]>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldMap {
    entries: Entries,
    single_source: Option<Indices>,
    source_count: usize,
}

impl FieldMap {
    /// Builds a one-source map over `arity` output fields. Missing trailing
    /// entries are `NO_FIELD`. The source count is 1 even if nothing is mapped.
    pub fn from_indices(indices: &[usize], arity: usize) -> Result<Self> {
        check_len(indices.len(), arity)?;
        let mut single: Indices = indices.iter().copied().collect();
        single.resize(arity, NO_FIELD);
        let entries = single.iter().map(|&field| FieldRef::new(0, field)).collect();
        Ok(Self {
            entries,
            single_source: Some(single),
            source_count: 1,
        })
    }

    /// Builds a general map over `arity` output fields. Missing trailing
    /// entries are unmapped. Fails with `OutOfRange` for a source index of
    /// `NO_FIELD`.
    pub fn from_refs(refs: &[FieldRef], arity: usize) -> Result<Self> {
        check_len(refs.len(), arity)?;
        let mut entries: Entries = refs.iter().copied().collect();
        entries.resize(arity, FieldRef::UNMAPPED);

        let mut source_count = 0;
        for entry in &entries {
            // Source indices stay below NO_FIELD so that 1 + index cannot wrap.
            let needed = entry
                .source
                .checked_add(1)
                .ok_or(TransformError::out_of_range("source index", entry.source, NO_FIELD))?;
            source_count = source_count.max(needed);
        }
        let single_source =
            (source_count == 1).then(|| entries.iter().map(|entry| entry.field).collect());

        Ok(Self {
            entries,
            single_source,
            source_count,
        })
    }

    pub fn from_pairs(pairs: &[(usize, usize)], arity: usize) -> Result<Self> {
        let refs: Entries = pairs.iter().copied().map(FieldRef::from).collect();
        Self::from_refs(&refs, arity)
    }

    /// Output field `i` reads field `i` of the single source.
    pub fn identity(arity: usize) -> Self {
        let single: Indices = (0..arity).collect();
        Self {
            entries: single.iter().map(|&field| FieldRef::new(0, field)).collect(),
            single_source: Some(single),
            source_count: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn source_count(&self) -> usize {
        self.source_count
    }

    pub fn entries(&self) -> &[FieldRef] {
        &self.entries
    }

    /// Flat field indices into source 0, present only for one-source maps.
    pub fn single_source_map(&self) -> Option<&[usize]> {
        self.single_source.as_deref()
    }

    /// Backing field of output field `idx`, `None` if unmapped or out of range.
    pub fn resolve(&self, idx: usize) -> Option<FieldRef> {
        self.entries
            .get(idx)
            .copied()
            .filter(FieldRef::is_mapped)
    }
}

fn check_len(len: usize, arity: usize) -> Result<()> {
    if len > arity {
        return Err(TransformError::MapTooLong { len, arity }.into());
    }
    Ok(())
}

impl fmt::Display for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, entry) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            match (entry.is_mapped(), self.single_source.is_some()) {
                (false, _) => f.write_str("-")?,
                (true, true) => write!(f, "{}", entry.field)?,
                (true, false) => write!(f, "{}:{}", entry.source, entry.field)?,
            }
        }
        f.write_str("}")
    }
}

//! # Transform Algebra Constants
//!
//! This module centralizes the constants shared by the field map, plain
//! records and the transform cache. Values that depend on each other live
//! next to each other so a change to one is noticed by the other.
//!
//! ## Dependency Graph
//!
//! ```text
//! INLINE_FIELD_COUNT (16)
//!       │
//!       ├─> FieldMap entry storage (SmallVec inline capacity)
//!       │
//!       └─> PlainRecord field storage (SmallVec inline capacity)
//!             Rows wider than this allocate once on the heap.
//!
//! DEFAULT_TRANSFORM_CACHE_CAPACITY (1024)
//!       │
//!       └─> TransformCache clears itself when this many entries are held
//! ```
//!
//! ## Critical Invariants
//!
//! Enforced by compile-time assertions at the bottom of this file:
//!
//! 1. `NO_FIELD` can never collide with a real field index
//! 2. `INLINE_FIELD_COUNT > 0`

// ============================================================================
// FIELD MAP
// ============================================================================

/// Field index stored in a map entry whose output field has no backing
/// source field. Reading such a field yields `Field::NotAvailable`.
pub const NO_FIELD: usize = usize::MAX;

/// Inline capacity of field maps and plain records before spilling to the
/// heap. Covers the typical width of projected entity rows.
pub const INLINE_FIELD_COUNT: usize = 16;

// ============================================================================
// TRANSFORM CACHE
// ============================================================================

/// Number of memoized transforms after which `TransformCache` is cleared.
pub const DEFAULT_TRANSFORM_CACHE_CAPACITY: usize = 1024;

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

// Slice lengths never exceed isize::MAX, so no real index reaches NO_FIELD.
const _: () = assert!((isize::MAX as usize) < NO_FIELD);
const _: () = assert!(INLINE_FIELD_COUNT > 0);
const _: () = assert!(DEFAULT_TRANSFORM_CACHE_CAPACITY > 0);

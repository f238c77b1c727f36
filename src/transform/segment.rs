//! # SegmentTransform
//!
//! Projects a contiguous range of fields out of one source record:
//!
//! ```text
//! source  [a b c d e]     segment = (offset 1, length 3)
//! output  [b c d]         map = [1 2 3]
//! ```

use eyre::Result;

use super::MapTransform;
use crate::schema::{Schema, Segment};

#[derive(Debug, Clone)]
pub struct SegmentTransform {
    inner: MapTransform,
    segment: Segment,
}

impl SegmentTransform {
    /// Fails with `OutOfRange` if `segment` does not fit in `source`.
    pub fn new(read_only: bool, source: &Schema, segment: Segment) -> Result<Self> {
        let schema = source.slice(segment)?;
        let indices: Vec<usize> = segment.range().collect();
        let inner = MapTransform::with_indices(read_only, schema, &indices)?;
        Ok(Self { inner, segment })
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }
}

delegate_transform!(SegmentTransform, "Segment");

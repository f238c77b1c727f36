//! # CutOutTransform
//!
//! Removes a contiguous range of fields from one source record, keeping the
//! remaining fields in order:
//!
//! ```text
//! source  [a b c d e]     segment = (offset 1, length 2)
//! output  [a d e]         map = [0 3 4]
//! ```
//!
//! Together with [`SegmentTransform`](super::SegmentTransform) over the same
//! segment, the source can be rebuilt with a Cut-In at `segment.offset`.

use eyre::Result;

use super::MapTransform;
use crate::schema::{Schema, Segment};

#[derive(Debug, Clone)]
pub struct CutOutTransform {
    inner: MapTransform,
    segment: Segment,
}

impl CutOutTransform {
    /// Fails with `OutOfRange` if `segment` does not fit in `source`.
    pub fn new(read_only: bool, source: &Schema, segment: Segment) -> Result<Self> {
        let schema = source.cut_out(segment)?;
        let indices: Vec<usize> = (0..source.len())
            .filter(|idx| !segment.contains(*idx))
            .collect();
        let inner = MapTransform::with_indices(read_only, schema, &indices)?;
        Ok(Self { inner, segment })
    }

    pub fn segment(&self) -> Segment {
        self.segment
    }
}

delegate_transform!(CutOutTransform, "CutOut");

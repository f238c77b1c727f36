//! # TransformCache
//!
//! Memoizes transforms by their defining schemas and parameters. Query
//! compilation builds the same projections and joins over the same row
//! shapes again and again; the cache hands back one shared `Arc` per
//! distinct definition instead of rebuilding the field map each time.
//!
//! ## Bounding
//!
//! The cache holds at most `capacity` transforms across all kinds. When an
//! insertion would exceed that, every map is cleared first. Transforms that
//! callers still hold stay alive through their `Arc`s.
//!
//! ## Concurrency
//!
//! All maps sit behind one `parking_lot::Mutex`. Construction of a missing
//! transform happens under the lock; it is O(arity) and allocation-light.

use std::hash::Hash;
use std::sync::Arc;

use eyre::Result;
use hashbrown::HashMap;
use parking_lot::Mutex;

use super::{
    CombineTransform, ConcatenateTransform, CutInTransform, CutOutTransform, SegmentTransform,
};
use crate::config::DEFAULT_TRANSFORM_CACHE_CAPACITY;
use crate::schema::{Schema, Segment};

#[derive(Debug, Default)]
struct CacheMaps {
    segments: HashMap<(Schema, Segment, bool), Arc<SegmentTransform>>,
    cut_outs: HashMap<(Schema, Segment, bool), Arc<CutOutTransform>>,
    cut_ins: HashMap<(Schema, usize, Schema, bool), Arc<CutInTransform>>,
    concatenations: HashMap<(Schema, Schema, bool), Arc<ConcatenateTransform>>,
    combinations: HashMap<(Vec<Schema>, bool), Arc<CombineTransform>>,
}

impl CacheMaps {
    fn len(&self) -> usize {
        self.segments.len()
            + self.cut_outs.len()
            + self.cut_ins.len()
            + self.concatenations.len()
            + self.combinations.len()
    }

    fn clear(&mut self) {
        self.segments.clear();
        self.cut_outs.clear();
        self.cut_ins.clear();
        self.concatenations.clear();
        self.combinations.clear();
    }
}

#[derive(Debug)]
pub struct TransformCache {
    maps: Mutex<CacheMaps>,
    capacity: usize,
}

impl Default for TransformCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TRANSFORM_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            maps: Mutex::new(CacheMaps::default()),
            capacity: capacity.max(1),
        }
    }

    pub fn segment(
        &self,
        read_only: bool,
        source: &Schema,
        segment: Segment,
    ) -> Result<Arc<SegmentTransform>> {
        self.get_or_build(
            |maps| &mut maps.segments,
            (source.clone(), segment, read_only),
            || SegmentTransform::new(read_only, source, segment),
        )
    }

    pub fn cut_out(
        &self,
        read_only: bool,
        source: &Schema,
        segment: Segment,
    ) -> Result<Arc<CutOutTransform>> {
        self.get_or_build(
            |maps| &mut maps.cut_outs,
            (source.clone(), segment, read_only),
            || CutOutTransform::new(read_only, source, segment),
        )
    }

    pub fn cut_in(
        &self,
        read_only: bool,
        index: usize,
        source: &Schema,
        inserted: &Schema,
    ) -> Result<Arc<CutInTransform>> {
        self.get_or_build(
            |maps| &mut maps.cut_ins,
            (source.clone(), index, inserted.clone(), read_only),
            || CutInTransform::new(read_only, index, source, inserted),
        )
    }

    pub fn concatenate(
        &self,
        read_only: bool,
        first: &Schema,
        second: &Schema,
    ) -> Result<Arc<ConcatenateTransform>> {
        self.get_or_build(
            |maps| &mut maps.concatenations,
            (first.clone(), second.clone(), read_only),
            || Ok(ConcatenateTransform::new(read_only, first, second)),
        )
    }

    pub fn combine(&self, read_only: bool, sources: &[Schema]) -> Result<Arc<CombineTransform>> {
        self.get_or_build(
            |maps| &mut maps.combinations,
            (sources.to_vec(), read_only),
            || CombineTransform::new(read_only, sources),
        )
    }

    pub fn len(&self) -> usize {
        self.maps.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.maps.lock().clear();
    }

    fn get_or_build<K, V>(
        &self,
        select: impl Fn(&mut CacheMaps) -> &mut HashMap<K, Arc<V>>,
        key: K,
        build: impl FnOnce() -> Result<V>,
    ) -> Result<Arc<V>>
    where
        K: Hash + Eq,
    {
        let mut maps = self.maps.lock();
        if let Some(found) = select(&mut *maps).get(&key) {
            return Ok(Arc::clone(found));
        }
        let built = Arc::new(build()?);
        if maps.len() >= self.capacity {
            tracing::debug!(capacity = self.capacity, "transform cache full, clearing");
            maps.clear();
        }
        select(&mut *maps).insert(key, Arc::clone(&built));
        Ok(built)
    }
}

//! # Shared Transform Tests
//!
//! Transforms and schemas are built once and shared by many request
//! threads. Records stay on the thread that owns them; materialized plain
//! records are the unit that crosses threads.

use std::sync::{Arc, Barrier};
use std::thread;

use turtuple::{
    ConcatenateTransform, DataType, Field, PlainRecord, Record, RecordRef, Schema, SchemaRegistry,
    Segment, Transform, TransformCache, TransformMode,
};

const THREADS: usize = 8;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn shared_types_are_send_and_sync() {
    assert_send_sync::<Schema>();
    assert_send_sync::<SchemaRegistry>();
    assert_send_sync::<TransformCache>();
    assert_send_sync::<ConcatenateTransform>();
    assert_send_sync::<Arc<dyn Transform>>();
    assert_send_sync::<PlainRecord>();
}

#[test]
fn one_transform_many_threads() {
    let left = Schema::new(vec![DataType::Int8]);
    let right = Schema::new(vec![DataType::Text]);
    let join: Arc<dyn Transform> = Arc::new(ConcatenateTransform::new(false, &left, &right));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|n| {
            let join = Arc::clone(&join);
            let barrier = Arc::clone(&barrier);
            let (left, right) = (left.clone(), right.clone());
            thread::spawn(move || {
                barrier.wait();
                let a = RecordRef::from_fields(left, [n as i64]).unwrap();
                let b = RecordRef::from_fields(right, [format!("row-{}", n)]).unwrap();
                let row = join.apply(TransformMode::View, &[a, b]).unwrap();
                row.to_plain().unwrap()
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        let record = handle.join().unwrap();
        assert_eq!(record.get_int(0).unwrap(), Some(n as i64));
        assert_eq!(record.get_text(1).unwrap(), Some(format!("row-{}", n)));
    }
}

#[test]
fn registry_interns_across_threads() {
    let registry = Arc::new(SchemaRegistry::new());
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.intern(&[DataType::Int8, DataType::Text]))
        })
        .collect();
    let schemas: Vec<Schema> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(registry.len(), 1);
    for schema in &schemas[1..] {
        assert!(schema.ptr_eq(&schemas[0]));
    }
}

#[test]
fn cache_hands_out_one_transform_per_definition() {
    let cache = Arc::new(TransformCache::new());
    let source = Schema::new(vec![DataType::Int8, DataType::Text, DataType::Bool]);
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let source = source.clone();
            thread::spawn(move || cache.segment(false, &source, Segment::new(1, 2)).unwrap())
        })
        .collect();
    let transforms: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(cache.len(), 1);
    for transform in &transforms[1..] {
        assert!(Arc::ptr_eq(transform, &transforms[0]));
    }
}

#[test]
fn materialized_record_moves_between_threads() {
    let schema = Schema::new(vec![DataType::Int8, DataType::Text]);
    let record = PlainRecord::from_fields(schema, [Field::from(1i64), Field::Null]).unwrap();
    let moved = thread::spawn(move || {
        let handle = RecordRef::from(record);
        handle.set(1, "filled").unwrap();
        handle.to_plain().unwrap()
    })
    .join()
    .unwrap();
    assert_eq!(moved.fields(), &[Field::from(1i64), Field::from("filled")]);
}

//! Tests for the records module

use super::*;
use crate::error::{transform_error, TransformError};
use crate::schema::Schema;
use crate::types::{DataType, Field, FieldState, Value};

fn person_schema() -> Schema {
    Schema::new(vec![DataType::Int8, DataType::Text, DataType::Bool])
}

fn person() -> PlainRecord {
    PlainRecord::from_fields(
        person_schema(),
        [Field::from(7i64), Field::from("ada"), Field::Null],
    )
    .unwrap()
}

#[test]
fn new_record_has_no_available_fields() {
    let record = PlainRecord::new(person_schema());
    assert_eq!(record.len(), 3);
    for idx in 0..3 {
        assert_eq!(record.state(idx).unwrap(), FieldState::NotAvailable);
    }
}

#[test]
fn from_fields_checks_arity() {
    let short = PlainRecord::from_fields(person_schema(), [Field::from(1i64)]);
    assert!(short.unwrap_err().to_string().contains("expected 3 fields"));

    let long = PlainRecord::from_fields(
        Schema::new(vec![DataType::Int8]),
        [Field::from(1i64), Field::from(2i64)],
    );
    assert!(long.unwrap_err().to_string().contains("too many fields"));
}

#[test]
fn set_rejects_mistyped_value() {
    let mut record = PlainRecord::new(person_schema());
    let err = record.set(0, Field::from("not a number")).unwrap_err();
    assert_eq!(
        transform_error(&err),
        Some(&TransformError::TypeMismatch {
            field: 0,
            expected: DataType::Int8,
            actual: DataType::Text,
        })
    );
}

#[test]
fn set_accepts_null_for_any_type() {
    let mut record = PlainRecord::new(person_schema());
    record.set_null(1).unwrap();
    assert!(record.is_null(1).unwrap());
    assert!(record.is_available(1).unwrap());
}

#[test]
fn get_out_of_range_is_error() {
    let err = person().get(3).unwrap_err();
    assert!(matches!(
        transform_error(&err),
        Some(TransformError::OutOfRange { value: 3, arity: 3, .. })
    ));
}

#[test]
fn typed_getters_map_states() {
    let record = person();
    assert_eq!(record.get_int(0).unwrap(), Some(7));
    assert_eq!(record.get_text(1).unwrap(), Some("ada".to_string()));
    assert_eq!(record.get_bool(2).unwrap(), None);
    assert!(record.get_int(1).is_err());

    let empty = PlainRecord::new(person_schema());
    let err = empty.get_int(0).unwrap_err();
    assert!(err.to_string().contains("not available"));
}

#[test]
fn copy_from_places_fields_at_offset() {
    let wide = Schema::new(vec![DataType::Bool, DataType::Int8, DataType::Text, DataType::Bool]);
    let mut target = PlainRecord::new(wide);
    target.copy_from(&person(), 1).unwrap();
    assert_eq!(target.get(0).unwrap(), Field::NotAvailable);
    assert_eq!(target.get(1).unwrap(), Field::from(7i64));
    assert_eq!(target.get(3).unwrap(), Field::Null);

    let err = target.copy_from(&person(), 2).unwrap_err();
    assert!(matches!(
        transform_error(&err),
        Some(TransformError::OutOfRange { value: 5, arity: 4, .. })
    ));
}

#[test]
fn copy_indices_from_skips_sentinel() {
    let schema = Schema::new(vec![DataType::Text, DataType::Int8, DataType::Bool]);
    let mut target = PlainRecord::new(schema);
    target
        .copy_indices_from(&person(), &[1, 0, crate::config::NO_FIELD])
        .unwrap();
    assert_eq!(target.get_text(0).unwrap(), Some("ada".to_string()));
    assert_eq!(target.get_int(1).unwrap(), Some(7));
    assert_eq!(target.state(2).unwrap(), FieldState::NotAvailable);
}

#[test]
fn copy_range_from_copies_leading_fields() {
    let schema = Schema::new(vec![DataType::Bool, DataType::Int8, DataType::Text]);
    let mut target = PlainRecord::new(schema);
    target.copy_range_from(&person(), 1, 2).unwrap();
    assert_eq!(target.state(0).unwrap(), FieldState::NotAvailable);
    assert_eq!(target.get_int(1).unwrap(), Some(7));
    assert_eq!(target.get_text(2).unwrap(), Some("ada".to_string()));

    let short = PlainRecord::from_fields(Schema::new(vec![DataType::Int8]), [1i64]).unwrap();
    let err = target.copy_range_from(&short, 1, 2).unwrap_err();
    assert!(matches!(
        transform_error(&err),
        Some(TransformError::OutOfRange { value: 1, arity: 1, .. })
    ));
}

#[test]
fn copy_mapped_from_takes_only_its_source() {
    use crate::transform::FieldRef;

    let schema = Schema::new(vec![DataType::Text, DataType::Bool, DataType::Int8, DataType::Int8]);
    let map = [
        FieldRef::new(0, 1),
        FieldRef::new(1, 0),
        FieldRef::new(0, 0),
        FieldRef::UNMAPPED,
    ];
    let flag = PlainRecord::from_fields(Schema::new(vec![DataType::Bool]), [true]).unwrap();

    let mut target = PlainRecord::new(schema);
    target.copy_mapped_from(&person(), 0, &map).unwrap();
    assert_eq!(target.state(1).unwrap(), FieldState::NotAvailable);
    target.copy_mapped_from(&flag, 1, &map).unwrap();

    assert_eq!(target.to_string(), "(ada, true, 7, n/a)");

    let too_long = [FieldRef::new(0, 0); 5];
    let err = target.copy_mapped_from(&person(), 0, &too_long).unwrap_err();
    assert_eq!(
        transform_error(&err),
        Some(&TransformError::MapTooLong { len: 5, arity: 4 })
    );
}

#[test]
fn to_plain_is_independent_copy() {
    let original = RecordRef::new(person());
    let copy = original.to_plain().unwrap();
    original.set(0, 99i64).unwrap();
    assert_eq!(copy.get_int(0).unwrap(), Some(7));
    assert_eq!(original.get(0).unwrap(), Field::from(99i64));
}

#[test]
fn read_only_wrapper_rejects_writes() {
    let base = RecordRef::new(person());
    let frozen = base.to_read_only();
    assert!(frozen.is_read_only());
    assert!(frozen.is_view());
    assert_eq!(frozen.schema(), person_schema());

    let err = frozen.set(0, 1i64).unwrap_err();
    assert_eq!(
        transform_error(&err),
        Some(&TransformError::ReadOnly { field: 0 })
    );
    assert_eq!(base.borrow().get_int(0).unwrap(), Some(7));
}

#[test]
fn read_only_wrapper_is_not_nested() {
    let frozen = RecordRef::new(person()).to_read_only();
    let again = frozen.to_read_only();
    assert!(again.ptr_eq(&frozen));
}

#[test]
fn records_equal_compares_schema_and_fields() {
    let a = person();
    let mut b = person();
    assert!(records_equal(&a, &b).unwrap());
    b.set(2, Field::from(true)).unwrap();
    assert!(!records_equal(&a, &b).unwrap());

    let other_schema = PlainRecord::new(Schema::new(vec![DataType::Int8]));
    assert!(!records_equal(&a, &other_schema).unwrap());
}

#[test]
fn display_formats_all_states() {
    let mut record = person();
    assert_eq!(record.to_string(), "(7, ada, NULL)");
    record.set(2, Field::NotAvailable).unwrap();
    assert_eq!(RecordRef::new(record).to_string(), "(7, ada, n/a)");
}

#[test]
fn display_handles_decimal_scale_past_i128() {
    let record = RecordRef::from_fields(
        Schema::new(vec![DataType::Decimal, DataType::Decimal]),
        [Value::Decimal(1, 40), Value::Decimal(12345, 2)],
    )
    .unwrap();
    assert_eq!(record.to_string(), "(1e-40, 123.45)");
}

#[test]
fn source_set_uses_inline_variants() {
    let r = RecordRef::new(person());
    let one = SourceSet::from_slice(&[r.clone()]);
    let three = SourceSet::from_slice(&[r.clone(), r.clone(), r.clone()]);
    let four = SourceSet::from_slice(&[r.clone(), r.clone(), r.clone(), r.clone()]);
    assert!(matches!(one, SourceSet::One(_)));
    assert!(matches!(three, SourceSet::Three(_, _, _)));
    assert!(matches!(four, SourceSet::Many(_)));
    assert_eq!(four.len(), 4);
    assert!(three.get(2).unwrap().ptr_eq(&r));
    assert!(three.get(3).is_none());
    assert_eq!(four.iter().count(), 4);
}

#[test]
fn record_ref_is_value_of_wrapped_record() {
    let r = RecordRef::from_fields(
        Schema::new(vec![DataType::Float8]),
        [Value::Float(1.5)],
    )
    .unwrap();
    assert_eq!(r.kind(), RecordKind::Plain);
    assert_eq!(r.fields().unwrap(), vec![Field::from(1.5f64)]);
}

//! # Transform Algebra Integration Tests
//!
//! Exercises the public API the way an object-relational mapper drives it:
//! joined rows are assembled from per-table rows, narrowed to entity shapes,
//! extended with computed columns and frozen before being handed out.
//!
//! - Join assembly with Concatenate and Combine
//! - Entity extraction with Segment and CutOut
//! - Computed columns with scalar CutIn
//! - Read-only results
//! - Lazy and eager evaluation producing identical rows

use turtuple::records::records_equal;
use turtuple::{
    transform_error, CombineTransform, ConcatenateTransform, CutInTransform, CutOutTransform,
    DataType, Field, MapTransform, Record, RecordKind, RecordRef, Schema, Segment,
    SegmentTransform, Transform, TransformError, TransformMode, READ_ONLY,
};

fn customer_schema() -> Schema {
    Schema::new(vec![DataType::Int8, DataType::Text])
}

fn order_schema() -> Schema {
    Schema::new(vec![DataType::Int8, DataType::Int8, DataType::Float8])
}

fn customer(id: i64, name: &str) -> RecordRef {
    RecordRef::from_fields(customer_schema(), [Field::from(id), Field::from(name)]).unwrap()
}

fn order(id: i64, customer_id: i64, total: Option<f64>) -> RecordRef {
    RecordRef::from_fields(
        order_schema(),
        [Field::from(id), Field::from(customer_id), Field::from(total)],
    )
    .unwrap()
}

const ALL_MODES: [TransformMode; 3] = [
    TransformMode::Auto,
    TransformMode::Materialize,
    TransformMode::View,
];

mod join_assembly {
    use super::*;

    #[test]
    fn concatenated_join_row() {
        let join = ConcatenateTransform::new(false, &customer_schema(), &order_schema());
        let row = join
            .apply(
                TransformMode::Auto,
                &[customer(7, "ada"), order(100, 7, Some(12.5))],
            )
            .unwrap();
        assert_eq!(row.kind(), RecordKind::View);
        assert_eq!(row.to_string(), "(7, ada, 100, 7, 12.5)");
        assert_eq!(
            row.schema().types(),
            &[
                DataType::Int8,
                DataType::Text,
                DataType::Int8,
                DataType::Int8,
                DataType::Float8
            ]
        );
    }

    #[test]
    fn combine_matches_concatenate_in_every_mode() {
        let concat = ConcatenateTransform::new(false, &customer_schema(), &order_schema());
        let combine = CombineTransform::pair(false, &customer_schema(), &order_schema()).unwrap();
        for mode in ALL_MODES {
            let sources = [customer(1, "bob"), order(5, 1, None)];
            let left = concat.apply(mode, &sources).unwrap();
            let right = combine.apply(mode, &sources).unwrap();
            assert!(left.equals(&right).unwrap(), "mode {:?}", mode);
        }
    }

    #[test]
    fn three_way_join_with_combine() {
        let line_schema = Schema::new(vec![DataType::Int4, DataType::Text]);
        let line = RecordRef::from_fields(line_schema.clone(), [Field::from(3i32), Field::from("pen")])
            .unwrap();
        let combine =
            CombineTransform::new(false, &[customer_schema(), order_schema(), line_schema]).unwrap();
        assert_eq!(combine.source_count(), 3);

        let sources = [customer(2, "cy"), order(9, 2, Some(1.0)), line];
        let eager = combine.apply(TransformMode::Materialize, &sources).unwrap();
        let lazy = combine.apply(TransformMode::View, &sources).unwrap();
        assert_eq!(eager.to_string(), "(2, cy, 9, 2, 1, 3, pen)");
        assert!(eager.equals(&lazy).unwrap());
    }

    #[test]
    fn missing_join_side_is_rejected() {
        let join = ConcatenateTransform::new(false, &customer_schema(), &order_schema());
        let err = join
            .apply(TransformMode::Materialize, &[customer(1, "x")])
            .unwrap_err();
        assert_eq!(
            transform_error(&err),
            Some(&TransformError::InsufficientSources {
                expected: 2,
                actual: 1
            })
        );
    }
}

mod entity_extraction {
    use super::*;

    fn joined_schema() -> Schema {
        customer_schema().concat(&order_schema())
    }

    fn joined_row() -> RecordRef {
        ConcatenateTransform::new(false, &customer_schema(), &order_schema())
            .apply(
                TransformMode::View,
                &[customer(7, "ada"), order(100, 7, Some(12.5))],
            )
            .unwrap()
    }

    #[test]
    fn segment_recovers_order_from_join() {
        let extract = SegmentTransform::new(false, &joined_schema(), Segment::new(2, 3)).unwrap();
        let entity = extract.apply(TransformMode::Auto, &[joined_row()]).unwrap();
        assert_eq!(entity.kind(), RecordKind::Plain);
        assert!(entity.equals(&order(100, 7, Some(12.5))).unwrap());
    }

    #[test]
    fn cut_out_drops_join_key() {
        let drop_key =
            CutOutTransform::new(false, &joined_schema(), Segment::try_from(3..4).unwrap()).unwrap();
        let row = drop_key
            .apply(TransformMode::Materialize, &[joined_row()])
            .unwrap();
        assert_eq!(row.to_string(), "(7, ada, 100, 12.5)");
    }

    #[test]
    fn projection_with_general_map() {
        let project = MapTransform::with_indices(
            false,
            Schema::new(vec![DataType::Text, DataType::Float8]),
            &[1, 4],
        )
        .unwrap();
        let row = project
            .apply_single(TransformMode::Materialize, &joined_row())
            .unwrap();
        assert_eq!(row.borrow().get_text(0).unwrap().as_deref(), Some("ada"));
        assert_eq!(row.borrow().get_float(1).unwrap(), Some(12.5));
    }

    #[test]
    fn out_of_range_segment_is_rejected() {
        let err = SegmentTransform::new(false, &joined_schema(), Segment::new(4, 2)).unwrap_err();
        assert!(matches!(
            transform_error(&err),
            Some(TransformError::OutOfRange { arity: 5, .. })
        ));
    }
}

mod computed_columns {
    use super::*;

    #[test]
    fn scalar_cut_in_appends_computed_value() {
        let add_flag =
            CutInTransform::scalar(false, 2, &customer_schema(), DataType::Bool).unwrap();
        let row = add_flag
            .apply_scalar(TransformMode::View, &customer(7, "ada"), true)
            .unwrap();
        assert_eq!(row.to_string(), "(7, ada, true)");
        assert_eq!(
            row.schema().types(),
            &[DataType::Int8, DataType::Text, DataType::Bool]
        );
    }

    #[test]
    fn cut_in_then_cut_out_restores_row() {
        let source = customer(7, "ada");
        let insert = CutInTransform::scalar(false, 1, &customer_schema(), DataType::Int4).unwrap();
        let widened = insert
            .apply_scalar(TransformMode::Materialize, &source, 42i32)
            .unwrap();
        let remove =
            CutOutTransform::new(false, insert.output_schema(), Segment::new(1, 1)).unwrap();
        let restored = remove.apply(TransformMode::View, &[widened]).unwrap();
        assert!(restored.equals(&source).unwrap());
    }
}

mod read_only_results {
    use super::*;

    #[test]
    fn frozen_entity_rejects_writes() {
        let frozen = READ_ONLY
            .apply(TransformMode::Auto, &customer(1, "x"))
            .unwrap();
        let err = frozen.set(1, "y").unwrap_err();
        assert_eq!(
            transform_error(&err),
            Some(&TransformError::ReadOnly { field: 1 })
        );
        assert!(READ_ONLY
            .apply(TransformMode::View, &frozen)
            .unwrap()
            .ptr_eq(&frozen));
    }

    #[test]
    fn read_only_transforms_freeze_every_mode() {
        let join = ConcatenateTransform::new(true, &customer_schema(), &order_schema());
        assert!(join.is_read_only());
        for mode in ALL_MODES {
            let row = join
                .apply(mode, &[customer(1, "x"), order(1, 1, None)])
                .unwrap();
            assert!(row.is_read_only());
            assert!(row.set(0, 2i64).is_err());
        }
    }

    #[test]
    fn writable_view_writes_through_to_table_row() {
        let order_row = order(1, 1, None);
        let join = ConcatenateTransform::new(false, &customer_schema(), &order_schema());
        let row = join
            .apply(TransformMode::View, &[customer(1, "x"), order_row.clone()])
            .unwrap();
        row.set(4, 99.0f64).unwrap();
        assert_eq!(order_row.get(2).unwrap(), Field::from(99.0f64));
    }
}

#[test]
fn lazy_and_eager_chains_agree() {
    let joined_schema = customer_schema().concat(&order_schema());
    let join = ConcatenateTransform::new(false, &customer_schema(), &order_schema());
    let drop_key = CutOutTransform::new(false, &joined_schema, Segment::new(3, 1)).unwrap();
    let sources = [customer(3, "dee"), order(8, 3, Some(0.25))];

    let lazy = drop_key
        .apply(
            TransformMode::View,
            &[join.apply(TransformMode::View, &sources).unwrap()],
        )
        .unwrap();
    let eager = drop_key
        .apply(
            TransformMode::Materialize,
            &[join.apply(TransformMode::Materialize, &sources).unwrap()],
        )
        .unwrap();
    assert!(records_equal(&*lazy.borrow(), &*eager.borrow()).unwrap());
    assert_eq!(eager.to_plain().unwrap().len(), 4);
}

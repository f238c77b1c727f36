//! # Field Semantic Types
//!
//! `DataType` is the semantic type of one schema position. Schemas are
//! ordered lists of `DataType`; transforms propagate these types from their
//! source schemas into their output schema without reinterpreting them.
//!
//! ## Type Categories
//!
//! | Category | Types |
//! |----------|-------|
//! | **Boolean** | Bool |
//! | **Integer** | Int2, Int4, Int8 |
//! | **Float** | Float4, Float8 |
//! | **Date/Time** | Date, Time, Timestamp |
//! | **Identifier** | Uuid |
//! | **Text** | Text |
//! | **Binary** | Blob |
//! | **Numeric** | Decimal |
//!
//! ## Type Propagation
//!
//! The algebra does not check storage compatibility between schemas. The only
//! check is `accepts`: a record refuses to store a value whose runtime kind
//! cannot be held by the field's declared type (an `Int` value fits any
//! integer width, a `Text` value only fits `Text`, and so on).

use super::Value;

/// Semantic type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Bool,
    Int2,
    Int4,
    Int8,
    Float4,
    Float8,
    Date,
    Time,
    Timestamp,
    Uuid,
    Text,
    Blob,
    Decimal,
}

impl DataType {
    /// Returns true if a field of this type can hold `value`.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (DataType::Bool, Value::Bool(_)) => true,
            (DataType::Int2 | DataType::Int4 | DataType::Int8, Value::Int(_)) => true,
            (DataType::Float4 | DataType::Float8, Value::Float(_)) => true,
            (DataType::Date, Value::Date(_)) => true,
            (DataType::Time, Value::Time(_)) => true,
            (DataType::Timestamp, Value::Timestamp(_)) => true,
            (DataType::Uuid, Value::Uuid(_)) => true,
            (DataType::Text, Value::Text(_)) => true,
            (DataType::Blob, Value::Blob(_)) => true,
            (DataType::Decimal, Value::Decimal(_, _)) => true,
            _ => false,
        }
    }
}

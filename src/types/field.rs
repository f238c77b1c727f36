//! # Tri-State Fields
//!
//! Every record position is in exactly one of three states:
//!
//! | State | Meaning |
//! |-------|---------|
//! | `Value(v)` | The field holds a value |
//! | `Null` | The field was explicitly set to NULL |
//! | `NotAvailable` | Nothing has been materialized for the field |
//!
//! A freshly allocated record is entirely `NotAvailable`. A view whose map
//! entry for a position is the `NO_FIELD` sentinel reports `NotAvailable`
//! for that position without consulting any source.

use std::fmt;

use super::Value;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Field {
    Value(Value),
    Null,
    #[default]
    NotAvailable,
}

/// Value-free discriminant of a [`Field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldState {
    Available,
    Null,
    NotAvailable,
}

impl Field {
    pub fn state(&self) -> FieldState {
        match self {
            Field::Value(_) => FieldState::Available,
            Field::Null => FieldState::Null,
            Field::NotAvailable => FieldState::NotAvailable,
        }
    }

    /// Returns true if the field holds a value or an explicit NULL.
    pub fn is_available(&self) -> bool {
        !matches!(self, Field::NotAvailable)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl From<Value> for Field {
    fn from(v: Value) -> Self {
        Field::Value(v)
    }
}

macro_rules! field_from_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Field {
                fn from(v: $ty) -> Self {
                    Field::Value(Value::from(v))
                }
            }

            impl From<Option<$ty>> for Field {
                fn from(v: Option<$ty>) -> Self {
                    match v {
                        Some(v) => Field::Value(Value::from(v)),
                        None => Field::Null,
                    }
                }
            }
        )*
    };
}

field_from_primitive!(bool, i32, i64, f64, &str, String, Vec<u8>);

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Value(v) => f.write_str(&v.display_string()),
            Field::Null => f.write_str("NULL"),
            Field::NotAvailable => f.write_str("n/a"),
        }
    }
}

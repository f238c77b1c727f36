//! # Field Values
//!
//! `Value` is a fully owned, non-null field value. Null and "not available"
//! are not values; they are the other two states of [`Field`](super::Field).
//!
//! Values are cloned when a view forwards a read from its source record, so
//! the variants stay small: text and blobs own their bytes, everything else
//! is `Copy`-sized.

use super::DataType;

/// Owned non-null field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
    Date(i32),
    Time(i64),
    Timestamp(i64),
    Uuid([u8; 16]),
    Decimal(i128, i16),
}

fn format_decimal(digits: i128, scale: i16) -> String {
    if scale <= 0 {
        if digits == 0 {
            return "0".to_string();
        }
        return format!("{}{}", digits, "0".repeat(scale.unsigned_abs() as usize));
    }
    // Scales past 10^38 do not fit an i128 divisor.
    let Some(divisor) = 10i128.checked_pow(scale as u32) else {
        return format!("{}e-{}", digits, scale);
    };
    let int_part = digits / divisor;
    let frac_part = (digits % divisor).abs();
    let sign = if digits < 0 && int_part == 0 { "-" } else { "" };
    format!(
        "{}{}.{:0>width$}",
        sign,
        int_part,
        frac_part,
        width = scale as usize
    )
}

impl Value {
    /// Returns the widest DataType that holds this value.
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Bool(_) => DataType::Bool,
            Value::Int(_) => DataType::Int8,
            Value::Float(_) => DataType::Float8,
            Value::Text(_) => DataType::Text,
            Value::Blob(_) => DataType::Blob,
            Value::Date(_) => DataType::Date,
            Value::Time(_) => DataType::Time,
            Value::Timestamp(_) => DataType::Timestamp,
            Value::Uuid(_) => DataType::Uuid,
            Value::Decimal(_, _) => DataType::Decimal,
        }
    }

    /// Formats the value as a display string.
    pub fn display_string(&self) -> String {
        match self {
            Value::Bool(b) => if *b { "true" } else { "false" }.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Text(s) => s.clone(),
            Value::Blob(b) => {
                let hex: String = b.iter().map(|byte| format!("{:02x}", byte)).collect();
                format!("\\x{}", hex)
            }
            Value::Date(d) => format!("date:{}", d),
            Value::Time(t) => format!("time:{}", t),
            Value::Timestamp(ts) => format!("ts:{}", ts),
            Value::Uuid(u) => {
                let h: String = u.iter().map(|b| format!("{:02x}", b)).collect();
                format!(
                    "{}-{}-{}-{}-{}",
                    &h[0..8],
                    &h[8..12],
                    &h[12..16],
                    &h[16..20],
                    &h[20..32]
                )
            }
            Value::Decimal(digits, scale) => format_decimal(*digits, *scale),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

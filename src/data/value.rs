use std::fmt;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// A scalar cell value. Everything the table does with a value goes through
/// its text form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged, from = "serde_json::Value")]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    pub fn to_shared_string(&self) -> SharedString {
        match self {
            Self::Text(value) => SharedString::from(value.clone()),
            Self::Number(_) => SharedString::from(self.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write_number(f, *value),
        }
    }
}

// Browser number printing: no trailing `.0`, no negative zero, named
// infinities, exponent form outside [1e-6, 1e21).
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else if value == 0.0 {
        f.write_str("0")
    } else if !(1e-6..1e21).contains(&value.abs()) {
        let scientific = format!("{value:e}");
        match scientific.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{mantissa}e+{exponent}")
            }
            _ => f.write_str(&scientific),
        }
    } else {
        write!(f, "{value}")
    }
}

impl Default for CellValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<SharedString> for CellValue {
    fn from(value: SharedString) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Text(value.to_string())
    }
}

macro_rules! impl_number_cell_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for CellValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_number_cell_value!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => Self::Text(text),
            serde_json::Value::Number(number) => number
                .as_f64()
                .map(Self::Number)
                .unwrap_or_else(|| Self::Text(number.to_string())),
            serde_json::Value::Bool(flag) => Self::from(flag),
            serde_json::Value::Null => Self::default(),
            other => Self::Text(other.to_string()),
        }
    }
}

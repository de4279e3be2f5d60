use serde::{Deserialize, Serialize};

/// A displayed column: header title plus the record field it reads.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    pub field: String,
}

impl Column {
    pub fn new(title: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            field: field.into(),
        }
    }
}

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

use super::{CellValue, Column};

/// One row of domain data, keyed by field name.
///
/// Deserializing goes through [`Record::from_json_value`], so every JSON
/// loading path coerces values the same way.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value", into = "BTreeMap<String, CellValue>")]
pub struct Record {
    fields: BTreeMap<String, CellValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<CellValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.fields.get(field)
    }

    /// Text form of `field`; a missing field reads as the empty string.
    pub fn text(&self, field: &str) -> Cow<'_, str> {
        match self.fields.get(field) {
            Some(CellValue::Text(value)) => Cow::Borrowed(value.as_str()),
            Some(value) => Cow::Owned(value.to_string()),
            None => Cow::Borrowed(""),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields
            .iter()
            .map(|(field, value)| (field.as_str(), value))
    }

    /// Builds a record from a JSON object. `null` members are left out.
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        let serde_json::Value::Object(object) = value else {
            return Err(TableError::InvalidDataset(format!(
                "expected a JSON object per record, found {}",
                json_kind(&value)
            )));
        };
        let mut record = Self::new();
        for (field, value) in object {
            if value.is_null() {
                continue;
            }
            record.insert(field, CellValue::from(value));
        }
        Ok(record)
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = TableError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        Self::from_json_value(value)
    }
}

impl From<Record> for BTreeMap<String, CellValue> {
    fn from(record: Record) -> Self {
        record.fields
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}

/// Typed rows that know their own column layout. Usually derived with
/// `#[derive(TableRecord)]`.
pub trait TableRecord {
    fn columns() -> Vec<Column>;

    fn to_record(&self) -> Record;
}

pub fn records_from<T: TableRecord>(items: &[T]) -> Vec<Record> {
    items.iter().map(TableRecord::to_record).collect()
}

/// Parses a JSON array of objects into records.
pub fn records_from_json(source: &str) -> Result<Vec<Record>> {
    let document: serde_json::Value = serde_json::from_str(source)?;
    let serde_json::Value::Array(items) = document else {
        return Err(TableError::InvalidDataset(format!(
            "expected a JSON array of records, found {}",
            json_kind(&document)
        )));
    };
    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let record = Record::from_json_value(item).map_err(|error| match error {
            TableError::InvalidDataset(reason) => {
                TableError::InvalidDataset(format!("record {index}: {reason}"))
            }
            other => other,
        })?;
        records.push(record);
    }
    log::debug!("loaded {} records from json", records.len());
    Ok(records)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

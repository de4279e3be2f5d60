mod column;
mod record;
mod value;

pub use column::Column;
pub use record::{Record, TableRecord, records_from, records_from_json};
pub use value::CellValue;

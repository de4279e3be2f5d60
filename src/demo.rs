//! Fixed employee dataset used by the demo window and the smoke tests.

use std::sync::Arc;

use crate::TableRecord;
use crate::data::{Column, Record, records_from};

pub const DEMO_TITLE: &str = "Employee DataTable Demo";

#[derive(Clone, Debug, TableRecord)]
pub struct Employee {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub start_date: &'static str,
    pub department: &'static str,
    #[column(title = "Date of Birth")]
    pub date_of_birth: &'static str,
    pub street: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub zip_code: &'static str,
}

pub const EMPLOYEES: [Employee; 2] = [
    Employee {
        first_name: "John",
        last_name: "Doe",
        start_date: "2021-01-01",
        department: "Engineering",
        date_of_birth: "1990-01-01",
        street: "123 Main St",
        city: "Anytown",
        state: "CA",
        zip_code: "12345",
    },
    Employee {
        first_name: "Jane",
        last_name: "Smith",
        start_date: "2020-05-15",
        department: "Marketing",
        date_of_birth: "1985-07-11",
        street: "456 Maple Dr",
        city: "Othertown",
        state: "NY",
        zip_code: "67890",
    },
];

pub fn employee_columns() -> Arc<[Column]> {
    Employee::columns().into()
}

pub fn employees() -> Arc<[Record]> {
    records_from(&EMPLOYEES).into()
}

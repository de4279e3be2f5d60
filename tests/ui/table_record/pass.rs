use calmtable::{CellValue, TableRecord};

#[derive(Clone, calmtable::TableRecord)]
struct Invoice {
    invoice_id: u64,
    #[column(title = "Customer Name")]
    customer: String,
    #[column(field = "total")]
    amount_due: f64,
    #[column(skip)]
    #[allow(dead_code)]
    internal_note: String,
}

fn main() {
    let columns = Invoice::columns();
    assert_eq!(columns.len(), 3);
    assert_eq!(columns[0].title, "Invoice Id");
    assert_eq!(columns[0].field, "invoiceId");
    assert_eq!(columns[1].title, "Customer Name");
    assert_eq!(columns[2].field, "total");

    let record = Invoice {
        invoice_id: 7,
        customer: "Acme".to_string(),
        amount_due: 12.5,
        internal_note: "late".to_string(),
    }
    .to_record();
    assert_eq!(record.get("invoiceId"), Some(&CellValue::Number(7.0)));
    assert_eq!(record.text("customer"), "Acme");
    assert_eq!(record.text("total"), "12.5");
    assert!(record.get("internalNote").is_none());
}

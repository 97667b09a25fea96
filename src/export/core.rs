//! The flattening transform from transaction records to export rows.

use crate::record::TransactionRecord;

/// One row of the exported file, with every column already rendered as text.
///
/// The normalized amount column intentionally drops the sign and currency
/// symbol; the currency travels in its own column and refunds are not
/// distinguished in exports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub transaction_id: String,
    pub cardholder_name: String,
    pub card_reference: String,
    pub expense_type: String,
    pub amount: String,
    pub currency: String,
    pub date: String,
    pub vendor_name: String,
    pub employee_id: String,
    pub employee_name: String,
}

impl ExportRow {
    /// The columns in file order.
    pub fn columns(&self) -> [&str; 10] {
        [
            &self.transaction_id,
            &self.cardholder_name,
            &self.card_reference,
            &self.expense_type,
            &self.amount,
            &self.currency,
            &self.date,
            &self.vendor_name,
            &self.employee_id,
            &self.employee_name,
        ]
    }
}

/// Flatten `records` into export rows, preserving order.
///
/// Transaction ids are assigned from the 1-indexed position in the sequence,
/// zero-padded to 5 digits.
pub fn build_rows(records: &[TransactionRecord]) -> Vec<ExportRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| ExportRow {
            transaction_id: format!("TXN{:05}", index + 1),
            cardholder_name: record.cardholder_name.clone(),
            card_reference: record.masked_card_reference().to_owned(),
            expense_type: record.expense_type.clone(),
            amount: format!("{:.2}", record.amount.abs()),
            currency: record.currency.code().to_owned(),
            date: record.date.to_string(),
            vendor_name: record.vendor_name.clone(),
            employee_id: record.employee_id.clone(),
            employee_name: derive_employee_name(&record.employee_id),
        })
        .collect()
}

/// A short display name derived from the last 3 characters of the employee
/// id, e.g. `EMP1234` becomes `Emp_234`.
fn derive_employee_name(employee_id: &str) -> String {
    let char_count = employee_id.chars().count();
    let suffix: String = employee_id
        .chars()
        .skip(char_count.saturating_sub(3))
        .collect();

    format!("Emp_{suffix}")
}

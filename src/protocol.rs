use crate::models::billings::BillData;
use serde::Serialize;

/// Metadata of a write statement, mirroring what the MySQL driver reports.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecResponse {
    pub affected_rows: usize,
    pub insert_id: u64,
}

impl ExecResponse {
    pub fn affected(affected_rows: usize) -> Self {
        Self {
            affected_rows,
            insert_id: 0,
        }
    }

    pub fn inserted(affected_rows: usize, insert_id: u64) -> Self {
        Self {
            affected_rows,
            insert_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// One billing row as listed to either party.
#[derive(Debug, Serialize)]
pub struct BillItem {
    pub paymentmethod: String,
    pub amount: f64,
    pub status: String,
    #[serde(rename = "billingID")]
    pub billing_id: i32,
}

impl From<BillData> for BillItem {
    fn from(data: BillData) -> Self {
        Self {
            paymentmethod: data.paymentmethod,
            amount: data.amount,
            status: data.status,
            billing_id: data.billing_id,
        }
    }
}

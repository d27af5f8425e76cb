use crate::schema::billing;

#[derive(Insertable)]
#[table_name = "billing"]
pub struct NewBilling {
    pub appointment_id: Option<i32>,
    pub amount: f64,
    pub patient_id: String,
    pub doctor_id: String,
    pub paymentmethod: String,
    pub status: String,
}

/// `(paymentmethod, amount, status, billingID)`, the shape both payment listings select.
#[derive(Queryable)]
pub struct BillData {
    pub paymentmethod: String,
    pub amount: f64,
    pub status: String,
    pub billing_id: i32,
}

pub const BILL_METHOD_UNSET: &str = "...undefined";
pub const BILL_STATUS_PENDING: &str = "...pending";
pub const BILL_STATUS_PAID: &str = "PAID";

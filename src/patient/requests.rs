use crate::utils::{number_or_string, opt_number_or_string};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct InsertPatientRequest {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct PatientIdRequest {
    #[serde(rename = "patientID")]
    pub patient_id: String,
}

#[derive(Deserialize)]
pub struct UpdatePatientRequest {
    #[serde(rename = "patientID")]
    pub patient_id: String,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub age: Option<i32>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub height: Option<f64>,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Deserialize)]
pub struct AddAppointmentRequest {
    pub date: String,
    #[serde(rename = "patientID")]
    pub patient_id: String,
    #[serde(rename = "doctorID")]
    pub doctor_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub issue: Option<String>,
}

#[derive(Deserialize)]
pub struct BillPaymentMethodRequest {
    #[serde(rename = "billingID", deserialize_with = "number_or_string")]
    pub billing_id: i32,
    pub paymentmethod: String,
}

#[derive(Deserialize)]
pub struct BillPaymentRequest {
    #[serde(rename = "billingID", deserialize_with = "number_or_string")]
    pub billing_id: i32,
}

/// Every field is optional here so blank input can be rejected with a
/// validation message instead of a decoder error.
#[derive(Deserialize)]
pub struct AddFeedRequest {
    #[serde(default, rename = "patientID")]
    pub patient_id: Option<String>,
    #[serde(default, rename = "doctorID")]
    pub doctor_id: Option<String>,
    #[serde(default)]
    pub feed: Option<String>,
}

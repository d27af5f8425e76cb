use crate::utils::{number_or_string, opt_number_or_string};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct InsertDoctorRequest {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct DoctorIdRequest {
    #[serde(rename = "doctorID")]
    pub doctor_id: String,
}

#[derive(Deserialize)]
pub struct UpdateDoctorRequest {
    #[serde(rename = "doctorID")]
    pub doctor_id: String,
    #[serde(default, deserialize_with = "opt_number_or_string")]
    pub age: Option<i32>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// Identifies one appointment of one doctor; both keys must match.
#[derive(Deserialize)]
pub struct AppointmentKeyRequest {
    #[serde(rename = "appointmentID", deserialize_with = "number_or_string")]
    pub appointment_id: i32,
    #[serde(rename = "doctorID")]
    pub doctor_id: String,
}

#[derive(Deserialize)]
pub struct DocBillRequest {
    #[serde(rename = "appointmentID", default, deserialize_with = "opt_number_or_string")]
    pub appointment_id: Option<i32>,
    #[serde(deserialize_with = "number_or_string")]
    pub amount: f64,
    #[serde(rename = "patientID")]
    pub patient_id: String,
    #[serde(rename = "doctorID")]
    pub doctor_id: String,
}

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DoctorDetailsResponse {
    pub name: String,
    pub age: Option<i32>,
    pub sex: Option<String>,
    pub specialization: Option<String>,
    pub department: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DoctorAppointmentItem {
    pub date: String,
    pub patient: String,
    pub status: String,
    #[serde(rename = "appointmentID")]
    pub appointment_id: i32,
}

#[derive(Debug, Serialize)]
pub struct PatientNameItem {
    #[serde(rename = "patientID")]
    pub patient_id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct DocBillResponse {
    pub message: &'static str,
    #[serde(rename = "billingID")]
    pub billing_id: u64,
}

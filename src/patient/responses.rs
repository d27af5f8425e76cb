use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PatientDetailsResponse {
    pub name: String,
    pub age: Option<i32>,
    pub sex: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub contact: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DoctorNameItem {
    #[serde(rename = "doctorID")]
    pub doctor_id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct AppointmentItem {
    pub date: String,
    pub doctor: String,
    pub status: String,
}

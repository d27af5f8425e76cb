use crate::schema::appointment;
use chrono::NaiveDate;
use diesel::sql_types::{Date, Integer, Varchar};

#[derive(Insertable)]
#[table_name = "appointment"]
pub struct NewAppointment {
    pub date: NaiveDate,
    pub patient_id: String,
    pub doctor_id: String,
    pub status: String,
    pub issue: Option<String>,
}

/// Row of the `GetAppointmentDetails(patientID)` result set.
#[derive(QueryableByName)]
pub struct PatientAppointmentRow {
    #[sql_type = "Date"]
    pub date: NaiveDate,
    #[sql_type = "Varchar"]
    pub name: String,
    #[sql_type = "Varchar"]
    pub status: String,
}

/// Row of the nested doctor-side appointment query.
#[derive(QueryableByName)]
pub struct DoctorAppointmentRow {
    #[sql_type = "Date"]
    pub date: NaiveDate,
    #[sql_type = "Integer"]
    #[column_name = "appointmentID"]
    pub appointment_id: i32,
    #[sql_type = "Varchar"]
    pub patient: String,
    #[sql_type = "Varchar"]
    pub status: String,
}

pub const APPOINT_STATUS_PENDING: &str = "pending";
pub const APPOINT_STATUS_CONFIRMED: &str = "CONFIRMED";

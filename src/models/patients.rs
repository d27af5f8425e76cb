use crate::schema::patient;

#[derive(Insertable)]
#[table_name = "patient"]
pub struct NewPatient {
    pub patient_id: String,
    pub name: String,
}

/// Columns returned by `/patientdetails`, in select order.
#[derive(Queryable)]
pub struct PatientDetails {
    pub name: String,
    pub age: Option<i32>,
    pub sex: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub contact: Option<String>,
    pub address: Option<String>,
}

#[derive(AsChangeset)]
#[table_name = "patient"]
#[changeset_options(treat_none_as_null = "true")]
pub struct UpdatePatient {
    pub age: Option<i32>,
    pub sex: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub contact: Option<String>,
    pub address: Option<String>,
}

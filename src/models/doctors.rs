use crate::schema::doctor;
use diesel::sql_types::Varchar;

#[derive(Insertable)]
#[table_name = "doctor"]
pub struct NewDoctor {
    pub doctor_id: String,
    pub name: String,
}

#[derive(Queryable)]
pub struct DoctorDetails {
    pub name: String,
    pub age: Option<i32>,
    pub sex: Option<String>,
    pub specialization: Option<String>,
    pub department: Option<String>,
}

#[derive(AsChangeset)]
#[table_name = "doctor"]
#[changeset_options(treat_none_as_null = "true")]
pub struct UpdateDoctor {
    pub age: Option<i32>,
    pub sex: Option<String>,
    pub specialization: Option<String>,
    pub department: Option<String>,
}

/// Row of the `GetDoctorNames()` result set. The procedure is owned by the
/// database, and it must select columns named `doctorID` and `name`.
#[derive(QueryableByName)]
pub struct DoctorNameRow {
    #[sql_type = "Varchar"]
    #[column_name = "doctorID"]
    pub doctor_id: String,
    #[sql_type = "Varchar"]
    pub name: String,
}

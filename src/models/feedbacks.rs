use crate::schema::feedback;

#[derive(Insertable)]
#[table_name = "feedback"]
pub struct NewFeedback {
    pub patient_id: String,
    pub doctor_id: String,
    pub feed: String,
}

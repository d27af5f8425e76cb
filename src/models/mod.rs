pub mod appointments;
pub mod billings;
pub mod doctors;
pub mod feedbacks;
pub mod patients;
pub mod users;

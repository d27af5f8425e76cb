use diesel::{prelude::*, MysqlConnection};

use crate::error::{ApiError, ApiResult, OrBackend};

/// Billing is only accepted for doctors that hold at least one appointment.
pub fn assert_doctor_has_appointment(conn: &MysqlConnection, did: &str) -> ApiResult<()> {
    use crate::schema::appointment;

    let res = appointment::table
        .filter(appointment::doctor_id.eq(did))
        .select(appointment::appointment_id)
        .first::<i32>(conn)
        .optional()
        .or_backend("Error checking doctorID")?;

    if res.is_none() {
        return Err(ApiError::validation("Invalid doctorID"));
    }

    Ok(())
}

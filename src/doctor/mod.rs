mod requests;
mod responses;

use crate::{
    database::{assert, get_db_conn, get_last_insert_id},
    error::{ApiError, ApiResult, OrBackend},
    models::{
        appointments::{DoctorAppointmentRow, APPOINT_STATUS_CONFIRMED},
        billings::{BillData, NewBilling, BILL_METHOD_UNSET, BILL_STATUS_PENDING},
        doctors::{DoctorDetails, NewDoctor, UpdateDoctor},
    },
    protocol::{BillItem, ExecResponse, MessageResponse},
    utils::format_date,
    DbPool,
};
use actix_web::{get, post, web, HttpResponse};
use chrono::NaiveDate;
use diesel::{prelude::*, sql_types::Varchar};

use self::{requests::*, responses::*};

const NESTED_APPOINTMENTS_SQL: &str = "SELECT date, appointmentID, patient, status FROM ( \
     SELECT appointment.date, appointment.appointmentID, patient.name AS patient, appointment.status \
     FROM appointment NATURAL JOIN patient WHERE appointment.doctorID = ?) AS nested_query";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(insert_doctor)
        .service(doctor_details)
        .service(update_doctor)
        .service(appointment_details)
        .service(appointment_details_nested)
        .service(cancel_appointment)
        .service(confirm_appointment)
        .service(patient_names)
        .service(doc_bill)
        .service(payment_details);
}

crate::post_funcs! {
    (insert_doctor, "/insertintodoctor", InsertDoctorRequest, ExecResponse),
    (doctor_details, "/doctordetails", DoctorIdRequest, DoctorDetailsResponse),
    (update_doctor, "/updatedoctor", UpdateDoctorRequest, ExecResponse),
    (appointment_details, "/appointmentdetailsfordoctor", DoctorIdRequest, Vec<DoctorAppointmentItem>),
    (appointment_details_nested, "/appointmentdetailsfordoctorrr", DoctorIdRequest, Vec<DoctorAppointmentItem>),
    (cancel_appointment, "/cancelappointment", AppointmentKeyRequest, MessageResponse),
    (confirm_appointment, "/confirmappointment", AppointmentKeyRequest, MessageResponse),
    (doc_bill, "/docbill", DocBillRequest, DocBillResponse),
    (payment_details, "/paymentdetailsfordoctor", DoctorIdRequest, Vec<BillItem>),
}

crate::get_funcs! {
    (patient_names, "/patientnames", Vec<PatientNameItem>),
}

async fn insert_doctor_impl(
    pool: web::Data<DbPool>,
    info: web::Json<InsertDoctorRequest>,
) -> ApiResult<ExecResponse> {
    use crate::schema::doctor;
    const ERR: &str = "Error in Inserting into doctor";

    let info = info.into_inner();
    let data = NewDoctor {
        doctor_id: info.email,
        name: info.name,
    };

    // keyed by the caller's email, no generated id to report
    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let affected = web::block(move || {
        diesel::insert_into(doctor::table)
            .values(data)
            .execute(&conn)
            .or_backend(ERR)
    })
    .await?;

    Ok(ExecResponse::affected(affected))
}

async fn doctor_details_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DoctorIdRequest>,
) -> ApiResult<DoctorDetailsResponse> {
    use crate::schema::doctor;
    const ERR: &str = "Error fetching doctor details";

    let info = info.into_inner();
    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let res = web::block(move || {
        doctor::table
            .filter(doctor::doctor_id.eq(info.doctor_id))
            .select((
                doctor::name,
                doctor::age,
                doctor::sex,
                doctor::specialization,
                doctor::department,
            ))
            .first::<DoctorDetails>(&conn)
            .optional()
            .or_backend(ERR)
    })
    .await?;

    let data = res.ok_or_else(|| ApiError::not_found("Doctor not found"))?;
    Ok(DoctorDetailsResponse {
        name: data.name,
        age: data.age,
        sex: data.sex,
        specialization: data.specialization,
        department: data.department,
    })
}

async fn update_doctor_impl(
    pool: web::Data<DbPool>,
    info: web::Json<UpdateDoctorRequest>,
) -> ApiResult<ExecResponse> {
    use crate::schema::doctor;
    const ERR: &str = "Error updating doctor details";

    let info = info.into_inner();
    let doctor_id = info.doctor_id;
    let data = UpdateDoctor {
        age: info.age,
        sex: info.sex,
        specialization: info.specialization,
        department: info.department,
    };

    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let affected = web::block(move || {
        diesel::update(doctor::table.filter(doctor::doctor_id.eq(doctor_id)))
            .set(&data)
            .execute(&conn)
            .or_backend(ERR)
    })
    .await?;

    Ok(ExecResponse::affected(affected))
}

async fn appointment_details_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DoctorIdRequest>,
) -> ApiResult<Vec<DoctorAppointmentItem>> {
    use crate::schema::{appointment, patient};
    const ERR: &str = "Error fetching appointment details for doctor";

    let info = info.into_inner();
    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let rows = web::block(move || {
        appointment::table
            .inner_join(patient::table)
            .filter(appointment::doctor_id.eq(info.doctor_id))
            .select((
                appointment::date,
                appointment::appointment_id,
                patient::name,
                appointment::status,
            ))
            .get_results::<(NaiveDate, i32, String, String)>(&conn)
            .or_backend(ERR)
    })
    .await?;

    let appointments: Vec<_> = rows
        .into_iter()
        .map(|(date, appointment_id, patient, status)| DoctorAppointmentItem {
            date: format_date(&date),
            patient,
            status,
            appointment_id,
        })
        .collect();
    tracing::debug!("appointments for doctor: {:?}", appointments);

    Ok(appointments)
}

async fn appointment_details_nested_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DoctorIdRequest>,
) -> ApiResult<Vec<DoctorAppointmentItem>> {
    const ERR: &str = "Error fetching appointment details for doctor";

    let info = info.into_inner();
    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let rows = web::block(move || {
        diesel::sql_query(NESTED_APPOINTMENTS_SQL)
            .bind::<Varchar, _>(info.doctor_id)
            .load::<DoctorAppointmentRow>(&conn)
            .or_backend(ERR)
    })
    .await?;

    let appointments: Vec<_> = rows
        .into_iter()
        .map(|row| DoctorAppointmentItem {
            date: format_date(&row.date),
            patient: row.patient,
            status: row.status,
            appointment_id: row.appointment_id,
        })
        .collect();
    tracing::debug!("appointments for doctor: {:?}", appointments);

    Ok(appointments)
}

async fn cancel_appointment_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AppointmentKeyRequest>,
) -> ApiResult<MessageResponse> {
    use crate::schema::appointment;
    const ERR: &str = "Error canceling appointment";

    let info = info.into_inner();
    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let affected = web::block(move || {
        diesel::delete(
            appointment::table
                .filter(appointment::appointment_id.eq(info.appointment_id))
                .filter(appointment::doctor_id.eq(info.doctor_id)),
        )
        .execute(&conn)
        .or_backend(ERR)
    })
    .await?;
    tracing::debug!(affected, "appointment cancel");

    Ok(MessageResponse::new("Appointment canceled successfully"))
}

async fn confirm_appointment_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AppointmentKeyRequest>,
) -> ApiResult<MessageResponse> {
    use crate::schema::appointment;
    const ERR: &str = "Error confirming appointment";

    let info = info.into_inner();
    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let affected = web::block(move || {
        diesel::update(
            appointment::table
                .filter(appointment::appointment_id.eq(info.appointment_id))
                .filter(appointment::doctor_id.eq(info.doctor_id)),
        )
        .set(appointment::status.eq(APPOINT_STATUS_CONFIRMED))
        .execute(&conn)
        .or_backend(ERR)
    })
    .await?;
    tracing::debug!(affected, "appointment confirm");

    Ok(MessageResponse::new("Appointment confirmed successfully"))
}

async fn patient_names_impl(pool: web::Data<DbPool>) -> ApiResult<Vec<PatientNameItem>> {
    use crate::schema::patient;
    const ERR: &str = "Error fetching patients";

    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let rows = web::block(move || {
        patient::table
            .select((patient::patient_id, patient::name))
            .get_results::<(String, String)>(&conn)
            .or_backend(ERR)
    })
    .await?;

    let patients: Vec<_> = rows
        .into_iter()
        .map(|(patient_id, name)| PatientNameItem { patient_id, name })
        .collect();
    tracing::debug!(count = patients.len(), "patient names: {:?}", patients);

    Ok(patients)
}

async fn doc_bill_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DocBillRequest>,
) -> ApiResult<DocBillResponse> {
    use crate::schema::billing;
    const ERR: &str = "Error inserting into billing table";

    let info = info.into_inner();
    let data = NewBilling {
        appointment_id: info.appointment_id,
        amount: info.amount,
        patient_id: info.patient_id,
        doctor_id: info.doctor_id,
        paymentmethod: BILL_METHOD_UNSET.to_string(),
        status: BILL_STATUS_PENDING.to_string(),
    };

    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let billing_id = web::block(move || {
        conn.transaction::<_, ApiError, _>(|| {
            assert::assert_doctor_has_appointment(&conn, &data.doctor_id)?;

            diesel::insert_into(billing::table)
                .values(&data)
                .execute(&conn)
                .or_backend(ERR)?;
            get_last_insert_id(&conn).or_backend(ERR)
        })
    })
    .await?;

    Ok(DocBillResponse {
        message: "Billing entry added successfully",
        billing_id,
    })
}

async fn payment_details_impl(
    pool: web::Data<DbPool>,
    info: web::Json<DoctorIdRequest>,
) -> ApiResult<Vec<BillItem>> {
    use crate::schema::billing;
    const ERR: &str = "Error fetching payment details for doctor";

    let info = info.into_inner();
    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let bills = web::block(move || {
        billing::table
            .filter(billing::doctor_id.eq(info.doctor_id))
            .select((
                billing::paymentmethod,
                billing::amount,
                billing::status,
                billing::billing_id,
            ))
            .get_results::<BillData>(&conn)
            .or_backend(ERR)
    })
    .await?;

    let bills: Vec<BillItem> = bills.into_iter().map(BillItem::from).collect();
    tracing::debug!("bills for doctor: {:?}", bills);

    Ok(bills)
}

mod requests;
mod responses;

use crate::{
    database::{get_db_conn, get_last_insert_id},
    error::{ApiError, ApiResult, OrBackend},
    models::{
        appointments::{NewAppointment, PatientAppointmentRow, APPOINT_STATUS_PENDING},
        billings::{BillData, BILL_STATUS_PAID},
        doctors::DoctorNameRow,
        feedbacks::NewFeedback,
        patients::{NewPatient, PatientDetails, UpdatePatient},
    },
    protocol::{BillItem, ExecResponse, MessageResponse},
    utils::{format_date, is_blank, parse_date_str},
    DbPool,
};
use actix_web::{get, post, web, HttpResponse};
use chrono::NaiveDate;
use diesel::{prelude::*, sql_types::Varchar};

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(insert_patient)
        .service(patient_details)
        .service(update_patient)
        .service(doctor_names)
        .service(appointment_details)
        .service(appointment_details_proc)
        .service(add_appointment)
        .service(payment_details)
        .service(bill_payment_method)
        .service(bill_payment)
        .service(add_feed);
}

crate::post_funcs! {
    (insert_patient, "/insertintopatient", InsertPatientRequest, ExecResponse),
    (patient_details, "/patientdetails", PatientIdRequest, PatientDetailsResponse),
    (update_patient, "/updatepatient", UpdatePatientRequest, ExecResponse),
    (appointment_details, "/appointmentdetails", PatientIdRequest, Vec<AppointmentItem>),
    (appointment_details_proc, "/apppointmmentdetails", PatientIdRequest, Vec<AppointmentItem>),
    (add_appointment, "/addappointment", AddAppointmentRequest, ExecResponse),
    (payment_details, "/paymentdetailsforpatient", PatientIdRequest, Vec<BillItem>),
    (bill_payment_method, "/billpaymentmethod", BillPaymentMethodRequest, MessageResponse),
    (bill_payment, "/billpayment", BillPaymentRequest, MessageResponse),
    (add_feed, "/addfeed", AddFeedRequest, MessageResponse),
}

crate::get_funcs! {
    (doctor_names, "/doctornames", Vec<DoctorNameItem>),
}

async fn insert_patient_impl(
    pool: web::Data<DbPool>,
    info: web::Json<InsertPatientRequest>,
) -> ApiResult<ExecResponse> {
    use crate::schema::patient;
    const ERR: &str = "Error in Inserting into Patient";

    let info = info.into_inner();
    let data = NewPatient {
        patient_id: info.email,
        name: info.name,
    };

    // keyed by the caller's email, no generated id to report
    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let affected = web::block(move || {
        diesel::insert_into(patient::table)
            .values(data)
            .execute(&conn)
            .or_backend(ERR)
    })
    .await?;

    Ok(ExecResponse::affected(affected))
}

async fn patient_details_impl(
    pool: web::Data<DbPool>,
    info: web::Json<PatientIdRequest>,
) -> ApiResult<PatientDetailsResponse> {
    use crate::schema::patient;
    const ERR: &str = "Error fetching patient details";

    let info = info.into_inner();
    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let res = web::block(move || {
        patient::table
            .filter(patient::patient_id.eq(info.patient_id))
            .select((
                patient::name,
                patient::age,
                patient::sex,
                patient::height,
                patient::weight,
                patient::contact,
                patient::address,
            ))
            .first::<PatientDetails>(&conn)
            .optional()
            .or_backend(ERR)
    })
    .await?;

    let data = res.ok_or_else(|| ApiError::not_found("Patient not found"))?;
    Ok(PatientDetailsResponse {
        name: data.name,
        age: data.age,
        sex: data.sex,
        height: data.height,
        weight: data.weight,
        contact: data.contact,
        address: data.address,
    })
}

async fn update_patient_impl(
    pool: web::Data<DbPool>,
    info: web::Json<UpdatePatientRequest>,
) -> ApiResult<ExecResponse> {
    use crate::schema::patient;
    const ERR: &str = "Error updating patient details";

    let info = info.into_inner();
    let patient_id = info.patient_id;
    let data = UpdatePatient {
        age: info.age,
        sex: info.sex,
        height: info.height,
        weight: info.weight,
        contact: info.contact,
        address: info.address,
    };

    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let affected = web::block(move || {
        diesel::update(patient::table.filter(patient::patient_id.eq(patient_id)))
            .set(&data)
            .execute(&conn)
            .or_backend(ERR)
    })
    .await?;

    Ok(ExecResponse::affected(affected))
}

/// Lists doctors through the `GetDoctorNames()` procedure, which has to return
/// `doctorID` and `name` columns.
async fn doctor_names_impl(pool: web::Data<DbPool>) -> ApiResult<Vec<DoctorNameItem>> {
    const ERR: &str = "Error fetching doctors";

    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let rows = web::block(move || {
        diesel::sql_query("CALL GetDoctorNames()")
            .load::<DoctorNameRow>(&conn)
            .or_backend(ERR)
    })
    .await?;

    let doctors: Vec<_> = rows
        .into_iter()
        .map(|row| DoctorNameItem {
            doctor_id: row.doctor_id,
            name: row.name,
        })
        .collect();
    tracing::debug!(count = doctors.len(), "doctor names: {:?}", doctors);

    Ok(doctors)
}

async fn appointment_details_impl(
    pool: web::Data<DbPool>,
    info: web::Json<PatientIdRequest>,
) -> ApiResult<Vec<AppointmentItem>> {
    use crate::schema::{appointment, doctor};
    const ERR: &str = "Error fetching appointment details";

    let info = info.into_inner();
    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let rows = web::block(move || {
        appointment::table
            .inner_join(doctor::table)
            .filter(appointment::patient_id.eq(info.patient_id))
            .select((appointment::date, doctor::name, appointment::status))
            .get_results::<(NaiveDate, String, String)>(&conn)
            .or_backend(ERR)
    })
    .await?;

    let appointments: Vec<_> = rows
        .into_iter()
        .map(|(date, doctor, status)| AppointmentItem {
            date: format_date(&date),
            doctor,
            status,
        })
        .collect();
    tracing::debug!("appointments: {:?}", appointments);

    Ok(appointments)
}

async fn appointment_details_proc_impl(
    pool: web::Data<DbPool>,
    info: web::Json<PatientIdRequest>,
) -> ApiResult<Vec<AppointmentItem>> {
    const ERR: &str = "Error fetching appointment details";

    let info = info.into_inner();
    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let rows = web::block(move || {
        diesel::sql_query("CALL GetAppointmentDetails(?)")
            .bind::<Varchar, _>(info.patient_id)
            .load::<PatientAppointmentRow>(&conn)
            .or_backend(ERR)
    })
    .await?;

    let appointments: Vec<_> = rows
        .into_iter()
        .map(|row| AppointmentItem {
            date: format_date(&row.date),
            doctor: row.name,
            status: row.status,
        })
        .collect();
    tracing::debug!("appointments: {:?}", appointments);

    Ok(appointments)
}

async fn add_appointment_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AddAppointmentRequest>,
) -> ApiResult<ExecResponse> {
    use crate::schema::appointment;
    const ERR: &str = "Error in Inserting into appointment";

    let info = info.into_inner();
    let data = NewAppointment {
        date: parse_date_str(&info.date)?,
        patient_id: info.patient_id,
        doctor_id: info.doctor_id,
        status: info
            .status
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| APPOINT_STATUS_PENDING.to_string()),
        issue: info.issue,
    };
    tracing::debug!(
        patient = %data.patient_id,
        doctor = %data.doctor_id,
        date = %data.date,
        "adding appointment"
    );

    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let res = web::block(move || {
        let affected = diesel::insert_into(appointment::table)
            .values(data)
            .execute(&conn)
            .or_backend(ERR)?;
        let insert_id = get_last_insert_id(&conn).or_backend(ERR)?;
        Ok::<_, ApiError>(ExecResponse::inserted(affected, insert_id))
    })
    .await?;

    Ok(res)
}

async fn payment_details_impl(
    pool: web::Data<DbPool>,
    info: web::Json<PatientIdRequest>,
) -> ApiResult<Vec<BillItem>> {
    use crate::schema::billing;
    const ERR: &str = "Error fetching payment details for patient";

    let info = info.into_inner();
    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let bills = web::block(move || {
        billing::table
            .filter(billing::patient_id.eq(info.patient_id))
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
    tracing::debug!("bills for patient: {:?}", bills);

    Ok(bills)
}

async fn bill_payment_method_impl(
    pool: web::Data<DbPool>,
    info: web::Json<BillPaymentMethodRequest>,
) -> ApiResult<MessageResponse> {
    use crate::schema::billing;
    const ERR: &str = "Error updating payment method for billing";

    let info = info.into_inner();
    let conn = get_db_conn(&pool).or_backend(ERR)?;
    web::block(move || {
        diesel::update(billing::table.filter(billing::billing_id.eq(info.billing_id)))
            .set(billing::paymentmethod.eq(info.paymentmethod))
            .execute(&conn)
            .or_backend(ERR)
    })
    .await?;

    Ok(MessageResponse::new("Payment method updated successfully"))
}

async fn bill_payment_impl(
    pool: web::Data<DbPool>,
    info: web::Json<BillPaymentRequest>,
) -> ApiResult<MessageResponse> {
    use crate::schema::billing;
    const ERR: &str = "Error updating payment status for billing";

    let billing_id = info.into_inner().billing_id;
    let conn = get_db_conn(&pool).or_backend(ERR)?;
    web::block(move || {
        diesel::update(billing::table.filter(billing::billing_id.eq(billing_id)))
            .set(billing::status.eq(BILL_STATUS_PAID))
            .execute(&conn)
            .or_backend(ERR)
    })
    .await?;

    Ok(MessageResponse::new("Payment updated successfully"))
}

async fn add_feed_impl(
    pool: web::Data<DbPool>,
    info: web::Json<AddFeedRequest>,
) -> ApiResult<MessageResponse> {
    use crate::schema::feedback;
    const ERR: &str = "Error inserting feedback.";

    let info = info.into_inner();
    if is_blank(&info.patient_id) || is_blank(&info.doctor_id) || is_blank(&info.feed) {
        return Err(ApiError::validation("Please provide all required fields."));
    }
    let data = NewFeedback {
        patient_id: info.patient_id.unwrap_or_default(),
        doctor_id: info.doctor_id.unwrap_or_default(),
        feed: info.feed.unwrap_or_default(),
    };

    let conn = get_db_conn(&pool).or_backend(ERR)?;
    web::block(move || {
        diesel::insert_into(feedback::table)
            .values(data)
            .execute(&conn)
            .or_backend(ERR)
    })
    .await?;

    Ok(MessageResponse::new("Feedback added successfully."))
}

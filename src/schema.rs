table! {
    appointment (appointment_id) {
        #[sql_name = "appointmentID"]
        appointment_id -> Integer,
        date -> Date,
        #[sql_name = "patientID"]
        patient_id -> Varchar,
        #[sql_name = "doctorID"]
        doctor_id -> Varchar,
        status -> Varchar,
        issue -> Nullable<Text>,
    }
}

table! {
    billing (billing_id) {
        #[sql_name = "billingID"]
        billing_id -> Integer,
        #[sql_name = "appointmentID"]
        appointment_id -> Nullable<Integer>,
        amount -> Double,
        #[sql_name = "patientID"]
        patient_id -> Varchar,
        #[sql_name = "doctorID"]
        doctor_id -> Varchar,
        paymentmethod -> Varchar,
        status -> Varchar,
    }
}

table! {
    doctor (doctor_id) {
        #[sql_name = "doctorID"]
        doctor_id -> Varchar,
        name -> Varchar,
        age -> Nullable<Integer>,
        sex -> Nullable<Varchar>,
        specialization -> Nullable<Varchar>,
        department -> Nullable<Varchar>,
    }
}

table! {
    feedback (feedback_id) {
        #[sql_name = "feedbackID"]
        feedback_id -> Integer,
        #[sql_name = "patientID"]
        patient_id -> Varchar,
        #[sql_name = "doctorID"]
        doctor_id -> Varchar,
        feed -> Text,
    }
}

table! {
    patient (patient_id) {
        #[sql_name = "patientID"]
        patient_id -> Varchar,
        name -> Varchar,
        age -> Nullable<Integer>,
        sex -> Nullable<Varchar>,
        height -> Nullable<Double>,
        weight -> Nullable<Double>,
        contact -> Nullable<Varchar>,
        address -> Nullable<Varchar>,
    }
}

table! {
    users (id) {
        id -> Unsigned<Bigint>,
        name -> Varchar,
        email -> Varchar,
        password -> Char,
        role -> Varchar,
    }
}

joinable!(appointment -> doctor (doctor_id));
joinable!(appointment -> patient (patient_id));

allow_tables_to_appear_in_same_query!(
    appointment,
    billing,
    doctor,
    feedback,
    patient,
    users,
);

mod requests;
mod responses;

use crate::{
    database::{get_db_conn, get_last_insert_id},
    error::{ApiError, ApiResult, OrBackend},
    models::users::NewUser,
    protocol::ExecResponse,
    utils::hash_password,
    DbPool,
};
use actix_web::{post, web, HttpResponse};
use diesel::prelude::*;

use self::{requests::*, responses::*};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(register).service(login);
}

crate::post_funcs! {
    (register, "/register", RegisterRequest, ExecResponse),
    (login, "/login", LoginRequest, LoginResponse),
}

async fn register_impl(
    pool: web::Data<DbPool>,
    info: web::Json<RegisterRequest>,
) -> ApiResult<ExecResponse> {
    use crate::schema::users;
    const ERR: &str = "Error in Register";

    let info = info.into_inner();
    let data = NewUser {
        name: info.name,
        email: info.email,
        password: hash_password(&info.password),
        role: info.role,
    };

    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let res = web::block(move || {
        let affected = diesel::insert_into(users::table)
            .values(data)
            .execute(&conn)
            .or_backend(ERR)?;
        let insert_id = get_last_insert_id(&conn).or_backend(ERR)?;
        Ok::<_, ApiError>(ExecResponse::inserted(affected, insert_id))
    })
    .await?;

    Ok(res)
}

async fn login_impl(
    pool: web::Data<DbPool>,
    info: web::Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    use crate::schema::users;
    const ERR: &str = "Error in Login";

    let info = info.into_inner();
    let hashed_password = hash_password(&info.password);

    let conn = get_db_conn(&pool).or_backend(ERR)?;
    let role = web::block(move || {
        users::table
            .filter(users::email.eq(info.email))
            .filter(users::password.eq(hashed_password))
            .select(users::role)
            .first::<String>(&conn)
            .optional()
            .or_backend(ERR)
    })
    .await?;

    match role {
        Some(role) => Ok(LoginResponse::success(role)),
        None => {
            tracing::debug!("login rejected: no matching credentials");
            Ok(LoginResponse::no_record())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_shapes() {
        let ok = serde_json::to_value(LoginResponse::success("doctor".to_string())).unwrap();
        assert_eq!(ok, serde_json::json!({ "result": "Success", "role": "doctor" }));

        let missing = serde_json::to_value(LoginResponse::no_record()).unwrap();
        assert_eq!(missing, serde_json::json!({ "result": "No Record Found" }));
    }
}

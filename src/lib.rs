//! Hospital management REST backend: patients, doctors, appointments,
//! billing and feedback over MySQL.

#[macro_use]
extern crate diesel;

pub mod config;
pub mod database;
pub mod error;

mod doctor;
mod models;
mod patient;
mod protocol;
mod schema;
mod user;
mod utils;

use actix_web::{get, web, HttpResponse, Responder};
use diesel::{r2d2::ConnectionManager, MysqlConnection};

use crate::error::ApiError;

pub type DbPool = r2d2::Pool<ConnectionManager<MysqlConnection>>;

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello World!")
}

/// Rejects undecodable bodies with the validation envelope instead of actix's plain-text error.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let err = ApiError::validation("Invalid request body").with_details(&err);
        crate::utils::log_failure("json", err).into()
    })
}

/// Registers every route. The app must also carry the pool as data and [`json_config`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index);
    user::config(cfg);
    patient::config(cfg);
    doctor::config(cfg);
}

#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:expr, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    pool: web::Data<DbPool>,
                    info: web::Json<$request>
                ) -> Result<HttpResponse, ApiError> {
                    let response: $response = [<$func_name _impl>](pool, info)
                        .await
                        .map_err(|err| crate::utils::log_failure($url, err))?;
                    Ok(HttpResponse::Ok().json(response))
                }
            }
        )+
    };
}

#[macro_export]
macro_rules! get_funcs {
    ( $( ( $func_name:ident, $url:expr, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[get($url)]
                async fn $func_name(pool: web::Data<DbPool>) -> Result<HttpResponse, ApiError> {
                    let response: $response = [<$func_name _impl>](pool)
                        .await
                        .map_err(|err| crate::utils::log_failure($url, err))?;
                    Ok(HttpResponse::Ok().json(response))
                }
            }
        )+
    };
}

use crate::error::{ApiError, ErrorKind};
use blake2::{Blake2b, Digest};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::{fmt::Display, str::FromStr};

pub fn log_failure(route: &str, err: ApiError) -> ApiError {
    match err.kind {
        ErrorKind::Backend => {
            tracing::error!(route, details = ?err.details, "{}", err.message)
        }
        _ => tracing::warn!(route, details = ?err.details, "{}", err.message),
    }
    err
}

pub fn hash_password<S: AsRef<str>>(password: S) -> String {
    format!("{:x}", Blake2b::digest(password.as_ref().as_bytes()))
}

pub fn is_blank(s: &Option<String>) -> bool {
    s.as_deref().map_or(true, |s| s.trim().is_empty())
}

pub fn parse_date_str<S: AsRef<str>>(s: S) -> Result<NaiveDate, ApiError> {
    let s = s.as_ref();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|t| t.naive_utc().date()))
        .map_err(|err| ApiError::validation("Invalid date").with_details(err))
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    String(String),
}

fn parse_number_str<T, E>(s: &str) -> Result<Option<T>, E>
where
    T: FromStr,
    T::Err: Display,
    E: serde::de::Error,
{
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    s.parse().map(Some).map_err(E::custom)
}

/// Accepts `42`, `"42"`, `null` or `""`; the last two decode as `None`.
pub fn opt_number_or_string<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<NumberOrString<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) => parse_number_str(&s),
    }
}

/// Like [`opt_number_or_string`], but the value must be present.
pub fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    opt_number_or_string(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("expected a number"))
}

use serde::Serialize;

pub const LOGIN_SUCCESS: &str = "Success";
pub const LOGIN_NO_RECORD: &str = "No Record Found";

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl LoginResponse {
    pub fn success(role: String) -> Self {
        Self {
            result: LOGIN_SUCCESS,
            role: Some(role),
        }
    }

    pub fn no_record() -> Self {
        Self {
            result: LOGIN_NO_RECORD,
            role: None,
        }
    }
}

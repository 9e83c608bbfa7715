//! # Response Formatting
//!
//! Success bodies. Both list endpoints share the `{message, data}` envelope.

use serde::Serialize;

/// List response
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub message: &'static str,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(message: &'static str, data: Vec<T>) -> Self {
        Self { message, data }
    }
}

/// Echo of a created user
#[derive(Debug, Clone, Serialize)]
pub struct UserEcho {
    pub name: String,
    pub email: String,
}

/// `201` body for `POST /api/users`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreatedResponse {
    pub message: &'static str,
    pub user_id: u64,
    pub user: UserEcho,
}

/// `201` body for `POST /api/orders`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatedResponse {
    pub message: &'static str,
    pub order_id: u64,
}

/// `201` body for `POST /api/applicants`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantCreatedResponse {
    pub message: &'static str,
    pub applicant_id: u64,
}

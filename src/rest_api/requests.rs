//! # Request Bodies
//!
//! Incoming JSON bodies and their presence checks.
//!
//! A required field is missing when it is absent, `null`, `false`, `0` or
//! the empty string. Any other value is accepted and stored as text:
//! strings verbatim, everything else as its JSON rendering (`42` -> "42").
//! Nothing else is checked: no trimming, no email shape, no length limits.

use serde::Deserialize;
use serde_json::Value;

use super::errors::{RestError, RestResult};
use crate::store::{NewApplicant, NewOrder, NewUser};

pub const USER_FIELDS_REQUIRED: &str = "Name and email are required fields.";

pub const ORDER_FIELDS_REQUIRED: &str = "Name, email and order message are required fields.";

pub const APPLICANT_FIELDS_REQUIRED: &str =
    "Name, email, position and resume are required fields.";

/// Text of a truthy field, `None` for a falsy one
fn present(field: Option<Value>) -> Option<String> {
    match field? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// `POST /api/users`
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
}

impl CreateUserRequest {
    pub fn validate(self) -> RestResult<NewUser> {
        match (present(self.name), present(self.email)) {
            (Some(name), Some(email)) => Ok(NewUser { name, email }),
            _ => Err(RestError::MissingFields(USER_FIELDS_REQUIRED)),
        }
    }
}

/// `POST /api/orders`
///
/// `pickup` and `payment` are optional; `message` is the order description.
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub pickup: Option<Value>,
    #[serde(default)]
    pub payment: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
}

impl CreateOrderRequest {
    pub fn validate(self) -> RestResult<NewOrder> {
        let pickup_time = present(self.pickup);
        let payment_method = present(self.payment);

        match (present(self.name), present(self.email), present(self.message)) {
            (Some(customer_name), Some(email), Some(order_description)) => Ok(NewOrder {
                customer_name,
                email,
                pickup_time,
                payment_method,
                order_description,
            }),
            _ => Err(RestError::MissingFields(ORDER_FIELDS_REQUIRED)),
        }
    }
}

/// `POST /api/applicants`
#[derive(Debug, Default, Deserialize)]
pub struct CreateApplicantRequest {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub position: Option<Value>,
    #[serde(default)]
    pub resume: Option<Value>,
}

impl CreateApplicantRequest {
    pub fn validate(self) -> RestResult<NewApplicant> {
        match (
            present(self.name),
            present(self.email),
            present(self.position),
            present(self.resume),
        ) {
            (Some(name), Some(email), Some(position), Some(resume)) => Ok(NewApplicant {
                name,
                email,
                position,
                resume,
            }),
            _ => Err(RestError::MissingFields(APPLICANT_FIELDS_REQUIRED)),
        }
    }
}

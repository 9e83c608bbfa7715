//! # REST API Module
//!
//! Request bodies, presence checks, success envelopes and the error
//! taxonomy shared by every JSON endpoint.

pub mod errors;
pub mod requests;
pub mod response;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use requests::{CreateApplicantRequest, CreateOrderRequest, CreateUserRequest};
pub use response::{
    ApplicantCreatedResponse, ListResponse, OrderCreatedResponse, UserCreatedResponse, UserEcho,
};

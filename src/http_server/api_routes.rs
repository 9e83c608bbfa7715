//! API HTTP Routes
//!
//! Users, orders and applicants. Every handler runs one statement through
//! the injected store and maps the outcome to a JSON response.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::observability::Event;
use crate::rest_api::{
    ApplicantCreatedResponse, CreateApplicantRequest, CreateOrderRequest, CreateUserRequest,
    ListResponse, OrderCreatedResponse, RestError, RestResult, UserCreatedResponse, UserEcho,
};
use crate::store::{Order, Store, User};

// ==================
// Shared State
// ==================

/// State shared across API handlers
pub struct ApiState {
    pub store: Arc<dyn Store>,
}

impl ApiState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

// ==================
// Messages
// ==================

const USERS_RETRIEVED: &str = "Users retrieved successfully";
const USERS_RETRIEVE_FAILED: &str = "Failed to retrieve users.";
const USER_ADDED: &str = "User added successfully";
const USER_ADD_FAILED: &str = "Failed to add user to the database.";

const ORDERS_RETRIEVED: &str = "Orders retrieved successfully";
const ORDERS_RETRIEVE_FAILED: &str = "Failed to retrieve orders.";
const ORDER_PLACED: &str = "Order placed successfully";
const ORDER_PLACE_FAILED: &str = "Failed to place order.";

const APPLICATION_SUBMITTED: &str = "Application submitted successfully";
const APPLICATION_SUBMIT_FAILED: &str = "Failed to submit application.";

// ==================
// API Routes
// ==================

/// Create API routes (mounted under `/api`)
pub fn api_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route("/orders", get(list_orders_handler).post(create_order_handler))
        .route("/applicants", post(create_applicant_handler))
        .with_state(state)
}

// ==================
// User Handlers
// ==================

async fn list_users_handler(
    State(state): State<Arc<ApiState>>,
) -> RestResult<Json<ListResponse<User>>> {
    let users = state
        .store
        .list_users()
        .await
        .map_err(|e| RestError::persistence(USERS_RETRIEVE_FAILED, e))?;

    Ok(Json(ListResponse::new(USERS_RETRIEVED, users)))
}

async fn create_user_handler(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> RestResult<(StatusCode, Json<UserCreatedResponse>)> {
    let Json(request) = body?;
    let user = request.validate()?;

    let user_id = state
        .store
        .insert_user(&user)
        .await
        .map_err(|e| RestError::persistence(USER_ADD_FAILED, e))?;

    info!(event = %Event::RowPersisted, table = "users", id = user_id, "user added");

    Ok((
        StatusCode::CREATED,
        Json(UserCreatedResponse {
            message: USER_ADDED,
            user_id,
            user: UserEcho {
                name: user.name,
                email: user.email,
            },
        }),
    ))
}

// ==================
// Order Handlers
// ==================

async fn list_orders_handler(
    State(state): State<Arc<ApiState>>,
) -> RestResult<Json<ListResponse<Order>>> {
    let orders = state
        .store
        .list_orders()
        .await
        .map_err(|e| RestError::persistence(ORDERS_RETRIEVE_FAILED, e))?;

    Ok(Json(ListResponse::new(ORDERS_RETRIEVED, orders)))
}

async fn create_order_handler(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> RestResult<(StatusCode, Json<OrderCreatedResponse>)> {
    let Json(request) = body?;
    let order = request.validate()?;

    let order_id = state
        .store
        .insert_order(&order)
        .await
        .map_err(|e| RestError::persistence(ORDER_PLACE_FAILED, e))?;

    info!(event = %Event::RowPersisted, table = "orders", id = order_id, "order placed");

    Ok((
        StatusCode::CREATED,
        Json(OrderCreatedResponse {
            message: ORDER_PLACED,
            order_id,
        }),
    ))
}

// ==================
// Applicant Handlers
// ==================

async fn create_applicant_handler(
    State(state): State<Arc<ApiState>>,
    body: Result<Json<CreateApplicantRequest>, JsonRejection>,
) -> RestResult<(StatusCode, Json<ApplicantCreatedResponse>)> {
    let Json(request) = body?;
    let applicant = request.validate()?;

    let applicant_id = state
        .store
        .insert_applicant(&applicant)
        .await
        .map_err(|e| RestError::persistence(APPLICATION_SUBMIT_FAILED, e))?;

    info!(
        event = %Event::RowPersisted,
        table = "applicants",
        id = applicant_id,
        "application submitted"
    );

    Ok((
        StatusCode::CREATED,
        Json(ApplicantCreatedResponse {
            message: APPLICATION_SUBMITTED,
            applicant_id,
        }),
    ))
}

//! Record types stored in the `users`, `orders` and `applicants` tables.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

// ==================
// Stored Rows
// ==================

/// A row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// A row of the `orders` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Order {
    pub id: u64,
    pub customer_name: String,
    pub email: String,
    pub pickup_time: Option<String>,
    pub payment_method: Option<String>,
    pub order_description: String,
    pub created_at: DateTime<Utc>,
}

/// A row of the `applicants` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Applicant {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub position: String,
    pub resume: String,
}

// ==================
// Insert Payloads
// ==================

/// Validated fields for a new user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Validated fields for a new order.
///
/// `created_at` is assigned by the storage layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_name: String,
    pub email: String,
    pub pickup_time: Option<String>,
    pub payment_method: Option<String>,
    pub order_description: String,
}

/// Validated fields for a new applicant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplicant {
    pub name: String,
    pub email: String,
    pub position: String,
    pub resume: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_order_serializes_column_names() {
        let order = Order {
            id: 7,
            customer_name: "Bob".to_string(),
            email: "b@x.com".to_string(),
            pickup_time: None,
            payment_method: Some("card".to_string()),
            order_description: "2 coffees".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["customer_name"], "Bob");
        assert!(json["pickup_time"].is_null());
        assert_eq!(json["payment_method"], "card");
        assert_eq!(json["order_description"], "2 coffees");
        assert_eq!(json["created_at"], "2024-05-01T12:00:00Z");
    }
}

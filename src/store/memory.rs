//! In-memory store.
//!
//! Mirrors the MySQL backend's observable behaviour (generated ids, order
//! listing newest first) without a server. Switching it offline makes every
//! call fail before touching any table, the way an unreachable database
//! would.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use super::models::{Applicant, NewApplicant, NewOrder, NewUser, Order, User};
use super::{Store, StoreError, StoreResult};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    orders: Vec<Order>,
    applicants: Vec<Applicant>,
    next_user_id: u64,
    next_order_id: u64,
    next_applicant_id: u64,
}

fn next_id(counter: &mut u64) -> u64 {
    *counter += 1;
    *counter
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts offline
    pub fn offline() -> Self {
        let store = Self::default();
        store.set_offline(true);
        store
    }

    /// Toggle the simulated outage
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Snapshot of stored applicants (there is no list endpoint for them)
    pub fn applicants(&self) -> StoreResult<Vec<Applicant>> {
        Ok(self.tables()?.applicants.clone())
    }

    fn tables(&self) -> StoreResult<MutexGuard<'_, Tables>> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "connection refused (simulated outage)".to_string(),
            ));
        }
        self.tables
            .lock()
            .map_err(|_| StoreError::Unavailable("table lock poisoned".to_string()))
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn ping(&self) -> StoreResult<()> {
        self.tables().map(|_| ())
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.tables()?.users.clone())
    }

    async fn insert_user(&self, user: &NewUser) -> StoreResult<u64> {
        let mut tables = self.tables()?;
        let id = next_id(&mut tables.next_user_id);
        tables.users.push(User {
            id,
            name: user.name.clone(),
            email: user.email.clone(),
        });
        Ok(id)
    }

    async fn list_orders(&self) -> StoreResult<Vec<Order>> {
        let mut orders = self.tables()?.orders.clone();
        orders.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(orders)
    }

    async fn insert_order(&self, order: &NewOrder) -> StoreResult<u64> {
        let mut tables = self.tables()?;
        let id = next_id(&mut tables.next_order_id);
        tables.orders.push(Order {
            id,
            customer_name: order.customer_name.clone(),
            email: order.email.clone(),
            pickup_time: order.pickup_time.clone(),
            payment_method: order.payment_method.clone(),
            order_description: order.order_description.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn insert_applicant(&self, applicant: &NewApplicant) -> StoreResult<u64> {
        let mut tables = self.tables()?;
        let id = next_id(&mut tables.next_applicant_id);
        tables.applicants.push(Applicant {
            id,
            name: applicant.name.clone(),
            email: applicant.email.clone(),
            position: applicant.position.clone(),
            resume: applicant.resume.clone(),
        });
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_order(description: &str) -> NewOrder {
        NewOrder {
            customer_name: "Bob".to_string(),
            email: "b@x.com".to_string(),
            pickup_time: None,
            payment_method: None,
            order_description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential_per_table() {
        let store = MemoryStore::new();
        let user = NewUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        assert_eq!(store.insert_user(&user).await.unwrap(), 1);
        assert_eq!(store.insert_user(&user).await.unwrap(), 2);
        assert_eq!(store.insert_order(&new_order("tea")).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_orders_newest_first() {
        let store = MemoryStore::new();
        store.insert_order(&new_order("first")).await.unwrap();
        store.insert_order(&new_order("second")).await.unwrap();

        let orders = store.list_orders().await.unwrap();
        assert_eq!(orders[0].order_description, "second");
        assert_eq!(orders[1].order_description, "first");
    }

    #[tokio::test]
    async fn test_offline_rejects_without_writing() {
        let store = MemoryStore::offline();
        let user = NewUser {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        assert!(matches!(
            store.insert_user(&user).await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.ping().await.is_err());

        store.set_offline(false);
        assert!(store.list_users().await.unwrap().is_empty());
        assert!(store.ping().await.is_ok());
    }
}

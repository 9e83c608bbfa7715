//! MySQL-backed store.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::info;

use super::models::{NewApplicant, NewOrder, NewUser, Order, User};
use super::{Store, StoreResult};
use crate::config::Settings;

const SELECT_USERS: &str = "SELECT id, name, email FROM users";

const INSERT_USER: &str = "INSERT INTO users (name, email) VALUES (?, ?)";

const SELECT_ORDERS: &str = "SELECT id, customer_name, email, pickup_time, payment_method, \
     order_description, created_at FROM orders ORDER BY created_at DESC, id DESC";

const INSERT_ORDER: &str = "INSERT INTO orders \
     (customer_name, email, pickup_time, payment_method, order_description) \
     VALUES (?, ?, ?, ?, ?)";

const INSERT_APPLICANT: &str =
    "INSERT INTO applicants (name, email, position, resume) VALUES (?, ?, ?, ?)";

/// Server-level connection options: host, port and credentials only.
///
/// No default database is selected. The schema bootstrapper connects this
/// way because its script creates and selects the database itself.
pub fn server_connect_options(settings: &Settings) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&settings.db_host)
        .port(settings.db_port)
        .username(&settings.db_user)
        .password(&settings.db_password)
}

/// Pool connection options: server options plus `DB_DATABASE`, when set
pub fn connect_options(settings: &Settings) -> MySqlConnectOptions {
    let options = server_connect_options(settings);

    match &settings.db_database {
        Some(database) => options.database(database),
        None => options,
    }
}

/// Store over a bounded `sqlx` MySQL pool
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Open the pool.
    ///
    /// Fails if the first connection cannot be established.
    pub async fn connect(settings: &Settings) -> StoreResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(settings.db_pool_size)
            .acquire_timeout(Duration::from_secs(settings.db_acquire_timeout_secs))
            .connect_with(connect_options(settings))
            .await?;

        info!(
            host = %settings.db_host,
            max_connections = settings.db_pool_size,
            "database pool created"
        );

        Ok(Self { pool })
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl Store for MySqlStore {
    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(SELECT_USERS)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    async fn insert_user(&self, user: &NewUser) -> StoreResult<u64> {
        let result = sqlx::query(INSERT_USER)
            .bind(&user.name)
            .bind(&user.email)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id())
    }

    async fn list_orders(&self) -> StoreResult<Vec<Order>> {
        let orders = sqlx::query_as::<_, Order>(SELECT_ORDERS)
            .fetch_all(&self.pool)
            .await?;
        Ok(orders)
    }

    async fn insert_order(&self, order: &NewOrder) -> StoreResult<u64> {
        let result = sqlx::query(INSERT_ORDER)
            .bind(&order.customer_name)
            .bind(&order.email)
            .bind(&order.pickup_time)
            .bind(&order.payment_method)
            .bind(&order.order_description)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id())
    }

    async fn insert_applicant(&self, applicant: &NewApplicant) -> StoreResult<u64> {
        let result = sqlx::query(INSERT_APPLICANT)
            .bind(&applicant.name)
            .bind(&applicant.email)
            .bind(&applicant.position)
            .bind(&applicant.resume)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders(sql: &str) -> usize {
        sql.matches('?').count()
    }

    #[test]
    fn test_inserts_bind_every_column() {
        assert_eq!(placeholders(INSERT_USER), 2);
        assert_eq!(placeholders(INSERT_ORDER), 5);
        assert_eq!(placeholders(INSERT_APPLICANT), 4);
    }

    #[test]
    fn test_orders_listed_newest_first() {
        assert!(SELECT_ORDERS.ends_with("ORDER BY created_at DESC, id DESC"));
    }

    fn settings_with_database() -> Settings {
        Settings {
            db_host: "db.internal".to_string(),
            db_database: Some("shopfront".to_string()),
            ..Settings::default()
        }
    }

    #[test]
    fn test_pool_options_select_configured_database() {
        let options = connect_options(&settings_with_database());
        assert_eq!(options.get_database(), Some("shopfront"));
    }

    #[test]
    fn test_server_options_never_select_a_database() {
        let options = server_connect_options(&settings_with_database());
        assert_eq!(options.get_database(), None);
    }
}

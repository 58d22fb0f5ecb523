//! PostgreSQL invoice store backed by sqlx
//!
//! All statements bind their values; submitted field content never reaches
//! the query text.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::InvoiceStore;
use crate::core::error::StoreError;
use crate::core::invoice::{Invoice, InvoiceChangeset, InvoiceStatus, NewInvoice};

/// Invoice store over a PostgreSQL `invoices` table.
#[derive(Clone, Debug)]
pub struct PostgresInvoiceStore {
    pool: PgPool,
}

impl PostgresInvoiceStore {
    /// Wrap an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect to the database named by `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(StoreError::Connection)?;
        Ok(Self { pool })
    }

    /// Apply pending schema migrations.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|err| StoreError::Query(err.into()))?;
        Ok(())
    }
}

#[async_trait]
impl InvoiceStore for PostgresInvoiceStore {
    async fn insert(&self, invoice: NewInvoice) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO invoices (customer_id, amount, status, date) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&invoice.customer_id)
        .bind(invoice.amount_cents)
        .bind(invoice.status.as_str())
        .bind(invoice.date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: InvoiceChangeset) -> Result<(), StoreError> {
        // Zero rows affected is fine; the date column is never listed here.
        sqlx::query(
            "UPDATE invoices \
             SET customer_id = $1, amount = $2, status = $3 \
             WHERE id = $4",
        )
        .bind(&changes.customer_id)
        .bind(changes.amount_cents)
        .bind(changes.status.as_str())
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Invoice>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, customer_id, amount, status, date \
             FROM invoices ORDER BY date DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| -> Result<Invoice, StoreError> {
                let status: String = row.try_get("status")?;
                let status = InvoiceStatus::parse(&status).ok_or_else(|| StoreError::Decode {
                    column: "status",
                    message: format!("unknown status '{status}'"),
                })?;
                Ok(Invoice {
                    id: row.try_get("id")?,
                    customer_id: row.try_get("customer_id")?,
                    amount: row.try_get("amount")?,
                    status,
                    date: row.try_get("date")?,
                })
            })
            .collect()
    }
}

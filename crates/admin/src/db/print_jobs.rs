//! `PostgreSQL` print job store.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use pressroom_core::{ClientId, PrintJobId, UserId};

use super::{PrintJobStore, StoreError, map_sqlx_error};
use crate::models::{NewPrintJob, PrintJob, PrintJobStatus, PrintJobUpdate};

/// Internal row type for print job queries.
#[derive(Debug, sqlx::FromRow)]
struct PrintJobRow {
    id: i32,
    title: String,
    client_id: i32,
    status: String,
    quantity: i32,
    due_date: Option<NaiveDate>,
    created_by: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PrintJobRow> for PrintJob {
    type Error = StoreError;

    fn try_from(row: PrintJobRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<PrintJobStatus>().map_err(|e| {
            StoreError::DataCorruption(format!("invalid status in database: {e}"))
        })?;

        Ok(Self {
            id: PrintJobId::new(row.id),
            title: row.title,
            client_id: ClientId::new(row.client_id),
            status,
            quantity: row.quantity,
            due_date: row.due_date,
            created_by: UserId::new(row.created_by),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Print job store backed by `PostgreSQL`.
#[derive(Clone)]
pub struct PgPrintJobStore {
    pool: PgPool,
}

impl PgPrintJobStore {
    /// Create a new print job store over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PrintJobStore for PgPrintJobStore {
    async fn list(&self) -> Result<Vec<PrintJob>, StoreError> {
        let rows = sqlx::query_as::<_, PrintJobRow>(
            r"
            SELECT id, title, client_id, status, quantity, due_date,
                   created_by, created_at, updated_at
            FROM print_jobs
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn get(&self, id: PrintJobId) -> Result<Option<PrintJob>, StoreError> {
        let row = sqlx::query_as::<_, PrintJobRow>(
            r"
            SELECT id, title, client_id, status, quantity, due_date,
                   created_by, created_at, updated_at
            FROM print_jobs
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn create(&self, new: NewPrintJob) -> Result<PrintJob, StoreError> {
        let row = sqlx::query_as::<_, PrintJobRow>(
            r"
            INSERT INTO print_jobs (title, client_id, status, quantity, due_date, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, client_id, status, quantity, due_date,
                      created_by, created_at, updated_at
            ",
        )
        .bind(&new.title)
        .bind(new.client_id.as_i32())
        .bind(new.status.as_str())
        .bind(new.quantity)
        .bind(new.due_date)
        .bind(new.created_by.as_i32())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.try_into()
    }

    async fn update(
        &self,
        id: PrintJobId,
        update: PrintJobUpdate,
    ) -> Result<PrintJob, StoreError> {
        // created_by is deliberately absent from the SET list.
        let row = sqlx::query_as::<_, PrintJobRow>(
            r"
            UPDATE print_jobs
            SET title = $2, client_id = $3, status = $4, quantity = $5,
                due_date = $6, updated_at = $7
            WHERE id = $1
            RETURNING id, title, client_id, status, quantity, due_date,
                      created_by, created_at, updated_at
            ",
        )
        .bind(id.as_i32())
        .bind(&update.title)
        .bind(update.client_id.as_i32())
        .bind(update.status.as_str())
        .bind(update.quantity)
        .bind(update.due_date)
        .bind(update.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map_or(Err(StoreError::NotFound), TryInto::try_into)
    }

    async fn delete(&self, id: PrintJobId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM print_jobs WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

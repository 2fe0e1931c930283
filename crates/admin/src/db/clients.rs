//! `PostgreSQL` client store.
//!
//! Queries are runtime-checked (`sqlx::query_as::<_, Row>`) so builds do not
//! require a live database. Row types convert into domain types via
//! `TryFrom`, surfacing invalid stored data as `DataCorruption`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use pressroom_core::{ClientId, Email, Phone, UserId};

use super::{ClientStore, StoreError, map_sqlx_error};
use crate::models::{Client, ClientUpdate, NewClient};

/// Internal row type for client queries.
#[derive(Debug, sqlx::FromRow)]
struct ClientRow {
    id: i32,
    name: String,
    email: String,
    phone: String,
    company: String,
    created_by: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ClientRow> for Client {
    type Error = StoreError;

    fn try_from(row: ClientRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            StoreError::DataCorruption(format!("invalid email in database: {e}"))
        })?;
        let phone = Phone::parse(&row.phone).map_err(|e| {
            StoreError::DataCorruption(format!("invalid phone in database: {e}"))
        })?;

        Ok(Self {
            id: ClientId::new(row.id),
            name: row.name,
            email,
            phone,
            company: row.company,
            created_by: UserId::new(row.created_by),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Client store backed by `PostgreSQL`.
#[derive(Clone)]
pub struct PgClientStore {
    pool: PgPool,
}

impl PgClientStore {
    /// Create a new client store over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClientStore for PgClientStore {
    async fn list(&self) -> Result<Vec<Client>, StoreError> {
        let rows = sqlx::query_as::<_, ClientRow>(
            r"
            SELECT id, name, email, phone, company, created_by, created_at, updated_at
            FROM clients
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn get(&self, id: ClientId) -> Result<Option<Client>, StoreError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r"
            SELECT id, name, email, phone, company, created_by, created_at, updated_at
            FROM clients
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    async fn create(&self, new: NewClient) -> Result<Client, StoreError> {
        let row = sqlx::query_as::<_, ClientRow>(
            r"
            INSERT INTO clients (name, email, phone, company, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, phone, company, created_by, created_at, updated_at
            ",
        )
        .bind(&new.name)
        .bind(new.email.as_str())
        .bind(new.phone.as_str())
        .bind(&new.company)
        .bind(new.created_by.as_i32())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.try_into()
    }

    async fn update(&self, id: ClientId, update: ClientUpdate) -> Result<Client, StoreError> {
        // created_by is deliberately absent from the SET list.
        let row = sqlx::query_as::<_, ClientRow>(
            r"
            UPDATE clients
            SET name = $2, email = $3, phone = $4, company = $5, updated_at = $6
            WHERE id = $1
            RETURNING id, name, email, phone, company, created_by, created_at, updated_at
            ",
        )
        .bind(id.as_i32())
        .bind(&update.name)
        .bind(update.email.as_str())
        .bind(update.phone.as_str())
        .bind(&update.company)
        .bind(update.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map_or(Err(StoreError::NotFound), TryInto::try_into)
    }

    async fn delete(&self, id: ClientId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id.as_i32())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

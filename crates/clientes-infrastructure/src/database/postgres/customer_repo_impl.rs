// ============================================================================
// Clientes Infrastructure - PostgreSQL Customer Repository
// File: crates/clientes-infrastructure/src/database/postgres/customer_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

use clientes_core::domain::{Customer, NewCustomer};
use clientes_core::error::DomainError;
use clientes_core::repositories::CustomerRepository;

/// Each call checks a connection out of the pool for a single statement;
/// the guard hands it back when the query future completes or is dropped.
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct CustomerRow {
    pub id: i32,
    pub nome: String,
    pub email: String,
    pub telefone: Option<String>,
    pub criado_em: DateTime<Utc>,
    pub atualizado_em: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            name: row.nome,
            email: row.email,
            phone: row.telefone,
            created_at: row.criado_em,
            updated_at: row.atualizado_em,
        }
    }
}

/// Unique violations on the email index become a conflict, everything else a database error.
fn map_write_error(e: sqlx::Error, email: &str, action: &str) -> DomainError {
    let unique_violation = e
        .as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false);

    if unique_violation {
        info!("Unique index rejected {} for a taken email", action);
        DomainError::EmailAlreadyExists(email.to_string())
    } else {
        error!("Database error {} customer: {}", action, e);
        DomainError::DatabaseError(e.to_string())
    }
}

fn map_query_error(e: sqlx::Error, action: &str) -> DomainError {
    error!("Database error {}: {}", action, e);
    DomainError::DatabaseError(e.to_string())
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, DomainError> {
        let row: Option<CustomerRow> = sqlx::query_as(
            r#"
            SELECT id, nome, email, telefone, criado_em, atualizado_em
            FROM clientes
            WHERE id = $1
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_query_error(e, "finding customer by id"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        let row: Option<CustomerRow> = sqlx::query_as(
            r#"
            SELECT id, nome, email, telefone, criado_em, atualizado_em
            FROM clientes
            WHERE email = $1
            "#
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_query_error(e, "finding customer by email"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn email_in_use(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DomainError> {
        let taken: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM clientes
                WHERE email = $1 AND ($2::INT IS NULL OR id <> $2)
            )
            "#
        )
        .bind(email)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_query_error(e, "checking email uniqueness"))?;

        Ok(taken)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Customer>, DomainError> {
        let rows: Vec<CustomerRow> = sqlx::query_as(
            r#"
            SELECT id, nome, email, telefone, criado_em, atualizado_em
            FROM clientes
            ORDER BY id ASC
            OFFSET $1
            LIMIT $2
            "#
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_query_error(e, "listing customers"))?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn create(&self, customer: &NewCustomer) -> Result<Customer, DomainError> {
        // Both timestamps take the statement's NOW(), so they start out equal.
        let row: CustomerRow = sqlx::query_as(
            r#"
            INSERT INTO clientes (nome, email, telefone)
            VALUES ($1, $2, $3)
            RETURNING id, nome, email, telefone, criado_em, atualizado_em
            "#
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &customer.email, "creating"))?;

        Ok(row.into())
    }

    async fn update(&self, customer: &Customer) -> Result<Option<Customer>, DomainError> {
        let row: Option<CustomerRow> = sqlx::query_as(
            r#"
            UPDATE clientes
            SET
                nome = $2,
                email = $3,
                telefone = $4,
                atualizado_em = GREATEST(NOW(), criado_em, atualizado_em)
            WHERE id = $1
            RETURNING id, nome, email, telefone, criado_em, atualizado_em
            "#
        )
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &customer.email, "updating"))?;

        Ok(row.map(|r| r.into()))
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_query_error(e, "deleting customer"))?;

        Ok(result.rows_affected() > 0)
    }
}

//! Subscriber store — validated, unique newsletter emails.
//!
//! `AppState` holds an `Arc<dyn SubscriberStore>`; production uses
//! `PgSubscriberStore`, tests use the in-memory store below.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Serialize;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::subscriber::SubscriberRow;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscribeOutcome {
    Subscribed,
    AlreadySubscribed,
}

#[async_trait]
pub trait SubscriberStore: Send + Sync {
    /// Stores `email` unless it is already present. `email` must already be normalized.
    async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome, AppError>;
}

/// Trims and lower-cases an address so uniqueness ignores casing.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Normalizes, validates, then stores an email address.
pub async fn subscribe_email(
    store: &dyn SubscriberStore,
    raw_email: &str,
) -> Result<SubscribeOutcome, AppError> {
    let email = normalize_email(raw_email);
    if !is_valid_email(&email) {
        return Err(AppError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }
    store.subscribe(&email).await
}

// ────────────────────────────────────────────────────────────────────────────
// PostgreSQL backend
// ────────────────────────────────────────────────────────────────────────────

pub struct PgSubscriberStore {
    pool: PgPool,
}

impl PgSubscriberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriberStore for PgSubscriberStore {
    async fn subscribe(&self, email: &str) -> Result<SubscribeOutcome, AppError> {
        // The unique index decides; a lookup-then-insert would race.
        let inserted: Option<SubscriberRow> = sqlx::query_as(
            r#"
            INSERT INTO subscribers (id, email)
            VALUES ($1, $2)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        match inserted {
            Some(row) => {
                info!(subscriber_id = %row.id, "New newsletter subscriber");
                Ok(SubscribeOutcome::Subscribed)
            }
            None => Ok(SubscribeOutcome::AlreadySubscribed),
        }
    }
}

//! Challenge repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Challenge record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ChallengeRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub challenge_type: String,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub date_assigned: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const CHALLENGE_COLUMNS: &str = "id, user_id, challenge_type, title, description, is_completed, \
     date_assigned, created_at, updated_at";

/// Challenge repository
pub struct ChallengeRepository;

impl ChallengeRepository {
    /// Find a user's challenge for a period anchor
    pub async fn find_by_period(
        pool: &PgPool,
        user_id: Uuid,
        challenge_type: &str,
        date_assigned: NaiveDate,
    ) -> Result<Option<ChallengeRecord>> {
        let record = sqlx::query_as::<_, ChallengeRecord>(&format!(
            r#"
            SELECT {CHALLENGE_COLUMNS}
            FROM challenges
            WHERE user_id = $1 AND challenge_type = $2 AND date_assigned = $3
            "#
        ))
        .bind(user_id)
        .bind(challenge_type)
        .bind(date_assigned)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Insert a generated challenge for a period
    ///
    /// Returns `None` when a concurrent request persisted one first (unique
    /// on user, type, period); the caller re-fetches the winner's row so
    /// both requests observe the same challenge.
    pub async fn insert(
        pool: &PgPool,
        user_id: Uuid,
        challenge_type: &str,
        title: &str,
        description: &str,
        date_assigned: NaiveDate,
    ) -> Result<Option<ChallengeRecord>> {
        let record = sqlx::query_as::<_, ChallengeRecord>(&format!(
            r#"
            INSERT INTO challenges (user_id, challenge_type, title, description, date_assigned)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, challenge_type, date_assigned) DO NOTHING
            RETURNING {CHALLENGE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(challenge_type)
        .bind(title)
        .bind(description)
        .bind(date_assigned)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Find a challenge by id, scoped to its owner
    pub async fn find_by_id(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ChallengeRecord>> {
        let record = sqlx::query_as::<_, ChallengeRecord>(&format!(
            "SELECT {CHALLENGE_COLUMNS} FROM challenges WHERE id = $1 AND user_id = $2"
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Flip is_completed to true, guarded so the transition happens once
    ///
    /// Returns `None` when the challenge was already completed (including
    /// by a concurrent request).
    pub async fn mark_completed(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<ChallengeRecord>> {
        let record = sqlx::query_as::<_, ChallengeRecord>(&format!(
            r#"
            UPDATE challenges
            SET is_completed = TRUE, updated_at = now()
            WHERE id = $1 AND user_id = $2 AND is_completed = FALSE
            RETURNING {CHALLENGE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Challenges assigned on or after a date, newest first, capped
    pub async fn list_since(
        pool: &PgPool,
        user_id: Uuid,
        since: NaiveDate,
        challenge_type: Option<&str>,
        limit: i64,
    ) -> Result<Vec<ChallengeRecord>> {
        let records = match challenge_type {
            Some(ctype) => {
                sqlx::query_as::<_, ChallengeRecord>(&format!(
                    r#"
                    SELECT {CHALLENGE_COLUMNS}
                    FROM challenges
                    WHERE user_id = $1 AND date_assigned >= $2 AND challenge_type = $3
                    ORDER BY date_assigned DESC
                    LIMIT $4
                    "#
                ))
                .bind(user_id)
                .bind(since)
                .bind(ctype)
                .bind(limit)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ChallengeRecord>(&format!(
                    r#"
                    SELECT {CHALLENGE_COLUMNS}
                    FROM challenges
                    WHERE user_id = $1 AND date_assigned >= $2
                    ORDER BY date_assigned DESC
                    LIMIT $3
                    "#
                ))
                .bind(user_id)
                .bind(since)
                .bind(limit)
                .fetch_all(pool)
                .await?
            }
        };

        Ok(records)
    }
}

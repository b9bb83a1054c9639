//! Daily log repository for database operations
//!
//! Every mutation is a single-statement upsert against the
//! (user_id, log_date) uniqueness constraint, so concurrent increments and
//! appends for the same day are never lost to a read-modify-write
//! interleaving.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use fitlife_shared::models::Workout;
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// Daily log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DailyLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub log_date: NaiveDate,
    pub water_ml: f64,
    pub calories: f64,
    pub workouts: Json<Vec<Workout>>,
    pub weight_kg: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const LOG_COLUMNS: &str =
    "id, user_id, log_date, water_ml, calories, workouts, weight_kg, created_at, updated_at";

/// Daily log repository
pub struct DailyLogRepository;

impl DailyLogRepository {
    /// Find a user's log for a specific day
    pub async fn find_by_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<DailyLogRecord>> {
        let record = sqlx::query_as::<_, DailyLogRecord>(&format!(
            "SELECT {LOG_COLUMNS} FROM daily_logs WHERE user_id = $1 AND log_date = $2"
        ))
        .bind(user_id)
        .bind(date)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Insert an empty log for a day
    ///
    /// Returns `None` when another request created the row first; the
    /// caller re-fetches instead of surfacing the conflict.
    pub async fn insert_default(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<DailyLogRecord>> {
        let record = sqlx::query_as::<_, DailyLogRecord>(&format!(
            r#"
            INSERT INTO daily_logs (user_id, log_date)
            VALUES ($1, $2)
            ON CONFLICT (user_id, log_date) DO NOTHING
            RETURNING {LOG_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(date)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Atomically add water to a day's log, creating it if absent
    pub async fn add_water(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
        amount_ml: f64,
    ) -> Result<DailyLogRecord> {
        let record = sqlx::query_as::<_, DailyLogRecord>(&format!(
            r#"
            INSERT INTO daily_logs (user_id, log_date, water_ml)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, log_date)
            DO UPDATE SET water_ml = daily_logs.water_ml + EXCLUDED.water_ml,
                          updated_at = now()
            RETURNING {LOG_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(date)
        .bind(amount_ml)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Atomically add calories to a day's log, creating it if absent
    pub async fn add_calories(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
        amount: f64,
    ) -> Result<DailyLogRecord> {
        let record = sqlx::query_as::<_, DailyLogRecord>(&format!(
            r#"
            INSERT INTO daily_logs (user_id, log_date, calories)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, log_date)
            DO UPDATE SET calories = daily_logs.calories + EXCLUDED.calories,
                          updated_at = now()
            RETURNING {LOG_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(date)
        .bind(amount)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Atomically append a workout to a day's log, creating it if absent
    pub async fn append_workout(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
        workout: &Workout,
    ) -> Result<DailyLogRecord> {
        let record = sqlx::query_as::<_, DailyLogRecord>(&format!(
            r#"
            INSERT INTO daily_logs (user_id, log_date, workouts)
            VALUES ($1, $2, jsonb_build_array($3::jsonb))
            ON CONFLICT (user_id, log_date)
            DO UPDATE SET workouts = daily_logs.workouts || EXCLUDED.workouts,
                          updated_at = now()
            RETURNING {LOG_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(date)
        .bind(Json(workout))
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Set (or overwrite) a day's weight, creating the log if absent
    pub async fn set_weight(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
        weight_kg: f64,
    ) -> Result<DailyLogRecord> {
        let record = sqlx::query_as::<_, DailyLogRecord>(&format!(
            r#"
            INSERT INTO daily_logs (user_id, log_date, weight_kg)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, log_date)
            DO UPDATE SET weight_kg = EXCLUDED.weight_kg,
                          updated_at = now()
            RETURNING {LOG_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(date)
        .bind(weight_kg)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Logs in an inclusive date range, oldest first (trend aggregation)
    pub async fn get_range_asc(
        pool: &PgPool,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyLogRecord>> {
        let records = sqlx::query_as::<_, DailyLogRecord>(&format!(
            r#"
            SELECT {LOG_COLUMNS}
            FROM daily_logs
            WHERE user_id = $1 AND log_date >= $2 AND log_date <= $3
            ORDER BY log_date ASC
            "#
        ))
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Logs in an inclusive date range, newest first (range listing)
    pub async fn get_range_desc(
        pool: &PgPool,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyLogRecord>> {
        let records = sqlx::query_as::<_, DailyLogRecord>(&format!(
            r#"
            SELECT {LOG_COLUMNS}
            FROM daily_logs
            WHERE user_id = $1 AND log_date >= $2 AND log_date <= $3
            ORDER BY log_date DESC
            "#
        ))
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}

//! Health profile repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Health profile record from database
///
/// Enumerated columns are TEXT; parsing back into domain enums happens at
/// the service boundary.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub age: i32,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: Decimal,
    pub activity_level: String,
    pub goal: String,
    pub health_conditions: Vec<String>,
    pub bmi: Decimal,
    pub bmi_category: String,
    pub recommended_calories: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating or replacing a health profile
#[derive(Debug, Clone)]
pub struct ProfileInput {
    pub age: i32,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: String,
    pub goal: String,
    pub health_conditions: Vec<String>,
    pub bmi: f64,
    pub bmi_category: String,
    pub recommended_calories: i32,
}

const PROFILE_COLUMNS: &str = "id, user_id, age, gender, height_cm, weight_kg, activity_level, \
     goal, health_conditions, bmi, bmi_category, recommended_calories, created_at, updated_at";

/// Health profile repository
pub struct ProfileRepository;

impl ProfileRepository {
    /// Find the profile owned by a user
    pub async fn find_by_user(pool: &PgPool, user_id: Uuid) -> Result<Option<ProfileRecord>> {
        let record = sqlx::query_as::<_, ProfileRecord>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM health_profiles WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Insert a profile for a user
    ///
    /// Returns `None` when the user already has a profile (unique
    /// constraint on user_id), so a duplicate create is detected without
    /// surfacing a database error.
    pub async fn insert(
        pool: &PgPool,
        user_id: Uuid,
        input: &ProfileInput,
    ) -> Result<Option<ProfileRecord>> {
        let record = sqlx::query_as::<_, ProfileRecord>(&format!(
            r#"
            INSERT INTO health_profiles
                (user_id, age, gender, height_cm, weight_kg, activity_level, goal,
                 health_conditions, bmi, bmi_category, recommended_calories)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (user_id) DO NOTHING
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(input.age)
        .bind(&input.gender)
        .bind(input.height_cm)
        .bind(input.weight_kg)
        .bind(&input.activity_level)
        .bind(&input.goal)
        .bind(&input.health_conditions)
        .bind(input.bmi)
        .bind(&input.bmi_category)
        .bind(input.recommended_calories)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Replace every mutable field of a user's profile
    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        input: &ProfileInput,
    ) -> Result<Option<ProfileRecord>> {
        let record = sqlx::query_as::<_, ProfileRecord>(&format!(
            r#"
            UPDATE health_profiles
            SET age = $2, gender = $3, height_cm = $4, weight_kg = $5,
                activity_level = $6, goal = $7, health_conditions = $8,
                bmi = $9, bmi_category = $10, recommended_calories = $11,
                updated_at = now()
            WHERE user_id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(input.age)
        .bind(&input.gender)
        .bind(input.height_cm)
        .bind(input.weight_kg)
        .bind(&input.activity_level)
        .bind(&input.goal)
        .bind(&input.health_conditions)
        .bind(input.bmi)
        .bind(&input.bmi_category)
        .bind(input.recommended_calories)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Overwrite the weight and its derived metric fields
    ///
    /// Used by the weight-log cascade: weight, bmi, category, and
    /// recommended calories always change together.
    pub async fn update_weight_metrics(
        pool: &PgPool,
        user_id: Uuid,
        weight_kg: f64,
        bmi: f64,
        bmi_category: &str,
        recommended_calories: i32,
    ) -> Result<Option<ProfileRecord>> {
        let record = sqlx::query_as::<_, ProfileRecord>(&format!(
            r#"
            UPDATE health_profiles
            SET weight_kg = $2, bmi = $3, bmi_category = $4,
                recommended_calories = $5, updated_at = now()
            WHERE user_id = $1
            RETURNING {PROFILE_COLUMNS}
            "#
        ))
        .bind(user_id)
        .bind(weight_kg)
        .bind(bmi)
        .bind(bmi_category)
        .bind(recommended_calories)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}

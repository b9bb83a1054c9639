//! Daily log service
//!
//! Lazily creates one log per user per local calendar day, mutates it
//! through atomic upserts, and cascades weight changes into the health
//! profile.

use crate::error::ApiError;
use crate::repositories::{DailyLogRecord, DailyLogRepository, ProfileRepository};
use crate::services::decimal_to_f64;
use crate::services::profile::ProfileView;
use chrono::{Local, NaiveDate};
use fitlife_shared::health_metrics::{bmi_category, calc_bmi, recommended_calories};
use fitlife_shared::models::{Workout, WorkoutType};
use fitlife_shared::types::{DailyLogBody, ProfileSummary, WorkoutRequest};
use fitlife_shared::validation::{
    validate_intake_amount, validate_weight_kg, validate_workout_duration, validate_workout_name,
};
use sqlx::PgPool;
use std::str::FromStr;
use tracing::warn;
use uuid::Uuid;

/// The local calendar day used as the log key
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Daily log service
pub struct DailyLogService;

impl DailyLogService {
    /// Get today's log, creating an empty one on first access
    ///
    /// A concurrent creation race resolves through the (user, date) unique
    /// constraint: the loser's insert returns nothing and the winner's row
    /// is fetched instead.
    pub async fn today_log(pool: &PgPool, user_id: Uuid) -> Result<DailyLogBody, ApiError> {
        let date = today();

        if let Some(record) = DailyLogRepository::find_by_date(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?
        {
            return Ok(record_to_body(record));
        }

        if let Some(record) = DailyLogRepository::insert_default(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?
        {
            return Ok(record_to_body(record));
        }

        // Lost the creation race; the winner's row must exist now
        DailyLogRepository::find_by_date(pool, user_id, date)
            .await
            .map_err(ApiError::Internal)?
            .map(record_to_body)
            .ok_or_else(|| {
                ApiError::Internal(anyhow::anyhow!("Daily log vanished after create conflict"))
            })
    }

    /// Add water intake (ml) to today's log
    pub async fn add_water(
        pool: &PgPool,
        user_id: Uuid,
        amount: f64,
    ) -> Result<DailyLogBody, ApiError> {
        if validate_intake_amount(amount).is_err() {
            return Err(ApiError::Validation(
                "Please provide a valid water amount (in ml)".to_string(),
            ));
        }

        let record = DailyLogRepository::add_water(pool, user_id, today(), amount)
            .await
            .map_err(ApiError::Internal)?;

        Ok(record_to_body(record))
    }

    /// Add calories to today's log
    pub async fn add_calories(
        pool: &PgPool,
        user_id: Uuid,
        amount: f64,
    ) -> Result<DailyLogBody, ApiError> {
        if validate_intake_amount(amount).is_err() {
            return Err(ApiError::Validation(
                "Please provide a valid calorie amount".to_string(),
            ));
        }

        let record = DailyLogRepository::add_calories(pool, user_id, today(), amount)
            .await
            .map_err(ApiError::Internal)?;

        Ok(record_to_body(record))
    }

    /// Append a workout to today's log
    pub async fn add_workout(
        pool: &PgPool,
        user_id: Uuid,
        req: WorkoutRequest,
    ) -> Result<DailyLogBody, ApiError> {
        validate_workout_name(&req.name).map_err(ApiError::Validation)?;
        validate_workout_duration(req.duration).map_err(ApiError::Validation)?;

        let workout_type = WorkoutType::from_str(&req.workout_type).map_err(|_| {
            ApiError::Validation(format!(
                "Invalid workout type. Must be one of: {}",
                WorkoutType::ALL.map(|t| t.as_str()).join(", ")
            ))
        })?;

        let workout = Workout {
            name: req.name.trim().to_string(),
            duration: req.duration,
            workout_type,
        };

        let record = DailyLogRepository::append_workout(pool, user_id, today(), &workout)
            .await
            .map_err(ApiError::Internal)?;

        Ok(record_to_body(record))
    }

    /// Log today's weight and cascade it into the health profile
    ///
    /// The log write is the source of truth; the profile sync is
    /// best-effort and a cascade failure is logged, not surfaced.
    pub async fn add_weight(
        pool: &PgPool,
        user_id: Uuid,
        weight: f64,
    ) -> Result<(DailyLogBody, Option<ProfileSummary>), ApiError> {
        validate_weight_kg(weight).map_err(ApiError::Validation)?;

        let record = DailyLogRepository::set_weight(pool, user_id, today(), weight)
            .await
            .map_err(ApiError::Internal)?;

        let updated_profile = match Self::cascade_profile_weight(pool, user_id, weight).await {
            Ok(summary) => summary,
            Err(err) => {
                warn!(user_id = %user_id, "Profile weight cascade failed: {:?}", err);
                None
            }
        };

        Ok((record_to_body(record), updated_profile))
    }

    /// Recompute the profile's derived metrics for a new weight
    ///
    /// A user without a profile simply gets no cascade.
    async fn cascade_profile_weight(
        pool: &PgPool,
        user_id: Uuid,
        weight: f64,
    ) -> Result<Option<ProfileSummary>, ApiError> {
        let profile = match ProfileRepository::find_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
        {
            Some(record) => ProfileView::try_from(record)?,
            None => return Ok(None),
        };

        let bmi = calc_bmi(profile.height_cm, weight);
        let category = bmi_category(bmi);
        let calories = recommended_calories(profile.activity_level, profile.goal);

        let updated = ProfileRepository::update_weight_metrics(
            pool,
            user_id,
            weight,
            bmi,
            category.as_str(),
            calories,
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(updated.map(|record| ProfileSummary {
            weight: decimal_to_f64(&record.weight_kg),
            bmi: decimal_to_f64(&record.bmi),
            bmi_category: record.bmi_category,
            recommended_calories: record.recommended_calories,
        }))
    }

    /// Logs in an inclusive date range, newest first
    pub async fn logs_in_range(
        pool: &PgPool,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailyLogBody>, ApiError> {
        if start > end {
            return Err(ApiError::Validation(
                "startDate must not be after endDate".to_string(),
            ));
        }

        let records = DailyLogRepository::get_range_desc(pool, user_id, start, end)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(record_to_body).collect())
    }
}

/// Convert a database record to its wire representation
pub(crate) fn record_to_body(record: DailyLogRecord) -> DailyLogBody {
    DailyLogBody {
        date: record.log_date,
        water_intake: record.water_ml,
        calories: record.calories,
        workouts: record.workouts.0,
        weight: record.weight_kg.as_ref().map(decimal_to_f64),
    }
}

//! Challenge service
//!
//! One challenge per (user, type, period anchor): today for daily
//! challenges, the week's Monday for weekly ones. Generation needs the
//! health profile for personalization and an injected random source for
//! template selection.

use crate::error::ApiError;
use crate::repositories::{ChallengeRecord, ChallengeRepository};
use crate::services::logs::today;
use crate::services::profile::ProfileService;
use chrono::{Datelike, Duration, NaiveDate};
use fitlife_shared::challenges::{generate_daily, generate_weekly};
use fitlife_shared::models::ChallengeType;
use fitlife_shared::types::{ChallengeBody, ChallengeStats};
use rand::Rng;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

/// History responses are capped at this many challenges
const HISTORY_LIMIT: i64 = 50;

/// Monday of the week containing `date`
///
/// Sunday belongs to the week that started six days earlier, so the
/// anchor is always a Monday.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// The period anchor a challenge of this type is keyed by
pub fn period_anchor(challenge_type: ChallengeType, date: NaiveDate) -> NaiveDate {
    match challenge_type {
        ChallengeType::Daily => date,
        ChallengeType::Weekly => week_start(date),
    }
}

/// Challenge service
pub struct ChallengeService;

impl ChallengeService {
    /// Get the current period's challenge, generating one on first fetch
    ///
    /// Requires an existing health profile; a creation race against the
    /// (user, type, period) unique constraint resolves by re-fetching the
    /// winner's row, so both callers observe the same challenge identity.
    pub async fn get_or_create<R: Rng + Send>(
        pool: &PgPool,
        user_id: Uuid,
        challenge_type: ChallengeType,
        rng: &mut R,
    ) -> Result<ChallengeBody, ApiError> {
        let anchor = period_anchor(challenge_type, today());
        let type_str = challenge_type.as_str();

        if let Some(record) =
            ChallengeRepository::find_by_period(pool, user_id, type_str, anchor)
                .await
                .map_err(ApiError::Internal)?
        {
            return record_to_body(record);
        }

        let profile = ProfileService::find(pool, user_id).await?.ok_or_else(|| {
            ApiError::NotFound(
                "Health profile not found. Please create your profile first.".to_string(),
            )
        })?;

        let template = match challenge_type {
            ChallengeType::Daily => generate_daily(profile.bmi_category, profile.goal, rng),
            ChallengeType::Weekly => generate_weekly(profile.bmi_category, profile.goal, rng),
        };

        if let Some(record) = ChallengeRepository::insert(
            pool,
            user_id,
            type_str,
            template.title,
            template.description,
            anchor,
        )
        .await
        .map_err(ApiError::Internal)?
        {
            return record_to_body(record);
        }

        // A concurrent request persisted its challenge first
        ChallengeRepository::find_by_period(pool, user_id, type_str, anchor)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| {
                ApiError::Internal(anyhow::anyhow!("Challenge vanished after create conflict"))
            })
            .and_then(record_to_body)
    }

    /// Mark a challenge completed; the transition is one-way
    pub async fn complete(
        pool: &PgPool,
        user_id: Uuid,
        challenge_id: Uuid,
    ) -> Result<ChallengeBody, ApiError> {
        let challenge = ChallengeRepository::find_by_id(pool, challenge_id, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Challenge not found".to_string()))?;

        if challenge.is_completed {
            return Err(ApiError::Conflict(
                "Challenge already completed".to_string(),
            ));
        }

        // Guarded update so a concurrent completion can't double-apply
        ChallengeRepository::mark_completed(pool, challenge_id, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::Conflict("Challenge already completed".to_string()))
            .and_then(record_to_body)
    }

    /// Challenge history with completion stats
    pub async fn history(
        pool: &PgPool,
        user_id: Uuid,
        days: i64,
        challenge_type: Option<ChallengeType>,
    ) -> Result<(Vec<ChallengeBody>, ChallengeStats), ApiError> {
        if days < 1 {
            return Err(ApiError::Validation(
                "days must be a positive number".to_string(),
            ));
        }

        let since = today() - Duration::days(days);
        let type_filter = challenge_type.map(|t| t.as_str());

        let records =
            ChallengeRepository::list_since(pool, user_id, since, type_filter, HISTORY_LIMIT)
                .await
                .map_err(ApiError::Internal)?;

        let challenges = records
            .into_iter()
            .map(record_to_body)
            .collect::<Result<Vec<_>, _>>()?;

        let stats = history_stats(&challenges);
        Ok((challenges, stats))
    }
}

/// Completion stats over a returned history page
fn history_stats(challenges: &[ChallengeBody]) -> ChallengeStats {
    let total = challenges.len();
    let completed = challenges.iter().filter(|c| c.is_completed).count();
    let completion_rate = if total > 0 {
        ((completed as f64 / total as f64) * 100.0).round() as i64
    } else {
        0
    };

    ChallengeStats {
        total,
        completed,
        pending: total - completed,
        completion_rate,
    }
}

fn record_to_body(record: ChallengeRecord) -> Result<ChallengeBody, ApiError> {
    let challenge_type = ChallengeType::from_str(&record.challenge_type).map_err(|e| {
        ApiError::Internal(anyhow::anyhow!("Corrupt challenge type column: {}", e))
    })?;

    Ok(ChallengeBody {
        id: record.id,
        challenge_type,
        title: record.title,
        description: record.description,
        is_completed: record.is_completed,
        date_assigned: record.date_assigned,
    })
}

//! Health profile service
//!
//! Profile creation and updates always recompute the derived metric
//! fields (bmi, bmi category, recommended calories) from the current
//! inputs, so they can never go stale.

use crate::error::ApiError;
use crate::repositories::{ProfileInput, ProfileRecord, ProfileRepository};
use crate::services::decimal_to_f64;
use chrono::{DateTime, Utc};
use fitlife_shared::health_metrics::{bmi_category, calc_bmi, recommended_calories};
use fitlife_shared::models::{ActivityLevel, BmiCategory, FitnessGoal, Gender};
use fitlife_shared::types::{CreateProfileRequest, ProfileBody, UpdateProfileRequest};
use fitlife_shared::validation::{validate_age, validate_height_cm, validate_weight_kg};
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

/// A health profile with its enumerated columns parsed
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub id: Uuid,
    pub age: i32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: FitnessGoal,
    pub health_conditions: Vec<String>,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub recommended_calories: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRecord> for ProfileView {
    type Error = ApiError;

    fn try_from(record: ProfileRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record.id,
            age: record.age,
            gender: parse_column(&record.gender)?,
            height_cm: record.height_cm,
            weight_kg: decimal_to_f64(&record.weight_kg),
            activity_level: parse_column(&record.activity_level)?,
            goal: parse_column(&record.goal)?,
            health_conditions: record.health_conditions,
            bmi: decimal_to_f64(&record.bmi),
            bmi_category: parse_column(&record.bmi_category)?,
            recommended_calories: record.recommended_calories,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}

impl ProfileView {
    pub fn into_body(self) -> ProfileBody {
        ProfileBody {
            id: self.id,
            age: self.age,
            gender: self.gender,
            height: self.height_cm,
            weight: self.weight_kg,
            activity_level: self.activity_level,
            goals: self.goal,
            health_conditions: self.health_conditions,
            bmi: self.bmi,
            bmi_category: self.bmi_category.to_string(),
            recommended_calories: self.recommended_calories,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn parse_column<T: FromStr<Err = String>>(value: &str) -> Result<T, ApiError> {
    value
        .parse()
        .map_err(|e: String| ApiError::Internal(anyhow::anyhow!("Corrupt profile column: {}", e)))
}

/// Health profile service
pub struct ProfileService;

impl ProfileService {
    /// Fetch the caller's profile
    pub async fn get(pool: &PgPool, user_id: Uuid) -> Result<ProfileView, ApiError> {
        Self::find(pool, user_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Health profile not found".to_string()))
    }

    /// Fetch the caller's profile if one exists
    pub async fn find(pool: &PgPool, user_id: Uuid) -> Result<Option<ProfileView>, ApiError> {
        ProfileRepository::find_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .map(ProfileView::try_from)
            .transpose()
    }

    /// Create the caller's profile
    ///
    /// A second creation attempt is a conflict; the unique constraint on
    /// user_id backs this even under concurrent requests.
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateProfileRequest,
    ) -> Result<ProfileView, ApiError> {
        validate_age(req.age).map_err(ApiError::Validation)?;
        validate_height_cm(req.height).map_err(ApiError::Validation)?;
        validate_weight_kg(req.weight).map_err(ApiError::Validation)?;

        let input = build_input(
            req.age,
            req.gender,
            req.height,
            req.weight,
            req.activity_level,
            req.goals,
            normalize_conditions(req.health_conditions),
        );

        let record = ProfileRepository::insert(pool, user_id, &input)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| {
                ApiError::Conflict("Health profile already exists. Use PUT to update.".to_string())
            })?;

        record.try_into()
    }

    /// Update the caller's profile, merging provided fields
    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        req: UpdateProfileRequest,
    ) -> Result<ProfileView, ApiError> {
        let existing = Self::find(pool, user_id).await?.ok_or_else(|| {
            ApiError::NotFound("Health profile not found. Please create one first.".to_string())
        })?;

        let age = req.age.unwrap_or(existing.age);
        let gender = req.gender.unwrap_or(existing.gender);
        let height = req.height.unwrap_or(existing.height_cm);
        let weight = req.weight.unwrap_or(existing.weight_kg);
        let activity_level = req.activity_level.unwrap_or(existing.activity_level);
        let goals = req.goals.unwrap_or(existing.goal);
        let health_conditions = match req.health_conditions {
            Some(conditions) => normalize_conditions(Some(conditions)),
            None => existing.health_conditions,
        };

        validate_age(age).map_err(ApiError::Validation)?;
        validate_height_cm(height).map_err(ApiError::Validation)?;
        validate_weight_kg(weight).map_err(ApiError::Validation)?;

        let input = build_input(age, gender, height, weight, activity_level, goals, health_conditions);

        let record = ProfileRepository::update(pool, user_id, &input)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Health profile not found".to_string()))?;

        record.try_into()
    }
}

/// Assemble a repository input with freshly derived metric fields
fn build_input(
    age: i32,
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
    activity_level: ActivityLevel,
    goal: FitnessGoal,
    health_conditions: Vec<String>,
) -> ProfileInput {
    let bmi = calc_bmi(height_cm, weight_kg);
    let category = bmi_category(bmi);

    ProfileInput {
        age,
        gender: gender.to_string(),
        height_cm,
        weight_kg,
        activity_level: activity_level.to_string(),
        goal: goal.to_string(),
        health_conditions,
        bmi,
        bmi_category: category.to_string(),
        recommended_calories: recommended_calories(activity_level, goal),
    }
}

/// Trim entries and drop empties
fn normalize_conditions(conditions: Option<Vec<String>>) -> Vec<String> {
    conditions
        .unwrap_or_default()
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect()
}

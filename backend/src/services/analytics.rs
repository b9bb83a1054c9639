//! Analytics aggregation service
//!
//! All trend endpoints share a pattern: fetch the user's logs for the
//! window [today − days + 1, today] sorted ascending, then reduce with a
//! pure function. The reductions live here as free functions over
//! in-memory data so they are unit-testable without a database.

use crate::error::ApiError;
use crate::repositories::{DailyLogRecord, DailyLogRepository};
use crate::services::decimal_to_f64;
use crate::services::logs::today;
use chrono::{Duration, NaiveDate};
use fitlife_shared::health_metrics::round1;
use fitlife_shared::models::Workout;
use fitlife_shared::types::{
    CalorieTrendData, CalorieTrendResponse, CalorieTrendStats, DashboardAnalytics,
    DashboardChartData, DashboardResponse, TypeBreakdown, WaterTrendData, WaterTrendResponse,
    WaterTrendStats, WeightTrendData, WeightTrendResponse, WeightTrendStats, WorkoutSummaryData,
    WorkoutSummaryResponse, WorkoutSummaryStats,
};
use sqlx::PgPool;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Daily water goal reported alongside the water trend, in ml
const DAILY_WATER_GOAL_ML: i32 = 2500;

/// A day's log flattened for aggregation
#[derive(Debug, Clone)]
pub struct LogDay {
    pub date: NaiveDate,
    pub water_ml: f64,
    pub calories: f64,
    pub workouts: Vec<Workout>,
    pub weight_kg: Option<f64>,
}

impl From<DailyLogRecord> for LogDay {
    fn from(record: DailyLogRecord) -> Self {
        Self {
            date: record.log_date,
            water_ml: record.water_ml,
            calories: record.calories,
            workouts: record.workouts.0,
            weight_kg: record.weight_kg.as_ref().map(decimal_to_f64),
        }
    }
}

/// Analytics service
pub struct AnalyticsService;

impl AnalyticsService {
    /// Weight trend over the window
    pub async fn weight_trend(
        pool: &PgPool,
        user_id: Uuid,
        days: i64,
    ) -> Result<WeightTrendResponse, ApiError> {
        let logs = Self::fetch_window(pool, user_id, days).await?;
        let (data, stats) = weight_trend(&logs);
        Ok(WeightTrendResponse {
            success: true,
            data,
            stats,
        })
    }

    /// Water intake trend over the window
    pub async fn water_trend(
        pool: &PgPool,
        user_id: Uuid,
        days: i64,
    ) -> Result<WaterTrendResponse, ApiError> {
        let logs = Self::fetch_window(pool, user_id, days).await?;
        let (data, stats) = water_trend(&logs);
        Ok(WaterTrendResponse {
            success: true,
            data,
            stats,
        })
    }

    /// Calorie intake trend over the window
    pub async fn calorie_trend(
        pool: &PgPool,
        user_id: Uuid,
        days: i64,
    ) -> Result<CalorieTrendResponse, ApiError> {
        let logs = Self::fetch_window(pool, user_id, days).await?;
        let (data, stats) = calorie_trend(&logs);
        Ok(CalorieTrendResponse {
            success: true,
            data,
            stats,
        })
    }

    /// Workout summary over the window
    pub async fn workout_summary(
        pool: &PgPool,
        user_id: Uuid,
        days: i64,
    ) -> Result<WorkoutSummaryResponse, ApiError> {
        let logs = Self::fetch_window(pool, user_id, days).await?;
        let (data, summary) = workout_summary(&logs, days);
        Ok(WorkoutSummaryResponse {
            success: true,
            data,
            summary,
        })
    }

    /// Combined dashboard aggregate over the window
    pub async fn dashboard(
        pool: &PgPool,
        user_id: Uuid,
        days: i64,
    ) -> Result<DashboardResponse, ApiError> {
        let logs = Self::fetch_window(pool, user_id, days).await?;
        let (analytics, chart_data) = dashboard(&logs, days);
        Ok(DashboardResponse {
            success: true,
            analytics,
            chart_data,
        })
    }

    /// Fetch the ascending log list for [today − days + 1, today]
    async fn fetch_window(
        pool: &PgPool,
        user_id: Uuid,
        days: i64,
    ) -> Result<Vec<LogDay>, ApiError> {
        if days < 1 {
            return Err(ApiError::Validation(
                "days must be a positive number".to_string(),
            ));
        }

        let end = today();
        let start = end - Duration::days(days - 1);

        let records = DailyLogRepository::get_range_asc(pool, user_id, start, end)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(LogDay::from).collect())
    }
}

/// Weight trend: only days with a recorded weight participate
pub fn weight_trend(logs: &[LogDay]) -> (WeightTrendData, WeightTrendStats) {
    let points: Vec<(NaiveDate, f64)> = logs
        .iter()
        .filter_map(|log| log.weight_kg.map(|w| (log.date, w)))
        .collect();

    let weights: Vec<f64> = points.iter().map(|(_, w)| *w).collect();

    let weight_change = if weights.len() >= 2 {
        weights[weights.len() - 1] - weights[0]
    } else {
        0.0
    };
    let average_weight = if weights.is_empty() {
        0.0
    } else {
        weights.iter().sum::<f64>() / weights.len() as f64
    };

    let trend = if weight_change > 0.0 {
        "increasing"
    } else if weight_change < 0.0 {
        "decreasing"
    } else {
        "stable"
    };

    let stats = WeightTrendStats {
        data_points: points.len(),
        start_weight: weights.first().copied(),
        current_weight: weights.last().copied(),
        weight_change: round1(weight_change),
        average_weight: round1(average_weight),
        trend: trend.to_string(),
    };

    let data = WeightTrendData {
        dates: points.iter().map(|(d, _)| *d).collect(),
        weights,
    };

    (data, stats)
}

/// Water trend: every logged day participates, stored default 0 included
pub fn water_trend(logs: &[LogDay]) -> (WaterTrendData, WaterTrendStats) {
    let intakes: Vec<f64> = logs.iter().map(|log| log.water_ml).collect();
    let total: f64 = intakes.iter().sum();
    let average = if intakes.is_empty() {
        0.0
    } else {
        total / intakes.len() as f64
    };

    let data = WaterTrendData {
        dates: logs.iter().map(|log| log.date).collect(),
        water_intakes: intakes,
    };

    let stats = WaterTrendStats {
        data_points: logs.len(),
        average_daily: average.round() as i64,
        total_intake: total,
        goal: DAILY_WATER_GOAL_ML,
    };

    (data, stats)
}

/// Calorie trend: same shape as the water trend, no fixed goal
pub fn calorie_trend(logs: &[LogDay]) -> (CalorieTrendData, CalorieTrendStats) {
    let calories: Vec<f64> = logs.iter().map(|log| log.calories).collect();
    let total: f64 = calories.iter().sum();
    let average = if calories.is_empty() {
        0.0
    } else {
        total / calories.len() as f64
    };

    let data = CalorieTrendData {
        dates: logs.iter().map(|log| log.date).collect(),
        calories,
    };

    let stats = CalorieTrendStats {
        data_points: logs.len(),
        average_daily: average.round() as i64,
        total_intake: total,
    };

    (data, stats)
}

/// Workout summary over the window
///
/// `days_requested` is the window size the client asked for, used for the
/// consistency percentage.
pub fn workout_summary(logs: &[LogDay], days_requested: i64) -> (WorkoutSummaryData, WorkoutSummaryStats) {
    let mut dates = Vec::with_capacity(logs.len());
    let mut daily_minutes = Vec::with_capacity(logs.len());
    let mut total_workouts = 0usize;
    let mut total_minutes = 0i64;
    let mut workout_days = 0usize;
    let mut by_type: BTreeMap<String, TypeBreakdown> = BTreeMap::new();

    for log in logs {
        let day_minutes: i64 = log.workouts.iter().map(|w| w.duration as i64).sum();
        dates.push(log.date);
        daily_minutes.push(day_minutes as i32);

        if !log.workouts.is_empty() {
            workout_days += 1;
            total_workouts += log.workouts.len();
            total_minutes += day_minutes;

            for workout in &log.workouts {
                let entry = by_type
                    .entry(workout.workout_type.to_string())
                    .or_default();
                entry.count += 1;
                entry.minutes += workout.duration as i64;
            }
        }
    }

    let average_per_day = if workout_days > 0 {
        (total_minutes as f64 / workout_days as f64).round() as i64
    } else {
        0
    };
    let consistency = ((workout_days as f64 / days_requested as f64) * 100.0).round() as i64;

    let data = WorkoutSummaryData {
        dates,
        daily_minutes,
    };

    let stats = WorkoutSummaryStats {
        total_workouts,
        total_minutes,
        workout_days,
        average_per_day,
        workouts_by_type: by_type,
        consistency,
    };

    (data, stats)
}

/// Dashboard aggregate with streaks and chart series
pub fn dashboard(logs: &[LogDay], days_requested: i64) -> (DashboardAnalytics, DashboardChartData) {
    let logged_days = logs.len();

    let (average_calories, average_water) = if logged_days > 0 {
        let calorie_sum: f64 = logs.iter().map(|log| log.calories).sum();
        let water_sum: f64 = logs.iter().map(|log| log.water_ml).sum();
        (
            (calorie_sum / logged_days as f64).round() as i64,
            (water_sum / logged_days as f64).round() as i64,
        )
    } else {
        (0, 0)
    };

    let total_workouts: usize = logs.iter().map(|log| log.workouts.len()).sum();
    let workout_days = logs.iter().filter(|log| !log.workouts.is_empty()).count();

    let analytics = DashboardAnalytics {
        total_days: days_requested,
        logged_days,
        average_calories,
        average_water,
        total_workouts,
        workout_days,
        current_streak: current_streak(logs),
        longest_streak: longest_streak(logs),
    };

    let chart_data = DashboardChartData {
        dates: logs.iter().map(|log| log.date).collect(),
        calories: logs.iter().map(|log| log.calories).collect(),
        water: logs.iter().map(|log| log.water_ml).collect(),
        workouts: logs.iter().map(|log| log.workouts.len()).collect(),
    };

    (analytics, chart_data)
}

/// Trailing run of consecutive workout days ending at the most recent log
///
/// Streaks are calendar-aware: a logged day without workouts breaks the
/// run, and so does a calendar day with no log at all. Input must be
/// sorted ascending by date.
pub fn current_streak(logs: &[LogDay]) -> usize {
    let mut streak = 0;
    let mut expected: Option<NaiveDate> = None;

    for log in logs.iter().rev() {
        if log.workouts.is_empty() {
            break;
        }
        if let Some(date) = expected {
            if log.date != date {
                break;
            }
        }
        streak += 1;
        expected = log.date.pred_opt();
    }

    streak
}

/// Longest run of consecutive workout days anywhere in the window
///
/// Same calendar-aware break rule as [`current_streak`]. Input must be
/// sorted ascending by date.
pub fn longest_streak(logs: &[LogDay]) -> usize {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for log in logs {
        if log.workouts.is_empty() {
            run = 0;
        } else {
            let contiguous = match prev {
                Some(p) => p.succ_opt() == Some(log.date),
                None => true,
            };
            run = if contiguous { run + 1 } else { 1 };
        }
        longest = longest.max(run);
        prev = Some(log.date);
    }

    longest
}

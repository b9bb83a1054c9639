//! Business logic services
//!
//! Services own validation and orchestration between repositories and the
//! pure domain functions in `fitlife-shared`.

pub mod analytics;
pub mod challenge;
pub mod logs;
pub mod profile;
pub mod recommendation;
pub mod user;

pub use analytics::AnalyticsService;
pub use challenge::ChallengeService;
pub use logs::DailyLogService;
pub use profile::{ProfileService, ProfileView};
pub use recommendation::RecommendationService;
pub use user::UserService;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Convert a NUMERIC column value to f64 at the service boundary
pub(crate) fn decimal_to_f64(d: &Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

//! Domain models for the FitLife application
//!
//! Enumerations carry their wire representation (the strings the API
//! accepts and the database stores) via serde renames, with matching
//! `Display`/`FromStr` impls for the TEXT columns.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender recorded on a health profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            "Other" => Ok(Gender::Other),
            _ => Err(format!("Unknown gender: {}", s)),
        }
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Low => "Low",
            ActivityLevel::Moderate => "Moderate",
            ActivityLevel::High => "High",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(ActivityLevel::Low),
            "Moderate" => Ok(ActivityLevel::Moderate),
            "High" => Ok(ActivityLevel::High),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

/// Fitness goal driving calorie targets, recommendations, and challenges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessGoal {
    #[serde(rename = "Weight Loss")]
    WeightLoss,
    Maintain,
    #[serde(rename = "Muscle Gain")]
    MuscleGain,
}

impl FitnessGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "Weight Loss",
            FitnessGoal::Maintain => "Maintain",
            FitnessGoal::MuscleGain => "Muscle Gain",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Weight Loss" => Ok(FitnessGoal::WeightLoss),
            "Maintain" => Ok(FitnessGoal::Maintain),
            "Muscle Gain" => Ok(FitnessGoal::MuscleGain),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

/// BMI category derived from the (rounded) BMI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BmiCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Underweight" => Ok(BmiCategory::Underweight),
            "Normal" => Ok(BmiCategory::Normal),
            "Overweight" => Ok(BmiCategory::Overweight),
            "Obese" => Ok(BmiCategory::Obese),
            _ => Err(format!("Unknown BMI category: {}", s)),
        }
    }
}

/// Workout type logged against a daily log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutType {
    Cardio,
    Strength,
    #[serde(rename = "HIIT")]
    Hiit,
    Yoga,
    Flexibility,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 5] = [
        WorkoutType::Cardio,
        WorkoutType::Strength,
        WorkoutType::Hiit,
        WorkoutType::Yoga,
        WorkoutType::Flexibility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Strength => "Strength",
            WorkoutType::Hiit => "HIIT",
            WorkoutType::Yoga => "Yoga",
            WorkoutType::Flexibility => "Flexibility",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Cardio" => Ok(WorkoutType::Cardio),
            "Strength" => Ok(WorkoutType::Strength),
            "HIIT" => Ok(WorkoutType::Hiit),
            "Yoga" => Ok(WorkoutType::Yoga),
            "Flexibility" => Ok(WorkoutType::Flexibility),
            _ => Err(format!("Unknown workout type: {}", s)),
        }
    }
}

/// Challenge period type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeType {
    Daily,
    Weekly,
}

impl ChallengeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeType::Daily => "Daily",
            ChallengeType::Weekly => "Weekly",
        }
    }
}

impl fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChallengeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Daily" => Ok(ChallengeType::Daily),
            "Weekly" => Ok(ChallengeType::Weekly),
            _ => Err(format!("Unknown challenge type: {}", s)),
        }
    }
}

/// Diet preference for meal plan generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DietType {
    #[default]
    Veg,
    NonVeg,
}

impl DietType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Veg => "veg",
            DietType::NonVeg => "nonveg",
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DietType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "veg" => Ok(DietType::Veg),
            "nonveg" => Ok(DietType::NonVeg),
            _ => Err(format!("Unknown diet type: {}", s)),
        }
    }
}

/// A single workout embedded in a daily log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub name: String,
    /// Duration in minutes
    pub duration: i32,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
}

//! Input validation functions
//!
//! Validation helpers shared by the API layer. Range limits mirror the
//! persistence constraints so bad input is rejected before any mutation.

use validator::ValidateEmail;

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    if !email.validate_email() {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age(age: i32) -> Result<(), String> {
    if age < 1 {
        return Err("Age must be at least 1".to_string());
    }
    if age > 150 {
        return Err("Age must be less than 150".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be between 20 and 500 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be between 20 and 500 kg".to_string());
    }
    Ok(())
}

/// Validate an additive intake amount (water ml or calories)
pub fn validate_intake_amount(amount: f64) -> Result<(), String> {
    if amount.is_nan() || amount.is_infinite() {
        return Err("Amount must be a valid number".to_string());
    }
    if amount <= 0.0 {
        return Err("Amount must be positive".to_string());
    }
    Ok(())
}

/// Validate a workout name
pub fn validate_workout_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Workout name is required".to_string());
    }
    if name.len() > 100 {
        return Err("Workout name too long".to_string());
    }
    Ok(())
}

/// Validate a workout duration in minutes
pub fn validate_workout_duration(minutes: i32) -> Result<(), String> {
    if minutes <= 0 {
        return Err("Duration must be a positive number (in minutes)".to_string());
    }
    if minutes > 1440 {
        // 24 hours
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a b@example.com").is_err());
    }

    #[test]
    fn test_age_bounds() {
        assert!(validate_age(1).is_ok());
        assert!(validate_age(150).is_ok());
        assert!(validate_age(0).is_err());
        assert!(validate_age(151).is_err());
    }

    #[test]
    fn test_weight_bounds() {
        assert!(validate_weight_kg(20.0).is_ok());
        assert!(validate_weight_kg(500.0).is_ok());
        assert!(validate_weight_kg(19.9).is_err());
        assert!(validate_weight_kg(500.1).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
    }

    #[test]
    fn test_intake_amount() {
        assert!(validate_intake_amount(250.0).is_ok());
        assert!(validate_intake_amount(0.0).is_err());
        assert!(validate_intake_amount(-10.0).is_err());
        assert!(validate_intake_amount(f64::INFINITY).is_err());
    }

    #[test]
    fn test_workout_fields() {
        assert!(validate_workout_name("Run").is_ok());
        assert!(validate_workout_name("   ").is_err());
        assert!(validate_workout_duration(30).is_ok());
        assert!(validate_workout_duration(0).is_err());
        assert!(validate_workout_duration(1441).is_err());
    }
}

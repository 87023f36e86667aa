use crate::domain::model::{Bmi, BmiCategory};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::validate_positive_finite;

const UNDERWEIGHT_BELOW: f64 = 18.5;
const OVERWEIGHT_FROM: f64 = 25.0;
const OBESE_FROM: f64 = 30.0;

impl BmiCategory {
    /// Buckets an already rounded BMI value.
    pub fn classify(value: f64) -> Self {
        if value < UNDERWEIGHT_BELOW {
            BmiCategory::Underweight
        } else if value < OVERWEIGHT_FROM {
            BmiCategory::NormalWeight
        } else if value < OBESE_FROM {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl Bmi {
    /// weight(kg) / height(m)², rounded to two decimals before bucketing.
    pub fn compute(height_cm: f64, weight_kg: f64) -> Result<Self> {
        let height_cm = validate_positive_finite("height", height_cm)?;
        let weight_kg = validate_positive_finite("weight", weight_kg)?;

        let height_m = height_cm / 100.0;
        let value = round2(weight_kg / (height_m * height_m));
        if !value.is_finite() {
            return Err(PlannerError::invalid_field(
                "height",
                &height_cm.to_string(),
                "BMI is not a finite number",
            ));
        }

        Ok(Bmi {
            value,
            category: BmiCategory::classify(value),
        })
    }
}

/// Rounds from the exact binary value, so 7.625 becomes 7.62 like Python's `round(x, 2)`.
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

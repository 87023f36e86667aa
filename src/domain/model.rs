use crate::utils::error::Result;
use crate::utils::validation::{parse_required, require_form_value, validate_positive_finite};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub const FEATURE_COUNT: usize = 6;

pub type FeatureVector = [f64; FEATURE_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const OPTIONS: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Any value other than "Male" or "Female" is kept as `Other`.
    pub fn parse(value: &str) -> Self {
        match value {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            _ => Gender::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn feature(&self) -> f64 {
        match self {
            Gender::Male => 1.0,
            Gender::Female | Gender::Other => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DietPreference {
    Vegetarian,
    NonVegetarian,
    Vegan,
}

impl DietPreference {
    pub const ALL: [DietPreference; 3] = [
        DietPreference::Vegetarian,
        DietPreference::NonVegetarian,
        DietPreference::Vegan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DietPreference::Vegetarian => "Vegetarian",
            DietPreference::NonVegetarian => "Non-Vegetarian",
            DietPreference::Vegan => "Vegan",
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            DietPreference::Vegetarian => 0,
            DietPreference::NonVegetarian => 1,
            DietPreference::Vegan => 2,
        }
    }
}

impl FromStr for DietPreference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown diet preference, expected one of: {}",
                    names(&Self::ALL.map(|p| p.as_str()))
                )
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExercisePreference {
    Cardio,
    StrengthTraining,
    Yoga,
}

impl ExercisePreference {
    pub const ALL: [ExercisePreference; 3] = [
        ExercisePreference::Cardio,
        ExercisePreference::StrengthTraining,
        ExercisePreference::Yoga,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExercisePreference::Cardio => "Cardio",
            ExercisePreference::StrengthTraining => "Strength Training",
            ExercisePreference::Yoga => "Yoga",
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            ExercisePreference::Cardio => 0,
            ExercisePreference::StrengthTraining => 1,
            ExercisePreference::Yoga => 2,
        }
    }
}

impl FromStr for ExercisePreference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown exercise preference, expected one of: {}",
                    names(&Self::ALL.map(|p| p.as_str()))
                )
            })
    }
}

fn names(values: &[&str]) -> String {
    values.join(", ")
}

/// Validated biometric profile as submitted through the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiometricInput {
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub diet: DietPreference,
    pub exercise: ExercisePreference,
}

impl BiometricInput {
    /// Model input in training column order:
    /// age, height (cm), weight (kg), male flag, diet code, exercise code.
    pub fn features(&self) -> FeatureVector {
        [
            f64::from(self.age),
            self.height_cm,
            self.weight_kg,
            self.gender.feature(),
            f64::from(self.diet.code()),
            f64::from(self.exercise.code()),
        ]
    }
}

/// Raw form fields; everything is optional until parsed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileForm {
    pub age: Option<String>,
    pub gender: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub diet: Option<String>,
    pub exercise: Option<String>,
}

impl ProfileForm {
    pub fn parse(&self) -> Result<BiometricInput> {
        let age: u32 = parse_required("age", &self.age)?;
        let gender = Gender::parse(require_form_value("gender", &self.gender)?);
        let height_cm = validate_positive_finite("height", parse_required("height", &self.height)?)?;
        let weight_kg = validate_positive_finite("weight", parse_required("weight", &self.weight)?)?;
        let diet = parse_required("diet", &self.diet)?;
        let exercise = parse_required("exercise", &self.exercise)?;

        Ok(BiometricInput {
            age,
            gender,
            height_cm,
            weight_kg,
            diet,
            exercise,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::NormalWeight,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bmi {
    pub value: f64,
    pub category: BmiCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPlan {
    pub morning: &'static [&'static str],
    pub afternoon: &'static [&'static str],
    pub evening: &'static [&'static str],
}

impl DailyPlan {
    pub const EMPTY: DailyPlan = DailyPlan {
        morning: &[],
        afternoon: &[],
        evening: &[],
    };

    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.afternoon.is_empty() && self.evening.is_empty()
    }

    pub fn slots(&self) -> [(&'static str, &'static [&'static str]); 3] {
        [
            ("Morning", self.morning),
            ("Afternoon", self.afternoon),
            ("Evening", self.evening),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanResult {
    pub prediction: String,
    pub diet_plan: DailyPlan,
    pub workout_plan: DailyPlan,
    pub bmi: Bmi,
    pub input: BiometricInput,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        SessionId(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(SessionId)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

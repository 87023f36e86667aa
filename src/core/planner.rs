use crate::core::{BiometricInput, Classifier, PlanResult, Result};
use crate::domain::model::Bmi;
use crate::domain::plans;
use chrono::Utc;
use std::sync::Arc;

pub struct PlannerService {
    classifier: Arc<dyn Classifier>,
}

impl PlannerService {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    pub fn plan(&self, input: &BiometricInput) -> Result<PlanResult> {
        let bmi = Bmi::compute(input.height_cm, input.weight_kg)?;
        tracing::debug!("BMI {} ({})", bmi.value, bmi.category);

        let features = input.features();
        let prediction = self.classifier.predict(&features)?;
        tracing::debug!("Features {:?} -> {}", features, prediction);

        // The prediction, not the computed BMI bucket, keys both tables.
        let diet_plan = plans::diet_plan(&prediction, input.diet);
        let workout_plan = plans::workout_plan(&prediction, input.exercise);

        if diet_plan.is_empty() || workout_plan.is_empty() {
            tracing::warn!("No plan table entry for predicted category '{}'", prediction);
        }

        tracing::info!(
            "Planned '{}' for {} / {} (BMI {} {})",
            prediction,
            input.diet.as_str(),
            input.exercise.as_str(),
            bmi.value,
            bmi.category
        );

        Ok(PlanResult {
            prediction,
            diet_plan,
            workout_plan,
            bmi,
            input: input.clone(),
            generated_at: Utc::now(),
        })
    }
}

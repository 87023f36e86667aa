pub mod planner;

pub use crate::domain::model::{BiometricInput, PlanResult};
pub use crate::domain::ports::{Classifier, ResultStore};
pub use crate::utils::error::Result;

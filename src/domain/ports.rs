use crate::domain::model::{FeatureVector, PlanResult, SessionId};
use crate::utils::error::Result;
use async_trait::async_trait;

/// A trained model that maps a feature vector to a category label.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<String>;
}

/// Holds one result per session until it has been shown.
#[async_trait]
pub trait ResultStore: Send + Sync {
    async fn put(&self, session: SessionId, result: PlanResult);

    /// Removes and returns the stored result.
    async fn take(&self, session: SessionId) -> Option<PlanResult>;
}

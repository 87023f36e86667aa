//! JSON-exported tree ensemble and label encoder.
//!
//! The classifier file holds one or more decision trees in array form
//! (children always after their parent). A sample goes left when
//! `x[feature] <= threshold`. Each leaf carries per-class weights which are
//! normalized before averaging across trees, so a single tree and a random
//! forest export share one format.

use crate::domain::model::{FeatureVector, FEATURE_COUNT};
use crate::domain::ports::Classifier;
use crate::utils::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeEnsemble {
    pub n_features: usize,
    pub n_classes: usize,
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub trees: Vec<DecisionTree>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl TreeEnsemble {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let display = path.as_ref().display().to_string();
        let content = std::fs::read_to_string(&path)?;
        Self::from_json_str(&content).map_err(|e| artifact_error(&display, e))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let ensemble: TreeEnsemble = serde_json::from_str(content)?;
        ensemble.check()?;
        Ok(ensemble)
    }

    fn check(&self) -> Result<()> {
        let invalid = |message: String| PlannerError::ModelArtifactError {
            path: "<classifier>".to_string(),
            message,
        };

        if self.n_features != FEATURE_COUNT {
            return Err(invalid(format!(
                "expected {} input features, artifact declares {}",
                FEATURE_COUNT, self.n_features
            )));
        }
        if self.n_classes == 0 {
            return Err(invalid("n_classes must be at least 1".to_string()));
        }
        if self.trees.is_empty() {
            return Err(invalid("ensemble contains no trees".to_string()));
        }

        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(invalid(format!("tree {} has no nodes", t)));
            }
            for (i, node) in tree.nodes.iter().enumerate() {
                match node {
                    TreeNode::Split {
                        feature,
                        threshold,
                        left,
                        right,
                    } => {
                        if *feature >= self.n_features {
                            return Err(invalid(format!(
                                "tree {} node {} splits on feature {} (only {} features)",
                                t, i, feature, self.n_features
                            )));
                        }
                        if !threshold.is_finite() {
                            return Err(invalid(format!("tree {} node {} has a non-finite threshold", t, i)));
                        }
                        for child in [*left, *right] {
                            if child <= i || child >= tree.nodes.len() {
                                return Err(invalid(format!(
                                    "tree {} node {} points to invalid child {}",
                                    t, i, child
                                )));
                            }
                        }
                    }
                    TreeNode::Leaf { value } => {
                        if value.len() != self.n_classes {
                            return Err(invalid(format!(
                                "tree {} leaf {} has {} class weights, expected {}",
                                t,
                                i,
                                value.len(),
                                self.n_classes
                            )));
                        }
                        let total: f64 = value.iter().sum();
                        if value.iter().any(|v| !v.is_finite() || *v < 0.0) || total <= 0.0 {
                            return Err(invalid(format!(
                                "tree {} leaf {} has invalid class weights",
                                t, i
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Mean class distribution over all trees.
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        if let Some(pos) = features.iter().position(|v| !v.is_finite()) {
            return Err(PlannerError::PredictionError {
                message: format!("feature {} is not a finite number", pos),
            });
        }

        let mut proba = vec![0.0; self.n_classes];
        for tree in &self.trees {
            let leaf = tree.leaf_for(features);
            let total: f64 = leaf.iter().sum();
            for (p, v) in proba.iter_mut().zip(leaf) {
                *p += v / total;
            }
        }

        let n_trees = self.trees.len() as f64;
        for p in proba.iter_mut() {
            *p /= n_trees;
        }
        Ok(proba)
    }

    /// Encoded class index; ties resolve to the lowest index.
    pub fn predict_encoded(&self, features: &FeatureVector) -> Result<usize> {
        let proba = self.predict_proba(features)?;
        let mut best = 0;
        for (i, p) in proba.iter().enumerate().skip(1) {
            if *p > proba[best] {
                best = i;
            }
        }
        Ok(best)
    }
}

impl DecisionTree {
    fn leaf_for(&self, features: &FeatureVector) -> &[f64] {
        // Child indices only increase, so this walk always terminates.
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                TreeNode::Leaf { value } => return value,
            }
        }
    }
}

impl LabelEncoder {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let display = path.as_ref().display().to_string();
        let content = std::fs::read_to_string(&path)?;
        Self::from_json_str(&content).map_err(|e| artifact_error(&display, e))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let encoder: LabelEncoder = serde_json::from_str(content)?;
        if encoder.classes.is_empty() {
            return Err(PlannerError::ModelArtifactError {
                path: "<label encoder>".to_string(),
                message: "label encoder has no classes".to_string(),
            });
        }
        Ok(encoder)
    }

    pub fn inverse_transform(&self, index: usize) -> Result<&str> {
        self.classes
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| PlannerError::PredictionError {
                message: format!(
                    "class index {} out of range for {} labels",
                    index,
                    self.classes.len()
                ),
            })
    }
}

fn artifact_error(path: &str, err: PlannerError) -> PlannerError {
    match err {
        PlannerError::ModelArtifactError { message, .. } => PlannerError::ModelArtifactError {
            path: path.to_string(),
            message,
        },
        PlannerError::SerializationError(e) => PlannerError::ModelArtifactError {
            path: path.to_string(),
            message: e.to_string(),
        },
        other => other,
    }
}

/// Classifier backed by a tree ensemble and its label encoder.
#[derive(Debug, Clone)]
pub struct TreeEnsembleClassifier {
    model: TreeEnsemble,
    encoder: LabelEncoder,
}

impl TreeEnsembleClassifier {
    pub fn new(model: TreeEnsemble, encoder: LabelEncoder) -> Result<Self> {
        if encoder.classes.len() != model.n_classes {
            return Err(PlannerError::ModelArtifactError {
                path: "<label encoder>".to_string(),
                message: format!(
                    "encoder has {} classes but the classifier predicts {}",
                    encoder.classes.len(),
                    model.n_classes
                ),
            });
        }
        Ok(Self { model, encoder })
    }

    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(classifier_path: P, encoder_path: Q) -> Result<Self> {
        let model = TreeEnsemble::from_file(&classifier_path)?;
        let encoder = LabelEncoder::from_file(&encoder_path)?;
        tracing::info!(
            "Loaded classifier {} ({} trees, classes: {})",
            classifier_path.as_ref().display(),
            model.trees.len(),
            encoder.classes.join(", ")
        );
        Self::new(model, encoder)
    }

    pub fn classes(&self) -> &[String] {
        &self.encoder.classes
    }
}

impl Classifier for TreeEnsembleClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<String> {
        let encoded = self.model.predict_encoded(features)?;
        Ok(self.encoder.inverse_transform(encoded)?.to_string())
    }
}

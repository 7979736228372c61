mod forest;

pub use forest::{ArtifactError, DecisionTree, ForestClassifier, TreeNode};

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use super::features::FeatureVector;

/// Conventional artifact location, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "nexus_risk_model.json";

/// Opaque binary classifier: `P(reject), P(approve)` for a feature vector.
pub trait Classifier: Send + Sync {
    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2], ModelError>;
}

/// Failure raised while asking the provider for a prediction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("risk model is not initialized or was not found")]
    Unavailable,
    #[error("inference failed: {0}")]
    Inference(String),
}

/// Owns the trained classifier for the lifetime of the process.
///
/// Construction never fails: a missing or unreadable artifact leaves the provider in an
/// unavailable state so the process can still start and answer liveness checks.
#[derive(Clone)]
pub struct ModelProvider {
    classifier: Option<Arc<dyn Classifier>>,
}

impl ModelProvider {
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match ForestClassifier::from_path(path) {
            Ok(forest) => {
                info!(path = %path.display(), trees = forest.tree_count(), "risk model loaded");
                Self::from_classifier(forest)
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "risk model unavailable; evaluations will fail");
                Self::unavailable()
            }
        }
    }

    pub fn from_classifier<C>(classifier: C) -> Self
    where
        C: Classifier + 'static,
    {
        Self {
            classifier: Some(Arc::new(classifier)),
        }
    }

    pub fn unavailable() -> Self {
        Self { classifier: None }
    }

    pub fn is_loaded(&self) -> bool {
        self.classifier.is_some()
    }

    /// Probability of the approval class (index 1 of the class pair).
    pub fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let classifier = self.classifier.as_ref().ok_or(ModelError::Unavailable)?;
        let [_, approve] = classifier.predict_proba(features)?;
        Ok(approve)
    }
}

impl std::fmt::Debug for ModelProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelProvider")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

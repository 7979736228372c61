use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Classifier, ModelError};
use crate::risk::features::{FeatureVector, FEATURE_NAMES};

/// Reasons a classifier artifact cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("unable to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("model artifact is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("model was trained on features {found:?}, expected {expected:?}")]
    FeatureSchema {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("model artifact contains no trees")]
    EmptyEnsemble,
    #[error("tree {tree} splits on feature index {feature}, only {available} features exist")]
    FeatureIndex {
        tree: usize,
        feature: usize,
        available: usize,
    },
}

/// One node of a serialized decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Samples with `features[feature] <= threshold` go left.
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    Leaf {
        class_probs: [f64; 2],
    },
}

impl TreeNode {
    fn leaf_for(&self, features: &[f64; 5]) -> [f64; 2] {
        let mut node = self;
        loop {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if features[*feature] <= *threshold {
                        &**left
                    } else {
                        &**right
                    };
                }
                TreeNode::Leaf { class_probs } => return *class_probs,
            }
        }
    }

    fn max_feature_index(&self) -> Option<usize> {
        let mut max = None;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                max = max.max(Some(*feature));
                stack.push(&**left);
                stack.push(&**right);
            }
        }
        max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub root: TreeNode,
}

/// Tree ensemble read from the JSON artifact written by the training pipeline.
///
/// The probability estimate is the mean of the leaf class distributions across trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestClassifier {
    feature_names: Vec<String>,
    trees: Vec<DecisionTree>,
}

impl ForestClassifier {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ArtifactError> {
        let forest: ForestClassifier = serde_json::from_str(raw)?;
        forest.validate()?;
        Ok(forest)
    }

    pub fn new(trees: Vec<DecisionTree>) -> Result<Self, ArtifactError> {
        let forest = Self {
            feature_names: FEATURE_NAMES.iter().map(|name| name.to_string()).collect(),
            trees,
        };
        forest.validate()?;
        Ok(forest)
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    fn validate(&self) -> Result<(), ArtifactError> {
        if self.feature_names.iter().map(String::as_str).ne(FEATURE_NAMES) {
            return Err(ArtifactError::FeatureSchema {
                expected: FEATURE_NAMES.iter().map(|name| name.to_string()).collect(),
                found: self.feature_names.clone(),
            });
        }

        if self.trees.is_empty() {
            return Err(ArtifactError::EmptyEnsemble);
        }

        for (index, tree) in self.trees.iter().enumerate() {
            if let Some(feature) = tree.root.max_feature_index() {
                if feature >= FEATURE_NAMES.len() {
                    return Err(ArtifactError::FeatureIndex {
                        tree: index,
                        feature,
                        available: FEATURE_NAMES.len(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Classifier for ForestClassifier {
    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2], ModelError> {
        if let Some((name, value)) = features.named().find(|(_, value)| !value.is_finite()) {
            return Err(ModelError::Inference(format!(
                "feature `{name}` is not finite ({value})"
            )));
        }

        let values = features.as_array();
        let mut totals = [0.0_f64; 2];
        for tree in &self.trees {
            let [reject, approve] = tree.root.leaf_for(&values);
            totals[0] += reject;
            totals[1] += approve;
        }

        let count = self.trees.len() as f64;
        Ok([totals[0] / count, totals[1] / count])
    }
}

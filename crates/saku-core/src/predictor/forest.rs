//! Random forest regressor
//!
//! Each tree uses the flattened parallel-array layout produced by common
//! training libraries: node `i` is a leaf when `children_left[i] == -1`,
//! otherwise samples go left when `x[feature[i]] <= threshold[i]`.
//! The forest prediction is the mean of all tree outputs.

use serde::Deserialize;

use crate::error::{Error, Result};

use super::{check_input_len, Regressor};

const LEAF: i64 = -1;

/// A single regression tree
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    feature: Vec<i64>,
    threshold: Vec<f64>,
    value: Vec<f64>,
}

impl DecisionTree {
    pub fn new(
        children_left: Vec<i64>,
        children_right: Vec<i64>,
        feature: Vec<i64>,
        threshold: Vec<f64>,
        value: Vec<f64>,
    ) -> Self {
        Self {
            children_left,
            children_right,
            feature,
            threshold,
            value,
        }
    }

    /// A tree with a single leaf
    pub fn leaf(value: f64) -> Self {
        Self::new(vec![LEAF], vec![LEAF], vec![-2], vec![-2.0], vec![value])
    }

    fn node_count(&self) -> usize {
        self.value.len()
    }

    /// Check array shapes and that every child index points forward,
    /// which guarantees traversal terminates
    fn validate(&self, index: usize, n_features: usize) -> Result<()> {
        let n = self.node_count();
        if n == 0 {
            return Err(Error::ModelLoad(format!("Tree {} has no nodes", index)));
        }
        if self.children_left.len() != n
            || self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
        {
            return Err(Error::ModelLoad(format!(
                "Tree {} has mismatched node arrays",
                index
            )));
        }

        for node in 0..n {
            let left = self.children_left[node];
            let right = self.children_right[node];

            if left == LEAF || right == LEAF {
                if left != right {
                    return Err(Error::ModelLoad(format!(
                        "Tree {} node {} has only one child",
                        index, node
                    )));
                }
                if !self.value[node].is_finite() {
                    return Err(Error::ModelLoad(format!(
                        "Tree {} leaf {} has a non-finite value",
                        index, node
                    )));
                }
                continue;
            }

            for child in [left, right] {
                if child <= node as i64 || child >= n as i64 {
                    return Err(Error::ModelLoad(format!(
                        "Tree {} node {} has invalid child {}",
                        index, node, child
                    )));
                }
            }

            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(Error::ModelLoad(format!(
                    "Tree {} node {} splits on unknown feature {}",
                    index, node, feature
                )));
            }
            if self.threshold[node].is_nan() {
                return Err(Error::ModelLoad(format!(
                    "Tree {} node {} has a NaN threshold",
                    index, node
                )));
            }
        }

        Ok(())
    }

    fn predict(&self, features: &[f64]) -> f64 {
        let mut node = 0usize;
        loop {
            let left = self.children_left[node];
            if left == LEAF {
                return self.value[node];
            }
            let feature = self.feature[node] as usize;
            node = if features[feature] <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
    }
}

/// Mean-of-trees regression forest
#[derive(Debug, Clone, Deserialize)]
pub struct RandomForest {
    n_features: usize,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn new(n_features: usize, trees: Vec<DecisionTree>) -> Result<Self> {
        let forest = Self { n_features, trees };
        forest.validate()?;
        Ok(forest)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.trees.is_empty() {
            return Err(Error::ModelLoad("Random forest has no trees".to_string()));
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i, self.n_features)?;
        }
        Ok(())
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

impl Regressor for RandomForest {
    fn predict(&self, features: &[f64]) -> Result<f64> {
        check_input_len(self.kind(), self.n_features, features)?;

        let total: f64 = self.trees.iter().map(|t| t.predict(features)).sum();
        Ok(total / self.trees.len() as f64)
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn kind(&self) -> &'static str {
        "random_forest"
    }
}

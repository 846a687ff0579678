// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while building a cluster tree.

use crate::NodeId;

/// Invalid input detected while building or validating a [`ClusterTree`](crate::ClusterTree).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TreeError {
    /// A cluster declared a weight that differs from the sum of its children.
    #[error("node {node:?} declares weight {declared} but its children sum to {computed}")]
    WeightMismatch {
        /// The offending cluster.
        node: NodeId,
        /// Weight supplied by the input.
        declared: f64,
        /// Sum of the children's weights.
        computed: f64,
    },
    /// A weight is negative or not finite.
    #[error("node {node:?} has invalid weight {weight}")]
    InvalidWeight {
        /// The offending node.
        node: NodeId,
        /// The rejected weight.
        weight: f64,
    },
}

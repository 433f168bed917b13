// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors raised while loading or normalizing a menu tree.

use thiserror::Error;

use crate::types::Position;

/// A menu configuration the engine refuses to normalize.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Direct children of one node disagree on [`Position`].
    #[error(
        "children of menu `{parent}` mix positions: `{first}` is {expected} but `{key}` is {found}"
    )]
    MixedPositions {
        /// Key of the node whose children disagree.
        parent: String,
        /// Key of the first child, which sets the expected position.
        first: String,
        /// Position of the first child.
        expected: Position,
        /// Key of the first child that disagrees.
        key: String,
        /// Position of that child.
        found: Position,
    },

    /// Two nodes share one key.
    #[error("duplicate menu key `{key}`")]
    DuplicateKey {
        /// The repeated key.
        key: String,
    },

    /// The configuration document could not be parsed.
    #[error("invalid menu configuration: {0}")]
    Json(#[from] serde_json::Error),
}

// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors for route patterns and index builds.

use thiserror::Error;

/// A route pattern that cannot be parsed, or parameters that cannot be substituted into it.
#[derive(Debug, Error)]
pub enum PatternError {
    /// A `(` without its matching `)`.
    #[error("unterminated group at offset {offset} in `{pattern}`")]
    UnterminatedGroup {
        /// The template.
        pattern: String,
        /// Character offset of the opening `(`.
        offset: usize,
    },

    /// `()` with nothing inside.
    #[error("empty group at offset {offset} in `{pattern}`")]
    EmptyGroup {
        /// The template.
        pattern: String,
        /// Character offset of the opening `(`.
        offset: usize,
    },

    /// The generated expression was rejected by the regex engine.
    #[error("invalid expression in `{pattern}`")]
    InvalidRegex {
        /// The template.
        pattern: String,
        /// Regex engine error.
        #[source]
        source: regex::Error,
    },

    /// A required parameter had no value.
    #[error("missing value for parameter `{name}`")]
    MissingParam {
        /// Parameter name.
        name: String,
    },

    /// A value does not satisfy the parameter's expression.
    #[error("value `{value}` does not match parameter `{name}`")]
    InvalidParam {
        /// Parameter name.
        name: String,
        /// The rejected value.
        value: String,
    },
}

/// A menu tree the path index refuses to build.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A `path` or `alias` failed to parse.
    #[error("menu `{key}` has an invalid route `{path}`")]
    Pattern {
        /// Key of the owning node.
        key: String,
        /// The offending `path` or `alias`.
        path: String,
        /// Parse error.
        #[source]
        source: PatternError,
    },

    /// A pattern names one parameter more than once (strict builds only).
    #[error("route `{path}` of menu `{key}` repeats parameter `{name}`")]
    DuplicateParam {
        /// Key of the owning node.
        key: String,
        /// The offending `path` or `alias`.
        path: String,
        /// Repeated parameter name.
        name: String,
    },
}

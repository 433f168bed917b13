// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigator configuration.

use serde::Deserialize;
use signpost_index::IndexOptions;

/// Options for a [`Navigator`](crate::navigator::Navigator).
///
/// Deserializes from partial documents; missing fields take their defaults.
///
/// ```
/// use signpost_nav::NavigatorOptions;
///
/// let opts = NavigatorOptions::default();
/// assert!(!opts.strict_params);
/// assert!(!opts.track_tabs);
/// assert!(opts.tab_closable);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavigatorOptions {
    /// Reject route patterns that repeat a parameter name.
    pub strict_params: bool,
    /// Record every [`set_path`](crate::navigator::Navigator::set_path) as a tab.
    pub track_tabs: bool,
    /// Whether tabs recorded by `track_tabs` can be closed.
    pub tab_closable: bool,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            strict_params: false,
            track_tabs: false,
            tab_closable: true,
        }
    }
}

impl NavigatorOptions {
    /// Options forwarded to [`PathIndex::build`](signpost_index::PathIndex::build).
    pub fn index_options(&self) -> IndexOptions {
        IndexOptions {
            strict_params: self.strict_params,
        }
    }
}

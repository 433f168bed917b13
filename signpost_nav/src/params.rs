// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carry route parameters from the current page to a navigation target.
//!
//! A list page at `/user/7` (template `/user/:id`) can link to `/user/:id/edit`
//! and have `:id` filled in from the current URL:
//!
//! ```
//! use signpost_index::{IndexOptions, PathIndex};
//! use signpost_nav::params::resolve_path;
//! use signpost_nav::types::PreviousRoute;
//!
//! let index = PathIndex::build(&[], IndexOptions::default()).unwrap();
//! let previous = PreviousRoute { path: "/user/7", define: "/user/:id" };
//! let out = resolve_path(&index, "/user/:id/edit", Some(previous));
//! assert_eq!(out.path, "/user/7/edit");
//! assert!(out.resolved);
//! ```

use std::borrow::Cow;

use signpost_index::{PathIndex, PathPattern, strip_query};

use crate::types::{PreviousRoute, ResolvedPath};

fn pattern_for<'a>(index: &'a PathIndex, define: &str) -> Option<Cow<'a, PathPattern>> {
    if let Some(entry) = index.get(define) {
        return Some(Cow::Borrowed(&entry.matcher));
    }
    match PathPattern::parse(define) {
        Ok(pattern) => Some(Cow::Owned(pattern)),
        Err(err) => {
            tracing::debug!(define, %err, "cannot parse route template");
            None
        }
    }
}

/// Fill the named parameters of `path_define` from `previous`.
///
/// Returns the template unchanged with `resolved: false` when it has no named
/// parameters, when there is no previous route, or when any step fails.
pub fn resolve_path(
    index: &PathIndex,
    path_define: &str,
    previous: Option<PreviousRoute<'_>>,
) -> ResolvedPath {
    let Some(target) = pattern_for(index, path_define) else {
        return ResolvedPath::unresolved(path_define);
    };
    if !target.has_named_params() {
        return ResolvedPath::unresolved(path_define);
    }
    let Some(previous) = previous.filter(|p| !p.path.is_empty() && !p.define.is_empty()) else {
        return ResolvedPath::unresolved(path_define);
    };
    let Some(source) = pattern_for(index, previous.define) else {
        return ResolvedPath::unresolved(path_define);
    };
    let Some(params) = source.captures(strip_query(previous.path)) else {
        tracing::debug!(
            path = previous.path,
            define = previous.define,
            "previous path does not match its template"
        );
        return ResolvedPath::unresolved(path_define);
    };

    #[cfg(debug_assertions)]
    for name in target.named_params().filter(|n| !params.contains_key(*n)) {
        tracing::warn!(
            template = path_define,
            param = name,
            previous = previous.path,
            "parameter is not available from the previous route"
        );
    }

    match target.compile(&params) {
        Ok(path) => ResolvedPath {
            path,
            resolved: true,
        },
        Err(err) => {
            tracing::debug!(template = path_define, %err, "cannot compile route template");
            ResolvedPath::unresolved(path_define)
        }
    }
}

// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookup from route path to node, with compiled matchers for patterns and aliases.

use std::collections::HashMap;

use signpost_menu::MenuNode;

use crate::error::IndexError;
use crate::pattern::PathPattern;
use crate::types::{IndexEntry, PathEntry, walk};

/// Options for [`PathIndex::build`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexOptions {
    /// Fail the build when a pattern repeats a parameter name.
    ///
    /// When unset, debug builds log a warning and matching keeps the first occurrence.
    pub strict_params: bool,
}

/// How [`PathIndex::find`] located an entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatchKind {
    /// The full input, query included, is a registered path.
    Exact,
    /// The input without its query string is a registered path.
    ExactWithoutQuery,
    /// The entry's path pattern matched.
    Pattern,
    /// The input is verbatim one of the entry's aliases.
    Alias,
    /// One of the entry's alias patterns matched.
    AliasPattern,
    /// The entry's path is the longest registered prefix of the input.
    Prefix,
}

/// Return `path` without its `?query` part.
pub fn strip_query(path: &str) -> &str {
    path.split_once('?').map_or(path, |(p, _)| p)
}

/// Nodes that carry a `path`, keyed by that path, in tree order.
#[derive(Clone, Debug, Default)]
pub struct PathIndex {
    entries: Vec<PathEntry>,
    by_path: HashMap<String, usize>,
}

impl PathIndex {
    /// Index every node of `menus` that has a `path`, compiling its path and aliases.
    ///
    /// A path registered twice keeps the later node in the earlier slot.
    pub fn build(menus: &[MenuNode], options: IndexOptions) -> Result<Self, IndexError> {
        let mut index = Self::default();
        walk::<IndexError>(menus, &mut |node, parent, at| {
            let Some(path) = node.path.as_deref() else {
                return Ok(());
            };
            let matcher = compile(&node.key, path, options)?;
            let alias_matchers = node
                .alias
                .iter()
                .map(|alias| compile(&node.key, alias, options))
                .collect::<Result<Vec<_>, _>>()?;
            index.insert(PathEntry {
                entry: IndexEntry::new(node, parent, at),
                matcher,
                alias_matchers,
            });
            Ok(())
        })?;
        tracing::debug!(entries = index.len(), "built path index");
        Ok(index)
    }

    fn insert(&mut self, entry: PathEntry) {
        let path = entry.path().to_string();
        if let Some(&slot) = self.by_path.get(&path) {
            tracing::debug!(path = %path, key = entry.entry.key(), "path registered twice; replacing");
            self.entries[slot] = entry;
        } else {
            self.by_path.insert(path, self.entries.len());
            self.entries.push(entry);
        }
    }

    /// The entry registered under exactly `path`.
    pub fn get(&self, path: &str) -> Option<&PathEntry> {
        self.by_path.get(path).map(|&i| &self.entries[i])
    }

    /// Whether `path` is a registered path.
    pub fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path)
    }

    /// Number of registered paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion (depth-first) order.
    pub fn iter(&self) -> core::slice::Iter<'_, PathEntry> {
        self.entries.iter()
    }

    /// Locate the node owning `path` by exact key, pattern, or alias.
    ///
    /// Tries the full input, then the input without query, then scans entries in
    /// order testing each entry's pattern, literal aliases, and alias patterns.
    pub fn find(&self, path: &str) -> Option<(&PathEntry, MatchKind)> {
        if let Some(e) = self.get(path) {
            return Some((e, MatchKind::Exact));
        }
        let bare = strip_query(path);
        if let Some(e) = self.get(bare) {
            return Some((e, MatchKind::ExactWithoutQuery));
        }
        self.entries.iter().find_map(|e| {
            if e.matcher.is_match(bare) {
                Some((e, MatchKind::Pattern))
            } else if e.has_alias(path) || e.has_alias(bare) {
                Some((e, MatchKind::Alias))
            } else if e.alias_matches(bare) {
                Some((e, MatchKind::AliasPattern))
            } else {
                None
            }
        })
    }

    /// The registered path that is the longest string prefix of `path` (query stripped).
    pub fn longest_prefix(&self, path: &str) -> Option<&PathEntry> {
        let bare = strip_query(path);
        self.entries
            .iter()
            .filter(|e| bare.starts_with(e.path()))
            .max_by_key(|e| e.path().len())
    }

    /// [`find`](Self::find), falling back to [`longest_prefix`](Self::longest_prefix).
    pub fn resolve(&self, path: &str) -> Option<(&PathEntry, MatchKind)> {
        self.find(path)
            .or_else(|| self.longest_prefix(path).map(|e| (e, MatchKind::Prefix)))
    }
}

fn compile(key: &str, path: &str, options: IndexOptions) -> Result<PathPattern, IndexError> {
    let pattern = PathPattern::parse(path).map_err(|source| IndexError::Pattern {
        key: key.to_string(),
        path: path.to_string(),
        source,
    })?;
    if let Some(name) = pattern.duplicate_params().first().map(|n| n.to_string()) {
        if options.strict_params {
            return Err(IndexError::DuplicateParam {
                key: key.to_string(),
                path: path.to_string(),
                name,
            });
        }
        #[cfg(debug_assertions)]
        tracing::warn!(key, path, name = %name, "route repeats a parameter; the first occurrence wins");
    }
    Ok(pattern)
}

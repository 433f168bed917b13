// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Route resolution: map a concrete path to a registered menu path and derive the selection.
//!
//! ## Matching order
//!
//! [`get_matched_path`] strips the query string and tries, in order:
//!
//! 1) the full input as a registered path;
//! 2) the input without query as a registered path;
//! 3) each entry in tree order: its pattern, its literal aliases, its alias patterns;
//! 4) the longest registered path that is a string prefix of the input.
//!
//! The last step treats unregistered child pages (`/orders/17/history` under a
//! registered `/orders`) as part of their closest enclosing entry.

use signpost_index::{IndexEntry, KeyIndex, ParentLookup, PathIndex};
use signpost_menu::Position;

/// The registered path that owns `path`, or an empty string.
pub fn get_matched_path(index: &PathIndex, path: &str) -> String {
    match index.resolve(path) {
        Some((entry, kind)) => {
            tracing::trace!(path, matched = entry.path(), ?kind, "matched path");
            entry.path().to_string()
        }
        None => {
            tracing::trace!(path, "no menu owns path");
            String::new()
        }
    }
}

/// Key of the header entry that contains `key`.
///
/// Walks up from `key` to the first node whose parent is a `top` node and returns
/// that parent's key. When the chain ends without one, returns the root's key.
pub fn top_key_of(keys: &KeyIndex, key: &str) -> Option<String> {
    let mut cur: &IndexEntry = keys.get(key)?;
    loop {
        match &cur.parent {
            None => return Some(cur.key().to_string()),
            Some(parent) if parent.position == Position::Top => return Some(parent.key.clone()),
            Some(parent) => match keys.get(&parent.key) {
                Some(next) => cur = next,
                None => return Some(cur.key().to_string()),
            },
        }
    }
}

/// Keys of the `side` ancestors of `key` up to the first `top` ancestor, outermost first.
pub fn open_keys_of(keys: &KeyIndex, key: &str) -> Vec<String> {
    let mut out: Vec<String> = keys
        .ancestors(key)
        .take_while(|a| a.node.position != Position::Top)
        .filter(|a| a.node.position == Position::Side)
        .map(|a| a.key().to_string())
        .collect();
    out.reverse();
    out
}

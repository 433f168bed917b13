// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breadcrumb trails built by walking parent paths through the path index.

use signpost_index::PathIndex;
use signpost_menu::MenuRecord;

use crate::types::BreadcrumbItem;

/// Prepend the trail for `path` to `list`.
///
/// Starting at the entry registered under `path`, each node with its
/// `breadcrumb` flag set contributes an item, and the walk continues through
/// the parent's `path`. At a parent without a `path` (a collapsed container),
/// the parent contributes one last item linking to its `redirect`, and the
/// final item's `path` is cleared. When `path` is not registered, `list` comes
/// back unchanged.
pub fn create_breadcrumb_list(
    path: &str,
    index: &PathIndex,
    list: Vec<BreadcrumbItem>,
) -> Vec<BreadcrumbItem> {
    // Collected leaf to root.
    let mut trail = Vec::new();
    let mut cur = path.to_string();
    // A path registered twice can point a parent link back at a descendant.
    let mut steps = 0;
    let terminated = loop {
        let Some(entry) = index.get(&cur).filter(|_| steps <= index.len()) else {
            break false;
        };
        steps += 1;
        let node = entry.node();
        if node.in_breadcrumb() {
            trail.push(BreadcrumbItem {
                key: node.key.clone(),
                path: cur.clone(),
                label: node.title.clone(),
            });
        }
        match entry.entry.parent.as_ref() {
            Some(MenuRecord {
                path: Some(parent_path),
                ..
            }) => {
                cur = parent_path.clone();
            }
            parent => {
                if let Some(parent) = parent.filter(|p| p.in_breadcrumb()) {
                    trail.push(BreadcrumbItem {
                        key: parent.key.clone(),
                        path: parent.redirect.clone().unwrap_or_default(),
                        label: parent.title.clone(),
                    });
                }
                break true;
            }
        }
    };
    trail.reverse();
    trail.extend(list);
    if terminated && let Some(last) = trail.last_mut() {
        last.path.clear();
    }
    tracing::trace!(path, items = trail.len(), "built breadcrumb");
    trail
}

// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree normalization: validate a raw menu tree and rewrite it into an action tree.
//!
//! ## Rules
//!
//! Nodes are processed depth-first, each with its already-normalized parent:
//!
//! 1. The direct children of a node must share one [`Position`], and keys must be
//!    unique across the tree. Violations fail with a [`ConfigError`].
//! 2. Redirect collapsing: when a parent still has a `path`, and a non-`sub`
//!    child shares the parent's position, the parent's `path` becomes its
//!    `redirect`. Once the parent's `path` is gone, later siblings cannot trigger
//!    this again, so only the first matching child is consulted.
//! 3. Top-to-side collapse: a `top` node with at least one `side` child drops its
//!    `path` and redirects to a reachable leaf: its own `path` when that is one of
//!    the [executable paths](executable_paths) below it, else the first of them.
//! 4. Every other node keeps its `path`.
//!
//! A node that arrives with both `path` and `redirect` keeps `path`; `redirect`
//! is only retained on nodes without a route of their own.
//!
//! The input is an owned tree, so cyclic configurations cannot be expressed.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::ConfigError;
use crate::types::{MenuNode, Position};

/// Validate and normalize a raw menu tree.
///
/// The root list itself is not checked for position homogeneity; a layout may
/// mix top-level `top` and `side` roots.
pub fn normalize(menus: Vec<MenuNode>) -> Result<Vec<MenuNode>, ConfigError> {
    let mut seen = HashSet::new();
    let out = normalize_level(menus, None, &mut seen)?;
    debug!(nodes = seen.len(), roots = out.len(), "normalized menu tree");
    Ok(out)
}

fn normalize_level(
    menus: Vec<MenuNode>,
    mut parent: Option<&mut MenuNode>,
    seen: &mut HashSet<String>,
) -> Result<Vec<MenuNode>, ConfigError> {
    let mut out = Vec::with_capacity(menus.len());
    for mut menu in menus {
        if !seen.insert(menu.key.clone()) {
            return Err(ConfigError::DuplicateKey { key: menu.key });
        }
        check_sibling_positions(&menu)?;

        if menu.path.is_some() && menu.redirect.take().is_some() {
            trace!(key = %menu.key, "dropping configured redirect on a routed node");
        }

        if let Some(p) = parent.as_deref_mut() {
            collapse_into_redirect(p, menu.position);
        }

        let children = core::mem::take(&mut menu.children);
        if menu.position == Position::Top && children.iter().any(|c| c.position == Position::Side)
        {
            let executable = executable_paths(&children);
            let own = menu.path.take();
            menu.redirect = match own {
                Some(p) if executable.contains(&p) => Some(p),
                _ => executable.into_iter().next(),
            };
            trace!(key = %menu.key, redirect = ?menu.redirect, "top menu redirects to side leaf");
        }

        let normalized = normalize_level(children, Some(&mut menu), seen)?;
        menu.children = normalized;
        out.push(menu);
    }
    Ok(out)
}

fn check_sibling_positions(menu: &MenuNode) -> Result<(), ConfigError> {
    let Some(first) = menu.children.first() else {
        return Ok(());
    };
    match menu.children.iter().find(|c| c.position != first.position) {
        Some(odd) => Err(ConfigError::MixedPositions {
            parent: menu.key.clone(),
            first: first.key.clone(),
            expected: first.position,
            key: odd.key.clone(),
            found: odd.position,
        }),
        None => Ok(()),
    }
}

// Step 2: a parent sharing its child's position is a header, not a page.
fn collapse_into_redirect(parent: &mut MenuNode, child_position: Position) {
    if parent.path.is_none()
        || child_position == Position::Sub
        || child_position != parent.position
    {
        return;
    }
    parent.redirect = parent.path.take();
    trace!(key = %parent.key, redirect = ?parent.redirect, "collapsed header path into redirect");
}

/// Concrete paths reachable as the last actionable link under `menus`.
///
/// A node contributes its `path` and `alias` entries when it has no children,
/// or when its children sit at a different position (it is the last link of its
/// position chain). Deeper descendants are always visited. Order is depth-first,
/// left-to-right, without duplicates.
pub fn executable_paths(menus: &[MenuNode]) -> Vec<String> {
    let mut out = Vec::new();
    collect_executable(menus, &mut out);
    out
}

fn collect_executable(menus: &[MenuNode], out: &mut Vec<String>) {
    for menu in menus {
        let last_link = menu.children.is_empty()
            || menu.children.iter().any(|c| c.position != menu.position);
        if last_link {
            for p in menu.path.iter().chain(&menu.alias) {
                if !out.contains(p) {
                    out.push(p.clone());
                }
            }
        }
        collect_executable(&menu.children, out);
    }
}

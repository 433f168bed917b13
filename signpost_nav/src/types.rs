// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the navigator: breadcrumb items, tabs, and resolved paths.
//!
//! ## Overview
//!
//! These types are the outputs read by rendering collaborators.
//! They are produced by the [`navigator`](crate::navigator) and its helpers.

use signpost_menu::Title;

/// One entry of a breadcrumb trail.
///
/// Produced by [`create_breadcrumb_list`](crate::breadcrumb::create_breadcrumb_list),
/// ordered root to leaf.
#[derive(Clone, Debug, PartialEq)]
pub struct BreadcrumbItem {
    /// Menu key.
    pub key: String,
    /// Link target. Empty for the last item, which is the current page.
    pub path: String,
    /// Unresolved label; render it with [`Title::resolve`].
    pub label: Title,
}

/// One open tab of a multi-tab session.
#[derive(Clone, Debug, PartialEq)]
pub struct TabItem {
    /// Route template of the owning menu, or the raw path when no menu owns it.
    ///
    /// Tabs are identified by this template: `/user/1` and `/user/2` share one tab.
    pub path: String,
    /// The concrete path last visited in this tab.
    pub full_path: String,
    /// Title of the owning menu, or the raw path.
    pub title: Title,
    /// Whether the user may close the tab.
    pub closable: bool,
}

/// The multi-tab session: open tabs in opening order and the active one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiTab {
    /// `full_path` of the active tab.
    pub current: Option<String>,
    /// Open tabs, in opening order.
    pub items: Vec<TabItem>,
}

/// Result of [`resolve_path`](crate::params::resolve_path).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPath {
    /// The concrete path, or the unchanged template when `resolved` is false.
    pub path: String,
    /// Whether parameters were substituted.
    pub resolved: bool,
}

impl ResolvedPath {
    pub(crate) fn unresolved(path: &str) -> Self {
        Self {
            path: path.to_string(),
            resolved: false,
        }
    }
}

/// The route parameters are carried from: a concrete path and the template it matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PreviousRoute<'a> {
    /// Concrete path, query string allowed.
    pub path: &'a str,
    /// Template the path matched, for example `/user/:id`.
    pub define: &'a str,
}

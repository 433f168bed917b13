// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation state: the selection, open keys, breadcrumb, and tabs derived from the current path.
//!
//! ## Two-phase selection
//!
//! Side-menu selection happens in two steps so a click can be reflected before
//! the router has finished navigating:
//!
//! 1) [`arm`](NavigationState::arm) records the intended key as pending.
//! 2) [`commit`](NavigationState::commit) makes a key current and clears the pending one.
//!
//! [`cancel_pending`](NavigationState::cancel_pending) drops an intent that never
//! committed. While a key is pending it is what
//! [`selected_side_key`](NavigationState::selected_side_key) reports.
//!
//! ```
//! use signpost_nav::state::{NavigationState, SelectPhase};
//!
//! let mut s = NavigationState::new();
//! s.arm(Some("posts".into()));
//! assert_eq!(s.phase(), SelectPhase::Pending);
//! assert_eq!(s.selected_side_key(), Some("posts"));
//! assert_eq!(s.current_side_key(), None);
//!
//! s.commit(Some("posts".into()));
//! assert_eq!(s.phase(), SelectPhase::Idle);
//! assert_eq!(s.current_side_key(), Some("posts"));
//! ```

use crate::types::{BreadcrumbItem, MultiTab};

/// Whether a side-menu selection is waiting to be committed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectPhase {
    /// No pending selection.
    Idle,
    /// A selection was armed and not yet committed or canceled.
    Pending,
}

/// Session state owned by a [`Navigator`](crate::navigator::Navigator).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    current_top_key: Option<String>,
    current_side_key: Option<String>,
    pending_side_key: Option<String>,
    open_keys: Vec<String>,
    breadcrumb: Vec<BreadcrumbItem>,
    multi_tab: MultiTab,
}

impl NavigationState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the highlighted header entry.
    pub fn current_top_key(&self) -> Option<&str> {
        self.current_top_key.as_deref()
    }

    /// Key of the committed side-menu selection.
    pub fn current_side_key(&self) -> Option<&str> {
        self.current_side_key.as_deref()
    }

    /// Key armed but not yet committed.
    pub fn pending_side_key(&self) -> Option<&str> {
        self.pending_side_key.as_deref()
    }

    /// The pending key if any, else the committed one.
    pub fn selected_side_key(&self) -> Option<&str> {
        self.pending_side_key().or(self.current_side_key())
    }

    /// Current selection phase.
    pub fn phase(&self) -> SelectPhase {
        if self.pending_side_key.is_some() {
            SelectPhase::Pending
        } else {
            SelectPhase::Idle
        }
    }

    /// Expanded ancestor keys, outermost first.
    pub fn open_keys(&self) -> &[String] {
        &self.open_keys
    }

    /// Breadcrumb trail, root to leaf.
    pub fn breadcrumb(&self) -> &[BreadcrumbItem] {
        &self.breadcrumb
    }

    /// Open tabs.
    pub fn multi_tab(&self) -> &MultiTab {
        &self.multi_tab
    }

    /// Record `key` as the intended side selection.
    pub fn arm(&mut self, key: Option<String>) {
        tracing::trace!(key = ?key, "arm side selection");
        self.pending_side_key = key;
    }

    /// Make `key` the committed side selection and clear any pending one.
    pub fn commit(&mut self, key: Option<String>) {
        tracing::trace!(key = ?key, "commit side selection");
        self.current_side_key = key;
        self.pending_side_key = None;
    }

    /// Drop the pending selection, keeping the committed one.
    pub fn cancel_pending(&mut self) {
        self.pending_side_key = None;
    }

    pub(crate) fn set_top_key(&mut self, key: Option<String>) {
        self.current_top_key = key;
    }

    pub(crate) fn set_open_keys(&mut self, keys: Vec<String>) {
        self.open_keys = keys;
    }

    pub(crate) fn set_breadcrumb(&mut self, items: Vec<BreadcrumbItem>) {
        self.breadcrumb = items;
    }

    pub(crate) fn multi_tab_mut(&mut self) -> &mut MultiTab {
        &mut self.multi_tab
    }
}

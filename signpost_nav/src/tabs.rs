// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-tab sessions keyed by route template.

use signpost_index::PathIndex;
use signpost_menu::Title;

use crate::types::{MultiTab, TabItem};

impl MultiTab {
    /// The active tab.
    pub fn active(&self) -> Option<&TabItem> {
        let current = self.current.as_deref()?;
        self.items.iter().find(|t| t.full_path == current)
    }

    /// Open `full_path` under `template`, reusing a tab with the same template.
    pub fn open(&mut self, template: &str, full_path: &str, title: Title, closable: bool) {
        match self.items.iter_mut().find(|t| t.path == template) {
            Some(tab) => {
                tab.full_path = full_path.to_string();
                tab.title = title;
                tab.closable = closable;
            }
            None => self.items.push(TabItem {
                path: template.to_string(),
                full_path: full_path.to_string(),
                title,
                closable,
            }),
        }
        self.current = Some(full_path.to_string());
    }

    /// Close the tab showing `full_path`.
    ///
    /// Returns `false` when no such tab is open or it is not closable. Closing the
    /// active tab activates its right neighbor, or its left one when it was last.
    pub fn close(&mut self, full_path: &str) -> bool {
        let Some(i) = self.items.iter().position(|t| t.full_path == full_path) else {
            return false;
        };
        if !self.items[i].closable {
            return false;
        }
        self.items.remove(i);
        if self.current.as_deref() == Some(full_path) {
            let next = self.items.get(i).or_else(|| i.checked_sub(1).and_then(|j| self.items.get(j)));
            self.current = next.map(|t| t.full_path.clone());
        }
        true
    }
}

/// Record a visit to `full_path` in `tabs`.
///
/// The owning menu (exact path, pattern, or alias; no prefix fallback) supplies
/// the tab's template and title. Unowned paths use the raw path for both.
pub fn set_multi_tab_routes(tabs: &mut MultiTab, index: &PathIndex, full_path: &str, closable: bool) {
    let (template, title) = match index.find(full_path) {
        Some((entry, _)) => (entry.path().to_string(), entry.node().title.clone()),
        None => (full_path.to_string(), Title::from(full_path)),
    };
    tracing::trace!(full_path, template = %template, "record tab");
    tabs.open(&template, full_path, title, closable);
}

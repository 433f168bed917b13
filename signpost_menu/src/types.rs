// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for menu trees: positions, flags, nodes, and parent records.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::title::Title;

/// Where a menu node is rendered.
///
/// All direct children of one node share a single position; see
/// [`normalize`](crate::normalize::normalize).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Header menu.
    Top,
    /// Sider menu.
    #[default]
    Side,
    /// Drill-in list that replaces the sider menu while one of its items is selected.
    Sub,
}

impl Position {
    /// Lowercase name, as written in configuration files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Side => "side",
            Self::Sub => "sub",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags::bitflags! {
    /// Node flags controlling menu rendering and breadcrumb participation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MenuFlags: u8 {
        /// Node is rendered by menu widgets.
        const DISPLAY    = 0b0000_0001;
        /// Node contributes an entry to the breadcrumb trail.
        const BREADCRUMB = 0b0000_0010;
    }
}

impl Default for MenuFlags {
    fn default() -> Self {
        Self::DISPLAY | Self::BREADCRUMB
    }
}

/// One entry of a declarative menu tree.
///
/// Raw configuration nodes carry `path`; after
/// [`normalize`](crate::normalize::normalize) container nodes may carry a
/// `redirect` instead. A normalized node never carries both.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "crate::config::RawMenuNode")]
pub struct MenuNode {
    /// Globally unique identifier.
    pub key: String,
    /// Display title, resolved lazily by the renderer.
    pub title: Title,
    /// Route pattern, for example `/user/:id`.
    pub path: Option<String>,
    /// Computed navigation target for container nodes.
    pub redirect: Option<String>,
    /// Extra path patterns equivalent to `path`.
    pub alias: Vec<String>,
    /// Icon identifier, opaque to the engine.
    pub icon: Option<String>,
    /// Link target (for example `_blank`), opaque to the engine.
    pub target: Option<String>,
    /// Placement of this node.
    pub position: Position,
    /// Rendering and breadcrumb flags.
    pub flags: MenuFlags,
    /// Ordered child nodes.
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Create a node with no path and no children.
    pub fn new(key: impl Into<String>, title: impl Into<Title>, position: Position) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            path: None,
            redirect: None,
            alias: Vec::new(),
            icon: None,
            target: None,
            position,
            flags: MenuFlags::default(),
            children: Vec::new(),
        }
    }

    /// Create a [`Position::Top`] node.
    pub fn top(key: impl Into<String>, title: impl Into<Title>) -> Self {
        Self::new(key, title, Position::Top)
    }

    /// Create a [`Position::Side`] node.
    pub fn side(key: impl Into<String>, title: impl Into<Title>) -> Self {
        Self::new(key, title, Position::Side)
    }

    /// Create a [`Position::Sub`] node.
    pub fn sub(key: impl Into<String>, title: impl Into<Title>) -> Self {
        Self::new(key, title, Position::Sub)
    }

    /// Set the route pattern.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Append an alias pattern.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias.push(alias.into());
        self
    }

    /// Set the icon identifier.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the link target.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Append one child.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children in order.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Hide the node from menu rendering (it still resolves routes).
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.flags.remove(MenuFlags::DISPLAY);
        self
    }

    /// Exclude the node from breadcrumb trails.
    #[must_use]
    pub fn without_breadcrumb(mut self) -> Self {
        self.flags.remove(MenuFlags::BREADCRUMB);
        self
    }

    /// Whether menu widgets should render this node.
    pub fn is_displayed(&self) -> bool {
        self.flags.contains(MenuFlags::DISPLAY)
    }

    /// Whether this node contributes a breadcrumb entry.
    pub fn in_breadcrumb(&self) -> bool {
        self.flags.contains(MenuFlags::BREADCRUMB)
    }

    /// Navigation target when the node is clicked: `redirect`, else `path`.
    pub fn href(&self) -> Option<&str> {
        self.redirect.as_deref().or(self.path.as_deref())
    }

    /// Copy of this node's own fields, without children.
    pub fn to_record(&self) -> MenuRecord {
        MenuRecord {
            key: self.key.clone(),
            title: self.title.clone(),
            path: self.path.clone(),
            redirect: self.redirect.clone(),
            alias: self.alias.clone(),
            icon: self.icon.clone(),
            target: self.target.clone(),
            position: self.position,
            flags: self.flags,
        }
    }

    /// Copy of this node with its children dropped.
    pub fn without_children(&self) -> Self {
        Self::from(self.to_record())
    }
}

/// A [`MenuNode`] without its children.
///
/// Indexes use this as the parent back-reference so that no entry retains a
/// path back into the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuRecord {
    /// See [`MenuNode::key`].
    pub key: String,
    /// See [`MenuNode::title`].
    pub title: Title,
    /// See [`MenuNode::path`].
    pub path: Option<String>,
    /// See [`MenuNode::redirect`].
    pub redirect: Option<String>,
    /// See [`MenuNode::alias`].
    pub alias: Vec<String>,
    /// See [`MenuNode::icon`].
    pub icon: Option<String>,
    /// See [`MenuNode::target`].
    pub target: Option<String>,
    /// See [`MenuNode::position`].
    pub position: Position,
    /// See [`MenuNode::flags`].
    pub flags: MenuFlags,
}

impl MenuRecord {
    /// Whether this node contributes a breadcrumb entry.
    pub fn in_breadcrumb(&self) -> bool {
        self.flags.contains(MenuFlags::BREADCRUMB)
    }

    /// Navigation target when the node is clicked: `redirect`, else `path`.
    pub fn href(&self) -> Option<&str> {
        self.redirect.as_deref().or(self.path.as_deref())
    }
}

impl From<MenuRecord> for MenuNode {
    fn from(r: MenuRecord) -> Self {
        Self {
            key: r.key,
            title: r.title,
            path: r.path,
            redirect: r.redirect,
            alias: r.alias,
            icon: r.icon,
            target: r.target,
            position: r.position,
            flags: r.flags,
            children: Vec::new(),
        }
    }
}

/// Copy `menus`, dropping every node (and its subtree) that is not displayed.
pub fn displayed(menus: &[MenuNode]) -> Vec<MenuNode> {
    menus
        .iter()
        .filter(|m| m.is_displayed())
        .map(|m| MenuNode {
            children: displayed(&m.children),
            ..m.without_children()
        })
        .collect()
}

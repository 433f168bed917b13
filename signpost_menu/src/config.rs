// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading menu trees from JSON documents.
//!
//! The document is an array of nodes:
//!
//! ```json
//! [
//!   { "key": "content", "title": { "i18n": "menu.content" }, "position": "top", "path": "/content",
//!     "children": [
//!       { "key": "posts", "title": "Posts", "path": "/content/posts", "alias": ["/content/posts/:id"] }
//!     ] }
//! ]
//! ```
//!
//! `position` defaults to `side`; `display` and `breadcrumb` default to `true`.
//! Unknown fields are ignored so host applications can keep their own
//! per-route data next to the menu definition.
//!
//! These functions only deserialize. Pass the result through
//! [`normalize`](crate::normalize()) (or hand it to a navigator, which does so)
//! before indexing it.

use std::io::Read;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::title::Title;
use crate::types::{MenuFlags, MenuNode, Position};

/// Serialized shape of a [`MenuNode`].
#[derive(Debug, Deserialize)]
pub(crate) struct RawMenuNode {
    key: String,
    title: Title,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    redirect: Option<String>,
    #[serde(default)]
    alias: Vec<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    position: Position,
    #[serde(default)]
    display: Option<bool>,
    #[serde(default)]
    breadcrumb: Option<bool>,
    #[serde(default)]
    children: Vec<MenuNode>,
}

impl From<RawMenuNode> for MenuNode {
    fn from(raw: RawMenuNode) -> Self {
        let mut flags = MenuFlags::default();
        flags.set(MenuFlags::DISPLAY, raw.display.unwrap_or(true));
        flags.set(MenuFlags::BREADCRUMB, raw.breadcrumb.unwrap_or(true));
        Self {
            key: raw.key,
            title: raw.title,
            path: raw.path,
            redirect: raw.redirect,
            alias: raw.alias,
            icon: raw.icon,
            target: raw.target,
            position: raw.position,
            flags,
            children: raw.children,
        }
    }
}

/// Parse a menu tree from a JSON string.
pub fn from_json_str(json: &str) -> Result<Vec<MenuNode>, ConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a menu tree from a JSON reader.
pub fn from_reader<R: Read>(reader: R) -> Result<Vec<MenuNode>, ConfigError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Convert an already-parsed JSON value into a menu tree.
pub fn from_value(value: serde_json::Value) -> Result<Vec<MenuNode>, ConfigError> {
    Ok(serde_json::from_value(value)?)
}

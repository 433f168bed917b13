// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=signpost_menu --heading-base-level=0

//! Signpost Menu: the declarative menu tree behind an admin layout.
//!
//! Signpost Menu is the first stage of the Signpost navigation engine.
//!
//! - Represents a hierarchy of menu entries with route patterns, aliases, titles, and placement.
//! - Loads menu trees from JSON configuration.
//! - Normalizes raw trees into action trees: container nodes lose their `path` and gain a `redirect`
//!   pointing at the best reachable page.
//!
//! ## Where this fits
//!
//! - Menu tree: declaration and normalization (this crate).
//! - Indexes: key and path lookups with compiled patterns (`signpost_index`).
//! - Navigator: route resolution and navigation state (`signpost_nav`).
//!
//! ## API overview
//!
//! - [`MenuNode`]: one entry of the tree. See [`MenuNode::position`] and [`MenuFlags`].
//! - [`MenuRecord`]: a node without children, used as the parent back-reference in indexes.
//! - [`Title`] and [`Translate`]: titles resolved lazily through a translator.
//! - [`normalize`]: validation and redirect collapsing.
//! - [`config`]: JSON loading.
//!
//! ## Example
//!
//! ```rust
//! use signpost_menu::{MenuNode, normalize};
//!
//! let menus = vec![
//!     MenuNode::top("content", "Content")
//!         .with_path("/content")
//!         .with_children([
//!             MenuNode::side("posts", "Posts").with_path("/content/posts"),
//!             MenuNode::side("pages", "Pages").with_path("/content/pages"),
//!         ]),
//! ];
//!
//! let menus = normalize(menus).unwrap();
//!
//! // The top entry is a header now: clicking it opens the first page.
//! assert_eq!(menus[0].path, None);
//! assert_eq!(menus[0].redirect.as_deref(), Some("/content/posts"));
//! ```

pub mod config;
pub mod error;
pub mod normalize;
pub mod title;
pub mod types;

pub use error::ConfigError;
pub use normalize::{executable_paths, normalize};
pub use title::{Title, Translate, Untranslated};
pub use types::{MenuFlags, MenuNode, MenuRecord, Position, displayed};

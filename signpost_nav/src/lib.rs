// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=signpost_nav --heading-base-level=0

//! Signpost Nav: deterministic navigation state for admin menus.
//!
//! ## Overview
//!
//! This crate turns a path string into the state an admin layout renders: which
//! header and side entries are selected, which side groups are expanded, the
//! breadcrumb trail, and the open tabs.
//! It does not navigate. A router collaborator reports each navigation to
//! [`Navigator::set_path`](crate::navigator::Navigator::set_path) and the layout
//! reads the getters.
//!
//! ## Inputs
//!
//! A menu tree of [`MenuNode`](signpost_menu::MenuNode)s, normalized and indexed by
//! [`Navigator::set_menus`](crate::navigator::Navigator::set_menus), and concrete
//! paths such as `/content/posts/12/edit?from=list`.
//!
//! ## Workflow
//!
//! 1) Match: [`get_matched_path`](crate::resolver::get_matched_path) maps the path to a
//!    registered route by exact key, pattern, alias, and finally longest prefix.
//! 2) Derive: when the match changes, the navigator rebuilds the breadcrumb
//!    ([`create_breadcrumb_list`](crate::breadcrumb::create_breadcrumb_list)), the header
//!    key ([`top_key_of`](crate::resolver::top_key_of)), the open keys
//!    ([`open_keys_of`](crate::resolver::open_keys_of)), and commits the side selection.
//! 3) Render: read [`top_menus`](crate::navigator::Navigator::top_menus),
//!    [`sider_menus`](crate::navigator::Navigator::sider_menus),
//!    [`menu_breadcrumbs`](crate::navigator::Navigator::menu_breadcrumbs) and friends.
//!    Titles are resolved lazily with a [`Translate`](signpost_menu::Translate).
//!
//! Selection is two-phase: [`set_path_deferred`](crate::navigator::Navigator::set_path_deferred)
//! arms a side key that the next `set_path` commits. See [`state`].
//!
//! ## Example
//!
//! ```rust
//! use signpost_menu::{MenuNode, Untranslated};
//! use signpost_nav::{Navigator, NavigatorOptions};
//!
//! let menus = vec![
//!     MenuNode::top("content", "Content").with_children([
//!         MenuNode::side("posts", "Posts")
//!             .with_path("/content/posts")
//!             .with_child(MenuNode::sub("edit", "Edit").with_path("/content/posts/:id/edit")),
//!     ]),
//! ];
//!
//! let mut nav = Navigator::with_menus(menus, NavigatorOptions::default()).unwrap();
//! nav.set_path("/content/posts/7/edit");
//!
//! assert_eq!(nav.curr_top_menu_key(), Some("content"));
//! assert_eq!(nav.curr_sider_menu_key(), Some("edit"));
//! assert_eq!(nav.go_back_path(), Some("/content/posts"));
//!
//! let labels: Vec<_> = nav
//!     .menu_breadcrumbs()
//!     .iter()
//!     .map(|b| b.label.resolve(&Untranslated))
//!     .collect();
//! assert_eq!(labels, ["Content", "Posts", "Edit"]);
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (index sizes, match changes, parameter
//! warnings) and never installs a subscriber.

pub mod breadcrumb;
pub mod error;
pub mod navigator;
pub mod options;
pub mod params;
pub mod resolver;
pub mod state;
pub mod tabs;
pub mod types;

pub use error::NavError;
pub use navigator::Navigator;
pub use options::NavigatorOptions;
pub use state::{NavigationState, SelectPhase};
pub use types::{BreadcrumbItem, MultiTab, PreviousRoute, ResolvedPath, TabItem};

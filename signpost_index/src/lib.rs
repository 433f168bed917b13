// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=signpost_index --heading-base-level=0

//! Signpost Index: key and path lookups over a normalized menu tree.
//!
//! Signpost Index turns a tree of [`MenuNode`](signpost_menu::MenuNode)s into two flat maps.
//!
//! - [`KeyIndex`]: every node by `key`, with a parent record for ancestor walks.
//! - [`PathIndex`]: nodes that carry a `path`, with compiled [`PathPattern`]s for the
//!   path and each alias.
//!
//! Entries and their parent back-references are [`MenuRecord`](signpost_menu::MenuRecord)s,
//! a copy of a node's own fields without children. Ancestry is rebuilt on demand through
//! [`ParentLookup`], and subtrees are found in the source tree with
//! [`IndexEntry::locate`].
//!
//! Route patterns support named parameters (`/user/:id`), custom expressions
//! (`:id(\d+)`), optional and repeating parameters, and unnamed groups. See
//! [`pattern`] for the grammar.
//!
//! # Example
//!
//! ```rust
//! use signpost_index::{IndexOptions, KeyIndex, MatchKind, ParentLookup, PathIndex};
//! use signpost_menu::MenuNode;
//!
//! let menus = vec![
//!     MenuNode::side("users", "Users").with_child(
//!         MenuNode::side("user", "User").with_path("/users/:id"),
//!     ),
//! ];
//!
//! let keys = KeyIndex::build(&menus);
//! let paths = PathIndex::build(&menus, IndexOptions::default()).unwrap();
//!
//! let (entry, kind) = paths.find("/users/42?tab=posts").unwrap();
//! assert_eq!(entry.node().key, "user");
//! assert_eq!(kind, MatchKind::Pattern);
//!
//! let params = entry.matcher.captures("/users/42").unwrap();
//! assert_eq!(params["id"], "42");
//!
//! let ancestors: Vec<_> = keys.ancestors("user").map(|e| e.key()).collect();
//! assert_eq!(ancestors, vec!["users"]);
//! ```

pub mod error;
pub mod key_index;
pub mod path_index;
pub mod pattern;
pub mod types;

pub use error::{IndexError, PatternError};
pub use key_index::KeyIndex;
pub use path_index::{IndexOptions, MatchKind, PathIndex, strip_query};
pub use pattern::{Params, PathPattern};
pub use types::{Ancestors, IndexEntry, ParentLookup, PathEntry};

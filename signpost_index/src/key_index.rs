// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookup from node key to node and parent record.

use core::convert::Infallible;
use std::collections::HashMap;

use signpost_menu::MenuNode;

use crate::types::{IndexEntry, ParentLookup, walk};

/// Every node of a normalized tree, keyed by `key`.
#[derive(Clone, Debug, Default)]
pub struct KeyIndex {
    entries: HashMap<String, IndexEntry>,
}

impl KeyIndex {
    /// Index every node of `menus`.
    ///
    /// Keys are expected to be unique; a repeated key keeps the last node.
    pub fn build(menus: &[MenuNode]) -> Self {
        let mut entries = HashMap::new();
        let Ok(()) = walk::<Infallible>(menus, &mut |node, parent, at| {
            entries.insert(node.key.clone(), IndexEntry::new(node, parent, at));
            Ok(())
        });
        tracing::debug!(entries = entries.len(), "built key index");
        Self { entries }
    }

    /// The entry for `key`.
    pub fn get(&self, key: &str) -> Option<&IndexEntry> {
        self.entries.get(key)
    }

    /// Whether `key` is indexed.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &IndexEntry> + '_ {
        self.entries.values()
    }
}

impl ParentLookup for KeyIndex {
    fn entry(&self, key: &str) -> Option<&IndexEntry> {
        self.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<MenuNode> {
        vec![
            MenuNode::top("a", "A").with_child(
                MenuNode::side("b", "B")
                    .with_child(MenuNode::side("c", "C").with_path("/a/b/c")),
            ),
            MenuNode::top("z", "Z").with_path("/z"),
        ]
    }

    #[test]
    fn one_entry_per_node() {
        let idx = KeyIndex::build(&tree());
        assert_eq!(idx.len(), 4);
        assert!(idx.contains("c"));
        assert!(!idx.contains("missing"));
        assert_eq!(idx.get("c").unwrap().node.path.as_deref(), Some("/a/b/c"));
    }

    #[test]
    fn parent_records_carry_no_children() {
        let menus = tree();
        let idx = KeyIndex::build(&menus);
        let b = idx.get("b").unwrap();
        assert_eq!(b.parent.as_ref().unwrap().key, "a");
        assert!(idx.get("a").unwrap().parent.is_none());
        // The subtree is reached through the source tree.
        assert_eq!(b.location(), [0, 0]);
        assert_eq!(b.locate(&menus).unwrap().children.len(), 1);
    }

    #[test]
    fn locate_rejects_other_trees() {
        let idx = KeyIndex::build(&tree());
        let c = idx.get("c").unwrap();
        assert_eq!(c.locate(&tree()).map(|n| n.key.as_str()), Some("c"));
        let other = vec![MenuNode::top("z", "Z").with_path("/z")];
        assert!(c.locate(&other).is_none());
        assert!(idx.get("z").unwrap().locate(&other).is_none());
    }

    #[test]
    fn ancestors_walk_outward() {
        let idx = KeyIndex::build(&tree());
        let keys: Vec<_> = idx.ancestors("c").map(IndexEntry::key).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(idx.ancestors("a").count(), 0);
        assert_eq!(idx.ancestors("missing").count(), 0);
        assert_eq!(idx.parent_of("c").map(IndexEntry::key), Some("b"));
    }
}

// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry types shared by the key and path indexes, and the parent-walk trait.

use signpost_menu::{MenuNode, MenuRecord};

use crate::pattern::PathPattern;

/// One node of the tree as seen by an index.
///
/// Entries hold the node's own fields only. Its subtree stays in the tree the
/// index was built from and is reached through [`locate`](Self::locate).
#[derive(Clone, Debug, PartialEq)]
pub struct IndexEntry {
    /// The node's own fields.
    pub node: MenuRecord,
    /// The parent's own fields, or `None` for roots.
    pub parent: Option<MenuRecord>,
    location: Vec<usize>,
}

impl IndexEntry {
    pub(crate) fn new(node: &MenuNode, parent: Option<&MenuNode>, location: &[usize]) -> Self {
        Self {
            node: node.to_record(),
            parent: parent.map(MenuNode::to_record),
            location: location.to_vec(),
        }
    }

    /// Shorthand for `self.node.key`.
    pub fn key(&self) -> &str {
        &self.node.key
    }

    /// Child positions leading from the root list to this node.
    pub fn location(&self) -> &[usize] {
        &self.location
    }

    /// This node, with its subtree, inside `menus`.
    ///
    /// `menus` must be the tree the index was built from; a different tree
    /// yields `None` unless the same key sits at the same location.
    pub fn locate<'a>(&self, menus: &'a [MenuNode]) -> Option<&'a MenuNode> {
        let (&first, rest) = self.location.split_first()?;
        let mut node = menus.get(first)?;
        for &i in rest {
            node = node.children.get(i)?;
        }
        (node.key == self.node.key).then_some(node)
    }
}

/// A path index entry: the node plus its compiled route and alias patterns.
#[derive(Clone, Debug)]
pub struct PathEntry {
    /// Node and parent record.
    pub entry: IndexEntry,
    /// Compiled `path`.
    pub matcher: PathPattern,
    /// Compiled `alias` patterns, in declaration order.
    pub alias_matchers: Vec<PathPattern>,
}

impl PathEntry {
    /// The registered `path`.
    pub fn path(&self) -> &str {
        self.matcher.source()
    }

    /// The node's own fields.
    pub fn node(&self) -> &MenuRecord {
        &self.entry.node
    }

    /// Whether `path` is verbatim one of the node's aliases.
    pub fn has_alias(&self, path: &str) -> bool {
        self.entry.node.alias.iter().any(|a| a == path)
    }

    /// Whether any alias pattern matches `path`.
    pub fn alias_matches(&self, path: &str) -> bool {
        self.alias_matchers.iter().any(|m| m.is_match(path))
    }
}

/// Look up index entries by key and walk their ancestry.
///
/// Ancestry is reconstructed from each entry's parent record, so entries never
/// hold references into one another.
pub trait ParentLookup {
    /// The entry for `key`.
    fn entry(&self, key: &str) -> Option<&IndexEntry>;

    /// The parent entry of `key`.
    fn parent_of(&self, key: &str) -> Option<&IndexEntry> {
        let parent = self.entry(key)?.parent.as_ref()?;
        self.entry(&parent.key)
    }

    /// Ancestors of `key` from the parent outward. Does not include `key` itself.
    fn ancestors<'a>(&'a self, key: &str) -> Ancestors<'a, Self> {
        Ancestors {
            lookup: self,
            next: self.parent_of(key),
        }
    }
}

/// Iterator returned by [`ParentLookup::ancestors`].
#[derive(Debug)]
pub struct Ancestors<'a, L: ?Sized> {
    lookup: &'a L,
    next: Option<&'a IndexEntry>,
}

impl<'a, L: ParentLookup + ?Sized> Iterator for Ancestors<'a, L> {
    type Item = &'a IndexEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.next.take()?;
        self.next = self.lookup.parent_of(cur.key());
        Some(cur)
    }
}

// Depth-first, parents before children. `f` also receives the node's location.
pub(crate) fn walk<'a, E>(
    menus: &'a [MenuNode],
    f: &mut impl FnMut(&'a MenuNode, Option<&'a MenuNode>, &[usize]) -> Result<(), E>,
) -> Result<(), E> {
    walk_at(menus, None, &mut Vec::new(), f)
}

fn walk_at<'a, E>(
    menus: &'a [MenuNode],
    parent: Option<&'a MenuNode>,
    at: &mut Vec<usize>,
    f: &mut impl FnMut(&'a MenuNode, Option<&'a MenuNode>, &[usize]) -> Result<(), E>,
) -> Result<(), E> {
    for (i, menu) in menus.iter().enumerate() {
        at.push(i);
        f(menu, parent, at.as_slice())?;
        walk_at(&menu.children, Some(menu), at, f)?;
        at.pop();
    }
    Ok(())
}

// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigator: owns the menu tree, its indexes, and the navigation state.
//!
//! ## Usage
//!
//! - Construct with [`Navigator::new`] and load a tree with [`Navigator::set_menus`].
//! - Forward every router navigation to [`Navigator::set_path`]. Use
//!   [`Navigator::set_path_deferred`] for a menu click that should highlight
//!   before the router reports the navigation.
//! - Read the getters ([`Navigator::sider_menus`], [`Navigator::menu_breadcrumbs`], ...)
//!   to render.
//!
//! The navigator is the only writer of its [`NavigationState`]; every getter
//! borrows it immutably.

use signpost_index::{KeyIndex, PathIndex};
use signpost_menu::{MenuNode, Position, displayed, normalize};

use crate::breadcrumb::create_breadcrumb_list;
use crate::error::NavError;
use crate::options::NavigatorOptions;
use crate::params;
use crate::resolver::{get_matched_path, open_keys_of, top_key_of};
use crate::state::NavigationState;
use crate::tabs;
use crate::types::{BreadcrumbItem, MultiTab, PreviousRoute, ResolvedPath};

/// Menu navigation controller.
///
/// See the [module docs](self) for the call sequence.
#[derive(Clone, Debug, Default)]
pub struct Navigator {
    options: NavigatorOptions,
    menus: Vec<MenuNode>,
    keys: KeyIndex,
    paths: PathIndex,
    cached_path: Option<String>,
    current_match_path: String,
    state: NavigationState,
}

impl Navigator {
    /// Create a navigator with no menus.
    pub fn new(options: NavigatorOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Create a navigator and load `menus`.
    pub fn with_menus(menus: Vec<MenuNode>, options: NavigatorOptions) -> Result<Self, NavError> {
        let mut nav = Self::new(options);
        nav.set_menus(menus)?;
        Ok(nav)
    }

    /// The options this navigator was created with.
    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    /// Replace the menu tree.
    ///
    /// Normalizes `menus` and rebuilds both indexes. On error the previous tree
    /// stays in effect. When a path was set before, it is resolved again against
    /// the new tree without touching the tabs; if it still matches the same
    /// registered path, only the top and side keys are refreshed.
    pub fn set_menus(&mut self, menus: Vec<MenuNode>) -> Result<(), NavError> {
        let menus = normalize(menus)?;
        let paths = PathIndex::build(&menus, self.options.index_options())?;
        let keys = KeyIndex::build(&menus);
        tracing::debug!(keys = keys.len(), paths = paths.len(), "menus loaded");
        self.menus = menus;
        self.keys = keys;
        self.paths = paths;
        if let Some(path) = self.cached_path.clone() {
            self.match_path(&path);
        }
        Ok(())
    }

    /// Record a completed navigation to `path`.
    pub fn set_path(&mut self, path: &str) {
        self.cached_path = Some(path.to_string());
        if self.options.track_tabs {
            self.set_multi_tab_routes(path, self.options.tab_closable);
        }
        self.match_path(path);
    }

    fn match_path(&mut self, path: &str) {
        let matched = get_matched_path(&self.paths, path);
        if matched == self.current_match_path {
            // Same page after a tree change: the header may have moved. An armed
            // selection is settled by the page we actually landed on.
            let key = self.paths.get(&matched).map(|e| e.entry.key().to_string());
            let top = key.as_deref().and_then(|k| top_key_of(&self.keys, k));
            self.state.set_top_key(top);
            self.state.commit(key);
            return;
        }
        tracing::debug!(path, matched = %matched, "match changed");
        self.current_match_path = matched;
        self.apply_match();
    }

    /// Highlight the menu owning `path` before the navigation completes.
    ///
    /// Sets the top key and arms the side selection. Breadcrumb and open keys
    /// are left alone until [`set_path`](Self::set_path) commits.
    pub fn set_path_deferred(&mut self, path: &str) {
        let matched = get_matched_path(&self.paths, path);
        let key = self.paths.get(&matched).map(|e| e.entry.key().to_string());
        let top = key.as_deref().and_then(|k| top_key_of(&self.keys, k));
        self.state.set_top_key(top);
        self.state.arm(key);
    }

    /// Drop a selection armed by [`set_path_deferred`](Self::set_path_deferred).
    pub fn cancel_pending(&mut self) {
        self.state.cancel_pending();
    }

    fn apply_match(&mut self) {
        let matched = self.current_match_path.as_str();
        let breadcrumb = create_breadcrumb_list(matched, &self.paths, Vec::new());
        let key = self.paths.get(matched).map(|e| e.entry.key().to_string());
        let (top, open) = match key.as_deref() {
            Some(k) => (top_key_of(&self.keys, k), open_keys_of(&self.keys, k)),
            None => (None, Vec::new()),
        };
        self.state.set_breadcrumb(breadcrumb);
        self.state.set_top_key(top);
        self.state.set_open_keys(open);
        self.state.commit(key);
    }

    /// Fill the parameters of `path_define` from a previous route.
    ///
    /// Without `previous`, the current path and the template it matched are used.
    #[doc(alias = "reslovePath")]
    pub fn resolve_path(&self, path_define: &str, previous: Option<PreviousRoute<'_>>) -> ResolvedPath {
        let current = self.cached_path.as_deref().map(|path| PreviousRoute {
            path,
            define: &self.current_match_path,
        });
        params::resolve_path(&self.paths, path_define, previous.or(current))
    }

    /// Open or update the tab for `full_path` and make it active.
    pub fn set_multi_tab_routes(&mut self, full_path: &str, closable: bool) {
        tabs::set_multi_tab_routes(self.state.multi_tab_mut(), &self.paths, full_path, closable);
    }

    /// Close the tab showing `full_path`. Returns `false` if it is not open or not closable.
    pub fn close_multi_tab(&mut self, full_path: &str) -> bool {
        self.state.multi_tab_mut().close(full_path)
    }

    /// The normalized tree.
    pub fn menus(&self) -> &[MenuNode] {
        &self.menus
    }

    /// Key index of the current tree.
    pub fn key_index(&self) -> &KeyIndex {
        &self.keys
    }

    /// Path index of the current tree.
    pub fn path_index(&self) -> &PathIndex {
        &self.paths
    }

    /// Navigation state.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// The last path passed to [`set_path`](Self::set_path).
    pub fn cached_path(&self) -> Option<&str> {
        self.cached_path.as_deref()
    }

    /// The registered path the current path matched, or `""`.
    pub fn current_match_path(&self) -> &str {
        &self.current_match_path
    }

    /// Header entries: displayed `top` roots.
    pub fn top_menus(&self) -> Vec<MenuNode> {
        displayed(&self.menus)
            .into_iter()
            .filter(|m| m.position == Position::Top)
            .collect()
    }

    /// The side menu to render.
    ///
    /// While a `sub` entry is selected this is its sibling group, flattened.
    /// Otherwise it is the `side` children of the current header entry, or the
    /// whole root list when there is no header context.
    pub fn sider_menus(&self) -> Vec<MenuNode> {
        if let Some(group) = self.sub_sibling_group() {
            return group;
        }
        match self.curr_top_menu_key().and_then(|k| self.keys.get(k)) {
            Some(top) if top.node.position == Position::Top => {
                let children = top.locate(&self.menus).map_or(&[][..], |n| n.children.as_slice());
                displayed(children)
                    .into_iter()
                    .filter(|m| m.position == Position::Side)
                    .collect()
            }
            _ => displayed(&self.menus),
        }
    }

    fn sub_sibling_group(&self) -> Option<Vec<MenuNode>> {
        let selected = self.keys.get(self.curr_sider_menu_key()?)?;
        if selected.node.position != Position::Sub {
            return None;
        }
        let parent = self
            .keys
            .get(&selected.parent.as_ref()?.key)?
            .locate(&self.menus)?;
        Some(
            displayed(&parent.children)
                .iter()
                .map(MenuNode::without_children)
                .collect(),
        )
    }

    /// Key of the highlighted header entry.
    pub fn curr_top_menu_key(&self) -> Option<&str> {
        self.state.current_top_key()
    }

    /// Key of the highlighted side entry; a pending selection takes precedence.
    pub fn curr_sider_menu_key(&self) -> Option<&str> {
        self.state.selected_side_key()
    }

    /// Expanded side-menu keys, outermost first.
    pub fn sider_menu_open_keys(&self) -> &[String] {
        self.state.open_keys()
    }

    /// Where "back" leads while a `sub` entry is selected: the parent's redirect or path.
    pub fn go_back_path(&self) -> Option<&str> {
        let selected = self.keys.get(self.curr_sider_menu_key()?)?;
        if selected.node.position != Position::Sub {
            return None;
        }
        selected.parent.as_ref()?.href()
    }

    /// Breadcrumb trail, root to leaf.
    pub fn menu_breadcrumbs(&self) -> &[BreadcrumbItem] {
        self.state.breadcrumb()
    }

    /// Open tabs.
    pub fn multi_tab_routes(&self) -> &MultiTab {
        self.state.multi_tab()
    }
}

impl TryFrom<Vec<MenuNode>> for Navigator {
    type Error = NavError;

    fn try_from(menus: Vec<MenuNode>) -> Result<Self, Self::Error> {
        Self::with_menus(menus, NavigatorOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signpost_menu::Title;

    fn admin() -> Vec<MenuNode> {
        vec![
            MenuNode::top("content", "Content").with_path("/content").with_children([
                MenuNode::side("posts", "Posts")
                    .with_path("/content/posts")
                    .with_children([
                        MenuNode::sub("post-edit", "Edit post").with_path("/content/posts/:id/edit"),
                        MenuNode::sub("post-stats", "Stats").with_path("/content/posts/:id/stats"),
                    ]),
                MenuNode::side("media", "Media").with_children([
                    MenuNode::side("images", "Images").with_path("/content/media/images"),
                    MenuNode::side("files", "Files")
                        .with_path("/content/media/files")
                        .hidden(),
                ]),
            ]),
            MenuNode::top("system", "System").with_path("/system").with_children([
                MenuNode::side("users", "Users")
                    .with_path("/system/users")
                    .with_child(MenuNode::sub("user", "User").with_path("/system/users/:id")),
                MenuNode::side("roles", "Roles").with_path("/system/roles"),
            ]),
        ]
    }

    fn nav() -> Navigator {
        Navigator::try_from(admin()).unwrap()
    }

    fn keys(menus: &[MenuNode]) -> Vec<&str> {
        menus.iter().map(|m| m.key.as_str()).collect()
    }

    fn crumbs(nav: &Navigator) -> Vec<(&str, &str)> {
        nav.menu_breadcrumbs()
            .iter()
            .map(|b| (b.key.as_str(), b.path.as_str()))
            .collect()
    }

    #[test]
    fn headers_redirect_to_first_page() {
        let nav = nav();
        let tops = nav.top_menus();
        assert_eq!(keys(&tops), vec!["content", "system"]);
        assert_eq!(tops[0].href(), Some("/content/posts"));
        assert_eq!(tops[1].href(), Some("/system/users"));
    }

    #[test]
    fn sub_page_selects_sibling_group() {
        let mut nav = nav();
        nav.set_path("/content/posts/12/edit");

        assert_eq!(nav.current_match_path(), "/content/posts/:id/edit");
        assert_eq!(nav.curr_top_menu_key(), Some("content"));
        assert_eq!(nav.curr_sider_menu_key(), Some("post-edit"));
        assert_eq!(nav.sider_menu_open_keys(), ["posts".to_string()]);
        assert_eq!(
            crumbs(&nav),
            vec![
                ("content", "/content/posts"),
                ("posts", "/content/posts"),
                ("post-edit", "")
            ]
        );

        let side = nav.sider_menus();
        assert_eq!(keys(&side), vec!["post-edit", "post-stats"]);
        assert_eq!(nav.go_back_path(), Some("/content/posts"));
    }

    #[test]
    fn side_page_shows_header_children() {
        let mut nav = nav();
        nav.set_path("/content/media/images");

        assert_eq!(nav.curr_top_menu_key(), Some("content"));
        assert_eq!(nav.sider_menu_open_keys(), ["media".to_string()]);
        assert_eq!(nav.go_back_path(), None);

        let side = nav.sider_menus();
        assert_eq!(keys(&side), vec!["posts", "media"]);
        // Hidden entries are pruned from the rendered list.
        assert_eq!(keys(&side[1].children), vec!["images"]);
    }

    #[test]
    fn no_header_context_shows_roots() {
        let nav = nav();
        assert_eq!(keys(&nav.sider_menus()), vec!["content", "system"]);
    }

    #[test]
    fn carries_params_from_current_page() {
        let mut nav = nav();
        nav.set_path("/content/posts/12/edit?from=list");
        let out = nav.resolve_path("/content/posts/:id/stats", None);
        assert_eq!(out.path, "/content/posts/12/stats");
        assert!(out.resolved);

        let out = nav.resolve_path("/system/roles", None);
        assert_eq!(out, ResolvedPath { path: "/system/roles".into(), resolved: false });

        let explicit = PreviousRoute { path: "/system/users/5", define: "/system/users/:id" };
        let out = nav.resolve_path("/content/posts/:id/edit", Some(explicit));
        assert_eq!(out.path, "/content/posts/5/edit");
    }

    #[test]
    fn unregistered_child_page_matches_enclosing_entry() {
        let mut nav = Navigator::try_from(vec![
            MenuNode::side("unregistered", "Unregistered").with_path("/unregistered"),
        ])
        .unwrap();
        nav.set_path("/unregistered/child/path");
        assert_eq!(nav.current_match_path(), "/unregistered");
        assert_eq!(nav.curr_sider_menu_key(), Some("unregistered"));
        assert_eq!(crumbs(&nav), vec![("unregistered", "")]);
    }

    #[test]
    fn reload_with_same_match_only_refreshes_top_key() {
        let mut nav = nav();
        nav.set_path("/system/users/5");
        assert_eq!(nav.curr_top_menu_key(), Some("system"));
        let before = nav.menu_breadcrumbs().to_vec();

        let moved = vec![
            MenuNode::top("admin", "Admin").with_children([
                MenuNode::side("users", "Users")
                    .with_path("/system/users")
                    .with_child(MenuNode::sub("user", "Member").with_path("/system/users/:id")),
            ]),
        ];
        nav.set_menus(moved).unwrap();

        assert_eq!(nav.current_match_path(), "/system/users/:id");
        assert_eq!(nav.curr_top_menu_key(), Some("admin"));
        assert_eq!(nav.menu_breadcrumbs(), before.as_slice());
        assert_eq!(nav.menu_breadcrumbs()[2].label, Title::from("User"));
    }

    #[test]
    fn deferred_selection_commits_on_navigation() {
        let mut nav = nav();
        nav.set_path("/content/media/images");

        nav.set_path_deferred("/system/roles");
        assert_eq!(nav.curr_top_menu_key(), Some("system"));
        assert_eq!(nav.curr_sider_menu_key(), Some("roles"));
        assert_eq!(nav.state().current_side_key(), Some("images"));
        assert_eq!(nav.sider_menu_open_keys(), ["media".to_string()]);
        assert_eq!(crumbs(&nav).last(), Some(&("images", "")));

        nav.set_path("/system/roles");
        assert_eq!(nav.state().pending_side_key(), None);
        assert_eq!(nav.curr_sider_menu_key(), Some("roles"));
        assert!(nav.sider_menu_open_keys().is_empty());
        assert_eq!(crumbs(&nav), vec![("system", "/system/users"), ("roles", "")]);
    }

    #[test]
    fn navigation_back_to_same_page_settles_armed_selection() {
        let mut nav = nav();
        nav.set_path("/content/media/images");
        let before = nav.menu_breadcrumbs().to_vec();

        nav.set_path_deferred("/system/roles");
        assert_eq!(nav.curr_sider_menu_key(), Some("roles"));

        nav.set_path("/content/media/images");
        assert_eq!(nav.state().pending_side_key(), None);
        assert_eq!(nav.curr_sider_menu_key(), Some("images"));
        assert_eq!(nav.curr_top_menu_key(), Some("content"));
        assert_eq!(nav.sider_menu_open_keys(), ["media".to_string()]);
        assert_eq!(nav.menu_breadcrumbs(), before.as_slice());
        assert_eq!(keys(&nav.sider_menus()), vec!["posts", "media"]);
    }

    #[test]
    fn canceled_selection_restores_committed_key() {
        let mut nav = nav();
        nav.set_path("/content/media/images");
        nav.set_path_deferred("/system/roles");
        nav.cancel_pending();
        assert_eq!(nav.curr_sider_menu_key(), Some("images"));
    }

    #[test]
    fn unmatched_path_clears_selection() {
        let mut nav = nav();
        nav.set_path("/system/roles");
        nav.set_path("/nowhere");
        assert_eq!(nav.current_match_path(), "");
        assert_eq!(nav.curr_top_menu_key(), None);
        assert_eq!(nav.curr_sider_menu_key(), None);
        assert!(nav.menu_breadcrumbs().is_empty());
        assert_eq!(nav.cached_path(), Some("/nowhere"));
    }

    #[test]
    fn every_registered_path_matches_itself() {
        let mut nav = nav();
        let paths: Vec<String> = nav.path_index().iter().map(|e| e.path().to_string()).collect();
        for path in paths {
            nav.set_path(&path);
            assert_eq!(nav.current_match_path(), path);
            let last = nav.menu_breadcrumbs().last().unwrap();
            assert!(last.path.is_empty());
        }
    }

    #[test]
    fn invalid_tree_keeps_previous_one() {
        let mut nav = nav();
        let err = nav
            .set_menus(vec![MenuNode::side("a", "A").with_children([
                MenuNode::side("b", "B"),
                MenuNode::top("c", "C"),
            ])])
            .unwrap_err();
        assert!(matches!(err, NavError::Config(_)));
        assert_eq!(keys(nav.menus()), vec!["content", "system"]);

        let strict = NavigatorOptions {
            strict_params: true,
            ..NavigatorOptions::default()
        };
        let err = Navigator::with_menus(
            vec![MenuNode::side("d", "D").with_path("/:id/:id")],
            strict,
        )
        .unwrap_err();
        assert!(matches!(err, NavError::Index(_)));
    }

    #[test]
    fn tracked_navigation_opens_tabs() {
        let opts = NavigatorOptions {
            track_tabs: true,
            ..NavigatorOptions::default()
        };
        let mut nav = Navigator::with_menus(admin(), opts).unwrap();
        nav.set_path("/system/users/1");
        nav.set_path("/system/users/2");
        nav.set_path("/system/roles");

        let tabs = nav.multi_tab_routes();
        assert_eq!(tabs.items.len(), 2);
        assert_eq!(tabs.items[0].full_path, "/system/users/2");
        assert_eq!(tabs.current.as_deref(), Some("/system/roles"));

        assert!(nav.close_multi_tab("/system/roles"));
        assert_eq!(nav.multi_tab_routes().current.as_deref(), Some("/system/users/2"));
    }

    #[test]
    fn reloading_menus_keeps_active_tab() {
        let opts = NavigatorOptions {
            track_tabs: true,
            ..NavigatorOptions::default()
        };
        let mut nav = Navigator::with_menus(admin(), opts).unwrap();
        nav.set_path("/system/users/1");
        nav.set_path("/system/roles");
        nav.set_multi_tab_routes("/system/users/1", true);
        assert_eq!(nav.multi_tab_routes().current.as_deref(), Some("/system/users/1"));

        nav.set_menus(admin()).unwrap();
        let tabs = nav.multi_tab_routes();
        assert_eq!(tabs.items.len(), 2);
        assert_eq!(tabs.current.as_deref(), Some("/system/users/1"));
        assert_eq!(nav.current_match_path(), "/system/roles");
    }

    #[test]
    fn manual_tabs_without_tracking() {
        let mut nav = nav();
        nav.set_path("/system/roles");
        assert!(nav.multi_tab_routes().items.is_empty());
        nav.set_multi_tab_routes("/system/roles", false);
        assert!(!nav.close_multi_tab("/system/roles"));
        assert_eq!(nav.multi_tab_routes().items[0].title, Title::from("Roles"));
    }
}

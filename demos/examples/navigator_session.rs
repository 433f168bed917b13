// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigator session.
//!
//! Replays a short browsing session against the admin menu and prints what a
//! layout would render after each step: header and side selection, open keys,
//! breadcrumb, and tabs.
//!
//! Run:
//! - `cargo run -p signpost_demos --example navigator_session`
//! - `RUST_LOG=signpost_nav=debug cargo run -p signpost_demos --example navigator_session`

use signpost_menu::{Untranslated, config};
use signpost_nav::{Navigator, NavigatorOptions};
use tracing_subscriber::EnvFilter;

const MENUS: &str = include_str!("../data/admin_menus.json");

fn show(step: &str, nav: &Navigator) {
    println!("== {step}");
    println!("   cached path : {:?}", nav.cached_path());
    println!("   matched     : {:?}", nav.current_match_path());
    println!("   top key     : {:?}", nav.curr_top_menu_key());
    println!("   side key    : {:?}", nav.curr_sider_menu_key());
    println!("   open keys   : {:?}", nav.sider_menu_open_keys());
    let side: Vec<_> = nav.sider_menus().into_iter().map(|m| m.key).collect();
    println!("   side menu   : {side:?}");
    if let Some(back) = nav.go_back_path() {
        println!("   back to     : {back}");
    }
    let crumbs: Vec<_> = nav
        .menu_breadcrumbs()
        .iter()
        .map(|b| format!("{}[{}]", b.label.resolve(&Untranslated), b.path))
        .collect();
    println!("   breadcrumb  : {}", crumbs.join(" / "));
    let tabs = nav.multi_tab_routes();
    let titles: Vec<_> = tabs
        .items
        .iter()
        .map(|t| {
            let marker = if tabs.current.as_deref() == Some(t.full_path.as_str()) { "*" } else { "" };
            format!("{marker}{}", t.full_path)
        })
        .collect();
    println!("   tabs        : {titles:?}");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let options: NavigatorOptions = serde_json::from_str(r#"{ "track_tabs": true }"#)?;
    let mut nav = Navigator::with_menus(config::from_json_str(MENUS)?, options)?;

    nav.set_path("/content/posts?page=2");
    show("open the post list", &nav);

    nav.set_path("/content/posts/12/edit");
    show("edit post 12", &nav);

    let revisions = nav.resolve_path("/content/posts/:id(\\d+)/revisions", None);
    println!("   revisions link resolves to {} (resolved: {})", revisions.path, revisions.resolved);

    nav.set_path_deferred("/settings/general");
    show("click Settings > General (router still busy)", &nav);

    nav.set_path("/settings/general");
    show("router finished", &nav);

    nav.set_path("/content/posts/31/edit");
    show("edit another post: same tab", &nav);

    nav.close_multi_tab("/content/posts/31/edit");
    show("close the edit tab", &nav);

    // Reload the tree with the same routes; the current page keeps its breadcrumb.
    nav.set_menus(config::from_json_str(MENUS)?)?;
    show("menus reloaded", &nav);
    Ok(())
}

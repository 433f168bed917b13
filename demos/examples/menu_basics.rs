// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu basics.
//!
//! Loads a menu tree from JSON, normalizes it, and prints the resulting action
//! tree next to the path index built from it.
//!
//! Run:
//! - `cargo run -p signpost_demos --example menu_basics`
//! - `RUST_LOG=trace cargo run -p signpost_demos --example menu_basics` to see redirect collapsing

use signpost_index::{IndexOptions, PathIndex};
use signpost_menu::{MenuNode, Translate, config, normalize};
use tracing_subscriber::EnvFilter;

const MENUS: &str = include_str!("../data/admin_menus.json");

struct English;

impl Translate for English {
    fn translate(&self, key: &str) -> String {
        match key {
            "menu.dashboard" => "Dashboard",
            "menu.content" => "Content",
            "menu.posts" => "Posts",
            "menu.taxonomy" => "Taxonomy",
            "menu.settings" => "Settings",
            other => other,
        }
        .to_string()
    }
}

fn print_tree(menus: &[MenuNode], depth: usize) {
    for m in menus {
        let route = match (&m.path, &m.redirect) {
            (Some(p), _) => format!("path {p}"),
            (None, Some(r)) => format!("-> {r}"),
            (None, None) => String::from("(no route)"),
        };
        let hidden = if m.is_displayed() { "" } else { " [hidden]" };
        println!(
            "{:indent$}{} <{}> {}{}",
            "",
            m.title.resolve(&English),
            m.position,
            route,
            hidden,
            indent = depth * 2
        );
        print_tree(&m.children, depth + 1);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let raw = config::from_json_str(MENUS)?;
    let menus = normalize(raw)?;
    println!("Action tree:");
    print_tree(&menus, 1);

    let index = PathIndex::build(&menus, IndexOptions { strict_params: true })?;
    println!("\nPath index ({} entries):", index.len());
    for entry in index.iter() {
        let params: Vec<_> = entry.matcher.named_params().collect();
        println!(
            "  {:<40} key={:<16} params={:?} aliases={}",
            entry.path(),
            entry.entry.key(),
            params,
            entry.alias_matchers.len()
        );
    }

    for probe in ["/content/posts/12/edit", "/tags/rust", "/content/posts?page=3", "/settings/general/smtp"] {
        match index.resolve(probe) {
            Some((entry, kind)) => println!("{probe:<28} => {} ({kind:?})", entry.path()),
            None => println!("{probe:<28} => no match"),
        }
    }
    Ok(())
}

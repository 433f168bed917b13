// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use signpost_index::{IndexOptions, KeyIndex, PathIndex};
use signpost_menu::{MenuNode, normalize};
use signpost_nav::breadcrumb::create_breadcrumb_list;
use signpost_nav::params::resolve_path;
use signpost_nav::resolver::get_matched_path;
use signpost_nav::{Navigator, NavigatorOptions, PreviousRoute};

// `tops` headers, each with `sides` side entries holding a list page, a detail
// route with a parameter, and an edit route below it.
fn gen_admin_tree(tops: usize, sides: usize) -> Vec<MenuNode> {
    (0..tops)
        .map(|t| {
            let children: Vec<_> = (0..sides)
                .map(|s| {
                    let base = format!("/t{t}/s{s}");
                    MenuNode::side(format!("t{t}s{s}"), format!("Side {s}"))
                        .with_path(base.clone())
                        .with_children([
                            MenuNode::sub(format!("t{t}s{s}d"), "Detail")
                                .with_path(format!("{base}/:id(\\d+)"))
                                .with_alias(format!("/a{t}/{s}/:id")),
                            MenuNode::sub(format!("t{t}s{s}e"), "Edit")
                                .with_path(format!("{base}/:id(\\d+)/edit")),
                        ])
                })
                .collect();
            MenuNode::top(format!("t{t}"), format!("Top {t}"))
                .with_path(format!("/t{t}"))
                .with_children(children)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &(tops, sides) in &[(4usize, 8usize), (8, 32), (16, 64)] {
        let raw = gen_admin_tree(tops, sides);
        let nodes = tops * (1 + sides * 3);
        group.throughput(Throughput::Elements(nodes as u64));
        group.bench_function(format!("normalize_{tops}x{sides}"), |b| {
            b.iter_batched(
                || raw.clone(),
                |menus| black_box(normalize(menus)),
                BatchSize::SmallInput,
            );
        });
        let menus = normalize(raw.clone()).unwrap();
        group.bench_function(format!("key_index_{tops}x{sides}"), |b| {
            b.iter(|| black_box(KeyIndex::build(&menus)));
        });
        group.bench_function(format!("path_index_{tops}x{sides}"), |b| {
            b.iter(|| black_box(PathIndex::build(&menus, IndexOptions::default())));
        });
    }
    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("match");
    let menus = normalize(gen_admin_tree(8, 32)).unwrap();
    let index = PathIndex::build(&menus, IndexOptions::default()).unwrap();

    let cases = [
        ("exact", "/t3/s17"),
        ("exact_query", "/t3/s17?page=2"),
        ("pattern_first", "/t0/s0/42"),
        ("pattern_last", "/t7/s31/42/edit"),
        ("alias_pattern", "/a7/31/9"),
        ("prefix", "/t5/s20/export/csv"),
        ("miss", "/nowhere/at/all"),
    ];
    for (name, path) in cases {
        group.bench_function(name, |b| {
            b.iter(|| black_box(get_matched_path(&index, black_box(path))));
        });
    }
    group.finish();
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");
    let menus = normalize(gen_admin_tree(8, 32)).unwrap();
    let index = PathIndex::build(&menus, IndexOptions::default()).unwrap();

    group.bench_function("breadcrumb", |b| {
        b.iter(|| black_box(create_breadcrumb_list("/t7/s31/:id(\\d+)/edit", &index, Vec::new())));
    });
    group.bench_function("resolve_path", |b| {
        let previous = PreviousRoute {
            path: "/t7/s31/42?tab=a",
            define: "/t7/s31/:id(\\d+)",
        };
        b.iter(|| black_box(resolve_path(&index, "/t7/s31/:id(\\d+)/edit", Some(previous))));
    });

    let mut nav = Navigator::with_menus(menus, NavigatorOptions::default()).unwrap();
    let paths = ["/t0/s0/1", "/t7/s31/2/edit", "/t3/s3", "/t5/s20/export"];
    group.throughput(Throughput::Elements(paths.len() as u64));
    group.bench_function("navigator_set_path", |b| {
        b.iter(|| {
            for p in paths {
                nav.set_path(p);
            }
            black_box(nav.curr_sider_menu_key().map(str::len));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_match, bench_derive);
criterion_main!(benches);

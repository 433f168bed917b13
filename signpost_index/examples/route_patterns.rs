// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Route patterns: match concrete paths and compile templates back.
//!
//! Run:
//! - `cargo run -p signpost_index --example route_patterns`

use signpost_index::{Params, PathPattern, PatternError};

fn main() -> Result<(), PatternError> {
    let templates = [
        "/user/:id",
        "/order/:id(\\d+)/:tab?",
        "/files/:path+",
        "/export.:format?",
        "/static/*",
    ];
    let probes = [
        "/user/ann",
        "/order/12",
        "/order/12/lines/",
        "/order/x",
        "/files/docs/2025/report%20final.pdf",
        "/export.csv",
        "/static/css/app.css",
    ];

    for template in templates {
        let pattern = PathPattern::parse(template)?;
        let names: Vec<_> = pattern.params().map(|p| p.name.as_str()).collect();
        println!("{template}  params={names:?}");
        for probe in probes {
            if let Some(params) = pattern.captures(probe) {
                println!("  {probe:<40} {params:?}");
            }
        }
    }

    let edit = PathPattern::parse("/order/:id(\\d+)/edit")?;
    let mut params = Params::new();
    params.insert("id".into(), "42".into());
    println!("compile {} with id=42 -> {}", edit.source(), edit.compile(&params)?);

    params.insert("id".into(), "forty-two".into());
    match edit.compile(&params) {
        Ok(path) => println!("unexpected: {path}"),
        Err(err) => println!("compile with id=forty-two -> error: {err}"),
    }
    Ok(())
}

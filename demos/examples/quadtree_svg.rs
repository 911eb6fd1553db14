// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree partition as SVG.
//!
//! Scatters random points over a 1024×768 canvas, adds a few "clicked" points,
//! and writes every leaf rectangle and point as an SVG document on stdout.
//! Logs go to stderr; set `RUST_LOG=understory_quadtree=trace` to watch subdivisions.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_svg > quadtree.svg`

use std::error::Error;
use std::fmt::Write as _;

use kurbo::{Point, Rect};
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Quadtree, QuadtreeConfig, Region};

const WIDTH: f64 = 1024.0;
const HEIGHT: f64 = 768.0;
const NUM_POINTS: usize = 100;
const RECT_COLOR: &str = "#0000ff";
const POINT_COLOR: &str = "#00ff00";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let root = Region::try_from(Rect::new(0.0, 0.0, WIDTH, HEIGHT))?;
    let mut tree = Quadtree::new(root, QuadtreeConfig::default())?;

    let mut rng = rand::rng();
    for _ in 0..NUM_POINTS {
        let p = Point::new(
            rng.random_range(0.0..WIDTH - 1.0),
            rng.random_range(0.0..HEIGHT - 1.0),
        );
        tree.insert(p.into());
    }

    // Pointer positions, the last two on the canvas' exclusive edges.
    for click in [
        Point::new(12.0, 12.0),
        Point::new(13.0, 12.0),
        Point::new(WIDTH, 10.0),
        Point::new(10.0, HEIGHT),
    ] {
        let accepted = tree.insert(click.into());
        info!(x = click.x, y = click.y, accepted, "click");
    }

    info!(
        points = tree.len(),
        leaves = tree.leaf_count(),
        depth = tree.depth(),
        "built"
    );
    println!("{}", render_svg(&tree)?);
    Ok(())
}

fn render_svg(tree: &Quadtree<f64>) -> Result<String, std::fmt::Error> {
    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" style="background:black">"#
    )?;
    for leaf in tree.traverse() {
        let r = Rect::from(leaf.boundary);
        writeln!(
            svg,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="{RECT_COLOR}"/>"#,
            r.x0,
            r.y0,
            r.width(),
            r.height()
        )?;
        for p in leaf.points.iter().copied().map(Point::from) {
            writeln!(
                svg,
                r#"  <circle cx="{:.1}" cy="{:.1}" r="1" fill="{POINT_COLOR}"/>"#,
                p.x, p.y
            )?;
        }
    }
    svg.push_str("</svg>");
    Ok(svg)
}

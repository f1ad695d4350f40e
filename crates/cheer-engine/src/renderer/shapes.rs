//! Vector outlines for the five particle shapes.
//!
//! Every path is centered on the local origin and sized from the particle's
//! characteristic `size`. Coordinates are y-down, matching the canvas.

use std::f32::consts::PI;

use lyon::math::{point, Box2D};
use lyon::path::{Path, Winding};

use crate::effects::Shape;

/// Build the outline for `shape` at the given size.
pub fn shape_path(shape: Shape, size: f32) -> Path {
    match shape {
        Shape::Confetti => confetti(size),
        Shape::Circle => circle(size),
        Shape::Star => star(size),
        Shape::Gem => gem(size),
        Shape::Heart => heart(size),
    }
}

/// Flat rectangle, `size` wide and `size / 2` tall.
fn confetti(size: f32) -> Path {
    let half_w = size / 2.0;
    let half_h = size / 4.0;
    let mut builder = Path::builder();
    builder.add_rectangle(
        &Box2D::new(point(-half_w, -half_h), point(half_w, half_h)),
        Winding::Positive,
    );
    builder.build()
}

fn circle(size: f32) -> Path {
    let mut builder = Path::builder();
    builder.add_circle(point(0.0, 0.0), size / 2.0, Winding::Positive);
    builder.build()
}

/// Five-pointed star, outer radius `size / 2`, inner radius `size / 4`.
fn star(size: f32) -> Path {
    let outer = size / 2.0;
    let inner = size / 4.0;
    let mut builder = Path::builder();
    for i in 0..10 {
        let radius = if i % 2 == 0 { outer } else { inner };
        // First tip points straight up.
        let angle = i as f32 * PI / 5.0 - PI / 2.0;
        let p = point(angle.cos() * radius, angle.sin() * radius);
        if i == 0 {
            builder.begin(p);
        } else {
            builder.line_to(p);
        }
    }
    builder.close();
    builder.build()
}

/// Diamond with its four corners `size / 2` from the center.
fn gem(size: f32) -> Path {
    let r = size / 2.0;
    let mut builder = Path::builder();
    builder.begin(point(0.0, -r));
    builder.line_to(point(r, 0.0));
    builder.line_to(point(0.0, r));
    builder.line_to(point(-r, 0.0));
    builder.close();
    builder.build()
}

/// Two cubic lobes from the dip above center down to the tip below it.
fn heart(size: f32) -> Path {
    let s = size / 2.0;
    let mut builder = Path::builder();
    builder.begin(point(0.0, -0.3 * s));
    builder.cubic_bezier_to(point(-0.5 * s, -1.0 * s), point(-1.4 * s, -0.3 * s), point(0.0, s));
    builder.cubic_bezier_to(point(1.4 * s, -0.3 * s), point(0.5 * s, -1.0 * s), point(0.0, -0.3 * s));
    builder.close();
    builder.build()
}

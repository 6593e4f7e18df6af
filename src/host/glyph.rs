use kurbo::{BezPath, PathEl, Point};

use crate::{
    foundation::core::DVec3,
    foundation::error::{RigError, RigResult},
};

const FLATTEN_TOLERANCE: f64 = 1e-3;

/// Block outline of a supported glyph in glyph units: x right, y up,
/// baseline at y = 0, horizontally centered on x = 0.
pub(crate) fn glyph_outline(glyph: char) -> RigResult<BezPath> {
    match glyph {
        'T' => {
            let (half_bar, half_stem) = (0.31, 0.06);
            let (cap, bar_bottom) = (0.72, 0.61);
            let mut p = BezPath::new();
            p.move_to(Point::new(-half_stem, 0.0));
            p.line_to(Point::new(half_stem, 0.0));
            p.line_to(Point::new(half_stem, bar_bottom));
            p.line_to(Point::new(half_bar, bar_bottom));
            p.line_to(Point::new(half_bar, cap));
            p.line_to(Point::new(-half_bar, cap));
            p.line_to(Point::new(-half_bar, bar_bottom));
            p.line_to(Point::new(-half_stem, bar_bottom));
            p.close_path();
            Ok(p)
        }
        other => Err(RigError::validation(format!(
            "glyph '{other}' is not supported"
        ))),
    }
}

/// Flatten a single closed contour into a counter-clockwise ring.
pub(crate) fn flatten_ring(path: &BezPath) -> RigResult<Vec<Point>> {
    let mut ring: Vec<Point> = Vec::new();
    let mut contours = 0usize;
    kurbo::flatten(path.elements().iter().copied(), FLATTEN_TOLERANCE, |el| match el {
        PathEl::MoveTo(p) => {
            contours += 1;
            ring.push(p);
        }
        PathEl::LineTo(p) => ring.push(p),
        PathEl::ClosePath | PathEl::QuadTo(..) | PathEl::CurveTo(..) => {}
    });
    if contours != 1 {
        return Err(RigError::geometry(format!(
            "glyph outline must be a single contour, got {contours}"
        )));
    }
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    if ring.len() < 3 {
        return Err(RigError::geometry("glyph outline has fewer than 3 points"));
    }
    if signed_area(&ring) < 0.0 {
        ring.reverse();
    }
    Ok(ring)
}

fn signed_area(ring: &[Point]) -> f64 {
    let n = ring.len();
    (0..n)
        .map(|i| {
            let (a, b) = (ring[i], ring[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum::<f64>()
        * 0.5
}

/// Stand the ring upright in the XZ plane and solidify it along +Y.
///
/// Returns vertices (front ring, then back ring) and faces (front cap, back
/// cap, then one quad per outline edge).
pub(crate) fn extrude_ring(ring: &[Point], thickness: f64) -> (Vec<DVec3>, Vec<Vec<u32>>) {
    let n = ring.len() as u32;
    let mut vertices = Vec::with_capacity(ring.len() * 2);
    vertices.extend(ring.iter().map(|p| DVec3::new(p.x, 0.0, p.y)));
    vertices.extend(ring.iter().map(|p| DVec3::new(p.x, thickness, p.y)));

    let mut faces = Vec::with_capacity(ring.len() + 2);
    // Front cap faces -Y, back cap +Y.
    faces.push((0..n).collect());
    faces.push((n..2 * n).rev().collect());
    for i in 0..n {
        let j = (i + 1) % n;
        faces.push(vec![i, n + i, n + j, j]);
    }
    (vertices, faces)
}

#[cfg(test)]
#[path = "../../tests/unit/host/glyph.rs"]
mod tests;

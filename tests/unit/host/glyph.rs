use super::*;

#[test]
fn t_outline_flattens_to_its_eight_corners() {
    let ring = flatten_ring(&glyph_outline('T').unwrap()).unwrap();
    assert_eq!(ring.len(), 8);
    assert!(signed_area(&ring) > 0.0);

    let min_x = ring.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = ring.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let max_y = ring.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(min_x, -max_x);
    assert!(ring.iter().all(|p| p.y >= 0.0));
    assert!(max_y > max_x - min_x);
}

#[test]
fn clockwise_rings_are_reversed() {
    let mut p = BezPath::new();
    p.move_to(Point::new(0.0, 0.0));
    p.line_to(Point::new(0.0, 1.0));
    p.line_to(Point::new(1.0, 1.0));
    p.line_to(Point::new(1.0, 0.0));
    p.close_path();
    let ring = flatten_ring(&p).unwrap();
    assert_eq!(ring.len(), 4);
    assert!(signed_area(&ring) > 0.0);
}

#[test]
fn multi_contour_outlines_are_rejected() {
    let mut p = BezPath::new();
    for x in [0.0, 5.0] {
        p.move_to(Point::new(x, 0.0));
        p.line_to(Point::new(x + 1.0, 0.0));
        p.line_to(Point::new(x + 1.0, 1.0));
        p.close_path();
    }
    let err = flatten_ring(&p).unwrap_err();
    assert!(matches!(err, RigError::Geometry(_)));
}

#[test]
fn unsupported_glyphs_are_validation_errors() {
    let err = glyph_outline('Q').unwrap_err();
    assert!(matches!(err, RigError::Validation(_)));
    assert!(err.to_string().contains("'Q'"));
}

#[test]
fn extrusion_builds_caps_and_side_quads() {
    let ring = flatten_ring(&glyph_outline('T').unwrap()).unwrap();
    let (vertices, faces) = extrude_ring(&ring, 0.15);
    assert_eq!(vertices.len(), 16);
    assert_eq!(faces.len(), 2 + 8);
    assert_eq!(faces[0].len(), 8);
    assert_eq!(faces[1].len(), 8);
    assert!(faces[2..].iter().all(|f| f.len() == 4));
    assert!(vertices[..8].iter().all(|v| v.y == 0.0));
    assert!(vertices[8..].iter().all(|v| v.y == 0.15));
    for (front, back) in vertices[..8].iter().zip(&vertices[8..]) {
        assert_eq!((front.x, front.z), (back.x, back.z));
    }
}

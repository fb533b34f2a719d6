// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polygon triangulation utilities
//!
//! Wrapper around earcutr for 2D polygon triangulation.

use crate::{Error, Point2, Result};

/// Check if a polygon is convex (all cross products have same sign)
#[inline]
fn is_convex(points: &[Point2<f64>]) -> bool {
    if points.len() < 3 {
        return false;
    }

    let n = points.len();
    let mut sign = 0i8;

    for i in 0..n {
        let p0 = &points[i];
        let p1 = &points[(i + 1) % n];
        let p2 = &points[(i + 2) % n];

        // Cross product of edges
        let cross = (p1.x - p0.x) * (p2.y - p1.y) - (p1.y - p0.y) * (p2.x - p1.x);

        if cross.abs() > 1e-10 {
            let current_sign = if cross > 0.0 { 1i8 } else { -1i8 };
            if sign == 0 {
                sign = current_sign;
            } else if sign != current_sign {
                return false; // Sign changed - not convex
            }
        }
    }

    true
}

/// Simple fan triangulation for convex polygons
#[inline]
fn fan_triangulate(n: usize) -> Vec<usize> {
    let mut indices = Vec::with_capacity((n - 2) * 3);
    for i in 1..n - 1 {
        indices.push(0);
        indices.push(i);
        indices.push(i + 1);
    }
    indices
}

/// Drop an explicit closing vertex (last == first) so the loop is closed
/// implicitly, and only once.
pub fn strip_closing_point(points: &[Point2<f64>]) -> &[Point2<f64>] {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 && (first - last).norm() <= 1e-10 => {
            &points[..points.len() - 1]
        }
        _ => points,
    }
}

/// Signed area of a 2D loop (shoelace). Positive for counter-clockwise.
pub fn signed_area(points: &[Point2<f64>]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        let p = &points[i];
        let q = &points[(i + 1) % n];
        sum += p.x * q.y - q.x * p.y;
    }
    sum * 0.5
}

/// Triangulate a simple polygon (no holes)
/// Returns triangle indices into the input points
#[inline]
pub fn triangulate_polygon(points: &[Point2<f64>]) -> Result<Vec<usize>> {
    let n = points.len();

    if n < 3 {
        return Err(Error::Triangulation(
            "Need at least 3 points to triangulate".to_string(),
        ));
    }

    // FAST PATH: Triangle - no triangulation needed
    if n == 3 {
        return Ok(vec![0, 1, 2]);
    }

    // FAST PATH: Convex polygon - use fan triangulation
    if n <= 8 && is_convex(points) {
        return Ok(fan_triangulate(n));
    }

    // Flatten points for earcutr
    let mut vertices = Vec::with_capacity(n * 2);
    for p in points {
        vertices.push(p.x);
        vertices.push(p.y);
    }

    let indices = earcutr::earcut(&vertices, &[], 2)
        .map_err(|e| Error::Triangulation(format!("{:?}", e)))?;

    Ok(indices)
}

/// Triangulate a polygon with holes
/// Returns triangle indices into the combined vertex array (outer + all kept holes)
///
/// Holes with fewer than 3 points are skipped; callers building a vertex
/// buffer must apply the same filter (see [`usable_holes`]).
#[inline]
pub fn triangulate_polygon_with_holes(
    outer: &[Point2<f64>],
    holes: &[&[Point2<f64>]],
) -> Result<Vec<usize>> {
    if outer.len() < 3 {
        return Err(Error::Triangulation(
            "Need at least 3 points in outer boundary".to_string(),
        ));
    }

    // FAST PATH: No holes - use optimized simple triangulation
    let valid_holes: Vec<&[Point2<f64>]> = usable_holes(holes).collect();

    if valid_holes.is_empty() {
        return triangulate_polygon(outer);
    }

    // Flatten vertices for earcutr
    let total_points: usize = outer.len() + valid_holes.iter().map(|h| h.len()).sum::<usize>();
    let mut vertices = Vec::with_capacity(total_points * 2);

    // Add outer boundary
    for p in outer {
        vertices.push(p.x);
        vertices.push(p.y);
    }

    // Add holes and track their start indices
    let mut hole_indices = Vec::with_capacity(valid_holes.len());
    for hole in valid_holes {
        hole_indices.push(vertices.len() / 2);
        for p in hole {
            vertices.push(p.x);
            vertices.push(p.y);
        }
    }

    let indices = earcutr::earcut(&vertices, &hole_indices, 2)
        .map_err(|e| Error::Triangulation(format!("{:?}", e)))?;

    Ok(indices)
}

/// Holes that take part in triangulation, in order
#[inline]
pub fn usable_holes<'a>(
    holes: &'a [&'a [Point2<f64>]],
) -> impl Iterator<Item = &'a [Point2<f64>]> + 'a {
    holes.iter().copied().filter(|h| h.len() >= 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangulated_area(points: &[Point2<f64>], indices: &[usize]) -> f64 {
        indices
            .chunks_exact(3)
            .map(|t| signed_area(&[points[t[0]], points[t[1]], points[t[2]]]).abs())
            .sum()
    }

    #[test]
    fn test_triangulate_square() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];

        let indices = triangulate_polygon(&points).unwrap();

        // Square should be split into 2 triangles = 6 indices
        assert_eq!(indices.len(), 6);
    }

    #[test]
    fn test_triangulate_insufficient_points() {
        let points = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];

        let result = triangulate_polygon(&points);
        assert!(result.is_err());
    }

    #[test]
    fn test_concave_quad_keeps_area() {
        // Arrowhead: a fan from vertex 0 would spill outside the polygon
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 2.0),
            Point2::new(0.0, 4.0),
            Point2::new(1.0, 2.0),
        ];

        let indices = triangulate_polygon(&points).unwrap();
        let expected = signed_area(&points).abs();
        assert!((triangulated_area(&points, &indices) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_triangulate_square_with_hole() {
        let outer = vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ];
        let hole = vec![
            Point2::new(3.0, 3.0),
            Point2::new(7.0, 3.0),
            Point2::new(7.0, 7.0),
            Point2::new(3.0, 7.0),
        ];

        let indices = triangulate_polygon_with_holes(&outer, &[hole.as_slice()]).unwrap();
        assert!(indices.len() > 6);
        assert_eq!(indices.len() % 3, 0);

        let all: Vec<Point2<f64>> = outer.iter().chain(hole.iter()).copied().collect();
        assert!((triangulated_area(&all, &indices) - 84.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_holes_are_ignored() {
        let outer = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let degenerate = vec![Point2::new(1.0, 1.0)];

        let indices = triangulate_polygon_with_holes(&outer, &[degenerate.as_slice()]).unwrap();
        assert_eq!(indices.len(), 6);
    }

    #[test]
    fn test_strip_closing_point() {
        let closed = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 0.0),
        ];
        assert_eq!(strip_closing_point(&closed).len(), 3);
        assert_eq!(strip_closing_point(&closed[..3]).len(), 3);
    }

    #[test]
    fn test_signed_area_orientation() {
        let ccw = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 3.0),
            Point2::new(0.0, 3.0),
        ];
        let cw: Vec<_> = ccw.iter().rev().copied().collect();

        assert!((signed_area(&ccw) - 6.0).abs() < 1e-12);
        assert!((signed_area(&cw) + 6.0).abs() < 1e-12);
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Point extraction from gbXML coordinate records
//!
//! Converts the textual `Coordinate` tokens of a `PolyLoop` into 3D points.
//! A single bad token fails the whole loop.

use crate::{Error, Point3, Result};
use gbxml_lite_core::{CartesianPoint, PolyLoop, SurfaceNode};

/// Number of coordinate tokens per gbXML cartesian point
const AXES: usize = 3;

/// Parse one coordinate token into a finite f64
#[inline]
fn parse_coordinate(token: &str, point: usize) -> Result<f64> {
    let value: f64 = fast_float::parse(token.trim()).map_err(|_| Error::MalformedCoordinate {
        point,
        token: token.to_string(),
    })?;

    if !value.is_finite() {
        return Err(Error::MalformedCoordinate {
            point,
            token: token.to_string(),
        });
    }

    Ok(value)
}

/// Convert a single cartesian point record (x, y, z tokens)
pub fn extract_point(record: &CartesianPoint, index: usize) -> Result<Point3<f64>> {
    if record.coordinates.len() != AXES {
        return Err(Error::MalformedCoordinate {
            point: index,
            token: record.coordinates.join(" "),
        });
    }

    Ok(Point3::new(
        parse_coordinate(&record.coordinates[0], index)?,
        parse_coordinate(&record.coordinates[1], index)?,
        parse_coordinate(&record.coordinates[2], index)?,
    ))
}

/// Convert every record of a polygon loop, preserving order and length
pub fn extract_points(poly_loop: &PolyLoop) -> Result<Vec<Point3<f64>>> {
    poly_loop
        .points
        .iter()
        .enumerate()
        .map(|(index, record)| extract_point(record, index))
        .collect()
}

/// Outer loop and opening loops of one surface, in document order
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceLoops {
    pub outer: Vec<Point3<f64>>,
    pub openings: Vec<Vec<Point3<f64>>>,
}

/// Extract the outer loop and every opening loop of a surface.
///
/// An opening without planar geometry is treated like a surface without
/// one: the whole surface fails.
pub fn extract_surface_loops(surface: &SurfaceNode) -> Result<SurfaceLoops> {
    let outer = surface.outer_loop().ok_or(Error::MissingGeometry)?;
    let openings = surface
        .openings
        .iter()
        .map(|opening| {
            opening
                .poly_loop()
                .ok_or(Error::MissingGeometry)
                .and_then(extract_points)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SurfaceLoops {
        outer: extract_points(outer)?,
        openings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(tokens: &[&str]) -> CartesianPoint {
        CartesianPoint {
            coordinates: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_extract_points_in_order() {
        let poly_loop = PolyLoop {
            points: vec![
                record(&["0", "0", "0"]),
                record(&["12.5", "-3", "1e2"]),
                record(&[" 7.25 ", "0.0", "4"]),
            ],
        };

        let points = extract_points(&poly_loop).unwrap();

        assert_eq!(points.len(), 3);
        assert_eq!(points[1], Point3::new(12.5, -3.0, 100.0));
        assert_eq!(points[2], Point3::new(7.25, 0.0, 4.0));
    }

    #[test]
    fn test_bad_token_fails_whole_loop() {
        let poly_loop = PolyLoop {
            points: vec![record(&["0", "0", "0"]), record(&["1", "abc", "0"])],
        };

        let err = extract_points(&poly_loop).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedCoordinate {
                point: 1,
                token: "abc".to_string()
            }
        );
    }

    #[test]
    fn test_non_finite_token_is_malformed() {
        assert!(extract_point(&record(&["1", "inf", "0"]), 0).is_err());
        assert!(extract_point(&record(&["NaN", "0", "0"]), 0).is_err());
    }

    #[test]
    fn test_wrong_arity_is_malformed() {
        assert!(extract_point(&record(&["1", "2"]), 4).is_err());
        assert!(extract_point(&record(&["1", "2", "3", "4"]), 4).is_err());
    }

    #[test]
    fn test_surface_loops_keep_opening_order() {
        let xml = r#"<gbXML><Campus><Surface id="s">
            <PlanarGeometry><PolyLoop>
              <CartesianPoint><Coordinate>0</Coordinate><Coordinate>0</Coordinate><Coordinate>0</Coordinate></CartesianPoint>
              <CartesianPoint><Coordinate>9</Coordinate><Coordinate>0</Coordinate><Coordinate>0</Coordinate></CartesianPoint>
              <CartesianPoint><Coordinate>9</Coordinate><Coordinate>9</Coordinate><Coordinate>0</Coordinate></CartesianPoint>
            </PolyLoop></PlanarGeometry>
            <Opening><PlanarGeometry><PolyLoop>
              <CartesianPoint><Coordinate>1</Coordinate><Coordinate>1</Coordinate><Coordinate>0</Coordinate></CartesianPoint>
            </PolyLoop></PlanarGeometry></Opening>
            <Opening><PlanarGeometry><PolyLoop>
              <CartesianPoint><Coordinate>2</Coordinate><Coordinate>2</Coordinate><Coordinate>0</Coordinate></CartesianPoint>
            </PolyLoop></PlanarGeometry></Opening>
        </Surface></Campus></gbXML>"#;
        let doc = gbxml_lite_core::parse_gbxml(xml).unwrap();

        let loops = extract_surface_loops(&doc.surfaces()[0]).unwrap();
        assert_eq!(loops.outer.len(), 3);
        assert_eq!(loops.openings.len(), 2);
        assert_eq!(loops.openings[0][0], Point3::new(1.0, 1.0, 0.0));
        assert_eq!(loops.openings[1][0], Point3::new(2.0, 2.0, 0.0));
    }

    #[test]
    fn test_surface_without_geometry() {
        let doc = gbxml_lite_core::parse_gbxml("<gbXML><Campus><Surface/></Campus></gbXML>").unwrap();
        assert_eq!(
            extract_surface_loops(&doc.surfaces()[0]),
            Err(Error::MissingGeometry)
        );
    }

    #[test]
    fn test_empty_token_is_malformed() {
        assert!(extract_point(&record(&["", "0", "0"]), 0).is_err());
    }
}

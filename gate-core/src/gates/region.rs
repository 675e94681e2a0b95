//! Committed region (gate) values and their geometric queries.

use std::sync::Arc;

use crate::error::{GateError, Result};
use crate::gates::drag::PointDragData;
use crate::gates::shape;
use crate::gates::shapes::RenderShape;
use crate::gates::styles::RegionStyle;

pub type RegionId = Arc<str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    Rectangle,
    Ellipse,
    Polygon,
    LineSegment,
}

/// Geometry of a committed region, in data coordinates.
///
/// Rectangles and ellipses are axis-aligned: `origin` is the minimum corner
/// of the bounding box and `size` is non-negative. A polygon is an ordered
/// vertex loop; `closed` records whether the loop has been connected back to
/// its first vertex. A line segment chain carries at least two points.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionGeometry {
    Rectangle {
        origin: (f32, f32),
        size: (f32, f32),
    },
    Ellipse {
        origin: (f32, f32),
        size: (f32, f32),
    },
    Polygon {
        vertices: Vec<(f32, f32)>,
        closed: bool,
    },
    LineSegment {
        points: Vec<(f32, f32)>,
    },
}

impl RegionGeometry {
    pub fn kind(&self) -> RegionKind {
        match self {
            RegionGeometry::Rectangle { .. } => RegionKind::Rectangle,
            RegionGeometry::Ellipse { .. } => RegionKind::Ellipse,
            RegionGeometry::Polygon { .. } => RegionKind::Polygon,
            RegionGeometry::LineSegment { .. } => RegionKind::LineSegment,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    id: RegionId,
    pub geometry: RegionGeometry,
    pub style: RegionStyle,
    selected: bool,
}

impl Region {
    pub fn new(id: RegionId, geometry: RegionGeometry, style: RegionStyle) -> Self {
        Self {
            id,
            geometry,
            style,
            selected: false,
        }
    }

    pub fn id(&self) -> RegionId {
        self.id.clone()
    }

    pub fn kind(&self) -> RegionKind {
        self.geometry.kind()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Selection exclusivity is the collection's job; it is the only caller.
    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Whether `point` lies inside the region, boundary inclusive.
    ///
    /// Fails with [`GateError::InvalidRegionState`] for an open polygon, a
    /// vertex list too short for the kind, or a line segment (no interior).
    pub fn contains(&self, point: (f32, f32)) -> Result<bool> {
        let (px, py) = point;
        match &self.geometry {
            RegionGeometry::Rectangle { origin, size } => {
                let (ox, oy) = *origin;
                let (w, h) = *size;
                Ok(px >= ox && px <= ox + w && py >= oy && py <= oy + h)
            }
            RegionGeometry::Ellipse { origin, size } => {
                let (rx, ry) = (size.0 / 2.0, size.1 / 2.0);
                if rx <= 0.0 || ry <= 0.0 {
                    return Ok(false);
                }
                let cx = origin.0 + rx;
                let cy = origin.1 + ry;
                let nx = (px - cx) / rx;
                let ny = (py - cy) / ry;
                Ok(nx * nx + ny * ny <= 1.0)
            }
            RegionGeometry::Polygon { vertices, closed } => {
                if !closed {
                    return Err(GateError::InvalidRegionState(
                        "containment query against an open polygon",
                    ));
                }
                if vertices.len() < 3 {
                    return Err(GateError::InvalidRegionState(
                        "closed polygon has fewer than 3 vertices",
                    ));
                }
                Ok(shape::polygon::point_in_polygon(point, vertices))
            }
            RegionGeometry::LineSegment { .. } => Err(GateError::InvalidRegionState(
                "line segment region has no interior",
            )),
        }
    }

    /// Vertices of the region outline, in drawing order.
    pub fn points(&self) -> Vec<(f32, f32)> {
        match &self.geometry {
            RegionGeometry::Rectangle { origin, size } => {
                shape::rectangle::corner_points(*origin, *size)
            }
            RegionGeometry::Ellipse { origin, size } => {
                let (rx, ry) = (size.0 / 2.0, size.1 / 2.0);
                vec![(origin.0 + rx, origin.1 + ry)]
            }
            RegionGeometry::Polygon { vertices, .. } => vertices.clone(),
            RegionGeometry::LineSegment { points } => points.clone(),
        }
    }

    /// Positions of the resize handles. Ellipses carry none by default.
    pub fn handle_points(&self) -> Vec<(f32, f32)> {
        match &self.geometry {
            RegionGeometry::Rectangle { origin, size } => {
                shape::rectangle::handle_points(*origin, *size)
            }
            RegionGeometry::Ellipse { .. } => vec![],
            RegionGeometry::Polygon { vertices, .. } => vertices.clone(),
            RegionGeometry::LineSegment { points } => points.clone(),
        }
    }

    /// Shift the whole region by `(dx, dy)`.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        match &mut self.geometry {
            RegionGeometry::Rectangle { origin, .. } | RegionGeometry::Ellipse { origin, .. } => {
                origin.0 += dx;
                origin.1 += dy;
            }
            RegionGeometry::Polygon { vertices, .. } => {
                for v in vertices.iter_mut() {
                    v.0 += dx;
                    v.1 += dy;
                }
            }
            RegionGeometry::LineSegment { points } => {
                for p in points.iter_mut() {
                    p.0 += dx;
                    p.1 += dy;
                }
            }
        }
    }

    /// Move the handle at `index` to `point`, reshaping the region.
    pub fn move_vertex(&mut self, index: usize, point: (f32, f32)) -> Result<()> {
        match &mut self.geometry {
            RegionGeometry::Rectangle { origin, size } => {
                let (new_origin, new_size) = shape::rectangle::move_handle(*origin, *size, index, point)?;
                *origin = new_origin;
                *size = new_size;
                Ok(())
            }
            RegionGeometry::Ellipse { .. } => {
                Err(GateError::InvalidPointIndex { index, len: 0 })
            }
            RegionGeometry::Polygon { vertices, .. } => {
                let len = vertices.len();
                let v = vertices
                    .get_mut(index)
                    .ok_or(GateError::InvalidPointIndex { index, len })?;
                *v = point;
                Ok(())
            }
            RegionGeometry::LineSegment { points } => {
                let len = points.len();
                let p = points
                    .get_mut(index)
                    .ok_or(GateError::InvalidPointIndex { index, len })?;
                *p = point;
                Ok(())
            }
        }
    }

    /// Shape list for the host renderer: outline + handles, plus the ghost
    /// preview when one of the handles is mid-drag.
    pub fn shapes(&self, drag_point: Option<&PointDragData>) -> Vec<RenderShape> {
        shape::draw_region(self, drag_point)
    }

    /// Smallest distance from `point` to the region outline, if within the
    /// rectangular `tolerance` box.
    pub fn hit_perimeter(&self, point: (f32, f32), tolerance: (f32, f32)) -> Option<f32> {
        shape::hit_perimeter(self, point, tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(origin: (f32, f32), size: (f32, f32)) -> Region {
        Region::new(
            Arc::from("r"),
            RegionGeometry::Rectangle { origin, size },
            RegionStyle::default(),
        )
    }

    #[test]
    fn rectangle_containment_is_boundary_inclusive() {
        let r = rect((0.0, 0.0), (100.0, 100.0));
        assert!(r.contains((50.0, 50.0)).unwrap());
        assert!(!r.contains((150.0, 50.0)).unwrap());
        assert!(r.contains((100.0, 50.0)).unwrap());
        assert!(r.contains((0.0, 0.0)).unwrap());
        assert!(!r.contains((50.0, -0.001)).unwrap());
    }

    #[test]
    fn ellipse_containment_uses_normalized_distance() {
        let e = Region::new(
            Arc::from("e"),
            RegionGeometry::Ellipse {
                origin: (0.0, 0.0),
                size: (100.0, 50.0),
            },
            RegionStyle::default(),
        );
        assert!(e.contains((50.0, 25.0)).unwrap());
        assert!(e.contains((100.0, 25.0)).unwrap());
        assert!(e.contains((50.0, 50.0)).unwrap());
        // Bounding-box corner lies outside the ellipse.
        assert!(!e.contains((100.0, 50.0)).unwrap());
        assert!(!e.contains((-1.0, 25.0)).unwrap());
    }

    #[test]
    fn open_polygon_containment_fails() {
        let p = Region::new(
            Arc::from("p"),
            RegionGeometry::Polygon {
                vertices: vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)],
                closed: false,
            },
            RegionStyle::default(),
        );
        assert!(matches!(
            p.contains((5.0, 5.0)),
            Err(GateError::InvalidRegionState(_))
        ));
    }

    #[test]
    fn closed_polygon_containment() {
        let p = Region::new(
            Arc::from("p"),
            RegionGeometry::Polygon {
                vertices: vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
                closed: true,
            },
            RegionStyle::default(),
        );
        assert!(p.contains((5.0, 5.0)).unwrap());
        assert!(!p.contains((15.0, 5.0)).unwrap());
    }

    #[test]
    fn line_segment_has_no_interior() {
        let l = Region::new(
            Arc::from("l"),
            RegionGeometry::LineSegment {
                points: vec![(0.0, 0.0), (10.0, 10.0)],
            },
            RegionStyle::default(),
        );
        assert!(matches!(
            l.contains((5.0, 5.0)),
            Err(GateError::InvalidRegionState(_))
        ));
    }

    #[test]
    fn translate_shifts_all_coordinates() {
        let mut r = rect((10.0, 20.0), (30.0, 40.0));
        r.translate(5.0, -5.0);
        assert_eq!(
            r.geometry,
            RegionGeometry::Rectangle {
                origin: (15.0, 15.0),
                size: (30.0, 40.0),
            }
        );
    }

    #[test]
    fn move_vertex_out_of_range_is_an_error() {
        let mut p = Region::new(
            Arc::from("p"),
            RegionGeometry::Polygon {
                vertices: vec![(0.0, 0.0), (10.0, 0.0), (5.0, 5.0)],
                closed: true,
            },
            RegionStyle::default(),
        );
        assert!(matches!(
            p.move_vertex(7, (1.0, 1.0)),
            Err(GateError::InvalidPointIndex { index: 7, len: 3 })
        ));
        p.move_vertex(2, (5.0, 9.0)).unwrap();
        assert!(p.contains((5.0, 8.0)).unwrap());
    }
}

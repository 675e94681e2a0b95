//! Per-kind geometry and drawing helpers.
//!
//! One renderer, dispatching on geometry kind + style. The helpers return
//! [`RenderShape`] values; nothing here touches a canvas.

pub mod ellipse;
pub mod line;
pub mod polygon;
pub mod rectangle;

use crate::collate_vecs;
use crate::gates::drag::PointDragData;
use crate::gates::region::{Region, RegionGeometry};
use crate::gates::shapes::{RenderShape, ShapeRole};

/// Distance from `m` to the segment `a..b`, if `m` falls within the
/// rectangular `tolerance` box around the nearest point of the segment.
pub fn is_near_segment(
    m: (f32, f32),
    a: (f32, f32),
    b: (f32, f32),
    tolerance: (f32, f32),
) -> Option<f32> {
    let (tol_x, tol_y) = tolerance;
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let length_sq = dx * dx + dy * dy;

    let t_clamped = if length_sq == 0.0 {
        0.0
    } else {
        (((m.0 - a.0) * dx + (m.1 - a.1) * dy) / length_sq).clamp(0.0, 1.0)
    };

    let nearest_x = a.0 + t_clamped * dx;
    let nearest_y = a.1 + t_clamped * dy;

    let diff_x = (m.0 - nearest_x).abs();
    let diff_y = (m.1 - nearest_y).abs();

    if diff_x <= tol_x && diff_y <= tol_y {
        Some((diff_x.powi(2) + diff_y.powi(2)).sqrt())
    } else {
        None
    }
}

/// Walk a point chain and report the closest segment hit, optionally closing
/// the loop back to the first point.
pub(crate) fn nearest_segment_hit(
    points: &[(f32, f32)],
    close_loop: bool,
    point: (f32, f32),
    tolerance: (f32, f32),
) -> Option<f32> {
    if points.len() < 2 {
        return None;
    }
    let mut closest = f32::INFINITY;
    for segment in points.windows(2) {
        if let Some(dist) = is_near_segment(point, segment[0], segment[1], tolerance) {
            closest = closest.min(dist);
        }
    }
    let first = points[0];
    let last = points[points.len() - 1];
    if close_loop && first != last {
        if let Some(dist) = is_near_segment(point, last, first, tolerance) {
            closest = closest.min(dist);
        }
    }
    if closest == f32::INFINITY {
        None
    } else {
        Some(closest)
    }
}

/// Render a committed region: outline, handles (dim unless selected), and
/// the ghost preview while one of its handles is mid-drag.
pub fn draw_region(region: &Region, drag_point: Option<&PointDragData>) -> Vec<RenderShape> {
    let id = region.id();
    let style = region.style.line;
    let role = ShapeRole::Region(id.clone());

    let (main, ghost) = match &region.geometry {
        RegionGeometry::Rectangle { origin, size } => (
            rectangle::draw_rectangle(*origin, *size, style, role),
            drag_point.and_then(|d| rectangle::ghost_for_point_drag(d, *origin, *size)),
        ),
        RegionGeometry::Ellipse { origin, size } => {
            (ellipse::draw_ellipse(*origin, *size, style, role), None)
        }
        RegionGeometry::Polygon { vertices, .. } => (
            polygon::draw_polygon(vertices, style, role),
            drag_point.and_then(|d| polygon::ghost_for_point_drag(d, vertices)),
        ),
        RegionGeometry::LineSegment { points } => {
            (line::draw_line(points, style, role), None)
        }
    };

    let fill = region.style.handle.fill(region.is_selected());
    let size = region.style.handle.size;
    let handles: Vec<RenderShape> = region
        .handle_points()
        .into_iter()
        .enumerate()
        .map(|(index, center)| RenderShape::Handle {
            center,
            size,
            fill,
            role: ShapeRole::Handle {
                region: id.clone(),
                index,
            },
        })
        .collect();

    collate_vecs!(main, handles, ghost)
}

/// Smallest distance from `point` to the region outline within `tolerance`.
pub fn hit_perimeter(
    region: &Region,
    point: (f32, f32),
    tolerance: (f32, f32),
) -> Option<f32> {
    match &region.geometry {
        RegionGeometry::Rectangle { origin, size } => {
            nearest_segment_hit(&rectangle::corner_points(*origin, *size), true, point, tolerance)
        }
        RegionGeometry::Ellipse { origin, size } => {
            ellipse::hit_perimeter(*origin, *size, point, tolerance)
        }
        RegionGeometry::Polygon { vertices, closed } => {
            nearest_segment_hit(vertices, *closed, point, tolerance)
        }
        RegionGeometry::LineSegment { points } => {
            nearest_segment_hit(points, false, point, tolerance)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_hit_respects_tolerance_box() {
        let a = (0.0, 0.0);
        let b = (10.0, 0.0);
        assert!(is_near_segment((5.0, 1.0), a, b, (2.0, 2.0)).is_some());
        assert!(is_near_segment((5.0, 3.0), a, b, (2.0, 2.0)).is_none());
        // Beyond the endpoint, distance is measured to the endpoint.
        let d = is_near_segment((12.0, 0.0), a, b, (3.0, 3.0)).unwrap();
        assert!((d - 2.0).abs() < 1e-6);
    }

    #[test]
    fn degenerate_segment_hits_at_its_point() {
        let d = is_near_segment((1.0, 0.0), (0.0, 0.0), (0.0, 0.0), (2.0, 2.0)).unwrap();
        assert!((d - 1.0).abs() < 1e-6);
    }
}

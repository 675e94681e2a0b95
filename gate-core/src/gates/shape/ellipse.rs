use crate::gates::shapes::{RenderShape, ShapeRole};
use crate::gates::styles::DrawingStyle;

pub fn draw_ellipse(
    origin: (f32, f32),
    size: (f32, f32),
    style: DrawingStyle,
    role: ShapeRole,
) -> Vec<RenderShape> {
    let radius_x = size.0 / 2.0;
    let radius_y = size.1 / 2.0;
    vec![RenderShape::Ellipse {
        center: (origin.0 + radius_x, origin.1 + radius_y),
        radius_x,
        radius_y,
        style,
        role,
    }]
}

/// Proximity test against the ellipse outline.
///
/// Uses the normalized-distance band `| |p|_e - 1 | <= tol` as a cheap
/// filter, then measures the distance to the parametric point at the same
/// angle. Good enough for click targeting; not an exact nearest-point solve.
pub fn hit_perimeter(
    origin: (f32, f32),
    size: (f32, f32),
    point: (f32, f32),
    tolerance: (f32, f32),
) -> Option<f32> {
    let rx = size.0 / 2.0;
    let ry = size.1 / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return None;
    }
    let cx = origin.0 + rx;
    let cy = origin.1 + ry;

    let local_x = point.0 - cx;
    let local_y = point.1 - cy;
    let norm_x = local_x / rx;
    let norm_y = local_y / ry;
    let dist = (norm_x * norm_x + norm_y * norm_y).sqrt();

    let norm_tol = (tolerance.0 / rx).max(tolerance.1 / ry);
    if (dist - 1.0).abs() <= norm_tol {
        let theta = local_y.atan2(local_x);
        let nearest_x = cx + rx * theta.cos();
        let nearest_y = cy + ry * theta.sin();
        Some(f32::hypot(point.0 - nearest_x, point.1 - nearest_y))
    } else {
        None
    }
}

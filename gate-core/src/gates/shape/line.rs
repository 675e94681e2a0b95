use crate::gates::shapes::{RenderShape, ShapeRole};
use crate::gates::styles::DrawingStyle;

pub fn draw_line(
    points: &[(f32, f32)],
    style: DrawingStyle,
    role: ShapeRole,
) -> Vec<RenderShape> {
    vec![RenderShape::PolyLine {
        points: points.to_vec(),
        style,
        role,
    }]
}

use crate::error::{GateError, Result};
use crate::gates::drag::PointDragData;
use crate::gates::shapes::{RenderShape, ShapeRole};
use crate::gates::styles::{Color, DRAGGED_LINE, DrawingStyle};

/// Corner loop in drawing order: bottom-left, bottom-right, top-right,
/// top-left.
pub fn corner_points(origin: (f32, f32), size: (f32, f32)) -> Vec<(f32, f32)> {
    let (x, y) = origin;
    let (w, h) = size;
    vec![(x, y), (x + w, y), (x + w, y + h), (x, y + h)]
}

/// Handle positions: the four corners followed by the four edge midpoints
/// (bottom, right, top, left).
pub fn handle_points(origin: (f32, f32), size: (f32, f32)) -> Vec<(f32, f32)> {
    let (x, y) = origin;
    let (w, h) = size;
    let mut points = corner_points(origin, size);
    points.extend([
        (x + w / 2.0, y),
        (x + w, y + h / 2.0),
        (x + w / 2.0, y + h),
        (x, y + h / 2.0),
    ]);
    points
}

/// Recompute origin/size after dragging handle `index` to `point`.
///
/// Corner handles resize against the opposite corner; midpoint handles move
/// one edge. The rectangle stays axis-aligned and its size non-negative.
pub fn move_handle(
    origin: (f32, f32),
    size: (f32, f32),
    index: usize,
    point: (f32, f32),
) -> Result<((f32, f32), (f32, f32))> {
    let corners = corner_points(origin, size);
    match index {
        0..=3 => {
            let anchor = corners[(index + 2) % 4];
            let new_origin = (point.0.min(anchor.0), point.1.min(anchor.1));
            let new_size = ((point.0 - anchor.0).abs(), (point.1 - anchor.1).abs());
            Ok((new_origin, new_size))
        }
        4 | 6 => {
            // Bottom or top edge: the opposite edge anchors y.
            let anchor_y = if index == 4 { origin.1 + size.1 } else { origin.1 };
            let new_y = point.1.min(anchor_y);
            let new_h = (point.1 - anchor_y).abs();
            Ok(((origin.0, new_y), (size.0, new_h)))
        }
        5 | 7 => {
            // Right or left edge: the opposite edge anchors x.
            let anchor_x = if index == 5 { origin.0 } else { origin.0 + size.0 };
            let new_x = point.0.min(anchor_x);
            let new_w = (point.0 - anchor_x).abs();
            Ok(((new_x, origin.1), (new_w, size.1)))
        }
        _ => Err(GateError::InvalidPointIndex { index, len: 8 }),
    }
}

pub fn draw_rectangle(
    origin: (f32, f32),
    size: (f32, f32),
    style: DrawingStyle,
    role: ShapeRole,
) -> Vec<RenderShape> {
    vec![RenderShape::Rectangle {
        x: origin.0,
        y: origin.1,
        width: size.0,
        height: size.1,
        style,
        role,
    }]
}

/// Ghost outline while a handle drag is in flight: the rectangle as it would
/// be after the drop, plus a marker at the cursor.
pub fn ghost_for_point_drag(
    drag_data: &PointDragData,
    origin: (f32, f32),
    size: (f32, f32),
) -> Option<Vec<RenderShape>> {
    let (new_origin, new_size) =
        move_handle(origin, size, drag_data.point_index(), drag_data.loc()).ok()?;

    Some(vec![
        RenderShape::Rectangle {
            x: new_origin.0,
            y: new_origin.1,
            width: new_size.0,
            height: new_size.1,
            style: DRAGGED_LINE,
            role: ShapeRole::Draft,
        },
        RenderShape::Circle {
            center: drag_data.loc(),
            radius: 5.0,
            fill: Color::YELLOW,
            role: ShapeRole::Draft,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_drag_resizes_against_opposite_corner() {
        // Drag the top-right corner (index 2) of a unit rect outwards.
        let (origin, size) = move_handle((0.0, 0.0), (10.0, 10.0), 2, (25.0, 15.0)).unwrap();
        assert_eq!(origin, (0.0, 0.0));
        assert_eq!(size, (25.0, 15.0));

        // Dragging past the anchor flips cleanly instead of going negative.
        let (origin, size) = move_handle((0.0, 0.0), (10.0, 10.0), 2, (-5.0, -5.0)).unwrap();
        assert_eq!(origin, (-5.0, -5.0));
        assert_eq!(size, (5.0, 5.0));
    }

    #[test]
    fn midpoint_drag_moves_one_edge() {
        // Right-edge midpoint (index 5): width changes, height does not.
        let (origin, size) = move_handle((0.0, 0.0), (10.0, 10.0), 5, (30.0, 99.0)).unwrap();
        assert_eq!(origin, (0.0, 0.0));
        assert_eq!(size, (30.0, 10.0));

        // Bottom-edge midpoint (index 4): y side only.
        let (origin, size) = move_handle((0.0, 0.0), (10.0, 10.0), 4, (99.0, -4.0)).unwrap();
        assert_eq!(origin, (0.0, -4.0));
        assert_eq!(size, (10.0, 14.0));
    }

    #[test]
    fn bad_handle_index_is_an_error() {
        assert!(matches!(
            move_handle((0.0, 0.0), (10.0, 10.0), 8, (0.0, 0.0)),
            Err(GateError::InvalidPointIndex { index: 8, len: 8 })
        ));
    }
}

use crate::gates::drag::PointDragData;
use crate::gates::shapes::{RenderShape, ShapeRole};
use crate::gates::styles::{Color, DRAGGED_LINE, DrawingStyle};

pub fn draw_polygon(
    points: &[(f32, f32)],
    style: DrawingStyle,
    role: ShapeRole,
) -> Vec<RenderShape> {
    vec![RenderShape::Polygon {
        points: points.to_vec(),
        style,
        role,
    }]
}

/// Even-odd ray cast. Callers guarantee a closed loop of >= 3 vertices.
pub fn point_in_polygon(point: (f32, f32), vertices: &[(f32, f32)]) -> bool {
    let (px, py) = point;
    let n = vertices.len();
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = vertices[i];
        let (xj, yj) = vertices[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Ghost preview while a vertex drag is in flight: the two affected edges
/// re-routed through the cursor, plus a marker at the cursor.
pub fn ghost_for_point_drag(
    drag_data: &PointDragData,
    main_points: &[(f32, f32)],
) -> Option<Vec<RenderShape>> {
    let idx = drag_data.point_index();
    let n = main_points.len();
    if idx >= n || n < 2 {
        return None;
    }

    let prev = main_points[(idx + n - 1) % n];
    let current = drag_data.loc();
    let next = main_points[(idx + 1) % n];

    Some(vec![
        RenderShape::PolyLine {
            points: vec![prev, current, next],
            style: DRAGGED_LINE,
            role: ShapeRole::Draft,
        },
        RenderShape::Circle {
            center: current,
            radius: 5.0,
            fill: Color::YELLOW,
            role: ShapeRole::Draft,
        },
    ])
}

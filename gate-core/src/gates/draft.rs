//! Uncommitted in-progress shapes shown during an active gesture.

use crate::collate_vecs;
use crate::gates::shapes::{RenderShape, ShapeRole};
use crate::gates::styles::{Color, DRAFT_LINE, RUBBER_LINE};

/// Live draft, recomputed on every pointer move. Promoted to a committed
/// [`Region`](crate::gates::region::Region) only when the gesture ends past
/// the minimum-size threshold; discarded otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Draft {
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
        rubber: Option<(f32, f32)>,
    },
    Line {
        last: (f32, f32),
        rubber: Option<(f32, f32)>,
    },
}

impl Draft {
    pub fn shapes(&self) -> Vec<RenderShape> {
        match self {
            Draft::Rectangle { origin, size } => vec![RenderShape::Rectangle {
                x: origin.0,
                y: origin.1,
                width: size.0,
                height: size.1,
                style: DRAFT_LINE,
                role: ShapeRole::Draft,
            }],
            Draft::Ellipse { origin, size } => {
                let radius_x = size.0 / 2.0;
                let radius_y = size.1 / 2.0;
                vec![RenderShape::Ellipse {
                    center: (origin.0 + radius_x, origin.1 + radius_y),
                    radius_x,
                    radius_y,
                    style: DRAFT_LINE,
                    role: ShapeRole::Draft,
                }]
            }
            Draft::Polygon { vertices, rubber } => {
                let main = draw_draft_polygon(vertices);
                let rubber = vertices
                    .last()
                    .zip(*rubber)
                    .map(|(last, cursor)| rubber_segment(*last, cursor));
                collate_vecs!(main, rubber)
            }
            Draft::Line { last, rubber } => {
                let dot = vec![RenderShape::Circle {
                    center: *last,
                    radius: 3.0,
                    fill: Color::RED,
                    role: ShapeRole::Draft,
                }];
                let rubber = rubber.map(|cursor| rubber_segment(*last, cursor));
                collate_vecs!(dot, rubber)
            }
        }
    }
}

fn rubber_segment(from: (f32, f32), to: (f32, f32)) -> Vec<RenderShape> {
    vec![RenderShape::PolyLine {
        points: vec![from, to],
        style: RUBBER_LINE,
        role: ShapeRole::Rubber,
    }]
}

fn draw_draft_polygon(points: &[(f32, f32)]) -> Vec<RenderShape> {
    match points.len() {
        0 => vec![],
        1 => {
            vec![RenderShape::Circle {
                center: points[0],
                radius: 3.0,
                fill: Color::RED,
                role: ShapeRole::Draft,
            }]
        }
        2 => {
            vec![RenderShape::PolyLine {
                points: points.to_vec(),
                style: DRAFT_LINE,
                role: ShapeRole::Draft,
            }]
        }
        _ => {
            let mut points_local: Vec<(f32, f32)> = points.to_vec();
            // close the loop
            if let Some(first) = points_local.first() {
                points_local.push(*first);
            }
            vec![RenderShape::Polygon {
                points: points_local,
                style: DRAFT_LINE,
                role: ShapeRole::Draft,
            }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polygon_draft_grows_from_dot_to_loop() {
        let mut vertices = vec![(0.0, 0.0)];
        let one = Draft::Polygon {
            vertices: vertices.clone(),
            rubber: None,
        };
        assert!(matches!(one.shapes()[0], RenderShape::Circle { .. }));

        vertices.push((10.0, 0.0));
        vertices.push((5.0, 8.0));
        let three = Draft::Polygon {
            vertices,
            rubber: Some((7.0, 7.0)),
        };
        let shapes = three.shapes();
        match &shapes[0] {
            RenderShape::Polygon { points, .. } => {
                // Preview loop is closed back to the first vertex.
                assert_eq!(points.first(), points.last());
                assert_eq!(points.len(), 4);
            }
            other => panic!("expected polygon preview, got {other:?}"),
        }
        assert!(matches!(
            shapes[1],
            RenderShape::PolyLine { role: ShapeRole::Rubber, .. }
        ));
    }
}

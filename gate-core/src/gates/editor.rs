//! Drag-to-create gate editor.
//!
//! Translates the host's pointer events (already in data coordinates) into
//! committed [`Region`] values. All state lives in this struct and mutates
//! synchronously inside the event calls; the host's event loop delivers
//! events serially and out-of-order anomalies are no-ops.

use std::mem;
use std::sync::Arc;

use log::debug;

use crate::error::Result;
use crate::gates::draft::Draft;
use crate::gates::region::{Region, RegionGeometry, RegionId};
use crate::gates::shapes::RenderShape;
use crate::gates::store::RegionCollection;
use crate::gates::styles::RegionStyle;

/// Which shape the next gesture will create, chosen by the host (e.g. via a
/// context menu) through [`GateEditor::arm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Rectangle,
    Ellipse,
    Polygon,
    /// `chained = false`: exactly two clicks commit one segment.
    /// `chained = true`: every click after the first commits a segment and
    /// keeps chaining until explicitly finished.
    Line { chained: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
}

/// Outbound notifications, returned from the event calls.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    Committed(RegionId),
    SelectionChanged(Option<RegionId>),
    Removed(Region),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Both extents of a rubber-band draft must exceed this for the release
    /// to commit a region.
    pub min_commit_size: f32,
    /// Floor applied to the live draft's extents so an early drag never
    /// renders a degenerate shape.
    pub min_draft_size: f32,
    /// A polygon click within this manhattan distance of the first vertex
    /// closes the loop.
    pub close_distance: f32,
    /// Rectangular tolerance for click-select hit-testing.
    pub hit_tolerance: (f32, f32),
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            min_commit_size: 5.0,
            min_draft_size: 1.0,
            close_distance: 20.0,
            hit_tolerance: (5.0, 5.0),
        }
    }
}

enum DrawState {
    Idle,
    /// Rubber-band drag for a rectangle or ellipse.
    Dragging { anchor: (f32, f32), draft: Draft },
    /// Click-chain for a polygon, open until closed or cancelled.
    PolygonChain {
        vertices: Vec<(f32, f32)>,
        cursor: Option<(f32, f32)>,
    },
    /// Click-chain for line segments.
    LineChain {
        chained: bool,
        last: (f32, f32),
        cursor: Option<(f32, f32)>,
    },
}

pub struct GateEditor {
    config: EditorConfig,
    armed: Option<Tool>,
    state: DrawState,
    regions: RegionCollection,
    next_serial: u64,
}

impl Default for GateEditor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl GateEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            armed: None,
            state: DrawState::Idle,
            regions: RegionCollection::new(),
            next_serial: 0,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn regions(&self) -> &RegionCollection {
        &self.regions
    }

    pub fn regions_mut(&mut self) -> &mut RegionCollection {
        &mut self.regions
    }

    pub fn armed(&self) -> Option<Tool> {
        self.armed
    }

    /// Choose the shape the next gesture creates. Re-arming mid-gesture
    /// discards the active draft.
    pub fn arm(&mut self, tool: Tool) {
        self.abort_drawing();
        self.armed = Some(tool);
    }

    pub fn disarm(&mut self) {
        self.abort_drawing();
    }

    /// Discard any in-flight draft and return to idle, e.g. when the host
    /// loses pointer capture mid-gesture.
    pub fn abort_drawing(&mut self) {
        if !matches!(self.state, DrawState::Idle) {
            debug!("drawing aborted, draft discarded");
        }
        self.state = DrawState::Idle;
        self.armed = None;
    }

    pub fn is_drawing(&self) -> bool {
        !matches!(self.state, DrawState::Idle)
    }

    pub fn press(&mut self, point: (f32, f32), button: Button) -> Vec<EditorEvent> {
        let state = mem::replace(&mut self.state, DrawState::Idle);
        match state {
            DrawState::Idle => self.press_idle(point, button),
            DrawState::PolygonChain { vertices, cursor } => {
                self.polygon_click(vertices, cursor, point, button)
            }
            DrawState::LineChain {
                chained,
                last,
                cursor,
            } => self.line_click(chained, last, cursor, point, button),
            dragging @ DrawState::Dragging { .. } => {
                // A second press mid-drag is an anomaly; keep the drag.
                self.state = dragging;
                vec![]
            }
        }
    }

    pub fn pointer_move(&mut self, point: (f32, f32)) {
        match &mut self.state {
            DrawState::Idle => {}
            DrawState::Dragging { anchor, draft } => {
                let (origin, size) = rubber_band(*anchor, point, self.config.min_draft_size);
                match draft {
                    Draft::Rectangle { origin: o, size: s } | Draft::Ellipse { origin: o, size: s } => {
                        *o = origin;
                        *s = size;
                    }
                    _ => {}
                }
            }
            DrawState::PolygonChain { cursor, .. } | DrawState::LineChain { cursor, .. } => {
                *cursor = Some(point);
            }
        }
    }

    pub fn release(&mut self, point: (f32, f32), button: Button) -> Vec<EditorEvent> {
        if button != Button::Left {
            return vec![];
        }
        let state = mem::replace(&mut self.state, DrawState::Idle);
        match state {
            DrawState::Dragging { anchor, draft } => {
                let ellipse = matches!(draft, Draft::Ellipse { .. });
                self.armed = None;
                let (origin, size) = bounding_box(anchor, point);
                if size.0 > self.config.min_commit_size && size.1 > self.config.min_commit_size {
                    let geometry = if ellipse {
                        RegionGeometry::Ellipse { origin, size }
                    } else {
                        RegionGeometry::Rectangle { origin, size }
                    };
                    vec![self.commit(geometry)]
                } else {
                    debug!("draft below minimum size {size:?}, discarded");
                    vec![]
                }
            }
            // Release is only meaningful for rubber-band drags; put any
            // other state back. A release with no preceding press is a no-op.
            other => {
                self.state = other;
                vec![]
            }
        }
    }

    /// Explicit finish action: closes an open polygon (once >= 3 vertices
    /// exist) or ends a line chain. Equivalent to a right-click.
    pub fn finish(&mut self) -> Vec<EditorEvent> {
        let state = mem::replace(&mut self.state, DrawState::Idle);
        match state {
            DrawState::PolygonChain { vertices, cursor } => self.close_polygon(vertices, cursor),
            DrawState::LineChain { .. } => {
                self.armed = None;
                vec![]
            }
            other => {
                self.state = other;
                vec![]
            }
        }
    }

    /// Programmatic selection; pass `None` to clear.
    pub fn select(&mut self, id: Option<&RegionId>) -> Result<Vec<EditorEvent>> {
        let changed = self.regions.select(id)?;
        if changed {
            Ok(vec![EditorEvent::SelectionChanged(
                self.regions.selected_id().cloned(),
            )])
        } else {
            Ok(vec![])
        }
    }

    pub fn remove_region(&mut self, id: &RegionId) -> Vec<EditorEvent> {
        let was_selected = self.regions.selected_id() == Some(id);
        match self.regions.remove(id) {
            Some(region) => {
                let mut events = vec![EditorEvent::Removed(region)];
                if was_selected {
                    events.push(EditorEvent::SelectionChanged(None));
                }
                events
            }
            None => vec![],
        }
    }

    /// Shapes of the active draft only.
    pub fn draft_shapes(&self) -> Vec<RenderShape> {
        match &self.state {
            DrawState::Idle => vec![],
            DrawState::Dragging { draft, .. } => draft.shapes(),
            DrawState::PolygonChain { vertices, cursor } => Draft::Polygon {
                vertices: vertices.clone(),
                rubber: *cursor,
            }
            .shapes(),
            DrawState::LineChain { last, cursor, .. } => Draft::Line {
                last: *last,
                rubber: *cursor,
            }
            .shapes(),
        }
    }

    /// The full scene: every committed region followed by the draft.
    pub fn shapes(&self) -> Vec<RenderShape> {
        let mut shapes: Vec<RenderShape> = self
            .regions
            .iter()
            .flat_map(|region| region.shapes(None))
            .collect();
        shapes.extend(self.draft_shapes());
        shapes
    }

    fn press_idle(&mut self, point: (f32, f32), button: Button) -> Vec<EditorEvent> {
        if button != Button::Left {
            return vec![];
        }
        match self.armed {
            Some(tool @ (Tool::Rectangle | Tool::Ellipse)) => {
                let (origin, size) = rubber_band(point, point, self.config.min_draft_size);
                let draft = if tool == Tool::Ellipse {
                    Draft::Ellipse { origin, size }
                } else {
                    Draft::Rectangle { origin, size }
                };
                self.state = DrawState::Dragging {
                    anchor: point,
                    draft,
                };
                vec![]
            }
            Some(Tool::Polygon) => {
                self.state = DrawState::PolygonChain {
                    vertices: vec![point],
                    cursor: None,
                };
                vec![]
            }
            Some(Tool::Line { chained }) => {
                self.state = DrawState::LineChain {
                    chained,
                    last: point,
                    cursor: None,
                };
                vec![]
            }
            None => {
                // Unarmed click: selection.
                let hit = self.regions.hit_test(point, self.config.hit_tolerance);
                let changed = self.regions.select(hit.as_ref()).unwrap_or(false);
                if changed {
                    vec![EditorEvent::SelectionChanged(
                        self.regions.selected_id().cloned(),
                    )]
                } else {
                    vec![]
                }
            }
        }
    }

    fn polygon_click(
        &mut self,
        mut vertices: Vec<(f32, f32)>,
        cursor: Option<(f32, f32)>,
        point: (f32, f32),
        button: Button,
    ) -> Vec<EditorEvent> {
        if button == Button::Right {
            return self.close_polygon(vertices, cursor);
        }
        let first = vertices[0];
        let closing = vertices.len() >= 3
            && manhattan(point, first) < self.config.close_distance;
        if closing {
            return self.close_polygon(vertices, cursor);
        }
        vertices.push(point);
        self.state = DrawState::PolygonChain { vertices, cursor };
        vec![]
    }

    fn close_polygon(
        &mut self,
        vertices: Vec<(f32, f32)>,
        cursor: Option<(f32, f32)>,
    ) -> Vec<EditorEvent> {
        if vertices.len() < 3 {
            // Not enough vertices to close; stay in creation mode.
            self.state = DrawState::PolygonChain { vertices, cursor };
            return vec![];
        }
        self.armed = None;
        vec![self.commit(RegionGeometry::Polygon {
            vertices,
            closed: true,
        })]
    }

    fn line_click(
        &mut self,
        chained: bool,
        last: (f32, f32),
        cursor: Option<(f32, f32)>,
        point: (f32, f32),
        button: Button,
    ) -> Vec<EditorEvent> {
        if button == Button::Right {
            self.armed = None;
            return vec![];
        }
        let event = self.commit(RegionGeometry::LineSegment {
            points: vec![last, point],
        });
        if chained {
            self.state = DrawState::LineChain {
                chained,
                last: point,
                cursor,
            };
        } else {
            self.armed = None;
        }
        vec![event]
    }

    fn commit(&mut self, geometry: RegionGeometry) -> EditorEvent {
        let kind = geometry.kind();
        let id: RegionId = Arc::from(format!("gate-{}", self.next_serial));
        self.next_serial += 1;
        debug!("committed {kind:?} region {id}");
        self.regions
            .insert(Region::new(id.clone(), geometry, RegionStyle::for_kind(kind)));
        EditorEvent::Committed(id)
    }
}

/// Axis-aligned box between `anchor` and `cursor`, each extent floored at
/// `min_size` so the draft never degenerates mid-drag.
fn rubber_band(
    anchor: (f32, f32),
    cursor: (f32, f32),
    min_size: f32,
) -> ((f32, f32), (f32, f32)) {
    let origin = (anchor.0.min(cursor.0), anchor.1.min(cursor.1));
    let size = (
        (cursor.0 - anchor.0).abs().max(min_size),
        (cursor.1 - anchor.1).abs().max(min_size),
    );
    (origin, size)
}

fn bounding_box(anchor: (f32, f32), cursor: (f32, f32)) -> ((f32, f32), (f32, f32)) {
    let origin = (anchor.0.min(cursor.0), anchor.1.min(cursor.1));
    let size = ((cursor.0 - anchor.0).abs(), (cursor.1 - anchor.1).abs());
    (origin, size)
}

fn manhattan(a: (f32, f32), b: (f32, f32)) -> f32 {
    (a.0 - b.0).abs() + (a.1 - b.1).abs()
}

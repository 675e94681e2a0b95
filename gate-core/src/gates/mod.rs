//! Region editor: drag-to-create gates, selection, and gating queries.

pub mod draft;
pub mod drag;
pub mod editor;
pub mod region;
pub mod shape;
pub mod shapes;
pub mod store;
pub mod styles;

pub use draft::Draft;
pub use drag::{DragData, PointDragData};
pub use editor::{Button, EditorConfig, EditorEvent, GateEditor, Tool};
pub use region::{Region, RegionGeometry, RegionId, RegionKind};
pub use shapes::{RenderShape, ShapeRole};
pub use store::RegionCollection;
pub use styles::{Color, DrawingStyle, HandleStyle, RegionStyle};

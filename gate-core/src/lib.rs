//! Interactive gating core for 2D data plots.
//!
//! Two independent components behind narrow interfaces:
//!
//! - [`gates`]: a region ("gate") editor that turns pointer events into
//!   committed rectangle/ellipse/polygon/line regions, with selection,
//!   handle resize and point-containment queries for data filtering.
//! - [`scale`]: a pure tick engine for linear, logarithmic, linear-then-log
//!   and symmetric-log axes, plus axis value transforms.
//!
//! The host owns rendering and raw input: it translates device coordinates
//! into data space, feeds `press`/`move`/`release`, and draws the
//! [`RenderShape`](gates::RenderShape) values and tick sets it gets back.

pub mod error;
pub mod gates;
pub mod macros;
pub mod scale;

pub use error::{GateError, Result};
pub use gates::{
    Button, EditorConfig, EditorEvent, GateEditor, Region, RegionCollection, RegionGeometry,
    RegionId, RegionKind, RenderShape, Tool,
};
pub use scale::{AxisScale, ScaleMode, Tick, TickSet, compute_ticks};

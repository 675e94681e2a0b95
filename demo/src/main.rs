//! Terminal walkthrough of the gating core: simulates the pointer gestures a
//! plot viewport would deliver, gates synthetic scatter data, and prints
//! tick tables for the non-linear axis modes.

use anyhow::Result;
use log::info;

use gate_core::gates::{Button, GateEditor, Tool};
use gate_core::scale::{self, AxisScale, ScaleMode, TickSet};

/// Two gaussian-ish clusters, like a scatter gating demo: one around
/// (100, 100), one around (300, 300).
fn synthetic_clusters(seed: u32, per_cluster: usize) -> Vec<(f32, f32)> {
    let mut rng = XorShift::new(seed);
    let mut points = Vec::with_capacity(per_cluster * 2);
    for _ in 0..per_cluster {
        points.push((
            100.0 + 30.0 * rng.next_gaussian(),
            100.0 + 30.0 * rng.next_gaussian(),
        ));
    }
    for _ in 0..per_cluster {
        points.push((
            300.0 + 50.0 * rng.next_gaussian(),
            300.0 + 50.0 * rng.next_gaussian(),
        ));
    }
    points
}

struct XorShift {
    state: u32,
}

impl XorShift {
    fn new(seed: u32) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    fn next_unit(&mut self) -> f32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        (self.state >> 8) as f32 / (1 << 24) as f32
    }

    /// Box-Muller, one variate per call.
    fn next_gaussian(&mut self) -> f32 {
        let u1 = self.next_unit().max(1e-7);
        let u2 = self.next_unit();
        (-2.0 * u1.ln()).sqrt() * (std::f32::consts::TAU * u2).cos()
    }
}

fn print_ticks(name: &str, ticks: &TickSet) {
    let majors: Vec<String> = ticks
        .major
        .iter()
        .map(|t| format!("{} ({})", t.position, t.label))
        .collect();
    println!("{name}");
    println!("  major: {}", majors.join(", "));
    println!("  minor: {} positions", ticks.minor.len());
}

fn main() -> Result<()> {
    env_logger::init();

    let points = synthetic_clusters(42, 500);
    let mut editor = GateEditor::default();

    // Rubber-band a rectangle gate around the first cluster.
    editor.arm(Tool::Rectangle);
    editor.press((20.0, 20.0), Button::Left);
    editor.pointer_move((180.0, 180.0));
    let events = editor.release((180.0, 180.0), Button::Left);
    info!("rectangle gesture events: {events:?}");

    // Click out a triangle gate around the second cluster.
    editor.arm(Tool::Polygon);
    editor.press((180.0, 180.0), Button::Left);
    editor.press((450.0, 180.0), Button::Left);
    editor.press((300.0, 480.0), Button::Left);
    let events = editor.finish();
    info!("polygon gesture events: {events:?}");

    for region in editor.regions().iter() {
        let inside = editor.regions().count_inside(&region.id(), &points)?;
        println!(
            "{}: {:?} gate, {inside}/{} points inside",
            region.id(),
            region.kind(),
            points.len()
        );
    }

    println!();
    print_ticks(
        "linear-then-log, [0, 1e6], threshold 100:",
        &AxisScale::with_threshold(ScaleMode::LinearThenLog, 100.0).compute_ticks(0.0, 1.0e6),
    );
    print_ticks(
        "symmetric log, [-1e4, 1e4], threshold 100:",
        &AxisScale::with_threshold(ScaleMode::SymmetricLog, 100.0).compute_ticks(-1.0e4, 1.0e4),
    );
    print_ticks(
        "logarithmic, [1, 1e8]:",
        &AxisScale::new(ScaleMode::Logarithmic).compute_ticks(1.0, 1.0e8),
    );
    print_ticks(
        "wavelength-indexed:",
        &scale::indexed_ticks(&["371nm", "382nm", "393nm", "404nm", "415nm"]),
    );

    Ok(())
}

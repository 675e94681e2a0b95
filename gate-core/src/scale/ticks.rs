//! Tick position generation for the supported scale modes.

use super::labels::format_tick;
use super::transform::LOG_EPSILON;
use super::{ScaleMode, Tick, TickSet};

/// Compute major/minor ticks for the visible range `[visible_min,
/// visible_max]` under `mode` with the given linear threshold.
///
/// A degenerate range (`max <= min`) yields empty tick sets. A non-positive
/// threshold substitutes pure logarithmic behavior regardless of mode.
pub fn compute_ticks(
    visible_min: f32,
    visible_max: f32,
    mode: ScaleMode,
    threshold: f32,
) -> TickSet {
    if !(visible_max > visible_min) {
        return TickSet::default();
    }
    let mode = if threshold <= 0.0 {
        ScaleMode::Logarithmic
    } else {
        mode
    };

    let mut major: Vec<f32> = vec![];
    let mut minor: Vec<f32> = vec![];

    match mode {
        ScaleMode::Linear => {
            linear_region(
                visible_min,
                visible_max,
                0.0,
                threshold,
                threshold,
                &mut major,
                &mut minor,
            );
        }
        ScaleMode::Logarithmic => {
            decade_region(visible_min, visible_max, 0.0, &mut major, &mut minor);
        }
        ScaleMode::LinearThenLog => {
            linear_region(
                visible_min,
                visible_max,
                0.0,
                threshold,
                threshold,
                &mut major,
                &mut minor,
            );
            // The boundary itself is always a major tick when visible.
            if visible_min <= threshold && threshold <= visible_max {
                major.push(threshold);
            }
            decade_region(visible_min, visible_max, threshold, &mut major, &mut minor);
        }
        ScaleMode::SymmetricLog => {
            linear_region(
                visible_min,
                visible_max,
                -threshold,
                threshold,
                threshold,
                &mut major,
                &mut minor,
            );
            symlog_side(visible_min, visible_max, threshold, false, &mut major, &mut minor);
            symlog_side(visible_min, visible_max, threshold, true, &mut major, &mut minor);
        }
    }

    finalize(major, minor)
}

/// Multiples of `step` inside `[lo, hi]`.
fn spaced_multiples(lo: f32, hi: f32, step: f32, out: &mut Vec<f32>) {
    if step <= 0.0 {
        return;
    }
    let k_start = (lo / step).floor() as i64 - 1;
    let k_end = (hi / step).ceil() as i64 + 1;
    for k in k_start..=k_end {
        let v = k as f32 * step;
        if v >= lo && v <= hi {
            out.push(v);
        }
    }
}

/// Evenly spaced ticks over the intersection of the visible range with
/// `[region_lo, region_hi]`: majors every threshold/5, minors every
/// threshold/20.
fn linear_region(
    visible_min: f32,
    visible_max: f32,
    region_lo: f32,
    region_hi: f32,
    threshold: f32,
    major: &mut Vec<f32>,
    minor: &mut Vec<f32>,
) {
    let lo = visible_min.max(region_lo);
    let hi = visible_max.min(region_hi);
    if hi < lo {
        return;
    }
    spaced_multiples(lo, hi, threshold / 5.0, major);
    spaced_multiples(lo, hi, threshold / 20.0, minor);
}

/// Decade ticks strictly above `floor_value`: majors at powers of ten,
/// minors at {2..9} x 10^k. Values <= 0 in the visible range are clamped to
/// a small epsilon, so a fully non-positive range simply produces nothing.
fn decade_region(
    visible_min: f32,
    visible_max: f32,
    floor_value: f32,
    major: &mut Vec<f32>,
    minor: &mut Vec<f32>,
) {
    let lo = visible_min.max(LOG_EPSILON);
    if visible_max < lo {
        return;
    }
    let k_min = lo.log10().floor() as i32 - 1;
    let k_max = visible_max.log10().ceil() as i32 + 1;
    for k in k_min..=k_max {
        let decade = 10f32.powi(k);
        if decade >= lo && decade <= visible_max && decade > floor_value {
            major.push(decade);
        }
        for m in 2..=9 {
            let v = m as f32 * decade;
            if v >= lo && v <= visible_max && v > floor_value {
                minor.push(v);
            }
        }
    }
}

/// One side of the symmetric-log construction: decade ticks of magnitude
/// >= threshold, mirrored onto the negative axis when `negative`.
fn symlog_side(
    visible_min: f32,
    visible_max: f32,
    threshold: f32,
    negative: bool,
    major: &mut Vec<f32>,
    minor: &mut Vec<f32>,
) {
    let mag_hi = if negative { -visible_min } else { visible_max };
    if mag_hi < threshold {
        return;
    }
    let k_min = threshold.log10().floor() as i32 - 1;
    let k_max = mag_hi.log10().ceil() as i32 + 1;
    for k in k_min..=k_max {
        let decade = 10f32.powi(k);
        for m in 1..=9 {
            let magnitude = m as f32 * decade;
            if magnitude < threshold {
                continue;
            }
            let v = if negative { -magnitude } else { magnitude };
            if v >= visible_min && v <= visible_max {
                if m == 1 {
                    major.push(v);
                } else {
                    minor.push(v);
                }
            }
        }
    }
}

/// Sort, dedup, drop minors shadowed by majors, and attach labels.
fn finalize(mut major: Vec<f32>, mut minor: Vec<f32>) -> TickSet {
    major.sort_by(f32::total_cmp);
    major.dedup();
    minor.sort_by(f32::total_cmp);
    minor.dedup();
    minor.retain(|m| major.binary_search_by(|probe| probe.total_cmp(m)).is_err());

    TickSet {
        major: major
            .into_iter()
            .map(|position| Tick {
                position,
                label: format_tick(position),
            })
            .collect(),
        minor: minor
            .into_iter()
            .map(|position| Tick {
                position,
                label: String::new(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sorted_and_in_range(ticks: &TickSet, min: f32, max: f32) {
        for seq in [&ticks.major, &ticks.minor] {
            for pair in seq.windows(2) {
                assert!(pair[0].position < pair[1].position);
            }
            for t in seq.iter() {
                assert!(
                    t.position >= min && t.position <= max,
                    "tick {} outside [{min}, {max}]",
                    t.position
                );
            }
        }
    }

    fn assert_disjoint(ticks: &TickSet) {
        for m in ticks.minor.iter() {
            assert!(
                !ticks.major.iter().any(|t| t.position == m.position),
                "position {} is both major and minor",
                m.position
            );
        }
    }

    #[test]
    fn linear_short_range_has_only_zero_major() {
        let ticks = compute_ticks(0.0, 10.0, ScaleMode::Linear, 100.0);
        assert_eq!(ticks.major_positions(), vec![0.0]);
        // threshold/20 = 5 spacing fills in the minors.
        assert_eq!(ticks.minor_positions(), vec![5.0, 10.0]);
        assert_disjoint(&ticks);
    }

    #[test]
    fn linear_then_log_majors_cover_both_regimes() {
        let ticks = compute_ticks(0.0, 1000.0, ScaleMode::LinearThenLog, 100.0);
        assert_eq!(
            ticks.major_positions(),
            vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 1000.0]
        );
        assert_sorted_and_in_range(&ticks, 0.0, 1000.0);
        assert_disjoint(&ticks);

        // Log-regime minors sit strictly above the threshold.
        let log_minors: Vec<f32> = ticks
            .minor_positions()
            .into_iter()
            .filter(|p| *p > 100.0)
            .collect();
        assert_eq!(
            log_minors,
            vec![200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0]
        );
    }

    #[test]
    fn threshold_boundary_is_major_even_off_grid() {
        // Range starts above every linear multiple except the boundary.
        let ticks = compute_ticks(95.0, 150.0, ScaleMode::LinearThenLog, 100.0);
        assert!(ticks.major_positions().contains(&100.0));
        assert_sorted_and_in_range(&ticks, 95.0, 150.0);
    }

    #[test]
    fn pure_log_decades_and_mantissa_minors() {
        let ticks = compute_ticks(1.0, 1000.0, ScaleMode::Logarithmic, 100.0);
        assert_eq!(ticks.major_positions(), vec![1.0, 10.0, 100.0, 1000.0]);
        let minors = ticks.minor_positions();
        assert!(minors.contains(&2.0));
        assert!(minors.contains(&20.0));
        assert!(minors.contains(&900.0));
        assert_eq!(minors.len(), 8 * 3);
        assert_disjoint(&ticks);
    }

    #[test]
    fn log_clamps_non_positive_minimum() {
        let ticks = compute_ticks(-50.0, 100.0, ScaleMode::Logarithmic, 100.0);
        assert!(!ticks.major.is_empty());
        for t in ticks.major.iter() {
            assert!(t.position > 0.0);
        }
    }

    #[test]
    fn non_positive_threshold_degenerates_to_log() {
        let with_zero = compute_ticks(1.0, 1000.0, ScaleMode::LinearThenLog, 0.0);
        let log = compute_ticks(1.0, 1000.0, ScaleMode::Logarithmic, 100.0);
        assert_eq!(with_zero, log);
    }

    #[test]
    fn degenerate_range_yields_no_ticks() {
        assert!(compute_ticks(10.0, 10.0, ScaleMode::Linear, 100.0).is_empty());
        assert!(compute_ticks(10.0, 5.0, ScaleMode::LinearThenLog, 100.0).is_empty());
    }

    #[test]
    fn symmetric_log_mirrors_decades() {
        let ticks = compute_ticks(-1000.0, 1000.0, ScaleMode::SymmetricLog, 100.0);
        let majors = ticks.major_positions();
        assert!(majors.contains(&-1000.0));
        assert!(majors.contains(&1000.0));
        assert!(majors.contains(&-100.0));
        assert!(majors.contains(&100.0));
        assert!(majors.contains(&0.0));

        let minors = ticks.minor_positions();
        assert!(minors.contains(&-200.0));
        assert!(minors.contains(&200.0));
        // Central linear minors at threshold/20.
        assert!(minors.contains(&-5.0));
        assert!(minors.contains(&5.0));

        assert_sorted_and_in_range(&ticks, -1000.0, 1000.0);
        assert_disjoint(&ticks);
    }

    #[test]
    fn compute_ticks_is_idempotent() {
        let a = compute_ticks(-250.0, 5.0e6, ScaleMode::SymmetricLog, 100.0);
        let b = compute_ticks(-250.0, 5.0e6, ScaleMode::SymmetricLog, 100.0);
        assert_eq!(a, b);

        let a = compute_ticks(0.3, 873.0, ScaleMode::LinearThenLog, 100.0);
        let b = compute_ticks(0.3, 873.0, ScaleMode::LinearThenLog, 100.0);
        assert_eq!(a, b);
        assert_sorted_and_in_range(&a, 0.3, 873.0);
        assert_disjoint(&a);
    }

    #[test]
    fn minor_labels_are_empty_major_labels_are_not() {
        let ticks = compute_ticks(0.0, 1000.0, ScaleMode::LinearThenLog, 100.0);
        assert!(ticks.major.iter().all(|t| !t.label.is_empty()));
        assert!(ticks.minor.iter().all(|t| t.label.is_empty()));
    }
}

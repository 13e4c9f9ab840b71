//! Temporal shot histogram with dynamically chosen bin width.

use serde::{Deserialize, Serialize};

use crate::models::ShotRecord;

/// One `[t, t_next)` minute window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineBin {
    pub t: f64,
    pub t_next: f64,
    pub count: usize,
    pub goals: usize,
    /// Sum of expected goals inside the window.
    pub xg: f64,
}

/// The full histogram plus the normalization ceiling consumers divide by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub bins: Vec<TimelineBin>,
    /// `max(bin.xg)` across all bins, floored at `0.5`.
    pub max_val: f64,
}

/// Pick the bin width for the selected span.
fn bin_width(duration: f64) -> f64 {
    if duration > 90.0 {
        5.0
    } else if duration > 45.0 {
        3.0
    } else if duration > 20.0 {
        2.0
    } else {
        1.0
    }
}

/// Tile `[start, end)` with consecutive bins and aggregate the filtered shots
/// into them.
///
/// The final bin is clipped to `end`, so the bins cover the window exactly
/// with no gaps or overlaps.
pub fn build_timeline(shots: &[&ShotRecord], time_range: [f64; 2]) -> Timeline {
    let [start, end] = time_range;
    let duration = (end - start).max(1.0);
    let width = bin_width(duration);

    let mut bins = Vec::new();
    let mut max_val = 0.0f64;

    let mut t = start;
    while t < end {
        let t_next = (t + width).min(end);

        let mut count = 0;
        let mut goals = 0;
        let mut xg = 0.0;
        for shot in shots {
            if shot.minute >= t && shot.minute < t_next {
                count += 1;
                xg += shot.xg;
                if shot.is_goal() {
                    goals += 1;
                }
            }
        }

        if xg > max_val {
            max_val = xg;
        }
        bins.push(TimelineBin { t, t_next, count, goals, xg });
        t += width;
    }

    Timeline { bins, max_val: max_val.max(0.5) }
}

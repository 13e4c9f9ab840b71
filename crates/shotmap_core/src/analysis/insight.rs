//! Qualitative summary of the current selection.
//!
//! Threshold rules are applied to the same rounded values the display shows
//! (balance at two decimals, accuracy at one), so the sentence never
//! contradicts the numbers next to it.

use crate::models::{ShotRecord, ShotStats};

const MSG_OVER_PERFORMANCE: &str = "Offensive output above expectation (goals exceed xG).";
const MSG_UNDER_PERFORMANCE: &str = "Finishing below expectation (goals trail xG).";
const MSG_ALIGNED: &str = "Goal conversion aligned with the statistical expectation.";
const MSG_HIGH_PRECISION: &str = "High precision on shots at goal.";
const MSG_LOW_PRECISION: &str = "Struggling to hit the target.";
const MSG_HARD_SAVES: &str = "The opposing keeper produced difficult saves.";

fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Derive a 1-3 sentence summary from the current statistics and the
/// filtered record set. Sentences are joined by single spaces in fixed order:
/// balance verdict, precision verdict (optional), difficult saves (optional).
pub fn generate_insight(current: &ShotStats, filtered: &[&ShotRecord]) -> String {
    let balance = round_to(current.balance, 2);
    let accuracy = round_to(current.accuracy_pct, 1);

    let mut messages = Vec::with_capacity(3);

    if balance > 0.5 {
        messages.push(MSG_OVER_PERFORMANCE);
    } else if balance < -0.5 {
        messages.push(MSG_UNDER_PERFORMANCE);
    } else {
        messages.push(MSG_ALIGNED);
    }

    if accuracy > 40.0 {
        messages.push(MSG_HIGH_PRECISION);
    } else if accuracy < 25.0 {
        messages.push(MSG_LOW_PRECISION);
    }

    if filtered.iter().any(|s| s.xgot > 0.7 && !s.is_goal()) {
        messages.push(MSG_HARD_SAVES);
    }

    messages.join(" ")
}

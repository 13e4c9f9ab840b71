//! Base/current statistics aggregation.

use crate::analysis::filters::in_base_set;
use crate::models::{FilterSelection, ShotRecord, ShotStats, StatsPair};

/// Compute base (filters minus category toggles) and current (filters plus
/// category toggles) statistics in one pass over the record set.
///
/// Both blocks use the base-set size as the accuracy denominator.
pub fn compute_stats(records: &[ShotRecord], sel: &FilterSelection) -> StatsPair {
    let base: Vec<&ShotRecord> = records.iter().filter(|r| in_base_set(r, sel)).collect();
    let current: Vec<&ShotRecord> = base
        .iter()
        .copied()
        .filter(|r| sel.categories.enabled(r.category()))
        .collect();
    let base_total = base.len();

    StatsPair {
        base: aggregate(&base, base_total),
        current: aggregate(&current, base_total),
    }
}

/// Aggregate one shot set. Empty input yields all-zero statistics rather
/// than a division error.
pub fn aggregate(shots: &[&ShotRecord], base_total: usize) -> ShotStats {
    if shots.is_empty() {
        return ShotStats::default();
    }

    let goals = shots.iter().filter(|s| s.is_goal()).count();
    let xg: f64 = shots.iter().map(|s| s.xg).sum();
    let xgot: f64 = shots.iter().map(|s| s.xgot).sum();
    let on_target = shots.iter().filter(|s| s.xgot > 0.0).count();

    ShotStats {
        total: shots.len(),
        goals,
        xg,
        xgot,
        placement: xgot - xg,
        balance: goals as f64 - xg,
        accuracy_pct: if base_total > 0 {
            on_target as f64 / base_total as f64 * 100.0
        } else {
            0.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShotCategory;

    fn shot(event_type: &str, xg: f64, xgot: f64) -> ShotRecord {
        ShotRecord {
            id: "0".to_string(),
            match_id: "1".to_string(),
            round: None,
            home_team: "Home".to_string(),
            away_team: "Away".to_string(),
            team: "A".to_string(),
            player_name: "Ana".to_string(),
            x: 90.0,
            y: 34.0,
            minute: 30.0,
            xg,
            xgot,
            event_type: event_type.to_string(),
            situation: String::new(),
            body_part: String::new(),
            on_goal: None,
        }
    }

    #[test]
    fn test_goal_and_miss_aggregation() {
        let records = vec![shot("miss", 0.3, 0.0), shot("goal", 0.4, 0.6)];
        let stats = compute_stats(&records, &FilterSelection::default());
        assert_eq!(stats.base.goals, 1);
        assert_eq!(stats.base.display().xg, "0.70");
        assert_eq!(stats.base.display().balance, "0.30");
    }

    #[test]
    fn test_current_accuracy_uses_base_denominator() {
        // Base of four shots, two on target; hide misses and check the
        // denominator stays at four.
        let records = vec![
            shot("miss", 0.1, 0.0),
            shot("miss", 0.1, 0.0),
            shot("attempt_saved", 0.2, 0.3),
            shot("goal", 0.4, 0.8),
        ];
        let mut sel = FilterSelection::default();
        sel.categories.miss = false;
        let stats = compute_stats(&records, &sel);
        assert_eq!(stats.base.total, 4);
        assert_eq!(stats.current.total, 2);
        assert_eq!(stats.base.display().accuracy, "50.0%");
        assert_eq!(stats.current.display().accuracy, "50.0%");
    }

    #[test]
    fn test_empty_record_set_yields_zero_stats() {
        let stats = compute_stats(&[], &FilterSelection::default());
        assert_eq!(stats.base, ShotStats::default());
        assert_eq!(stats.current, ShotStats::default());
        assert_eq!(stats.base.display().accuracy, "0%");
    }

    #[test]
    fn test_category_routing_is_exhaustive_and_exclusive() {
        let shots = vec![
            shot("goal", 0.4, 0.0),
            shot("goal", 0.4, 0.9),
            shot("attempt_saved", 0.2, 0.5),
            shot("miss", 0.1, 0.0),
        ];
        for s in &shots {
            let buckets = [ShotCategory::Goal, ShotCategory::Target, ShotCategory::Miss];
            let hits = buckets.iter().filter(|&&b| s.category() == b).count();
            assert_eq!(hits, 1, "each shot maps to exactly one bucket");
        }
    }

    #[test]
    fn test_placement_and_balance() {
        let records = vec![shot("goal", 0.25, 0.75)];
        let stats = compute_stats(&records, &FilterSelection::default());
        assert_eq!(stats.base.display().placement, "0.50");
        assert_eq!(stats.base.display().balance, "0.75");
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let records = vec![shot("goal", 0.4, 0.6), shot("miss", 0.3, 0.0)];
        let sel = FilterSelection::default();
        assert_eq!(compute_stats(&records, &sel), compute_stats(&records, &sel));
    }
}

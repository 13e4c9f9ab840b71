//! Spatial shot-density grid over the attacking half.

use serde::{Deserialize, Serialize};

use crate::models::ShotRecord;
use crate::pitch::{field, grid};

/// One materialized grid cell. Only cells with at least one shot exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatZone {
    /// Cell origin and extent in pitch meters.
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub count: usize,
    /// `count / max(count over emitted cells)`, in `[0, 1]`.
    pub intensity: f64,
    pub avg_xg: f64,
    pub total_xg: f64,
    pub goals: usize,
}

/// Partition the filtered shots into the fixed 10x10 attacking-half grid.
///
/// Cell membership is half-open (`[x_min, x_max) x [y_min, y_max)`).
/// Intensity needs the global maximum count, so it is normalized in a second
/// pass once all cells are built.
pub fn build_heat_zones(shots: &[&ShotRecord]) -> Vec<HeatZone> {
    let mut zones = Vec::new();

    for col in 0..grid::COLS {
        for row in 0..grid::ROWS {
            let x_min = field::HALFWAY_X + col as f64 * grid::CELL_W;
            let x_max = x_min + grid::CELL_W;
            let y_min = row as f64 * grid::CELL_H;
            let y_max = y_min + grid::CELL_H;

            let mut count = 0;
            let mut total_xg = 0.0;
            let mut goals = 0;
            for shot in shots {
                if shot.x >= x_min && shot.x < x_max && shot.y >= y_min && shot.y < y_max {
                    count += 1;
                    total_xg += shot.xg;
                    if shot.is_goal() {
                        goals += 1;
                    }
                }
            }

            if count > 0 {
                zones.push(HeatZone {
                    x: x_min,
                    y: y_min,
                    w: grid::CELL_W,
                    h: grid::CELL_H,
                    count,
                    intensity: 0.0,
                    avg_xg: total_xg / count as f64,
                    total_xg,
                    goals,
                });
            }
        }
    }

    let max = zones.iter().map(|z| z.count).max().unwrap_or(0).max(1);
    for zone in &mut zones {
        zone.intensity = zone.count as f64 / max as f64;
    }
    zones
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shot_at(x: f64, y: f64, xg: f64, goal: bool) -> ShotRecord {
        ShotRecord {
            id: "0".to_string(),
            match_id: "1".to_string(),
            round: None,
            home_team: "Home".to_string(),
            away_team: "Away".to_string(),
            team: "A".to_string(),
            player_name: "Ana".to_string(),
            x,
            y,
            minute: 30.0,
            xg,
            xgot: 0.0,
            event_type: if goal { "goal" } else { "miss" }.to_string(),
            situation: String::new(),
            body_part: String::new(),
            on_goal: None,
        }
    }

    #[test]
    fn test_only_non_empty_cells_are_emitted() {
        let shots = vec![shot_at(95.0, 34.0, 0.2, false)];
        let refs: Vec<&ShotRecord> = shots.iter().collect();
        let zones = build_heat_zones(&refs);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].count, 1);
    }

    #[test]
    fn test_cell_aggregation() {
        // Two shots in the same cell, one a goal.
        let shots = vec![shot_at(95.0, 34.0, 0.2, false), shot_at(95.5, 34.5, 0.4, true)];
        let refs: Vec<&ShotRecord> = shots.iter().collect();
        let zones = build_heat_zones(&refs);
        assert_eq!(zones.len(), 1);
        let zone = &zones[0];
        assert_eq!(zone.count, 2);
        assert_eq!(zone.goals, 1);
        assert!((zone.total_xg - 0.6).abs() < 1e-9);
        assert!((zone.avg_xg - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_intensity_normalization() {
        let shots = vec![
            shot_at(95.0, 34.0, 0.2, false),
            shot_at(95.5, 34.5, 0.3, false),
            shot_at(60.0, 10.0, 0.05, false),
        ];
        let refs: Vec<&ShotRecord> = shots.iter().collect();
        let zones = build_heat_zones(&refs);
        assert!(zones.iter().all(|z| (0.0..=1.0).contains(&z.intensity)));
        let max_zone = zones.iter().max_by_key(|z| z.count).unwrap();
        assert_eq!(max_zone.intensity, 1.0);
    }

    #[test]
    fn test_cell_bounds_are_half_open() {
        // x = 57.75 sits exactly on the boundary between the first and
        // second columns and must land in the second.
        let shots = vec![shot_at(field::HALFWAY_X + grid::CELL_W, 0.0, 0.1, false)];
        let refs: Vec<&ShotRecord> = shots.iter().collect();
        let zones = build_heat_zones(&refs);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].x, field::HALFWAY_X + grid::CELL_W);
    }

    #[test]
    fn test_shot_on_far_goal_line_is_outside_grid() {
        let shots = vec![shot_at(field::LENGTH_M, 34.0, 0.1, false)];
        let refs: Vec<&ShotRecord> = shots.iter().collect();
        assert!(build_heat_zones(&refs).is_empty());
    }

    #[test]
    fn test_empty_input_yields_no_zones() {
        assert!(build_heat_zones(&[]).is_empty());
    }
}

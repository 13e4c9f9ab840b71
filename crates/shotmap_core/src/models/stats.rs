//! Aggregate shot statistics.

use serde::{Deserialize, Serialize};

/// Numeric aggregate statistics over one shot set.
///
/// `accuracy_pct` uses the *base*-set size as its denominator even when the
/// stats describe the category-filtered current set, so toggling categories
/// never inflates the on-target rate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShotStats {
    pub total: usize,
    pub goals: usize,
    /// Sum of expected goals.
    pub xg: f64,
    /// Sum of expected goals on target.
    pub xgot: f64,
    /// Finishing quality added beyond shot placement (`xGOT - xG`).
    pub placement: f64,
    /// Over/under-performance versus expectation (`goals - xG`).
    pub balance: f64,
    /// On-target shots over the base-set size, times 100. Zero for empty sets.
    pub accuracy_pct: f64,
}

impl ShotStats {
    /// Presentation strings: two decimals for the xG metrics, one decimal
    /// plus a `%` suffix for accuracy. Empty sets show a bare `0%`.
    pub fn display(&self) -> StatsDisplay {
        StatsDisplay {
            total: self.total,
            goals: self.goals,
            xg: format!("{:.2}", self.xg),
            xgot: format!("{:.2}", self.xgot),
            placement: format!("{:.2}", self.placement),
            balance: format!("{:.2}", self.balance),
            accuracy: if self.total == 0 {
                "0%".to_string()
            } else {
                format!("{:.1}%", self.accuracy_pct)
            },
        }
    }
}

/// Statistics formatted for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsDisplay {
    pub total: usize,
    pub goals: usize,
    pub xg: String,
    pub xgot: String,
    pub placement: String,
    pub balance: String,
    pub accuracy: String,
}

/// Statistics before (`base`) and after (`current`) the category toggles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsPair {
    pub base: ShotStats,
    pub current: ShotStats,
}

impl StatsPair {
    pub fn display(&self) -> StatsPairDisplay {
        StatsPairDisplay { base: self.base.display(), current: self.current.display() }
    }
}

/// Formatted counterpart of [`StatsPair`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsPairDisplay {
    pub base: StatsDisplay,
    pub current: StatsDisplay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats_display_defaults() {
        let display = ShotStats::default().display();
        assert_eq!(display.total, 0);
        assert_eq!(display.xg, "0.00");
        assert_eq!(display.balance, "0.00");
        assert_eq!(display.accuracy, "0%");
    }

    #[test]
    fn test_display_formatting() {
        let stats = ShotStats {
            total: 2,
            goals: 1,
            xg: 0.7,
            xgot: 0.85,
            placement: 0.15,
            balance: 0.3,
            accuracy_pct: 50.0,
        };
        let display = stats.display();
        assert_eq!(display.xg, "0.70");
        assert_eq!(display.xgot, "0.85");
        assert_eq!(display.placement, "0.15");
        assert_eq!(display.balance, "0.30");
        assert_eq!(display.accuracy, "50.0%");
    }
}

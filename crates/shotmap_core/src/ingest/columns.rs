//! Alias-driven column resolution.
//!
//! Exports arrive with arbitrary key spelling (a player column may appear as
//! `playerName`, `jogador`, or `fullName`). Each canonical field carries an
//! ordered list of accepted aliases; lookup trims and case-folds the row keys
//! and the first alias with a matching key wins.

use serde_json::{Map, Value};

/// Canonical fields a raw row can contribute to a [`crate::ShotRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    MatchId,
    Round,
    HomeTeam,
    AwayTeam,
    Team,
    PlayerName,
    X,
    Y,
    Minute,
    Xg,
    Xgot,
    EventType,
    Situation,
    BodyPart,
    OnGoalShot,
    OnGoalX,
    OnGoalY,
}

impl Column {
    /// Accepted aliases, in resolution priority order.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Column::Id => &["id"],
            Column::MatchId => &["matchId"],
            Column::Round => &["Rodada", "round"],
            Column::HomeTeam => &["homeTeam", "mandante"],
            Column::AwayTeam => &["awayTeam", "visitante"],
            Column::Team => &["Team", "teamName", "equipe"],
            Column::PlayerName => &["playerName", "fullName", "jogador"],
            Column::X => &["x"],
            Column::Y => &["y"],
            Column::Minute => &["min", "minuto"],
            Column::Xg => &["expectedGoals", "xG"],
            Column::Xgot => &["expectedGoalsOnTarget", "xGOT", "xgot"],
            Column::EventType => &["eventType"],
            Column::Situation => &["situation", "situação"],
            Column::BodyPart => &["bodyPart", "shotType", "parteDoCorpo", "part"],
            Column::OnGoalShot => &["onGoalShot", "on_goal_shot"],
            Column::OnGoalX => &["onGoalX", "goalCrossedY"],
            Column::OnGoalY => &["onGoalY", "goalCrossedZ"],
        }
    }
}

/// Resolve a canonical field from a raw row.
///
/// Row keys are trimmed and compared case-insensitively against each alias in
/// order; absence yields `None`.
pub fn resolve<'a>(row: &'a Map<String, Value>, column: Column) -> Option<&'a Value> {
    for alias in column.aliases() {
        let alias = alias.to_lowercase();
        for (key, value) in row {
            if key.trim().to_lowercase() == alias {
                return Some(value);
            }
        }
    }
    None
}

/// Resolve a field as a string, if present and representable.
///
/// Numbers and booleans take their decimal/literal string form; nulls are
/// treated as absent.
pub fn resolve_string(row: &Map<String, Value>, column: Column) -> Option<String> {
    match resolve(row, column)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_case_insensitive_trimmed_lookup() {
        let row = row(json!({ "  PLAYERNAME  ": "Ana" }));
        assert_eq!(resolve_string(&row, Column::PlayerName).as_deref(), Some("Ana"));
    }

    #[test]
    fn test_alias_priority_order() {
        let row = row(json!({ "jogador": "Beto", "fullName": "Beto Silva" }));
        // `fullName` precedes `jogador` in the alias list.
        assert_eq!(resolve_string(&row, Column::PlayerName).as_deref(), Some("Beto Silva"));
    }

    #[test]
    fn test_localized_aliases() {
        let row = row(json!({ "minuto": 37, "situação": "Penalty", "equipe": "Vasco" }));
        assert_eq!(resolve_string(&row, Column::Minute).as_deref(), Some("37"));
        assert_eq!(resolve_string(&row, Column::Situation).as_deref(), Some("Penalty"));
        assert_eq!(resolve_string(&row, Column::Team).as_deref(), Some("Vasco"));
    }

    #[test]
    fn test_absent_field_is_none() {
        let row = row(json!({ "unrelated": 1 }));
        assert!(resolve(&row, Column::Xg).is_none());
        assert!(resolve_string(&row, Column::Xg).is_none());
    }

    #[test]
    fn test_null_string_resolution_is_none() {
        let row = row(json!({ "eventType": null }));
        assert!(resolve(&row, Column::EventType).is_some());
        assert!(resolve_string(&row, Column::EventType).is_none());
    }
}

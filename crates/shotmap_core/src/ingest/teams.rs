//! Team-name canonicalization.
//!
//! The source sheets spell the same club several ways across seasons and
//! columns. A fixed alias table maps the known variants to one preferred
//! name; unknown names pass through unchanged.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static TEAM_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Red Bull Bragantino", "RB Bragantino"),
        ("Athletico Paranaense", "Athletico-PR"),
        ("Atlético Mineiro", "Atlético-MG"),
        ("Atlético Goianiense", "Atlético-GO"),
        ("America Mineiro", "América-MG"),
        ("América Mineiro", "América-MG"),
        ("Vasco da Gama", "Vasco"),
        ("Botafogo FR", "Botafogo"),
    ])
});

/// Placeholder when the home-team column is missing.
pub const HOME_PLACEHOLDER: &str = "Home";
/// Placeholder when the away-team column is missing.
pub const AWAY_PLACEHOLDER: &str = "Away";

/// Map a variant spelling to the preferred club name.
pub fn canonical_team_name(name: &str) -> &str {
    TEAM_ALIASES.get(name).copied().unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_variants_are_canonicalized() {
        assert_eq!(canonical_team_name("Red Bull Bragantino"), "RB Bragantino");
        assert_eq!(canonical_team_name("América Mineiro"), "América-MG");
        assert_eq!(canonical_team_name("Vasco da Gama"), "Vasco");
    }

    #[test]
    fn test_unknown_names_pass_through() {
        assert_eq!(canonical_team_name("Flamengo"), "Flamengo");
        assert_eq!(canonical_team_name(""), "");
    }
}

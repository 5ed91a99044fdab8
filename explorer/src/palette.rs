//! Fixed colour tables for chart series and graph nodes

/// Colour for any key missing from a table
pub const NEUTRAL_COLOR: &str = "#9e9e9e";

/// House → node colour
pub static HOUSE_COLORS: &[(&str, &str)] = &[
    ("House Atreides", "#2e7d32"),
    ("House Harkonnen", "#b71c1c"),
    ("House Corrino", "#f9a825"),
    ("House Ordos", "#6a1b9a"),
    ("House Vernius", "#1565c0"),
    ("House Richese", "#00838f"),
    ("House Ecaz", "#558b2f"),
    ("House Moritani", "#4e342e"),
    ("Fremen", "#e65100"),
    ("Bene Gesserit", "#283593"),
    ("Spacing Guild", "#37474f"),
    ("Bene Tleilax", "#827717"),
];

/// Relationship type → edge colour
pub static RELATIONSHIP_COLORS: &[(&str, &str)] = &[
    ("Parent", "#1e88e5"),
    ("Child", "#42a5f5"),
    ("Sibling", "#8e24aa"),
    ("Spouse", "#d81b60"),
    ("Concubine", "#f06292"),
    ("Ally", "#43a047"),
    ("Enemy", "#e53935"),
    ("Mentor", "#fb8c00"),
    ("Servant", "#6d4c41"),
];

fn lookup(table: &[(&str, &'static str)], key: &str) -> &'static str {
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, color)| *color)
        .unwrap_or(NEUTRAL_COLOR)
}

pub fn house_color(house: &str) -> &'static str {
    lookup(HOUSE_COLORS, house)
}

pub fn relationship_color(relationship: &str) -> &'static str {
    lookup(RELATIONSHIP_COLORS, relationship)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_fallback() {
        assert_eq!(house_color("House Atreides"), "#2e7d32");
        assert_eq!(house_color("Unknown"), NEUTRAL_COLOR);
        assert_eq!(relationship_color("Enemy"), "#e53935");
        assert_eq!(relationship_color("Rival"), NEUTRAL_COLOR);
    }
}

// =============================================================================
// catalog/mod.rs - Catalogue de couleurs nommées
// catalog/mod.rs - Named color catalog
// =============================================================================

mod data;

use serde::Serialize;

use crate::color::Rgb;

/// Couleur nommée du catalogue
/// Named catalog color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct NamedColor {
    pub category: &'static str,
    pub name: &'static str,
    pub color: Rgb,
}

/// Résultat d'une recherche par couleur
/// Outcome of a search by color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Match {
    Exact(NamedColor),
    Closest {
        #[serde(flatten)]
        entry: NamedColor,
        /// Squared RGB distance to the searched color
        distance: u32,
    },
}

impl Match {
    pub fn entry(&self) -> &NamedColor {
        match self {
            Match::Exact(entry) | Match::Closest { entry, .. } => entry,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Match::Exact(_))
    }
}

/// Table immuable de couleurs nommées, dans l'ordre de déclaration
/// Immutable table of named colors, in declaration order
#[derive(Clone, Debug)]
pub struct ColorCatalog {
    entries: Vec<NamedColor>,
}

impl ColorCatalog {
    /// Catalogue intégré (10 catégories)
    /// Built-in catalog (10 categories)
    pub fn builtin() -> Self {
        let entries = data::CATEGORIES
            .iter()
            .flat_map(|&(category, colors)| {
                colors
                    .iter()
                    .map(move |&(name, color)| NamedColor { category, name, color })
            })
            .collect();
        Self { entries }
    }

    pub fn new(entries: Vec<NamedColor>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedColor> {
        self.entries.iter()
    }

    /// Noms de catégories, triés et sans doublons
    /// Category names, sorted and deduplicated
    pub fn categories(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.entries.iter().map(|e| e.category).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Couleurs d'une catégorie, triées par nom
    /// Colors of one category, sorted by name
    pub fn colors_in(&self, category: &str) -> Vec<NamedColor> {
        let mut colors: Vec<_> = self
            .entries
            .iter()
            .filter(|e| e.category.eq_ignore_ascii_case(category))
            .copied()
            .collect();
        colors.sort_by(|a, b| a.name.cmp(b.name));
        colors
    }

    pub fn lookup(&self, category: &str, name: &str) -> Option<NamedColor> {
        self.entries
            .iter()
            .find(|e| {
                e.category.eq_ignore_ascii_case(category) && e.name.eq_ignore_ascii_case(name)
            })
            .copied()
    }

    /// Première couleur portant ce nom, toutes catégories confondues
    /// First color with this name, across all categories
    pub fn find_by_name(&self, name: &str) -> Option<NamedColor> {
        self.entries.iter().find(|e| e.name.eq_ignore_ascii_case(name)).copied()
    }

    /// Couleur la plus proche (distance euclidienne RGB au carré).
    /// En cas d'égalité, la première dans l'ordre du catalogue gagne.
    /// Nearest color (squared RGB Euclidean distance).
    /// On ties, the first one in catalog order wins.
    pub fn nearest(&self, target: Rgb) -> Option<NamedColor> {
        // min_by_key keeps the first of several equal minima
        self.entries
            .iter()
            .min_by_key(|e| e.color.distance_squared(target))
            .copied()
    }

    pub fn exact_or_nearest(&self, target: Rgb) -> Option<Match> {
        let entry = self.nearest(target)?;
        let distance = entry.color.distance_squared(target);
        Some(if distance == 0 {
            Match::Exact(entry)
        } else {
            Match::Closest { entry, distance }
        })
    }
}

impl Default for ColorCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn entry(name: &'static str, color: Rgb) -> NamedColor {
        NamedColor { category: "Test", name, color }
    }

    #[test]
    fn test_builtin_shape() {
        let catalog = ColorCatalog::builtin();
        assert_eq!(catalog.len(), 550);
        assert_eq!(
            catalog.categories(),
            [
                "Blues", "Browns", "Grays", "Greens", "Oranges", "Pinks", "Purples", "Reds",
                "Whites", "Yellows"
            ]
        );
        assert_eq!(catalog.colors_in("Oranges").len(), 16);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = ColorCatalog::builtin();
        let bean = catalog.lookup("reds", "beanred").unwrap();
        assert_eq!(bean.name, "BeanRed");
        assert_eq!(bean.color, Rgb::new(0xF7, 0x5D, 0x59));
        assert!(catalog.lookup("Reds", "WhiteGray").is_none());
        assert_eq!(catalog.find_by_name("whitegray").unwrap().category, "Grays");
    }

    #[test]
    fn test_colors_in_sorted_by_name() {
        let catalog = ColorCatalog::builtin();
        let purples = catalog.colors_in("Purples");
        assert!(purples.windows(2).all(|w| w[0].name <= w[1].name));
        assert!(catalog.colors_in("Nope").is_empty());
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        let catalog = ColorCatalog::new(vec![
            entry("Low", Rgb::new(0, 0, 0)),
            entry("High", Rgb::new(20, 0, 0)),
        ]);
        // Equidistant from both entries
        assert_eq!(catalog.nearest(Rgb::new(10, 0, 0)).unwrap().name, "Low");

        let swapped = ColorCatalog::new(vec![
            entry("High", Rgb::new(20, 0, 0)),
            entry("Low", Rgb::new(0, 0, 0)),
        ]);
        assert_eq!(swapped.nearest(Rgb::new(10, 0, 0)).unwrap().name, "High");
    }

    #[test]
    fn test_duplicate_builtin_colors_resolve_to_first() {
        let catalog = ColorCatalog::builtin();
        let hit = catalog.exact_or_nearest(Rgb::new(0x00, 0xFF, 0xFF)).unwrap();
        assert!(hit.is_exact());
        assert_eq!(hit.entry().name, "Aqua");
    }

    #[test]
    fn test_closest_reports_distance() {
        let catalog = ColorCatalog::new(vec![entry("Black", Rgb::new(0, 0, 0))]);
        assert_eq!(
            catalog.exact_or_nearest(Rgb::new(1, 2, 3)),
            Some(Match::Closest {
                entry: entry("Black", Rgb::new(0, 0, 0)),
                distance: 14,
            })
        );
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = ColorCatalog::new(Vec::new());
        assert!(catalog.nearest(Rgb::WHITE).is_none());
        assert!(catalog.exact_or_nearest(Rgb::WHITE).is_none());
    }

    #[test]
    fn test_match_serializes_with_kind() {
        let hit = Match::Exact(entry("Black", Rgb::new(0, 0, 0)));
        let json = serde_json::to_value(hit).unwrap();
        assert_eq!(json["kind"], "exact");
        assert_eq!(json["name"], "Black");
    }

    proptest! {
        #[test]
        fn nearest_is_never_beaten(r: u8, g: u8, b: u8) {
            let catalog = ColorCatalog::builtin();
            let target = Rgb::new(r, g, b);
            let best = catalog.nearest(target).unwrap().color.distance_squared(target);
            prop_assert!(catalog.iter().all(|e| e.color.distance_squared(target) >= best));
        }
    }
}

//! Category membership and importance tables for point-of-interest scoring.

use std::collections::{BTreeMap, BTreeSet};

/// Fallback weight for amenity categories without an explicit entry.
pub const DEFAULT_AMENITY_WEIGHT: f64 = 0.3;

/// Fallback weight for penalty categories without an explicit entry.
pub const DEFAULT_PENALTY_WEIGHT: f64 = 0.5;

/// Beneficial categories and their importance.
pub const POSITIVE_CATEGORY_WEIGHTS: [(&str, f64); 19] = [
    ("park", 1.0),
    ("grocery", 1.0),
    ("school", 1.1),
    ("hospital", 1.1),
    ("clinic", 0.7),
    ("pharmacy", 0.6),
    ("community_center", 0.7),
    ("library", 0.6),
    ("museum", 0.5),
    ("place_of_worship", 0.3),
    ("shopping", 0.4),
    ("recreation", 0.6),
    ("gym", 0.5),
    ("bike_station", 0.8),
    ("ferry_terminal", 0.8),
    ("university", 0.5),
    ("bank", 0.2),
    ("cafe", 0.2),
    ("garden", 0.9),
];

/// Detrimental categories and their importance.
pub const NEGATIVE_CATEGORY_WEIGHTS: [(&str, f64); 30] = [
    ("industrial_complex", 0.9),
    ("power_plant", 0.9),
    ("rail_yard", 0.8),
    ("sanitation_facility", 0.8),
    ("jail", 1.0),
    ("prison", 1.1),
    ("waste_facility", 1.0),
    ("hazardous_waste", 1.2),
    ("chemical_plant", 1.2),
    ("incinerator", 1.1),
    ("morgue", 0.4),
    ("adult_entertainment", 0.4),
    ("pawn_shop", 0.5),
    ("check_cashing", 0.5),
    ("payday_loans", 0.5),
    ("homeless_shelter", 0.8),
    ("rehab_center", 0.7),
    ("methadone_clinic", 0.7),
    ("needle_exchange", 0.6),
    ("psychiatric_facility", 0.5),
    ("landfill", 1.1),
    ("dump_site", 1.0),
    ("noise_pollution", 0.6),
    ("pollution_monitor", 0.3),
    ("sewage_overflow", 1.0),
    ("contaminated_site", 1.1),
    ("abandoned_building", 0.8),
    ("crime_hotspot", 1.2),
    ("funeral_home", 0.4),
    ("crematorium", 0.6),
];

/// The categories a score component counts, with per-category weights.
///
/// Membership and weighting are separate: a member without an explicit
/// weight falls back to the table's default weight, and a weight entry
/// alone does not make a category count.
///
/// # Examples
/// ```
/// use habitat_scorer::CategoryTable;
///
/// let table = CategoryTable::new(0.3)
///     .with_category("park", 1.0)
///     .with_member("farmers_market");
///
/// assert!(table.contains("farmers_market"));
/// assert_eq!(table.weight("farmers_market"), 0.3);
/// assert_eq!(table.weight("park"), 1.0);
/// assert!(!table.contains("landfill"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTable {
    members: BTreeSet<String>,
    weights: BTreeMap<String, f64>,
    default_weight: f64,
}

impl CategoryTable {
    /// Create an empty table with the given fallback weight.
    #[must_use]
    pub const fn new(default_weight: f64) -> Self {
        Self {
            members: BTreeSet::new(),
            weights: BTreeMap::new(),
            default_weight,
        }
    }

    /// The default amenity table.
    #[must_use]
    pub fn positive_defaults() -> Self {
        Self::from_weights(DEFAULT_AMENITY_WEIGHT, &POSITIVE_CATEGORY_WEIGHTS)
    }

    /// The default penalty table.
    #[must_use]
    pub fn negative_defaults() -> Self {
        Self::from_weights(DEFAULT_PENALTY_WEIGHT, &NEGATIVE_CATEGORY_WEIGHTS)
    }

    fn from_weights(default_weight: f64, entries: &[(&str, f64)]) -> Self {
        entries
            .iter()
            .fold(Self::new(default_weight), |table, &(name, weight)| {
                table.with_category(name, weight)
            })
    }

    /// Add a counted category with an explicit weight.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>, weight: f64) -> Self {
        let category = category.into();
        self.weights.insert(category.clone(), weight);
        self.members.insert(category);
        self
    }

    /// Add a counted category that uses the fallback weight.
    #[must_use]
    pub fn with_member(mut self, category: impl Into<String>) -> Self {
        self.members.insert(category.into());
        self
    }

    /// Stop counting a category.
    #[must_use]
    pub fn without(mut self, category: &str) -> Self {
        self.members.remove(category);
        self.weights.remove(category);
        self
    }

    /// Whether `category` is counted by this table.
    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.members.contains(category)
    }

    /// Importance of `category`, or the fallback weight.
    #[must_use]
    pub fn weight(&self, category: &str) -> f64 {
        self.weights
            .get(category)
            .copied()
            .unwrap_or(self.default_weight)
    }

    /// Fallback weight for members without an explicit entry.
    #[must_use]
    pub const fn default_weight(&self) -> f64 {
        self.default_weight
    }

    /// Counted categories in lexical order.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Number of counted categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the table counts no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

use rustc_hash::{FxHashMap, FxHashSet};

use crate::category::UnitCategory;

/// Base units per one named unit, base unit: the meter.
pub const LENGTH_FACTORS: [(&str, f64); 7] = [
    ("meter", 1.0),
    ("feet", 0.3048),
    ("kilometer", 1000.0),
    ("mile", 1609.344),
    ("centimeter", 0.01),
    ("inch", 0.0254),
    ("yard", 0.9144),
];

/// Base units per one named unit, base unit: the kilogram.
pub const MASS_FACTORS: [(&str, f64); 6] = [
    ("kilogram", 1.0),
    ("gram", 0.001),
    ("pound", 0.453_592),
    ("ounce", 0.028_349_5),
    ("ton", 1000.0),
    ("stone", 6.350_29),
];

/// Temperature has no factor table, conversion goes through formulas.
pub const TEMPERATURE_UNITS: [&str; 3] = ["celsius", "fahrenheit", "kelvin"];

/// The recognized units, built once at startup and never mutated.
///
/// Unit names are disjoint across categories, so resolving a name to its
/// category needs no tie breaking.
#[derive(Clone, Debug)]
pub struct Units {
    length: FxHashMap<&'static str, f64>,
    mass: FxHashMap<&'static str, f64>,
    temperature: FxHashSet<&'static str>,
}

impl Units {
    #[must_use]
    pub fn new() -> Self {
        Self {
            length: LENGTH_FACTORS.iter().copied().collect(),
            mass: MASS_FACTORS.iter().copied().collect(),
            temperature: TEMPERATURE_UNITS.iter().copied().collect(),
        }
    }

    /// Resolves a unit name to its category, `None` if the name is unknown.
    #[must_use]
    pub fn category(&self, unit: &str) -> Option<UnitCategory> {
        if self.length.contains_key(unit) {
            Some(UnitCategory::Length)
        } else if self.mass.contains_key(unit) {
            Some(UnitCategory::Mass)
        } else if self.temperature.contains(unit) {
            Some(UnitCategory::Temperature)
        } else {
            None
        }
    }

    /// The factor table for a category, `None` for temperature.
    #[must_use]
    pub fn factors(&self, category: UnitCategory) -> Option<&FxHashMap<&'static str, f64>> {
        match category {
            UnitCategory::Length => Some(&self.length),
            UnitCategory::Mass => Some(&self.mass),
            UnitCategory::Temperature => None,
        }
    }
}

impl Default for Units {
    fn default() -> Self {
        Self::new()
    }
}

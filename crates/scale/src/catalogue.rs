//! Reference catalogues: named distances for the scale chart and star classes
//! for the HR diagram. Both are fixed at load time.

use std::fmt;

use cosmic_config::{CategoryConfig, ScaleEntryConfig, StarClassConfig};
use serde::Serialize;

use crate::error::CatalogueError;

/// Kind of object on the distance-scale chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Star,
    Galaxy,
    GalaxyCluster,
}

impl Category {
    /// Every category in legend order.
    pub const ALL: [Category; 3] = [Category::Star, Category::Galaxy, Category::GalaxyCluster];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Star => "Star",
            Category::Galaxy => "Galaxy",
            Category::GalaxyCluster => "Galaxy Cluster",
        };
        f.write_str(name)
    }
}

/// Named object and its distance in light years.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleEntry {
    pub label: String,
    pub magnitude: f64,
    pub category: Category,
}

impl ScaleEntry {
    pub fn new(
        label: impl Into<String>,
        magnitude: f64,
        category: Category,
    ) -> Result<Self, CatalogueError> {
        let label = label.into();
        ensure_positive(&label, magnitude)?;
        Ok(Self {
            label,
            magnitude,
            category,
        })
    }
}

/// Star class with its typical surface temperature and luminosity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarClass {
    pub spectral_type: String,
    pub temperature_k: f64,
    pub luminosity_solar: f64,
    pub examples: Vec<String>,
}

/// Main-sequence reference curve as `(temperature K, luminosity L☉)`, hot to cool.
pub const MAIN_SEQUENCE: [(f64, f64); 7] = [
    (40_000.0, 100_000.0),
    (20_000.0, 1_000.0),
    (10_000.0, 100.0),
    (7_000.0, 10.0),
    (5_500.0, 1.0),
    (4_000.0, 0.1),
    (3_000.0, 0.01),
];

/// The course's distance-scale catalogue.
pub fn default_scale_entries() -> Vec<ScaleEntry> {
    [
        ("Proxima Centauri", 4.2, Category::Star),
        ("Sirius", 8.6, Category::Star),
        ("Betelgeuse", 642.0, Category::Star),
        ("Large Magellanic Cloud", 158_000.0, Category::Galaxy),
        ("Andromeda Galaxy", 2_500_000.0, Category::Galaxy),
        ("Virgo Cluster", 54_000_000.0, Category::GalaxyCluster),
        ("GN-z11 (Most distant galaxy)", 13_400_000_000.0, Category::Galaxy),
    ]
    .into_iter()
    .map(|(label, magnitude, category)| ScaleEntry {
        label: label.to_string(),
        magnitude,
        category,
    })
    .collect()
}

/// The course's HR-diagram star classes.
pub fn default_star_classes() -> Vec<StarClass> {
    fn class(
        spectral_type: &str,
        temperature_k: f64,
        luminosity_solar: f64,
        examples: &[&str],
    ) -> StarClass {
        StarClass {
            spectral_type: spectral_type.to_string(),
            temperature_k,
            luminosity_solar,
            examples: examples.iter().map(|s| s.to_string()).collect(),
        }
    }

    vec![
        class("O", 40_000.0, 100_000.0, &["Mintaka", "Alnitak"]),
        class("B", 20_000.0, 1_000.0, &["Rigel", "Spica"]),
        class("A", 10_000.0, 100.0, &["Sirius", "Vega"]),
        class("F", 7_000.0, 10.0, &["Procyon", "Canopus"]),
        class("G", 5_500.0, 1.0, &["Sun", "Alpha Centauri A"]),
        class("K", 4_000.0, 0.1, &["Arcturus", "Aldebaran"]),
        class("M", 3_000.0, 0.01, &["Proxima Centauri", "Betelgeuse"]),
        class("Giant", 4_500.0, 100.0, &["Aldebaran"]),
        class("Supergiant", 3_500.0, 10_000.0, &["Betelgeuse"]),
        class("White Dwarf", 10_000.0, 0.01, &["Sirius B"]),
    ]
}

/// Convert configured scale entries, rejecting unknown categories and non-positive distances.
pub fn scale_entries_from_config(
    configs: &[ScaleEntryConfig],
) -> Result<Vec<ScaleEntry>, CatalogueError> {
    configs
        .iter()
        .map(|cfg| {
            let category = match cfg.category {
                CategoryConfig::Star => Category::Star,
                CategoryConfig::Galaxy => Category::Galaxy,
                CategoryConfig::GalaxyCluster => Category::GalaxyCluster,
                CategoryConfig::Unsupported => {
                    return Err(CatalogueError::UnsupportedCategory(cfg.label.clone()));
                }
            };
            ScaleEntry::new(cfg.label.clone(), cfg.distance_ly, category)
        })
        .collect()
}

/// Convert configured star classes, rejecting non-positive temperatures or luminosities.
pub fn star_classes_from_config(
    configs: &[StarClassConfig],
) -> Result<Vec<StarClass>, CatalogueError> {
    configs
        .iter()
        .map(|cfg| {
            ensure_positive(&cfg.spectral_type, cfg.temperature_k)?;
            ensure_positive(&cfg.spectral_type, cfg.luminosity_solar)?;
            Ok(StarClass {
                spectral_type: cfg.spectral_type.clone(),
                temperature_k: cfg.temperature_k,
                luminosity_solar: cfg.luminosity_solar,
                examples: cfg.examples.clone(),
            })
        })
        .collect()
}

fn ensure_positive(label: &str, value: f64) -> Result<(), CatalogueError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CatalogueError::NonPositiveMagnitude {
            label: label.to_string(),
            value,
        })
    }
}

//! Configuration models and loaders for the cosmic distance ladder.
//!
//! Reference catalogues may be a YAML list, a single TOML record, or a
//! directory mixing both. Widget defaults come from one TOML file.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Named astronomical object for the distance-scale chart.
#[derive(Debug, Deserialize, Clone)]
pub struct ScaleEntryConfig {
    pub label: String,
    /// Distance from Earth in light years.
    pub distance_ly: f64,
    pub category: CategoryConfig,
}

/// Object category as written in catalogue files.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum CategoryConfig {
    #[serde(rename = "star")]
    Star,
    #[serde(rename = "galaxy")]
    Galaxy,
    #[serde(rename = "galaxy_cluster")]
    GalaxyCluster,
    #[serde(other)]
    Unsupported,
}

/// Star class plotted on the Hertzsprung-Russell diagram.
#[derive(Debug, Deserialize, Clone)]
pub struct StarClassConfig {
    pub spectral_type: String,
    pub temperature_k: f64,
    /// Luminosity relative to the Sun.
    pub luminosity_solar: f64,
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Initial values of every widget, restored by each widget's reset action.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct WidgetDefaults {
    #[serde(default)]
    pub parallax: ParallaxDefaults,
    #[serde(default)]
    pub cepheid: CepheidDefaults,
    #[serde(default)]
    pub redshift: RedshiftDefaults,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ParallaxDefaults {
    #[serde(default)]
    pub orbital_phase: f64,
}

impl Default for ParallaxDefaults {
    fn default() -> Self {
        Self { orbital_phase: 0.0 }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct CepheidDefaults {
    #[serde(default = "default_period_days")]
    pub period_days: f64,
    #[serde(default = "default_apparent_magnitude")]
    pub apparent_magnitude: f64,
}

impl Default for CepheidDefaults {
    fn default() -> Self {
        Self {
            period_days: default_period_days(),
            apparent_magnitude: default_apparent_magnitude(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct RedshiftDefaults {
    #[serde(default = "default_redshift")]
    pub redshift: f64,
    #[serde(default = "default_hubble_constant")]
    pub hubble_constant_km_s_mpc: f64,
}

impl Default for RedshiftDefaults {
    fn default() -> Self {
        Self {
            redshift: default_redshift(),
            hubble_constant_km_s_mpc: default_hubble_constant(),
        }
    }
}

fn default_period_days() -> f64 {
    10.0
}

fn default_apparent_magnitude() -> f64 {
    15.0
}

fn default_redshift() -> f64 {
    0.5
}

fn default_hubble_constant() -> f64 {
    70.0
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported catalogue format: {} (expected .yaml, .yml or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Load distance-scale entries from a YAML file, TOML file, or directory of such files.
pub fn load_scale_entries<P: AsRef<Path>>(path: P) -> Result<Vec<ScaleEntryConfig>, ConfigError> {
    let entries: Vec<ScaleEntryConfig> = load_records(path.as_ref())?;
    tracing::info!(
        count = entries.len(),
        path = %path.as_ref().display(),
        "loaded distance-scale catalogue"
    );
    Ok(entries)
}

/// Load HR-diagram star classes from a YAML file, TOML file, or directory of such files.
pub fn load_star_classes<P: AsRef<Path>>(path: P) -> Result<Vec<StarClassConfig>, ConfigError> {
    let classes: Vec<StarClassConfig> = load_records(path.as_ref())?;
    tracing::info!(
        count = classes.len(),
        path = %path.as_ref().display(),
        "loaded star-class catalogue"
    );
    Ok(classes)
}

/// Load widget defaults from a TOML file. Missing sections keep the page defaults.
pub fn load_widget_defaults<P: AsRef<Path>>(path: P) -> Result<WidgetDefaults, ConfigError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let defaults: WidgetDefaults = toml::from_str(&contents)?;
    tracing::debug!(?defaults, "loaded widget defaults");
    Ok(defaults)
}

/// On-disk layout of a catalogue file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordFormat {
    /// A YAML list of records.
    YamlList,
    /// One record per TOML file.
    TomlRecord,
}

impl RecordFormat {
    fn of(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(RecordFormat::YamlList),
            "toml" => Some(RecordFormat::TomlRecord),
            _ => None,
        }
    }

    fn read<T: DeserializeOwned>(self, path: &Path) -> Result<Vec<T>, ConfigError> {
        match self {
            RecordFormat::YamlList => Ok(serde_yaml::from_reader(File::open(path)?)?),
            RecordFormat::TomlRecord => {
                let record = toml::from_str(&std::fs::read_to_string(path)?)?;
                Ok(vec![record])
            }
        }
    }
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ConfigError> {
    if path.is_dir() {
        return read_dir_records(path);
    }
    let format =
        RecordFormat::of(path).ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
    format.read(path)
}

/// Catalogue files in a directory, in file-name order. Other files are skipped.
fn read_dir_records<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>, ConfigError> {
    let mut files: Vec<(PathBuf, RecordFormat)> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter_map(|path| RecordFormat::of(&path).map(|format| (path, format)))
        .collect();
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut records = Vec::new();
    for (path, format) in files {
        let before = records.len();
        records.extend(format.read::<T>(&path)?);
        tracing::debug!(
            path = %path.display(),
            records = records.len() - before,
            "read catalogue file"
        );
    }
    Ok(records)
}

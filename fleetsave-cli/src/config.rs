//! Configuration file loading for fleetsave.
//!
//! Discovers and loads `fleetsave.toml` from the working root.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fleetsave_types::assumptions::Assumptions;
use fleetsave_types::config::FleetDraft;
use fleetsave_types::country::CountryCode;
use fleetsave_types::restriction::RestrictionKind;
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "fleetsave.toml";

/// Top-level configuration from fleetsave.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FleetsaveConfig {
    /// Fleet inputs; any of them may be left out and supplied on the command line.
    pub fleet: FleetDraft,

    /// Overrides for the savings model constants.
    pub assumptions: Assumptions,

    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

/// Discover the fleetsave.toml config file.
///
/// Returns `None` if no config file is found in `root`.
pub fn discover_config(root: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a fleetsave.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<FleetsaveConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

pub fn parse_config(contents: &str) -> anyhow::Result<FleetsaveConfig> {
    let config: FleetsaveConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `root`, or return default if not found.
pub fn load_or_default(root: &Utf8Path) -> anyhow::Result<FleetsaveConfig> {
    match discover_config(root) {
        Some(path) => load_config(&path),
        None => Ok(FleetsaveConfig::default()),
    }
}

/// An explicit `--config` path must exist; otherwise fall back to discovery in `root`.
pub fn resolve_config(
    root: &Utf8Path,
    explicit: Option<&Utf8Path>,
) -> anyhow::Result<FleetsaveConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => load_or_default(root),
    }
}

/// Fleet values given on the command line. `None` and empty lists mean "not given".
#[derive(Debug, Clone, Default)]
pub struct FleetOverrides {
    pub cars: Option<u32>,
    pub mileage: Option<f64>,
    pub restrictions: Vec<RestrictionKind>,
    pub countries: Vec<CountryCode>,
    pub monthly_budget: Option<f64>,
    pub kwh_price_cap: Option<f64>,
    pub format: Option<OutputFormat>,
}

/// Merged configuration combining config file and CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
    pub draft: FleetDraft,
    pub assumptions: Assumptions,
    pub format: OutputFormat,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: FleetsaveConfig,
}

impl ConfigMerger {
    pub fn new(config: FleetsaveConfig) -> Self {
        Self { config }
    }

    /// Merge with compute command CLI arguments.
    ///
    /// Scalar flags replace file values. List flags replace the whole file list when given.
    pub fn merge_compute_args(self, cli: &FleetOverrides) -> MergedConfig {
        let mut draft = self.config.fleet;

        if let Some(cars) = cli.cars {
            draft.car_count = Some(cars);
        }
        if let Some(mileage) = cli.mileage {
            draft.yearly_mileage_allowed = Some(mileage);
        }
        if !cli.restrictions.is_empty() {
            draft.restrictions = cli.restrictions.iter().copied().collect();
        }
        if !cli.countries.is_empty() {
            draft.country_restrictions = cli.countries.clone();
        }
        if let Some(budget) = cli.monthly_budget {
            draft.monthly_charging_budget = Some(budget);
        }
        if let Some(cap) = cli.kwh_price_cap {
            draft.kwh_price_cap = Some(cap);
        }

        MergedConfig {
            draft,
            assumptions: self.config.assumptions,
            format: cli.format.unwrap_or(self.config.output.format),
        }
    }
}

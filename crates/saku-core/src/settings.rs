//! Settings for model paths and recommendation thresholds
//!
//! ## Configuration Resolution
//!
//! Settings are loaded with a layered resolution:
//! 1. Explicit path (`--config`), which must exist
//! 2. Override in data dir (~/.local/share/saku/config/saku.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! Environment variables `SAKU_CLASSIFIER_PATH` and `SAKU_REGRESSOR_PATH`
//! then override the model paths from whichever file was used.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::allocator::DEFAULT_MIN_CUT;
use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/saku.toml");

/// Environment variable overriding the classifier artifact path
pub const CLASSIFIER_PATH_ENV: &str = "SAKU_CLASSIFIER_PATH";

/// Environment variable overriding the regressor artifact path
pub const REGRESSOR_PATH_ENV: &str = "SAKU_REGRESSOR_PATH";

/// Resolved settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Classifier artifact (logistic regression JSON)
    pub classifier_path: PathBuf,
    /// Regressor artifact (random forest JSON)
    pub regressor_path: PathBuf,
    /// Smallest suggested cut worth showing
    pub min_cut: f64,
    /// Currency symbol for display
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            classifier_path: PathBuf::from("models/logistic_model.json"),
            regressor_path: PathBuf::from("models/random_forest.json"),
            min_cut: DEFAULT_MIN_CUT,
            currency: "Rp".to_string(),
        }
    }
}

impl Settings {
    /// Load settings (explicit path, then user override, then embedded default)
    /// and apply environment overrides
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut settings = load_file(explicit)?;
        settings.apply_overrides(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Parse settings from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_settings(content)
    }

    /// Override model paths using a variable lookup (normally the environment)
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(CLASSIFIER_PATH_ENV).filter(|s| !s.trim().is_empty()) {
            self.classifier_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(REGRESSOR_PATH_ENV).filter(|s| !s.trim().is_empty()) {
            self.regressor_path = PathBuf::from(path);
        }
    }
}

/// Default settings override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("saku").join("config").join("saku.toml"))
}

fn load_file(explicit: Option<&Path>) -> Result<Settings> {
    let content = if let Some(path) = explicit {
        fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?
    } else {
        match default_config_path() {
            Some(path) if path.exists() => fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?,
            _ => DEFAULT_CONFIG.to_string(),
        }
    };

    parse_settings(&content)
}

/// Raw settings structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawSettings {
    models: Option<RawModels>,
    recommendation: Option<RawRecommendation>,
    display: Option<RawDisplay>,
}

#[derive(Debug, Deserialize)]
struct RawModels {
    classifier: Option<PathBuf>,
    regressor: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawRecommendation {
    min_cut: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawDisplay {
    currency: Option<String>,
}

fn parse_settings(content: &str) -> Result<Settings> {
    let raw: RawSettings = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid settings TOML: {}", e)))?;

    let mut settings = Settings::default();

    if let Some(models) = raw.models {
        if let Some(path) = models.classifier {
            settings.classifier_path = path;
        }
        if let Some(path) = models.regressor {
            settings.regressor_path = path;
        }
    }

    if let Some(recommendation) = raw.recommendation {
        if let Some(min_cut) = recommendation.min_cut {
            if !min_cut.is_finite() || min_cut < 0.0 {
                return Err(Error::Config(format!(
                    "recommendation.min_cut must be a non-negative number, got {}",
                    min_cut
                )));
            }
            settings.min_cut = min_cut;
        }
    }

    if let Some(display) = raw.display {
        if let Some(currency) = display.currency {
            settings.currency = currency;
        }
    }

    Ok(settings)
}

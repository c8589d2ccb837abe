//! Shared utilities for loading settings and models
//!
//! This module contains:
//! - `load_settings` - Resolve settings and apply CLI path overrides
//! - `load_models` - Load both model artifacts (fatal on failure)

use std::path::Path;

use anyhow::{Context, Result};
use saku_core::{ModelContext, Settings};
use tracing::debug;

/// Resolve settings, letting explicit CLI paths win over file and environment
pub fn load_settings(
    config: Option<&Path>,
    classifier: Option<&Path>,
    regressor: Option<&Path>,
) -> Result<Settings> {
    let mut settings = Settings::load(config).context("Failed to load settings")?;

    if let Some(path) = classifier {
        settings.classifier_path = path.to_path_buf();
    }
    if let Some(path) = regressor {
        settings.regressor_path = path.to_path_buf();
    }

    debug!(
        classifier = %settings.classifier_path.display(),
        regressor = %settings.regressor_path.display(),
        min_cut = settings.min_cut,
        "Resolved settings"
    );

    Ok(settings)
}

/// Load both models from the configured paths
pub fn load_models(settings: &Settings) -> Result<ModelContext> {
    ModelContext::load(&settings.classifier_path, &settings.regressor_path).with_context(|| {
        format!(
            "Failed to load models ({} / {})",
            settings.classifier_path.display(),
            settings.regressor_path.display()
        )
    })
}

use std::fs;
use std::path::Path;

use hepatox_core::{ToxicityModel, DANGER_THRESHOLD, GSH_DEFENSE_MULTIPLIER, NAPQI_CONVERSION_RATE};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ModelError;

pub const ENV_CONVERSION_RATE: &str = "HEPATOX_CONVERSION_RATE";
pub const ENV_DEFENSE_MULTIPLIER: &str = "HEPATOX_DEFENSE_MULTIPLIER";
pub const ENV_DANGER_THRESHOLD: &str = "HEPATOX_DANGER_THRESHOLD";
pub const ENV_VALIDATION: &str = "HEPATOX_VALIDATION";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Compute on whatever arrives, including out-of-domain values.
    #[default]
    Passthrough,
    /// Reject non-finite values, negative doses and GSH levels outside 0..=100.
    Strict,
}

impl ValidationMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "passthrough" => Some(Self::Passthrough),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Passthrough => "passthrough",
            Self::Strict => "strict",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RiskModelConfig {
    pub conversion_rate: f64,
    pub defense_multiplier: f64,
    pub danger_threshold: f64,
    pub validation: ValidationMode,
}

impl Default for RiskModelConfig {
    fn default() -> Self {
        Self {
            conversion_rate: NAPQI_CONVERSION_RATE,
            defense_multiplier: GSH_DEFENSE_MULTIPLIER,
            danger_threshold: DANGER_THRESHOLD,
            validation: ValidationMode::Passthrough,
        }
    }
}

impl RiskModelConfig {
    pub fn strict() -> Self {
        Self {
            validation: ValidationMode::Strict,
            ..Self::default()
        }
    }

    pub const fn toxicity_model(&self) -> ToxicityModel {
        ToxicityModel::new(self.conversion_rate, self.defense_multiplier)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        positive("conversion_rate", self.conversion_rate)?;
        positive("defense_multiplier", self.defense_multiplier)?;
        positive("danger_threshold", self.danger_threshold)?;
        Ok(())
    }

    pub fn from_env() -> Result<Self, ModelError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from `lookup`, which plays the role of the process environment.
    /// Unset or blank entries keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ModelError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let validation = match non_blank(&lookup, ENV_VALIDATION) {
            Some(raw) => ValidationMode::parse(&raw).ok_or_else(|| {
                ModelError::Config(format!(
                    "{ENV_VALIDATION} must be passthrough or strict, got {raw:?}"
                ))
            })?,
            None => defaults.validation,
        };

        let config = Self {
            conversion_rate: lookup_f64(&lookup, ENV_CONVERSION_RATE, defaults.conversion_rate)?,
            defense_multiplier: lookup_f64(
                &lookup,
                ENV_DEFENSE_MULTIPLIER,
                defaults.defense_multiplier,
            )?,
            danger_threshold: lookup_f64(&lookup, ENV_DANGER_THRESHOLD, defaults.danger_threshold)?,
            validation,
        };
        config.validate()?;
        debug!(
            source = "env",
            validation = config.validation.label(),
            "loaded risk model config"
        );
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ModelError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        debug!(
            source = %path.display(),
            validation = config.validation.label(),
            "loaded risk model config"
        );
        Ok(config)
    }
}

fn positive(field: &str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ModelError::Config(format!(
            "{field} must be a finite number above zero, got {value}"
        )))
    }
}

fn non_blank<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn lookup_f64<F>(lookup: &F, name: &str, default: f64) -> Result<f64, ModelError>
where
    F: Fn(&str) -> Option<String>,
{
    match non_blank(lookup, name) {
        Some(raw) => raw
            .parse::<f64>()
            .map_err(|_| ModelError::Config(format!("{name} is not a number: {raw:?}"))),
        None => Ok(default),
    }
}

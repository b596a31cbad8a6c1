use std::ops::RangeInclusive;

use hepatox_core::{RiskBand, ToxicityModel};
use tracing::warn;

use crate::config::{RiskModelConfig, ValidationMode};
use crate::error::ModelError;
use crate::types::{PatientInput, RiskAssessment};

/// Percentages accepted for the GSH level under strict validation.
pub const GSH_LEVEL_RANGE: RangeInclusive<f64> = 0.0..=100.0;

#[derive(Debug, Clone)]
pub struct RiskAssessor {
    config: RiskModelConfig,
    model: ToxicityModel,
}

impl RiskAssessor {
    pub fn new(config: RiskModelConfig) -> Result<Self, ModelError> {
        config.validate()?;
        let model = config.toxicity_model();
        Ok(Self { config, model })
    }

    pub const fn config(&self) -> &RiskModelConfig {
        &self.config
    }

    pub fn assess(&self, input: PatientInput) -> Result<RiskAssessment, ModelError> {
        if self.config.validation == ValidationMode::Strict {
            check_input(&input)?;
        }

        let breakdown = self.model.breakdown(input.dose_mg, input.gsh_level_pct);
        let band = RiskBand::classify(breakdown.risk, self.config.danger_threshold);
        Ok(RiskAssessment::from_breakdown(input, breakdown, band))
    }

    pub fn assess_batch(&self, inputs: &[PatientInput]) -> Vec<Result<RiskAssessment, ModelError>> {
        inputs.iter().map(|input| self.assess(*input)).collect()
    }
}

impl Default for RiskAssessor {
    fn default() -> Self {
        let config = RiskModelConfig::default();
        let model = config.toxicity_model();
        Self { config, model }
    }
}

fn check_input(input: &PatientInput) -> Result<(), ModelError> {
    if !input.dose_mg.is_finite() {
        return Err(reject("dose_mg", input.dose_mg, "not a finite number"));
    }
    if input.dose_mg < 0.0 {
        return Err(reject("dose_mg", input.dose_mg, "dose cannot be negative"));
    }
    if !input.gsh_level_pct.is_finite() {
        return Err(reject("gsh_level_pct", input.gsh_level_pct, "not a finite number"));
    }
    if !GSH_LEVEL_RANGE.contains(&input.gsh_level_pct) {
        return Err(reject(
            "gsh_level_pct",
            input.gsh_level_pct,
            "percentage outside 0..=100",
        ));
    }
    Ok(())
}

fn reject(field: &'static str, value: f64, reason: &'static str) -> ModelError {
    warn!(field, value, reason, "rejected risk input");
    ModelError::InvalidInput {
        field,
        value,
        reason,
    }
}

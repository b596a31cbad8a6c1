use hepatox_core::{RiskBand, ToxicityBreakdown};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    pub dose_mg: f64,
    pub gsh_level_pct: f64,
}

impl PatientInput {
    pub const fn new(dose_mg: f64, gsh_level_pct: f64) -> Self {
        Self {
            dose_mg,
            gsh_level_pct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub input: PatientInput,
    pub produced_toxin: f64,
    pub defense_capacity: f64,
    pub toxic_load: f64,
    pub risk: f64,
    #[serde(serialize_with = "serialize_band")]
    pub band: RiskBand,
}

impl RiskAssessment {
    pub(crate) const fn from_breakdown(
        input: PatientInput,
        breakdown: ToxicityBreakdown,
        band: RiskBand,
    ) -> Self {
        Self {
            input,
            produced_toxin: breakdown.produced_toxin,
            defense_capacity: breakdown.defense_capacity,
            toxic_load: breakdown.toxic_load,
            risk: breakdown.risk,
            band,
        }
    }
}

fn serialize_band<S: Serializer>(band: &RiskBand, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(band.label())
}

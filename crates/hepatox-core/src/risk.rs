/// Fraction of a paracetamol dose metabolised into NAPQI.
pub const NAPQI_CONVERSION_RATE: f64 = 0.10;

/// NAPQI neutralised per percentage point of glutathione.
pub const GSH_DEFENSE_MULTIPLIER: f64 = 5.0;

// Rounding error of the closed-form bounds is a few ulps at most.
const BOUNDARY_STEPS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToxicityModel {
    pub conversion_rate: f64,
    pub defense_multiplier: f64,
}

impl ToxicityModel {
    pub const STANDARD: Self = Self {
        conversion_rate: NAPQI_CONVERSION_RATE,
        defense_multiplier: GSH_DEFENSE_MULTIPLIER,
    };

    pub const fn new(conversion_rate: f64, defense_multiplier: f64) -> Self {
        Self {
            conversion_rate,
            defense_multiplier,
        }
    }

    /// Unneutralised toxic load for `dose` mg at `gsh_level` percent, floored at zero.
    ///
    /// Inputs are not validated. NaN propagates unchanged.
    pub fn risk(&self, dose: f64, gsh_level: f64) -> f64 {
        self.breakdown(dose, gsh_level).risk
    }

    pub fn breakdown(&self, dose: f64, gsh_level: f64) -> ToxicityBreakdown {
        let produced_toxin = dose * self.conversion_rate;
        let defense_capacity = gsh_level * self.defense_multiplier;
        let toxic_load = produced_toxin - defense_capacity;

        // `toxic_load < 0.0` is false for NaN, which keeps NaN flowing through.
        let risk = if toxic_load < 0.0 { 0.0 } else { toxic_load };

        ToxicityBreakdown {
            produced_toxin,
            defense_capacity,
            toxic_load,
            risk,
        }
    }

    /// Lowest glutathione level whose defense fully covers `dose`.
    ///
    /// The closed-form quotient can land an ulp off, so it is nudged onto the
    /// exact zero-risk boundary of [`Self::risk`].
    pub fn neutralizing_gsh_level(&self, dose: f64) -> f64 {
        let mut gsh = dose * self.conversion_rate / self.defense_multiplier;
        if !gsh.is_finite() {
            return gsh;
        }
        for _ in 0..BOUNDARY_STEPS {
            if self.risk(dose, gsh) > 0.0 {
                gsh = gsh.next_up();
            } else if self.risk(dose, gsh.next_down()) == 0.0 {
                gsh = gsh.next_down();
            } else {
                break;
            }
        }
        gsh
    }

    /// Highest dose fully neutralised at `gsh_level`, snapped like
    /// [`Self::neutralizing_gsh_level`].
    pub fn max_safe_dose(&self, gsh_level: f64) -> f64 {
        let mut dose = gsh_level * self.defense_multiplier / self.conversion_rate;
        if !dose.is_finite() {
            return dose;
        }
        for _ in 0..BOUNDARY_STEPS {
            if self.risk(dose, gsh_level) > 0.0 {
                dose = dose.next_down();
            } else if self.risk(dose.next_up(), gsh_level) == 0.0 {
                dose = dose.next_up();
            } else {
                break;
            }
        }
        dose
    }
}

impl Default for ToxicityModel {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToxicityBreakdown {
    pub produced_toxin: f64,
    pub defense_capacity: f64,
    /// Signed difference before clamping; negative means spare defense.
    pub toxic_load: f64,
    pub risk: f64,
}

/// Toxic load with the fixed standard coefficients.
pub fn calculate_risk(dose: f64, gsh_level: f64) -> f64 {
    ToxicityModel::STANDARD.risk(dose, gsh_level)
}

/// Risk score at or above which the liver is considered in danger.
pub const DANGER_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskBand {
    Safe,
    Warning,
    Danger,
}

impl RiskBand {
    pub fn from_risk(risk: f64) -> Self {
        Self::classify(risk, DANGER_THRESHOLD)
    }

    /// NaN is not known to be safe, so it lands in `Danger`.
    pub fn classify(risk: f64, danger_threshold: f64) -> Self {
        if risk <= 0.0 {
            Self::Safe
        } else if risk < danger_threshold {
            Self::Warning
        } else {
            Self::Danger
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    pub const fn summary(self) -> &'static str {
        match self {
            Self::Safe => "liver neutralized the toxin",
            Self::Warning => "mild liver stress",
            Self::Danger => "hepatotoxicity imminent",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate_risk;

    #[test]
    fn zero_risk_is_safe() {
        assert_eq!(RiskBand::from_risk(calculate_risk(1000.0, 100.0)), RiskBand::Safe);
    }

    #[test]
    fn danger_starts_at_threshold() {
        assert_eq!(RiskBand::from_risk(0.5), RiskBand::Warning);
        assert_eq!(RiskBand::from_risk(99.9), RiskBand::Warning);
        assert_eq!(RiskBand::from_risk(100.0), RiskBand::Danger);
        assert_eq!(RiskBand::from_risk(calculate_risk(10_000.0, 50.0)), RiskBand::Danger);
    }

    #[test]
    fn custom_threshold_moves_the_danger_line() {
        assert_eq!(RiskBand::classify(100.0, 250.0), RiskBand::Warning);
        assert_eq!(RiskBand::classify(250.0, 250.0), RiskBand::Danger);
    }

    #[test]
    fn nan_is_danger() {
        assert_eq!(RiskBand::from_risk(f64::NAN), RiskBand::Danger);
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(RiskBand::Safe.to_string(), "safe");
        assert_eq!(RiskBand::Warning.label(), "warning");
        assert_eq!(RiskBand::Danger.summary(), "hepatotoxicity imminent");
    }
}

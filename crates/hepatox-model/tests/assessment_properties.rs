use hepatox_model::{
    calculate_risk, ModelError, PatientInput, RiskAssessor, RiskModelConfig, GSH_LEVEL_RANGE,
};
use proptest::prelude::*;

fn same_value(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

proptest! {
    #[test]
    fn passthrough_never_fails_and_matches_core(dose in any::<f64>(), gsh in any::<f64>()) {
        let out = RiskAssessor::default().assess(PatientInput::new(dose, gsh));
        prop_assert!(out.is_ok());
        if let Ok(out) = out {
            prop_assert!(same_value(out.risk, calculate_risk(dose, gsh)));
        }
    }

    #[test]
    fn strict_matches_core_inside_domain(dose in 0.0f64..1.0e6, gsh in 0.0f64..=100.0) {
        let assessor = RiskAssessor::new(RiskModelConfig::strict()).unwrap();
        let out = assessor.assess(PatientInput::new(dose, gsh)).unwrap();
        prop_assert_eq!(out.risk, calculate_risk(dose, gsh));
    }

    #[test]
    fn strict_rejects_negative_doses(dose in -1.0e6f64..-1.0e-9, gsh in 0.0f64..=100.0) {
        let assessor = RiskAssessor::new(RiskModelConfig::strict()).unwrap();
        let err = assessor.assess(PatientInput::new(dose, gsh)).unwrap_err();
        let is_dose_error = matches!(err, ModelError::InvalidInput { field: "dose_mg", .. });
        prop_assert!(is_dose_error);
    }

    #[test]
    fn strict_rejects_gsh_outside_percentage(dose in 0.0f64..1.0e6, gsh in -1.0e3f64..1.0e3) {
        prop_assume!(!GSH_LEVEL_RANGE.contains(&gsh));
        let assessor = RiskAssessor::new(RiskModelConfig::strict()).unwrap();
        let err = assessor.assess(PatientInput::new(dose, gsh)).unwrap_err();
        let is_gsh_error = matches!(err, ModelError::InvalidInput { field: "gsh_level_pct", .. });
        prop_assert!(is_gsh_error);
    }
}

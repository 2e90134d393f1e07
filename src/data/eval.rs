use thiserror::Error;

use super::catalog::{ConstantProperty, TdepProperty};
use super::eqlib::{EqFormError, EquationForms};
use super::model::Compound;

// ---------------------------------------------------------------------------
// Correlation evaluator
// ---------------------------------------------------------------------------

/// Failure to evaluate a temperature-dependent property.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("'{compound}' has no {property} correlation to evaluate")]
    NoCorrelation { compound: String, property: TdepProperty },
    #[error(
        "'{compound}': {property} uses equation {equation_id}, which needs a \
         critical temperature, but TC is absent"
    )]
    MissingCriticalTemperature {
        compound: String,
        property: TdepProperty,
        equation_id: i32,
    },
    #[error(transparent)]
    Form(#[from] EqFormError),
}

/// Evaluate a temperature-dependent property of `compound` at `t` (K).
///
/// Certain correlation forms are written in reduced temperature, so the
/// stored temperature is transformed before the form library sees it:
///
/// | property | equation id | transform        |
/// |----------|-------------|------------------|
/// | LDN      | 116, 119    | `1 − t/TC`       |
/// | LCP      | 114, 124    | `1 − t/TC`       |
/// | HVP      | 106         | `t/TC`           |
/// | ST       | 106         | `t/TC`           |
/// | LTC      | 123         | `1 − t/TC`       |
///
/// No other property uses a transform. A transform-requiring equation id on
/// a compound without a critical temperature is an error rather than a
/// silently propagated NaN.
pub fn evaluate<F: EquationForms>(
    compound: &Compound,
    property: TdepProperty,
    t: f64,
    forms: &F,
) -> Result<f64, EvalError> {
    let record = compound
        .correlation(property)
        .ok_or_else(|| EvalError::NoCorrelation {
            compound: compound.name.clone(),
            property,
        })?;

    let t = match transform_kind(property, record.equation_id) {
        Transform::None => t,
        Transform::OneMinusReduced => {
            1.0 - t / critical_temperature(compound, property, record.equation_id)?
        }
        Transform::Reduced => t / critical_temperature(compound, property, record.equation_id)?,
    };

    Ok(forms.evaluate_form(t, &record.coefficients, record.equation_id)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transform {
    None,
    /// `t ← 1 − t/TC`
    OneMinusReduced,
    /// `t ← t/TC`
    Reduced,
}

fn critical_temperature(
    compound: &Compound,
    property: TdepProperty,
    equation_id: i32,
) -> Result<f64, EvalError> {
    compound
        .constant(ConstantProperty::Tc)
        .ok_or_else(|| EvalError::MissingCriticalTemperature {
            compound: compound.name.clone(),
            property,
            equation_id,
        })
}

fn transform_kind(property: TdepProperty, equation_id: i32) -> Transform {
    match (property, equation_id) {
        (TdepProperty::Ldn, 116 | 119) => Transform::OneMinusReduced,
        (TdepProperty::Lcp, 114 | 124) => Transform::OneMinusReduced,
        (TdepProperty::Hvp, 106) => Transform::Reduced,
        (TdepProperty::St, 106) => Transform::Reduced,
        (TdepProperty::Ltc, 123) => Transform::OneMinusReduced,
        _ => Transform::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CorrelationRecord;
    use std::cell::Cell;

    /// Stub form library that records the `t` it was handed.
    struct Recording {
        seen_t: Cell<f64>,
    }

    impl Recording {
        fn new() -> Self {
            Recording { seen_t: Cell::new(f64::NAN) }
        }
    }

    impl EquationForms for Recording {
        fn evaluate_form(&self, t: f64, _c: &[f64], _id: i32) -> Result<f64, EqFormError> {
            self.seen_t.set(t);
            Ok(0.0)
        }
    }

    fn compound_with(property: TdepProperty, equation_id: i32, tc: Option<f64>) -> Compound {
        let mut c = Compound::default();
        c.name = "test".to_string();
        if let Some(tc) = tc {
            c.set_constant(ConstantProperty::Tc, tc);
        }
        c.set_correlation(
            property,
            CorrelationRecord {
                equation_id,
                t_min: 200.0,
                t_max: 400.0,
                coefficients: vec![1.0],
            },
        );
        c
    }

    #[test]
    fn absent_record_is_an_error() {
        let c = Compound::default();
        let err = evaluate(&c, TdepProperty::Vp, 300.0, &Recording::new()).unwrap_err();
        assert!(matches!(err, EvalError::NoCorrelation { .. }));
    }

    #[test]
    fn ldn_eq116_uses_one_minus_reduced_temperature() {
        let c = compound_with(TdepProperty::Ldn, 116, Some(500.0));
        let forms = Recording::new();
        evaluate(&c, TdepProperty::Ldn, 400.0, &forms).unwrap();
        assert!((forms.seen_t.get() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn hvp_eq106_uses_reduced_temperature() {
        let c = compound_with(TdepProperty::Hvp, 106, Some(500.0));
        let forms = Recording::new();
        evaluate(&c, TdepProperty::Hvp, 400.0, &forms).unwrap();
        assert!((forms.seen_t.get() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn transform_is_gated_on_equation_id() {
        // LDN with eq 105 passes t through untouched.
        let c = compound_with(TdepProperty::Ldn, 105, Some(500.0));
        let forms = Recording::new();
        evaluate(&c, TdepProperty::Ldn, 400.0, &forms).unwrap();
        assert_eq!(forms.seen_t.get(), 400.0);
    }

    #[test]
    fn vp_never_transforms() {
        // VP is not in the transform table at all, even for eq 106.
        let c = compound_with(TdepProperty::Vp, 106, Some(500.0));
        let forms = Recording::new();
        evaluate(&c, TdepProperty::Vp, 400.0, &forms).unwrap();
        assert_eq!(forms.seen_t.get(), 400.0);
    }

    #[test]
    fn transform_without_critical_temperature_is_an_error() {
        let c = compound_with(TdepProperty::Ldn, 116, None);
        let err = evaluate(&c, TdepProperty::Ldn, 400.0, &Recording::new()).unwrap_err();
        assert!(matches!(err, EvalError::MissingCriticalTemperature { equation_id: 116, .. }));
    }

    #[test]
    fn transform_table_is_exact() {
        use Transform::*;
        assert_eq!(transform_kind(TdepProperty::Ldn, 119), OneMinusReduced);
        assert_eq!(transform_kind(TdepProperty::Lcp, 114), OneMinusReduced);
        assert_eq!(transform_kind(TdepProperty::Lcp, 124), OneMinusReduced);
        assert_eq!(transform_kind(TdepProperty::St, 106), Reduced);
        assert_eq!(transform_kind(TdepProperty::Ltc, 123), OneMinusReduced);
        // near misses
        assert_eq!(transform_kind(TdepProperty::Ldn, 105), None);
        assert_eq!(transform_kind(TdepProperty::Hvp, 107), None);
        assert_eq!(transform_kind(TdepProperty::Svp, 106), None);
        assert_eq!(transform_kind(TdepProperty::Lvs, 101), None);
    }
}

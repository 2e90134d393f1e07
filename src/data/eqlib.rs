use thiserror::Error;

// ---------------------------------------------------------------------------
// Correlation equation library boundary
// ---------------------------------------------------------------------------

/// Failure from the equation form library.
#[derive(Debug, Error, PartialEq)]
pub enum EqFormError {
    #[error("equation form {0} is not supported")]
    UnsupportedEquation(i32),
    #[error("equation form {equation_id} needs at least {expected} coefficients, got {got}")]
    TooFewCoefficients {
        equation_id: i32,
        expected: usize,
        got: usize,
    },
}

/// Evaluator for numbered correlation equation forms.
///
/// `t` is whatever independent variable the form expects; callers that use
/// reduced-temperature forms (106, 114, 116, 119, 123, 124) must transform
/// the temperature before calling. The seam is a trait so the correlation
/// evaluator can be tested against a recording stub.
pub trait EquationForms {
    fn evaluate_form(&self, t: f64, coefficients: &[f64], equation_id: i32)
        -> Result<f64, EqFormError>;
}

// ---------------------------------------------------------------------------
// DipprForms – the standard DIPPR correlation forms
// ---------------------------------------------------------------------------

/// The standard DIPPR correlation forms.
///
/// Coefficients are positional `[A, B, C, ...]`. Trailing coefficients may be
/// omitted and read as zero, except where a form puts one in a base or a
/// denominator argument (105, 107, 127), which require the full vector.
#[derive(Debug, Default, Clone)]
pub struct DipprForms;

impl EquationForms for DipprForms {
    fn evaluate_form(
        &self,
        t: f64,
        coefficients: &[f64],
        equation_id: i32,
    ) -> Result<f64, EqFormError> {
        let c = |i: usize| coefficients.get(i).copied().unwrap_or(0.0);
        let require = |n: usize| {
            if coefficients.len() < n {
                Err(EqFormError::TooFewCoefficients {
                    equation_id,
                    expected: n,
                    got: coefficients.len(),
                })
            } else {
                Ok(())
            }
        };

        let y = match equation_id {
            // y = A + B·t + C·t² + ...
            100 => coefficients
                .iter()
                .rev()
                .fold(0.0, |acc, &ci| acc * t + ci),
            // y = exp(A + B/t + C·ln t + D·t^E)
            101 => (c(0) + c(1) / t + c(2) * t.ln() + c(3) * t.powf(c(4))).exp(),
            // y = A·t^B / (1 + C/t + D/t²)
            102 => c(0) * t.powf(c(1)) / (1.0 + c(2) / t + c(3) / (t * t)),
            // y = A + B/t + C/t³ + D/t⁸ + E/t⁹
            104 => {
                c(0) + c(1) / t
                    + c(2) / t.powi(3)
                    + c(3) / t.powi(8)
                    + c(4) / t.powi(9)
            }
            // y = A / B^(1 + (1 − t/C)^D)
            105 => {
                require(4)?;
                c(0) / c(1).powf(1.0 + (1.0 - t / c(2)).powf(c(3)))
            }
            // y = A·(1 − Tr)^(B + C·Tr + D·Tr² + E·Tr³), t is Tr
            106 => {
                let tr = t;
                c(0) * (1.0 - tr).powf(c(1) + c(2) * tr + c(3) * tr * tr + c(4) * tr.powi(3))
            }
            // y = A + B·[(C/t)/sinh(C/t)]² + D·[(E/t)/cosh(E/t)]²
            107 => {
                require(5)?;
                let s = c(2) / t;
                let h = c(4) / t;
                c(0) + c(1) * (s / s.sinh()).powi(2) + c(3) * (h / h.cosh()).powi(2)
            }
            // y = A²/τ + B − 2ACτ − ADτ² − C²τ³/3 − CDτ⁴/2 − D²τ⁵/5, t is τ = 1 − Tr
            114 => {
                let tau = t;
                c(0) * c(0) / tau + c(1)
                    - 2.0 * c(0) * c(2) * tau
                    - c(0) * c(3) * tau * tau
                    - c(2) * c(2) * tau.powi(3) / 3.0
                    - c(2) * c(3) * tau.powi(4) / 2.0
                    - c(3) * c(3) * tau.powi(5) / 5.0
            }
            // y = exp(A + B/t + C·ln t + D·t² + E/t²)
            115 => (c(0) + c(1) / t + c(2) * t.ln() + c(3) * t * t + c(4) / (t * t)).exp(),
            // y = A + B·τ^0.35 + C·τ^(2/3) + D·τ + E·τ^(4/3), t is τ = 1 − Tr
            116 => {
                let tau = t;
                c(0) + c(1) * tau.powf(0.35)
                    + c(2) * tau.powf(2.0 / 3.0)
                    + c(3) * tau
                    + c(4) * tau.powf(4.0 / 3.0)
            }
            // y = A + B·τ^(1/3) + C·τ^(2/3) + D·τ^(5/3) + E·τ^(16/3)
            //       + F·τ^(43/3) + G·τ^(110/3), t is τ = 1 − Tr
            119 => {
                let tau = t;
                c(0) + c(1) * tau.powf(1.0 / 3.0)
                    + c(2) * tau.powf(2.0 / 3.0)
                    + c(3) * tau.powf(5.0 / 3.0)
                    + c(4) * tau.powf(16.0 / 3.0)
                    + c(5) * tau.powf(43.0 / 3.0)
                    + c(6) * tau.powf(110.0 / 3.0)
            }
            // y = A·(1 + B·τ^(1/3) + C·τ^(2/3) + D·τ), t is τ = 1 − Tr
            123 => {
                let tau = t;
                c(0) * (1.0
                    + c(1) * tau.powf(1.0 / 3.0)
                    + c(2) * tau.powf(2.0 / 3.0)
                    + c(3) * tau)
            }
            // y = A + B/τ + C·τ + D·τ² + E·τ³, t is τ = 1 − Tr
            124 => {
                let tau = t;
                c(0) + c(1) / tau + c(2) * tau + c(3) * tau * tau + c(4) * tau.powi(3)
            }
            // y = A + B·g(C/t) + D·g(E/t) + F·g(G/t)
            // with g(x) = x²·eˣ/(eˣ − 1)² (Einstein heat capacity terms)
            127 => {
                require(7)?;
                let g = |x: f64| {
                    let e = x.exp();
                    x * x * e / ((e - 1.0) * (e - 1.0))
                };
                c(0) + c(1) * g(c(2) / t) + c(3) * g(c(4) / t) + c(5) * g(c(6) / t)
            }
            other => return Err(EqFormError::UnsupportedEquation(other)),
        };

        Ok(y)
    }
}

use log::debug;
use thiserror::Error;

use super::catalog::{classify, ConstantProperty, PropertyClass, TdepProperty};
use super::eqlib::EquationForms;
use super::eval::{evaluate, EvalError};
use super::model::Compound;

// ---------------------------------------------------------------------------
// Comparison datasets
// ---------------------------------------------------------------------------

/// Number of samples per temperature-dependent curve.
pub const CURVE_SAMPLES: usize = 50;

/// Margin (K) subtracted from `t_max` before sampling, so curves never touch
/// the upper bound that some correlation forms treat as singular.
pub const T_MAX_MARGIN: f64 = 1.0;

/// One scatter series: a constant property against molecular weight.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    /// Molecular weights, one per compound with data.
    pub xs: Vec<f64>,
    /// Property values, parallel to `xs`.
    pub ys: Vec<f64>,
    /// Compound display names, parallel to `xs`.
    pub labels: Vec<String>,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
}

/// One sampled correlation curve for a single compound.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Compound display name, used as the legend label.
    pub name: String,
    /// `[x, y]` pairs, already axis-transformed where the policy applies.
    pub points: Vec<[f64; 2]>,
}

/// A family of curves sharing one pair of axes.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    pub curves: Vec<Curve>,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
}

/// A plot-ready comparison dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Scatter(ScatterSeries),
    Curves(CurveSet),
}

/// Why no dataset was produced. The first two variants are normal outcomes
/// of interactive use ("nothing to graph"), not failures.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("property {0} is not a known property")]
    UnknownProperty(String),
    #[error("no data for {0} were found in the loaded compounds")]
    NoData(String),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Assemble a comparison dataset for `property_name` across `compounds`.
///
/// Side effect: if any compound has a molecular weight, `compounds` is
/// stably sorted in place by ascending molecular weight before assembly, so
/// series come out lightest first. Compounds without a molecular weight sort
/// after the rest; the comparator is a total order and never panics.
///
/// Compounds without data for the property are filtered out. An unknown
/// property name or an empty subset yields a structured [`CompareError`]
/// rather than a dataset.
pub fn build_comparison<F: EquationForms>(
    compounds: &mut [Compound],
    property_name: &str,
    forms: &F,
) -> Result<Comparison, CompareError> {
    let class = classify(property_name);
    if class == PropertyClass::Unknown {
        return Err(CompareError::UnknownProperty(property_name.to_string()));
    }

    if compounds.iter().any(|c| c.molecular_weight().is_some()) {
        // total_cmp gives a true total order (absent MW maps to NaN and sorts
        // last); the std sort panics on inconsistent comparators.
        compounds.sort_by(|a, b| {
            let ma = a.molecular_weight().unwrap_or(f64::NAN);
            let mb = b.molecular_weight().unwrap_or(f64::NAN);
            ma.total_cmp(&mb)
        });
    }

    match class {
        PropertyClass::Constant(p) => build_scatter(compounds, p),
        PropertyClass::TemperatureDependent(p) => build_curves(compounds, p, forms),
        PropertyClass::Unknown => unreachable!(),
    }
}

fn build_scatter(compounds: &[Compound], p: ConstantProperty) -> Result<Comparison, CompareError> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut labels = Vec::new();

    for c in compounds {
        if let Some(value) = c.constant(p) {
            xs.push(c.molecular_weight().unwrap_or(f64::NAN));
            ys.push(value);
            labels.push(c.name.clone());
        }
    }
    if ys.is_empty() {
        return Err(CompareError::NoData(p.key().to_string()));
    }
    debug!("{}: scatter with {} compounds", p.key(), ys.len());

    Ok(Comparison::Scatter(ScatterSeries {
        xs,
        ys,
        labels,
        x_label: "MW".to_string(),
        y_label: p.key().to_string(),
        title: format!("{} vs MW", p.key()),
    }))
}

fn build_curves<F: EquationForms>(
    compounds: &[Compound],
    p: TdepProperty,
    forms: &F,
) -> Result<Comparison, CompareError> {
    // VP, SVP, and LVS plot linearly as ln(y) against 1/T.
    let log_axes = matches!(p, TdepProperty::Vp | TdepProperty::Svp | TdepProperty::Lvs);

    let mut curves = Vec::new();
    for c in compounds {
        let Some(record) = c.correlation(p) else {
            continue;
        };
        let t_lo = record.t_min;
        let t_hi = record.t_max - T_MAX_MARGIN;
        let step = (t_hi - t_lo) / (CURVE_SAMPLES - 1) as f64;

        let mut points = Vec::with_capacity(CURVE_SAMPLES);
        for i in 0..CURVE_SAMPLES {
            let t = t_lo + step * i as f64;
            let y = evaluate(c, p, t, forms)?;
            points.push(if log_axes { [1.0 / t, y.ln()] } else { [t, y] });
        }
        curves.push(Curve {
            name: c.name.clone(),
            points,
        });
    }
    if curves.is_empty() {
        return Err(CompareError::NoData(p.key().to_string()));
    }
    debug!("{}: {} curves of {} samples", p.key(), curves.len(), CURVE_SAMPLES);

    let (x_label, y_label) = if log_axes {
        ("1/T".to_string(), format!("ln({})", p.key()))
    } else {
        ("T".to_string(), p.key().to_string())
    };

    Ok(Comparison::Curves(CurveSet {
        curves,
        x_label,
        y_label,
        title: format!("Temperature Behavior of {}", p.key()),
    }))
}

use std::collections::BTreeMap;

use super::catalog::{ConstantProperty, TdepProperty};

// ---------------------------------------------------------------------------
// CorrelationRecord – coefficients of one temperature-dependent correlation
// ---------------------------------------------------------------------------

/// The correlation backing one temperature-dependent property.
///
/// A record only exists when the source file provided one; absence is modeled
/// as `None` in the compound's correlation map, so a constructed record always
/// carries a real equation id and real temperature bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationRecord {
    /// Which correlation form the equation library should evaluate.
    pub equation_id: i32,
    /// Lower bound of the validity interval, K.
    pub t_min: f64,
    /// Upper bound of the validity interval, K.
    pub t_max: f64,
    /// Coefficient vector; length depends on the equation form. May be empty.
    pub coefficients: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Compound – one modeled chemical substance
// ---------------------------------------------------------------------------

/// A compound with its full set of properties, populated from one source file.
///
/// Constant properties live in a map keyed by the catalog; an absent property
/// is simply a missing entry. The correlations map always holds all 15
/// temperature-dependent keys, with `None` marking absent data, so callers
/// can index it unconditionally.
#[derive(Debug, Clone)]
pub struct Compound {
    /// Display name; not required to be unique across a dataset.
    pub name: String,
    /// Numeric identifier from the source database, if given.
    pub chem_id: Option<i64>,
    constants: BTreeMap<ConstantProperty, f64>,
    correlations: BTreeMap<TdepProperty, Option<CorrelationRecord>>,
}

impl Default for Compound {
    fn default() -> Self {
        let correlations = TdepProperty::ALL.iter().map(|&p| (p, None)).collect();
        Compound {
            name: String::new(),
            chem_id: None,
            constants: BTreeMap::new(),
            correlations,
        }
    }
}

impl Compound {
    /// Look up a constant property value, `None` if the file never set it.
    pub fn constant(&self, p: ConstantProperty) -> Option<f64> {
        self.constants.get(&p).copied()
    }

    /// Set a constant property value (used during population).
    pub fn set_constant(&mut self, p: ConstantProperty, value: f64) {
        self.constants.insert(p, value);
    }

    /// The correlation record for a temperature-dependent property, `None`
    /// if the file carried no data for it.
    pub fn correlation(&self, p: TdepProperty) -> Option<&CorrelationRecord> {
        self.correlations.get(&p).and_then(|r| r.as_ref())
    }

    /// Install a correlation record (used during population).
    pub fn set_correlation(&mut self, p: TdepProperty, record: CorrelationRecord) {
        self.correlations.insert(p, Some(record));
    }

    /// Molecular weight, the x-axis of every constant-property comparison.
    pub fn molecular_weight(&self) -> Option<f64> {
        self.constant(ConstantProperty::Mw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_compound_is_fully_absent() {
        let c = Compound::default();
        assert!(c.name.is_empty());
        assert_eq!(c.chem_id, None);
        for p in ConstantProperty::ALL {
            assert_eq!(c.constant(p), None);
        }
        for p in TdepProperty::ALL {
            assert!(c.correlation(p).is_none());
        }
    }

    #[test]
    fn correlations_map_carries_every_key() {
        let c = Compound::default();
        assert_eq!(c.correlations.len(), TdepProperty::ALL.len());
        for p in TdepProperty::ALL {
            assert!(c.correlations.contains_key(&p));
        }
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut c = Compound::default();
        c.set_constant(ConstantProperty::Mw, 18.015);
        assert_eq!(c.molecular_weight(), Some(18.015));

        let rec = CorrelationRecord {
            equation_id: 101,
            t_min: 273.16,
            t_max: 647.096,
            coefficients: vec![73.649, -7258.2, -7.3037, 4.1653e-6, 2.0],
        };
        c.set_correlation(TdepProperty::Vp, rec.clone());
        assert_eq!(c.correlation(TdepProperty::Vp), Some(&rec));
        assert!(c.correlation(TdepProperty::Svp).is_none());
    }
}

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::debug;

use super::catalog::{ConstantProperty, TdepProperty};
use super::model::{Compound, CorrelationRecord};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load one compound from a definition file.
///
/// The file is UTF-8 text, one record per line: a key, then tab-separated
/// value tokens. `#` starts an end-of-line comment and blank lines are
/// ignored. A missing or unreadable file is an error; so is any present key
/// whose value does not parse.
pub fn load_file(path: &Path) -> Result<Compound> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading compound file '{}'", path.display()))?;
    let records = parse_records(&text);
    debug!("{}: {} keyed records", path.display(), records.len());
    compound_from_records(&records)
        .with_context(|| format!("parsing compound file '{}'", path.display()))
}

// ---------------------------------------------------------------------------
// Record parser
// ---------------------------------------------------------------------------

/// Split file content into a key → value-token mapping.
///
/// Per line: trim surrounding whitespace, drop a trailing tab, truncate at
/// the first `#`, then split on tabs. The first token is the key, the rest
/// are the values. Lines that end up empty or carry a key with no values are
/// skipped; a repeated key overwrites the earlier entry (last wins).
pub fn parse_records(text: &str) -> BTreeMap<String, Vec<String>> {
    let mut records = BTreeMap::new();

    for line in text.lines() {
        // trim covers the trailing-tab rule too; tabs are whitespace
        let line = line.trim();
        let line = line.split('#').next().unwrap_or("").trim_end();
        if line.is_empty() {
            continue;
        }

        let mut tokens = line.split('\t');
        let key = tokens.next().unwrap_or("");
        let values: Vec<String> = tokens.map(|t| t.to_string()).collect();
        if values.is_empty() {
            // Placeholder line: a key with no values never creates or
            // overwrites an entry.
            continue;
        }
        records.insert(key.to_string(), values);
    }

    records
}

// ---------------------------------------------------------------------------
// Compound population
// ---------------------------------------------------------------------------

/// Build a [`Compound`] from parsed records.
///
/// The loop is keyed by the property catalog, not by file order, so files may
/// list properties in any order. Keys absent from the file leave the
/// corresponding field in its absent state; keys present with unparseable
/// values are an error (absent and malformed are distinct).
pub fn compound_from_records(records: &BTreeMap<String, Vec<String>>) -> Result<Compound> {
    let mut compound = Compound::default();

    if let Some(values) = records.get("Name") {
        compound.name = values.first().cloned().unwrap_or_default();
    }
    if let Some(values) = records.get("ChemID") {
        let tok = values.first().map(String::as_str).unwrap_or("");
        compound.chem_id = Some(
            tok.parse::<i64>()
                .with_context(|| format!("key 'ChemID': '{tok}' is not an integer"))?,
        );
    }

    for p in ConstantProperty::ALL {
        if let Some(values) = records.get(p.key()) {
            let tok = values.first().map(String::as_str).unwrap_or("");
            compound.set_constant(p, parse_f64(tok, p.key())?);
        }
    }

    for p in TdepProperty::ALL {
        if let Some(values) = records.get(p.key()) {
            compound.set_correlation(p, parse_correlation(values, p.key())?);
        }
    }

    Ok(compound)
}

/// Parse one correlation value list: `[equationId, tMin, tMax, c0, c1, ...]`.
/// The coefficient vector may be empty.
fn parse_correlation(values: &[String], key: &str) -> Result<CorrelationRecord> {
    if values.len() < 3 {
        bail!(
            "key '{key}': expected at least 'equationId<TAB>tMin<TAB>tMax', got {} value(s)",
            values.len()
        );
    }

    let equation_id = values[0]
        .parse::<i32>()
        .with_context(|| format!("key '{key}': equation id '{}' is not an integer", values[0]))?;
    let t_min = parse_f64(&values[1], key)?;
    let t_max = parse_f64(&values[2], key)?;
    let coefficients = values[3..]
        .iter()
        .map(|tok| parse_f64(tok, key))
        .collect::<Result<Vec<f64>>>()?;

    Ok(CorrelationRecord {
        equation_id,
        t_min,
        t_max,
        coefficients,
    })
}

fn parse_f64(token: &str, key: &str) -> Result<f64> {
    token
        .parse::<f64>()
        .with_context(|| format!("key '{key}': '{token}' is not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::{ConstantProperty, TdepProperty};

    #[test]
    fn parses_simple_key_value_lines() {
        let records = parse_records("Name\tWater\nMW\t18.015\n");
        assert_eq!(records["Name"], vec!["Water"]);
        assert_eq!(records["MW"], vec!["18.015"]);
    }

    #[test]
    fn value_tokens_round_trip() {
        let line = "VP\t101\t273.16\t647.096\t73.649\t-7258.2";
        let records = parse_records(line);
        assert_eq!(records["VP"].join("\t"), "101\t273.16\t647.096\t73.649\t-7258.2");
    }

    #[test]
    fn comment_is_stripped() {
        let with = parse_records("MW\t100.0\t# note\n");
        let without = parse_records("MW\t100.0\n");
        assert_eq!(with, without);
    }

    #[test]
    fn comment_only_and_blank_lines_are_skipped() {
        let records = parse_records("# header comment\n\n   \nMW\t18.015\n");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn key_without_values_is_ignored() {
        let records = parse_records("MW\t18.015\nMW\nTC\n");
        assert_eq!(records["MW"], vec!["18.015"]);
        assert!(!records.contains_key("TC"));
    }

    #[test]
    fn repeated_key_last_wins() {
        let records = parse_records("MW\t18.015\nMW\t44.01\n");
        assert_eq!(records["MW"], vec!["44.01"]);
    }

    #[test]
    fn trailing_tab_is_dropped() {
        // A trailing tab would otherwise contribute an empty value token.
        let records = parse_records("MW\t18.015\t\n");
        assert_eq!(records["MW"], vec!["18.015"]);
    }

    #[test]
    fn populates_name_id_and_constants() {
        let records = parse_records("Name\tWater\nChemID\t1921\nMW\t18.015\nTC\t647.096\n");
        let c = compound_from_records(&records).unwrap();
        assert_eq!(c.name, "Water");
        assert_eq!(c.chem_id, Some(1921));
        assert_eq!(c.constant(ConstantProperty::Mw), Some(18.015));
        assert_eq!(c.constant(ConstantProperty::Tc), Some(647.096));
        assert_eq!(c.constant(ConstantProperty::Pc), None);
    }

    #[test]
    fn populates_correlation_record() {
        let records = parse_records("VP\t101\t273.16\t647.096\t73.649\t-7258.2\t-7.3037\t4.1653e-6\t2\n");
        let c = compound_from_records(&records).unwrap();
        let rec = c.correlation(TdepProperty::Vp).unwrap();
        assert_eq!(rec.equation_id, 101);
        assert_eq!(rec.t_min, 273.16);
        assert_eq!(rec.t_max, 647.096);
        assert_eq!(rec.coefficients, vec![73.649, -7258.2, -7.3037, 4.1653e-6, 2.0]);
    }

    #[test]
    fn correlation_coefficients_may_be_empty() {
        let records = parse_records("SVR\t104\t200.0\t1500.0\n");
        let c = compound_from_records(&records).unwrap();
        let rec = c.correlation(TdepProperty::Svr).unwrap();
        assert!(rec.coefficients.is_empty());
    }

    #[test]
    fn short_correlation_line_is_an_error() {
        let records = parse_records("VP\t101\t273.16\n");
        assert!(compound_from_records(&records).is_err());
    }

    #[test]
    fn malformed_constant_is_an_error_not_absent() {
        let records = parse_records("MW\tabc\n");
        assert!(compound_from_records(&records).is_err());
    }

    #[test]
    fn malformed_chem_id_is_an_error() {
        let records = parse_records("ChemID\t19.5\n");
        assert!(compound_from_records(&records).is_err());
    }

    #[test]
    fn population_is_order_independent() {
        let a = compound_from_records(&parse_records("MW\t18.015\nTC\t647.096\n")).unwrap();
        let b = compound_from_records(&parse_records("TC\t647.096\nMW\t18.015\n")).unwrap();
        assert_eq!(a.constant(ConstantProperty::Mw), b.constant(ConstantProperty::Mw));
        assert_eq!(a.constant(ConstantProperty::Tc), b.constant(ConstantProperty::Tc));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let records = parse_records("BOGUS\t1.0\nMW\t18.015\n");
        let c = compound_from_records(&records).unwrap();
        assert_eq!(c.constant(ConstantProperty::Mw), Some(18.015));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_file(Path::new("/nonexistent/water.cmp")).unwrap_err();
        assert!(err.to_string().contains("water.cmp"));
    }
}

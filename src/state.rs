use std::path::Path;

use crate::data::compare::{build_comparison, Comparison, CompareError};
use crate::data::eqlib::DipprForms;
use crate::data::loader;
use crate::data::model::Compound;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Compounds loaded so far, one per opened file.
    pub compounds: Vec<Compound>,

    /// File key of the property currently being compared (e.g. "VP").
    pub selected_property: Option<String>,

    /// The assembled dataset for the current selection (cached).
    pub comparison: Option<Comparison>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// The correlation form library used for evaluation.
    pub forms: DipprForms,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            compounds: Vec::new(),
            selected_property: None,
            comparison: None,
            status_message: None,
            forms: DipprForms,
        }
    }
}

impl AppState {
    /// Load one compound file, appending it to the list. A failed load keeps
    /// existing compounds and surfaces the error as a status message.
    pub fn load_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(compound) => {
                log::info!(
                    "loaded '{}' (ChemID {:?}) from {}",
                    compound.name,
                    compound.chem_id,
                    path.display()
                );
                self.compounds.push(compound);
                self.status_message = None;
                self.rebuild_comparison();
            }
            Err(e) => {
                log::error!("failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Change the compared property and rebuild the dataset.
    pub fn select_property(&mut self, key: String) {
        self.selected_property = Some(key);
        self.rebuild_comparison();
    }

    /// Drop all loaded compounds and the current dataset.
    pub fn clear(&mut self) {
        self.compounds.clear();
        self.comparison = None;
        self.status_message = None;
    }

    /// Re-assemble the comparison for the current selection.
    ///
    /// Note: assembly sorts `compounds` in place by molecular weight, so the
    /// side-panel list reorders along with the plot.
    pub fn rebuild_comparison(&mut self) {
        let Some(property) = self.selected_property.clone() else {
            self.comparison = None;
            return;
        };
        if self.compounds.is_empty() {
            self.comparison = None;
            return;
        }

        match build_comparison(&mut self.compounds, &property, &self.forms) {
            Ok(comparison) => {
                self.comparison = Some(comparison);
                self.status_message = None;
            }
            Err(e @ (CompareError::UnknownProperty(_) | CompareError::NoData(_))) => {
                // Nothing to graph: a normal outcome, shown as a message.
                self.comparison = None;
                self.status_message = Some(e.to_string());
            }
            Err(CompareError::Eval(e)) => {
                log::error!("evaluation failed for {property}: {e}");
                self.comparison = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::ConstantProperty;

    fn with_mw(name: &str, mw: f64) -> Compound {
        let mut c = Compound::default();
        c.name = name.to_string();
        c.set_constant(ConstantProperty::Mw, mw);
        c
    }

    #[test]
    fn selecting_a_property_builds_a_comparison() {
        let mut state = AppState::default();
        state.compounds.push(with_mw("water", 18.015));
        state.select_property("MW".to_string());
        assert!(state.comparison.is_some());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn no_data_clears_the_plot_and_sets_a_message() {
        let mut state = AppState::default();
        state.compounds.push(with_mw("water", 18.015));
        state.select_property("VP".to_string());
        assert!(state.comparison.is_none());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn missing_file_becomes_a_status_message() {
        let mut state = AppState::default();
        state.load_path(Path::new("/nonexistent/water.cmp"));
        assert!(state.compounds.is_empty());
        assert!(state.status_message.is_some());
    }
}

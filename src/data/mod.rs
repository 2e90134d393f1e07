/// Data layer: property catalog, compound model, parsing, evaluation,
/// and comparison assembly.
///
/// Architecture:
/// ```text
///  compound file (.cmp)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse key/value records → Compound
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Compound  │  constants + correlation records (catalog-keyed)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐     ┌────────┐     ┌────────┐
///   │ compare   │ ──► │  eval   │ ──► │ eqlib   │
///   └──────────┘     └────────┘     └────────┘
///        │         sample curves    correlation forms
///        ▼
///   Comparison (scatter or curves) → ui::plot
/// ```

pub mod catalog;
pub mod compare;
pub mod eqlib;
pub mod eval;
pub mod loader;
pub mod model;

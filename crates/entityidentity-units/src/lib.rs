//! Strict unit normalization (spec.md [UNITS]): "convert only when complete".
//!
//! Grounded on `units/unitapi.py`, `units/unitnorm.py` (and its
//! `tests/test_units.py` for the exact conversion arithmetic): a per-material
//! canonical-unit rule table, converting only when every required grade/
//! ton-system parameter is present and in range, otherwise preserving `raw`
//! and emitting an explanatory warning. Not a snapshot-backed domain — the
//! rule table is fixed at compile time, not loaded from a data file.

pub mod resolver;
pub mod rules;
pub mod types;

pub use resolver::{get_canonical_unit, normalize_unit, validate_conversion_inputs, CanonicalUnitInfo, ValidationResult};
pub use types::{NormResult, TonSystem, UnitInput, UnitResult};

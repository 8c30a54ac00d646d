
use super::unit::Unit;

use thiserror::Error;

/// The fixed table of canonical length units.
///
/// Enumeration order is significant: alias resolution and the manual
/// converter's unit selectors both follow the order in which units
/// appear here, so the table is a literal array rather than a hash
/// map with incidental iteration order.
#[derive(Debug, Clone)]
pub struct UnitTable {
  units: Vec<Unit>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown unit '{name}'")]
pub struct UnknownUnitError {
  pub name: String,
}

impl UnknownUnitError {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }
}

impl UnitTable {
  pub fn new(units: impl IntoIterator<Item = Unit>) -> Self {
    Self { units: units.into_iter().collect() }
  }

  /// Looks up a unit by its canonical name. Alias spellings are not
  /// accepted here; resolve them first with
  /// [`AliasTable::normalize`](super::aliases::AliasTable::normalize).
  pub fn get(&self, name: &str) -> Result<&Unit, UnknownUnitError> {
    self.units.iter()
      .find(|u| u.name() == name)
      .ok_or_else(|| UnknownUnitError::new(name))
  }

  pub fn contains(&self, name: &str) -> bool {
    self.units.iter().any(|u| u.name() == name)
  }

  /// All units, in table enumeration order.
  pub fn units(&self) -> &[Unit] {
    &self.units
  }

  pub fn len(&self) -> usize {
    self.units.len()
  }

  pub fn is_empty(&self) -> bool {
    self.units.is_empty()
  }

  /// Converts `value` from one unit into another, through the meter
  /// intermediate. Adding a unit to the table therefore requires one
  /// new factor entry, not one entry per unit pair.
  ///
  /// No rounding happens here; truncation to display precision is a
  /// presentation concern.
  pub fn convert(&self, value: f64, from: &Unit, to: &Unit) -> f64 {
    to.from_base(from.to_base(value))
  }

  /// Convenience wrapper around [`UnitTable::convert`] which resolves
  /// both canonical names first.
  pub fn convert_by_name(&self, value: f64, from: &str, to: &str) -> Result<f64, UnknownUnitError> {
    let from = self.get(from)?;
    let to = self.get(to)?;
    Ok(self.convert(value, from, to))
  }
}

/// The default table of length units, in its canonical enumeration
/// order.
pub fn default_units_table() -> UnitTable {
  UnitTable::new([
    Unit::new("kilometer", 1000.0),
    Unit::new("meter", 1.0),
    Unit::new("centimeter", 0.01),
    Unit::new("millimeter", 0.001),
    Unit::new("micrometer", 1e-6),
    Unit::new("nanometer", 1e-9),
    Unit::new("mile", 1609.34),
    Unit::new("yard", 0.9144),
    Unit::new("foot", 0.3048),
    Unit::new("inch", 0.0254),
    Unit::new("nautical mile", 1852.0),
  ])
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;

  #[test]
  fn test_get_known_unit() {
    let table = default_units_table();
    let yard = table.get("yard").unwrap();
    assert_eq!(yard.name(), "yard");
    assert_abs_diff_eq!(yard.factor(), 0.9144);
  }

  #[test]
  fn test_get_unknown_unit() {
    let table = default_units_table();
    assert_eq!(table.get("zz"), Err(UnknownUnitError::new("zz")));
    assert!(!table.contains("zz"));
  }

  #[test]
  fn test_identity_conversion() {
    let table = default_units_table();
    for unit in table.units() {
      assert_abs_diff_eq!(table.convert(7.25, unit, unit), 7.25);
    }
  }

  #[test]
  fn test_round_trip_conversion() {
    let table = default_units_table();
    for from in table.units() {
      for to in table.units() {
        let there = table.convert(1.0, from, to);
        let back = table.convert(there, to, from);
        assert_abs_diff_eq!(back, 1.0, epsilon = 1e-9);
      }
    }
  }

  #[test]
  fn test_mile_to_foot() {
    let table = default_units_table();
    let result = table.convert_by_name(1.0, "mile", "foot").unwrap();
    // 1609.34 / 0.3048; the stored mile factor is slightly short of
    // the exact 1609.344, so this is just shy of 5280.
    assert_abs_diff_eq!(result, 5279.98688, epsilon = 1e-5);
    assert_abs_diff_eq!(result, 5280.0, epsilon = 0.02);
  }

  #[test]
  fn test_feet_to_inches() {
    let table = default_units_table();
    let result = table.convert_by_name(10.0, "foot", "inch").unwrap();
    assert_abs_diff_eq!(result, 120.0, epsilon = 1e-9);
  }

  #[test]
  fn test_convert_by_name_unknown() {
    let table = default_units_table();
    let err = table.convert_by_name(1.0, "meter", "cubit").unwrap_err();
    assert_eq!(err.name, "cubit");
  }

  #[test]
  fn test_enumeration_order() {
    let table = default_units_table();
    let names: Vec<_> = table.units().iter().map(|u| u.name()).collect();
    assert_eq!(names[0], "kilometer");
    assert_eq!(names[5], "nanometer");
    assert_eq!(names[10], "nautical mile");
    assert_eq!(table.len(), 11);
  }
}

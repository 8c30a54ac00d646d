
use std::fmt::{self, Formatter, Display};

/// A unit is a named length quantity which can be converted to the
/// base unit of the table.
///
/// Our base unit is the meter, so the factor stored here is the
/// number of meters equal to one of this unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
  name: &'static str,
  /// The amount of the base unit that is equal to one of this unit.
  factor: f64,
}

impl Unit {
  /// Constructs a new unit, given the unit's canonical name and its
  /// conversion factor to get to meters.
  pub const fn new(name: &'static str, factor: f64) -> Self {
    Self { name, factor }
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn factor(&self) -> f64 {
    self.factor
  }

  /// Converts a scalar quantity from this unit to meters.
  pub fn to_base(&self, amount: f64) -> f64 {
    amount * self.factor
  }

  /// Converts a scalar quantity from meters into this unit.
  pub fn from_base(&self, amount: f64) -> f64 {
    amount / self.factor
  }
}

impl Display for Unit {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use approx::assert_abs_diff_eq;

  #[test]
  fn test_to_base() {
    let kilometer = Unit::new("kilometer", 1000.0);
    assert_abs_diff_eq!(kilometer.to_base(2.5), 2500.0);
  }

  #[test]
  fn test_from_base() {
    let centimeter = Unit::new("centimeter", 0.01);
    assert_abs_diff_eq!(centimeter.from_base(3.0), 300.0);
  }

  #[test]
  fn test_display() {
    let unit = Unit::new("nautical mile", 1852.0);
    assert_eq!(unit.to_string(), "nautical mile");
  }
}


/// Accepted spellings for each canonical length unit.
///
/// Aliases are stored all-lowercase and the probe is lower-cased
/// before the membership test, so resolution is case-insensitive on
/// both sides. Entries are kept in unit-table enumeration order, and
/// the first matching set wins: "nm" belongs to both the nanometer
/// and nautical-mile sets, and resolves to nanometer.
#[derive(Debug, Clone)]
pub struct AliasTable {
  entries: Vec<AliasEntry>,
}

#[derive(Debug, Clone)]
struct AliasEntry {
  canonical: &'static str,
  aliases: &'static [&'static str],
}

impl AliasTable {
  fn new(entries: Vec<AliasEntry>) -> Self {
    Self { entries }
  }

  /// Resolves an arbitrary spelling to a canonical unit name.
  ///
  /// If no alias set contains the lower-cased input, the lower-cased
  /// input itself is returned rather than an error; callers are
  /// responsible for checking the result against the unit table.
  pub fn normalize(&self, text: &str) -> String {
    let probe = text.to_lowercase();
    for entry in &self.entries {
      if entry.aliases.contains(&probe.as_str()) {
        return entry.canonical.to_owned();
      }
    }
    probe
  }
}

/// The default alias sets, matching the default unit table. Each set
/// includes the canonical spelling, its plural, and the common
/// abbreviation.
pub fn default_alias_table() -> AliasTable {
  AliasTable::new(vec![
    AliasEntry { canonical: "kilometer", aliases: &["km", "kilometer", "kilometers"] },
    AliasEntry { canonical: "meter", aliases: &["m", "meter", "meters"] },
    AliasEntry { canonical: "centimeter", aliases: &["cm", "centimeter", "centimeters"] },
    AliasEntry { canonical: "millimeter", aliases: &["mm", "millimeter", "millimeters"] },
    AliasEntry { canonical: "micrometer", aliases: &["µm", "micrometer", "micrometers"] },
    AliasEntry { canonical: "nanometer", aliases: &["nm", "nanometer", "nanometers"] },
    AliasEntry { canonical: "mile", aliases: &["mile", "miles"] },
    AliasEntry { canonical: "yard", aliases: &["yard", "yards"] },
    AliasEntry { canonical: "foot", aliases: &["ft", "foot", "feet"] },
    AliasEntry { canonical: "inch", aliases: &["in", "inch", "inches"] },
    AliasEntry { canonical: "nautical mile", aliases: &["nm", "nautical mile", "nautical miles"] },
  ])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_normalize_abbreviation() {
    let aliases = default_alias_table();
    assert_eq!(aliases.normalize("Km"), "kilometer");
    assert_eq!(aliases.normalize("ft"), "foot");
    assert_eq!(aliases.normalize("in"), "inch");
  }

  #[test]
  fn test_normalize_plural() {
    let aliases = default_alias_table();
    assert_eq!(aliases.normalize("feet"), "foot");
    assert_eq!(aliases.normalize("Inches"), "inch");
    assert_eq!(aliases.normalize("MILES"), "mile");
  }

  #[test]
  fn test_normalize_multi_word() {
    let aliases = default_alias_table();
    assert_eq!(aliases.normalize("Nautical Mile"), "nautical mile");
    assert_eq!(aliases.normalize("nautical miles"), "nautical mile");
  }

  #[test]
  fn test_normalize_tie_break() {
    // "NM" lower-cases to "nm", which both nanometer and nautical
    // mile claim; nanometer comes first in table order.
    let aliases = default_alias_table();
    assert_eq!(aliases.normalize("NM"), "nanometer");
    assert_eq!(aliases.normalize("nm"), "nanometer");
  }

  #[test]
  fn test_normalize_unknown_passthrough() {
    let aliases = default_alias_table();
    assert_eq!(aliases.normalize("xyz"), "xyz");
    assert_eq!(aliases.normalize("XYZ"), "xyz");
  }
}

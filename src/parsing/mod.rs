
//! Extraction of conversion requests from free text.

use crate::units::aliases::AliasTable;

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern for a conversion request: a non-negative decimal number
/// with an optional fractional part, a single-word unit token, the
/// word "to", and a second unit token. Surrounding text is ignored
/// and the first match in the sentence wins.
///
/// A unit token is one contiguous run of word characters, so
/// multi-word unit names ("nautical mile") cannot be matched from
/// free text; only their single-word aliases are reachable this way.
static REQUEST_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(\w+)\s*to\s*(\w+)").unwrap());

/// A request to convert `value` from one unit to another, extracted
/// from free text. Both unit names have been normalized through the
/// alias table but not yet validated against the unit table.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
  pub value: f64,
  pub from: String,
  pub to: String,
}

/// Parses the first conversion request out of a sentence, or returns
/// `None` if the sentence does not contain the expected pattern.
pub fn parse_request(aliases: &AliasTable, sentence: &str) -> Option<ConversionRequest> {
  let caps = REQUEST_RE.captures(sentence)?;
  // The pattern guarantees a well-formed decimal literal, so failing
  // to parse it is a bug rather than bad user input.
  let value = caps[1].parse::<f64>().expect("matched decimal literal");
  let from = aliases.normalize(&caps[2]);
  let to = aliases.normalize(&caps[3]);
  Some(ConversionRequest { value, from, to })
}

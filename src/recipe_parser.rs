//! # Recipe Text Parsing
//!
//! Turns a block of raw recipe text (typically noisy OCR output) into an
//! ordered list of structured [`Ingredient`] records.
//!
//! Parsing is line oriented. Each line runs through a skip filter (section
//! headers, too-short lines), then through four line-shape rules in fixed
//! priority order; the first rule that yields a usable name wins. Lines no
//! rule accepts degrade into a generic line item unless they look like
//! timing, temperature or step-number noise. The parser is total: any input
//! string, including the empty string, produces a (possibly empty) list and
//! never an error.

use crate::units::is_recognized_unit;
use lazy_static::lazy_static;
use rand::{distr::Alphanumeric, Rng};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

lazy_static! {
    /// Rule A: leading integer, simple fraction or decimal, then a word
    /// token, then the remaining text.
    static ref QUANTITY_UNIT_NAME: Regex =
        Regex::new(r"(?i)^(\d+(?:/\d+)?|\d+\.\d+)\s+(\w+)\s+(.+)$")
            .expect("quantity/unit/name pattern should be valid");
    /// Rule B: same shape with a leading numeric range joined by a hyphen
    /// or en-dash.
    static ref RANGE_UNIT_NAME: Regex = Regex::new(r"(?i)^(\d+[-–]\d+)\s+(\w+)\s+(.+)$")
        .expect("range/unit/name pattern should be valid");
    /// Rule C: qualitative quantity phrase at the start of the line.
    static ref QUALITATIVE_PHRASE: Regex =
        Regex::new(r"(?i)^(a\s+(?:pinch|dash|handful)\s+of|to\s+taste)\s*(.+)$")
            .expect("qualitative phrase pattern should be valid");
    /// Rule D: line made of letters, whitespace and commas only.
    static ref BARE_NAME: Regex =
        Regex::new(r"^([a-zA-Z\s,]+)$").expect("bare name pattern should be valid");
    /// Section headers that introduce a recipe block rather than an
    /// ingredient ("Ingredients:", "Instructions", ...).
    static ref SECTION_HEADER: Regex =
        Regex::new(r"(?i)^(ingredients?|directions?|instructions?|method|recipe|prep|cook)")
            .expect("section header pattern should be valid");
    /// Timing, temperature and step-number noise that must not become a
    /// fallback line item.
    static ref STEP_NOISE: Regex =
        Regex::new(r"(?i)\d{1,2}:\d{2}|minutes?|hours?|degrees?|°[CF]|step\s+\d+")
            .expect("noise pattern should be valid");
}

/// Length of generated record identifiers.
const ID_LENGTH: usize = 9;

/// A structured ingredient record produced by the parser.
///
/// Records are immutable once emitted; an edit downstream should produce a
/// new record with a new identity rather than mutate this one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Opaque identifier, unique within one parse call. Not stable across
    /// calls; never assert on its content.
    pub id: String,
    /// Cleaned ingredient description, always at least two characters.
    pub name: String,
    /// Quantity as written ("2", "1/2", "2-3", "a pinch of"), or "1".
    pub amount: String,
    /// Measurement unit as written, or "item".
    pub unit: String,
}

/// Source of opaque record identifiers.
///
/// Injected into [`RecipeParser`] so the parsing logic stays a pure function
/// of its input text; tests substitute a deterministic generator.
pub trait IdGenerator {
    /// Produce the next identifier.
    fn next_id(&mut self) -> String;
}

/// Default generator: nine random lowercase alphanumeric characters.
#[derive(Debug, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&mut self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(ID_LENGTH)
            .map(|b| (b as char).to_ascii_lowercase())
            .collect()
    }
}

/// Counter-backed generator producing "item-1", "item-2", ...
///
/// Used in tests and anywhere reproducible identifiers matter.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: u64,
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("item-{}", self.counter)
    }
}

/// The four line-shape rules, in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineRule {
    /// "2 cups flour", "1/2 cup sugar", "2.5 l milk"
    QuantityUnitName,
    /// "2-3 cloves garlic"
    RangeUnitName,
    /// "a pinch of salt", "to taste pepper"
    QualitativePhrase,
    /// "Fresh basil"
    BareName,
}

/// Fixed evaluation order. A line that could loosely satisfy more than one
/// shape always resolves to the earliest rule here.
const RULE_ORDER: [LineRule; 4] = [
    LineRule::QuantityUnitName,
    LineRule::RangeUnitName,
    LineRule::QualitativePhrase,
    LineRule::BareName,
];

/// Raw amount/unit/name parts captured by a rule before name cleaning.
#[derive(Debug)]
struct LineParts {
    amount: Option<String>,
    unit: Option<String>,
    name: String,
}

impl LineRule {
    /// Try to break `line` into amount/unit/name parts under this rule.
    fn extract(self, line: &str) -> Option<LineParts> {
        match self {
            LineRule::QuantityUnitName => quantity_parts(&QUANTITY_UNIT_NAME, line),
            LineRule::RangeUnitName => quantity_parts(&RANGE_UNIT_NAME, line),
            LineRule::QualitativePhrase => {
                let caps = QUALITATIVE_PHRASE.captures(line)?;
                Some(LineParts {
                    amount: Some(caps[1].to_string()),
                    unit: None,
                    name: caps[2].to_string(),
                })
            }
            LineRule::BareName => {
                let caps = BARE_NAME.captures(line)?;
                Some(LineParts {
                    amount: None,
                    unit: None,
                    name: caps[1].to_string(),
                })
            }
        }
    }
}

/// Shared extractor for rules A and B: leading numeric token, candidate unit
/// word, remainder. An unrecognized unit word is folded back into the name
/// instead of discarded; the captured quantity is kept either way.
fn quantity_parts(pattern: &Regex, line: &str) -> Option<LineParts> {
    let caps = pattern.captures(line)?;
    let amount = caps[1].to_string();
    let word = &caps[2];
    let rest = &caps[3];

    if is_recognized_unit(word) {
        Some(LineParts {
            amount: Some(amount),
            unit: Some(word.to_string()),
            name: rest.to_string(),
        })
    } else {
        Some(LineParts {
            amount: Some(amount),
            unit: None,
            name: format!("{} {}", word, rest),
        })
    }
}

/// Strip commas, periods, hyphens and parentheses from a candidate name and
/// trim surrounding whitespace.
fn clean_name(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ',' | '.' | '-' | '(' | ')'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Skip filter: section headers and lines shorter than three characters.
fn should_skip(trimmed: &str) -> bool {
    SECTION_HEADER.is_match(trimmed) || trimmed.chars().count() < 3
}

/// Line-oriented recipe text parser.
///
/// Holds only the identifier generator; all matching state is local to each
/// call, so independent instances are safe to run concurrently from any
/// context.
pub struct RecipeParser<G: IdGenerator = RandomIdGenerator> {
    ids: G,
}

impl RecipeParser<RandomIdGenerator> {
    /// Create a parser with random record identifiers.
    pub fn new() -> Self {
        Self {
            ids: RandomIdGenerator,
        }
    }
}

impl Default for RecipeParser<RandomIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> RecipeParser<G> {
    /// Create a parser with a caller-supplied identifier generator.
    pub fn with_id_generator(ids: G) -> Self {
        Self { ids }
    }

    /// Parse a block of recipe text into structured ingredient records.
    ///
    /// Output order follows input line order. Blank lines, section headers
    /// and too-short lines are dropped; anything else survives either
    /// through a line-shape rule or as a best-effort generic line item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use recipe_scanner::recipe_parser::RecipeParser;
    ///
    /// let mut parser = RecipeParser::new();
    /// let ingredients = parser.parse("2 cups flour\n1/2 cup sugar");
    ///
    /// assert_eq!(ingredients.len(), 2);
    /// assert_eq!(ingredients[0].amount, "2");
    /// assert_eq!(ingredients[0].unit, "cups");
    /// assert_eq!(ingredients[0].name, "flour");
    /// ```
    pub fn parse(&mut self, text: &str) -> Vec<Ingredient> {
        let mut ingredients = Vec::new();

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if should_skip(trimmed) {
                trace!(line = trimmed, "line skipped by filter");
                continue;
            }

            if let Some(ingredient) = self.parse_line(trimmed) {
                ingredients.push(ingredient);
            }
        }

        debug!(count = ingredients.len(), "parsed recipe text");
        ingredients
    }

    /// Run the line-shape rules over a single surviving line, falling back
    /// to a generic line item when no rule emits.
    fn parse_line(&mut self, line: &str) -> Option<Ingredient> {
        for rule in RULE_ORDER {
            let Some(parts) = rule.extract(line) else {
                continue;
            };

            let name = clean_name(&parts.name);
            // A rule whose cleaned name is shorter than two characters does
            // not emit and does not stop the scan; later rules still get
            // the line.
            if name.chars().count() < 2 {
                continue;
            }

            trace!(?rule, line, "line matched rule");
            return Some(self.emit(name, parts.amount, parts.unit));
        }

        // Keep the line as a generic item unless it reads like timing,
        // temperature or a step number.
        if line.chars().count() > 2 && !STEP_NOISE.is_match(line) {
            let name = clean_name(line);
            if name.chars().count() >= 2 {
                trace!(line, "fallback line item");
                return Some(self.emit(name, None, None));
            }
        }

        trace!(line, "line produced no record");
        None
    }

    fn emit(&mut self, name: String, amount: Option<String>, unit: Option<String>) -> Ingredient {
        Ingredient {
            id: self.ids.next_id(),
            name,
            amount: amount.unwrap_or_else(|| "1".to_string()),
            unit: unit.unwrap_or_else(|| "item".to_string()),
        }
    }
}

/// Parse recipe text with a fresh default parser.
///
/// Convenience wrapper over [`RecipeParser::parse`] for one-shot callers.
pub fn parse_recipe_text(text: &str) -> Vec<Ingredient> {
    let mut parser = RecipeParser::new();
    parser.parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_name_strips_punctuation() {
        assert_eq!(clean_name("flour, sifted"), "flour sifted");
        assert_eq!(clean_name("all-purpose flour"), "allpurpose flour");
        assert_eq!(clean_name("(optional) basil."), "optional basil");
        assert_eq!(clean_name("  salt  "), "salt");
    }

    #[test]
    fn test_should_skip_headers_and_short_lines() {
        assert!(should_skip("Ingredients:"));
        assert!(should_skip("INSTRUCTIONS"));
        assert!(should_skip("Method"));
        assert!(should_skip("prep time 10 min"));
        assert!(should_skip("ab"));
        assert!(!should_skip("2 cups flour"));
        assert!(!should_skip("eggs"));
    }

    #[test]
    fn test_quantity_parts_recognized_unit() {
        let parts = quantity_parts(&QUANTITY_UNIT_NAME, "2 cups flour").unwrap();
        assert_eq!(parts.amount.as_deref(), Some("2"));
        assert_eq!(parts.unit.as_deref(), Some("cups"));
        assert_eq!(parts.name, "flour");
    }

    #[test]
    fn test_quantity_parts_unrecognized_unit_folds_into_name() {
        let parts = quantity_parts(&QUANTITY_UNIT_NAME, "2 large eggs").unwrap();
        assert_eq!(parts.amount.as_deref(), Some("2"));
        assert_eq!(parts.unit, None);
        assert_eq!(parts.name, "large eggs");
    }

    #[test]
    fn test_rule_order_is_stable() {
        assert_eq!(
            RULE_ORDER,
            [
                LineRule::QuantityUnitName,
                LineRule::RangeUnitName,
                LineRule::QualitativePhrase,
                LineRule::BareName,
            ]
        );
    }

    #[test]
    fn test_sequential_ids_are_deterministic() {
        let mut ids = SequentialIdGenerator::default();
        assert_eq!(ids.next_id(), "item-1");
        assert_eq!(ids.next_id(), "item-2");
    }

    #[test]
    fn test_random_ids_have_expected_shape() {
        let mut ids = RandomIdGenerator;
        let id = ids.next_id();
        assert_eq!(id.len(), ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_too_short_rule_name_falls_through_to_fallback() {
        // Rule D matches ", a" but the cleaned name is one character, so the
        // rule scan continues and the fallback guard rejects it too.
        let mut parser = RecipeParser::with_id_generator(SequentialIdGenerator::default());
        assert!(parser.parse(", a,").is_empty());
    }
}

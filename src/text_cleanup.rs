//! # Extracted-Text Cleanup and Sectioning
//!
//! Post-processing for OCR output before it reaches the parser or the local
//! store: whitespace normalization and a best-effort split of a whole recipe
//! into its ingredient block and its preparation block. Both operations are
//! pure text-in/text-out and never fail.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    /// Header that opens an ingredient block.
    static ref INGREDIENTS_HEADER: Regex =
        Regex::new(r"(?i)^ingredients?\b").expect("ingredients header pattern should be valid");
    /// Headers that open a preparation block.
    static ref STEPS_HEADER: Regex =
        Regex::new(r"(?i)^(directions?|instructions?|method|steps?)\b")
            .expect("steps header pattern should be valid");
}

/// A recipe split into its ingredient block and its preparation block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeSections {
    /// Lines belonging to the ingredient list.
    pub ingredients: String,
    /// Lines belonging to the cooking steps.
    pub steps: String,
}

/// Normalize raw OCR output: trim every line and drop blank lines.
///
/// OCR engines tend to emit trailing spaces and runs of empty lines between
/// text blocks; neither carries information for parsing or storage.
pub fn normalize_extracted_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split recipe text into an ingredients section and a steps section.
///
/// Section boundaries are the same header keywords the parser's skip filter
/// recognizes. Header lines themselves are consumed. Text before any header,
/// or all text when no header is present, lands in the ingredients section.
pub fn split_recipe_sections(text: &str) -> RecipeSections {
    let mut ingredients = Vec::new();
    let mut steps = Vec::new();
    let mut in_steps = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if INGREDIENTS_HEADER.is_match(trimmed) {
            in_steps = false;
            continue;
        }
        if STEPS_HEADER.is_match(trimmed) {
            in_steps = true;
            continue;
        }

        if in_steps {
            steps.push(trimmed);
        } else {
            ingredients.push(trimmed);
        }
    }

    debug!(
        ingredient_lines = ingredients.len(),
        step_lines = steps.len(),
        "split recipe sections"
    );

    RecipeSections {
        ingredients: ingredients.join("\n"),
        steps: steps.join("\n"),
    }
}

//! Grade value record.
//!
//! # Invariants
//! - A `Grade` is immutable once built; fields are only readable.
//! - Passing or assigning a `Grade` clones it, so holders never share state.
//! - `points` and `credits` are finite and non-negative.

use crate::model::error::{
    require_non_negative, require_present, ModelResult, ModelValidationError,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static GRADE_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-F][+-]?$").expect("valid grade letter regex"));

/// One graded course: letter, earned points and course credits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GradeBuilder")]
pub struct Grade {
    letter: String,
    points: f64,
    credits: f64,
}

impl Grade {
    /// Builds a grade, validating every field.
    ///
    /// # Errors
    /// - `InvalidGradeLetter` when `letter` is not `A`..`F` with optional `+`/`-`.
    /// - `InvalidNumber` when `points` or `credits` is negative or not finite.
    pub fn new(letter: impl AsRef<str>, points: f64, credits: f64) -> ModelResult<Self> {
        let letter = letter.as_ref().trim().to_ascii_uppercase();
        if !GRADE_LETTER_RE.is_match(&letter) {
            return Err(ModelValidationError::InvalidGradeLetter(letter));
        }
        Ok(Self {
            letter,
            points: require_non_negative(points, "points")?,
            credits: require_non_negative(credits, "credits")?,
        })
    }

    pub fn letter(&self) -> &str {
        &self.letter
    }

    pub fn points(&self) -> f64 {
        self.points
    }

    pub fn credits(&self) -> f64 {
        self.credits
    }
}

/// Field-by-field grade input where any field may still be absent.
///
/// Also the deserialization shape of `Grade`, so a payload missing a field
/// fails with `MissingField` instead of producing a partial value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GradeBuilder {
    pub letter: Option<String>,
    pub points: Option<f64>,
    pub credits: Option<f64>,
}

impl GradeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn letter(mut self, letter: impl Into<String>) -> Self {
        self.letter = Some(letter.into());
        self
    }

    pub fn points(mut self, points: f64) -> Self {
        self.points = Some(points);
        self
    }

    pub fn credits(mut self, credits: f64) -> Self {
        self.credits = Some(credits);
        self
    }

    /// Builds the grade, reporting the first absent field in declaration order.
    pub fn build(self) -> ModelResult<Grade> {
        let letter = require_present(self.letter, "letter")?;
        let points = require_present(self.points, "points")?;
        let credits = require_present(self.credits, "credits")?;
        Grade::new(letter, points, credits)
    }
}

impl TryFrom<GradeBuilder> for Grade {
    type Error = ModelValidationError;

    fn try_from(value: GradeBuilder) -> Result<Self, Self::Error> {
        value.build()
    }
}

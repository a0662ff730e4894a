use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single character of a name and the digit it maps to (0 when unmapped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterValue {
    pub letter: char,
    pub value: u8,
}

/// Sequence of digit sums collapsing a number to a single digit.
///
/// The first step is the input itself and the last one is always in `0..=9`.
/// Only [`crate::core::reduce::reduce`] builds these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reduction {
    steps: Vec<u64>,
    #[serde(rename = "final")]
    final_digit: u8,
}

impl Reduction {
    pub(crate) fn from_steps(steps: Vec<u64>) -> Self {
        let final_digit = steps.last().copied().unwrap_or(0) as u8;
        Self { steps, final_digit }
    }

    pub fn steps(&self) -> &[u64] {
        &self.steps
    }

    pub fn initial(&self) -> u64 {
        self.steps[0]
    }

    pub fn final_digit(&self) -> u8 {
        self.final_digit
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameNumber {
    pub letter_values: Vec<LetterValue>,
    pub total: u64,
    pub reduction: Reduction,
}

/// A validated ISO birth date, keeping the text it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthDate {
    pub value: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Digit-frequency grid shown as a 3x3 square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigitGrid {
    pub contributing_digits: Vec<u8>,
    pub cells: BTreeMap<u8, String>,
}

/// Display order of the grid, row by row.
pub const GRID_LAYOUT: [[u8; 3]; 3] = [[3, 1, 9], [6, 7, 5], [2, 8, 4]];

impl DigitGrid {
    /// Cell text for a digit; empty for digits that never occurred or are outside 1..=9.
    pub fn cell(&self, digit: u8) -> &str {
        self.cells.get(&digit).map(String::as_str).unwrap_or("")
    }

    pub fn count(&self, digit: u8) -> usize {
        self.cell(digit).len()
    }

    pub fn rows(&self) -> [[&str; 3]; 3] {
        GRID_LAYOUT.map(|row| row.map(|digit| self.cell(digit)))
    }
}

/// Immutable input of one calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub birth_date: Option<String>,
}

impl CalculationRequest {
    pub fn new(name: impl Into<String>, birth_date: Option<impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.map(Into::into),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumerologyResult {
    pub name: String,
    pub letter_values: Vec<LetterValue>,
    pub total: u64,
    pub name_number: Reduction,
    pub birth_date: Option<BirthDate>,
    pub bhagyank: Option<Reduction>,
    pub moolank: Option<Reduction>,
    pub grid: Option<DigitGrid>,
}

/// One row of a batch run: the request plus either its result or the error text.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub line: usize,
    pub request: CalculationRequest,
    pub result: Option<NumerologyResult>,
    pub error: Option<String>,
}

impl BatchOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub outcomes: Vec<BatchOutcome>,
    pub csv_output: String,
    pub json_output: String,
}

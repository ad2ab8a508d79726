#![deny(warnings)]

//! Core domain models and invariants for the Election Game.
//!
//! This crate defines the serializable records the game is built from,
//! the fixed scenario table, and validation helpers for both the table and
//! player menu input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod scenarios;

pub use scenarios::builtin_scenarios;

/// Signed metric changes carried by a policy option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effects {
    /// Inflation change in percentage points.
    pub inflation: Decimal,
    /// Unemployment change in percentage points.
    pub unemployment: Decimal,
    /// Approval change in whole percentage points.
    pub approval: i32,
}

impl Effects {
    /// Build effects from tenths of a percentage point for the decimal metrics.
    ///
    /// Example:
    /// let e = Effects::tenths(-10, 5, 2); // -1.0, +0.5, +2
    pub fn tenths(inflation: i64, unemployment: i64, approval: i32) -> Self {
        Self {
            inflation: Decimal::new(inflation, 1),
            unemployment: Decimal::new(unemployment, 1),
            approval,
        }
    }
}

/// One selectable response to a scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolicyOption {
    /// Menu text, e.g. "Subsidize Fuel Costs".
    pub description: String,
    /// Deltas applied when chosen.
    pub effects: Effects,
    /// Flavor text shown after the choice.
    pub explanation: String,
}

/// A fixed economic event with its response options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Short label used in logs.
    pub title: String,
    /// Situation text shown to the player.
    pub situation: String,
    /// Ordered options; menu numbers are 1-based positions in this list.
    pub options: Vec<PolicyOption>,
}

/// Mutable game metrics plus the display counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Inflation rate in percent, kept within [-5.0, 15.0].
    pub inflation: Decimal,
    /// Unemployment rate in percent, kept within [0.0, 25.0].
    pub unemployment: Decimal,
    /// Approval rating in percent, kept within [0, 100].
    pub approval: i32,
    /// 1-based number of the scenario currently being played.
    pub scenario_index: u32,
}

impl GameState {
    /// Opening conditions: 3.0% inflation, 5.0% unemployment, 50% approval.
    pub fn initial() -> Self {
        Self {
            inflation: Decimal::new(30, 1),
            unemployment: Decimal::new(50, 1),
            approval: 50,
            scenario_index: 1,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Menu input that is not one of the listed option numbers.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid choice. Please enter a number between 1 and {option_count}")]
pub struct InvalidSelection {
    /// Raw text the player entered.
    pub input: String,
    /// Number of options on the menu.
    pub option_count: usize,
}

/// Parse a menu selection into a 0-based option index.
///
/// Only the exact decimal text of a listed number is accepted ("1".."3" for
/// a three-option menu); a trailing line terminator is ignored, any other
/// whitespace, sign or leading zero is not.
///
/// Example:
/// assert_eq!(parse_selection("2\n", 3), Ok(1));
/// assert!(parse_selection("02", 3).is_err());
pub fn parse_selection(raw: &str, option_count: usize) -> Result<usize, InvalidSelection> {
    let text = raw
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(raw);
    (1..=option_count)
        .find(|n| n.to_string() == text)
        .map(|n| n - 1)
        .ok_or_else(|| InvalidSelection {
            input: text.to_string(),
            option_count,
        })
}

/// Validation errors for the scenario table.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// The table holds no scenarios.
    #[error("scenario table is empty")]
    NoScenarios,
    /// A scenario offers no options.
    #[error("scenario {0} has no options")]
    NoOptions(String),
    /// Required text is blank.
    #[error("blank {field} in scenario {scenario}")]
    BlankText { scenario: String, field: &'static str },
}

/// Validate a single scenario.
pub fn validate_scenario(s: &Scenario) -> Result<(), ValidationError> {
    let blank = |field: &'static str| ValidationError::BlankText {
        scenario: s.title.clone(),
        field,
    };
    if s.situation.trim().is_empty() {
        return Err(blank("situation"));
    }
    if s.options.is_empty() {
        return Err(ValidationError::NoOptions(s.title.clone()));
    }
    for o in &s.options {
        if o.description.trim().is_empty() {
            return Err(blank("description"));
        }
        if o.explanation.trim().is_empty() {
            return Err(blank("explanation"));
        }
    }
    Ok(())
}

/// Validate a whole scenario table.
pub fn validate_scenarios(table: &[Scenario]) -> Result<(), ValidationError> {
    if table.is_empty() {
        return Err(ValidationError::NoScenarios);
    }
    table.iter().try_for_each(validate_scenario)
}

#![deny(warnings)]

//! Economic rules: bounded metric updates and the election verdict.
//!
//! This crate provides:
//! - Saturating clamps for each tracked metric
//! - Pure effect application (state in, state out)
//! - Win evaluation with an itemized list of failed conditions

use election_core::{Effects, GameState};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Minimum approval rating needed to win.
pub const APPROVAL_TO_WIN: i32 = 65;

/// Inclusive range a metric is saturated to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds<T> {
    /// Lowest allowed value.
    pub min: T,
    /// Highest allowed value.
    pub max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    /// Saturate `value` into `[min, max]`.
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Whether `value` already lies within the range.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Inflation is kept within [-5.0, 15.0].
pub fn inflation_bounds() -> Bounds<Decimal> {
    Bounds {
        min: Decimal::new(-50, 1),
        max: Decimal::new(150, 1),
    }
}

/// Unemployment is kept within [0.0, 25.0].
pub fn unemployment_bounds() -> Bounds<Decimal> {
    Bounds {
        min: Decimal::ZERO,
        max: Decimal::new(250, 1),
    }
}

/// Approval is kept within [0, 100].
pub fn approval_bounds() -> Bounds<i32> {
    Bounds { min: 0, max: 100 }
}

/// Inflation range required to win, [1.0, 5.0].
pub fn inflation_target() -> Bounds<Decimal> {
    Bounds {
        min: Decimal::ONE,
        max: Decimal::new(5, 0),
    }
}

/// Highest unemployment that still wins, 6.0.
pub fn unemployment_ceiling() -> Decimal {
    Decimal::new(6, 0)
}

/// Apply an option's deltas and clamp every metric.
///
/// Clamping runs unconditionally, so the result is always in bounds even if
/// `state` was not. The scenario counter is left untouched.
pub fn apply_effects(state: GameState, effects: &Effects) -> GameState {
    let next = GameState {
        inflation: inflation_bounds().clamp(state.inflation + effects.inflation),
        unemployment: unemployment_bounds().clamp(state.unemployment + effects.unemployment),
        approval: approval_bounds().clamp(state.approval.saturating_add(effects.approval)),
        scenario_index: state.scenario_index,
    };
    trace!(?state, ?effects, ?next, "applied effects");
    next
}

/// Format a rate with one decimal place, e.g. `3.5` or `-0.5`.
pub fn format_rate(value: Decimal) -> String {
    let v = value.round_dp(1);
    // avoid printing "-0.0"
    let v = if v.is_zero() { Decimal::ZERO } else { v };
    format!("{:.1}", v)
}

/// One failed clause of the win condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Approval below [`APPROVAL_TO_WIN`].
    ApprovalTooLow { approval: i32 },
    /// Inflation outside [`inflation_target`].
    InflationOutOfRange { inflation: Decimal },
    /// Unemployment above [`unemployment_ceiling`].
    UnemploymentTooHigh { unemployment: Decimal },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::ApprovalTooLow { approval } => write!(
                f,
                "Your approval rating is {}%, which is below the required {}%.",
                approval, APPROVAL_TO_WIN
            ),
            Violation::InflationOutOfRange { inflation } => write!(
                f,
                "Your inflation rate is {}%, which is outside the acceptable range of 1% to 5%.",
                format_rate(*inflation)
            ),
            Violation::UnemploymentTooHigh { unemployment } => write!(
                f,
                "Your unemployment rate is {}%, which is above the acceptable maximum of 6%.",
                format_rate(*unemployment)
            ),
        }
    }
}

/// Election verdict for a final state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// True when every clause holds.
    pub won: bool,
    /// Failed clauses in the order approval, inflation, unemployment.
    pub violations: Vec<Violation>,
}

/// Check each win clause independently and collect every failure.
pub fn evaluate(state: &GameState) -> Outcome {
    let mut violations = Vec::new();
    if state.approval < APPROVAL_TO_WIN {
        violations.push(Violation::ApprovalTooLow {
            approval: state.approval,
        });
    }
    if !inflation_target().contains(state.inflation) {
        violations.push(Violation::InflationOutOfRange {
            inflation: state.inflation,
        });
    }
    if state.unemployment > unemployment_ceiling() {
        violations.push(Violation::UnemploymentTooHigh {
            unemployment: state.unemployment,
        });
    }
    Outcome {
        won: violations.is_empty(),
        violations,
    }
}

#![deny(warnings)]

//! Automated players: per-turn choice strategies and a winning-path planner.

use election_core::{Effects, GameState, Scenario};
use election_econ::{apply_effects, evaluate};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Heuristic score for an option: higher is better.
///
/// Approval dominates; inflation and unemployment increases are penalized.
pub fn utility(effects: &Effects) -> f32 {
    let infl = effects.inflation.to_f32().unwrap_or(0.0);
    let unemp = effects.unemployment.to_f32().unwrap_or(0.0);
    effects.approval as f32 - (infl * 0.5) - (unemp * 0.5)
}

/// How an automated player picks options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Largest approval delta, first option on ties.
    MaxApproval,
    /// Smallest approval delta, first option on ties.
    MinApproval,
    /// Replay 0-based choices, one per turn.
    Scripted(Vec<usize>),
}

impl Strategy {
    /// Pick a 0-based option for the scenario played at `turn` (0-based).
    ///
    /// Returns `None` for an optionless scenario or an exhausted script.
    pub fn choose(&self, scenario: &Scenario, turn: usize) -> Option<usize> {
        let approvals = scenario.options.iter().map(|o| o.effects.approval);
        match self {
            Strategy::MaxApproval => first_by(approvals, |cand, best| cand > best),
            Strategy::MinApproval => first_by(approvals, |cand, best| cand < best),
            Strategy::Scripted(choices) => choices.get(turn).copied(),
        }
    }
}

fn first_by(values: impl Iterator<Item = i32>, better: impl Fn(i32, i32) -> bool) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (idx, v) in values.enumerate() {
        match best {
            Some((_, b)) if !better(v, b) => {}
            _ => best = Some((idx, v)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// A complete sequence of 0-based choices and where it ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub choices: Vec<usize>,
    pub final_state: GameState,
}

/// Play a fixed sequence of choices without any I/O.
///
/// Returns `None` if a choice is missing or out of range.
pub fn replay(scenarios: &[Scenario], start: GameState, choices: &[usize]) -> Option<GameState> {
    if choices.len() != scenarios.len() {
        return None;
    }
    let mut state = start;
    for (scenario, &c) in scenarios.iter().zip(choices) {
        state = apply_effects(state, &scenario.options.get(c)?.effects);
    }
    Some(state)
}

/// Search every path through `scenarios` for the winning one with the
/// highest final approval. Ties go to the lexicographically smallest path.
pub fn plan_winning_path(scenarios: &[Scenario], start: GameState) -> Option<Plan> {
    let mut search = Search {
        scenarios,
        path: Vec::with_capacity(scenarios.len()),
        best: None,
        explored: 0,
    };
    search.descend(start);
    debug!(
        explored = search.explored,
        found = search.best.is_some(),
        "planner finished"
    );
    search.best
}

struct Search<'a> {
    scenarios: &'a [Scenario],
    path: Vec<usize>,
    best: Option<Plan>,
    explored: u64,
}

impl Search<'_> {
    fn descend(&mut self, state: GameState) {
        let scenarios = self.scenarios;
        let Some(scenario) = scenarios.get(self.path.len()) else {
            self.explored += 1;
            if !evaluate(&state).won {
                return;
            }
            let improves = self
                .best
                .as_ref()
                .map_or(true, |b| state.approval > b.final_state.approval);
            if improves {
                self.best = Some(Plan {
                    choices: self.path.clone(),
                    final_state: state,
                });
            }
            return;
        };
        for (idx, option) in scenario.options.iter().enumerate() {
            self.path.push(idx);
            self.descend(apply_effects(state, &option.effects));
            self.path.pop();
        }
    }
}

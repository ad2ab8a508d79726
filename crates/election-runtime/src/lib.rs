#![deny(warnings)]

//! Game loop for the Election Game.
//!
//! The loop is generic over its output stream and takes a [`Decider`] for
//! choices, so the same code runs an interactive console session, an
//! automated player, or an in-memory test.

use election_ai::Strategy;
use election_core::{parse_selection, validate_scenarios, GameState, Scenario, ValidationError};
use election_econ::{apply_effects, evaluate, format_rate, Outcome, APPROVAL_TO_WIN};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

/// Failures that end a game early.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Input reached end of stream before a valid choice was read.
    #[error("input closed while waiting for a choice")]
    InputClosed,
    /// Reading input or writing the transcript failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// The scenario table failed validation.
    #[error("invalid scenario table: {0}")]
    Validation(#[from] ValidationError),
    /// A strategy had nothing to pick: exhausted script or no options.
    #[error("no choice available for scenario {turn}")]
    NoChoice { turn: usize },
    /// A decider returned an option number the menu does not have.
    #[error("choice {index} is out of range for scenario {scenario} ({option_count} options)")]
    ChoiceOutOfRange {
        scenario: String,
        index: usize,
        option_count: usize,
    },
}

/// Source of option choices for the game loop.
pub trait Decider {
    /// Return a 0-based option index for `scenario`, played at `turn` (0-based).
    ///
    /// The menu has already been written to `out`; the decider owns the prompt.
    fn decide(
        &mut self,
        turn: usize,
        scenario: &Scenario,
        out: &mut dyn Write,
    ) -> Result<usize, RuntimeError>;
}

/// Interactive player reading one line per attempt.
pub struct ConsoleDecider<R> {
    input: R,
}

impl<R: BufRead> ConsoleDecider<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: BufRead> Decider for ConsoleDecider<R> {
    fn decide(
        &mut self,
        _turn: usize,
        scenario: &Scenario,
        out: &mut dyn Write,
    ) -> Result<usize, RuntimeError> {
        write!(out, "Enter the number of your choice: ")?;
        out.flush()?;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                return Err(RuntimeError::InputClosed);
            }
            // undecodable bytes are just another invalid selection
            let line = String::from_utf8_lossy(&buf);
            match parse_selection(&line, scenario.options.len()) {
                Ok(idx) => return Ok(idx),
                Err(err) => {
                    debug!(input = %err.input, "rejected selection");
                    write!(out, "{err}: ")?;
                    out.flush()?;
                }
            }
        }
    }
}

/// Automated player; echoes its pick after the prompt.
pub struct StrategyDecider {
    strategy: Strategy,
}

impl StrategyDecider {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }
}

impl Decider for StrategyDecider {
    fn decide(
        &mut self,
        turn: usize,
        scenario: &Scenario,
        out: &mut dyn Write,
    ) -> Result<usize, RuntimeError> {
        let idx = self
            .strategy
            .choose(scenario, turn)
            .ok_or(RuntimeError::NoChoice { turn: turn + 1 })?;
        if let Some(option) = scenario.options.get(idx) {
            debug!(
                strategy = ?self.strategy,
                choice = idx + 1,
                utility = election_ai::utility(&option.effects),
                "automated pick"
            );
        }
        writeln!(out, "Enter the number of your choice: {}", idx + 1)?;
        Ok(idx)
    }
}

/// Summary of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    pub final_state: GameState,
    pub outcome: Outcome,
    /// 0-based option index picked in each scenario.
    pub choices: Vec<usize>,
}

fn write_intro<W: Write>(out: &mut W, scenario_count: usize) -> io::Result<()> {
    writeln!(out, "Welcome to the Election Game!")?;
    writeln!(out, "You are a politician running for election.")?;
    writeln!(
        out,
        "Make policy decisions to balance inflation and unemployment to win over voters."
    )?;
    writeln!(
        out,
        "You need an approval rating of {APPROVAL_TO_WIN}% or higher after {scenario_count} scenarios to win the election."
    )?;
    writeln!(
        out,
        "Keep inflation between 1% and 5%, and unemployment at 6% or lower."
    )
}

fn write_status<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    writeln!(out, "\n--- Scenario {} ---", state.scenario_index)?;
    writeln!(out, "Inflation Rate: {}%", format_rate(state.inflation))?;
    writeln!(out, "Unemployment Rate: {}%", format_rate(state.unemployment))?;
    writeln!(out, "Approval Rating: {}%", state.approval)
}

fn write_menu<W: Write>(out: &mut W, scenario: &Scenario) -> io::Result<()> {
    writeln!(out, "\nSituation: {}", scenario.situation)?;
    writeln!(out, "\nChoose a policy option:")?;
    for (n, option) in scenario.options.iter().enumerate() {
        writeln!(out, "{}. {}", n + 1, option.description)?;
    }
    Ok(())
}

fn write_results<W: Write>(out: &mut W, state: &GameState, outcome: &Outcome) -> io::Result<()> {
    writeln!(out, "\n--- Election Results ---")?;
    writeln!(out, "Final Inflation Rate: {}%", format_rate(state.inflation))?;
    writeln!(
        out,
        "Final Unemployment Rate: {}%",
        format_rate(state.unemployment)
    )?;
    writeln!(out, "Final Approval Rating: {}%", state.approval)?;
    if outcome.won {
        writeln!(out, "\nCongratulations! You have won the election!")
    } else {
        writeln!(
            out,
            "\nUnfortunately, you did not meet the criteria to win the election."
        )?;
        for v in &outcome.violations {
            writeln!(out, "- {v}")?;
        }
        writeln!(out, "Better luck next time!")
    }
}

/// Play every scenario in order, then print and return the verdict.
pub fn run_game<D: Decider, W: Write>(
    scenarios: &[Scenario],
    decider: &mut D,
    out: &mut W,
) -> Result<GameReport, RuntimeError> {
    validate_scenarios(scenarios)?;
    write_intro(out, scenarios.len())?;

    let mut state = GameState::initial();
    let mut choices = Vec::with_capacity(scenarios.len());
    for (turn, scenario) in scenarios.iter().enumerate() {
        if turn > 0 {
            state.scenario_index += 1;
        }
        write_status(out, &state)?;
        write_menu(out, scenario)?;

        let idx = decider.decide(turn, scenario, out)?;
        let option = scenario
            .options
            .get(idx)
            .ok_or_else(|| RuntimeError::ChoiceOutOfRange {
                scenario: scenario.title.clone(),
                index: idx + 1,
                option_count: scenario.options.len(),
            })?;
        state = apply_effects(state, &option.effects);
        choices.push(idx);
        debug!(
            scenario = %scenario.title,
            choice = idx + 1,
            inflation = %state.inflation,
            unemployment = %state.unemployment,
            approval = state.approval,
            "policy applied"
        );

        writeln!(out, "\nYou chose to: {}", option.description)?;
        writeln!(out, "Effects:")?;
        writeln!(
            out,
            "  Inflation Rate change: {}%",
            format_rate(option.effects.inflation)
        )?;
        writeln!(
            out,
            "  Unemployment Rate change: {}%",
            format_rate(option.effects.unemployment)
        )?;
        writeln!(out, "  Approval Rating change: {}%", option.effects.approval)?;
        writeln!(out, "Explanation: {}", option.explanation)?;
    }

    let outcome = evaluate(&state);
    write_results(out, &state, &outcome)?;
    out.flush()?;
    info!(
        won = outcome.won,
        violations = outcome.violations.len(),
        approval = state.approval,
        "election decided"
    );
    Ok(GameReport {
        final_state: state,
        outcome,
        choices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use election_core::builtin_scenarios;
    use rust_decimal::Decimal;

    fn console(input: &str) -> ConsoleDecider<&[u8]> {
        ConsoleDecider::new(input.as_bytes())
    }

    fn transcript(out: &[u8]) -> String {
        String::from_utf8(out.to_vec()).unwrap()
    }

    #[test]
    fn rejects_invalid_then_accepts() {
        let table = builtin_scenarios();
        let mut out = Vec::new();
        let mut d = console("0\n4\nabc\n\n2\n");
        let idx = d.decide(0, &table[0], &mut out).unwrap();
        assert_eq!(idx, 1);
        let text = transcript(&out);
        assert_eq!(
            text.matches("Invalid choice. Please enter a number between 1 and 3: ")
                .count(),
            4
        );
    }

    #[test]
    fn accepts_valid_immediately() {
        let table = builtin_scenarios();
        for (input, want) in [("1\n", 0), ("2\n", 1), ("3", 2)] {
            let mut out = Vec::new();
            let idx = console(input).decide(0, &table[0], &mut out).unwrap();
            assert_eq!(idx, want);
            assert!(!transcript(&out).contains("Invalid"));
        }
    }

    #[test]
    fn undecodable_line_is_reprompted() {
        let table = builtin_scenarios();
        let mut out = Vec::new();
        let mut d = ConsoleDecider::new(&b"\xff\xfe\n2\n"[..]);
        let idx = d.decide(0, &table[0], &mut out).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(transcript(&out).matches("Invalid choice.").count(), 1);
    }

    #[test]
    fn eof_is_an_error() {
        let table = builtin_scenarios();
        let mut out = Vec::new();
        let err = console("9\n").decide(0, &table[0], &mut out).unwrap_err();
        assert!(matches!(err, RuntimeError::InputClosed));
    }

    #[test]
    fn console_game_walks_all_scenarios() {
        let table = builtin_scenarios();
        let mut out = Vec::new();
        let input = format!("3\n{}", "1\n".repeat(7));
        let report = run_game(&table, &mut console(&input), &mut out).unwrap();
        let text = transcript(&out);

        let mut last = 0;
        for n in 1..=8 {
            let pos = text
                .find(&format!("--- Scenario {n} ---"))
                .unwrap_or_else(|| panic!("scenario {n} header missing"));
            assert!(pos > last);
            last = pos;
        }
        assert!(!text.contains("--- Scenario 9 ---"));
        assert_eq!(report.final_state.scenario_index, 8);
        assert_eq!(report.choices, vec![2, 0, 0, 0, 0, 0, 0, 0]);

        // after scenario 1, option 3
        let second = &text[text.find("--- Scenario 2 ---").unwrap()..];
        assert!(second.contains("Inflation Rate: 3.5%"));
        assert!(second.contains("Unemployment Rate: 4.0%"));
        assert!(second.contains("Approval Rating: 54%"));
        assert!(text.contains("You chose to: Invest in Alternative Energy"));
        assert!(text.contains("  Inflation Rate change: 0.5%"));
        assert!(text.contains("  Unemployment Rate change: -1.0%"));
        assert!(text.contains("  Approval Rating change: 4%"));
    }

    #[test]
    fn max_approval_loses_on_inflation() {
        let table = builtin_scenarios();
        let mut out = Vec::new();
        let mut d = StrategyDecider::new(Strategy::MaxApproval);
        let report = run_game(&table, &mut d, &mut out).unwrap();
        assert!(!report.outcome.won);
        assert_eq!(report.final_state.approval, 75);
        let text = transcript(&out);
        assert!(text.contains("Final Inflation Rate: 6.2%"));
        assert!(text.contains("Final Unemployment Rate: 0.0%"));
        assert!(text.contains(
            "- Your inflation rate is 6.2%, which is outside the acceptable range of 1% to 5%."
        ));
        assert!(!text.contains("approval rating is"));
        assert!(text.ends_with("Better luck next time!\n"));
    }

    #[test]
    fn min_approval_lists_all_failures() {
        let table = builtin_scenarios();
        let mut out = Vec::new();
        let mut d = StrategyDecider::new(Strategy::MinApproval);
        let report = run_game(&table, &mut d, &mut out).unwrap();
        assert_eq!(report.final_state.approval, 40);
        assert_eq!(report.final_state.unemployment, Decimal::new(9, 0));
        let text = transcript(&out);
        let a = text.find("- Your approval rating is 40%").unwrap();
        let i = text.find("- Your inflation rate is 0.0%").unwrap();
        let u = text.find("- Your unemployment rate is 9.0%").unwrap();
        assert!(a < i && i < u);
    }

    #[test]
    fn planned_game_wins() {
        let table = builtin_scenarios();
        let plan = election_ai::plan_winning_path(&table, GameState::initial()).unwrap();
        let mut out = Vec::new();
        let mut d = StrategyDecider::new(Strategy::Scripted(plan.choices.clone()));
        let report = run_game(&table, &mut d, &mut out).unwrap();
        assert!(report.outcome.won);
        assert_eq!(report.final_state.approval, plan.final_state.approval);
        assert!(transcript(&out).contains("Congratulations! You have won the election!"));
    }

    #[test]
    fn short_script_and_bad_index_are_errors() {
        let table = builtin_scenarios();
        let mut out = Vec::new();
        let mut d = StrategyDecider::new(Strategy::Scripted(vec![0, 0]));
        let err = run_game(&table, &mut d, &mut out).unwrap_err();
        assert!(matches!(err, RuntimeError::NoChoice { turn: 3 }));

        let mut d = StrategyDecider::new(Strategy::Scripted(vec![7; 8]));
        let err = run_game(&table, &mut d, &mut io::sink()).unwrap_err();
        assert!(matches!(err, RuntimeError::ChoiceOutOfRange { index: 8, .. }));
    }

    #[test]
    fn empty_table_is_rejected() {
        let mut d = StrategyDecider::new(Strategy::MaxApproval);
        let err = run_game(&[], &mut d, &mut io::sink()).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::Validation(ValidationError::NoScenarios)
        ));
    }

    #[test]
    fn report_serializes() {
        let table = builtin_scenarios();
        let mut d = StrategyDecider::new(Strategy::MinApproval);
        let report = run_game(&table, &mut d, &mut io::sink()).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"won\":false"));
        assert!(json.contains("approval_too_low"));
    }
}

//! Plain-text report generator adapter.
//!
//! Renders a sheet into the fixed-section summary that is copied to the
//! clipboard or downloaded. This is the primary implementation of the
//! ReportGenerator port.

use chrono::{DateTime, NaiveDate, TimeZone};
use std::fmt::{Display, Write};

use crate::domain::foundation::Timestamp;
use crate::domain::sheet::{next_actions, top_solutions, Action, Solution, WizardState};
use crate::ports::ReportGenerator;

const TITLE: &str = "PROBLEM SOLVER SHEET SUMMARY";
const RULE: &str = "═══════════════════════════════════════";
const FOOTER: &str = "Created with Problem Solver Sheet";

/// Plain-text implementation of ReportGenerator.
///
/// Section order is fixed: problem overview, root cause chain, top
/// solutions, next actions. Empty sections keep their heading.
#[derive(Debug, Clone, Default)]
pub struct PlainTextReportGenerator;

impl PlainTextReportGenerator {
    /// Creates a new plain-text report generator.
    pub fn new() -> Self {
        Self
    }

    fn section_heading(out: &mut String, heading: &str) {
        out.push_str(RULE);
        out.push('\n');
        out.push_str(heading);
        out.push('\n');
        out.push_str(RULE);
        out.push('\n');
    }

    fn problem_overview(out: &mut String, state: &WizardState) {
        let problem = &state.problem;
        Self::section_heading(out, "PROBLEM OVERVIEW");
        let _ = writeln!(out, "Title: {}", problem.title);
        let _ = writeln!(out, "Category: {}", problem.category);
        out.push('\n');
        let _ = writeln!(out, "Description:\n{}", problem.description);
        out.push('\n');
        let _ = writeln!(out, "Why Important:\n{}", problem.importance);
        out.push('\n');
        let _ = writeln!(out, "Impact if Not Solved:\n{}", problem.impact);
    }

    fn root_cause_chain(out: &mut String, state: &WizardState) {
        Self::section_heading(out, "ROOT CAUSE CHAIN");
        let lines: Vec<String> = state
            .root_causes
            .filled()
            .enumerate()
            .map(|(i, cause)| format!("Why #{}: {}", i + 1, cause.why))
            .collect();
        out.push_str(&lines.join("\n"));
        out.push('\n');
    }

    fn top_solutions(out: &mut String, state: &WizardState) {
        Self::section_heading(out, "TOP SOLUTIONS");
        let entries: Vec<String> = top_solutions(&state.solutions)
            .into_iter()
            .enumerate()
            .map(|(i, solution)| Self::solution_entry(i + 1, solution))
            .collect();
        out.push_str(&entries.join("\n\n"));
        out.push('\n');
    }

    fn solution_entry(position: usize, solution: &Solution) -> String {
        format!(
            "{}. {}\n   Effort: {}/5 | Impact: {}/5 | Priority Score: {:.2}",
            position,
            solution.idea(),
            solution.effort(),
            solution.impact(),
            solution.score()
        )
    }

    fn next_actions(out: &mut String, state: &WizardState) {
        Self::section_heading(out, "NEXT ACTIONS");
        let entries: Vec<String> = next_actions(&state.actions)
            .into_iter()
            .enumerate()
            .map(|(i, action)| Self::action_entry(i + 1, action))
            .collect();
        out.push_str(&entries.join("\n\n"));
        out.push('\n');
    }

    fn action_entry(position: usize, action: &Action) -> String {
        let deadline = action
            .deadline_date()
            .map(format_date)
            .unwrap_or_else(|| action.deadline.clone());
        format!(
            "{}. {}\n   Responsible: {}\n   Deadline: {}\n   Status: {}",
            position,
            action.step,
            action.responsible,
            deadline,
            action.status.report_label()
        )
    }
}

impl ReportGenerator for PlainTextReportGenerator {
    fn generate(&self, state: &WizardState, generated_at: &Timestamp) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", TITLE);
        let _ = writeln!(
            out,
            "Generated: {}",
            format_timestamp(&generated_at.to_local())
        );
        out.push('\n');

        Self::problem_overview(&mut out, state);
        out.push('\n');
        Self::root_cause_chain(&mut out, state);
        out.push('\n');
        Self::top_solutions(&mut out, state);
        out.push('\n');
        Self::next_actions(&mut out, state);
        out.push('\n');

        out.push_str(RULE);
        out.push('\n');
        out.push_str(FOOTER);
        out
    }
}

/// `M/D/YYYY`, no zero padding.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// `M/D/YYYY, h:mm:ss AM/PM` in the timestamp's own zone.
pub fn format_timestamp<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

//! Terminal rendering of the wizard screens.
//!
//! Everything here returns a `String` built from borrowed views; printing is
//! left to the caller.

use std::fmt::Write;

use crate::domain::sheet::{
    score_chart, sort_actions, word_label, Action, ActionSort, ProblemData, RootCauseChain,
    Solution, StepProgress, SummaryView, Wizard, WizardState, WizardStep,
};

/// Characters per score point in the brainstorm chart.
const BAR_SCALE: f64 = 6.0;

const EMPTY: &str = "(empty)";

fn or_empty(text: &str) -> &str {
    if text.trim().is_empty() {
        EMPTY
    } else {
        text
    }
}

/// `✓ Problem ─ ● Root Cause ─ ○ Solutions ...` followed by "Step N of 5".
pub fn progress_tracker(current: WizardStep) -> String {
    let marks: Vec<String> = WizardStep::all()
        .iter()
        .map(|step| {
            let mark = match step.progress(current) {
                StepProgress::Completed => "✓",
                StepProgress::Current => "●",
                StepProgress::Upcoming => "○",
            };
            format!("{} {}", mark, step.display_name())
        })
        .collect();
    format!(
        "{}\nStep {} of {}",
        marks.join(" ─ "),
        current.index() + 1,
        WizardStep::all().len()
    )
}

/// Navigation commands available on the current step.
pub fn navigation_hint(wizard: &Wizard) -> String {
    let mut options = Vec::new();
    if wizard.can_retreat() {
        options.push("back");
    }
    if wizard.can_advance() {
        options.push("next");
    } else {
        options.push("new");
    }
    options.push("help");
    options.push("quit");
    format!("[{}]", options.join(" | "))
}

pub fn problem_screen(problem: &ProblemData) -> String {
    let category = match problem.known_category() {
        Some(known) => known.label().to_string(),
        None => or_empty(&problem.category).to_string(),
    };

    let mut out = String::new();
    let _ = writeln!(out, "Title:       {}", or_empty(&problem.title));
    let _ = writeln!(out, "Category:    {}", category);
    let _ = writeln!(
        out,
        "Description: {} ({})",
        or_empty(&problem.description),
        word_label(problem.description_word_count())
    );
    let _ = writeln!(out, "Importance:  {}", or_empty(&problem.importance));
    let _ = write!(out, "Impact:      {}", or_empty(&problem.impact));
    out
}

/// Shows answered whys plus the next blank one; the full chain once all
/// five are answered.
pub fn root_cause_screen(chain: &RootCauseChain) -> String {
    let mut out = String::new();
    for (i, cause) in chain.visible().iter().enumerate() {
        let _ = writeln!(out, "Why #{}: {}", i + 1, or_empty(&cause.why));
    }
    if chain.is_complete() {
        let links: Vec<&str> = chain.causes().iter().map(|c| c.why.as_str()).collect();
        let _ = writeln!(out, "\nRoot cause chain: {}", links.join(" → "));
    }
    out.trim_end().to_string()
}

pub fn solution_row(position: usize, solution: &Solution) -> String {
    format!(
        "{}. {} | effort {}/5 | impact {}/5 | score {:.2}",
        position,
        or_empty(solution.idea()),
        solution.effort(),
        solution.impact(),
        solution.score()
    )
}

pub fn solutions_screen(solutions: &[Solution]) -> String {
    let mut out = String::new();
    if solutions.is_empty() {
        out.push_str("No ideas yet.");
        return out;
    }
    for (i, solution) in solutions.iter().enumerate() {
        let _ = writeln!(out, "{}", solution_row(i + 1, solution));
    }

    let chart = score_chart(solutions);
    if !chart.is_empty() {
        out.push_str("\nPriority scores\n");
        for bar in chart {
            let width = (bar.score * BAR_SCALE).round().max(0.0) as usize;
            let _ = writeln!(out, "{:<8} {} {:.2}", bar.name, "█".repeat(width), bar.score);
        }
    }
    out.trim_end().to_string()
}

pub fn action_row(position: usize, action: &Action) -> String {
    format!(
        "{}. {} | {} | due {} | {}",
        position,
        or_empty(&action.step),
        or_empty(&action.responsible),
        or_empty(&action.deadline),
        action.status.label()
    )
}

/// Rows in display order, numbered from 1. Row numbers are what the
/// interactive commands refer to.
pub fn actions_screen(actions: &[Action], sort: ActionSort) -> String {
    if actions.is_empty() {
        return "No actions yet.".to_string();
    }
    let mut out = format!("Sorted by {}\n", sort);
    for (i, action) in sort_actions(actions, sort).into_iter().enumerate() {
        let _ = writeln!(out, "{}", action_row(i + 1, action));
    }
    out.trim_end().to_string()
}

pub fn summary_screen(state: &WizardState) -> String {
    let view = SummaryView::of(state);
    let mut out = String::new();

    let _ = writeln!(out, "Problem: {}", or_empty(&state.problem.title));
    let _ = writeln!(
        out,
        "Root causes identified: {}",
        state.root_causes.filled().count()
    );

    out.push_str("\nTop solutions\n");
    if view.top_solutions.is_empty() {
        out.push_str("  none yet\n");
    }
    for (i, solution) in view.top_solutions.iter().enumerate() {
        let _ = writeln!(out, "  {}", solution_row(i + 1, solution));
    }

    out.push_str("\nNext actions\n");
    if view.next_actions.is_empty() {
        out.push_str("  none yet\n");
    }
    for (i, action) in view.next_actions.iter().enumerate() {
        let _ = writeln!(out, "  {}", action_row(i + 1, action));
    }

    out.push_str("\nExport: copy | download | report");
    out
}

/// The body for the current step.
pub fn step_screen(wizard: &Wizard, sort: ActionSort) -> String {
    step_body(wizard.step(), wizard.state(), sort)
}

/// The body of any step for the given sheet.
pub fn step_body(step: WizardStep, state: &WizardState, sort: ActionSort) -> String {
    match step {
        WizardStep::Problem => problem_screen(&state.problem),
        WizardStep::RootCause => root_cause_screen(&state.root_causes),
        WizardStep::Solutions => solutions_screen(&state.solutions),
        WizardStep::ActionPlan => actions_screen(&state.actions, sort),
        WizardStep::Summary => summary_screen(state),
    }
}

/// Header, progress tracker, step body and navigation hint.
pub fn full_screen(wizard: &Wizard, sort: ActionSort) -> String {
    let step = wizard.step();
    format!(
        "{} {}\n{}\n\n{}\n\n{}",
        step.icon(),
        step.display_name(),
        progress_tracker(step),
        step_screen(wizard, sort),
        navigation_hint(wizard)
    )
}

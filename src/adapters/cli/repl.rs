//! Interactive wizard commands.
//!
//! A typed line is parsed against the current step: `impact 2 4` means a
//! solution's impact on the brainstorm step and is not available elsewhere.
//! Row numbers are 1-based as displayed.

use crate::domain::foundation::ScaleValue;
use crate::domain::sheet::{
    ActionField, ActionSort, ActionStatus, ProblemField, SheetEdit, SolutionField, WizardStep,
    CHAIN_DEPTH,
};
use crate::ports::ExportTarget;

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Next,
    Back,
    Show,
    Help,
    Quit,
    /// Start a new sheet (asks for confirmation).
    New,
    /// An edit that needs no lookup.
    Edit(SheetEdit),
    /// Edit the action shown on a row of the current listing.
    EditActionRow { row: usize, field: ActionField },
    RemoveActionRow { row: usize },
    Sort(ActionSort),
    Export(ExportTarget),
    /// Print the report text.
    Report,
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (input, ""),
    }
}

fn parse_row(raw: &str, what: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(row) if row >= 1 => Ok(row),
        _ => Err(format!("expected a {} number starting at 1, got '{}'", what, raw)),
    }
}

/// `<row> <rest>`
fn row_and_text<'a>(args: &'a str, what: &str) -> Result<(usize, &'a str), String> {
    let (row, rest) = split_word(args);
    if row.is_empty() {
        return Err(format!("missing {} number", what));
    }
    Ok((parse_row(row, what)?, rest))
}

fn scale(raw: &str) -> Result<u8, String> {
    raw.parse::<ScaleValue>()
        .map(|v| v.value())
        .map_err(|e| e.to_string())
}

/// Parses one input line for the given step.
pub fn parse(line: &str, step: WizardStep) -> Result<ReplCommand, String> {
    let (word, args) = split_word(line);
    let word = word.to_lowercase();

    match word.as_str() {
        "next" | "n" => return Ok(ReplCommand::Next),
        "back" | "b" | "prev" => return Ok(ReplCommand::Back),
        "show" | "s" | "" => return Ok(ReplCommand::Show),
        "help" | "h" | "?" => return Ok(ReplCommand::Help),
        "quit" | "q" | "exit" => return Ok(ReplCommand::Quit),
        "new" => return Ok(ReplCommand::New),
        _ => {}
    }

    match step {
        WizardStep::Problem => parse_problem(&word, args),
        WizardStep::RootCause => parse_root_cause(&word, args),
        WizardStep::Solutions => parse_solutions(&word, args),
        WizardStep::ActionPlan => parse_actions(&word, args),
        WizardStep::Summary => parse_summary(&word),
    }
    .ok_or_else(|| format!("'{}' is not available on the {} step", word, step))?
}

fn parse_problem(word: &str, args: &str) -> Option<Result<ReplCommand, String>> {
    let text = args.to_string();
    let field = match word {
        "title" => ProblemField::Title(text),
        "description" | "desc" => ProblemField::Description(text),
        "importance" | "why" => ProblemField::Importance(text),
        "impact" => ProblemField::Impact(text),
        "category" => ProblemField::category(text),
        _ => return None,
    };
    Some(Ok(ReplCommand::Edit(SheetEdit::Problem(field))))
}

fn parse_root_cause(word: &str, args: &str) -> Option<Result<ReplCommand, String>> {
    match word {
        "why" => Some(row_and_text(args, "why").and_then(|(row, text)| {
            if row > CHAIN_DEPTH {
                return Err(format!("there are only {} whys", CHAIN_DEPTH));
            }
            Ok(ReplCommand::Edit(SheetEdit::SetCause {
                index: row - 1,
                why: text.to_string(),
            }))
        })),
        "clear" => Some(Ok(ReplCommand::Edit(SheetEdit::ResetCauses))),
        _ => None,
    }
}

fn parse_solutions(word: &str, args: &str) -> Option<Result<ReplCommand, String>> {
    let update = |make: fn(&str) -> Result<SolutionField, String>| {
        row_and_text(args, "idea").and_then(|(row, rest)| {
            Ok(ReplCommand::Edit(SheetEdit::UpdateSolution {
                index: row - 1,
                field: make(rest)?,
            }))
        })
    };

    match word {
        "add" => Some(Ok(ReplCommand::Edit(SheetEdit::AddSolution))),
        "idea" => Some(update(|t| Ok(SolutionField::Idea(t.to_string())))),
        "effort" => Some(update(|t| scale(t).map(SolutionField::Effort))),
        "impact" => Some(update(|t| scale(t).map(SolutionField::Impact))),
        "remove" | "rm" => Some(
            parse_row(args, "idea")
                .map(|row| ReplCommand::Edit(SheetEdit::RemoveSolution { index: row - 1 })),
        ),
        _ => None,
    }
}

fn parse_actions(word: &str, args: &str) -> Option<Result<ReplCommand, String>> {
    let edit = |make: fn(&str) -> Result<ActionField, String>| {
        row_and_text(args, "action").and_then(|(row, rest)| {
            Ok(ReplCommand::EditActionRow {
                row,
                field: make(rest)?,
            })
        })
    };

    match word {
        "add" => Some(Ok(ReplCommand::Edit(SheetEdit::add_action()))),
        "step" => Some(edit(|t| Ok(ActionField::Step(t.to_string())))),
        "who" | "responsible" => Some(edit(|t| Ok(ActionField::Responsible(t.to_string())))),
        "deadline" | "due" => Some(edit(|t| Ok(ActionField::Deadline(t.to_string())))),
        "status" => Some(edit(|t| {
            t.parse::<ActionStatus>()
                .map(ActionField::Status)
                .map_err(|e| e.to_string())
        })),
        "remove" | "rm" => Some(
            parse_row(args, "action").map(|row| ReplCommand::RemoveActionRow { row }),
        ),
        "sort" => Some(
            args.parse::<ActionSort>()
                .map(ReplCommand::Sort)
                .map_err(|e| e.to_string()),
        ),
        _ => None,
    }
}

fn parse_summary(word: &str) -> Option<Result<ReplCommand, String>> {
    match word {
        "copy" => Some(Ok(ReplCommand::Export(ExportTarget::Clipboard))),
        "download" | "save" => Some(Ok(ReplCommand::Export(ExportTarget::Download))),
        "report" => Some(Ok(ReplCommand::Report)),
        _ => None,
    }
}

/// Commands for the given step, for `help`.
pub fn help_text(step: WizardStep) -> &'static str {
    match step {
        WizardStep::Problem => {
            "title <text> | description <text> | importance <text> | impact <text> | category <personal|work|study|custom|text>"
        }
        WizardStep::RootCause => "why <1-5> <text> | clear",
        WizardStep::Solutions => {
            "add | idea <n> <text> | effort <n> <1-5> | impact <n> <1-5> | remove <n>"
        }
        WizardStep::ActionPlan => {
            "add | step <n> <text> | who <n> <text> | deadline <n> <YYYY-MM-DD> | status <n> <not-started|in-progress|done> | remove <n> | sort <deadline|status>"
        }
        WizardStep::Summary => "copy | download | report | new",
    }
}

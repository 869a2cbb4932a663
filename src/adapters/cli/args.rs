//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{AppConfig, StorageBackend};
use crate::domain::foundation::{ActionId, ScaleValue};
use crate::domain::sheet::{ActionSort, ActionStatus, WizardStep};
use crate::ports::ExportTarget;

/// Command-line arguments for problem-solver
#[derive(Parser, Debug)]
#[command(name = "problem-solver")]
#[command(about = "Work a problem through: define it, ask why five times, brainstorm, plan, summarize")]
#[command(version)]
pub struct Cli {
    /// Directory the sheet is saved in
    #[arg(long, global = true, env = "PROBLEM_SOLVER_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Keep the sheet in memory only; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub memory: bool,

    /// Directory downloaded reports are saved to
    #[arg(long, global = true)]
    pub download_dir: Option<PathBuf>,

    /// Command the report is piped into for "copy"
    #[arg(long, global = true)]
    pub clipboard_command: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Lets flags win over environment configuration.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(dir) = &self.data_dir {
            config.storage.path = dir.clone();
        }
        if self.memory {
            config.storage.backend = StorageBackend::Memory;
        }
        if let Some(dir) = &self.download_dir {
            config.export.download_dir = dir.clone();
        }
        if let Some(cmd) = &self.clipboard_command {
            config.export.clipboard_command = Some(cmd.clone());
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Step through the sheet interactively (default)
    Wizard,

    /// Print a step's screen
    Status {
        /// Step to show (problem, root-cause, solutions, actions, summary or 0-4)
        #[arg(long, default_value = "problem")]
        step: WizardStep,

        /// Action plan ordering
        #[arg(long, default_value = "deadline")]
        sort: ActionSort,
    },

    /// Set problem fields
    Problem(ProblemArgs),

    /// Edit the five whys
    #[command(subcommand)]
    Cause(CauseCommand),

    /// Edit brainstormed solutions
    #[command(subcommand)]
    Solution(SolutionCommand),

    /// Edit the action plan
    #[command(subcommand)]
    Action(ActionCommand),

    /// Top solutions and next actions
    Summary,

    /// Print the plain-text report
    Report,

    /// Copy the report to the clipboard or save it as a file
    Export {
        /// clipboard or download
        target: ExportTarget,
    },

    /// Clear the sheet and start over
    Reset {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct ProblemArgs {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Why solving this matters
    #[arg(long)]
    pub importance: Option<String>,

    /// What happens if it is not solved
    #[arg(long)]
    pub impact: Option<String>,

    /// personal, work, study, custom, or any text
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CauseCommand {
    /// Answer one of the whys
    Set {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        position: u8,
        why: String,
    },
    /// Clear all five answers
    Reset,
    /// Show the whys
    List,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SolutionCommand {
    /// Add an idea
    Add {
        #[arg(default_value = "")]
        idea: String,
        #[arg(long, default_value = "3")]
        effort: ScaleValue,
        #[arg(long, default_value = "3")]
        impact: ScaleValue,
    },
    /// Change an idea's fields
    Update {
        #[arg(value_parser = parse_position)]
        position: usize,
        #[arg(long)]
        idea: Option<String>,
        #[arg(long)]
        effort: Option<ScaleValue>,
        #[arg(long)]
        impact: Option<ScaleValue>,
    },
    /// Remove an idea
    Remove {
        #[arg(value_parser = parse_position)]
        position: usize,
    },
    /// Show ideas and their priority scores
    List,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ActionCommand {
    /// Add an action
    Add {
        step: String,
        #[arg(long, default_value = "")]
        responsible: String,
        /// YYYY-MM-DD
        #[arg(long, default_value = "")]
        deadline: String,
        #[arg(long, default_value = "not-started")]
        status: ActionStatus,
    },
    /// Change an action's fields
    Update {
        /// Action id, or row number in the listing
        action: ActionRef,
        #[arg(long)]
        step: Option<String>,
        #[arg(long)]
        responsible: Option<String>,
        #[arg(long)]
        deadline: Option<String>,
        #[arg(long)]
        status: Option<ActionStatus>,
        /// Ordering row numbers refer to
        #[arg(long, default_value = "deadline")]
        sort: ActionSort,
    },
    /// Remove an action
    Remove {
        /// Action id, or row number in the listing
        action: ActionRef,
        #[arg(long, default_value = "deadline")]
        sort: ActionSort,
    },
    /// Show the action plan
    List {
        #[arg(long, default_value = "deadline")]
        sort: ActionSort,
        /// Include action ids
        #[arg(long)]
        ids: bool,
    },
}

/// How a command names an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRef {
    Id(ActionId),
    /// 1-based row in a sorted listing
    Row(usize),
}

impl FromStr for ActionRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.parse::<ActionId>() {
            return Ok(ActionRef::Id(id));
        }
        parse_position(s).map(ActionRef::Row)
    }
}

fn parse_position(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("expected a number starting at 1, got '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("problem-solver").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_subcommand_means_wizard() {
        assert_eq!(parse(&[]).command, None);
    }

    #[test]
    fn cause_position_is_bounded() {
        assert_eq!(
            parse(&["cause", "set", "2", "Because"]).command,
            Some(Command::Cause(CauseCommand::Set {
                position: 2,
                why: "Because".into()
            }))
        );
        assert!(Cli::try_parse_from(["problem-solver", "cause", "set", "6", "x"]).is_err());
    }

    #[test]
    fn solution_sliders_validated() {
        let cli = parse(&["solution", "add", "Automate", "--effort", "1", "--impact", "5"]);
        match cli.command {
            Some(Command::Solution(SolutionCommand::Add { idea, effort, impact })) => {
                assert_eq!(idea, "Automate");
                assert_eq!(effort.value(), 1);
                assert_eq!(impact.value(), 5);
            }
            other => panic!("unexpected: {:?}", other),
        }
        assert!(Cli::try_parse_from(["problem-solver", "solution", "add", "x", "--effort", "0"])
            .is_err());
    }

    #[test]
    fn action_ref_accepts_id_or_row() {
        let id = ActionId::new();
        assert_eq!(id.to_string().parse::<ActionRef>(), Ok(ActionRef::Id(id)));
        assert_eq!("2".parse::<ActionRef>(), Ok(ActionRef::Row(2)));
        assert!("0".parse::<ActionRef>().is_err());
        assert!("soon".parse::<ActionRef>().is_err());
    }

    #[test]
    fn export_target_parsed() {
        assert_eq!(
            parse(&["export", "download"]).command,
            Some(Command::Export {
                target: ExportTarget::Download
            })
        );
    }

    #[test]
    fn status_step_accepts_names_and_indices() {
        assert_eq!(
            parse(&["status", "--step", "3"]).command,
            Some(Command::Status {
                step: WizardStep::ActionPlan,
                sort: ActionSort::Deadline
            })
        );
    }

    #[test]
    fn flags_override_config() {
        let cli = parse(&["--memory", "--download-dir", "/tmp/out", "report"]);
        let mut config = AppConfig::default();

        cli.apply_overrides(&mut config);

        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.export.download_dir, PathBuf::from("/tmp/out"));
    }
}

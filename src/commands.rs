//! Command dispatch for the binary.

use std::io::{BufRead, IsTerminal, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use problem_solver::adapters::cli::render;
use problem_solver::adapters::cli::repl::{self, ReplCommand};
use problem_solver::adapters::cli::{
    ActionCommand, ActionRef, CauseCommand, Command, ProblemArgs, SolutionCommand,
};
use problem_solver::adapters::{
    AutoConfirmation, ClipboardExporter, ConsoleNotifier, FileDownloadExporter, FileStateStore,
    InMemoryStateStore, PlainTextReportGenerator, StdinConfirmation,
};
use problem_solver::application::{
    ExportReportCommand, ExportReportHandler, SheetRepository, SheetSession,
};
use problem_solver::config::{AppConfig, StorageBackend};
use problem_solver::domain::foundation::{ActionId, Timestamp};
use problem_solver::domain::sheet::{
    sort_actions, ActionField, ActionSort, ProblemField, SheetEdit, SolutionField,
};
use problem_solver::ports::{ConfirmationPrompt, ExportTarget, Notifier, ReportExporter, StateStore};

/// Wired session plus the collaborators commands need.
pub struct App {
    session: SheetSession,
    exports: ExportReportHandler,
    notifier: Arc<dyn Notifier>,
}

impl App {
    pub async fn build(config: &AppConfig) -> Self {
        let store: Arc<dyn StateStore> = match config.storage.backend {
            StorageBackend::File => Arc::new(FileStateStore::new(&config.storage.path)),
            StorageBackend::Memory => Arc::new(InMemoryStateStore::new()),
        };
        info!(backend = ?config.storage.backend, key = %config.storage.key, "Opening sheet");
        let repository = SheetRepository::with_key(store, config.storage.key.clone());
        let session = SheetSession::open(repository).await;

        let notifier: Arc<dyn Notifier> = Arc::new(ConsoleNotifier);
        let exporters: Vec<Arc<dyn ReportExporter>> = vec![
            Arc::new(ClipboardExporter::from_command_line(
                config.export.clipboard_command(),
            )),
            Arc::new(FileDownloadExporter::new(&config.export.download_dir)),
        ];
        let exports = ExportReportHandler::new(
            Arc::new(PlainTextReportGenerator::new()),
            exporters,
            notifier.clone(),
        );

        Self {
            session,
            exports,
            notifier,
        }
    }

    pub async fn run(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Wizard => self.run_wizard().await?,
            Command::Status { step, sort } => {
                println!(
                    "{} {}\n{}\n\n{}",
                    step.icon(),
                    step.display_name(),
                    render::progress_tracker(step),
                    render::step_body(step, self.session.state(), sort)
                );
            }
            Command::Problem(args) => {
                for edit in problem_edits(args) {
                    self.session.apply(edit).await;
                }
                println!("{}", render::problem_screen(&self.session.state().problem));
            }
            Command::Cause(cmd) => self.run_cause(cmd).await,
            Command::Solution(cmd) => self.run_solution(cmd).await,
            Command::Action(cmd) => self.run_action(cmd).await?,
            Command::Summary => println!("{}", render::summary_screen(self.session.state())),
            Command::Report => {
                let payload = self.exports.render(self.session.state(), &Timestamp::now());
                println!("{}", payload.body);
            }
            Command::Export { target } => self.export(target).await,
            Command::Reset { yes } => {
                let prompt: Box<dyn ConfirmationPrompt> = if yes {
                    Box::new(AutoConfirmation::confirming())
                } else {
                    Box::new(StdinConfirmation)
                };
                self.session
                    .reset(prompt.as_ref(), self.notifier.as_ref())
                    .await;
            }
        }
        self.warn_if_unsaved();
        Ok(())
    }

    async fn run_cause(&mut self, cmd: CauseCommand) {
        match cmd {
            CauseCommand::Set { position, why } => {
                self.session
                    .apply(SheetEdit::SetCause {
                        index: usize::from(position) - 1,
                        why,
                    })
                    .await;
            }
            CauseCommand::Reset => {
                self.session.apply(SheetEdit::ResetCauses).await;
            }
            CauseCommand::List => {}
        }
        println!("{}", render::root_cause_screen(&self.session.state().root_causes));
    }

    async fn run_solution(&mut self, cmd: SolutionCommand) {
        match cmd {
            SolutionCommand::Add {
                idea,
                effort,
                impact,
            } => {
                self.session.apply(SheetEdit::AddSolution).await;
                let index = self.session.state().solutions.len() - 1;
                let fields = [
                    SolutionField::Idea(idea),
                    SolutionField::Effort(effort.value()),
                    SolutionField::Impact(impact.value()),
                ];
                for field in fields {
                    self.session
                        .apply(SheetEdit::UpdateSolution { index, field })
                        .await;
                }
            }
            SolutionCommand::Update {
                position,
                idea,
                effort,
                impact,
            } => {
                let fields = idea
                    .map(SolutionField::Idea)
                    .into_iter()
                    .chain(effort.map(|v| SolutionField::Effort(v.value())))
                    .chain(impact.map(|v| SolutionField::Impact(v.value())));
                for field in fields {
                    self.session
                        .apply(SheetEdit::UpdateSolution {
                            index: position - 1,
                            field,
                        })
                        .await;
                }
            }
            SolutionCommand::Remove { position } => {
                self.session
                    .apply(SheetEdit::RemoveSolution {
                        index: position - 1,
                    })
                    .await;
            }
            SolutionCommand::List => {}
        }
        println!("{}", render::solutions_screen(&self.session.state().solutions));
    }

    async fn run_action(&mut self, cmd: ActionCommand) -> Result<()> {
        let mut listing = ActionSort::default();
        match cmd {
            ActionCommand::Add {
                step,
                responsible,
                deadline,
                status,
            } => {
                let id = ActionId::new();
                self.session.apply(SheetEdit::AddAction { id }).await;
                let fields = [
                    ActionField::Step(step),
                    ActionField::Responsible(responsible),
                    ActionField::Deadline(deadline),
                    ActionField::Status(status),
                ];
                for field in fields {
                    self.session
                        .apply(SheetEdit::UpdateAction { id, field })
                        .await;
                }
                println!("Added action {}", id);
            }
            ActionCommand::Update {
                action,
                step,
                responsible,
                deadline,
                status,
                sort,
            } => {
                listing = sort;
                let id = self.resolve_action(action, sort)?;
                let fields = step
                    .map(ActionField::Step)
                    .into_iter()
                    .chain(responsible.map(ActionField::Responsible))
                    .chain(deadline.map(ActionField::Deadline))
                    .chain(status.map(ActionField::Status));
                for field in fields {
                    self.session
                        .apply(SheetEdit::UpdateAction { id, field })
                        .await;
                }
            }
            ActionCommand::Remove { action, sort } => {
                listing = sort;
                let id = self.resolve_action(action, sort)?;
                self.session.apply(SheetEdit::RemoveAction { id }).await;
            }
            ActionCommand::List { sort, ids } => {
                if ids {
                    for (i, action) in sort_actions(&self.session.state().actions, sort)
                        .into_iter()
                        .enumerate()
                    {
                        println!("{}. {}", i + 1, action.id);
                    }
                    return Ok(());
                }
                listing = sort;
            }
        }
        println!(
            "{}",
            render::actions_screen(&self.session.state().actions, listing)
        );
        Ok(())
    }

    fn resolve_action(&self, action: ActionRef, sort: ActionSort) -> Result<ActionId> {
        match action {
            ActionRef::Id(id) => Ok(id),
            ActionRef::Row(row) => self
                .action_at_row(row, sort)
                .with_context(|| format!("No action on row {}", row)),
        }
    }

    fn action_at_row(&self, row: usize, sort: ActionSort) -> Option<ActionId> {
        sort_actions(&self.session.state().actions, sort)
            .get(row.checked_sub(1)?)
            .map(|a| a.id)
    }

    async fn export(&self, target: ExportTarget) {
        let cmd = ExportReportCommand::now(target);
        if let Ok(result) = self.exports.handle(self.session.state(), cmd).await {
            info!(filename = %result.payload.filename, "Exported report");
        }
    }

    fn warn_if_unsaved(&self) {
        if !self.session.is_persisted() {
            eprintln!("Warning: the sheet could not be saved; changes are kept in memory only.");
        }
    }

    async fn run_wizard(&mut self) -> Result<()> {
        let mut sort = ActionSort::default();
        self.show_screen(sort, true)?;

        loop {
            let prompt = format!("{}> ", self.session.step().display_name().to_lowercase());
            let Some(line) = read_line(prompt).await? else {
                break;
            };

            let command = match repl::parse(&line, self.session.step()) {
                Ok(command) => command,
                Err(message) => {
                    eprintln!("{}", message);
                    continue;
                }
            };

            match command {
                ReplCommand::Quit => break,
                ReplCommand::Next => {
                    if self.session.advance().moved {
                        self.show_screen(sort, true)?;
                    }
                }
                ReplCommand::Back => {
                    if self.session.retreat().moved {
                        self.show_screen(sort, true)?;
                    }
                }
                ReplCommand::Show => self.show_screen(sort, false)?,
                ReplCommand::Help => println!("{}", repl::help_text(self.session.step())),
                ReplCommand::New => {
                    if self
                        .session
                        .reset(&StdinConfirmation, self.notifier.as_ref())
                        .await
                    {
                        self.show_screen(sort, true)?;
                    }
                }
                ReplCommand::Edit(edit) => {
                    self.session.apply(edit).await;
                    self.show_body(sort);
                }
                ReplCommand::EditActionRow { row, field } => match self.action_at_row(row, sort) {
                    Some(id) => {
                        self.session
                            .apply(SheetEdit::UpdateAction { id, field })
                            .await;
                        self.show_body(sort);
                    }
                    None => eprintln!("No action on row {}", row),
                },
                ReplCommand::RemoveActionRow { row } => match self.action_at_row(row, sort) {
                    Some(id) => {
                        self.session.apply(SheetEdit::RemoveAction { id }).await;
                        self.show_body(sort);
                    }
                    None => eprintln!("No action on row {}", row),
                },
                ReplCommand::Sort(next) => {
                    sort = next;
                    self.show_body(sort);
                }
                ReplCommand::Export(target) => self.export(target).await,
                ReplCommand::Report => {
                    let payload = self.exports.render(self.session.state(), &Timestamp::now());
                    println!("{}", payload.body);
                }
            }
        }

        self.warn_if_unsaved();
        Ok(())
    }

    /// Prints the whole screen; `from_top` clears the terminal first.
    fn show_screen(&self, sort: ActionSort, from_top: bool) -> Result<()> {
        let stdout = std::io::stdout();
        let clear = from_top && stdout.is_terminal();
        let screen = render::full_screen(self.session.wizard(), sort);
        write_screen(&mut stdout.lock(), &screen, clear).context("Failed to write to stdout")
    }

    fn show_body(&self, sort: ActionSort) {
        println!("{}", render::step_screen(self.session.wizard(), sort));
    }
}

fn problem_edits(args: ProblemArgs) -> Vec<SheetEdit> {
    let ProblemArgs {
        title,
        description,
        importance,
        impact,
        category,
    } = args;
    [
        title.map(ProblemField::Title),
        description.map(ProblemField::Description),
        importance.map(ProblemField::Importance),
        impact.map(ProblemField::Impact),
        category.map(ProblemField::category),
    ]
    .into_iter()
    .flatten()
    .map(SheetEdit::Problem)
    .collect()
}

fn write_screen(out: &mut impl Write, screen: &str, clear: bool) -> std::io::Result<()> {
    if clear {
        write!(out, "\x1b[2J\x1b[H")?;
    }
    writeln!(out, "{}\n", screen)?;
    out.flush()
}

/// Reads one line from stdin. `None` at end of input.
async fn read_line(prompt: String) -> Result<Option<String>> {
    let read = tokio::task::spawn_blocking(move || -> std::io::Result<Option<String>> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        Ok(if read == 0 { None } else { Some(line) })
    })
    .await
    .context("stdin reader task failed")?;

    Ok(read.context("Failed to read from stdin")?)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn screen_clears_only_when_asked() {
        let mut out = Vec::new();
        write_screen(&mut out, "SCREEN", false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "SCREEN\n\n");

        let mut out = Vec::new();
        write_screen(&mut out, "SCREEN", true).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("\x1b[2J\x1b[H"));
    }

    #[test]
    fn screen_write_errors_are_returned() {
        let err = write_screen(&mut ClosedPipe, "SCREEN", false).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }
}

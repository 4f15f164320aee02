//! Interactive release form.
//!
//! Mirrors the operator dialog: "Last release", an "update current" checkbox,
//! "Next release", then Run or Close. Builds run on a worker thread and report
//! back over a channel, so progress keeps printing while the platform works.

use std::io::{self, ErrorKind};
use std::sync::mpsc;
use std::thread;

use dialoguer::{Confirm, Error as DialoguerError, Input, Select};

use crate::app::api::{self, BuildRequest};
use crate::domain::{AppError, BuildEvent, BuildReport, BuilderConfig, suggest_next_release};

use super::progress;

/// Whether the next-release field accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextField {
    /// "Update current" unchecked: a distinct next release is created.
    Editable,
    /// "Update current" checked: next release is forced to the last release.
    Locked,
}

/// Field values of the release form.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ReleaseForm {
    previous: String,
    /// Last value typed into the next-release field, kept while it is locked.
    next: String,
    field: NextField,
}

impl ReleaseForm {
    fn new(previous: String) -> Self {
        let next = suggest_next_release(&previous);
        Self { previous, next, field: NextField::Editable }
    }

    fn previous(&self) -> &str {
        &self.previous
    }

    fn next(&self) -> &str {
        match self.field {
            NextField::Editable => &self.next,
            NextField::Locked => &self.previous,
        }
    }

    fn is_update_current(&self) -> bool {
        self.field == NextField::Locked
    }

    fn is_next_editable(&self) -> bool {
        self.field == NextField::Editable
    }

    /// Change the last release; an untouched next-release suggestion follows it.
    fn set_previous(&mut self, previous: String) {
        if self.next == suggest_next_release(&self.previous) {
            self.next = suggest_next_release(&previous);
        }
        self.previous = previous;
    }

    /// Ignored while the field is locked.
    fn set_next(&mut self, next: String) {
        if self.is_next_editable() {
            self.next = next;
        }
    }

    fn set_update_current(&mut self, update: bool) {
        self.field = if update { NextField::Locked } else { NextField::Editable };
    }

    fn request(&self) -> BuildRequest {
        BuildRequest {
            previous: self.previous.clone(),
            next: self.is_next_editable().then(|| self.next.clone()),
            update_in_place: self.is_update_current(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormAction {
    Run,
    Close,
}

impl FormAction {
    const ALL: [FormAction; 2] = [FormAction::Run, FormAction::Close];

    fn label(self) -> &'static str {
        match self {
            FormAction::Run => "Run",
            FormAction::Close => "Close",
        }
    }
}

/// Messages from the build worker to the form.
enum WorkerMessage {
    Progress(BuildEvent),
    Finished(Result<BuildReport, AppError>),
}

pub(super) fn run_form(config: BuilderConfig) -> Result<(), AppError> {
    let latest = api::latest_release(&config).unwrap_or_else(|err| {
        println!("⚠️  Could not scan releases: {}", err);
        String::new()
    });
    let mut form = ReleaseForm::new(latest);

    println!("Setup package making");
    loop {
        let Some(previous) = prompt_text("Last release", form.previous())? else {
            return Ok(());
        };
        form.set_previous(previous);

        let Some(update) = prompt_update_current(form.is_update_current())? else {
            return Ok(());
        };
        form.set_update_current(update);

        if form.is_next_editable() {
            let Some(next) = prompt_text("Next release", form.next())? else {
                return Ok(());
            };
            form.set_next(next);
        } else {
            println!("Next release: {} (update current)", form.next());
        }

        match prompt_action()? {
            Some(FormAction::Run) => {
                let result = run_in_background(config.clone(), form.request());
                progress::render_result(&result);
            }
            Some(FormAction::Close) | None => return Ok(()),
        }
    }
}

/// Run the build on a worker thread, rendering its progress on this one.
fn run_in_background(
    config: BuilderConfig,
    request: BuildRequest,
) -> Result<BuildReport, AppError> {
    let (tx, rx) = mpsc::channel();

    let worker = thread::spawn(move || {
        let progress_tx = tx.clone();
        let result = api::build_release(config, &request, &mut |event| {
            let _ = progress_tx.send(WorkerMessage::Progress(event));
        });
        let _ = tx.send(WorkerMessage::Finished(result));
    });

    await_worker(rx, worker)
}

/// Render worker progress until the channel closes, then join the worker.
fn await_worker(
    rx: mpsc::Receiver<WorkerMessage>,
    worker: thread::JoinHandle<()>,
) -> Result<BuildReport, AppError> {
    let mut finished = None;
    for message in rx {
        match message {
            WorkerMessage::Progress(event) => progress::render_event(event),
            WorkerMessage::Finished(result) => finished = Some(result),
        }
    }

    if worker.join().is_err() {
        tracing::error!("build worker panicked");
    }
    finished.unwrap_or_else(|| {
        Err(AppError::Io(io::Error::other("build worker stopped unexpectedly")))
    })
}

fn prompt_text(prompt: &str, initial: &str) -> Result<Option<String>, AppError> {
    let input = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text();
    match input {
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read {}: {}", prompt, err))),
    }
}

fn prompt_update_current(default: bool) -> Result<Option<bool>, AppError> {
    Confirm::new()
        .with_prompt("Update current")
        .default(default)
        .interact_opt()
        .map_err(|err| AppError::Prompt(format!("Failed to read update mode: {}", err)))
}

fn prompt_action() -> Result<Option<FormAction>, AppError> {
    let items: Vec<&str> = FormAction::ALL.iter().map(|action| action.label()).collect();
    let selection = Select::new()
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Prompt(format!("Failed to select action: {}", err)))?;

    Ok(selection.map(|index| FormAction::ALL[index]))
}

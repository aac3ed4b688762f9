//! # Command Log
//!
//! Tracks command history and enables undo/redo.
//!
//! ## Design
//!
//! - Applying a command yields its resolved inverse, which is recorded with it
//! - Undo applies the inverses and moves the batch to the redo stack
//! - Redo reapplies the resolved commands at the same positions
//! - New commands clear the redo stack
//! - Batches group several commands into one undo step
//! - A batch that fails partway is rolled back and stays where it was
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut log = CommandLog::new();
//! let mut doc = Document::new();
//!
//! log.execute(Command::add(Element::text("Hello")), &mut doc)?;
//! log.undo(&mut doc)?;
//! log.redo(&mut doc)?;
//! ```

use crate::commands::Command;
use crate::errors::{EditorError, HistoryAction};
use crate::Document;
use folio_common::Settings;
use tracing::{debug, warn};

const DEFAULT_MAX_LEVELS: usize = 100;

/// Commands undone/redone as one step
#[derive(Debug, Clone, PartialEq)]
pub struct CommandBatch {
    /// Resolved commands, in application order
    pub commands: Vec<Command>,

    /// Inverse commands, in reverse order for undo
    pub inverses: Vec<Command>,

    pub description: Option<String>,
}

impl CommandBatch {
    pub fn single(command: Command, inverse: Command) -> Self {
        Self {
            commands: vec![command],
            inverses: vec![inverse],
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn empty() -> Self {
        Self {
            commands: Vec::new(),
            inverses: Vec::new(),
            description: None,
        }
    }
}

/// Undo/redo history for a single document
#[derive(Debug)]
pub struct CommandLog {
    undo_stack: Vec<CommandBatch>,
    redo_stack: Vec<CommandBatch>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    current_batch: Option<CommandBatch>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::with_max_levels(DEFAULT_MAX_LEVELS)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_max_levels(settings.history_limit)
    }

    /// Apply `command` to `doc` and record it for undo
    pub fn execute(&mut self, command: Command, doc: &mut Document) -> Result<(), EditorError> {
        let inverse = command.apply(doc)?;
        debug!(command = command.name(), inverse = inverse.name(), "Executed command");

        self.redo_stack.clear();
        match &mut self.current_batch {
            Some(batch) => {
                batch.commands.push(command);
                batch.inverses.insert(0, inverse);
            }
            None => self.push_batch(CommandBatch::single(command, inverse)),
        }
        Ok(())
    }

    /// Start a batch; commands executed until `end_batch` undo as one step
    pub fn begin_batch(&mut self) {
        self.end_batch();
        self.current_batch = Some(CommandBatch::empty());
    }

    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if !batch.commands.is_empty() {
                self.push_batch(batch);
            }
        }
    }

    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    fn push_batch(&mut self, batch: CommandBatch) {
        self.undo_stack.push(batch);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }
    }

    /// Revert the most recent batch. An open batch is closed first.
    pub fn undo(&mut self, doc: &mut Document) -> Result<(), EditorError> {
        self.end_batch();
        let mut batch = self
            .undo_stack
            .pop()
            .ok_or(EditorError::EmptyHistory(HistoryAction::Undo))?;

        match apply_all(&batch.inverses, doc) {
            Ok(mut commands) => {
                commands.reverse();
                batch.commands = commands;
                debug!(steps = batch.inverses.len(), "Undid batch");
                self.redo_stack.push(batch);
                Ok(())
            }
            Err(e) => {
                self.undo_stack.push(batch);
                Err(e)
            }
        }
    }

    /// Reapply the most recently undone batch
    pub fn redo(&mut self, doc: &mut Document) -> Result<(), EditorError> {
        self.end_batch();
        let mut batch = self
            .redo_stack
            .pop()
            .ok_or(EditorError::EmptyHistory(HistoryAction::Redo))?;

        match apply_all(&batch.commands, doc) {
            Ok(mut inverses) => {
                inverses.reverse();
                batch.inverses = inverses;
                debug!(steps = batch.commands.len(), "Redid batch");
                self.undo_stack.push(batch);
                Ok(())
            }
            Err(e) => {
                self.redo_stack.push(batch);
                Err(e)
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current_batch = None;
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply `commands` in order, returning their inverses in application order.
/// On failure the commands already applied are reverted before returning.
fn apply_all(commands: &[Command], doc: &mut Document) -> Result<Vec<Command>, EditorError> {
    let mut applied = Vec::with_capacity(commands.len());

    for command in commands {
        match command.apply(doc) {
            Ok(inverse) => applied.push(inverse),
            Err(e) => {
                warn!(command = command.name(), error = %e, "Command failed, rolling back");
                for inverse in applied.iter().rev() {
                    if let Err(rollback) = inverse.apply(doc) {
                        warn!(command = inverse.name(), error = %rollback, "Rollback step failed");
                    }
                }
                return Err(e);
            }
        }
    }

    Ok(applied)
}

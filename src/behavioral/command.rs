//! Behavioral Pattern: Command
//! Example: Copy / cut / paste / undo in a text editor
//!
//! Run with: cargo run --bin command
//!
//! ## Problem
//! UI elements (buttons, shortcuts, menu items) trigger the same operations.
//! Wiring each of them straight to the editor duplicates code and couples the
//! UI layer to the business logic.
//!
//! ## Solution
//! Every operation becomes an object with one entry point, `execute`. The
//! invoker ([`Application`]) runs commands without knowing what they do, and
//! because commands are values they can be kept in a history and undone.
//! Think of a waiter passing an order slip to the kitchen.
//!
//! ## Structure
//! - [`Command`]: the interface. `execute` reports whether the command changed
//!   anything worth recording.
//! - [`CopyCommand`], [`CutCommand`], [`PasteCommand`]: concrete commands. The
//!   mutating ones back up the editor before touching it.
//! - [`Editor`]: the receiver holding the real logic.
//! - [`CommandHistory`]: stack of executed commands.
//!
//! ## Trade-offs
//! Undo/redo, deferred execution and composite commands come almost for free.
//! The price is a class (here: a struct) per operation.

use std::ops::Range;

use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("invalid selection {start}..{end} for text of length {len}")]
    InvalidSelection { start: usize, end: usize, len: usize },
}

/// Receiver: text plus a byte-range selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Editor {
    text: String,
    selection: Range<usize>,
}

impl Editor {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let end = text.len();
        Editor {
            text,
            selection: end..end,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn select(&mut self, start: usize, end: usize) -> Result<(), CommandError> {
        let valid = start <= end
            && end <= self.text.len()
            && self.text.is_char_boundary(start)
            && self.text.is_char_boundary(end);
        if !valid {
            return Err(CommandError::InvalidSelection {
                start,
                end,
                len: self.text.len(),
            });
        }
        self.selection = start..end;
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.selection = 0..self.text.len();
    }

    pub fn selection(&self) -> &str {
        &self.text[self.selection.clone()]
    }

    pub fn delete_selection(&mut self) {
        self.replace_selection("");
    }

    /// Replaces the selection and leaves the cursor after the inserted text.
    pub fn replace_selection(&mut self, text: &str) {
        let start = self.selection.start;
        self.text.replace_range(self.selection.clone(), text);
        let cursor = start + text.len();
        self.selection = cursor..cursor;
    }
}

/// Everything a command may act on.
#[derive(Debug, Default)]
pub struct Workspace {
    pub editor: Editor,
    pub clipboard: String,
}

pub trait Command {
    fn name(&self) -> &'static str;

    /// Returns `true` when the command changed state and belongs in the history.
    fn execute(&mut self, workspace: &mut Workspace) -> bool;

    fn undo(&mut self, workspace: &mut Workspace);
}

#[derive(Debug, Default)]
pub struct CopyCommand;

impl Command for CopyCommand {
    fn name(&self) -> &'static str {
        "copy"
    }

    fn execute(&mut self, workspace: &mut Workspace) -> bool {
        workspace.clipboard = workspace.editor.selection().to_string();
        false
    }

    fn undo(&mut self, _workspace: &mut Workspace) {}
}

#[derive(Debug, Default)]
pub struct CutCommand {
    backup: Option<Editor>,
}

impl Command for CutCommand {
    fn name(&self) -> &'static str {
        "cut"
    }

    fn execute(&mut self, workspace: &mut Workspace) -> bool {
        if workspace.editor.selection().is_empty() {
            return false;
        }
        self.backup = Some(workspace.editor.clone());
        workspace.clipboard = workspace.editor.selection().to_string();
        workspace.editor.delete_selection();
        true
    }

    fn undo(&mut self, workspace: &mut Workspace) {
        if let Some(backup) = self.backup.take() {
            workspace.editor = backup;
        }
    }
}

#[derive(Debug, Default)]
pub struct PasteCommand {
    backup: Option<Editor>,
}

impl Command for PasteCommand {
    fn name(&self) -> &'static str {
        "paste"
    }

    fn execute(&mut self, workspace: &mut Workspace) -> bool {
        self.backup = Some(workspace.editor.clone());
        let clipboard = workspace.clipboard.clone();
        workspace.editor.replace_selection(&clipboard);
        true
    }

    fn undo(&mut self, workspace: &mut Workspace) {
        if let Some(backup) = self.backup.take() {
            workspace.editor = backup;
        }
    }
}

#[derive(Default)]
pub struct CommandHistory {
    stack: Vec<Box<dyn Command>>,
}

impl CommandHistory {
    pub fn push(&mut self, command: Box<dyn Command>) {
        self.stack.push(command);
    }

    pub fn pop(&mut self) -> Option<Box<dyn Command>> {
        self.stack.pop()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

/// What a shortcut or button is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Copy,
    Cut,
    Paste,
    Undo,
}

/// The invoker.
#[derive(Default)]
pub struct Application {
    workspace: Workspace,
    history: CommandHistory,
}

impl Application {
    pub fn new(text: impl Into<String>) -> Self {
        Application {
            workspace: Workspace {
                editor: Editor::new(text),
                clipboard: String::new(),
            },
            history: CommandHistory::default(),
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.workspace.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.workspace.editor
    }

    pub fn clipboard(&self) -> &str {
        &self.workspace.clipboard
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Runs a command and records it if it changed anything.
    pub fn execute_command(&mut self, mut command: Box<dyn Command>) -> bool {
        let recorded = command.execute(&mut self.workspace);
        debug!(command = command.name(), recorded, "executed command");
        if recorded {
            self.history.push(command);
        }
        recorded
    }

    /// Dispatches a UI action. Returns whether the workspace changed.
    pub fn trigger(&mut self, action: Action) -> bool {
        match action {
            Action::Copy => self.execute_command(Box::new(CopyCommand)),
            Action::Cut => self.execute_command(Box::new(CutCommand::default())),
            Action::Paste => self.execute_command(Box::new(PasteCommand::default())),
            Action::Undo => self.undo(),
        }
    }

    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(mut command) => {
                command.undo(&mut self.workspace);
                debug!(command = command.name(), "undid command");
                true
            }
            None => false,
        }
    }
}

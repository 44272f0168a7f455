use std::path::PathBuf;

use ratatui::layout::Position;

/// Input routing modes. `Edit` is always the bottom of the stack; `Menu` and
/// `OpenDialog` stack above it, and Tab while the dialog is open pushes
/// `Menu` on top of `OpenDialog`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Edit,
    Menu,
    OpenDialog,
}

/// Process-wide session state, threaded explicitly through every transition.
pub struct Session {
    pub file_name: Option<String>,
    /// Last known editing position, restored when the menu closes.
    pub cursor: Position,
    pub running: bool,
    /// Ring index of the pane holding menu focus. Never an owner.
    pub active_pane: Option<usize>,
    /// Directory the open dialog lists.
    pub work_dir: PathBuf,
    modes: Vec<Mode>,
}

impl Session {
    pub fn new(work_dir: PathBuf) -> Self {
        Self {
            file_name: None,
            cursor: Position::new(1, 1),
            running: false,
            active_pane: None,
            work_dir,
            modes: vec![Mode::Edit],
        }
    }

    pub fn mode(&self) -> Mode {
        *self.modes.last().unwrap_or(&Mode::Edit)
    }

    pub fn push_mode(&mut self, mode: Mode) {
        self.modes.push(mode);
    }

    /// The bottom `Edit` entry never pops.
    pub fn pop_mode(&mut self) {
        if self.modes.len() > 1 {
            self.modes.pop();
        }
    }

    #[allow(dead_code)] // Used by integration tests
    pub fn in_dialog(&self) -> bool {
        self.modes.contains(&Mode::OpenDialog)
    }
}

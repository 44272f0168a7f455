use ratatui::layout::{Position, Size};

use crate::menu::command::Command;
use crate::screen::SurfaceId;

/// One selectable row of a drop-down pane. Immutable after construction.
#[derive(Clone, Debug)]
pub struct MenuItem {
    pub label: String,
    pub command: Command,
    pub index: usize,
}

/// A drop-down menu pane.
///
/// Geometry is fixed at construction and the rows are pre-rendered into the
/// pane's surface, so opening it is a visibility flip plus a highlight patch.
/// `active_item` stays in `[0, items.len())`; items are never empty.
#[derive(Debug)]
pub struct Pane {
    pub header: String,
    pub origin: Position,
    #[allow(dead_code)]
    pub size: Size,
    pub items: Vec<MenuItem>,
    pub active_item: usize,
    pub longest_item: u16,
    pub surface: SurfaceId,
}

impl Pane {
    /// Surface row holding the item at `index`; row 0 is the top border.
    pub fn item_row(index: usize) -> u16 {
        index as u16 + 1
    }

    pub fn selected_command(&self) -> Command {
        self.items[self.active_item].command
    }

    pub fn last_item(&self) -> usize {
        self.items.len() - 1
    }
}

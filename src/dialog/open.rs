use std::path::Path;

use ratatui::backend::Backend;
use ratatui::style::Style;

use crate::dialog::listing::{self, EntryKind, FileEntry};
use crate::screen::{Screen, SurfaceId};
use crate::ui::theme::{Theme, reverse_off, reverse_on};

/// Row 0, the synthetic parent entry.
const PARENT: &str = "..";

/// The modal file-open view.
///
/// Populated from the session working directory on each invocation; rows are
/// drawn once and the selection moves as reverse-video patches. `selected`
/// never leaves the rendered rows.
pub struct OpenDialog {
    surface: SurfaceId,
    entries: Vec<FileEntry>,
    selected: usize,
    rows: usize,
}

impl OpenDialog {
    pub fn new(surface: SurfaceId) -> Self {
        Self {
            surface,
            entries: Vec::new(),
            selected: 0,
            rows: 1,
        }
    }

    #[allow(dead_code)] // Used by integration tests
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    #[allow(dead_code)]
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Rendered row count, parent entry included.
    #[allow(dead_code)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The full listing, including entries past the rendered cap.
    #[allow(dead_code)]
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Entry under the selection; `None` on the parent row.
    #[allow(dead_code)]
    pub fn selected_entry(&self) -> Option<&FileEntry> {
        if self.selected == 0 {
            None
        } else {
            self.entries.get(self.selected - 1)
        }
    }

    /// Clears the overlay and renders `dir`'s listing with the parent entry
    /// on top, selected. Entry indices past `height - 3` are dropped so rows
    /// cannot run past the dialog edge.
    pub fn populate<B: Backend>(&mut self, screen: &mut Screen<B>, theme: &Theme, dir: &Path) {
        self.entries = listing::list_dir(dir);
        self.selected = 0;

        let surface = screen.surface_mut(self.surface);
        let height = surface.area().height;
        surface.fill(theme.base());
        surface.write_text(0, 0, PARENT, theme.directory());

        let cap = height.saturating_sub(3);
        let mut rows = 1;
        for (index, entry) in self.entries.iter().enumerate() {
            if index as u16 > cap {
                break;
            }
            surface.write_text(rows as u16, 0, &entry.name, kind_style(theme, entry.kind));
            rows += 1;
        }
        self.rows = rows;

        surface.set_region_style(0, 0, PARENT.len() as u16, reverse_on());
    }

    /// Moves the selection one row up; no-op on the parent row.
    pub fn move_up<B: Backend>(&mut self, screen: &mut Screen<B>) {
        if self.selected == 0 {
            return;
        }
        let previous = self.selected;
        self.selected -= 1;
        self.repaint(screen, previous);
    }

    /// Moves the selection one row down; no-op on the last rendered row.
    pub fn move_down<B: Backend>(&mut self, screen: &mut Screen<B>) {
        if self.selected + 1 >= self.rows {
            return;
        }
        let previous = self.selected;
        self.selected += 1;
        self.repaint(screen, previous);
    }

    fn repaint<B: Backend>(&self, screen: &mut Screen<B>, previous: usize) {
        let surface = screen.surface_mut(self.surface);
        surface.set_region_style(previous as u16, 0, self.row_len(previous), reverse_off());
        surface.set_region_style(
            self.selected as u16,
            0,
            self.row_len(self.selected),
            reverse_on(),
        );
    }

    /// Highlight width of a row: the rendered name's character count, which
    /// differs from its byte length for multibyte names.
    fn row_len(&self, row: usize) -> u16 {
        if row == 0 {
            PARENT.len() as u16
        } else {
            self.entries
                .get(row - 1)
                .map_or(0, |entry| entry.name.chars().count() as u16)
        }
    }
}

fn kind_style(theme: &Theme, kind: EntryKind) -> Style {
    match kind {
        EntryKind::Directory => theme.directory(),
        EntryKind::Special => theme.special(),
        EntryKind::File => theme.file(),
    }
}

use ratatui::backend::Backend;
use ratatui::layout::{Position, Rect, Size};
use thiserror::Error;

use crate::menu::command::PaneSpec;
use crate::menu::pane::{MenuItem, Pane};
use crate::screen::{Screen, SurfaceId};
use crate::ui::theme::Theme;

/// Left edge of the first pane and the gap between panes along the bar.
const FIRST_PANE_X: u16 = 2;
const PANE_TOP_Y: u16 = 1;
const PANE_GUTTER: u16 = 2;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("menu bar has no panes")]
    NoPanes,
    #[error("menu pane \"{header}\" has no items")]
    EmptyPane { header: String },
}

/// The circular arena of drop-down panes.
///
/// Previous/next are index arithmetic modulo the pane count, so traversal
/// wraps by construction and cannot dangle.
#[derive(Debug)]
pub struct MenuRing {
    panes: Vec<Pane>,
    border: SurfaceId,
}

impl MenuRing {
    /// Builds every pane from the static layout: writes the headers into the
    /// border surface, sizes each pane from its longest label, and
    /// pre-renders the rows in reverse video. Panes start hidden.
    pub fn build<B: Backend>(
        specs: &[PaneSpec],
        screen: &mut Screen<B>,
        border: SurfaceId,
        theme: &Theme,
    ) -> Result<Self, LayoutError> {
        if specs.is_empty() {
            return Err(LayoutError::NoPanes);
        }

        let mut panes = Vec::with_capacity(specs.len());
        let mut next_x = FIRST_PANE_X;

        for spec in specs {
            if spec.commands.is_empty() {
                return Err(LayoutError::EmptyPane {
                    header: spec.header.to_string(),
                });
            }

            let items: Vec<MenuItem> = spec
                .commands
                .iter()
                .enumerate()
                .map(|(index, &command)| MenuItem {
                    label: command.label().to_string(),
                    command,
                    index,
                })
                .collect();

            let longest_item = items
                .iter()
                .map(|item| item.label.len() as u16)
                .max()
                .unwrap_or(0);

            let origin = Position::new(next_x, PANE_TOP_Y);
            let size = Size::new(longest_item + 2, items.len() as u16 + 2);

            // Header sits on the border's top row, one cell in from the
            // pane's left edge.
            screen
                .surface_mut(border)
                .write_text(0, origin.x + 1, spec.header, theme.base());

            let surface =
                screen.create_surface(Rect::new(origin.x, origin.y, size.width, size.height));
            let pane_surface = screen.surface_mut(surface);
            pane_surface.fill(theme.menu());
            pane_surface.draw_border(theme.menu());
            for item in &items {
                pane_surface.write_text(Pane::item_row(item.index), 1, &item.label, theme.menu());
            }
            screen.hide(surface);

            next_x += size.width + PANE_GUTTER;

            panes.push(Pane {
                header: spec.header.to_string(),
                origin,
                size,
                items,
                active_item: 0,
                longest_item,
                surface,
            });
        }

        Ok(Self { panes, border })
    }

    #[allow(dead_code)] // Used by integration tests
    pub fn len(&self) -> usize {
        self.panes.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn pane(&self, index: usize) -> &Pane {
        &self.panes[index]
    }

    pub fn pane_mut(&mut self, index: usize) -> &mut Pane {
        &mut self.panes[index]
    }

    pub fn next(&self, index: usize) -> usize {
        (index + 1) % self.panes.len()
    }

    pub fn prev(&self, index: usize) -> usize {
        (index + self.panes.len() - 1) % self.panes.len()
    }

    /// The always-visible surface holding the border box and the headers.
    pub fn border(&self) -> SurfaceId {
        self.border
    }
}

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect, Size};

use crate::screen::surface::Surface;

/// Stable handle to a surface in the compositor's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceId(usize);

/// Owns the terminal and the surface arena.
///
/// Surfaces stack in creation order, later ones on top. Nothing reaches the
/// terminal until [`Screen::commit`], which blits every visible surface into
/// the frame in one draw call, so a burst of writes and visibility flips
/// lands as a single frame.
pub struct Screen<B: Backend> {
    terminal: Terminal<B>,
    surfaces: Vec<Surface>,
    cursor: Option<Position>,
}

impl<B: Backend> Screen<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            surfaces: Vec::new(),
            cursor: Some(Position::new(0, 0)),
        }
    }

    pub fn size(&self) -> Result<Size>
    where
        B::Error: Send + Sync + 'static,
    {
        Ok(self.terminal.size()?)
    }

    pub fn create_surface(&mut self, area: Rect) -> SurfaceId {
        self.surfaces.push(Surface::new(area));
        SurfaceId(self.surfaces.len() - 1)
    }

    #[allow(dead_code)] // Used by unit and integration tests
    pub fn surface(&self, id: SurfaceId) -> &Surface {
        &self.surfaces[id.0]
    }

    pub fn surface_mut(&mut self, id: SurfaceId) -> &mut Surface {
        &mut self.surfaces[id.0]
    }

    pub fn show(&mut self, id: SurfaceId) {
        self.surfaces[id.0].set_hidden(false);
    }

    pub fn hide(&mut self, id: SurfaceId) {
        self.surfaces[id.0].set_hidden(true);
    }

    pub fn is_hidden(&self, id: SurfaceId) -> bool {
        self.surfaces[id.0].is_hidden()
    }

    /// `None` hides the terminal cursor.
    pub fn set_cursor(&mut self, cursor: Option<Position>) {
        self.cursor = cursor;
    }

    #[allow(dead_code)]
    pub fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    /// Flushes all pending surface state to the terminal as one frame.
    pub fn commit(&mut self) -> Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        let Self {
            terminal,
            surfaces,
            cursor,
        } = self;
        terminal.draw(|frame| {
            let buf = frame.buffer_mut();
            for surface in surfaces.iter().filter(|s| !s.is_hidden()) {
                blit(surface, buf);
            }
            if let Some(position) = *cursor {
                frame.set_cursor_position(position);
            }
        })?;
        Ok(())
    }

    #[allow(dead_code)] // Used by integration tests
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

/// Copies a surface's cells into the frame, clipped to the frame area.
fn blit(surface: &Surface, dest: &mut Buffer) {
    let src = surface.buffer();
    let area = surface.area().intersection(dest.area);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let pos = Position::new(x, y);
            if let (Some(from), Some(to)) = (src.cell(pos), dest.cell_mut(pos)) {
                *to = from.clone();
            }
        }
    }
}

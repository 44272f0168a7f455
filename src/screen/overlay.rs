use ratatui::backend::Backend;

use crate::screen::{Screen, SurfaceId};

/// Full-screen views sharing the interior region under the border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    /// The editor body.
    Base,
    /// The file-open dialog.
    Open,
    /// The save prompt.
    Save,
}

const ALL: [Overlay; 3] = [Overlay::Base, Overlay::Open, Overlay::Save];

/// Keeps exactly one overlay visible at a time. Base is visible after
/// initialization.
pub struct OverlayScreens {
    base: SurfaceId,
    open: SurfaceId,
    save: SurfaceId,
    current: Overlay,
}

impl OverlayScreens {
    pub fn new(base: SurfaceId, open: SurfaceId, save: SurfaceId) -> Self {
        Self {
            base,
            open,
            save,
            current: Overlay::Base,
        }
    }

    #[allow(dead_code)] // Used by integration tests
    pub fn current(&self) -> Overlay {
        self.current
    }

    pub fn surface(&self, overlay: Overlay) -> SurfaceId {
        match overlay {
            Overlay::Base => self.base,
            Overlay::Open => self.open,
            Overlay::Save => self.save,
        }
    }

    /// Hides every overlay except `target` and shows `target`.
    pub fn switch_to<B: Backend>(&mut self, screen: &mut Screen<B>, target: Overlay) {
        for overlay in ALL {
            let id = self.surface(overlay);
            if overlay == target {
                screen.show(id);
            } else if !screen.is_hidden(id) {
                screen.hide(id);
            }
        }
        self.current = target;
    }
}

//! Menu transitions.
//!
//! Every function here mutates retained surfaces and the session only; the
//! caller owns the commit that turns a transition into a frame, so each
//! transition lands as exactly one frame.

use ratatui::backend::Backend;

use crate::menu::command::Command;
use crate::menu::pane::Pane;
use crate::menu::ring::MenuRing;
use crate::screen::Screen;
use crate::session::{Mode, Session};
use crate::ui::theme::{reverse_off, reverse_on};

/// Opens the menu from the current mode, or closes it when it is already
/// open. Opening hides the cursor and focuses the first pane; closing
/// restores the cursor only when control returns to editing (the open dialog
/// keeps it hidden).
pub fn toggle<B: Backend>(session: &mut Session, ring: &mut MenuRing, screen: &mut Screen<B>) {
    if session.mode() == Mode::Menu {
        close_active(session, ring, screen);
        session.pop_mode();
        if session.mode() == Mode::Edit {
            screen.set_cursor(Some(session.cursor));
        }
    } else {
        screen.set_cursor(None);
        session.push_mode(Mode::Menu);
        open_pane(session, ring, screen, 0);
    }
}

/// Moves focus to the previous pane in the ring.
pub fn pane_left<B: Backend>(session: &mut Session, ring: &mut MenuRing, screen: &mut Screen<B>) {
    let Some(active) = session.active_pane else {
        return;
    };
    close_active(session, ring, screen);
    open_pane(session, ring, screen, ring.prev(active));
}

/// Moves focus to the next pane in the ring.
pub fn pane_right<B: Backend>(session: &mut Session, ring: &mut MenuRing, screen: &mut Screen<B>) {
    let Some(active) = session.active_pane else {
        return;
    };
    close_active(session, ring, screen);
    open_pane(session, ring, screen, ring.next(active));
}

/// Moves the selection one row up; no-op on the first item.
pub fn item_up<B: Backend>(session: &Session, ring: &mut MenuRing, screen: &mut Screen<B>) {
    let Some(index) = session.active_pane else {
        return;
    };
    if screen.is_hidden(ring.pane(index).surface) {
        return;
    }
    let pane = ring.pane_mut(index);
    if pane.active_item == 0 {
        return;
    }
    pane.active_item -= 1;
    let previous = pane.active_item + 1;
    repaint_selection(screen, ring.pane(index), previous);
}

/// Moves the selection one row down; no-op on the last item.
pub fn item_down<B: Backend>(session: &Session, ring: &mut MenuRing, screen: &mut Screen<B>) {
    let Some(index) = session.active_pane else {
        return;
    };
    if screen.is_hidden(ring.pane(index).surface) {
        return;
    }
    let pane = ring.pane_mut(index);
    if pane.active_item == pane.last_item() {
        return;
    }
    pane.active_item += 1;
    let previous = pane.active_item - 1;
    repaint_selection(screen, ring.pane(index), previous);
}

/// Closes the menu, then reports the command that was selected at confirm
/// time. The menu is fully closed before the caller dispatches, so handlers
/// never observe menu mode.
pub fn confirm<B: Backend>(
    session: &mut Session,
    ring: &mut MenuRing,
    screen: &mut Screen<B>,
) -> Option<Command> {
    if session.mode() != Mode::Menu {
        return None;
    }
    let command = session
        .active_pane
        .map(|index| ring.pane(index).selected_command());
    toggle(session, ring, screen);
    command
}

/// Shows a pane and applies the header and selected-row highlight at the
/// pane's current `active_item`.
fn open_pane<B: Backend>(
    session: &mut Session,
    ring: &MenuRing,
    screen: &mut Screen<B>,
    index: usize,
) {
    session.active_pane = Some(index);
    let pane = ring.pane(index);
    screen.show(pane.surface);
    screen.surface_mut(ring.border()).set_region_style(
        0,
        pane.origin.x + 1,
        pane.header.len() as u16,
        reverse_on(),
    );
    screen.surface_mut(pane.surface).set_region_style(
        Pane::item_row(pane.active_item),
        1,
        pane.longest_item,
        reverse_off(),
    );
}

/// Reverses both highlight deltas, resets the selection, and hides the pane.
fn close_active<B: Backend>(session: &mut Session, ring: &mut MenuRing, screen: &mut Screen<B>) {
    let Some(index) = session.active_pane else {
        return;
    };
    let border = ring.border();
    let pane = ring.pane_mut(index);
    screen.surface_mut(pane.surface).set_region_style(
        Pane::item_row(pane.active_item),
        1,
        pane.longest_item,
        reverse_on(),
    );
    screen.surface_mut(border).set_region_style(
        0,
        pane.origin.x + 1,
        pane.header.len() as u16,
        reverse_off(),
    );
    pane.active_item = 0;
    screen.hide(pane.surface);
    session.active_pane = None;
}

/// Un-highlights `previous` and highlights the pane's current selection.
fn repaint_selection<B: Backend>(screen: &mut Screen<B>, pane: &Pane, previous: usize) {
    let surface = screen.surface_mut(pane.surface);
    surface.set_region_style(Pane::item_row(previous), 1, pane.longest_item, reverse_on());
    surface.set_region_style(
        Pane::item_row(pane.active_item),
        1,
        pane.longest_item,
        reverse_off(),
    );
}

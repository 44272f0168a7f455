use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Position, Rect};

use crate::actions::{EditorActions, NullActions};
use crate::config::Config;
use crate::dialog::OpenDialog;
use crate::event::KeySource;
use crate::menu::nav;
use crate::menu::{Command, MENU_LAYOUT, MenuRing};
use crate::screen::{Overlay, OverlayScreens, Screen};
use crate::session::{Mode, Session};
use crate::ui::theme::Theme;

/// The assembled editor shell: compositor, menu ring, overlays, open dialog,
/// session state, and the editing-core callbacks.
pub struct Editor<B: Backend> {
    pub screen: Screen<B>,
    pub ring: MenuRing,
    pub overlays: OverlayScreens,
    pub dialog: OpenDialog,
    pub session: Session,
    pub theme: Theme,
    actions: Box<dyn EditorActions>,
}

impl<B: Backend> Editor<B>
where
    B::Error: Send + Sync + 'static,
{
    pub fn new(terminal: Terminal<B>, config: &Config) -> Result<Self> {
        Self::with_actions(terminal, config, Box::new(NullActions))
    }

    /// Builds every surface up front and commits the first frame: border box
    /// with headers, hidden drop-down panes, Base overlay visible, cursor at
    /// the interior origin.
    pub fn with_actions(
        terminal: Terminal<B>,
        config: &Config,
        actions: Box<dyn EditorActions>,
    ) -> Result<Self> {
        let theme = if config.colors {
            Theme::load(&config.theme).unwrap_or_default()
        } else {
            Theme::monochrome()
        };

        let mut screen = Screen::new(terminal);
        let size = screen.size()?;

        let border = screen.create_surface(Rect::new(0, 0, size.width, size.height));
        let border_surface = screen.surface_mut(border);
        border_surface.fill(theme.base());
        border_surface.draw_border(theme.base());

        // Overlays share the interior; Base starts visible.
        let interior = Rect::new(
            1,
            1,
            size.width.saturating_sub(2),
            size.height.saturating_sub(2),
        );
        let base = screen.create_surface(interior);
        let open = screen.create_surface(interior);
        let save = screen.create_surface(interior);
        for id in [base, open, save] {
            screen.surface_mut(id).fill(theme.base());
        }
        screen.hide(open);
        screen.hide(save);

        // Drop-down panes stack above the overlays.
        let ring = MenuRing::build(MENU_LAYOUT, &mut screen, border, &theme)?;
        let overlays = OverlayScreens::new(base, open, save);
        let dialog = OpenDialog::new(open);

        let mut session = Session::new(config.resolve_start_dir());
        session.cursor = Position::new(interior.x, interior.y);
        screen.set_cursor(Some(session.cursor));

        let mut editor = Self {
            screen,
            ring,
            overlays,
            dialog,
            session,
            theme,
            actions,
        };
        editor.screen.commit()?;
        Ok(editor)
    }

    /// Outer input loop: one blocking read, one transition, one commit per
    /// pass. Returns after a quit sets `running` false.
    pub fn run(&mut self, keys: &mut dyn KeySource) -> Result<()> {
        self.session.running = true;
        while self.session.running {
            let key = keys.next_key()?;
            self.handle_key(key);
            self.screen.commit()?;
        }
        Ok(())
    }

    /// Routes a key through the current top-of-stack mode.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C quits from any mode.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.session.running = false;
            return;
        }

        match self.session.mode() {
            Mode::Edit => self.handle_edit_key(key),
            Mode::Menu => self.handle_menu_key(key),
            Mode::OpenDialog => self.handle_dialog_key(key),
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => nav::toggle(&mut self.session, &mut self.ring, &mut self.screen),
            // Everything else belongs to the editing core.
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => nav::toggle(&mut self.session, &mut self.ring, &mut self.screen),
            KeyCode::Left => nav::pane_left(&mut self.session, &mut self.ring, &mut self.screen),
            KeyCode::Right => nav::pane_right(&mut self.session, &mut self.ring, &mut self.screen),
            KeyCode::Up => nav::item_up(&self.session, &mut self.ring, &mut self.screen),
            KeyCode::Down => nav::item_down(&self.session, &mut self.ring, &mut self.screen),
            KeyCode::Enter => {
                if let Some(command) =
                    nav::confirm(&mut self.session, &mut self.ring, &mut self.screen)
                {
                    self.dispatch(command);
                }
            }
            _ => {}
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.dismiss_dialog(),
            // Tab stacks the menu on top of the open dialog.
            KeyCode::Tab => nav::toggle(&mut self.session, &mut self.ring, &mut self.screen),
            KeyCode::Up => self.dialog.move_up(&mut self.screen),
            KeyCode::Down => self.dialog.move_down(&mut self.screen),
            // Confirming an entry is not wired up; the dialog is
            // navigation-only.
            KeyCode::Enter => {}
            _ => {}
        }
    }

    /// Exhaustive over every menu command; a new variant will not compile
    /// until it is handled here.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Open => self.open(),
            Command::Save => {
                let name = self.session.file_name.clone();
                self.save(name.as_deref());
            }
            Command::SaveAs => self.save(None),
            Command::Quit => self.session.running = false,
            Command::Copy => self.actions.copy(),
            Command::Paste => self.actions.paste(),
            Command::Find => self.actions.find(),
            Command::Replace => self.actions.replace(),
            Command::Undo => self.actions.undo(),
            Command::Redo => self.actions.redo(),
            Command::About => self.actions.about(),
            Command::Website => self.actions.website(),
        }
    }

    /// Switches to the Open overlay, hides the cursor, and lists the working
    /// directory. Selecting Open while the dialog is already up refreshes
    /// the listing in place instead of stacking another dialog mode.
    fn open(&mut self) {
        self.overlays.switch_to(&mut self.screen, Overlay::Open);
        self.screen.set_cursor(None);
        self.dialog
            .populate(&mut self.screen, &self.theme, &self.session.work_dir);
        if self.session.mode() != Mode::OpenDialog {
            self.session.push_mode(Mode::OpenDialog);
        }
    }

    fn dismiss_dialog(&mut self) {
        self.session.pop_mode();
        self.overlays.switch_to(&mut self.screen, Overlay::Base);
        self.screen.set_cursor(Some(self.session.cursor));
    }

    /// Shows the Save overlay, then hands off to the editing core. The
    /// overlay stays up; whatever prompt belongs there is the core's to
    /// draw.
    fn save(&mut self, name: Option<&str>) {
        self.overlays.switch_to(&mut self.screen, Overlay::Save);
        self.actions.save(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn editor() -> Editor<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let config = Config {
            start_dir: Some(std::env::temp_dir().to_string_lossy().to_string()),
            ..Config::default()
        };
        Editor::new(terminal, &config).unwrap()
    }

    #[test]
    fn starts_in_edit_mode_with_base_overlay_and_cursor() {
        let editor = editor();
        assert_eq!(editor.session.mode(), Mode::Edit);
        assert_eq!(editor.overlays.current(), Overlay::Base);
        assert_eq!(editor.screen.cursor(), Some(Position::new(1, 1)));
        for index in 0..editor.ring.len() {
            assert!(editor.screen.is_hidden(editor.ring.pane(index).surface));
        }
    }

    #[test]
    fn edit_mode_ignores_non_toggle_keys() {
        let mut editor = editor();
        editor.handle_key(key(KeyCode::Enter));
        editor.handle_key(key(KeyCode::Left));
        editor.handle_key(key(KeyCode::Char('x')));
        assert_eq!(editor.session.mode(), Mode::Edit);
        assert_eq!(editor.session.active_pane, None);
    }

    #[test]
    fn ctrl_c_quits_immediately() {
        let mut editor = editor();
        editor.session.running = true;
        editor.handle_key(key(KeyCode::Tab));
        editor.handle_key(ctrl('c'));
        assert!(!editor.session.running);
    }

    #[test]
    fn save_switches_overlay_and_stays_in_edit_mode() {
        let mut editor = editor();
        editor.dispatch(Command::Save);
        assert_eq!(editor.overlays.current(), Overlay::Save);
        assert_eq!(editor.session.mode(), Mode::Edit);
    }

    #[test]
    fn open_dispatch_enters_the_dialog_mode_once() {
        let mut editor = editor();
        editor.dispatch(Command::Open);
        assert_eq!(editor.overlays.current(), Overlay::Open);
        assert_eq!(editor.session.mode(), Mode::OpenDialog);
        assert!(editor.screen.cursor().is_none());

        // Re-dispatch refreshes without stacking a second dialog mode.
        editor.dispatch(Command::Open);
        editor.handle_key(key(KeyCode::Esc));
        assert_eq!(editor.session.mode(), Mode::Edit);
        assert_eq!(editor.overlays.current(), Overlay::Base);
    }
}

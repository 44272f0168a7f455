use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Position;
use ratatui::style::Modifier;

use ted::actions::{ActionCall, RecordingActions};
use ted::app::Editor;
use ted::config::Config;
use ted::event::ScriptedKeys;
use ted::menu::Command;
use ted::screen::Overlay;
use ted::session::Mode;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn test_config() -> Config {
    Config {
        start_dir: Some(std::env::temp_dir().to_string_lossy().into_owned()),
        ..Config::default()
    }
}

fn editor() -> Editor<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    Editor::new(terminal, &test_config()).unwrap()
}

/// Editor wired to a recording stub so dispatch targets can be asserted.
fn recording_editor() -> (Editor<TestBackend>, RecordingActions) {
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let recorder = RecordingActions::default();
    let editor =
        Editor::with_actions(terminal, &test_config(), Box::new(recorder.clone())).unwrap();
    (editor, recorder)
}

fn frame_text(editor: &Editor<TestBackend>, x: u16, y: u16, len: u16) -> String {
    let buffer = editor.screen.backend().buffer();
    (x..x + len)
        .map(|col| buffer.cell(Position::new(col, y)).unwrap().symbol())
        .collect()
}

// ── Initial frame ────────────────────────────────────────────────────────

#[test]
fn initial_frame_shows_the_border_and_menu_headers() {
    let editor = editor();
    assert_eq!(frame_text(&editor, 0, 0, 1), "┌");
    assert_eq!(frame_text(&editor, 3, 0, 4), "File");
    assert_eq!(frame_text(&editor, 17, 0, 4), "Edit");
    assert_eq!(frame_text(&editor, 28, 0, 4), "Help");
}

// ── Menu state machine ───────────────────────────────────────────────────

#[test]
fn tab_toggles_the_menu_open_and_closed() {
    let mut editor = editor();

    editor.handle_key(key(KeyCode::Tab));
    assert_eq!(editor.session.mode(), Mode::Menu);
    assert_eq!(editor.session.active_pane, Some(0));
    assert!(editor.screen.cursor().is_none());
    assert!(!editor.screen.is_hidden(editor.ring.pane(0).surface));

    editor.handle_key(key(KeyCode::Tab));
    assert_eq!(editor.session.mode(), Mode::Edit);
    assert_eq!(editor.session.active_pane, None);
    assert_eq!(editor.screen.cursor(), Some(Position::new(1, 1)));
    assert!(editor.screen.is_hidden(editor.ring.pane(0).surface));
}

#[test]
fn opening_highlights_the_header_and_first_item() {
    let mut editor = editor();
    let header_col = editor.ring.pane(0).origin.x + 1;
    let pane_id = editor.ring.pane(0).surface;
    let border_id = editor.ring.border();

    editor.handle_key(key(KeyCode::Tab));
    let header = editor.screen.surface(border_id).style_at(0, header_col).unwrap();
    assert!(header.add_modifier.contains(Modifier::REVERSED));
    let pane = editor.screen.surface(pane_id);
    assert!(!pane.style_at(1, 1).unwrap().add_modifier.contains(Modifier::REVERSED));
    assert!(pane.style_at(2, 1).unwrap().add_modifier.contains(Modifier::REVERSED));

    editor.handle_key(key(KeyCode::Tab));
    let header = editor.screen.surface(border_id).style_at(0, header_col).unwrap();
    assert!(!header.add_modifier.contains(Modifier::REVERSED));
}

#[test]
fn arrows_traverse_the_pane_ring_with_wraparound() {
    let mut editor = editor();
    editor.handle_key(key(KeyCode::Tab));

    for expected in [1, 2, 0, 1] {
        editor.handle_key(key(KeyCode::Right));
        assert_eq!(editor.session.active_pane, Some(expected));
    }

    editor.handle_key(key(KeyCode::Left));
    assert_eq!(editor.session.active_pane, Some(0));
    editor.handle_key(key(KeyCode::Left));
    assert_eq!(editor.session.active_pane, Some(editor.ring.len() - 1));

    let visible: Vec<usize> = (0..editor.ring.len())
        .filter(|&index| !editor.screen.is_hidden(editor.ring.pane(index).surface))
        .collect();
    assert_eq!(visible, vec![editor.ring.len() - 1]);
}

#[test]
fn selection_clamps_and_resets_when_the_pane_closes() {
    let mut editor = editor();
    editor.handle_key(key(KeyCode::Tab));

    editor.handle_key(key(KeyCode::Up));
    assert_eq!(editor.ring.pane(0).active_item, 0);

    for _ in 0..8 {
        editor.handle_key(key(KeyCode::Down));
    }
    assert_eq!(editor.ring.pane(0).active_item, editor.ring.pane(0).last_item());

    editor.handle_key(key(KeyCode::Tab));
    editor.handle_key(key(KeyCode::Tab));
    assert_eq!(editor.ring.pane(0).active_item, 0);
}

// ── Dispatch ─────────────────────────────────────────────────────────────

#[test]
fn every_menu_command_dispatches_to_exactly_one_handler() {
    for command in Command::ALL {
        let (mut editor, recorder) = recording_editor();
        editor.session.running = true;
        editor.dispatch(command);

        let calls = recorder.calls();
        let expected = match command {
            Command::Open | Command::Quit => None,
            Command::Save | Command::SaveAs => Some(ActionCall::Save(None)),
            Command::Copy => Some(ActionCall::Copy),
            Command::Paste => Some(ActionCall::Paste),
            Command::Find => Some(ActionCall::Find),
            Command::Replace => Some(ActionCall::Replace),
            Command::Undo => Some(ActionCall::Undo),
            Command::Redo => Some(ActionCall::Redo),
            Command::About => Some(ActionCall::About),
            Command::Website => Some(ActionCall::Website),
        };
        match expected {
            Some(call) => assert_eq!(calls, vec![call], "{command:?}"),
            None => assert!(calls.is_empty(), "{command:?} is handled inside the shell"),
        }

        match command {
            Command::Open => {
                assert_eq!(editor.overlays.current(), Overlay::Open);
                assert_eq!(editor.session.mode(), Mode::OpenDialog);
            }
            Command::Quit => assert!(!editor.session.running),
            Command::Save | Command::SaveAs => {
                assert_eq!(editor.overlays.current(), Overlay::Save);
            }
            _ => assert_eq!(editor.overlays.current(), Overlay::Base, "{command:?}"),
        }
    }
}

#[test]
fn save_passes_the_session_file_name_through() {
    let (mut editor, recorder) = recording_editor();
    editor.session.file_name = Some("notes.txt".to_string());

    editor.dispatch(Command::Save);
    assert_eq!(
        recorder.calls(),
        vec![ActionCall::Save(Some("notes.txt".to_string()))]
    );

    editor.dispatch(Command::SaveAs);
    assert_eq!(recorder.calls().last(), Some(&ActionCall::Save(None)));
}

#[test]
fn enter_runs_the_selected_command_with_the_menu_closed() {
    let (mut editor, recorder) = recording_editor();
    editor.handle_key(key(KeyCode::Tab));
    editor.handle_key(key(KeyCode::Right));
    editor.handle_key(key(KeyCode::Enter));

    assert_eq!(recorder.calls(), vec![ActionCall::Copy]);
    assert_eq!(editor.session.mode(), Mode::Edit);
    assert_eq!(editor.session.active_pane, None);
    for index in 0..editor.ring.len() {
        assert!(editor.screen.is_hidden(editor.ring.pane(index).surface));
    }
}

#[test]
fn enter_on_open_lands_in_dialog_mode_not_menu_mode() {
    let mut editor = editor();
    editor.handle_key(key(KeyCode::Tab));
    editor.handle_key(key(KeyCode::Enter));

    assert_eq!(editor.session.mode(), Mode::OpenDialog);
    assert_eq!(editor.overlays.current(), Overlay::Open);
    assert!(editor.screen.cursor().is_none());
    assert!(editor.screen.is_hidden(editor.ring.pane(0).surface));

    // A single Esc returns to editing, so menu mode really was popped
    // before the dialog mode was pushed.
    editor.handle_key(key(KeyCode::Esc));
    assert_eq!(editor.session.mode(), Mode::Edit);
}

// ── Run loop ─────────────────────────────────────────────────────────────

#[test]
fn run_loop_quits_via_the_menu() {
    let mut editor = editor();
    let mut keys = ScriptedKeys::new(vec![
        key(KeyCode::Tab),
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Enter),
    ]);

    editor.run(&mut keys).unwrap();
    assert!(!editor.session.running);
    assert_eq!(editor.session.mode(), Mode::Edit);
    assert_eq!(editor.overlays.current(), Overlay::Base);
}

#[test]
fn ctrl_c_quits_from_every_mode() {
    let mut in_edit = editor();
    let mut keys = ScriptedKeys::new(vec![ctrl('c')]);
    in_edit.run(&mut keys).unwrap();
    assert!(!in_edit.session.running);

    let mut in_menu = editor();
    let mut keys = ScriptedKeys::new(vec![key(KeyCode::Tab), ctrl('c')]);
    in_menu.run(&mut keys).unwrap();
    assert!(!in_menu.session.running);

    let mut in_dialog = editor();
    let mut keys = ScriptedKeys::new(vec![key(KeyCode::Tab), key(KeyCode::Enter), ctrl('c')]);
    in_dialog.run(&mut keys).unwrap();
    assert!(!in_dialog.session.running);
    assert_eq!(in_dialog.session.mode(), Mode::OpenDialog);
}

// ── Menu over the open dialog ────────────────────────────────────────────

#[test]
fn tab_stacks_the_menu_over_the_open_dialog() {
    let mut editor = editor();
    editor.handle_key(key(KeyCode::Tab));
    editor.handle_key(key(KeyCode::Enter));
    assert_eq!(editor.session.mode(), Mode::OpenDialog);

    editor.handle_key(key(KeyCode::Tab));
    assert_eq!(editor.session.mode(), Mode::Menu);
    assert!(editor.session.in_dialog());
    assert_eq!(editor.overlays.current(), Overlay::Open);

    // Closing the menu drops back to the dialog, cursor still hidden.
    editor.handle_key(key(KeyCode::Tab));
    assert_eq!(editor.session.mode(), Mode::OpenDialog);
    assert!(editor.screen.cursor().is_none());

    editor.handle_key(key(KeyCode::Esc));
    assert_eq!(editor.session.mode(), Mode::Edit);
    assert_eq!(editor.overlays.current(), Overlay::Base);
    assert_eq!(editor.screen.cursor(), Some(Position::new(1, 1)));
}

#[test]
fn reselecting_open_refreshes_in_place_without_stacking() {
    let mut editor = editor();
    editor.handle_key(key(KeyCode::Tab));
    editor.handle_key(key(KeyCode::Enter));
    editor.handle_key(key(KeyCode::Tab));
    editor.handle_key(key(KeyCode::Enter));
    assert_eq!(editor.session.mode(), Mode::OpenDialog);

    // One Esc suffices: Open did not push a second dialog mode.
    editor.handle_key(key(KeyCode::Esc));
    assert_eq!(editor.session.mode(), Mode::Edit);
    assert_eq!(editor.overlays.current(), Overlay::Base);
}

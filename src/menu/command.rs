/// Action a menu item triggers when confirmed.
///
/// Dispatch matches exhaustively on this, so a new variant will not compile
/// until every match arm exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Open,
    Save,
    SaveAs,
    Quit,
    Copy,
    Paste,
    Find,
    Replace,
    Undo,
    Redo,
    About,
    Website,
}

impl Command {
    #[allow(dead_code)] // Used by integration tests
    pub const ALL: [Command; 12] = [
        Command::Open,
        Command::Save,
        Command::SaveAs,
        Command::Quit,
        Command::Copy,
        Command::Paste,
        Command::Find,
        Command::Replace,
        Command::Undo,
        Command::Redo,
        Command::About,
        Command::Website,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Command::Open => "Open",
            Command::Save => "Save",
            Command::SaveAs => "Save As...",
            Command::Quit => "Quit",
            Command::Copy => "Copy",
            Command::Paste => "Paste",
            Command::Find => "Find",
            Command::Replace => "Replace",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::About => "About",
            Command::Website => "Website",
        }
    }
}

/// Static description of one drop-down pane.
pub struct PaneSpec {
    pub header: &'static str,
    pub commands: &'static [Command],
}

/// The menu bar layout; header order is ring order.
pub const MENU_LAYOUT: &[PaneSpec] = &[
    PaneSpec {
        header: "File",
        commands: &[Command::Open, Command::Save, Command::SaveAs, Command::Quit],
    },
    PaneSpec {
        header: "Edit",
        commands: &[
            Command::Copy,
            Command::Paste,
            Command::Find,
            Command::Replace,
            Command::Undo,
            Command::Redo,
        ],
    },
    PaneSpec {
        header: "Help",
        commands: &[Command::About, Command::Website],
    },
];

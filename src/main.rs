mod actions;
mod app;
mod config;
mod dialog;
mod event;
mod menu;
mod screen;
mod session;
mod ui;

use std::io;

use anyhow::Result;
use clap::Parser;
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use app::Editor;
use config::Config;
use event::TerminalKeys;

#[derive(Parser)]
#[command(name = "ted", version, about = "Terminal text editor with drop-down menus")]
struct Cli {
    #[arg(help = "File to open")]
    file: Option<String>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Directory listed by the Open dialog")]
    dir: Option<String>,

    #[arg(long, help = "Disable colors")]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(dir) = cli.dir {
        config.start_dir = Some(dir);
    }
    if cli.no_color {
        config.colors = false;
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let result = run_editor(terminal, &config, cli.file);

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_editor(
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
    file: Option<String>,
) -> Result<()> {
    let mut editor = Editor::new(terminal, config)?;
    editor.session.file_name = file;

    let mut keys = TerminalKeys;
    editor.run(&mut keys)
}

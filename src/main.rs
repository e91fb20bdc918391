use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use driveinsight::browser::{Browser, NavEvent};
use driveinsight::builder::build_tree;
use driveinsight::lister::{ItemRef, SnapshotLister};
use driveinsight::render::{content_rows, render_view};
use driveinsight::tree::UsageTree;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};
use std::io::{self, stdout, Stdout};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "driveinsight",
    about = "Browse storage usage of a remote listing snapshot in the terminal"
)]
struct Args {
    /// Path to a listing snapshot (JSON) mapping folder refs to entries
    snapshot: PathBuf,

    /// Folder reference to build the tree from
    #[arg(long, default_value = "root")]
    root: String,

    /// Display label for the root folder
    #[arg(long, default_value = "root")]
    root_name: String,
}

/// Scoped terminal resource: raw mode and the alternate screen are acquired
/// on construction and restored on drop, on every exit path.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        crossterm::execute!(stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = crossterm::execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn map_key(key: KeyEvent) -> NavEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        return NavEvent::Quit;
    }
    match key.code {
        KeyCode::Up => NavEvent::MoveUp,
        KeyCode::Down => NavEvent::MoveDown,
        KeyCode::Enter => NavEvent::Select,
        KeyCode::Char('q') | KeyCode::Esc => NavEvent::Quit,
        _ => NavEvent::Other,
    }
}

fn draw_ui(frame: &mut Frame, tree: &UsageTree, browser: &Browser) {
    let area = frame.area();
    let view = render_view(tree, browser, area.width as usize, area.height as usize);

    let split = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

    let lines: Vec<Line> = view
        .rows
        .iter()
        .enumerate()
        .map(|(row, text)| {
            let style = if row == browser.cursor() {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Cyan)
            };
            Line::styled(text.clone(), style)
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), split[0]);

    let status = Paragraph::new(view.status).style(Style::default().bg(Color::White).fg(Color::Black));
    frame.render_widget(status, split[1]);
}

fn run_browser(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    tree: &UsageTree,
) -> io::Result<()> {
    let mut browser = Browser::new(tree);

    loop {
        let mut viewport = 0usize;
        terminal.draw(|frame| {
            viewport = content_rows(frame.area().height as usize);
            draw_ui(frame, tree, &browser);
        })?;

        // block for exactly one input event, apply at most one transition
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if !browser.apply(tree, map_key(key), viewport) {
                    break;
                }
            }
            Event::Resize(_, _) => {}
            _ => {}
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let lister = SnapshotLister::from_path(&args.snapshot)
        .with_context(|| format!("loading snapshot {}", args.snapshot.display()))?;

    // Build the whole tree before touching the terminal, so a build failure
    // never leaves the terminal in raw mode.
    let tree = build_tree(&lister, &ItemRef(args.root), &args.root_name)
        .context("building usage tree from listing")?;
    info!(total = tree.total_size(), "usage tree built");

    let mut session = TerminalSession::new()?;
    run_browser(&mut session.terminal, &tree)?;

    Ok(())
}

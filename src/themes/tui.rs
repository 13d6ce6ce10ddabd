//! Interactive theme browser.
//!
//! A deliberately thin picker: it lists the theme directories found by
//! [`discovery`](crate::themes::discovery) and shells out to the external
//! `cosmikase-theme` CLI to apply the selection. All theme mechanics
//! (symlinks, GTK settings, wallpaper) live in that CLI; this screen only
//! chooses a name and reports the outcome.

use std::path::{Path, PathBuf};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::{DefaultTerminal, Frame};

use crate::error::ThemeError;
use crate::exec;
use crate::themes::discovery::{self, THEME_CLI_NAME, THEMES_DIR_ENV};
use crate::themes::manifest::{self, ThemeManifest};

const PROMPT_STATUS: &str = "Select a theme and press Enter to apply.";
const REFRESHED_STATUS: &str = "Theme list refreshed.";
const EMPTY_STATUS: &str = "No themes available. Run 'make install' to populate themes.";

/// Browser state: discovered directories, the visible listing, the
/// selected theme's manifest, and the one-line status message.
#[derive(Debug)]
pub struct App {
    theme_dirs: Vec<PathBuf>,
    names: Vec<String>,
    list_state: ListState,
    manifest: ThemeManifest,
    status: String,
}

impl App {
    /// Discover theme directories and load the initial listing.
    ///
    /// # Errors
    ///
    /// Returns an error when the active theme directory cannot be
    /// scanned.
    pub fn new() -> Result<Self, ThemeError> {
        let mut app = Self {
            theme_dirs: discovery::discover_theme_dirs(),
            names: Vec::new(),
            list_state: ListState::default(),
            manifest: ThemeManifest::default(),
            status: PROMPT_STATUS.to_owned(),
        };
        app.reload_names()?;
        Ok(app)
    }

    /// Highest-priority discovered theme directory, if any.
    #[must_use]
    pub fn active_dir(&self) -> Option<&Path> {
        self.theme_dirs.first().map(PathBuf::as_path)
    }

    /// Re-run directory discovery and reload the listing.
    ///
    /// # Errors
    ///
    /// Returns an error when the active theme directory cannot be
    /// scanned.
    pub fn refresh(&mut self) -> Result<(), ThemeError> {
        self.theme_dirs = discovery::discover_theme_dirs();
        self.status = REFRESHED_STATUS.to_owned();
        self.reload_names()
    }

    /// Move the selection up one entry, stopping at the top.
    pub fn select_previous(&mut self) {
        if self.names.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(current.saturating_sub(1)));
        self.refresh_manifest();
    }

    /// Move the selection down one entry, stopping at the bottom.
    pub fn select_next(&mut self) {
        if self.names.is_empty() {
            return;
        }
        let last = self.names.len().saturating_sub(1);
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(current.saturating_add(1).min(last)));
        self.refresh_manifest();
    }

    /// Name of the currently highlighted theme.
    #[must_use]
    pub fn selected_name(&self) -> Option<&str> {
        self.list_state
            .selected()
            .and_then(|index| self.names.get(index))
            .map(String::as_str)
    }

    /// One-line description of the selected theme's manifest.
    #[must_use]
    pub fn manifest_summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(variant) = &self.manifest.variant {
            parts.push(format!("variant: {variant}"));
        }
        if let Some(cursor) = &self.manifest.cursor_theme {
            parts.push(format!("cursor: {cursor}"));
        }
        if let Some(wallpaper) = &self.manifest.wallpaper {
            parts.push(format!("wallpaper: {wallpaper}"));
        }
        if parts.is_empty() {
            "No manifest details.".to_owned()
        } else {
            parts.join(" | ")
        }
    }

    fn reload_names(&mut self) -> Result<(), ThemeError> {
        self.names = discovery::list_theme_names(self.active_dir())?;
        if self.names.is_empty() {
            self.list_state.select(None);
            self.status = EMPTY_STATUS.to_owned();
        } else {
            self.list_state.select(Some(0));
        }
        self.refresh_manifest();
        Ok(())
    }

    /// Reload the manifest for the highlighted theme. Manifest problems
    /// degrade to an empty manifest, they never interrupt browsing.
    fn refresh_manifest(&mut self) {
        let loaded = match (self.active_dir(), self.selected_name()) {
            (Some(dir), Some(name)) => {
                manifest::load_manifest(&dir.join(name)).unwrap_or_default()
            }
            _ => ThemeManifest::default(),
        };
        self.manifest = loaded;
    }
}

/// Run the theme browser until the user quits.
///
/// # Errors
///
/// Returns an error when the terminal cannot be set up or a theme
/// directory scan fails mid-session. The terminal is restored on both
/// paths.
pub fn run() -> Result<(), ThemeError> {
    let mut app = App::new()?;
    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<(), ThemeError> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => break,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
            KeyCode::Char('r') => app.refresh()?,
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Enter => apply_selected(terminal, app)?,
            _ => {}
        }
    }
    Ok(())
}

/// Apply the highlighted theme via the external CLI, updating the status
/// line with the outcome. A missing CLI or empty selection is reported,
/// never fatal.
fn apply_selected(terminal: &mut DefaultTerminal, app: &mut App) -> Result<(), ThemeError> {
    let Some(theme) = app.selected_name().map(str::to_owned) else {
        return Ok(());
    };
    let Some(cli) = discovery::find_theme_cli() else {
        app.status = format!("{THEME_CLI_NAME} not found. Run 'make install' first.");
        return Ok(());
    };
    app.status = format!("Applying '{theme}'...");
    terminal.draw(|frame| draw(frame, app))?;
    app.status = apply_theme(&cli, &theme);
    Ok(())
}

/// Invoke the theme CLI with the theme name as its sole argument and
/// render the outcome as a status line.
fn apply_theme(cli: &Path, theme: &str) -> String {
    match exec::run_unchecked(&cli.to_string_lossy(), &[theme]) {
        Ok(result) if result.success => format!("Applied '{theme}'."),
        Ok(result) => {
            let stderr = result.stderr.trim();
            let stdout = result.stdout.trim();
            let detail = if stderr.is_empty() && stdout.is_empty() {
                result
                    .code
                    .map_or_else(|| "terminated by signal".to_owned(), |code| code.to_string())
            } else if stderr.is_empty() {
                stdout.to_owned()
            } else {
                stderr.to_owned()
            };
            format!("Failed to apply '{theme}': {detail}")
        }
        Err(err) => format!("Failed to apply '{theme}': {err:#}"),
    }
}

fn draw(frame: &mut Frame, app: &mut App) {
    let [path_area, list_area, summary_area, status_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let path_text = app.active_dir().map_or_else(
        || format!("No theme directory found. Set {THEMES_DIR_ENV} or run 'make install'."),
        |dir| format!("Themes directory: {}", dir.display()),
    );
    frame.render_widget(
        Paragraph::new(path_text).style(Style::default().fg(Color::DarkGray)),
        path_area,
    );

    let items: Vec<ListItem> = app
        .names
        .iter()
        .map(|name| ListItem::new(name.as_str()))
        .collect();
    let list = List::new(items)
        .block(Block::default().title("Themes").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_stateful_widget(list, list_area, &mut app.list_state);

    frame.render_widget(
        Paragraph::new(app.manifest_summary()).style(Style::default().fg(Color::DarkGray)),
        summary_area,
    );

    frame.render_widget(
        Paragraph::new(app.status.as_str()).block(Block::default().borders(Borders::ALL)),
        status_area,
    );

    frame.render_widget(
        Paragraph::new("↑/↓: Select | Enter: Apply | r: Refresh | q: Quit")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        footer_area,
    );
}

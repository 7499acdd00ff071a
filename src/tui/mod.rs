// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Interactive terminal viewer.
//!
//! The canvas stands in for the deep-zoom viewer: image frames, the highlight overlay and the
//! camera are drawn in world coordinates. Camera keys move the [`TerminalViewer`] directly and
//! report animation frames; the gesture finishes (and commits) once keys stop arriving.

use std::error::Error;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    symbols,
    widgets::canvas::{Canvas, Rectangle},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tracing::{debug, warn};

use crate::format::encode_text;
use crate::history::MemoryHistory;
use crate::model::{Exhibit, Rect as WorldRect, Viewport};
use crate::nav::NavError;
use crate::navigator::Navigator;
use crate::render::{
    arrange_layout, ChannelMark, GroupVisibility, ImagePlacement, Marker, StoryPanel,
    HIGHLIGHT_OVERLAY_ID,
};
use crate::render::channels::NEUTRAL_MARKER_COLOR;
use crate::store::{parse_exhibit_yaml, StoreError};

mod viewer;

use viewer::TerminalViewer;

include!("chrome.rs");

const DEMO_EXHIBIT: &str = include_str!("../../data/demo-exhibit.yaml");
const WINDOW_TITLE: &str = "Vitrine";
const TOAST_DURATION: Duration = Duration::from_secs(2);
/// Quiet time after the last camera key before the gesture is committed.
const GESTURE_SETTLE: Duration = Duration::from_millis(400);
const PAN_STEP: f64 = 0.1;
const ZOOM_STEP: f64 = 1.25;

const TAB_ACTIVE_COLOR: Color = Color::Yellow;
const FRAME_COLOR: Color = Color::DarkGray;
const HIGHLIGHT_FALLBACK_COLOR: Color = Color::Yellow;
const FOOTER_KEY_COLOR: Color = Color::Yellow;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_BRAND_COLOR: Color = Color::DarkGray;
const FOOTER_BRAND: &str = " vitrine ";

pub fn run(exhibit: Exhibit, address: String) -> Result<(), Box<dyn Error>> {
    let mut app = App::new(exhibit, address)?;
    let mut terminal = TerminalSession::new()?;

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &app))?;
        app.tick(Instant::now());

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                _ => {}
            }
        }
    }

    Ok(())
}

/// The bundled demo exhibit.
pub fn demo_exhibit() -> Result<Exhibit, StoreError> {
    parse_exhibit_yaml(DEMO_EXHIBIT, Path::new("data/demo-exhibit.yaml"))
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    navigator: Navigator<MemoryHistory, TerminalViewer>,
    placements: Vec<ImagePlacement>,
    show_help: bool,
    toast: Option<Toast>,
    /// Tag note being typed, if the prompt is open.
    prompt: Option<String>,
    gesture_until: Option<Instant>,
    should_quit: bool,
}

impl App {
    fn new(exhibit: Exhibit, address: String) -> Result<Self, NavError> {
        let placements = match arrange_layout(&exhibit.layout, &exhibit.images) {
            Ok(placements) => placements,
            Err(err) => {
                warn!(error = %err, "image layout unavailable; drawing without image frames");
                Vec::new()
            }
        };
        let history = MemoryHistory::new(address, WINDOW_TITLE);
        let mut navigator = Navigator::new(exhibit, history, TerminalViewer::new())?;
        navigator.init();

        Ok(Self {
            navigator,
            placements,
            show_help: false,
            toast: None,
            prompt: None,
            gesture_until: None,
            should_quit: false,
        })
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast { message: message.into(), expires_at: Instant::now() + TOAST_DURATION });
    }

    fn toast_message(&self) -> Option<&str> {
        self.toast.as_ref().map(|toast| toast.message.as_str())
    }

    /// Expires the toast and finishes a settled camera gesture.
    fn tick(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| now >= toast.expires_at) {
            self.toast = None;
        }
        if self.gesture_until.is_some_and(|until| now >= until) {
            self.finish_gesture();
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key.code);
            return;
        }
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    /// Returns `true` when the app should quit.
    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        if self.show_help {
            match code {
                KeyCode::Char('q') => return true,
                KeyCode::Char('?') | KeyCode::Esc => self.show_help = false,
                _ => {}
            }
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Right | KeyCode::Char('n') | KeyCode::Char(' ') => self.step(1),
            KeyCode::Left | KeyCode::Char('p') => self.step(-1),
            KeyCode::Char(']') => self.select_story(1),
            KeyCode::Char('[') => self.select_story(-1),
            KeyCode::Char('i') => {
                self.finish_gesture();
                self.navigator.help();
            }
            KeyCode::Char(digit @ '1'..='9') => {
                let group = i64::from(digit as u8 - b'1');
                if group as usize >= self.navigator.store().groups().len() {
                    self.set_toast(format!("No group {digit}"));
                } else {
                    self.finish_gesture();
                    self.navigator.select_group(group);
                }
            }
            KeyCode::Char('h') => self.camera(|viewer| viewer.pan_by(-PAN_STEP, 0.0)),
            KeyCode::Char('l') => self.camera(|viewer| viewer.pan_by(PAN_STEP, 0.0)),
            KeyCode::Char('k') => self.camera(|viewer| viewer.pan_by(0.0, -PAN_STEP)),
            KeyCode::Char('j') => self.camera(|viewer| viewer.pan_by(0.0, PAN_STEP)),
            KeyCode::Char('+') | KeyCode::Char('=') => self.camera(|viewer| viewer.zoom_by(ZOOM_STEP)),
            KeyCode::Char('-') => self.camera(|viewer| viewer.zoom_by(1.0 / ZOOM_STEP)),
            KeyCode::Char('b') => {
                self.finish_gesture();
                if !self.navigator.go_back() {
                    self.set_toast("Start of history");
                }
            }
            KeyCode::Char('f') => {
                self.finish_gesture();
                if !self.navigator.go_forward() {
                    self.set_toast("End of history");
                }
            }
            KeyCode::Char('t') => {
                self.finish_gesture();
                self.prompt = Some(String::new());
            }
            KeyCode::Char('y') => {
                let address = self.navigator.address();
                self.yank(&address, "address");
            }
            KeyCode::Char('Y') => {
                let address = self.navigator.tag_address();
                self.yank(&address, "tag address");
            }
            _ => {}
        }
        false
    }

    fn handle_prompt_key(&mut self, code: KeyCode) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc => self.prompt = None,
            KeyCode::Enter => {
                let note = std::mem::take(prompt);
                self.create_tag(&note);
            }
            KeyCode::Backspace => {
                prompt.pop();
            }
            KeyCode::Char(ch) => prompt.push(ch),
            _ => {}
        }
    }

    /// Opens the current view as a tag carrying `note`.
    fn create_tag(&mut self, note: &str) {
        self.navigator.store_mut().set_description(encode_text(note));
        let address = self.navigator.tag_address();
        let outcome = self.navigator.open_address(address);
        if outcome.close_transient {
            self.prompt = None;
        }
        self.set_toast("Tagged the current view");
    }

    fn step(&mut self, delta: i64) {
        self.finish_gesture();
        self.navigator.step(delta);
    }

    fn select_story(&mut self, delta: i64) {
        self.finish_gesture();
        let target = self.navigator.store().story_index() as i64 + delta;
        self.navigator.select_story(target);
    }

    fn camera(&mut self, gesture: impl FnOnce(&mut TerminalViewer)) {
        gesture(self.navigator.viewer_mut());
        self.navigator.on_animation();
        self.gesture_until = Some(Instant::now() + GESTURE_SETTLE);
    }

    fn finish_gesture(&mut self) {
        if self.gesture_until.take().is_some() {
            self.navigator.on_animation_finish();
        }
    }

    fn yank(&mut self, text: &str, label: &str) {
        match copy_to_clipboard(text) {
            Ok(method) => self.set_toast(format!("Copied {label} ({method})")),
            Err(err) => self.set_toast(format!("Copy failed: {err}")),
        }
    }
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let panes = split_panes(frame.size());
    let viewer = app.navigator.viewer();

    draw_canvas(frame, panes.canvas, app);

    let tabs = Paragraph::new(group_tabs_line(viewer.groups()))
        .block(Block::default().borders(Borders::ALL).title(view_title("Groups", None)));
    frame.render_widget(tabs, panes.tabs);

    let (story_title, story_text) = match viewer.panel() {
        Some(panel) => (
            view_title(&panel.story_name, Some(&counter_label(panel.story_index, panel.story_count))),
            story_lines(panel),
        ),
        None => (view_title("Story", None), Vec::new()),
    };
    let story = Paragraph::new(Text::from(story_text))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(story_title));
    frame.render_widget(story, panes.story);

    let footer = match app.prompt.as_deref() {
        Some(prompt) => prompt_line(prompt),
        None => {
            let toast = app.toast_message().map(|message| format!("  {message}")).unwrap_or_default();
            let mut line = footer_help_line(&toast, panes.footer.width < 100);
            line.spans.extend(footer_brand_line().spans);
            line
        }
    };
    frame.render_widget(Paragraph::new(footer), panes.footer);
    if let Some(prompt) = app.prompt.as_deref() {
        let x = panes.footer.x + " Tag note: ".len() as u16 + prompt.chars().count() as u16;
        frame.set_cursor(x.min(panes.footer.right().saturating_sub(1)), panes.footer.y);
    }

    if app.show_help {
        render_help(frame, frame.size());
    }
}

fn draw_canvas(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let viewer = app.navigator.viewer();
    let viewport: Viewport = viewer.viewport();
    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);
    let (x_bounds, y_bounds) = canvas_bounds(viewport, inner_width, inner_height);
    let highlight_color = viewer
        .active_group()
        .and_then(|group| {
            let store = app.navigator.store();
            store.groups().iter().find(|known| known.path == group.path)
        })
        .and_then(|group| group.colors.first())
        .and_then(|color| hex_color(color))
        .unwrap_or(HIGHLIGHT_FALLBACK_COLOR);

    let title = view_title(
        "Canvas",
        Some(&format!("zoom {:.2} @ {:.3},{:.3}", viewport.zoom, viewport.pan.x, viewport.pan.y)),
    );
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .marker(symbols::Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for placement in &app.placements {
                ctx.draw(&canvas_rectangle(placement.bounds, FRAME_COLOR));
                ctx.print(
                    placement.bounds.x,
                    -placement.bounds.y,
                    Line::styled(placement.name.clone(), Style::default().fg(FRAME_COLOR)),
                );
            }
            ctx.layer();
            for (id, bounds) in viewer.overlays() {
                if id == HIGHLIGHT_OVERLAY_ID && bounds.width > 0.0 && bounds.height > 0.0 {
                    ctx.draw(&canvas_rectangle(bounds, highlight_color));
                }
            }
        });
    frame.render_widget(canvas, area);
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        debug!("terminal session started");
        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

fn copy_to_clipboard(text: &str) -> Result<&'static str, String> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text))).map_err(|err| err.to_string())?;
    Ok("osc52")
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

#[cfg(test)]
mod tests;

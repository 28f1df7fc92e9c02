// App state and main event loop.
// Routes keyboard input to the controls the settings controller rendered.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;
use subtabs::{ACTIVE_CLASS, Element, Result, SubTabController, ui};
use tracing::debug;

use crate::host::FileBackedPlugin;
use crate::tabs::{DemoSettings, DemoTab};

type Controller = SubTabController<DemoSettings, DemoTab, FileBackedPlugin<DemoSettings>>;

/// Main application state.
pub struct App {
    controller: Controller,
    /// Index into the active sub-tab's controls.
    focus: usize,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            focus: 0,
            should_quit: false,
        }
    }

    /// Main event loop.
    pub async fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        self.controller.display()?;

        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
            // Let background saves make progress.
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    fn root(&self) -> &Element {
        self.controller.container()
    }

    fn draw(&self, frame: &mut Frame) {
        ui::draw(
            frame,
            self.root(),
            "settings",
            Some(self.focus),
            &self.status(),
        );
    }

    fn status(&self) -> String {
        match self.controller.plugin().saved_at() {
            Some(saved_at) => format!("Saved {}", ui::format_relative_time(&saved_at)),
            None => "Not saved yet".to_string(),
        }
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code)?;
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right => self.switch_tab(1),
            KeyCode::BackTab | KeyCode::Left => self.switch_tab(-1),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(control) = ui::navigation_controls(self.root()).get(index) {
                    control.click();
                    self.focus = 0;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.focus = self.focus.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                let count = ui::content_controls(self.root()).len();
                self.focus = (self.focus + 1).min(count.saturating_sub(1));
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused()?,
            _ => {}
        }
        Ok(())
    }

    /// Click the navigation control `step` positions away from the active one.
    fn switch_tab(&mut self, step: isize) {
        let controls = ui::navigation_controls(self.root());
        if controls.is_empty() {
            return;
        }

        let active = controls
            .iter()
            .position(|c| c.has_class(ACTIVE_CLASS))
            .unwrap_or(0);
        let target = (active as isize + step).rem_euclid(controls.len() as isize) as usize;

        controls[target].click();
        self.focus = 0;
    }

    /// Click the focused content control and redraw the page with the new values.
    fn activate_focused(&mut self) -> Result<()> {
        let controls = ui::content_controls(self.root());
        if let Some(control) = controls.get(self.focus) {
            debug!(control = %control.text(), "activating setting control");
            control.click();
            self.controller.display()?;
        }
        Ok(())
    }
}
